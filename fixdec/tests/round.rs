use fixdec::{Decimal128, Decimal256};

fn d128(s: &str) -> Decimal128 {
    s.parse().unwrap()
}

fn d256(s: &str) -> Decimal256 {
    s.parse().unwrap()
}

#[test]
fn bankers_rounding() {
    assert_eq!(d256("1.25").round(1).to_string(), "1.2");
    assert_eq!(d256("1.35").round(1).to_string(), "1.4");
    assert_eq!(d128("1.25").round(1).to_string(), "1.2");
    assert_eq!(d128("1.35").round(1).to_string(), "1.4");
    // past the halfway point the even rule does not apply
    assert_eq!(d128("1.251").round(1).to_string(), "1.3");
    assert_eq!(d128("1.249").round(1).to_string(), "1.2");
    // ties on negatives follow the magnitude
    assert_eq!(d128("-1.25").round(1).to_string(), "-1.2");
    assert_eq!(d128("-1.35").round(1).to_string(), "-1.4");
    // integer positions
    assert_eq!(d128("125").round(-1).to_string(), "120");
    assert_eq!(d128("135").round(-1).to_string(), "140");
}

#[test]
fn away_from_zero() {
    assert_eq!(d256("1.21").round_away_from_zero(1).to_string(), "1.3");
    assert_eq!(d256("-1.21").round_away_from_zero(1).to_string(), "-1.3");
    assert_eq!(d128("1.20").round_away_from_zero(1).to_string(), "1.2");
}

#[test]
fn truncate_and_alias() {
    let x = d128("123.456");
    assert_eq!(x.truncate(1).to_string(), "123.4");
    assert_eq!(x.truncate(-1).to_string(), "120");
    assert_eq!(x.truncate(0).to_string(), "123");
    assert_eq!(x.round_toward_zero(1), x.truncate(1));
    assert_eq!(d128("-123.456").truncate(1).to_string(), "-123.4");
}

#[test]
fn ceil_and_floor() {
    assert_eq!(d128("1.21").ceil(1).to_string(), "1.3");
    assert_eq!(d128("1.21").floor(1).to_string(), "1.2");
    assert_eq!(d128("-1.21").ceil(1).to_string(), "-1.2");
    assert_eq!(d128("-1.21").floor(1).to_string(), "-1.3");
    // exact positions do not move
    assert_eq!(d128("1.2").ceil(1).to_string(), "1.2");
    assert_eq!(d128("-1.2").floor(1).to_string(), "-1.2");
}

#[test]
fn position_clamps() {
    let x = d128("123.456");
    // above the scale: unchanged, for every mode
    assert_eq!(x.truncate(17), x);
    assert_eq!(x.round(17), x);
    assert_eq!(x.round_away_from_zero(17), x);
    assert_eq!(x.round_toward_zero(17), x);
    assert_eq!(x.ceil(17), x);
    assert_eq!(x.floor(17), x);
    // at or below the negated scale: zero, for every mode
    assert!(x.truncate(-16).is_zero());
    assert!(x.round(-16).is_zero());
    assert!(x.round_away_from_zero(-16).is_zero());
    assert!(x.round_toward_zero(-16).is_zero());
    assert!(x.ceil(-16).is_zero());
    assert!(x.floor(-16).is_zero());
    assert!(x.truncate(-100).is_zero());
    // the 256 width clamps at its own scale
    let y = d256("123.456");
    assert_eq!(y.truncate(33), y);
    assert!(y.truncate(-32).is_zero());
}

#[test]
fn truncate_monotonicity() {
    let x = d128("123.456789");
    let mut prev = Decimal128::ZERO;
    for n in -3..=16 {
        let t = x.truncate(n).abs();
        assert!(prev <= t);
        assert!(t <= x.abs());
        prev = t;
    }
}

#[test]
fn digit_shift() {
    assert_eq!(d128("1.5").shift(3).to_string(), "1500");
    assert_eq!(d128("150").shift(-2).to_string(), "1.5");
    assert_eq!(d128("-1.5").shift(2).to_string(), "-150");
    assert_eq!(d128("1.5").shift(0).to_string(), "1.5");
    // truncating on the way down
    assert_eq!(d128("123").shift(-2).to_string(), "1.23");
    assert_eq!(d128("0.15").shift(-1).to_string(), "0.015");
    // shared clamps
    assert_eq!(d128("1.5").shift(17), d128("1.5"));
    assert!(d128("1.5").shift(-16).is_zero());
    // shift inverse within range
    let x = d128("12.34");
    assert_eq!(x.shift(3).shift(-3), x);
    assert_eq!(x.shift(-3).shift(3), x);
}
