use fixdec::{Decimal128, Decimal256, Decimal512};

fn d128(s: &str) -> Decimal128 {
    s.parse().unwrap()
}

fn d256(s: &str) -> Decimal256 {
    s.parse().unwrap()
}

fn d512(s: &str) -> Decimal512 {
    s.parse().unwrap()
}

fn close128(a: Decimal128, b: Decimal128, eps: &str) {
    assert!((a - b).abs() < d128(eps), "{a} !~ {b}");
}

fn close256(a: Decimal256, b: Decimal256, eps: &str) {
    assert!((a - b).abs() < d256(eps), "{a} !~ {b}");
}

#[test]
fn integer_powers() {
    assert_eq!(d128("2").pow(d128("3")).to_string(), "8");
    assert_eq!(d128("2").pow(d128("-3")).to_string(), "0.125");
    assert_eq!(d256("2").pow(d256("3")).to_string(), "8");
    assert_eq!(d256("2").pow(d256("-3")).to_string(), "0.125");
    assert_eq!(d512("2").pow(d512("-3")).to_string(), "0.125");
    assert_eq!(d128("10").pow(d128("15")).to_string(), "1000000000000000");
    assert_eq!(d128("-2").pow(d128("3")).to_string(), "-8");
    assert_eq!(d128("-2").pow(d128("2")).to_string(), "4");
    // anything to the zeroth power is one, including zero
    assert_eq!(d128("7.5").pow(Decimal128::ZERO), Decimal128::ONE);
    assert_eq!(Decimal128::ZERO.pow(Decimal128::ZERO), Decimal128::ONE);
    // a fractional exponent is truncated toward zero
    assert_eq!(d128("2").pow(d128("3.7")).to_string(), "8");
    assert_eq!(d128("2").pow(d128("-3.7")).to_string(), "0.125");
}

#[test]
fn square_roots() {
    assert_eq!(d128("4").sqrt().to_string(), "2");
    assert_eq!(d128("9").sqrt().to_string(), "3");
    assert_eq!(d128("0.0001").sqrt().to_string(), "0.01");
    assert_eq!(d256("4").sqrt().to_string(), "2");
    assert_eq!(d512("4").sqrt().to_string(), "2");
    assert!(Decimal128::ZERO.sqrt().is_zero());
    // negative inputs pass through unchanged
    assert_eq!(d128("-4").sqrt().to_string(), "-4");
    assert_eq!(d512("-4").sqrt().to_string(), "-4");
    // irrational results carry the scale, truncated
    assert_eq!(d128("2").sqrt().to_string(), "1.414213562373095");
    let r = d256("2").sqrt();
    close256(r * r, d256("2"), "0.000000000000000000000000000001");
}

#[test]
fn exponential() {
    assert_eq!(Decimal128::ZERO.exp(), Decimal128::ONE);
    assert_eq!(Decimal256::ZERO.exp(), Decimal256::ONE);
    assert_eq!(Decimal512::ZERO.exp(), Decimal512::ONE);
    close128(d128("1").exp(), d128("2.7182818284590452"), "0.00000000000001");
    close128(d128("-1").exp(), d128("0.3678794411714423"), "0.00000000000001");
    close128(d128("2").exp(), d128("7.3890560989306495"), "0.0000000000001");
    close256(
        d256("1").exp(),
        d256("2.71828182845904523536028747135266"),
        "0.0000000000000000000000000001",
    );
}

#[test]
fn logarithms() {
    assert_eq!(d128("1").ln().to_string(), "0");
    assert_eq!(d128("1").log2().to_string(), "0");
    assert_eq!(d128("1").log10().to_string(), "0");
    // powers of two reduce exactly onto the stored ln 2
    assert_eq!(d128("2").ln().to_string(), "0.6931471805599453");
    assert_eq!(d128("4").ln().to_string(), "1.3862943611198906");
    assert_eq!(d128("4").log2().to_string(), "2");
    assert_eq!(d256("8").log2().to_string(), "3");
    close128(d128("10").ln(), d128("2.3025850929940457"), "0.00000000000001");
    close128(d128("100").log10(), d128("2"), "0.00000000000001");
    close128(d128("0.5").ln(), -d128("0.6931471805599453"), "0.00000000000001");
    // non-positive inputs pass through unchanged
    assert_eq!(Decimal128::ZERO.ln(), Decimal128::ZERO);
    assert_eq!(d128("-3").ln().to_string(), "-3");
    assert_eq!(d128("-3").log2().to_string(), "-3");
    assert_eq!(d128("-3").log10().to_string(), "-3");
}

#[test]
fn exp_ln_round_trip() {
    for s in ["0.5", "1.5", "3", "10"] {
        let x = d128(s);
        close128(x.ln().exp(), x, "0.000000000001");
    }
}
