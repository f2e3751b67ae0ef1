#![cfg(feature = "serde_support")]

use fixdec::{Decimal128, Decimal256, Decimal512};

fn d128(s: &str) -> Decimal128 {
    s.parse().unwrap()
}

#[test]
fn json_output_is_quoted_canonical_string() {
    assert_eq!(serde_json::to_string(&d128("123.45")).unwrap(), "\"123.45\"");
    assert_eq!(serde_json::to_string(&d128("-0.5")).unwrap(), "\"-0.5\"");
    assert_eq!(serde_json::to_string(&d128("1.500")).unwrap(), "\"1.5\"");
    assert_eq!(serde_json::to_string(&Decimal128::ZERO).unwrap(), "\"0\"");
    let y: Decimal512 = "9.25".parse().unwrap();
    assert_eq!(serde_json::to_string(&y).unwrap(), "\"9.25\"");
}

#[test]
fn json_input_accepts_strings_and_bare_numbers() {
    let x: Decimal128 = serde_json::from_str("\"123.45\"").unwrap();
    assert_eq!(x, d128("123.45"));
    // bare numbers lex to the same values as their quoted forms
    let x: Decimal128 = serde_json::from_str("123.45").unwrap();
    assert_eq!(x, d128("123.45"));
    let x: Decimal128 = serde_json::from_str("5").unwrap();
    assert_eq!(x, d128("5"));
    let x: Decimal128 = serde_json::from_str("-7").unwrap();
    assert_eq!(x, d128("-7"));
    let x: Decimal128 = serde_json::from_str("1.5e2").unwrap();
    assert_eq!(x, d128("150"));
    let x: Decimal256 = serde_json::from_str("\"-0.000001\"").unwrap();
    assert_eq!(x.to_string(), "-0.000001");
}

#[test]
fn json_round_trip() {
    for s in ["0", "1.5", "-123.456", "9999999999999999.9999999999999999"] {
        let x = d128(s);
        let json = serde_json::to_string(&x).unwrap();
        let y: Decimal128 = serde_json::from_str(&json).unwrap();
        assert_eq!(x, y);
    }
    // the bare form of the canonical string lexes identically while the
    // value stays inside the float-exact digit range
    for s in ["0", "1.5", "-123.456", "98765.4321"] {
        let x = d128(s);
        let bare: Decimal128 = serde_json::from_str(s).unwrap();
        assert_eq!(x, bare);
    }
}

#[test]
fn json_errors() {
    assert!(serde_json::from_str::<Decimal128>("\"bad\"").is_err());
    assert!(serde_json::from_str::<Decimal128>("\"\"").is_err());
    assert!(serde_json::from_str::<Decimal128>("\"1.2.3\"").is_err());
    assert!(serde_json::from_str::<Decimal128>("{}").is_err());
    assert!(serde_json::from_str::<Decimal128>("true").is_err());
    assert!(serde_json::from_str::<Decimal256>("\"12x\"").is_err());
    assert!(serde_json::from_str::<Decimal512>("[1]").is_err());
}

#[test]
fn embedded_in_structs() {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Order {
        price: Decimal128,
        qty: Decimal256,
    }

    let order = Order {
        price: d128("19.99"),
        qty: "2.5".parse().unwrap(),
    };
    let json = serde_json::to_string(&order).unwrap();
    assert_eq!(json, "{\"price\":\"19.99\",\"qty\":\"2.5\"}");
    let back: Order = serde_json::from_str(&json).unwrap();
    assert_eq!(back, order);
}
