//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use galext::{
    Automorphism, CorrespondenceReport, ExtElement, GaloisCorrespondence, Poly, PolyRing,
    PrimeField, Ring, GF,
};

#[test]
fn prime_field_roundtrip() {
    let f = PrimeField::new(17).unwrap();
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, r#"{"p":17}"#);
    let g: PrimeField = serde_json::from_str(&json).unwrap();
    assert_eq!(f, g);
}

#[test]
fn prime_field_rejects_invalid_modulus() {
    assert!(serde_json::from_str::<PrimeField>(r#"{"p":4}"#).is_err());
    assert!(serde_json::from_str::<PrimeField>(r#"{"p":0}"#).is_err());
    assert!(serde_json::from_str::<PrimeField>(r#"{"p":1}"#).is_err());

    let err = serde_json::from_str::<PrimeField>(r#"{"p":4}"#).unwrap_err();
    assert!(err.to_string().contains('4'));
}

#[test]
fn poly_roundtrip() {
    // 3 + 2x + x^2
    let ring = PolyRing::new(PrimeField::new(17).unwrap());
    let p = ring.poly(vec![3, 2, 1]);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[3,2,1]");
    let q: Poly<u64> = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn poly_zero_roundtrip() {
    let p = Poly::<u64>::zero();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[]");
    let q: Poly<u64> = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn deserialized_poly_can_be_recanonicalized() {
    let ring = PolyRing::new(PrimeField::new(5).unwrap());
    let raw: Poly<u64> = serde_json::from_str("[1,2,0,0]").unwrap();
    assert_eq!(raw.degree(), Some(3));
    let p = ring.canonical(raw);
    assert_eq!(p.degree(), Some(1));
}

#[test]
fn deserialized_element_can_be_normalized() {
    let gf9 = GF::new(3, 2).unwrap();
    let raw: ExtElement<u64> = serde_json::from_str("[5,1,0]").unwrap();
    assert_ne!(raw, gf9.element(&[2, 1]));
    assert_eq!(gf9.normalize(raw), gf9.element(&[2, 1]));
}

#[test]
fn ext_element_roundtrip() {
    let gf9 = GF::new(3, 2).unwrap();
    let a = gf9.element(&[2, 1]);
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "[2,1]");
    let b: ExtElement<u64> = serde_json::from_str(&json).unwrap();
    assert_eq!(a, b);
}

#[test]
fn automorphism_roundtrip() {
    let gf8 = GF::new(2, 3).unwrap();
    let frob = gf8.frobenius_automorphism();
    let json = serde_json::to_string(&frob).unwrap();
    // α ↦ α^2
    assert_eq!(json, r#"{"image":[0,0,1]}"#);
    let back: Automorphism<u64> = serde_json::from_str(&json).unwrap();
    assert_eq!(frob, back);
}

#[test]
fn correspondence_report_roundtrip() {
    let gf16 = GF::new(2, 4).unwrap();
    let group = gf16.galois_group().unwrap();
    let report = GaloisCorrespondence::new(&group).verify().unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("index_degree_law_holds"));
    assert!(json.contains("fixed_field"));

    let back: CorrespondenceReport<u64> = serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);
    assert!(back.is_valid());
}
