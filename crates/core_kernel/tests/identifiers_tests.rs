//! Tests for claim reference validation

use core_kernel::ClaimRef;
use std::str::FromStr;

#[test]
fn test_claim_ref_accepts_plain_identifier() {
    let claim = ClaimRef::new("756a5b8c-1234-4cde-9f00-aabbccddeeff").unwrap();
    assert_eq!(claim.as_str(), "756a5b8c-1234-4cde-9f00-aabbccddeeff");
}

#[test]
fn test_claim_ref_trims_whitespace() {
    let claim = ClaimRef::new("  claim-42\t\n").unwrap();
    assert_eq!(claim.as_str(), "claim-42");
}

#[test]
fn test_claim_ref_rejects_empty() {
    assert!(ClaimRef::new("").is_none());
}

#[test]
fn test_claim_ref_rejects_whitespace_only() {
    assert!(ClaimRef::new("   \t\n  ").is_none());
}

#[test]
fn test_claim_ref_preserves_interior_whitespace() {
    // Only surrounding whitespace is stripped; the provider owns the format.
    let claim = ClaimRef::new(" a b ").unwrap();
    assert_eq!(claim.as_str(), "a b");
}

#[test]
fn test_claim_ref_from_str() {
    let claim = ClaimRef::from_str(" claim-7 ").unwrap();
    assert_eq!(claim.as_str(), "claim-7");

    assert!(ClaimRef::from_str("  ").is_err());
}

#[test]
fn test_claim_ref_display() {
    let claim = ClaimRef::new("claim-9").unwrap();
    assert_eq!(format!("{}", claim), "claim-9");
}

#[test]
fn test_claim_ref_serde_transparent() {
    let claim = ClaimRef::new("claim-1").unwrap();
    let json = serde_json::to_string(&claim).unwrap();
    assert_eq!(json, "\"claim-1\"");

    let parsed: ClaimRef = serde_json::from_str("\"claim-2\"").unwrap();
    assert_eq!(parsed.as_str(), "claim-2");
}
