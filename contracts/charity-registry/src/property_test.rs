//! # Property-Based Tests for the Charity Registry
//!
//! The text and code rules in [`crate::validation`] and [`crate::types`]
//! work on plain byte slices, so they are exercised with `proptest!`.
//!
//! Properties that need a Soroban [`Env`] use the parametric pattern
//! instead: a fixed input matrix iterated inside one `#[test]`, with a fresh
//! registry per case where state must not leak between cases.
//!
//! | Invariant                                                               | Section |
//! |-------------------------------------------------------------------------|---------|
//! | A text rule accepts exactly the strings whose char count is in range    | §A      |
//! | Invalid UTF-8 is never accepted                                         | §A      |
//! | Only the exact currency / charity-type codes parse                      | §A      |
//! | Every stored charity's name maps back to its id, and nothing else does  | §B      |
//! | Failed registrations never change the count or the index                | §C      |

extern crate std;

use proptest::prelude::*;
use std::string::String as StdString;
use std::vec::Vec as StdVec;

use crate::test::RegistryTest;
use crate::types::{CharityType, Currency};
use crate::validation::{
    char_count, TextRule, CATEGORY_RULE, CONTACT_INFO_RULE, DESCRIPTION_RULE, LOCATION_RULE,
    NAME_RULE,
};
use crate::RegistryError;

const ALL_RULES: [TextRule; 5] = [
    NAME_RULE,
    DESCRIPTION_RULE,
    CATEGORY_RULE,
    LOCATION_RULE,
    CONTACT_INFO_RULE,
];

fn in_range(rule: TextRule, n: usize) -> bool {
    n >= rule.min_chars as usize && n <= rule.max_chars as usize
}

// ════════════════════════════════════════════════════════════════════
//  §A  Pure rules
// ════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_ascii_text_rule_matches_length(s in "[ -~]{0,600}") {
        for rule in ALL_RULES {
            prop_assert_eq!(rule.accepts_bytes(s.as_bytes()), in_range(rule, s.len()));
        }
    }

    #[test]
    fn prop_unicode_text_rule_counts_chars(s in "\\PC{0,250}") {
        let chars = s.chars().count();
        prop_assert_eq!(char_count(s.as_bytes()), Some(chars as u32));
        for rule in ALL_RULES {
            prop_assert_eq!(rule.accepts_bytes(s.as_bytes()), in_range(rule, chars));
        }
    }

    #[test]
    fn prop_invalid_utf8_rejected(prefix in "[a-z]{0,20}", suffix in "[a-z]{0,20}") {
        let mut bytes: StdVec<u8> = prefix.into_bytes();
        bytes.push(0xFF);
        bytes.extend_from_slice(suffix.as_bytes());
        prop_assert_eq!(char_count(&bytes), None);
        for rule in ALL_RULES {
            prop_assert!(!rule.accepts_bytes(&bytes));
        }
    }

    #[test]
    fn prop_only_exact_currency_codes_parse(code in "[A-Za-z]{0,5}") {
        let expected = match code.as_str() {
            "STX" => Some(Currency::Stx),
            "USD" => Some(Currency::Usd),
            "BTC" => Some(Currency::Btc),
            _ => None,
        };
        prop_assert_eq!(Currency::from_code(code.as_bytes()), expected);
    }

    #[test]
    fn prop_only_exact_charity_type_codes_parse(code in "[a-z-]{0,14}") {
        let expected = match code.as_str() {
            "non-profit" => Some(CharityType::NonProfit),
            "community" => Some(CharityType::Community),
            "environmental" => Some(CharityType::Environmental),
            _ => None,
        };
        prop_assert_eq!(CharityType::from_code(code.as_bytes()), expected);
    }
}

// ════════════════════════════════════════════════════════════════════
//  §B  Name index consistency
// ════════════════════════════════════════════════════════════════════

#[test]
fn name_index_tracks_records_through_renames() {
    let t = RegistryTest::new();
    t.bind_authority();

    let names = ["Alpha", "Beta", "Gamma", "Delta"];
    for name in names {
        t.register(name);
    }

    // (id, new name) renames, including a no-op and a swap through a free name.
    let renames: [(u32, &str); 5] = [
        (0, "Alpha"),
        (1, "Bravo"),
        (2, "Beta"),
        (1, "Gamma"),
        (3, "Echo"),
    ];
    for (id, new_name) in renames {
        t.client
            .update_charity(&t.caller, &id, &t.text(new_name), &t.text("Renamed"));
    }

    let mut live: StdVec<StdString> = StdVec::new();
    for id in 0..t.client.get_charity_count() {
        let charity = t.client.get_charity(&id).unwrap();
        assert_eq!(t.client.get_charity_id_by_name(&charity.name), Some(id));
        let mut buf = [0u8; 100];
        let len = charity.name.len() as usize;
        charity.name.copy_into_slice(&mut buf[..len]);
        live.push(StdString::from_utf8(buf[..len].to_vec()).unwrap());
    }

    for candidate in ["Alpha", "Beta", "Gamma", "Delta", "Bravo", "Echo"] {
        let indexed = t.client.check_charity_existence(&t.text(candidate));
        assert_eq!(indexed, live.iter().any(|n| n == candidate), "{candidate}");
    }
}

// ════════════════════════════════════════════════════════════════════
//  §C  Failed registrations leave no trace
// ════════════════════════════════════════════════════════════════════

#[test]
fn failed_registrations_leave_state_unchanged() {
    let long_name: StdString = core::iter::repeat('n').take(101).collect();

    let t = RegistryTest::new();
    let authority = t.bind_authority();
    t.register("Existing");

    let cases: [(&str, fn(&RegistryTest, &mut crate::CharityRegistration), RegistryError); 7] = [
        ("", |_, _| {}, RegistryError::InvalidName),
        ("Fresh", |t, r| r.description = t.text(""), RegistryError::InvalidDescription),
        (
            "Fresh",
            |t, r| r.proof_hash = soroban_sdk::Bytes::from_array(&t.env, &[1u8; 31]),
            RegistryError::InvalidProofHash,
        ),
        ("Fresh", |t, r| r.currency = t.text("EUR"), RegistryError::InvalidCurrency),
        ("Fresh", |_, r| r.min_donation = 0, RegistryError::InvalidMinDonation),
        ("Fresh", |t, r| r.charity_type = t.text("invalid"), RegistryError::InvalidCharityType),
        ("Existing", |_, _| {}, RegistryError::CharityAlreadyExists),
    ];

    for (name, mutate, expected) in cases {
        let mut registration = t.registration(name);
        mutate(&t, &mut registration);

        let result = t.client.try_register_charity(&t.caller, &registration);
        assert_eq!(result, Err(Ok(expected)));
        assert_eq!(t.client.get_charity_count(), 1);
        assert_eq!(t.client.get_charity_id_by_name(&t.text("Existing")), Some(0));
        assert!(!t.client.check_charity_existence(&t.text("Fresh")));
        assert_eq!(t.token.balance(&authority), 500);
    }

    let mut too_long = t.registration(&long_name);
    too_long.verification_level = 6;
    assert_eq!(
        t.client.try_register_charity(&t.caller, &too_long),
        Err(Ok(RegistryError::InvalidName))
    );
    assert_eq!(t.client.get_charity_count(), 1);
}
