//! Field rules for registration and update requests.
//!
//! Everything here is side-effect free. Checks run in a fixed order and the
//! first failing rule decides the returned error.

use soroban_sdk::{BytesN, String};

use crate::errors::RegistryError;
use crate::types::{CharityRegistration, CharityType, Currency};

/// Inclusive character-count bounds for a text field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextRule {
    pub min_chars: u32,
    pub max_chars: u32,
}

pub const NAME_RULE: TextRule = TextRule { min_chars: 1, max_chars: 100 };
pub const DESCRIPTION_RULE: TextRule = TextRule { min_chars: 1, max_chars: 500 };
pub const CATEGORY_RULE: TextRule = TextRule { min_chars: 1, max_chars: 50 };
pub const LOCATION_RULE: TextRule = TextRule { min_chars: 1, max_chars: 100 };
pub const CONTACT_INFO_RULE: TextRule = TextRule { min_chars: 0, max_chars: 200 };

pub const PROOF_HASH_LEN: u32 = 32;
pub const MAX_VERIFICATION_LEVEL: u32 = 5;

// A UTF-8 char is at most 4 bytes; covers the longest rule (500 chars).
const MAX_TEXT_BYTES: usize = 2000;
const MAX_CODE_BYTES: usize = 16;

/// Number of chars in `bytes`, or `None` if it is not valid UTF-8.
pub fn char_count(bytes: &[u8]) -> Option<u32> {
    core::str::from_utf8(bytes)
        .ok()
        .map(|s| s.chars().count() as u32)
}

impl TextRule {
    pub fn accepts_bytes(&self, bytes: &[u8]) -> bool {
        match char_count(bytes) {
            Some(n) => n >= self.min_chars && n <= self.max_chars,
            None => false,
        }
    }

    pub fn accepts(&self, text: &String) -> bool {
        let len = text.len() as usize;
        if len > self.max_chars as usize * 4 || len > MAX_TEXT_BYTES {
            return false;
        }
        let mut buf = [0u8; MAX_TEXT_BYTES];
        text.copy_into_slice(&mut buf[..len]);
        self.accepts_bytes(&buf[..len])
    }
}

fn check_text(text: &String, rule: TextRule, err: RegistryError) -> Result<(), RegistryError> {
    if rule.accepts(text) {
        Ok(())
    } else {
        Err(err)
    }
}

/// Runs `parse` over the raw bytes of a short enumerated code.
fn parse_code<T>(code: &String, parse: fn(&[u8]) -> Option<T>) -> Option<T> {
    let len = code.len() as usize;
    if len > MAX_CODE_BYTES {
        return None;
    }
    let mut buf = [0u8; MAX_CODE_BYTES];
    code.copy_into_slice(&mut buf[..len]);
    parse(&buf[..len])
}

/// Typed values derived from a registration request that passed every
/// field rule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidRegistration {
    pub proof_hash: BytesN<32>,
    pub currency: Currency,
    pub charity_type: CharityType,
}

/// Checks every caller-supplied field of a registration, in order.
pub fn validate_registration(
    registration: &CharityRegistration,
) -> Result<ValidRegistration, RegistryError> {
    check_text(&registration.name, NAME_RULE, RegistryError::InvalidName)?;
    check_text(
        &registration.description,
        DESCRIPTION_RULE,
        RegistryError::InvalidDescription,
    )?;

    if registration.proof_hash.len() != PROOF_HASH_LEN {
        return Err(RegistryError::InvalidProofHash);
    }
    let proof_hash = BytesN::<32>::try_from(registration.proof_hash.clone())
        .map_err(|_| RegistryError::InvalidProofHash)?;

    check_text(&registration.category, CATEGORY_RULE, RegistryError::InvalidCategory)?;
    check_text(&registration.location, LOCATION_RULE, RegistryError::InvalidLocation)?;

    let currency = parse_code(&registration.currency, Currency::from_code)
        .ok_or(RegistryError::InvalidCurrency)?;

    if registration.min_donation <= 0 {
        return Err(RegistryError::InvalidMinDonation);
    }
    if registration.max_goal <= 0 {
        return Err(RegistryError::InvalidMaxGoal);
    }

    let charity_type = parse_code(&registration.charity_type, CharityType::from_code)
        .ok_or(RegistryError::InvalidCharityType)?;

    check_text(
        &registration.contact_info,
        CONTACT_INFO_RULE,
        RegistryError::InvalidContactInfo,
    )?;

    if registration.verification_level > MAX_VERIFICATION_LEVEL {
        return Err(RegistryError::InvalidVerificationLevel);
    }

    Ok(ValidRegistration {
        proof_hash,
        currency,
        charity_type,
    })
}

/// Checks the new name and description of a self-service update.
pub fn validate_update(
    update_name: &String,
    update_description: &String,
) -> Result<(), RegistryError> {
    check_text(update_name, NAME_RULE, RegistryError::InvalidName)?;
    check_text(
        update_description,
        DESCRIPTION_RULE,
        RegistryError::InvalidDescription,
    )
}
