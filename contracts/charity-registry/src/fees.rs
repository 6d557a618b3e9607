//! Registration fee policy and collection.

use soroban_sdk::{token, Address, Env};

use crate::authority;
use crate::errors::RegistryError;
use crate::events;
use crate::storage;

/// Replaces the registration fee. Requires a bound authority contract, which
/// must also authorize the change.
///
/// Returns the previous fee.
pub fn set_registration_fee(env: &Env, amount: i128) -> Result<i128, RegistryError> {
    let authority_contract = authority::require_authority_contract(env)?;
    authority_contract.require_auth();

    if amount < 0 {
        return Err(RegistryError::InvalidRegistrationFee);
    }

    let old_fee = storage::get_registration_fee(env);
    storage::set_registration_fee(env, amount);
    Ok(old_fee)
}

/// Moves `fee` of the configured fee token from `payer` to `recipient`.
///
/// A failed transfer traps, which aborts the calling invocation and discards
/// all of its writes. A zero fee transfers nothing.
pub fn collect_registration_fee(env: &Env, payer: &Address, recipient: &Address, fee: i128) {
    if fee == 0 {
        return;
    }
    let token_client = token::Client::new(env, &storage::get_fee_token(env));
    token_client.transfer(payer, recipient, &fee);
    events::emit_fee_paid(env, payer, recipient, fee);
}
