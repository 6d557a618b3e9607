//! Authority gate: verified-authority lookups and the write-once authority
//! contract binding.

use soroban_sdk::{contractclient, Address, Env, String};

use crate::errors::RegistryError;
use crate::storage;

/// Stellar's all-zero account. Nobody holds its key, so fees sent there are
/// burned.
pub const BURN_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Interface of the external membership oracle.
#[contractclient(name = "AuthorityOracleClient")]
pub trait AuthorityOracleInterface {
    fn is_verified_authority(env: Env, principal: Address) -> bool;
}

pub fn burn_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, BURN_ADDRESS))
}

/// Asks the configured oracle whether `principal` is a verified authority.
///
/// An oracle that fails or returns something other than a bool counts as
/// "not verified".
pub fn is_verified_authority(env: &Env, principal: &Address) -> bool {
    let oracle = storage::get_authority_oracle(env);
    let client = AuthorityOracleClient::new(env, &oracle);
    matches!(client.try_is_verified_authority(principal), Ok(Ok(true)))
}

/// Binds the authority contract. Succeeds at most once per registry.
pub fn bind_authority_contract(env: &Env, principal: &Address) -> Result<(), RegistryError> {
    if *principal == burn_address(env) {
        return Err(RegistryError::InvalidAuthorityContract);
    }
    if storage::get_authority_contract(env).is_some() {
        return Err(RegistryError::AuthorityAlreadySet);
    }
    storage::set_authority_contract(env, principal);
    Ok(())
}

/// Returns the bound authority contract, or `AuthorityNotVerified` if none
/// is bound yet.
pub fn require_authority_contract(env: &Env) -> Result<Address, RegistryError> {
    storage::get_authority_contract(env).ok_or(RegistryError::AuthorityNotVerified)
}
