//! Charity store and registry configuration.
//!
//! Configuration and counters live in instance storage. Charity records,
//! update records and the name index live in persistent storage, one entry
//! per key. The name index must always mirror the `name` field of the
//! stored records; only [`insert_charity`] and [`rename_charity`] touch it.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::types::{Charity, CharityUpdate};

pub const DEFAULT_MAX_CHARITIES: u32 = 5000;
pub const DEFAULT_REGISTRATION_FEE: i128 = 500;

pub(crate) const INSTANCE_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub(crate) const INSTANCE_TTL_EXTEND: u32 = 2_592_000; // ~150 days
pub(crate) const CHARITY_TTL_THRESHOLD: u32 = 518_400;
pub(crate) const CHARITY_TTL_EXTEND: u32 = 2_592_000;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    FeeToken,
    AuthorityOracle,
    /// Write-once fee recipient and fee-policy authorizer
    AuthorityContract,
    RegistrationFee,
    MaxCharities,
    NextCharityId,
    Charity(u32),
    CharityUpdate(u32),
    /// Uniqueness index: name -> id
    CharityName(String),
}

// ── Instance: configuration ─────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("not initialized")
}

pub fn set_fee_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::FeeToken, token);
}

pub fn get_fee_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::FeeToken)
        .expect("not initialized")
}

pub fn set_authority_oracle(env: &Env, oracle: &Address) {
    env.storage().instance().set(&DataKey::AuthorityOracle, oracle);
}

pub fn get_authority_oracle(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::AuthorityOracle)
        .expect("not initialized")
}

pub fn set_authority_contract(env: &Env, authority: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::AuthorityContract, authority);
}

pub fn get_authority_contract(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::AuthorityContract)
}

pub fn set_registration_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::RegistrationFee, &fee);
}

pub fn get_registration_fee(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RegistrationFee)
        .unwrap_or(DEFAULT_REGISTRATION_FEE)
}

pub fn set_max_charities(env: &Env, max: u32) {
    env.storage().instance().set(&DataKey::MaxCharities, &max);
}

pub fn get_max_charities(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::MaxCharities)
        .unwrap_or(DEFAULT_MAX_CHARITIES)
}

/// Next id to assign; also the number of registered charities.
pub fn get_next_charity_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::NextCharityId)
        .unwrap_or(0)
}

// ── Persistent: charities ───────────────────────────────────────────

pub fn get_charity(env: &Env, id: u32) -> Option<Charity> {
    env.storage().persistent().get(&DataKey::Charity(id))
}

pub fn get_charity_update(env: &Env, id: u32) -> Option<CharityUpdate> {
    env.storage().persistent().get(&DataKey::CharityUpdate(id))
}

pub fn get_charity_id_by_name(env: &Env, name: &String) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::CharityName(name.clone()))
}

pub fn charity_exists_by_name(env: &Env, name: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::CharityName(name.clone()))
}

/// Stores a new charity under `id`, indexes its name and advances the id
/// counter past it.
pub fn insert_charity(env: &Env, id: u32, charity: &Charity) {
    set_charity(env, id, charity);
    set_name_entry(env, &charity.name, id);
    env.storage()
        .instance()
        .set(&DataKey::NextCharityId, &(id + 1));
}

/// Overwrites the stored record for an existing charity.
pub fn set_charity(env: &Env, id: u32, charity: &Charity) {
    let key = DataKey::Charity(id);
    env.storage().persistent().set(&key, charity);
    env.storage()
        .persistent()
        .extend_ttl(&key, CHARITY_TTL_THRESHOLD, CHARITY_TTL_EXTEND);
}

/// Moves `id`'s index entry from `old_name` to `new_name`.
pub fn rename_charity(env: &Env, id: u32, old_name: &String, new_name: &String) {
    if old_name != new_name {
        env.storage()
            .persistent()
            .remove(&DataKey::CharityName(old_name.clone()));
    }
    set_name_entry(env, new_name, id);
}

/// Replaces the update record of `id`; only the latest update is kept.
pub fn set_charity_update(env: &Env, id: u32, update: &CharityUpdate) {
    let key = DataKey::CharityUpdate(id);
    env.storage().persistent().set(&key, update);
    env.storage()
        .persistent()
        .extend_ttl(&key, CHARITY_TTL_THRESHOLD, CHARITY_TTL_EXTEND);
}

fn set_name_entry(env: &Env, name: &String, id: u32) {
    let key = DataKey::CharityName(name.clone());
    env.storage().persistent().set(&key, &id);
    env.storage()
        .persistent()
        .extend_ttl(&key, CHARITY_TTL_THRESHOLD, CHARITY_TTL_EXTEND);
}
