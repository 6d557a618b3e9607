#![cfg_attr(not(test), no_std)]

//! # Charity Registry Contract
//!
//! Records charitable organizations and enforces who may register them,
//! which names they may use, and what registering costs.
//!
//! - Registration is open to verified authorities (answered by an external
//!   oracle contract) once an authority contract has been bound.
//! - Every registration pays the current fee, in the configured token, from
//!   the caller to the authority contract. A failed payment voids the
//!   registration.
//! - Names are unique. The creator of a charity may later rename it and
//!   replace its description; nothing else is mutable and nothing is
//!   deleted.
//!
//! Business-rule failures are returned as [`RegistryError`] codes and leave
//! state untouched.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

// ─── Feature modules ───
pub mod authority;
pub mod errors;
pub mod events;
pub mod fees;
pub mod storage;
pub mod types;
pub mod validation;
// ─── End feature modules ───

pub use authority::{AuthorityOracleClient, BURN_ADDRESS};
pub use errors::RegistryError;
pub use events::{CharityRegisteredEvent, CharityUpdatedEvent};
pub use storage::{DEFAULT_MAX_CHARITIES, DEFAULT_REGISTRATION_FEE};
pub use types::{Charity, CharityRegistration, CharityType, CharityUpdate, Currency};

#[cfg(test)]
mod property_test;
// ─── End test modules ───

#[contract]
pub struct CharityRegistryContract;

#[contractimpl]
impl CharityRegistryContract {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time contract initialization.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to bind the authority contract and tune capacity
    /// * `fee_token` - Token contract registration fees are paid in
    /// * `authority_oracle` - Contract answering `is_verified_authority`
    ///
    /// # Panics
    /// - If already initialized
    pub fn initialize(env: Env, admin: Address, fee_token: Address, authority_oracle: Address) {
        if storage::is_initialized(&env) {
            panic!("already initialized");
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_fee_token(&env, &fee_token);
        storage::set_authority_oracle(&env, &authority_oracle);
        storage::set_registration_fee(&env, DEFAULT_REGISTRATION_FEE);
        storage::set_max_charities(&env, DEFAULT_MAX_CHARITIES);
        storage::bump_instance(&env);

        events::emit_initialized(&env, &admin);
    }

    // ── Authority & fee policy ──────────────────────────────────────

    /// Admin: bind the authority contract that receives registration fees
    /// and authorizes fee changes. Can succeed only once.
    ///
    /// # Errors
    /// - `InvalidAuthorityContract` if `principal` is the burn address
    /// - `AuthorityAlreadySet` if a binding already exists
    pub fn set_authority_contract(env: Env, principal: Address) -> Result<bool, RegistryError> {
        storage::get_admin(&env).require_auth();
        authority::bind_authority_contract(&env, &principal)?;
        storage::bump_instance(&env);

        events::emit_authority_set(&env, &principal);
        Ok(true)
    }

    /// Authority contract: replace the registration fee.
    ///
    /// # Errors
    /// - `AuthorityNotVerified` if no authority contract is bound
    /// - `InvalidRegistrationFee` if `amount` is negative
    pub fn set_registration_fee(env: Env, amount: i128) -> Result<bool, RegistryError> {
        let old_fee = fees::set_registration_fee(&env, amount)?;
        storage::bump_instance(&env);

        events::emit_fee_set(&env, old_fee, amount);
        Ok(true)
    }

    /// Admin: change the registry's capacity. It may not drop below the
    /// number of charities already registered.
    pub fn set_max_charities(env: Env, max_charities: u32) -> Result<bool, RegistryError> {
        storage::get_admin(&env).require_auth();
        if max_charities < storage::get_next_charity_id(&env) {
            return Err(RegistryError::InvalidMaxCharities);
        }
        storage::set_max_charities(&env, max_charities);
        storage::bump_instance(&env);

        events::emit_max_charities_set(&env, max_charities);
        Ok(true)
    }

    // ── Registration & update ───────────────────────────────────────

    /// Register a new charity on behalf of `caller`.
    ///
    /// Checks run in this order and the first failure is returned:
    /// capacity, each field rule, caller verification, name uniqueness,
    /// authority contract binding. On success the registration fee moves
    /// from `caller` to the authority contract and the new id is returned.
    pub fn register_charity(
        env: Env,
        caller: Address,
        registration: CharityRegistration,
    ) -> Result<u32, RegistryError> {
        caller.require_auth();

        let id = storage::get_next_charity_id(&env);
        if id >= storage::get_max_charities(&env) {
            return Err(RegistryError::MaxCharitiesExceeded);
        }

        let valid = validation::validate_registration(&registration)?;

        if !authority::is_verified_authority(&env, &caller) {
            return Err(RegistryError::NotAuthorized);
        }
        if storage::charity_exists_by_name(&env, &registration.name) {
            return Err(RegistryError::CharityAlreadyExists);
        }
        let authority_contract = authority::require_authority_contract(&env)?;

        let fee = storage::get_registration_fee(&env);
        fees::collect_registration_fee(&env, &caller, &authority_contract, fee);

        let timestamp = env.ledger().sequence();
        let charity = Charity {
            name: registration.name,
            description: registration.description,
            proof_hash: valid.proof_hash,
            category: registration.category,
            location: registration.location,
            currency: valid.currency,
            min_donation: registration.min_donation,
            max_goal: registration.max_goal,
            timestamp,
            creator: caller.clone(),
            charity_type: valid.charity_type,
            contact_info: registration.contact_info,
            status: true,
            verification_level: registration.verification_level,
        };
        storage::insert_charity(&env, id, &charity);
        storage::bump_instance(&env);

        events::emit_charity_registered(
            &env,
            CharityRegisteredEvent {
                charity_id: id,
                name: charity.name,
                creator: caller,
                timestamp,
            },
        );
        Ok(id)
    }

    /// Rename a charity and replace its description. Only its creator may
    /// do so.
    ///
    /// # Errors
    /// - `CharityNotFound` if `id` is unknown
    /// - `NotAuthorized` if `caller` is not the creator
    /// - `InvalidName` / `InvalidDescription` on a field rule failure
    /// - `CharityAlreadyExists` if another charity holds `update_name`
    pub fn update_charity(
        env: Env,
        caller: Address,
        id: u32,
        update_name: String,
        update_description: String,
    ) -> Result<bool, RegistryError> {
        caller.require_auth();

        let charity = storage::get_charity(&env, id).ok_or(RegistryError::CharityNotFound)?;
        if charity.creator != caller {
            return Err(RegistryError::NotAuthorized);
        }

        validation::validate_update(&update_name, &update_description)?;

        if let Some(holder) = storage::get_charity_id_by_name(&env, &update_name) {
            if holder != id {
                return Err(RegistryError::CharityAlreadyExists);
            }
        }

        let timestamp = env.ledger().sequence();
        let old_name = charity.name.clone();
        storage::rename_charity(&env, id, &old_name, &update_name);
        storage::set_charity(
            &env,
            id,
            &Charity {
                name: update_name.clone(),
                description: update_description.clone(),
                timestamp,
                ..charity
            },
        );
        storage::set_charity_update(
            &env,
            id,
            &CharityUpdate {
                update_name: update_name.clone(),
                update_description,
                update_timestamp: timestamp,
                updater: caller.clone(),
            },
        );

        events::emit_charity_updated(
            &env,
            CharityUpdatedEvent {
                charity_id: id,
                old_name,
                new_name: update_name,
                updater: caller,
                timestamp,
            },
        );
        Ok(true)
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn get_charity(env: Env, id: u32) -> Option<Charity> {
        storage::get_charity(&env, id)
    }

    /// Latest self-service update applied to `id`, if any.
    pub fn get_charity_update(env: Env, id: u32) -> Option<CharityUpdate> {
        storage::get_charity_update(&env, id)
    }

    /// Number of successfully registered charities.
    pub fn get_charity_count(env: Env) -> u32 {
        storage::get_next_charity_id(&env)
    }

    pub fn check_charity_existence(env: Env, name: String) -> bool {
        storage::charity_exists_by_name(&env, &name)
    }

    pub fn get_charity_id_by_name(env: Env, name: String) -> Option<u32> {
        storage::get_charity_id_by_name(&env, &name)
    }

    /// Pass-through to the authority oracle.
    pub fn is_verified_authority(env: Env, principal: Address) -> bool {
        authority::is_verified_authority(&env, &principal)
    }

    pub fn get_authority_contract(env: Env) -> Option<Address> {
        storage::get_authority_contract(&env)
    }

    pub fn get_registration_fee(env: Env) -> i128 {
        storage::get_registration_fee(&env)
    }

    pub fn get_max_charities(env: Env) -> u32 {
        storage::get_max_charities(&env)
    }

    pub fn get_admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    pub fn get_fee_token(env: Env) -> Address {
        storage::get_fee_token(&env)
    }

    pub fn get_authority_oracle(env: Env) -> Address {
        storage::get_authority_oracle(&env)
    }
}
