#![no_std]

//! # Authority Oracle Contract
//!
//! Maintains the set of identities recognized as verified charity
//! authorities. The charity registry asks this contract whether a caller
//! may register charities; it never writes here.
//!
//! Membership is admin-controlled. Holders are also kept in an ordered list
//! so off-chain tooling can enumerate them.

use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol, Vec};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Admin,
    Authority(Address),
    Authorities,
}

const AUTHORITY_ADDED: Symbol = symbol_short!("auth_add");
const AUTHORITY_REMOVED: Symbol = symbol_short!("auth_rm");

#[contract]
pub struct AuthorityOracleContract;

#[contractimpl]
impl AuthorityOracleContract {
    /// Initialize the oracle with its administrator.
    ///
    /// # Panics
    /// - If already initialized
    pub fn initialize(env: Env, admin: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic!("already initialized");
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
    }

    /// Admin: mark `authority` as verified. Adding an existing member is a no-op.
    pub fn add_authority(env: Env, authority: Address) {
        require_admin(&env);

        let key = DataKey::Authority(authority.clone());
        if env.storage().instance().has(&key) {
            return;
        }
        env.storage().instance().set(&key, &true);

        let mut holders = Self::get_authorities(env.clone());
        holders.push_back(authority.clone());
        env.storage().instance().set(&DataKey::Authorities, &holders);

        env.events().publish((AUTHORITY_ADDED,), authority);
    }

    /// Admin: revoke verification from `authority`. Removing a non-member is a no-op.
    pub fn remove_authority(env: Env, authority: Address) {
        require_admin(&env);

        let key = DataKey::Authority(authority.clone());
        if !env.storage().instance().has(&key) {
            return;
        }
        env.storage().instance().remove(&key);

        let mut holders = Self::get_authorities(env.clone());
        if let Some(pos) = holders.iter().position(|a| a == authority) {
            holders.remove(pos as u32);
            env.storage().instance().set(&DataKey::Authorities, &holders);
        }

        env.events().publish((AUTHORITY_REMOVED,), authority);
    }

    /// Returns true if `principal` is a verified authority.
    pub fn is_verified_authority(env: Env, principal: Address) -> bool {
        env.storage()
            .instance()
            .has(&DataKey::Authority(principal))
    }

    /// All verified authorities in the order they were added.
    pub fn get_authorities(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Authorities)
            .unwrap_or(Vec::new(&env))
    }

    pub fn get_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .expect("not initialized")
    }
}

fn require_admin(env: &Env) {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("not initialized");
    admin.require_auth();
}
