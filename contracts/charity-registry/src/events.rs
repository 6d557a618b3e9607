use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

const INITIALIZED: Symbol = symbol_short!("init");
const AUTHORITY_SET: Symbol = symbol_short!("auth_set");
const FEE_SET: Symbol = symbol_short!("fee_set");
const MAX_SET: Symbol = symbol_short!("max_set");
const REGISTERED: Symbol = symbol_short!("reg");
const UPDATED: Symbol = symbol_short!("upd");
const FEE_PAID: Symbol = symbol_short!("fee_paid");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CharityRegisteredEvent {
    pub charity_id: u32,
    pub name: String,
    pub creator: Address,
    pub timestamp: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CharityUpdatedEvent {
    pub charity_id: u32,
    pub old_name: String,
    pub new_name: String,
    pub updater: Address,
    pub timestamp: u32,
}

pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events().publish((INITIALIZED,), admin.clone());
}

pub fn emit_authority_set(env: &Env, authority: &Address) {
    env.events().publish((AUTHORITY_SET,), authority.clone());
}

pub fn emit_fee_set(env: &Env, old_fee: i128, new_fee: i128) {
    env.events().publish((FEE_SET,), (old_fee, new_fee));
}

pub fn emit_max_charities_set(env: &Env, max_charities: u32) {
    env.events().publish((MAX_SET,), max_charities);
}

pub fn emit_charity_registered(env: &Env, event: CharityRegisteredEvent) {
    env.events()
        .publish((REGISTERED, event.charity_id), event);
}

pub fn emit_charity_updated(env: &Env, event: CharityUpdatedEvent) {
    env.events().publish((UPDATED, event.charity_id), event);
}

pub fn emit_fee_paid(env: &Env, payer: &Address, recipient: &Address, amount: i128) {
    env.events()
        .publish((FEE_PAID, payer.clone()), (recipient.clone(), amount));
}
