use soroban_sdk::{contracttype, Address, Bytes, BytesN, String};

/// Currency a charity accepts donations in.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Currency {
    Stx,
    Usd,
    Btc,
}

impl Currency {
    /// Parses the wire code (`"STX"`, `"USD"`, `"BTC"`).
    pub fn from_code(code: &[u8]) -> Option<Self> {
        match code {
            b"STX" => Some(Currency::Stx),
            b"USD" => Some(Currency::Usd),
            b"BTC" => Some(Currency::Btc),
            _ => None,
        }
    }
}

/// Organizational form of a charity.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CharityType {
    NonProfit,
    Community,
    Environmental,
}

impl CharityType {
    /// Parses the wire code (`"non-profit"`, `"community"`, `"environmental"`).
    pub fn from_code(code: &[u8]) -> Option<Self> {
        match code {
            b"non-profit" => Some(CharityType::NonProfit),
            b"community" => Some(CharityType::Community),
            b"environmental" => Some(CharityType::Environmental),
            _ => None,
        }
    }
}

/// Caller-supplied fields of a registration request.
///
/// Enumerated fields travel as strings so an unknown value can be rejected
/// with its own error code instead of failing argument conversion.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CharityRegistration {
    pub name: String,
    pub description: String,
    /// Must be exactly 32 bytes
    pub proof_hash: Bytes,
    pub category: String,
    pub location: String,
    /// One of `STX`, `USD`, `BTC`
    pub currency: String,
    pub min_donation: i128,
    pub max_goal: i128,
    /// One of `non-profit`, `community`, `environmental`
    pub charity_type: String,
    pub contact_info: String,
    pub verification_level: u32,
}

/// A registered charity.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Charity {
    /// Unique across the registry
    pub name: String,
    pub description: String,
    /// Attestation digest of supporting documents; format-checked only
    pub proof_hash: BytesN<32>,
    pub category: String,
    pub location: String,
    pub currency: Currency,
    pub min_donation: i128,
    pub max_goal: i128,
    /// Ledger sequence at registration, refreshed on update
    pub timestamp: u32,
    /// Registering principal; the only address allowed to update
    pub creator: Address,
    pub charity_type: CharityType,
    pub contact_info: String,
    pub status: bool,
    pub verification_level: u32,
}

/// Most recent self-service update applied to a charity.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CharityUpdate {
    pub update_name: String,
    pub update_description: String,
    pub update_timestamp: u32,
    pub updater: Address,
}
