use soroban_sdk::contracterror;

/// Stable failure codes returned by the registry's write operations.
///
/// Codes are part of the public interface; never renumber a variant.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Caller is not a verified authority, or not the charity's creator
    NotAuthorized = 100,
    /// Name is empty or longer than 100 characters
    InvalidName = 101,
    /// Description is empty or longer than 500 characters
    InvalidDescription = 102,
    /// Proof hash is not exactly 32 bytes
    InvalidProofHash = 103,
    /// Another charity already holds this name
    CharityAlreadyExists = 105,
    /// No charity is stored under the given id
    CharityNotFound = 106,
    /// No authority contract has been bound yet
    AuthorityNotVerified = 108,
    /// Category is empty or longer than 50 characters
    InvalidCategory = 109,
    /// Location is empty or longer than 100 characters
    InvalidLocation = 110,
    /// Currency is not one of STX, USD, BTC
    InvalidCurrency = 111,
    /// Minimum donation is not positive
    InvalidMinDonation = 112,
    /// Maximum goal is not positive
    InvalidMaxGoal = 113,
    /// Registry has reached its capacity
    MaxCharitiesExceeded = 116,
    /// Charity type is not one of non-profit, community, environmental
    InvalidCharityType = 117,
    /// Contact info is longer than 200 characters
    InvalidContactInfo = 118,
    /// Registration fee is negative
    InvalidRegistrationFee = 119,
    /// Verification level is above 5
    InvalidVerificationLevel = 120,
    /// Authority contract may not be the burn address
    InvalidAuthorityContract = 121,
    /// Authority contract is already bound
    AuthorityAlreadySet = 122,
    /// Capacity would fall below the number of registered charities
    InvalidMaxCharities = 123,
}
