use shared::types::{Amount, ShareCount};
use soroban_sdk::{contracttype, Address, String};

/// A registered property divided into fractional shares
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    pub id: u64,
    pub name: String,
    pub total_shares: ShareCount,
    pub available_shares: ShareCount,
    pub price_per_share: Amount,
    pub metadata_uri: String,
    /// Set once `available_shares` reaches zero, never cleared
    pub is_fully_purchased: bool,
}

/// Storage keys for the share ledger
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Token,
    PropertyCount,
    Property(u64), // property_id -> Property
    Shares(u64, Address), // property_id, holder -> share balance
}
