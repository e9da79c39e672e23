use shared::errors::Error;
use shared::types::{Amount, ShareCount};
use soroban_sdk::Address;

use crate::types::Property;

/// Only the address that initialized the ledger may register properties
pub fn validate_admin(admin: &Address, caller: &Address) -> Result<(), Error> {
    if admin == caller {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}

pub fn validate_new_property(
    total_shares: ShareCount,
    price_per_share: Amount,
) -> Result<(), Error> {
    if total_shares == 0 || price_per_share <= 0 {
        return Err(Error::InvInput);
    }
    Ok(())
}

/// Check a purchase against the property and return its cost in token base units
pub fn validate_purchase(property: &Property, quantity: ShareCount) -> Result<Amount, Error> {
    if quantity == 0 {
        return Err(Error::InvQty);
    }
    if quantity > property.available_shares {
        return Err(Error::InsufShares);
    }
    property
        .price_per_share
        .checked_mul(quantity as Amount)
        .ok_or(Error::InvInput)
}
