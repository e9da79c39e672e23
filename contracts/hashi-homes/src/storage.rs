use shared::errors::Error;
use shared::types::ShareCount;
use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Property};

/// Store the administrative capability
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Retrieve the administrative capability
pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInit)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/// Store the payment token address
pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

/// Retrieve the payment token address
pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInit)
}

/// Number of properties registered so far, defaults to 0
pub fn get_property_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::PropertyCount)
        .unwrap_or(0)
}

pub fn set_property_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::PropertyCount, &count);
}

pub fn set_property(env: &Env, property: &Property) {
    env.storage()
        .persistent()
        .set(&DataKey::Property(property.id), property);
}

pub fn get_property(env: &Env, property_id: u64) -> Result<Property, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Property(property_id))
        .ok_or(Error::PropNF)
}

/// Share balance of `holder` in a property, 0 if never bought
pub fn get_shares(env: &Env, property_id: u64, holder: &Address) -> ShareCount {
    env.storage()
        .persistent()
        .get(&DataKey::Shares(property_id, holder.clone()))
        .unwrap_or(0)
}

pub fn set_shares(env: &Env, property_id: u64, holder: &Address, shares: ShareCount) {
    env.storage()
        .persistent()
        .set(&DataKey::Shares(property_id, holder.clone()), &shares);
}
