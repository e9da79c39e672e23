#![no_std]

use shared::{
    constants::FIRST_PROPERTY_ID,
    errors::Error,
    events::*,
    types::{Amount, ShareCount},
};
use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env, String};

mod storage;
mod types;
mod validation;


pub use types::Property;

use storage::*;

#[contract]
pub struct HashiHomes;

#[contractimpl]
impl HashiHomes {
    /// Initialize the share ledger
    ///
    /// # Arguments
    /// * `admin` - Address allowed to register properties
    /// * `token` - Payment token contract used for share purchases
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_token(&env, &token);
        set_property_count(&env, 0);

        env.events().publish((LEDGER_INITIALIZED,), (admin, token));

        Ok(())
    }

    /// Register a new property (admin only)
    ///
    /// # Arguments
    /// * `caller` - Must be the ledger admin
    /// * `name` - Display name
    /// * `total_shares` - Number of fractional shares, must be positive
    /// * `price_per_share` - Price of one share in token base units, must be positive
    /// * `metadata_uri` - Opaque metadata reference
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the admin
    /// * `InvInput` - Zero shares or non-positive price
    pub fn add_property(
        env: Env,
        caller: Address,
        name: String,
        total_shares: ShareCount,
        price_per_share: Amount,
        metadata_uri: String,
    ) -> Result<u64, Error> {
        let admin = get_admin(&env)?;
        validation::validate_admin(&admin, &caller)?;
        caller.require_auth();

        validation::validate_new_property(total_shares, price_per_share)?;

        let property_id = FIRST_PROPERTY_ID
            .checked_add(get_property_count(&env))
            .ok_or(Error::InvInput)?;

        let property = Property {
            id: property_id,
            name,
            total_shares,
            available_shares: total_shares,
            price_per_share,
            metadata_uri,
            is_fully_purchased: false,
        };

        set_property(&env, &property);
        set_property_count(&env, property_id);

        env.events().publish(
            (PROPERTY_ADDED,),
            (property_id, total_shares, price_per_share),
        );

        Ok(property_id)
    }

    /// Buy shares of a property, paying `quantity * price_per_share` in the
    /// payment token. The buyer must have approved the ledger beforehand.
    ///
    /// # Errors
    /// * `PropNF` - Unknown property
    /// * `InvQty` - Zero quantity
    /// * `InsufShares` - Fewer shares left than requested
    /// * `InsufAllow` - Buyer approved less than the cost
    /// * `InsufFunds` - Buyer holds less than the cost
    pub fn buy_shares(
        env: Env,
        buyer: Address,
        property_id: u64,
        quantity: ShareCount,
    ) -> Result<(), Error> {
        buyer.require_auth();

        let token = get_token(&env)?;
        let mut property = get_property(&env, property_id)?;
        let cost = validation::validate_purchase(&property, quantity)?;

        let ledger = env.current_contract_address();
        let token_client = TokenClient::new(&env, &token);

        if token_client.allowance(&buyer, &ledger) < cost {
            return Err(Error::InsufAllow);
        }
        if token_client.balance(&buyer) < cost {
            return Err(Error::InsufFunds);
        }

        let holder_shares = get_shares(&env, property_id, &buyer)
            .checked_add(quantity)
            .ok_or(Error::InvInput)?;

        // Pull payment into ledger custody
        token_client.transfer_from(&ledger, &buyer, &ledger, &cost);

        property.available_shares -= quantity;
        if property.available_shares == 0 {
            property.is_fully_purchased = true;
        }

        set_property(&env, &property);
        set_shares(&env, property_id, &buyer, holder_shares);

        env.events().publish(
            (SHARES_PURCHASED,),
            (property_id, buyer.clone(), quantity, cost),
        );

        if property.is_fully_purchased {
            log!(&env, "property fully purchased", property_id);
            env.events().publish((PROPERTY_FULLY_PURCHASED,), property_id);
        }

        Ok(())
    }

    /// Share balance of `holder`, 0 if the holder never bought
    pub fn get_shares(env: Env, property_id: u64, holder: Address) -> ShareCount {
        get_shares(&env, property_id, &holder)
    }

    /// Get property information
    pub fn get_property(env: Env, property_id: u64) -> Result<Property, Error> {
        get_property(&env, property_id)
    }

    /// Id of the most recently registered property, 0 when none
    pub fn property_count(env: Env) -> u64 {
        get_property_count(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        get_token(&env)
    }
}
