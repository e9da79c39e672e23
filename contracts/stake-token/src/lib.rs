#![no_std]

//! StakeToken: the fungible payment token used to buy property shares.
//!
//! Implements the standard Soroban token interface so any contract holding a
//! `TokenClient` can move it. Failures inside the interface methods are raised
//! with `panic_with_error!` and surface as `Error(Contract, #code)` using the
//! codes from [`shared::errors::Error`].

use shared::{
    constants::TOKEN_DECIMALS,
    errors::Error,
    events::TOKEN_INITIALIZED,
    types::{to_base_units, Amount},
};
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error,
    token::{self, Interface as _},
    Address, Env, String,
};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

mod storage;

#[cfg(test)]
mod tests;

use storage::*;

fn check_nonnegative_amount(amount: Amount) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvInput);
    }
    Ok(())
}

fn unwrap_or_panic<T>(env: &Env, result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic_with_error!(env, err),
    }
}

#[contract]
pub struct StakeToken;

#[contractimpl]
impl StakeToken {
    /// Initialize the token and mint the initial supply to the admin
    ///
    /// # Arguments
    /// * `admin` - Deployer; receives the initial supply and may mint later
    /// * `name` - Token name
    /// * `symbol` - Token symbol
    /// * `initial_supply` - Supply in whole tokens, scaled by `10^TOKEN_DECIMALS`
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        initial_supply: Amount,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        check_nonnegative_amount(initial_supply)?;
        let minted = to_base_units(initial_supply).ok_or(Error::InvInput)?;

        set_admin(&env, &admin);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: TOKEN_DECIMALS,
            name,
            symbol,
        });

        receive_balance(&env, &admin, minted)?;
        set_total_supply(&env, minted);

        env.events().publish((TOKEN_INITIALIZED,), (admin.clone(), minted));
        TokenUtils::new(&env).events().mint(admin.clone(), admin, minted);

        Ok(())
    }

    /// Mint new base units to `to` (admin only)
    pub fn mint(env: Env, to: Address, amount: Amount) -> Result<(), Error> {
        check_nonnegative_amount(amount)?;
        let admin = get_admin(&env)?;
        admin.require_auth();

        let supply = get_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::InvInput)?;
        receive_balance(&env, &to, amount)?;
        set_total_supply(&env, supply);

        log!(&env, "minted", to, amount);
        TokenUtils::new(&env).events().mint(admin, to, amount);
        Ok(())
    }

    /// Total base units in circulation
    pub fn total_supply(env: Env) -> Amount {
        get_total_supply(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }
}

#[contractimpl]
impl token::Interface for StakeToken {
    fn allowance(env: Env, from: Address, spender: Address) -> Amount {
        get_allowance(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: Amount, expiration_ledger: u32) {
        from.require_auth();
        unwrap_or_panic(&env, check_nonnegative_amount(amount));
        unwrap_or_panic(
            &env,
            set_allowance(&env, &from, &spender, amount, expiration_ledger),
        );

        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> Amount {
        get_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: Amount) {
        from.require_auth();
        unwrap_or_panic(&env, check_nonnegative_amount(amount));

        unwrap_or_panic(&env, spend_balance(&env, &from, amount));
        unwrap_or_panic(&env, receive_balance(&env, &to, amount));

        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: Amount) {
        spender.require_auth();
        unwrap_or_panic(&env, check_nonnegative_amount(amount));

        unwrap_or_panic(&env, spend_allowance(&env, &from, &spender, amount));
        unwrap_or_panic(&env, spend_balance(&env, &from, amount));
        unwrap_or_panic(&env, receive_balance(&env, &to, amount));

        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: Amount) {
        from.require_auth();
        unwrap_or_panic(&env, check_nonnegative_amount(amount));

        unwrap_or_panic(&env, spend_balance(&env, &from, amount));
        set_total_supply(&env, get_total_supply(&env) - amount);

        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: Amount) {
        spender.require_auth();
        unwrap_or_panic(&env, check_nonnegative_amount(amount));

        unwrap_or_panic(&env, spend_allowance(&env, &from, &spender, amount));
        unwrap_or_panic(&env, spend_balance(&env, &from, amount));
        set_total_supply(&env, get_total_supply(&env) - amount);

        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}
