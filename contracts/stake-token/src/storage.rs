use shared::errors::Error;
use shared::types::Amount;
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the token contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceKey),
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: Amount,
    pub expiration_ledger: u32,
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInit)
}

pub fn get_total_supply(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: Amount) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_balance(env: &Env, id: &Address) -> Amount {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, amount: Amount) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(id.clone()), &amount);
}

/// Credit `amount` to `id`
pub fn receive_balance(env: &Env, id: &Address, amount: Amount) -> Result<(), Error> {
    let balance = get_balance(env, id)
        .checked_add(amount)
        .ok_or(Error::InvInput)?;
    set_balance(env, id, balance);
    Ok(())
}

/// Debit `amount` from `id`
pub fn spend_balance(env: &Env, id: &Address, amount: Amount) -> Result<(), Error> {
    let balance = get_balance(env, id);
    if balance < amount {
        return Err(Error::InsufFunds);
    }
    set_balance(env, id, balance - amount);
    Ok(())
}

/// Read an allowance. Expired allowances read as zero.
pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().persistent().get::<DataKey, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn set_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: Amount,
    expiration_ledger: u32,
) -> Result<(), Error> {
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(Error::InvInput);
    }

    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };
    env.storage().persistent().set(&key, &allowance);
    Ok(())
}

/// Consume `amount` of the allowance `from` granted to `spender`
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: Amount,
) -> Result<(), Error> {
    let allowance = get_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(Error::InsufAllow);
    }
    if amount > 0 {
        set_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
