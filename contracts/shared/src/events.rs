use soroban_sdk::{symbol_short, Symbol};

// Share ledger
pub const LEDGER_INITIALIZED: Symbol = symbol_short!("hh_init");
pub const PROPERTY_ADDED: Symbol = symbol_short!("prop_add");
pub const SHARES_PURCHASED: Symbol = symbol_short!("shares");
pub const PROPERTY_FULLY_PURCHASED: Symbol = symbol_short!("prop_full");

// Payment token
pub const TOKEN_INITIALIZED: Symbol = symbol_short!("stk_init");
