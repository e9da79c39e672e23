use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInit = 1,
    AlreadyInit = 2,
    Unauthorized = 3,
    InvInput = 4,

    // Share ledger errors
    PropNF = 5,
    InvQty = 6,
    InsufShares = 7,

    // Payment token errors
    InsufFunds = 8,
    InsufAllow = 9,
}
