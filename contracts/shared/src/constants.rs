/// Decimal places of the payment token; one whole token is `10^TOKEN_DECIMALS` base units.
pub const TOKEN_DECIMALS: u32 = 18;

/// Id handed to the first registered property. Ids are never reused.
pub const FIRST_PROPERTY_ID: u64 = 1;
