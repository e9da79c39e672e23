/// Token amount in base units.
pub type Amount = i128;

/// Whole fractional units of a property.
pub type ShareCount = u32;

/// Scale a whole-token amount up to base units, `None` on overflow.
pub fn to_base_units(whole_tokens: Amount) -> Option<Amount> {
    10i128
        .checked_pow(crate::constants::TOKEN_DECIMALS)
        .and_then(|unit| whole_tokens.checked_mul(unit))
}
