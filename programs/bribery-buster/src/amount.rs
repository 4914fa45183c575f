//! Fixed-point token amounts. Every amount the program handles is already an
//! integer in base units of a 9-decimal token.

pub const DECIMALS: u8 = 9;

/// Base units in one whole token.
pub const BASE: u64 = 10u64.pow(DECIMALS as u32);

/// Converts whole tokens to base units, `None` on overflow.
pub fn to_base_units(whole: u64) -> Option<u64> {
    whole.checked_mul(BASE)
}

/// Splits base units into whole tokens and the fractional remainder.
pub fn split_base_units(amount: u64) -> (u64, u64) {
    (amount / BASE, amount % BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_tokens_in_base_units() {
        assert_eq!(to_base_units(100), Some(100_000_000_000));
    }

    #[test]
    fn conversion_overflow_is_none() {
        assert_eq!(to_base_units(u64::MAX / BASE + 1), None);
    }

    #[test]
    fn split_keeps_fraction() {
        assert_eq!(split_base_units(1_500_000_001), (1, 500_000_001));
        assert_eq!(split_base_units(7), (0, 7));
    }
}
