//! Reference market data supplied to the calculator by its callers.

use rust_decimal::Decimal;

/// Reference price of one verified blue carbon credit, in USD.
pub const REFERENCE_PRICE_PER_CREDIT_USD: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reference_price() {
        assert_eq!(REFERENCE_PRICE_PER_CREDIT_USD, dec!(25));
    }
}
