//! Tests for minor-unit arithmetic and the single rounding point.

#[cfg(test)]
mod tests {
    use crate::money::{Money, MoneyError};
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_major_whole_amount() {
        assert_eq!(Money::from_major(dec!(500)).unwrap(), Money::from_minor(50000));
        assert_eq!(Money::from_major(dec!(0.01)).unwrap(), Money::from_minor(1));
    }

    #[test]
    fn test_from_major_rounds_half_up() {
        // 123.455 -> 12345.5 minor units -> 12346
        assert_eq!(
            Money::from_major(dec!(123.455)).unwrap(),
            Money::from_minor(12346)
        );
        // 123.454 -> 12345.4 -> 12345
        assert_eq!(
            Money::from_major(dec!(123.454)).unwrap(),
            Money::from_minor(12345)
        );
    }

    #[test]
    fn test_to_major_round_trip() {
        let m = Money::from_minor(12050);
        assert_eq!(m.to_major(), dec!(120.50));
        assert_eq!(Money::from_major(m.to_major()).unwrap(), m);
    }

    #[test]
    fn test_with_return_percent_exact() {
        // 10000 * (1 + 20/100) = 12000, no rounding needed
        let payout = Money::from_minor(10000)
            .with_return_percent(dec!(20))
            .unwrap();
        assert_eq!(payout, Money::from_minor(12000));
    }

    #[test]
    fn test_with_return_percent_rounds_half_up() {
        // 50 * 1.01 = 50.5 -> 51
        let payout = Money::from_minor(50).with_return_percent(dec!(1)).unwrap();
        assert_eq!(payout, Money::from_minor(51));

        // 101 * 1.105 = 111.605 -> 112
        let payout = Money::from_minor(101)
            .with_return_percent(dec!(10.5))
            .unwrap();
        assert_eq!(payout, Money::from_minor(112));
    }

    #[test]
    fn test_with_return_percent_zero_keeps_principal() {
        let payout = Money::from_minor(999).with_return_percent(dec!(0)).unwrap();
        assert_eq!(payout, Money::from_minor(999));
    }

    #[test]
    fn test_checked_add_overflow() {
        let result = Money::from_minor(i64::MAX).checked_add(Money::from_minor(1));
        assert_eq!(result.unwrap_err(), MoneyError::OutOfRange);
    }

    #[test]
    fn test_checked_sub() {
        let result = Money::from_minor(100)
            .checked_sub(Money::from_minor(40))
            .unwrap();
        assert_eq!(result, Money::from_minor(60));
    }

    #[test]
    fn test_is_positive() {
        assert!(Money::from_minor(1).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::from_minor(-1).is_positive());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        assert_eq!(
            serde_json::to_string(&Money::from_minor(12345)).unwrap(),
            "12345"
        );
        assert_eq!(
            serde_json::from_str::<Money>("12345").unwrap(),
            Money::from_minor(12345)
        );
    }
}
