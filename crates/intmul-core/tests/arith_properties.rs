use num_bigint::BigUint;
use num_traits::Num;
use proptest::prelude::*;

use intmul_core::hex::{add_hex, pad_leading_zero, shift_left};

fn value(s: &str) -> BigUint {
    BigUint::from_str_radix(s, 16).unwrap()
}

proptest! {
    #[test]
    fn add_hex_matches_bigint(x in "[0-9a-fA-F]{1,40}", y in "[0-9a-fA-F]{1,40}") {
        let sum = add_hex(&x, &y).unwrap();
        prop_assert_eq!(value(&sum), value(&x) + value(&y));
        prop_assert!(sum.len() <= x.len().max(y.len()) + 1);
    }

    #[test]
    fn adding_zero_string_is_identity(x in "[0-9a-f]{1,40}") {
        let zeros = "0".repeat(x.len());
        let sum = add_hex(&x, &zeros).unwrap();
        prop_assert_eq!(value(&sum), value(&x));
        prop_assert_eq!(sum, x);
    }

    #[test]
    fn shift_left_multiplies_by_power_of_sixteen(x in "[0-9a-f]{1,24}", k in 0usize..24) {
        let shifted = shift_left(&x, k);
        prop_assert_eq!(value(&shifted), value(&x) * BigUint::from(16u32).pow(k as u32));
    }

    #[test]
    fn padding_preserves_value_and_evens_length(x in "[0-9a-f]{1,24}") {
        let padded = pad_leading_zero(&x);
        prop_assert_eq!(padded.len() % 2, 0);
        prop_assert_eq!(value(&padded), value(&x));
    }
}
