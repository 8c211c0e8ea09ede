use num_bigint::BigUint;
use num_traits::Num;
use proptest::prelude::*;

use intmul_core::model::OperandPair;
use intmul_worker::{ThreadSpawner, multiply};

fn value(s: &str) -> BigUint {
    BigUint::from_str_radix(s, 16).unwrap()
}

fn operands() -> impl Strategy<Value = (String, String)> {
    prop_oneof![Just(1usize), Just(2), Just(4), Just(8)].prop_flat_map(|len| {
        let digits = format!("[0-9a-fA-F]{{{len}}}");
        (
            proptest::string::string_regex(&digits).unwrap(),
            proptest::string::string_regex(&digits).unwrap(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn product_matches_bigint((a, b) in operands()) {
        let pair = OperandPair::new(a.clone(), b.clone()).unwrap();
        let product = multiply(&pair, &ThreadSpawner::default()).unwrap();

        prop_assert_eq!(value(&product), value(&a) * value(&b));
        prop_assert!(product.len() <= 2 * a.len());
        prop_assert!(product.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}
