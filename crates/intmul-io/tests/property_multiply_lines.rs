use num_bigint::BigUint;
use num_traits::Num;
use proptest::prelude::*;

use intmul_io::prelude::*;

fn value(s: &str) -> BigUint {
    BigUint::from_str_radix(s, 16).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn padded_product_matches_bigint(a in "[0-9a-f]{4}", b in "[0-9A-F]{4}") {
        let product = multiply_lines(&a, &b, &ThreadSpawner::default()).unwrap().digits;
        prop_assert_eq!(product.len() % 2, 0);
        prop_assert_eq!(value(&product), value(&a) * value(&b));
    }
}
