//! Property tests: natural ordering is a total order.

use std::cmp::Ordering;

use proptest::prelude::*;
use tfm_core::natural_cmp;

fn label() -> impl Strategy<Value = String> {
    "[a-cA-C0-9 .]{0,8}"
}

proptest! {
    #[test]
    fn antisymmetric(a in label(), b in label()) {
        prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
    }

    #[test]
    fn equal_iff_identical(a in label(), b in label()) {
        prop_assert_eq!(natural_cmp(&a, &b) == Ordering::Equal, a == b);
    }

    #[test]
    fn transitive(a in label(), b in label(), c in label()) {
        let mut v = [a, b, c];
        v.sort_by(|x, y| natural_cmp(x, y));
        prop_assert_ne!(natural_cmp(&v[0], &v[1]), Ordering::Greater);
        prop_assert_ne!(natural_cmp(&v[1], &v[2]), Ordering::Greater);
        prop_assert_ne!(natural_cmp(&v[0], &v[2]), Ordering::Greater);
    }

    #[test]
    fn version_numbers_sort_by_value(x in 0u32..10_000, y in 0u32..10_000) {
        let a = format!(".NET {x}.0");
        let b = format!(".NET {y}.0");
        prop_assert_eq!(natural_cmp(&a, &b), x.cmp(&y));
    }
}
