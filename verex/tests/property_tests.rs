//! Property tests for literal matching

use proptest::prelude::*;
use verex::Verex;

proptest! {
    #[test]
    fn find_matches_its_own_literal(s in "\\PC{1,24}") {
        let v = Verex::new().find(&s);
        prop_assert!(v.test(&s).unwrap());
    }

    #[test]
    fn find_rejects_input_without_literal(s in "[a-m]{1,8}", haystack in "[n-z .*+?]{0,32}") {
        let v = Verex::new().find(&s);
        prop_assert!(!v.test(&haystack).unwrap());
    }

    #[test]
    fn replace_removes_every_occurrence(s in "[a-c]{1,4}", haystack in "[a-d]{0,32}") {
        let v = Verex::new().find(&s);
        let replaced = v.replace(&haystack, "#").unwrap();
        prop_assert_eq!(replaced, haystack.replace(s.as_str(), "#"));
    }
}
