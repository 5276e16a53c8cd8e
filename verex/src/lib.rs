//! Verex
//!
//! Build regular expressions by chaining verbal operations instead of
//! writing pattern syntax by hand.
//!
//! ```
//! use verex::Verex;
//!
//! let v = Verex::new().find("foobarbaz").or().find("footestbaz");
//! let found = v.find_all("foobarbaz footestbaz foonobaz").unwrap();
//! assert_eq!(found, vec!["foobarbaz", "footestbaz"]);
//! ```

pub mod error;
pub mod expression;
pub mod flags;
pub mod range;

pub use error::{Result, VerexError};
pub use expression::Verex;
pub use flags::ModeFlags;
pub use range::RangeBound;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end() {
        // chain -> pattern text -> compiled matcher
        let v = Verex::new().start_of_line().find("a").word();
        assert_eq!(v.pattern(), r"(?m)^(?:a)\w+");
        assert!(v.test("abc").unwrap());
        assert!(!v.test("bac").unwrap());
    }
}
