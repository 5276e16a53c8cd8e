//! Typed bounds for character-class ranges

use std::fmt;

use crate::error::{Result, VerexError};

/// One bound of a character range
///
/// Strings and integers are accepted so that `"a".."z"` and `0..9` can be
/// mixed in a single call to [`Verex::range`](crate::Verex::range).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeBound {
    /// Textual bound, used verbatim
    Text(String),
    /// Signed integer bound, rendered in decimal
    Signed(i64),
    /// Unsigned integer bound, rendered in decimal
    Unsigned(u64),
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::Text(s) => write!(f, "{}", s),
            RangeBound::Signed(n) => write!(f, "{}", n),
            RangeBound::Unsigned(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for RangeBound {
    fn from(s: &str) -> Self {
        RangeBound::Text(s.to_string())
    }
}

impl From<String> for RangeBound {
    fn from(s: String) -> Self {
        RangeBound::Text(s)
    }
}

impl From<char> for RangeBound {
    fn from(c: char) -> Self {
        RangeBound::Text(c.to_string())
    }
}

impl From<i32> for RangeBound {
    fn from(n: i32) -> Self {
        RangeBound::Signed(n.into())
    }
}

impl From<i64> for RangeBound {
    fn from(n: i64) -> Self {
        RangeBound::Signed(n)
    }
}

impl From<u32> for RangeBound {
    fn from(n: u32) -> Self {
        RangeBound::Unsigned(n.into())
    }
}

impl From<u64> for RangeBound {
    fn from(n: u64) -> Self {
        RangeBound::Unsigned(n)
    }
}

impl From<usize> for RangeBound {
    fn from(n: usize) -> Self {
        u64::try_from(n)
            .map(RangeBound::Unsigned)
            .unwrap_or_else(|_| RangeBound::Text(n.to_string()))
    }
}

/// Render bounds as the body of a bracket expression, e.g. `a-z0-9`
///
/// Each bound is escaped on its own so the `-` between a pair stays a range
/// operator.
pub(crate) fn render_class<I, T>(bounds: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<RangeBound>,
{
    let bounds: Vec<RangeBound> = bounds.into_iter().map(Into::into).collect();
    if bounds.is_empty() {
        return Err(VerexError::EmptyRange);
    }
    if bounds.len() % 2 != 0 {
        return Err(VerexError::OddRangeBounds {
            count: bounds.len(),
        });
    }

    let mut class = String::new();
    for pair in bounds.chunks(2) {
        class.push_str(&regex::escape(&pair[0].to_string()));
        class.push('-');
        class.push_str(&regex::escape(&pair[1].to_string()));
    }
    Ok(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_bounds() {
        assert_eq!(RangeBound::from("a").to_string(), "a");
        assert_eq!(RangeBound::from('z').to_string(), "z");
        assert_eq!(RangeBound::from(-3i64).to_string(), "-3");
        assert_eq!(RangeBound::from(9u32).to_string(), "9");
        assert_eq!(RangeBound::from(7usize).to_string(), "7");
        assert_eq!(RangeBound::from(7usize), RangeBound::Unsigned(7));
    }

    #[test]
    fn test_render_mixed_bounds() {
        let bounds: Vec<RangeBound> = vec!["a".into(), "z".into(), 0.into(), 9.into()];
        assert_eq!(render_class(bounds).unwrap(), "a-z0-9");
    }

    #[test]
    fn test_render_escapes_each_bound() {
        let class = render_class(["[", "]"]).unwrap();
        assert_eq!(class, r"\[-\]");
    }

    #[test]
    fn test_render_empty() {
        let bounds: Vec<RangeBound> = Vec::new();
        assert_eq!(render_class(bounds), Err(VerexError::EmptyRange));
    }

    #[test]
    fn test_render_odd_count() {
        let result = render_class(["a", "z", "0"]);
        assert_eq!(result, Err(VerexError::OddRangeBounds { count: 3 }));
    }
}
