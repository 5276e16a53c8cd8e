//! Fluent expression builder
//!
//! A [`Verex`] accumulates pattern text in three segments:
//! - `prefix`: anchors and alternation openers, emitted first
//! - `body`: the fragments appended by each chained call
//! - `suffix`: end anchors and alternation closers, emitted last
//!
//! Capture groups still open when the expression is compiled are closed
//! between `body` and `suffix`.

use std::fmt;

use regex::{NoExpand, Regex};
use tracing::{debug, trace, warn};

use crate::error::{Result, VerexError};
use crate::flags::ModeFlags;
use crate::range::{RangeBound, render_class};

/// A regular expression under construction
///
/// # Example
/// ```
/// use verex::Verex;
///
/// let url = Verex::new()
///     .start_of_line()
///     .then("http")
///     .maybe("s")
///     .then("://")
///     .maybe("www.")
///     .anything_but(" ")
///     .end_of_line();
///
/// assert!(url.test("https://www.example.com").unwrap());
/// assert!(!url.test("ftp://example.com").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Verex {
    prefix: String,
    body: String,
    suffix: String,
    flags: ModeFlags,
    open_captures: usize,
    error: Option<VerexError>,
}

impl Verex {
    /// Create an empty expression with default flags
    pub fn new() -> Self {
        Verex::default()
    }

    /// Create an empty expression with the given mode flags
    pub fn with_flags(flags: ModeFlags) -> Self {
        Verex {
            flags,
            ..Verex::default()
        }
    }

    /// The active mode flags
    pub fn flags(&self) -> ModeFlags {
        self.flags
    }

    /// Number of capture groups opened and not yet closed
    pub fn open_captures(&self) -> usize {
        self.open_captures
    }

    fn add(mut self, fragment: &str) -> Self {
        trace!(fragment, "append fragment");
        self.body.push_str(fragment);
        self
    }

    /// Match `s` literally; it must be present
    pub fn find(self, s: &str) -> Self {
        self.add(&format!("(?:{})", regex::escape(s)))
    }

    /// Alias for [`find`](Self::find)
    pub fn then(self, s: &str) -> Self {
        self.find(s)
    }

    /// Match `s` literally zero or one time
    pub fn maybe(self, s: &str) -> Self {
        self.add(&format!("(?:{})?", regex::escape(s)))
    }

    /// Match any run of characters, including none
    pub fn anything(self) -> Self {
        self.add("(?:.*)")
    }

    /// Match any run of characters not in `s`
    ///
    /// An empty `s` excludes nothing and behaves like [`anything`](Self::anything).
    pub fn anything_but(self, s: &str) -> Self {
        if s.is_empty() {
            return self.anything();
        }
        self.add(&format!("(?:[^{}]*)", regex::escape(s)))
    }

    /// Match exactly one character out of `s`
    ///
    /// An empty `s` is an empty set and never matches.
    pub fn any(self, s: &str) -> Self {
        if s.is_empty() {
            return self.add(r"(?:[^\s\S])");
        }
        self.add(&format!("(?:[{}])", regex::escape(s)))
    }

    /// Alias for [`any`](Self::any)
    pub fn any_of(self, s: &str) -> Self {
        self.any(s)
    }

    /// Match a line feed or a carriage return + line feed
    pub fn line_break(self) -> Self {
        self.add(r"(?:(?:\n)|(?:\r\n))")
    }

    /// Alias for [`line_break`](Self::line_break)
    pub fn br(self) -> Self {
        self.line_break()
    }

    /// Match one or more tabulation characters
    pub fn tab(self) -> Self {
        self.add(r"\t+")
    }

    /// Match one or more word characters
    pub fn word(self) -> Self {
        self.add(r"\w+")
    }

    /// Match one character out of the given inclusive ranges
    ///
    /// Bounds are taken pairwise as `from, to`, so
    /// `range(["a", "z", "0", "9"])` emits `[a-z0-9]`. Strings and integers
    /// can be mixed through [`RangeBound`].
    ///
    /// # Errors
    /// Returns [`VerexError::EmptyRange`] if no bounds are given and
    /// [`VerexError::OddRangeBounds`] if the bounds do not pair up.
    ///
    /// # Example
    /// ```
    /// use verex::{RangeBound, Verex};
    ///
    /// let bounds: Vec<RangeBound> = vec!["a".into(), "z".into(), 0.into(), 9.into()];
    /// let v = Verex::new().range(bounds).unwrap();
    /// assert_eq!(v.pattern(), "(?m)[a-z0-9]");
    /// ```
    pub fn range<I, T>(self, bounds: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<RangeBound>,
    {
        let class = render_class(bounds)?;
        Ok(self.add(&format!("[{}]", class)))
    }

    /// Anchor the expression at the start of a line
    pub fn start_of_line(mut self) -> Self {
        self.prefix.push('^');
        self
    }

    /// Anchor the expression at the end of a line
    pub fn end_of_line(mut self) -> Self {
        self.suffix.push('$');
        self
    }

    /// Open a capture group, closed by [`end_capture`](Self::end_capture)
    ///
    /// A group left open is closed when the expression is compiled.
    pub fn begin_capture(mut self) -> Self {
        self.open_captures += 1;
        self.add("(")
    }

    /// Close the most recently opened capture group
    ///
    /// Without an open group the expression is marked invalid and the next
    /// compilation fails with [`VerexError::UnbalancedCapture`].
    pub fn end_capture(mut self) -> Self {
        if self.open_captures == 0 {
            warn!("end_capture without an open capture group");
            self.error.get_or_insert(VerexError::UnbalancedCapture);
            return self;
        }
        self.open_captures -= 1;
        self.add(")")
    }

    /// Start an alternative: what was built so far or what follows
    ///
    /// `find("a").or().find("b")` compiles to `(?:(?:a))|(?:(?:b))`.
    /// Capture groups still open in the current alternative are closed
    /// first.
    pub fn or(mut self) -> Self {
        for _ in 0..self.open_captures {
            self.body.push(')');
        }
        self.open_captures = 0;
        self.prefix.push_str("(?:");
        self.suffix.insert(0, ')');
        self.add(")|(?:")
    }

    /// Toggle case-insensitive matching
    ///
    /// `true` makes the expression ignore case, `false` restores
    /// case-sensitive matching.
    pub fn with_any_case(mut self, enable: bool) -> Self {
        self.flags.case_insensitive = enable;
        self
    }

    /// Toggle whether anchors apply to the whole input only
    ///
    /// With `true`, `^` and `$` match only at the start and end of the
    /// input. With `false` (the default) they match at every line boundary.
    pub fn search_one_line(mut self, oneline: bool) -> Self {
        self.flags.multiline = !oneline;
        self
    }

    /// The pattern text handed to the engine
    pub fn pattern(&self) -> String {
        let mut pattern = self.flags.inline_prefix();
        pattern.push_str(&self.prefix);
        pattern.push_str(&self.body);
        for _ in 0..self.open_captures {
            pattern.push(')');
        }
        pattern.push_str(&self.suffix);
        pattern
    }

    /// Compile the expression
    ///
    /// # Errors
    /// Returns an error recorded while chaining, or the engine's error if
    /// the assembled pattern does not compile.
    pub fn regex(&self) -> Result<Regex> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let pattern = self.pattern();
        debug!(%pattern, "compiling expression");
        Ok(Regex::new(&pattern)?)
    }

    /// Check whether the expression matches anywhere in `s`
    pub fn test(&self, s: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(s))
    }

    /// Replace every match in `src` with the literal text `dst`
    pub fn replace(&self, src: &str, dst: &str) -> Result<String> {
        Ok(self.regex()?.replace_all(src, NoExpand(dst)).into_owned())
    }

    /// Replace every match in `src`, expanding `$1` / `$name` in `template`
    ///
    /// # Example
    /// ```
    /// use verex::Verex;
    ///
    /// let v = Verex::new().begin_capture().word().end_capture().find("@");
    /// assert_eq!(v.replace_expand("me@ you@", "<$1>").unwrap(), "<me> <you>");
    /// ```
    pub fn replace_expand(&self, src: &str, template: &str) -> Result<String> {
        Ok(self.regex()?.replace_all(src, template).into_owned())
    }

    /// Texts of every non-overlapping match in `s`
    pub fn find_all(&self, s: &str) -> Result<Vec<String>> {
        Ok(self
            .regex()?
            .find_iter(s)
            .map(|m| m.as_str().to_string())
            .collect())
    }

    /// Captured groups of every non-overlapping match in `s`
    ///
    /// Index 0 of each entry is the whole match, followed by one entry per
    /// capture group in order of appearance. A group that did not take part
    /// in the match yields an empty string.
    pub fn captures(&self, s: &str) -> Result<Vec<Vec<String>>> {
        let regex = self.regex()?;
        Ok(regex
            .captures_iter(s)
            .map(|caps| {
                caps.iter()
                    .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect()
            })
            .collect())
    }
}

impl fmt::Display for Verex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())
    }
}
