//! Mode flags applied when an expression is compiled

/// Mode flags for an expression
///
/// Rendered as an inline modifier group in front of the pattern, so the
/// engine sees them as part of the pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeFlags {
    /// Case insensitive matching (i)
    pub case_insensitive: bool,
    /// Multiline mode - ^ and $ match line boundaries (m)
    pub multiline: bool,
}

impl Default for ModeFlags {
    fn default() -> Self {
        ModeFlags {
            case_insensitive: false,
            multiline: true,
        }
    }
}

impl ModeFlags {
    /// Parse mode flags from a string like "im"
    ///
    /// Unknown letters are ignored. Flags not named in `flags` are off, so
    /// `from_string("")` disables multiline anchoring.
    pub fn from_string(flags: &str) -> Self {
        let mut mode = ModeFlags {
            case_insensitive: false,
            multiline: false,
        };
        for c in flags.chars() {
            match c {
                'i' => mode.case_insensitive = true,
                'm' => mode.multiline = true,
                _ => {}
            }
        }
        mode
    }

    /// The active modifier letters, in `i`, `m` order
    pub fn letters(&self) -> String {
        let mut letters = String::new();
        if self.case_insensitive {
            letters.push('i');
        }
        if self.multiline {
            letters.push('m');
        }
        letters
    }

    /// Render the inline modifier group, e.g. `(?im)`
    ///
    /// Returns an empty string when no flag is active.
    pub fn inline_prefix(&self) -> String {
        let letters = self.letters();
        if letters.is_empty() {
            String::new()
        } else {
            format!("(?{})", letters)
        }
    }
}
