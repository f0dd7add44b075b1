// src/core/wildcard.rs
use serde::Deserialize;

/// Whether name comparisons distinguish letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// The policy of the host filesystem family: case-preserving but
    /// insensitive on Windows and macOS, sensitive everywhere else.
    #[inline]
    #[must_use]
    pub const fn platform() -> Self {
        if cfg!(any(windows, target_os = "macos")) {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }

    #[inline]
    #[must_use]
    pub fn chars_eq(self, left: char, right: char) -> bool {
        match self {
            Self::Sensitive => left == right,
            Self::Insensitive => left == right || left.to_lowercase().eq(right.to_lowercase()),
        }
    }

    #[inline]
    #[must_use]
    pub fn str_eq(self, left: &str, right: &str) -> bool {
        match self {
            Self::Sensitive => left == right,
            Self::Insensitive => {
                left.chars().count() == right.chars().count()
                    && left.chars().zip(right.chars()).all(|(l, r)| self.chars_eq(l, r))
            }
        }
    }
}

impl Default for CaseSensitivity {
    #[inline]
    fn default() -> Self {
        Self::platform()
    }
}

/// Returns `true` when `mask` contains a `*` or `?` wildcard.
#[inline]
#[must_use]
pub fn has_wildcard(mask: &str) -> bool {
    mask.contains(['*', '?'])
}

/// Matches a single path segment against a wildcard mask.
///
/// `*` matches any run of characters (including none) and `?` matches exactly
/// one character. There is no escaping and no character classes. The match is
/// iterative: on a mismatch the scan resumes one character further into the
/// text from the most recent `*`, so stack use does not depend on the pattern.
///
/// # Arguments
///
/// * `text` - The file name to test
/// * `mask` - The wildcard mask
/// * `case` - Whether letter case is significant
///
/// # Returns
///
/// `true` if the whole of `text` is matched by the whole of `mask`
#[must_use]
pub fn matches(text: &str, mask: &str, case: CaseSensitivity) -> bool {
    let text: Vec<char> = text.chars().collect();
    let mask: Vec<char> = mask.chars().collect();

    let mut t = 0_usize;
    let mut m = 0_usize;
    // (mask position just past the last `*`, text position that `*` currently ends at)
    let mut checkpoint: Option<(usize, usize)> = None;

    while let Some(&tc) = text.get(t) {
        match mask.get(m) {
            Some('*') => {
                while mask.get(m) == Some(&'*') {
                    m = m.saturating_add(1);
                }
                if m == mask.len() {
                    return true;
                }
                checkpoint = Some((m, t));
            }
            Some('?') => {
                t = t.saturating_add(1);
                m = m.saturating_add(1);
            }
            Some(&mc) if case.chars_eq(mc, tc) => {
                t = t.saturating_add(1);
                m = m.saturating_add(1);
            }
            _ => match checkpoint {
                Some((star_m, star_t)) => {
                    let resume = star_t.saturating_add(1);
                    checkpoint = Some((star_m, resume));
                    m = star_m;
                    t = resume;
                }
                None => return false,
            },
        }
    }

    while mask.get(m) == Some(&'*') {
        m = m.saturating_add(1);
    }
    m == mask.len()
}
