// src/core/line_ending.rs
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[serde(alias = "linux")]
    Lf,
    #[serde(alias = "windows")]
    CrLf,
    #[serde(alias = "macold")]
    Cr,
}

impl LineEnding {
    /// Every style, in a fixed order.
    #[inline]
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Lf, Self::CrLf, Self::Cr]
    }

    #[inline]
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Lf => b"\n",
            Self::CrLf => b"\r\n",
            Self::Cr => b"\r",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Lf => 0,
            Self::CrLf => 1,
            Self::Cr => 2,
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "lf" | "linux" => Ok(Self::Lf),
            "crlf" | "windows" => Ok(Self::CrLf),
            "cr" | "macold" => Ok(Self::Cr),
            _ => Err(format!(
                "unknown line ending '{name}' (expected lf, crlf, cr, linux, windows or macold)"
            )),
        }
    }
}

/// The line-ending style a run asks for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndRequest {
    /// Keep each file's own style; only mixed files are normalized.
    #[default]
    Keep,
    /// Convert every file to this style.
    Force(LineEnding),
}

/// Line-ending statistics of one buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineEndingProfile {
    /// Most frequent terminator; `None` when the buffer has no terminator.
    pub dominant: Option<LineEnding>,
    /// At least one terminator differs from the dominant one.
    pub mixed: bool,
    counts: [usize; 3],
}

impl LineEndingProfile {
    #[inline]
    #[must_use]
    pub const fn count(&self, ending: LineEnding) -> usize {
        self.counts[ending.slot()]
    }

    /// Decides which style, if any, the buffer must be converted to.
    ///
    /// With [`LineEndRequest::Keep`] only a mixed buffer is converted, to its
    /// dominant style. With [`LineEndRequest::Force`] the buffer is converted
    /// whenever any of its terminators differs from the requested style.
    #[must_use]
    pub fn conversion_target(&self, request: LineEndRequest) -> Option<LineEnding> {
        let dominant = self.dominant?;
        match request {
            LineEndRequest::Keep => self.mixed.then_some(dominant),
            LineEndRequest::Force(target) => (self.mixed || dominant != target).then_some(target),
        }
    }
}

/// Terminator starting at `index`, and its length in bytes. `\r\n` wins over
/// a lone `\r`.
fn terminator_at(bytes: &[u8], index: usize) -> Option<(LineEnding, usize)> {
    match bytes.get(index)? {
        b'\n' => Some((LineEnding::Lf, 1)),
        b'\r' if bytes.get(index.saturating_add(1)) == Some(&b'\n') => Some((LineEnding::CrLf, 2)),
        b'\r' => Some((LineEnding::Cr, 1)),
        _ => None,
    }
}

/// Scans a buffer once and classifies every line terminator.
///
/// # Arguments
///
/// * `bytes` - Raw file contents
///
/// # Returns
///
/// The profile with the dominant style (ties go to the style seen first)
/// and the mixed flag
#[must_use]
pub fn analyze(bytes: &[u8]) -> LineEndingProfile {
    let mut counts = [0_usize; 3];
    let mut first_seen: Vec<LineEnding> = Vec::with_capacity(3);

    let mut index = 0_usize;
    while index < bytes.len() {
        if let Some((ending, len)) = terminator_at(bytes, index) {
            if let Some(count) = counts.get_mut(ending.slot()) {
                *count = count.saturating_add(1);
            }
            if !first_seen.contains(&ending) {
                first_seen.push(ending);
            }
            index = index.saturating_add(len);
        } else {
            index = index.saturating_add(1);
        }
    }

    // max_by_key keeps the last maximum, so walk the first-seen order in reverse
    let dominant = first_seen
        .iter()
        .rev()
        .copied()
        .max_by_key(|ending| counts[ending.slot()]);

    LineEndingProfile {
        dominant,
        mixed: first_seen.len() > 1,
        counts,
    }
}

/// Rewrites every line terminator in `bytes` as `target`. Nothing else changes.
#[must_use]
pub fn convert(bytes: &[u8], target: LineEnding) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len().saturating_add(bytes.len() / 16));
    let mut index = 0_usize;
    while let Some(&byte) = bytes.get(index) {
        if let Some((_, len)) = terminator_at(bytes, index) {
            out.extend_from_slice(target.as_bytes());
            index = index.saturating_add(len);
        } else {
            out.push(byte);
            index = index.saturating_add(1);
        }
    }
    out
}

/// Resolves line endings for a formatted buffer.
///
/// # Returns
///
/// The profile of `bytes` as given, and the converted buffer when a
/// conversion was needed
#[must_use]
pub fn resolve(bytes: &[u8], request: LineEndRequest) -> (LineEndingProfile, Option<Vec<u8>>) {
    let profile = analyze(bytes);
    let converted = profile
        .conversion_target(request)
        .map(|target| convert(bytes, target));
    (profile, converted)
}
