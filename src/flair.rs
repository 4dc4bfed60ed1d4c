//! Decomposes raw flair strings into their component labels.

/// A flair string split into its primary and optional secondary label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Flair {
    primary: String,
    secondary: Option<String>,
}

impl Flair {
    /// The primary label. Always present, possibly empty.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The secondary label, if the flair had one.
    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }
}

/// The rule used to decompose a raw flair string.
///
/// Subreddits encode a two-level flair in a single string, usually with a
/// run of emoji tags in front of it:
///
/// ```text
/// :centralmichigan: :michigan: Central Michigan • Michigan
/// ```
///
/// Only the text after the last `marker` occurrence is considered the
/// flair itself, and it is split on `delimiter` into at most two labels.
/// Both are ordinary substrings and can be changed per run, since different
/// subreddits separate their flairs differently.
///
/// # Examples
///
/// ```
/// use flairtally::flair::SplitRule;
///
/// let rule = SplitRule::default();
/// let flair = rule.decompose(":ohiostate: :bigten: Ohio State • Big Ten");
/// assert_eq!(flair.primary(), "Ohio State");
/// assert_eq!(flair.secondary(), Some("Big Ten"));
/// ```
///
/// A flair with no delimiter has no secondary label:
///
/// ```
/// use flairtally::flair::SplitRule;
///
/// let rule = SplitRule::default();
/// let flair = rule.decompose("None");
/// assert_eq!(flair.primary(), "None");
/// assert_eq!(flair.secondary(), None);
/// ```
#[derive(Clone, Debug)]
pub struct SplitRule {
    marker: String,
    delimiter: String,
}

impl SplitRule {
    /// The prefix marker most flaired subreddits use before the label text.
    pub const DEFAULT_MARKER: &'static str = ": ";

    /// The separator between primary and secondary labels on /r/CFB.
    ///
    /// Some flairs contain `/r/`, so a bare slash is not a safe default.
    pub const DEFAULT_DELIMITER: &'static str = " • ";

    /// Creates a rule that strips everything up to the last `marker` and
    /// splits the remainder on `delimiter`.
    pub fn new(marker: impl Into<String>, delimiter: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            delimiter: delimiter.into(),
        }
    }

    /// Splits `raw` into a primary and optional secondary label.
    ///
    /// Never fails: malformed or empty input degrades to a single-part
    /// flair equal to the trimmed input. The literal string `"None"` that
    /// stands in for an unset flair is not special-cased; it becomes an
    /// ordinary primary label.
    pub fn decompose(&self, raw: &str) -> Flair {
        let effective = if self.marker.is_empty() {
            raw
        } else {
            raw.rsplit_once(&self.marker).map_or(raw, |(_, rest)| rest)
        };

        let split = if self.delimiter.is_empty() {
            None
        } else {
            effective.split_once(&self.delimiter)
        };

        match split {
            Some((primary, secondary)) => Flair {
                primary: primary.trim().to_string(),
                secondary: Some(secondary.trim().to_string()),
            },
            None => Flair {
                primary: effective.trim().to_string(),
                secondary: None,
            },
        }
    }
}

impl Default for SplitRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MARKER, Self::DEFAULT_DELIMITER)
    }
}
