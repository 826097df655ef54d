//! Free-text classification.
//!
//! Source vocabularies are inconsistent free text ("Such-and-such National
//! Forest", "GREEN MTN NF"), so classification is case-insensitive
//! substring matching against an ordered rule list, never exact match.

/// Ordered substring rules mapping free text to a classification label.
///
/// Rules are tested in the order given; the first needle found in the
/// lower-cased input wins. No match yields `None`, never an empty or
/// default label.
///
/// # Example
///
/// ```
/// use layermill::derive::TextClassifier;
///
/// let designations = TextClassifier::new([
///     ("national forest", "national_forest"),
///     ("state park", "state_park"),
/// ]);
///
/// assert_eq!(
///     designations.classify("Green Mountain National Forest Unit"),
///     Some("national_forest")
/// );
/// assert_eq!(designations.classify("Unknown Preserve"), None);
/// ```
#[derive(Debug, Clone)]
pub struct TextClassifier {
    rules: Vec<(String, String)>,
}

impl TextClassifier {
    /// Build a classifier from (needle, label) rules.
    ///
    /// Needles are stored lower-cased; rule order is match priority.
    pub fn new<I, N, L>(rules: I) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: Into<String>,
    {
        let rules = rules
            .into_iter()
            .map(|(needle, label)| (needle.into().to_lowercase(), label.into()))
            .collect();
        Self { rules }
    }

    /// Classify `text`, returning the first matching rule's label.
    pub fn classify(&self, text: &str) -> Option<&str> {
        let haystack = text.to_lowercase();
        self.rules
            .iter()
            .find(|(needle, _)| haystack.contains(needle.as_str()))
            .map(|(_, label)| label.as_str())
    }

    /// Classify an optional input, e.g. a tag lookup result.
    pub fn classify_opt(&self, text: Option<&str>) -> Option<&str> {
        text.and_then(|t| self.classify(t))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the classifier has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
