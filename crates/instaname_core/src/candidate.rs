//! Generated name candidates.

use serde::{Deserialize, Serialize};

/// One generated name and its promotional blurb.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct NameCandidate {
    /// The brand name, one or two words
    name: String,
    /// Short catchy line suitable for a social post
    description: String,
}

impl NameCandidate {
    /// Creates a new candidate.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A non-empty, ordered batch of candidates returned by one generation.
///
/// # Examples
///
/// ```
/// use instaname_core::{NameBatch, NameCandidate};
///
/// assert!(NameBatch::new(Vec::new()).is_none());
///
/// let batch = NameBatch::new(vec![NameCandidate::new("Stylo", "Wear your style.")]).unwrap();
/// assert_eq!(batch.names().collect::<Vec<_>>(), vec!["Stylo"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameBatch(Vec<NameCandidate>);

impl NameBatch {
    /// Wraps the candidates, or returns `None` when there are none.
    pub fn new(candidates: Vec<NameCandidate>) -> Option<Self> {
        if candidates.is_empty() {
            None
        } else {
            Some(Self(candidates))
        }
    }

    /// Number of candidates in the batch.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the candidates in arrival order.
    pub fn iter(&self) -> std::slice::Iter<'_, NameCandidate> {
        self.0.iter()
    }

    /// Iterates over the candidate names in arrival order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|candidate| candidate.name().as_str())
    }

    /// Borrows the candidates as a slice.
    pub fn as_slice(&self) -> &[NameCandidate] {
        &self.0
    }

    /// Unwraps the candidates.
    pub fn into_vec(self) -> Vec<NameCandidate> {
        self.0
    }
}

impl IntoIterator for NameBatch {
    type Item = NameCandidate;
    type IntoIter = std::vec::IntoIter<NameCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NameBatch {
    type Item = &'a NameCandidate;
    type IntoIter = std::slice::Iter<'a, NameCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
