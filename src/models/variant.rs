// Variant sets - ordered candidate collections for interchangeable values
use serde::{Deserialize, Serialize};

/// Metadata attached to a single candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateTag {
    /// Any member of the family satisfies the consumer (e.g. "any planks").
    Generic,
    /// The candidate was pinned to a concrete wood species.
    SpeciesSpecific,
    /// The candidate list was filtered down by world availability.
    WorldPruned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate<T> {
    pub value: T,
    pub tag: Option<CandidateTag>,
}

/// An ordered, non-empty collection of interchangeable candidate values.
///
/// A set with a single candidate behaves as a concrete value; multi-candidate
/// sets defer the choice to whoever consumes the emitted step. Construction
/// goes through the helpers below so emptiness is rejected up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSet<T> {
    candidates: Vec<Candidate<T>>,
}

impl<T> VariantSet<T> {
    pub fn single(value: T) -> Self {
        Self {
            candidates: vec![Candidate { value, tag: None }],
        }
    }

    pub fn tagged(value: T, tag: CandidateTag) -> Self {
        Self {
            candidates: vec![Candidate {
                value,
                tag: Some(tag),
            }],
        }
    }

    /// Build a set from (value, tag) pairs. Returns None for an empty input
    /// so callers drop the surrounding method instead of carrying a hollow set.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (T, Option<CandidateTag>)>) -> Option<Self> {
        let candidates: Vec<Candidate<T>> = pairs
            .into_iter()
            .map(|(value, tag)| Candidate { value, tag })
            .collect();
        if candidates.is_empty() {
            None
        } else {
            Some(Self { candidates })
        }
    }

    /// Build an all-same-tag set from plain values.
    pub fn from_values(
        values: impl IntoIterator<Item = T>,
        tag: Option<CandidateTag>,
    ) -> Option<Self> {
        Self::from_pairs(values.into_iter().map(|v| (v, tag)))
    }

    pub fn first(&self) -> &T {
        &self.candidates[0].value
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        false // construction guarantees at least one candidate
    }

    /// A single-candidate set behaves as a concrete value.
    pub fn is_concrete(&self) -> bool {
        self.candidates.len() == 1
    }

    pub fn candidates(&self) -> &[Candidate<T>] {
        &self.candidates
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.candidates.iter().map(|c| &c.value)
    }
}

impl<T: PartialEq> VariantSet<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.candidates.iter().any(|c| &c.value == value)
    }
}

impl VariantSet<String> {
    /// Candidate names joined for human-readable output.
    pub fn describe(&self) -> String {
        if self.is_concrete() {
            self.first().clone()
        } else {
            format!(
                "[{}]",
                self.values().cloned().collect::<Vec<_>>().join("|")
            )
        }
    }
}
