// Action paths - concrete, ordered step sequences produced by enumeration
use crate::models::step::ActionStep;
use serde::{Deserialize, Serialize};

/// A concrete, ordered list of steps sufficient to obtain the target.
/// No tree alternatives remain; variant sets inside individual steps pass
/// through for the executor to pick from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPath {
    pub steps: Vec<ActionStep>,
}

impl ActionPath {
    pub fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Stable structural key for set comparison across enumeration
    /// strategies. Two paths with equal keys are the same plan.
    pub fn normalized_key(&self) -> String {
        serde_json::to_string(&self.steps).unwrap_or_default()
    }

    /// Multi-line human-readable rendering, one numbered step per line.
    pub fn describe(&self) -> String {
        if self.steps.is_empty() {
            return "  (nothing to do - inventory already satisfies the goal)".to_string();
        }
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("  {}. {}", i + 1, step.describe()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
