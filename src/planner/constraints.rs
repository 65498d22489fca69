// Variant constraints - pinned choices for interchangeable item families
use crate::v_debug;
use std::collections::HashMap;

/// Tracks, per logical family ("wood"), whether a concrete choice has been
/// committed for the current expansion scope.
///
/// Constructed fresh per `plan` call; cloned at branch points so a pin made
/// inside one sub-tree never leaks into its siblings.
#[derive(Debug, Clone, Default)]
pub struct VariantConstraints {
    pinned: HashMap<String, String>,
    generic_enabled: bool,
}

/// The one family the bundled tables use. Kept as a constant so builder and
/// tests agree on the spelling.
pub const WOOD_FAMILY: &str = "wood";

impl VariantConstraints {
    pub fn new(generic_enabled: bool) -> Self {
        Self {
            pinned: HashMap::new(),
            generic_enabled,
        }
    }

    /// When generic resolution is disabled every family must resolve to a
    /// concrete member even if a generic alternative would satisfy the recipe.
    pub fn generic_enabled(&self) -> bool {
        self.generic_enabled
    }

    pub fn pinned(&self, family: &str) -> Option<&str> {
        self.pinned.get(family).map(String::as_str)
    }

    /// Commit a choice for the remainder of the current sub-tree.
    pub fn pin(&mut self, family: &str, value: &str) {
        v_debug!("📌 Pinning family '{}' to '{}'", family, value);
        self.pinned.insert(family.to_string(), value.to_string());
    }

    /// Effective candidates: the single pinned value when committed, the
    /// full candidate list otherwise.
    pub fn propose(&self, family: &str, candidates: Vec<String>) -> Vec<String> {
        match self.pinned.get(family) {
            Some(value) => {
                if candidates.iter().any(|c| c == value) {
                    vec![value.clone()]
                } else {
                    // The pinned member is not in this candidate list (e.g.
                    // pruned away by the world); nothing satisfies the family.
                    Vec::new()
                }
            }
            None => candidates,
        }
    }
}
