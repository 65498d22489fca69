// Inventory - name to count map with the helpers planning needs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: HashMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_counts(counts: impl IntoIterator<Item = (String, u32)>) -> Self {
        Self {
            items: counts.into_iter().filter(|(_, n)| *n > 0).collect(),
        }
    }

    /// Load a `{ "item_name": count }` JSON file produced by the execution layer.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let inventory: Inventory = serde_json::from_str(&content)?;
        Ok(inventory)
    }

    pub fn count(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn has_at_least(&self, item: &str, count: u32) -> bool {
        self.count(item) >= count
    }

    pub fn add(&mut self, item: &str, count: u32) {
        if count > 0 {
            *self.items.entry(item.to_string()).or_insert(0) += count;
        }
    }

    /// Remove up to `count` of `item`, returning how many were actually removed.
    pub fn remove_up_to(&mut self, item: &str, count: u32) -> u32 {
        match self.items.get_mut(item) {
            Some(have) => {
                let taken = count.min(*have);
                *have -= taken;
                if *have == 0 {
                    self.items.remove(item);
                }
                taken
            }
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u32)> {
        self.items.iter()
    }
}
