// Tool selector - minimal viable tool tier for a harvest
use crate::config::ToolConfig;
use crate::data::{GameData, HarvestRequirement, ToolTier, parse_tool_item, tool_item_name};
use crate::models::{CandidateTag, Inventory, VariantSet};
use crate::v_debug;

/// Outcome of selecting a tool for one block.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolChoice {
    /// What to hold while mining. None means bare hands.
    pub tool: Option<VariantSet<String>>,
    /// A tool that must be acquired first, when no owned tool qualifies.
    pub acquire: Option<String>,
}

impl ToolChoice {
    fn bare_hands() -> Self {
        Self {
            tool: None,
            acquire: None,
        }
    }
}

pub struct ToolSelector<'a> {
    data: &'a GameData,
    config: &'a ToolConfig,
}

impl<'a> ToolSelector<'a> {
    pub fn new(data: &'a GameData, config: &'a ToolConfig) -> Self {
        Self { data, config }
    }

    fn is_avoided(&self, tool_name: &str) -> bool {
        self.config.avoid_tool.as_deref() == Some(tool_name)
    }

    /// Lowest-tier owned tool of the right kind at or above the required
    /// tier. Owning a better tool than necessary never triggers a downgrade
    /// craft.
    fn owned_tool(&self, requirement: HarvestRequirement, inventory: &Inventory) -> Option<String> {
        let mut best: Option<(ToolTier, String)> = None;
        for (name, count) in inventory.iter() {
            if *count == 0 || self.is_avoided(name) {
                continue;
            }
            if let Some((kind, tier)) = parse_tool_item(name) {
                if kind == requirement.kind && tier >= requirement.min_tier {
                    let better = match &best {
                        Some((best_tier, _)) => tier < *best_tier,
                        None => true,
                    };
                    if better {
                        best = Some((tier, name.clone()));
                    }
                }
            }
        }
        best.map(|(_, name)| name)
    }

    /// Craftable candidate tool names at or above the required tier, in
    /// ascending tier order, with the avoid list applied.
    fn craftable_candidates(&self, requirement: HarvestRequirement) -> Vec<String> {
        ToolTier::CRAFTABLE
            .iter()
            .filter(|tier| **tier >= requirement.min_tier)
            .filter_map(|tier| tool_item_name(*tier, requirement.kind))
            .filter(|name| !self.is_avoided(name))
            .collect()
    }

    /// Pick the tool for `block` given what the path will hold in hand.
    ///
    /// Returns None when the block can never be harvested under the current
    /// constraints (every candidate excluded), which drops the mine method.
    pub fn select(&self, block: &str, inventory: &Inventory) -> Option<ToolChoice> {
        let requirement = match self.data.harvest_requirement(block) {
            Some(req) => req,
            None => return Some(ToolChoice::bare_hands()),
        };

        if let Some(owned) = self.owned_tool(requirement, inventory) {
            v_debug!("⛏️ Reusing owned {} for {}", owned, block);
            return Some(ToolChoice {
                tool: Some(VariantSet::single(owned)),
                acquire: None,
            });
        }

        let candidates = self.craftable_candidates(requirement);
        if candidates.is_empty() {
            v_debug!("🚫 No permissible tool can harvest {}", block);
            return None;
        }

        // The acquisition sub-tree always targets the minimal tier; with
        // prefer_minimal_tools off, the step advertises every viable tier
        // so the executor may substitute a better one it comes across.
        let acquire = candidates[0].clone();
        let tool = if self.config.prefer_minimal_tools {
            VariantSet::single(acquire.clone())
        } else {
            VariantSet::from_values(candidates, Some(CandidateTag::Generic))
                .expect("candidate list checked non-empty")
        };

        Some(ToolChoice {
            tool: Some(tool),
            acquire: Some(acquire),
        })
    }
}
