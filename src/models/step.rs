// Action steps - the four acquisition primitives a plan is made of
use crate::models::variant::VariantSet;
use serde::{Deserialize, Serialize};

/// One ingredient slot of a crafting recipe, scaled per craft operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: VariantSet<String>,
    pub per_craft: u32,
}

/// What a single craft operation produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftOutput {
    pub item: VariantSet<String>,
    pub per_craft: u32,
}

/// A concrete acquisition action. Fields that admit interchangeable
/// alternatives (block names, item names, fuel choices) carry a
/// [`VariantSet`]; everything else is a plain value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionStep {
    Craft {
        what: VariantSet<String>,
        /// Number of craft operations to perform.
        count: u32,
        ingredients: Vec<Ingredient>,
        result: CraftOutput,
        requires_station: bool,
    },
    Smelt {
        what: String,
        /// Number of items to smelt.
        count: u32,
        input: VariantSet<String>,
        fuel: VariantSet<String>,
        result: String,
    },
    Mine {
        /// Candidate blocks to break.
        what: VariantSet<String>,
        target_item: VariantSet<String>,
        count: u32,
        /// Tool to hold while mining; None means bare hands suffice.
        tool: Option<VariantSet<String>>,
    },
    Hunt {
        /// Candidate creatures to kill.
        what: VariantSet<String>,
        target_item: String,
        count: u32,
    },
}

impl ActionStep {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ActionStep::Craft { .. } => "craft",
            ActionStep::Smelt { .. } => "smelt",
            ActionStep::Mine { .. } => "mine",
            ActionStep::Hunt { .. } => "hunt",
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            ActionStep::Craft { count, .. }
            | ActionStep::Smelt { count, .. }
            | ActionStep::Mine { count, .. }
            | ActionStep::Hunt { count, .. } => *count,
        }
    }

    /// The item this step exists to produce (first candidate when variant).
    pub fn produced_item(&self) -> &str {
        match self {
            ActionStep::Craft { result, .. } => result.item.first(),
            ActionStep::Smelt { result, .. } => result,
            ActionStep::Mine { target_item, .. } => target_item.first(),
            ActionStep::Hunt { target_item, .. } => target_item,
        }
    }

    /// One-line human-readable rendering for path listings and tree dumps.
    pub fn describe(&self) -> String {
        match self {
            ActionStep::Craft {
                what,
                count,
                result,
                requires_station,
                ..
            } => {
                let station = if *requires_station { " @table" } else { "" };
                format!(
                    "craft {}x {} (yields {} per craft){}",
                    count,
                    what.describe(),
                    result.per_craft,
                    station
                )
            }
            ActionStep::Smelt {
                what, count, fuel, ..
            } => format!("smelt {}x {} (fuel: {})", count, what, fuel.describe()),
            ActionStep::Mine {
                what, count, tool, ..
            } => match tool {
                Some(tool) => format!(
                    "mine {}x {} with {}",
                    count,
                    what.describe(),
                    tool.describe()
                ),
                None => format!("mine {}x {}", count, what.describe()),
            },
            ActionStep::Hunt {
                what,
                target_item,
                count,
            } => format!("hunt {} for {}x {}", what.describe(), count, target_item),
        }
    }
}
