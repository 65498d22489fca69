// Path weight calculator - scalar cost assignment for linear paths
use crate::data::parse_tool_item;
use crate::models::{ActionPath, ActionStep};
use crate::planner::world_budget::WorldBudget;

/// Fixed cost every step pays regardless of kind.
pub const STEP_BASE_COST: f64 = 1.0;
/// Per-craft-operation cost (batching is cheap).
pub const CRAFT_UNIT_COST: f64 = 0.05;
/// Per-item smelting cost.
pub const SMELT_UNIT_COST: f64 = 0.3;
/// Per-block mining cost; dominates bulk requests so block-form mining wins.
pub const MINE_UNIT_COST: f64 = 0.6;
/// Per-kill hunting cost.
pub const HUNT_UNIT_COST: f64 = 0.8;
/// Cost per tier index of the tool a step holds.
pub const TOOL_TIER_PENALTY: f64 = 0.5;
/// Cost per rank of the fuel a smelt burns (coal 0, charcoal 1, other 2).
pub const FUEL_RANK_PENALTY: f64 = 0.25;
/// Cost per block of distance to the nearest usable resource.
pub const DISTANCE_COST_PER_BLOCK: f64 = 0.01;

fn fuel_rank(fuel: &str) -> u32 {
    match fuel {
        "coal" => 0,
        "charcoal" => 1,
        _ => 2,
    }
}

fn tool_penalty(tool: &Option<crate::models::VariantSet<String>>) -> f64 {
    match tool {
        Some(tool) => match parse_tool_item(tool.first()) {
            Some((_, tier)) => tier.index() as f64 * TOOL_TIER_PENALTY,
            None => 0.0,
        },
        None => 0.0,
    }
}

/// Assigns a scalar cost to steps and paths. Distance terms only apply when
/// the tree was built against a world budget; closer resources cost less.
#[derive(Debug, Clone, Copy)]
pub struct PathWeigher<'a> {
    budget: Option<&'a WorldBudget>,
}

impl<'a> PathWeigher<'a> {
    pub fn new(budget: Option<&'a WorldBudget>) -> Self {
        Self { budget }
    }

    fn block_distance_cost(&self, blocks: &crate::models::VariantSet<String>) -> f64 {
        let Some(budget) = self.budget else {
            return 0.0;
        };
        // Nearest candidate decides; a candidate the snapshot never saw is
        // treated as sitting at the threshold.
        let distance = blocks
            .values()
            .map(|b| budget.closest_block_distance(b))
            .fold(f64::INFINITY, f64::min);
        let effective = if distance.is_finite() {
            distance
        } else {
            budget.distance_threshold()
        };
        effective * DISTANCE_COST_PER_BLOCK
    }

    fn entity_distance_cost(&self, entities: &crate::models::VariantSet<String>) -> f64 {
        let Some(budget) = self.budget else {
            return 0.0;
        };
        let distance = entities
            .values()
            .map(|e| budget.closest_entity_distance(e))
            .fold(f64::INFINITY, f64::min);
        let effective = if distance.is_finite() {
            distance
        } else {
            budget.distance_threshold()
        };
        effective * DISTANCE_COST_PER_BLOCK
    }

    pub fn step_weight(&self, step: &ActionStep) -> f64 {
        match step {
            ActionStep::Craft { count, .. } => STEP_BASE_COST + *count as f64 * CRAFT_UNIT_COST,
            ActionStep::Smelt { count, fuel, .. } => {
                STEP_BASE_COST
                    + *count as f64 * SMELT_UNIT_COST
                    + fuel_rank(fuel.first()) as f64 * FUEL_RANK_PENALTY
            }
            ActionStep::Mine {
                what, count, tool, ..
            } => {
                STEP_BASE_COST
                    + *count as f64 * MINE_UNIT_COST
                    + tool_penalty(tool)
                    + self.block_distance_cost(what)
            }
            ActionStep::Hunt { what, count, .. } => {
                STEP_BASE_COST + *count as f64 * HUNT_UNIT_COST + self.entity_distance_cost(what)
            }
        }
    }

    pub fn path_weight(&self, path: &ActionPath) -> f64 {
        path.steps.iter().map(|step| self.step_weight(step)).sum()
    }
}
