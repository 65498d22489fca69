// Action tree - AND/OR structure of alternative acquisition strategies
use crate::models::step::ActionStep;
use crate::planner::world_budget::WorldBudget;
use serde::{Deserialize, Serialize};

/// OR-node: the ways to obtain `count` more of `item`.
///
/// `satisfied == true` marks a trivially-satisfied leaf (inventory already
/// covers the request). `satisfied == false` with zero alternatives means
/// the item is currently unobtainable along this branch - a valid result,
/// not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalNode {
    pub item: String,
    pub count: u32,
    pub satisfied: bool,
    pub alternatives: Vec<ActionNode>,
}

impl GoalNode {
    pub fn satisfied(item: &str, count: u32) -> Self {
        Self {
            item: item.to_string(),
            count,
            satisfied: true,
            alternatives: Vec::new(),
        }
    }

    pub fn unobtainable(item: &str, count: u32) -> Self {
        Self {
            item: item.to_string(),
            count,
            satisfied: false,
            alternatives: Vec::new(),
        }
    }

    pub fn with_alternatives(item: &str, count: u32, alternatives: Vec<ActionNode>) -> Self {
        Self {
            item: item.to_string(),
            count,
            satisfied: false,
            alternatives,
        }
    }

    /// True when at least one route (or the inventory itself) covers the goal.
    pub fn is_obtainable(&self) -> bool {
        self.satisfied || !self.alternatives.is_empty()
    }
}

/// AND-node: one acquisition step plus everything it requires first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionNode {
    pub step: ActionStep,
    pub requirements: Vec<GoalNode>,
}

impl ActionNode {
    pub fn new(step: ActionStep, requirements: Vec<GoalNode>) -> Self {
        Self { step, requirements }
    }
}

/// The immutable result of one `plan(...)` call.
///
/// Carries the world budget the tree was built against (used by the
/// lowest-weight enumerator) and the persistent-item set the enumerators
/// deduplicate on.
#[derive(Debug, Clone)]
pub struct PlanTree {
    pub item: String,
    pub count: u32,
    pub game_version: String,
    pub root: GoalNode,
    pub budget: Option<WorldBudget>,
    pub persistent_items: Vec<String>,
}

impl PlanTree {
    pub fn is_obtainable(&self) -> bool {
        self.root.is_obtainable()
    }

    /// Human-readable tree dump (diagnostic output, not part of the contract).
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "🌳 Plan tree: {}x {} (game {})\n",
            self.count, self.item, self.game_version
        ));
        render_goal(&self.root, 1, &mut out);
        out
    }
}

fn render_goal(goal: &GoalNode, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    if goal.satisfied {
        out.push_str(&format!(
            "{}✔ {}x {} (already in inventory)\n",
            pad, goal.count, goal.item
        ));
        return;
    }
    if goal.alternatives.is_empty() {
        out.push_str(&format!("{}✘ {}x {} (unobtainable)\n", pad, goal.count, goal.item));
        return;
    }
    out.push_str(&format!(
        "{}? {}x {} ({} alternative{})\n",
        pad,
        goal.count,
        goal.item,
        goal.alternatives.len(),
        if goal.alternatives.len() == 1 { "" } else { "s" }
    ));
    for alternative in &goal.alternatives {
        out.push_str(&format!("{}  ↳ {}\n", pad, alternative.step.describe()));
        for requirement in &alternative.requirements {
            render_goal(requirement, depth + 2, out);
        }
    }
}
