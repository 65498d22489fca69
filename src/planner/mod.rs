// Planner module - tree building, enumeration and the plan entry point

pub mod constraints;
pub mod enumerate;
pub mod fuel_resolver;
pub mod tool_selector;
pub mod tree_builder;
pub mod weight;
pub mod world_budget;

pub use constraints::*;
pub use enumerate::*;
pub use fuel_resolver::*;
pub use tool_selector::*;
pub use tree_builder::*;
pub use weight::*;
pub use world_budget::*;

use crate::config::PlannerConfig;
use crate::data::GameDataSource;
use crate::models::{Inventory, PlanTree, WorldSnapshot};
use crate::{v_info, v_summary};

#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// What the bot already holds (unique names, counts >= 0)
    pub inventory: Inventory,
    /// Drop mine/hunt methods whose source is absent or out of range.
    /// Requires `world_snapshot`.
    pub prune_with_world: bool,
    pub world_snapshot: Option<WorldSnapshot>,
    /// Merge structurally identical species branches into variant-set nodes
    pub combine_similar_nodes: bool,
    pub config: PlannerConfig,
    /// Dump the built tree to stdout (diagnostic, not part of the contract)
    pub log: bool,
}

/// Build the acquisition tree for `target_count` of `item_name`.
///
/// Expected planning failures are not errors: an unobtainable item comes
/// back as a tree whose root has zero alternatives. Errors are reserved for
/// unusable input - an unresolvable game version, or pruning requested
/// without a snapshot to prune by.
pub fn plan(
    source: impl Into<GameDataSource>,
    item_name: &str,
    target_count: u32,
    options: &PlanOptions,
) -> Result<PlanTree, Box<dyn std::error::Error>> {
    let data = source.into().resolve()?;

    if options.prune_with_world && options.world_snapshot.is_none() {
        return Err("prune_with_world requires a world snapshot".into());
    }

    let budget = options
        .world_snapshot
        .as_ref()
        .map(|snapshot| WorldBudget::from_snapshot(snapshot, &options.config.world));

    let builder = TreeBuilder::new(
        &data,
        budget.as_ref(),
        &options.config,
        options.combine_similar_nodes,
        options.prune_with_world,
    );
    let root = builder.build(item_name, target_count, &options.inventory);

    v_info!(
        "🧠 Planned {}x {}: {} top-level alternative(s){}",
        target_count,
        item_name,
        root.alternatives.len(),
        if root.satisfied { " (already satisfied)" } else { "" }
    );

    let tree = PlanTree {
        item: item_name.to_string(),
        count: target_count,
        game_version: data.version().to_string(),
        root,
        budget,
        persistent_items: data.persistent_items().to_vec(),
    };

    if options.log {
        v_summary!("{}", tree.render());
    }

    Ok(tree)
}
