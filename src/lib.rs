// craftplan - Crafting and acquisition planner for Minecraft-like survival games
// Computes how to obtain an item: what to gather, craft or smelt, in what order

pub mod config;
pub mod data;
pub mod models;
pub mod planner;
pub mod verbosity;

// Re-export commonly used types
pub use config::PlannerConfig;
pub use data::{DataUnavailable, GameData, GameDataSource};
pub use models::{
    ActionPath, ActionStep, GoalNode, Inventory, PlanTree, VariantSet, WorldSnapshot,
};
pub use planner::{
    EnumerateOptions, PlanOptions, canonical_paths, cheapest_paths, plan, shortest_paths,
};

// Constants
pub const DEFAULT_GAME_VERSION: &str = "1.21.1";
pub const DEFAULT_CONFIG_FILE: &str = "craftplan.toml";
