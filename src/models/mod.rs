// Models module - All planner data structures

pub mod inventory;
pub mod path;
pub mod snapshot;
pub mod step;
pub mod tree;
pub mod variant;

// Re-export all models for easier imports
pub use inventory::*;
pub use path::*;
pub use snapshot::*;
pub use step::*;
pub use tree::*;
pub use variant::*;
