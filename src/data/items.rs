// Item registry - the namespace of items and blocks a version knows about
use crate::data::harvest::{ToolKind, ToolTier, tool_item_name};

/// Wood families that exist per species: `<species>_<suffix>`.
pub const WOOD_FAMILY_SUFFIXES: [&str; 3] = ["log", "planks", "stairs"];

const BASE_ITEMS: [&str; 33] = [
    "stick",
    "crafting_table",
    "furnace",
    "chest",
    "torch",
    "coal",
    "charcoal",
    "cobblestone",
    "stone",
    "glass",
    "sand",
    "dirt",
    "obsidian",
    "raw_iron",
    "raw_iron_block",
    "iron_ingot",
    "iron_block",
    "raw_gold",
    "gold_ingot",
    "diamond",
    "beef",
    "porkchop",
    "leather",
    "string",
    "feather",
    "ender_pearl",
    "coal_ore",
    "deepslate_coal_ore",
    "iron_ore",
    "deepslate_iron_ore",
    "gold_ore",
    "diamond_ore",
    "deepslate_diamond_ore",
];

/// Full item namespace for a species set, in registration order. Ids are
/// positions in this list.
pub fn build_item_names(species: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for sp in species {
        for suffix in WOOD_FAMILY_SUFFIXES {
            names.push(format!("{}_{}", sp, suffix));
        }
    }

    names.extend(BASE_ITEMS.iter().map(|s| s.to_string()));

    // Every tool tier is a valid item, including tiers we never plan to craft
    for kind in ToolKind::ALL {
        for tier in [
            ToolTier::Wood,
            ToolTier::Stone,
            ToolTier::Iron,
            ToolTier::Diamond,
            ToolTier::Netherite,
        ] {
            if let Some(name) = tool_item_name(tier, kind) {
                names.push(name);
            }
        }
    }

    names
}
