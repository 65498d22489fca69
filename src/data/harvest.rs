// Harvest tables - tool kinds, material tiers and per-block requirements
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Pickaxe,
    Axe,
    Shovel,
    Sword,
}

impl ToolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::Pickaxe => "pickaxe",
            ToolKind::Axe => "axe",
            ToolKind::Shovel => "shovel",
            ToolKind::Sword => "sword",
        }
    }

    pub const ALL: [ToolKind; 4] = [
        ToolKind::Pickaxe,
        ToolKind::Axe,
        ToolKind::Shovel,
        ToolKind::Sword,
    ];
}

/// Material tiers, ordered weakest to strongest. `Bare` means no tool at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolTier {
    Bare,
    Wood,
    Stone,
    Iron,
    Diamond,
    Netherite,
}

impl ToolTier {
    /// Item-name prefix for this tier ("wooden_pickaxe", "stone_pickaxe", ...).
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            ToolTier::Bare => None,
            ToolTier::Wood => Some("wooden"),
            ToolTier::Stone => Some("stone"),
            ToolTier::Iron => Some("iron"),
            ToolTier::Diamond => Some("diamond"),
            ToolTier::Netherite => Some("netherite"),
        }
    }

    /// Position in the tier order, used for weight penalties.
    pub fn index(&self) -> u32 {
        *self as u32
    }

    /// Tiers a tool recipe exists for. Netherite tools can only be owned,
    /// never planned (upgrading needs a smithing table, which is out of scope).
    pub const CRAFTABLE: [ToolTier; 4] = [
        ToolTier::Wood,
        ToolTier::Stone,
        ToolTier::Iron,
        ToolTier::Diamond,
    ];
}

/// Item name for a tier/kind pair, e.g. ("wooden", Pickaxe) -> "wooden_pickaxe".
pub fn tool_item_name(tier: ToolTier, kind: ToolKind) -> Option<String> {
    tier.prefix().map(|p| format!("{}_{}", p, kind.as_str()))
}

/// Parse an item name back into (kind, tier); None for non-tool items.
pub fn parse_tool_item(name: &str) -> Option<(ToolKind, ToolTier)> {
    let (prefix, kind_str) = name.rsplit_once('_')?;
    let kind = match kind_str {
        "pickaxe" => ToolKind::Pickaxe,
        "axe" => ToolKind::Axe,
        "shovel" => ToolKind::Shovel,
        "sword" => ToolKind::Sword,
        _ => return None,
    };
    let tier = match prefix {
        "wooden" => ToolTier::Wood,
        "stone" => ToolTier::Stone,
        "iron" => ToolTier::Iron,
        "diamond" => ToolTier::Diamond,
        "netherite" => ToolTier::Netherite,
        _ => return None,
    };
    Some((kind, tier))
}

/// What a block demands before it drops anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestRequirement {
    pub kind: ToolKind,
    pub min_tier: ToolTier,
}

/// Blocks that require a tool at all; everything absent here breaks by hand.
pub fn build_block_tools() -> HashMap<String, HarvestRequirement> {
    let mut tools = HashMap::new();
    let mut insert = |block: &str, kind: ToolKind, min_tier: ToolTier| {
        tools.insert(block.to_string(), HarvestRequirement { kind, min_tier });
    };

    insert("stone", ToolKind::Pickaxe, ToolTier::Wood);
    insert("coal_ore", ToolKind::Pickaxe, ToolTier::Wood);
    insert("deepslate_coal_ore", ToolKind::Pickaxe, ToolTier::Wood);
    insert("iron_ore", ToolKind::Pickaxe, ToolTier::Stone);
    insert("deepslate_iron_ore", ToolKind::Pickaxe, ToolTier::Stone);
    insert("raw_iron_block", ToolKind::Pickaxe, ToolTier::Stone);
    insert("gold_ore", ToolKind::Pickaxe, ToolTier::Iron);
    insert("diamond_ore", ToolKind::Pickaxe, ToolTier::Iron);
    insert("deepslate_diamond_ore", ToolKind::Pickaxe, ToolTier::Iron);
    insert("obsidian", ToolKind::Pickaxe, ToolTier::Diamond);

    tools
}

/// Item -> blocks that drop it when mined (without silk touch).
pub fn build_block_drops(species: &[&str]) -> HashMap<String, Vec<String>> {
    let mut drops: HashMap<String, Vec<String>> = HashMap::new();

    for sp in species {
        let log = format!("{}_log", sp);
        drops.insert(log.clone(), vec![log]);
    }

    let mut insert = |item: &str, blocks: &[&str]| {
        drops.insert(
            item.to_string(),
            blocks.iter().map(|b| b.to_string()).collect(),
        );
    };

    insert("cobblestone", &["stone"]);
    insert("coal", &["coal_ore", "deepslate_coal_ore"]);
    insert("raw_iron", &["iron_ore", "deepslate_iron_ore"]);
    insert("raw_iron_block", &["raw_iron_block"]);
    insert("raw_gold", &["gold_ore"]);
    insert("diamond", &["diamond_ore", "deepslate_diamond_ore"]);
    insert("sand", &["sand"]);
    insert("dirt", &["dirt"]);
    insert("obsidian", &["obsidian"]);

    drops
}

/// Item -> creatures that drop it when killed.
pub fn build_creature_drops() -> HashMap<String, Vec<String>> {
    let mut drops: HashMap<String, Vec<String>> = HashMap::new();
    let mut insert = |item: &str, creatures: &[&str]| {
        drops.insert(
            item.to_string(),
            creatures.iter().map(|c| c.to_string()).collect(),
        );
    };

    insert("beef", &["cow"]);
    insert("leather", &["cow"]);
    insert("porkchop", &["pig"]);
    insert("string", &["spider"]);
    insert("feather", &["chicken"]);
    insert("ender_pearl", &["enderman"]);

    drops
}
