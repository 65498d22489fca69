// Game data module - version-resolved static tables for planning
pub mod harvest;
pub mod items;
pub mod recipes;

pub use harvest::*;
pub use recipes::{IngredientSpec, Recipe, RecipeIngredient, SmeltInput};

use crate::models::WorldSnapshot;
use crate::v_debug;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

/// Game versions the bundled tables cover.
pub const SUPPORTED_VERSIONS: [&str; 7] = [
    "1.19.4", "1.20", "1.20.1", "1.20.4", "1.20.6", "1.21", "1.21.1",
];

/// Raised when no table set exists for a requested version. The caller
/// decides the fallback; no meaningful plan can be built without data.
#[derive(Debug, Clone)]
pub struct DataUnavailable {
    pub version: String,
}

impl fmt::Display for DataUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no game data available for version '{}' (supported: {})",
            self.version,
            SUPPORTED_VERSIONS.join(", ")
        )
    }
}

impl std::error::Error for DataUnavailable {}

/// Normalized, read-only game knowledge for one version.
#[derive(Debug)]
pub struct GameData {
    version: String,
    items: HashMap<String, u32>,
    recipes: HashMap<String, Vec<Recipe>>,
    smelting: HashMap<String, Vec<SmeltInput>>,
    block_drops: HashMap<String, Vec<String>>,
    creature_drops: HashMap<String, Vec<String>>,
    block_tools: HashMap<String, HarvestRequirement>,
    wood_species: Vec<String>,
    persistent_items: Vec<String>,
}

fn species_for_version(version: &str) -> Vec<&'static str> {
    let mut species = vec![
        "oak", "spruce", "birch", "jungle", "acacia", "dark_oak", "mangrove",
    ];
    // Cherry groves arrived in 1.20
    if version != "1.19.4" {
        species.push("cherry");
    }
    species
}

impl GameData {
    fn build(version: &str) -> Self {
        let species = species_for_version(version);

        let items = items::build_item_names(&species)
            .into_iter()
            .enumerate()
            .map(|(id, name)| (name, id as u32))
            .collect();

        Self {
            version: version.to_string(),
            items,
            recipes: recipes::build_recipes(&species),
            smelting: recipes::build_smelting(),
            block_drops: harvest::build_block_drops(&species),
            creature_drops: harvest::build_creature_drops(),
            block_tools: harvest::build_block_tools(),
            wood_species: species.iter().map(|s| s.to_string()).collect(),
            persistent_items: vec!["crafting_table".to_string(), "furnace".to_string()],
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn item_id(&self, name: &str) -> Option<u32> {
        self.items.get(name).copied()
    }

    pub fn is_known_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn recipes_for(&self, item: &str) -> &[Recipe] {
        self.recipes.get(item).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn smelt_inputs_for(&self, item: &str) -> &[SmeltInput] {
        self.smelting.get(item).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn blocks_dropping(&self, item: &str) -> &[String] {
        self.block_drops.get(item).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn creatures_dropping(&self, item: &str) -> &[String] {
        self.creature_drops
            .get(item)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn harvest_requirement(&self, block: &str) -> Option<HarvestRequirement> {
        self.block_tools.get(block).copied()
    }

    pub fn wood_species(&self) -> &[String] {
        &self.wood_species
    }

    pub fn persistent_items(&self) -> &[String] {
        &self.persistent_items
    }

    pub fn is_persistent(&self, item: &str) -> bool {
        self.persistent_items.iter().any(|p| p == item)
    }

    /// Split a species-qualified item name, e.g. "cherry_stairs" ->
    /// ("cherry", "stairs"). Longest species wins so "dark_oak_planks"
    /// resolves to dark_oak, not oak.
    pub fn species_of<'a>(&'a self, item: &'a str) -> Option<(&'a str, &'a str)> {
        self.wood_species
            .iter()
            .filter_map(|sp| {
                item.strip_prefix(sp.as_str())
                    .and_then(|rest| rest.strip_prefix('_'))
                    .filter(|suffix| !suffix.is_empty())
                    .map(|suffix| (sp.as_str(), suffix))
            })
            .max_by_key(|(sp, _)| sp.len())
    }

    /// Concrete member of a wood family, e.g. ("cherry", "planks") -> "cherry_planks".
    pub fn family_member(&self, species: &str, family: &str) -> String {
        format!("{}_{}", species, family)
    }
}

static DATA_CACHE: OnceLock<Mutex<HashMap<String, Arc<GameData>>>> = OnceLock::new();

/// Resolve a version string to its table set. Results are cached per
/// version; the cache is read-only once populated and only exists to make
/// repeated `plan` calls cheap.
pub fn resolve(version: &str) -> Result<Arc<GameData>, DataUnavailable> {
    if !SUPPORTED_VERSIONS.contains(&version) {
        return Err(DataUnavailable {
            version: version.to_string(),
        });
    }

    let cache = DATA_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache = cache.lock().expect("game data cache poisoned");

    if let Some(data) = cache.get(version) {
        return Ok(Arc::clone(data));
    }

    v_debug!("📦 Building game data tables for version {}", version);
    let data = Arc::new(GameData::build(version));
    cache.insert(version.to_string(), Arc::clone(&data));
    Ok(data)
}

/// Anything that can say which game version it belongs to.
pub trait HasGameVersion {
    fn game_version(&self) -> &str;
}

impl HasGameVersion for WorldSnapshot {
    fn game_version(&self) -> &str {
        &self.version
    }
}

/// Where a `plan` call gets its game data from: a version to resolve or an
/// already-resolved handle.
#[derive(Debug, Clone)]
pub enum GameDataSource {
    Version(String),
    Handle(Arc<GameData>),
}

impl GameDataSource {
    pub fn from_versioned(value: &impl HasGameVersion) -> Self {
        GameDataSource::Version(value.game_version().to_string())
    }

    pub fn resolve(self) -> Result<Arc<GameData>, DataUnavailable> {
        match self {
            GameDataSource::Version(version) => resolve(&version),
            GameDataSource::Handle(data) => Ok(data),
        }
    }
}

impl From<&str> for GameDataSource {
    fn from(version: &str) -> Self {
        GameDataSource::Version(version.to_string())
    }
}

impl From<String> for GameDataSource {
    fn from(version: String) -> Self {
        GameDataSource::Version(version)
    }
}

impl From<Arc<GameData>> for GameDataSource {
    fn from(data: Arc<GameData>) -> Self {
        GameDataSource::Handle(data)
    }
}
