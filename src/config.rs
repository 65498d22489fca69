use crate::v_info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub search: SearchConfig,
    pub tools: ToolConfig,
    pub fuel: FuelConfig,
    pub wood: WoodConfig,
    pub world: WorldConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum expansion depth before a branch is abandoned
    pub max_depth: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Require the minimal viable tier when a tool must be crafted
    pub prefer_minimal_tools: bool,
    /// Tool item to exclude from selection entirely (e.g. "wooden_pickaxe")
    pub avoid_tool: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelConfig {
    /// Items one fuel unit smelts (8 is the coal burn rate)
    pub items_per_fuel_unit: u32,
    /// Fuel items in preference order
    pub preferred_fuels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WoodConfig {
    /// Allow "any species" resolution for wood-family ingredients
    pub generic_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Ceiling on the snapshot-derived distance threshold, in blocks
    pub max_distance_threshold: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig { max_depth: 16 },
            tools: ToolConfig {
                prefer_minimal_tools: true,
                avoid_tool: None,
            },
            fuel: FuelConfig {
                items_per_fuel_unit: 8, // coal burn rate
                preferred_fuels: vec!["coal".to_string(), "charcoal".to_string()],
            },
            wood: WoodConfig {
                generic_enabled: true,
            },
            world: WorldConfig {
                max_distance_threshold: 64.0,
            },
        }
    }
}

impl PlannerConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            v_info!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: PlannerConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            v_info!("📋 Creating default configuration at {}", config_path);
            let config = PlannerConfig::default();
            config.save(config_path)?;
            v_info!("💡 Edit {} to customize planner behavior", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.search.max_depth == 0 {
            return Err("max_depth must be greater than 0".to_string());
        }
        if self.fuel.items_per_fuel_unit == 0 {
            return Err("items_per_fuel_unit must be greater than 0".to_string());
        }
        if self.fuel.preferred_fuels.is_empty() {
            return Err("preferred_fuels must name at least one fuel".to_string());
        }
        if !self.world.max_distance_threshold.is_finite() || self.world.max_distance_threshold <= 0.0
        {
            return Err("max_distance_threshold must be a positive finite number".to_string());
        }
        Ok(())
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        v_info!("📋 Configuration Summary:");
        v_info!("   🔍 Max search depth: {}", self.search.max_depth);
        v_info!(
            "   ⛏️ Minimal tools: {} (avoid: {})",
            self.tools.prefer_minimal_tools,
            self.tools.avoid_tool.as_deref().unwrap_or("none")
        );
        v_info!(
            "   🔥 Fuel: {} items per unit, preferred {}",
            self.fuel.items_per_fuel_unit,
            self.fuel.preferred_fuels.join(" > ")
        );
        v_info!("   🌲 Generic wood: {}", self.wood.generic_enabled);
        v_info!(
            "   🗺️ Distance threshold ceiling: {} blocks",
            self.world.max_distance_threshold
        );
    }
}
