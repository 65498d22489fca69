// Fuel resolver - ceil-division fuel accounting for smelting
use crate::config::FuelConfig;
use crate::models::{Inventory, VariantSet};
use crate::v_debug;

/// What a smelt step needs burned under it.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelRequirement {
    /// Acceptable fuels in preference order; first candidate is the one the
    /// acquisition sub-tree targets.
    pub fuel: VariantSet<String>,
    pub chosen: String,
    pub units_needed: u32,
}

pub struct FuelResolver<'a> {
    config: &'a FuelConfig,
}

impl<'a> FuelResolver<'a> {
    pub fn new(config: &'a FuelConfig) -> Self {
        Self { config }
    }

    /// Fuel units needed to smelt `smelt_count` items.
    pub fn units_for(&self, smelt_count: u32) -> u32 {
        smelt_count.div_ceil(self.config.items_per_fuel_unit)
    }

    /// Resolve the fuel requirement for a smelt of `smelt_count` items.
    ///
    /// A fuel the inventory already covers wins over the preference order;
    /// otherwise the first preferred fuel becomes the acquisition target.
    /// The requirement is always an explicit sibling of the smelt input -
    /// fuel is never silently assumed present.
    pub fn resolve(&self, smelt_count: u32, inventory: &Inventory) -> FuelRequirement {
        let units_needed = self.units_for(smelt_count);

        let chosen = self
            .config
            .preferred_fuels
            .iter()
            .find(|fuel| inventory.has_at_least(fuel, units_needed))
            .unwrap_or(&self.config.preferred_fuels[0])
            .clone();

        v_debug!(
            "🔥 Smelting {} items needs {} fuel unit(s) of {}",
            smelt_count,
            units_needed,
            chosen
        );

        // Chosen fuel leads the candidate order
        let ordered = std::iter::once(chosen.clone()).chain(
            self.config
                .preferred_fuels
                .iter()
                .filter(|fuel| **fuel != chosen)
                .cloned(),
        );
        let fuel = VariantSet::from_values(ordered, None)
            .expect("config validation requires at least one preferred fuel");

        FuelRequirement {
            fuel,
            chosen,
            units_needed,
        }
    }
}
