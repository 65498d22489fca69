// Recipe tables - crafting and smelting knowledge per game version
use std::collections::HashMap;

/// One ingredient slot of a recipe. Wood-family slots accept any species
/// ("any planks"); concrete slots name a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientSpec {
    Item(String),
    /// Family suffix, e.g. "planks" or "log"; expands to `<species>_<suffix>`.
    WoodFamily(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub spec: IngredientSpec,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub ingredients: Vec<RecipeIngredient>,
    pub result_count: u32,
    /// True when the 3x3 grid (a crafting table) is needed.
    pub requires_station: bool,
}

fn item(name: &str, count: u32) -> RecipeIngredient {
    RecipeIngredient {
        spec: IngredientSpec::Item(name.to_string()),
        count,
    }
}

fn family(suffix: &str, count: u32) -> RecipeIngredient {
    RecipeIngredient {
        spec: IngredientSpec::WoodFamily(suffix.to_string()),
        count,
    }
}

/// Crafting recipes keyed by produced item.
pub fn build_recipes(species: &[&str]) -> HashMap<String, Vec<Recipe>> {
    let mut recipes: HashMap<String, Vec<Recipe>> = HashMap::new();
    let mut insert = |output: &str, ingredients: Vec<RecipeIngredient>, result_count: u32, station: bool| {
        recipes.entry(output.to_string()).or_default().push(Recipe {
            ingredients,
            result_count,
            requires_station: station,
        });
    };

    // Wood processing, one recipe per species
    for sp in species {
        insert(
            &format!("{}_planks", sp),
            vec![item(&format!("{}_log", sp), 1)],
            4,
            false,
        );
        insert(
            &format!("{}_stairs", sp),
            vec![item(&format!("{}_planks", sp), 6)],
            4,
            true,
        );
    }

    // Basic shapes any species satisfies
    insert("stick", vec![family("planks", 2)], 4, false);
    insert("crafting_table", vec![family("planks", 4)], 1, false);
    insert("chest", vec![family("planks", 8)], 1, true);
    insert("furnace", vec![item("cobblestone", 8)], 1, true);
    insert("torch", vec![item("coal", 1), item("stick", 1)], 4, false);
    insert("torch", vec![item("charcoal", 1), item("stick", 1)], 4, false);

    // Tools per tier
    insert("wooden_pickaxe", vec![family("planks", 3), item("stick", 2)], 1, true);
    insert("wooden_axe", vec![family("planks", 3), item("stick", 2)], 1, true);
    insert("wooden_shovel", vec![family("planks", 1), item("stick", 2)], 1, true);
    insert("wooden_sword", vec![family("planks", 2), item("stick", 1)], 1, true);
    insert("stone_pickaxe", vec![item("cobblestone", 3), item("stick", 2)], 1, true);
    insert("stone_axe", vec![item("cobblestone", 3), item("stick", 2)], 1, true);
    insert("stone_shovel", vec![item("cobblestone", 1), item("stick", 2)], 1, true);
    insert("stone_sword", vec![item("cobblestone", 2), item("stick", 1)], 1, true);
    insert("iron_pickaxe", vec![item("iron_ingot", 3), item("stick", 2)], 1, true);
    insert("iron_axe", vec![item("iron_ingot", 3), item("stick", 2)], 1, true);
    insert("iron_shovel", vec![item("iron_ingot", 1), item("stick", 2)], 1, true);
    insert("iron_sword", vec![item("iron_ingot", 2), item("stick", 1)], 1, true);
    insert("diamond_pickaxe", vec![item("diamond", 3), item("stick", 2)], 1, true);
    insert("diamond_axe", vec![item("diamond", 3), item("stick", 2)], 1, true);
    insert("diamond_shovel", vec![item("diamond", 1), item("stick", 2)], 1, true);
    insert("diamond_sword", vec![item("diamond", 2), item("stick", 1)], 1, true);

    // Storage-block packing, both directions (mutually recursive on purpose;
    // the builder's visited guard breaks the cycle)
    insert("iron_ingot", vec![item("iron_block", 1)], 9, false);
    insert("iron_block", vec![item("iron_ingot", 9)], 1, true);
    insert("raw_iron", vec![item("raw_iron_block", 1)], 9, false);
    insert("raw_iron_block", vec![item("raw_iron", 9)], 1, true);

    recipes
}

/// A smelting input: the item (or wood family) fed into the furnace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmeltInput {
    Item(String),
    WoodFamily(String),
}

/// Smeltable outputs keyed by produced item.
pub fn build_smelting() -> HashMap<String, Vec<SmeltInput>> {
    let mut smelting: HashMap<String, Vec<SmeltInput>> = HashMap::new();

    smelting.insert(
        "iron_ingot".to_string(),
        vec![SmeltInput::Item("raw_iron".to_string())],
    );
    smelting.insert(
        "gold_ingot".to_string(),
        vec![SmeltInput::Item("raw_gold".to_string())],
    );
    smelting.insert(
        "stone".to_string(),
        vec![SmeltInput::Item("cobblestone".to_string())],
    );
    smelting.insert(
        "glass".to_string(),
        vec![SmeltInput::Item("sand".to_string())],
    );
    smelting.insert(
        "charcoal".to_string(),
        vec![SmeltInput::WoodFamily("log".to_string())],
    );

    smelting
}
