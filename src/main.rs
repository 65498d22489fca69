// craftplan - Command-line planning demo
// Loads an inventory and optional world snapshot, plans, prints paths

use clap::{ArgAction, Parser, ValueEnum};
use craftplan::models::{ActionPath, Inventory, WorldSnapshot};
use craftplan::planner::{
    EnumerateOptions, PathWeigher, PlanOptions, canonical_paths, cheapest_paths, plan,
    shortest_paths,
};
use craftplan::{DEFAULT_CONFIG_FILE, DEFAULT_GAME_VERSION, PlannerConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Tree-definition order
    Canonical,
    /// Fewest steps first
    Shortest,
    /// Lowest weight first
    Cheapest,
}

#[derive(Parser)]
#[command(
    name = "craftplan",
    about = "Plan how to obtain an in-game item: gather, craft, smelt, in order"
)]
struct Args {
    /// Item to obtain (e.g. "torch", "iron_pickaxe")
    item: String,

    /// How many to obtain
    #[arg(default_value_t = 1)]
    count: u32,

    /// Game version the data tables should match
    #[arg(long, default_value = DEFAULT_GAME_VERSION)]
    game_version: String,

    /// JSON file with the starting inventory ({"item": count})
    #[arg(long)]
    inventory: Option<PathBuf>,

    /// JSON world snapshot from the execution layer
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Drop branches whose resources are absent or out of range
    #[arg(long, requires = "snapshot")]
    prune: bool,

    /// Merge per-species branches into variant-set nodes
    #[arg(long)]
    combine: bool,

    /// Enumeration order
    #[arg(long, value_enum, default_value_t = Strategy::Cheapest)]
    strategy: Strategy,

    /// Maximum number of paths to print
    #[arg(long, default_value_t = 5)]
    paths: usize,

    /// Planner configuration file (created with defaults if missing)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Increase output detail (-v basic, -vv full)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Dump the full alternative tree before enumerating
    #[arg(long)]
    log_tree: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    craftplan::verbosity::set_verbosity_level(args.verbose);

    println!("🧠 craftplan starting...");
    println!("🎯 Target: {}x {} (game {})", args.count, args.item, args.game_version);

    let config = PlannerConfig::load_or_create(&args.config)?;
    config
        .validate()
        .map_err(|e| format!("invalid configuration: {}", e))?;
    config.print_summary();

    let inventory = match &args.inventory {
        Some(path) => {
            let inventory = Inventory::load_from_file(path)?;
            println!("🎒 Loaded inventory from {}", path.display());
            inventory
        }
        None => Inventory::new(),
    };

    let snapshot = match &args.snapshot {
        Some(path) => {
            let snapshot = WorldSnapshot::load_from_file(path)?;
            println!(
                "🗺️ Loaded snapshot: {} block types / {} entity types near ({:.0}, {:.0}, {:.0})",
                snapshot.blocks.len(),
                snapshot.entities.len(),
                snapshot.center.x,
                snapshot.center.y,
                snapshot.center.z
            );
            Some(snapshot)
        }
        None => None,
    };

    let options = PlanOptions {
        inventory: inventory.clone(),
        prune_with_world: args.prune,
        world_snapshot: snapshot,
        combine_similar_nodes: args.combine,
        config,
        log: args.log_tree,
    };

    let tree = plan(args.game_version.as_str(), &args.item, args.count, &options)?;

    if !tree.is_obtainable() {
        println!(
            "🚫 {}x {} is currently unobtainable under the given constraints",
            args.count, args.item
        );
        return Ok(());
    }

    let enumerate_options = EnumerateOptions {
        inventory: inventory.clone(),
    };
    let paths: Box<dyn Iterator<Item = ActionPath> + '_> = match args.strategy {
        Strategy::Canonical => Box::new(canonical_paths(&tree, &enumerate_options)),
        Strategy::Shortest => Box::new(shortest_paths(&tree, &enumerate_options)),
        Strategy::Cheapest => Box::new(cheapest_paths(&tree, &enumerate_options)),
    };

    let weigher = PathWeigher::new(tree.budget.as_ref());
    let mut printed = 0;
    for (index, path) in paths.take(args.paths).enumerate() {
        println!(
            "\n📋 Path {} ({} steps, weight {:.2}):",
            index + 1,
            path.len(),
            weigher.path_weight(&path)
        );
        println!("{}", path.describe());
        printed += 1;
    }

    if printed == 0 {
        println!("🚫 No complete path survived enumeration");
    } else {
        println!("\n✅ Printed {} path(s) - pass --paths to see more", printed);
    }

    Ok(())
}
