// World budget - availability and distance model derived from a snapshot
use crate::config::WorldConfig;
use crate::models::{ResourceObservation, WorldSnapshot};
use crate::v_debug;
use std::collections::{HashMap, HashSet};

/// Per-name resource availability within a distance threshold.
///
/// Built once per `plan` call and treated as immutable for its duration.
/// Malformed observations (missing or non-finite counts/distances) are
/// normalized to zero count / infinite distance instead of failing.
#[derive(Debug, Clone)]
pub struct WorldBudget {
    block_counts: HashMap<String, u32>,
    block_closest: HashMap<String, f64>,
    entity_counts: HashMap<String, u32>,
    entity_closest: HashMap<String, f64>,
    distance_threshold: f64,
    allowed_blocks: HashSet<String>,
    allowed_entities: HashSet<String>,
}

fn normalize(
    observations: &HashMap<String, ResourceObservation>,
    threshold: f64,
) -> (HashMap<String, u32>, HashMap<String, f64>, HashSet<String>) {
    let mut counts = HashMap::new();
    let mut closest = HashMap::new();
    let mut allowed = HashSet::new();

    for (name, observation) in observations {
        let count = observation.normalized_count();
        let distance = observation.normalized_closest();
        counts.insert(name.clone(), count);
        closest.insert(name.clone(), distance);
        if count > 0 && distance <= threshold {
            allowed.insert(name.clone());
        }
    }

    (counts, closest, allowed)
}

impl WorldBudget {
    pub fn from_snapshot(snapshot: &WorldSnapshot, world_config: &WorldConfig) -> Self {
        let distance_threshold = snapshot
            .search_radius()
            .min(world_config.max_distance_threshold);

        let (block_counts, block_closest, allowed_blocks) =
            normalize(&snapshot.blocks, distance_threshold);
        let (entity_counts, entity_closest, allowed_entities) =
            normalize(&snapshot.entities, distance_threshold);

        v_debug!(
            "🗺️ World budget: {} block types / {} entity types within {:.1} blocks",
            allowed_blocks.len(),
            allowed_entities.len(),
            distance_threshold
        );

        Self {
            block_counts,
            block_closest,
            entity_counts,
            entity_closest,
            distance_threshold,
            allowed_blocks,
            allowed_entities,
        }
    }

    pub fn distance_threshold(&self) -> f64 {
        self.distance_threshold
    }

    /// Is this block present and within the distance threshold?
    pub fn is_block_available(&self, block: &str) -> bool {
        self.allowed_blocks.contains(block)
    }

    pub fn is_entity_available(&self, entity: &str) -> bool {
        self.allowed_entities.contains(entity)
    }

    pub fn block_count(&self, block: &str) -> u32 {
        self.block_counts.get(block).copied().unwrap_or(0)
    }

    pub fn entity_count(&self, entity: &str) -> u32 {
        self.entity_counts.get(entity).copied().unwrap_or(0)
    }

    /// Closest observed distance; infinity when the block was never seen.
    pub fn closest_block_distance(&self, block: &str) -> f64 {
        self.block_closest
            .get(block)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    pub fn closest_entity_distance(&self, entity: &str) -> f64 {
        self.entity_closest
            .get(entity)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Order candidate names nearest-first for tie-breaking; equal distances
    /// fall back to higher observed count, then lexical order.
    pub fn rank_blocks(&self, blocks: &mut Vec<String>) {
        blocks.sort_by(|a, b| {
            self.closest_block_distance(a)
                .total_cmp(&self.closest_block_distance(b))
                .then_with(|| self.block_count(b).cmp(&self.block_count(a)))
                .then_with(|| a.cmp(b))
        });
    }

    pub fn rank_entities(&self, entities: &mut Vec<String>) {
        entities.sort_by(|a, b| {
            self.closest_entity_distance(a)
                .total_cmp(&self.closest_entity_distance(b))
                .then_with(|| self.entity_count(b).cmp(&self.entity_count(a)))
                .then_with(|| a.cmp(b))
        });
    }
}
