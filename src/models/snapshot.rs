// World snapshot - point-in-time summary of nearby resources
//
// Produced by the execution layer, not by the planner. Field names follow
// the wire format that layer emits, hence the camelCase renames.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Fallback search radius when a snapshot carries neither radius form.
pub const DEFAULT_SEARCH_RADIUS: f64 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotCenter {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Observed presence of one block or entity type near the snapshot center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceObservation {
    #[serde(default)]
    pub count: f64,
    #[serde(default)]
    pub closest_distance: Option<f64>,
    #[serde(default)]
    pub average_distance: Option<f64>,
}

impl ResourceObservation {
    /// Count normalized to a usable integer; malformed values become zero.
    pub fn normalized_count(&self) -> u32 {
        if self.count.is_finite() && self.count > 0.0 {
            self.count as u32
        } else {
            0
        }
    }

    /// Closest distance normalized; missing or malformed becomes infinity.
    pub fn normalized_closest(&self) -> f64 {
        match self.closest_distance {
            Some(d) if d.is_finite() && d >= 0.0 => d,
            _ => f64::INFINITY,
        }
    }

    /// Average distance normalized; falls back to the closest distance.
    pub fn normalized_average(&self) -> f64 {
        match self.average_distance {
            Some(d) if d.is_finite() && d >= 0.0 => d,
            _ => self.normalized_closest(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSnapshot {
    pub version: String,
    pub dimension: String,
    pub center: SnapshotCenter,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub chunk_radius: Option<u32>,
    pub y_min: i32,
    pub y_max: i32,
    #[serde(default)]
    pub blocks: HashMap<String, ResourceObservation>,
    #[serde(default)]
    pub entities: HashMap<String, ResourceObservation>,
    /// When the execution layer took the snapshot.
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
}

impl WorldSnapshot {
    /// Effective search radius: explicit radius wins, then chunk radius,
    /// then the default.
    pub fn search_radius(&self) -> f64 {
        if let Some(radius) = self.radius {
            if radius.is_finite() && radius > 0.0 {
                return radius;
            }
        }
        if let Some(chunks) = self.chunk_radius {
            if chunks > 0 {
                return chunks as f64 * 16.0;
            }
        }
        DEFAULT_SEARCH_RADIUS
    }

    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let snapshot: WorldSnapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }
}
