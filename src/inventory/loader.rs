//! Loading inventories and single-vehicle files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ShowroomError};

use super::vehicle::{SelectedVehicle, Vehicle};

/// A dealership's listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

impl Inventory {
    /// Look up a listing by id.
    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Look up a listing by id, failing when absent.
    pub fn require(&self, id: &str) -> Result<&Vehicle> {
        self.find(id).ok_or_else(|| ShowroomError::UnknownVehicle { id: id.to_string() })
    }
}

/// Load an inventory file. `.json` files are read as JSON, anything else as YAML.
pub fn load_inventory(path: &Path) -> Result<Inventory> {
    let inventory: Inventory = parse_file(path)?;
    debug!(
        "Loaded {} vehicles from {}",
        inventory.vehicles.len(),
        path.display()
    );
    Ok(inventory)
}

/// Load a single vehicle description.
pub fn load_selected_vehicle(path: &Path) -> Result<SelectedVehicle> {
    parse_file(path)
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| ShowroomError::InventoryParseError {
        path: path.to_path_buf(),
        message,
    })
}
