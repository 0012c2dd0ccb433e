//! Vehicle listings and the read-only vehicle handed to the order wizard.

use serde::{Deserialize, Serialize};

/// New or pre-owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    New,
    Used,
}

/// A labelled specification value, e.g. `Engine: 2.5L`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub label: String,
    pub value: String,
}

/// One inventory listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    /// Price in whole currency units.
    pub price: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<u64>,

    #[serde(default)]
    pub condition: Condition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specs: Vec<VehicleSpec>,
}

impl Vehicle {
    /// "Make Model" display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    /// The subset of the listing the order wizard shows and exports.
    pub fn to_selected(&self) -> SelectedVehicle {
        let mut specs = Vec::new();
        if let Some(body) = &self.body_type {
            specs.push(spec("Body", body));
        }
        if let Some(fuel) = &self.fuel_type {
            specs.push(spec("Fuel", fuel));
        }
        if let Some(transmission) = &self.transmission {
            specs.push(spec("Transmission", transmission));
        }
        if let Some(mileage) = self.mileage {
            specs.push(spec("Mileage", &format!("{} km", mileage)));
        }
        specs.extend(self.specs.iter().cloned());

        SelectedVehicle {
            id: Some(self.id.clone()),
            name: self.display_name(),
            year: self.year,
            price: self.price,
            image_url: self.image_url.clone(),
            specs,
        }
    }
}

fn spec(label: &str, value: &str) -> VehicleSpec {
    VehicleSpec {
        label: label.to_string(),
        value: value.to_string(),
    }
}

/// The vehicle being ordered. Never modified by the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedVehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub year: u16,
    pub price: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specs: Vec<VehicleSpec>,
}

/// Group digits in thousands: `185000` becomes `185,000`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
