//! Showroom - a car dealership's inventory browser and purchase wizard.
//!
//! A buyer picks a vehicle, fills a multi-step order form whose shape
//! follows their payment choice, and submits it as a sales lead. A summary
//! of the order can be exported as a document.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`debounce`] - Trailing-edge debouncing of value updates
//! - [`error`] - Error types and result aliases
//! - [`export`] - Order document rendering and image embedding
//! - [`inventory`] - Vehicle listings, filters, and the filter sidebar
//! - [`locale`] - English and Arabic translation catalogs
//! - [`submission`] - Lead payloads and submission clients
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`wizard`] - Draft state, step plan, validation, and navigation
//!
//! # Example
//!
//! ```
//! use showroom::inventory::SelectedVehicle;
//! use showroom::locale::Locale;
//! use showroom::wizard::{Advance, PaymentMethod, WizardController};
//!
//! let vehicle = SelectedVehicle {
//!     id: None,
//!     name: "Toyota Camry".to_string(),
//!     year: 2024,
//!     price: 115_000,
//!     image_url: None,
//!     specs: Vec::new(),
//! };
//!
//! let mut wizard = WizardController::open(vehicle, Some(PaymentMethod::Cash), Locale::English);
//! assert_eq!(wizard.step_count(), 3);
//!
//! // Nothing answered yet, so the first step is blocked.
//! assert!(matches!(wizard.next(), Advance::Blocked(_)));
//! ```

pub mod cli;
pub mod config;
pub mod debounce;
pub mod error;
pub mod export;
pub mod inventory;
pub mod locale;
pub mod submission;
pub mod ui;
pub mod wizard;

pub use error::{Result, ShowroomError};
