//! Vehicle listings, filtering, and the vehicle chosen for an order.

mod filter;
mod loader;
mod sidebar;
mod vehicle;

pub use filter::{FilterOptions, ListingFilter, SortOrder};
pub use loader::{load_inventory, load_selected_vehicle, Inventory};
pub use sidebar::FilterSidebar;
pub use vehicle::{format_price, Condition, SelectedVehicle, Vehicle, VehicleSpec};
