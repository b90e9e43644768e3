// Entity Models
//
// Each entity keeps its fields private and exposes:
// - read accessors
// - setters that validate the kind of the incoming value
// - a display or contract method

pub mod currency;
pub mod price;
pub mod building;
pub mod sky_high;

pub use currency::Currency;
pub use price::Price;
pub use building::{Building, SpecializedBuilding};
pub use sky_high::SkyHighBuilding;
