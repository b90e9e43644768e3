// Value Contracts - Core Library
// Exposes the entity models for use in the CLI and tests

pub mod value_kind;
pub mod entities;

// Re-export commonly used types
pub use value_kind::{
    ValueKind, Input, TypeError,
    expect_number, expect_string,
};
pub use entities::{
    Currency, Price,
    Building, SpecializedBuilding, SkyHighBuilding,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
