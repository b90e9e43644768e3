// 🏢 Building Entity - square-footage base + evacuation contract
//
// The base `Building` can be constructed on its own and has no evacuation
// behaviour. Every specialized kind wraps a `Building` and implements
// `SpecializedBuilding`, whose `evacuation_warning_message` has no default:
// forgetting it is a compile error rather than a construction-time failure.

use crate::value_kind::{expect_number, number_serde, Input, TypeError};
use serde::{Deserialize, Serialize};

// ============================================================================
// BASE BUILDING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    #[serde(with = "number_serde")]
    sqft: f64,
}

impl Building {
    /// Create a building; fails with "Sqft must be a number" for non-numeric input
    pub fn new(sqft: impl Into<Input>) -> Result<Self, TypeError> {
        let sqft = expect_number("Sqft", &sqft.into())?;
        Ok(Building { sqft })
    }

    pub fn sqft(&self) -> f64 {
        self.sqft
    }
}

// ============================================================================
// SPECIALIZED BUILDING CONTRACT
// ============================================================================

/// A concrete kind of building
///
/// Implementors must provide `evacuation_warning_message`:
///
/// ```compile_fail,E0046
/// use value_contracts::{Building, SpecializedBuilding};
///
/// struct Shed {
///     building: Building,
/// }
///
/// impl SpecializedBuilding for Shed {
///     fn building(&self) -> &Building {
///         &self.building
///     }
/// }
/// ```
///
/// Supplying it is all that is needed:
///
/// ```
/// use value_contracts::{Building, SpecializedBuilding};
///
/// struct Shed {
///     building: Building,
/// }
///
/// impl SpecializedBuilding for Shed {
///     fn building(&self) -> &Building {
///         &self.building
///     }
///
///     fn evacuation_warning_message(&self) -> String {
///         "Leave the shed".to_string()
///     }
/// }
///
/// let shed = Shed { building: Building::new(80).unwrap() };
/// assert_eq!(shed.sqft(), 80.0);
/// assert_eq!(shed.evacuation_warning_message(), "Leave the shed");
/// ```
///
/// The base type is not a specialized building:
///
/// ```compile_fail
/// use value_contracts::{Building, SpecializedBuilding};
///
/// let building = Building::new(500).unwrap();
/// building.evacuation_warning_message();
/// ```
pub trait SpecializedBuilding {
    /// The wrapped base building
    fn building(&self) -> &Building;

    fn sqft(&self) -> f64 {
        self.building().sqft()
    }

    fn evacuation_warning_message(&self) -> String;
}

// ============================================================================
// TESTS
// ============================================================================
