// 🏙️ Sky-High Building - a specialized building with floors

use crate::entities::building::{Building, SpecializedBuilding};
use crate::value_kind::{Input, TypeError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyHighBuilding {
    building: Building,
    floors: u32,
}

impl SkyHighBuilding {
    /// Create a tower; `sqft` is validated by [`Building::new`]
    pub fn new(sqft: impl Into<Input>, floors: u32) -> Result<Self, TypeError> {
        Ok(SkyHighBuilding {
            building: Building::new(sqft)?,
            floors,
        })
    }

    pub fn floors(&self) -> u32 {
        self.floors
    }
}

impl SpecializedBuilding for SkyHighBuilding {
    fn building(&self) -> &Building {
        &self.building
    }

    fn evacuation_warning_message(&self) -> String {
        format!("Evacuate slowly the {} floors", self.floors)
    }
}
