use serde::{Deserialize, Serialize};

use crate::routing::geo::Coordinates;
use crate::scoring::Capability;

/// Care facility tier. PHC and sub-centres are primary, district hospitals
/// secondary, medical colleges tertiary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityTier {
    Primary,
    Secondary,
    Tertiary,
}

impl FacilityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityTier::Primary => "primary",
            FacilityTier::Secondary => "secondary",
            FacilityTier::Tertiary => "tertiary",
        }
    }
}

/// One facility record from the external registry snapshot. The engine only
/// ever reads these; availability changes produce new values via
/// [`Facility::with_capacity`].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub tier: FacilityTier,
    pub location: Coordinates,

    /// Open-vocabulary capability tags; tags the engine does not know are
    /// carried along untouched.
    #[serde(default)]
    pub capabilities: Vec<String>,

    #[serde(default)]
    pub capacity: Capacity,
}

impl Facility {
    /// True when every required capability tag is offered here.
    pub fn offers_all(&self, required: &[Capability]) -> bool {
        required
            .iter()
            .all(|cap| self.capabilities.iter().any(|tag| tag == cap.tag()))
    }

    /// Apply a partial availability update, returning a new facility value.
    /// The original stays untouched so registry snapshots can be shared
    /// across concurrent ranking calls.
    pub fn with_capacity(&self, update: &CapacityUpdate) -> Facility {
        let mut facility = self.clone();
        if let Some(beds) = update.total_beds {
            facility.capacity.total_beds = beds;
        }
        if let Some(beds) = update.available_beds {
            facility.capacity.available_beds = beds;
        }
        if let Some(staff) = update.staff_on_duty {
            facility.capacity.staff_on_duty = staff;
        }
        if let Some(obgyn) = update.obgyn_available {
            facility.capacity.obgyn_available = obgyn;
        }
        facility
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Capacity {
    pub total_beds: u32,
    pub available_beds: u32,
    pub staff_on_duty: bool,
    pub obgyn_available: bool,
}

/// Partial availability update; `None` fields leave the current value.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapacityUpdate {
    pub total_beds: Option<u32>,
    pub available_beds: Option<u32>,
    pub staff_on_duty: Option<bool>,
    pub obgyn_available: Option<bool>,
}
