use cheapfuel::shared::Coordinate;
use serde::{Deserialize, Serialize};

use crate::geocode::Candidate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDto {
    pub coordinate: Coordinate,
    pub display_name: String,
}

impl From<Candidate> for PlaceDto {
    fn from(value: Candidate) -> Self {
        Self {
            coordinate: value.coordinate,
            display_name: value.display_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceNameDto {
    pub name: String,
}
