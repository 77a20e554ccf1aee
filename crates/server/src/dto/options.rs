use cheapfuel::pipeline::{FilterConfig, SortConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsDto {
    pub distance_presets_km: Vec<f64>,
    pub filter: FilterConfig,
    pub sort: SortConfig,
}

impl OptionsDto {
    pub fn from(distance_presets_km: &[f64], filter: FilterConfig, sort: SortConfig) -> Self {
        Self {
            distance_presets_km: distance_presets_km.to_vec(),
            filter,
            sort,
        }
    }
}
