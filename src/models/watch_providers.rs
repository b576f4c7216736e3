use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One streaming/rental/purchase option within a region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchProvider {
    pub provider_id: u64,
    pub provider_name: String,
    pub logo_path: Option<String>,
}

/// Region block from GET /movie/{id}/watch/providers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionProviders {
    pub link: Option<String>,
    #[serde(default)]
    pub flatrate: Vec<WatchProvider>,
    #[serde(default)]
    pub rent: Vec<WatchProvider>,
    #[serde(default)]
    pub buy: Vec<WatchProvider>,
}

impl RegionProviders {
    /// True when no option of any kind is offered in this region
    pub fn is_empty(&self) -> bool {
        self.flatrate.is_empty() && self.rent.is_empty() && self.buy.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchProvidersResponse {
    #[serde(default)]
    pub results: HashMap<String, RegionProviders>,
}

impl WatchProvidersResponse {
    /// Providers for one region code (e.g. "US"), if TMDB has any
    pub fn into_region(mut self, region: &str) -> Option<RegionProviders> {
        self.results.remove(region)
    }
}
