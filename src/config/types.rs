// Configuration type definitions

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/people/search.json";
const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Lookup service configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LookupConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            endpoint: default_endpoint(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Overlay geometry, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Extra rows between the anchor's first text line and the overlay
    pub padding: u16,
    /// Narrowest the overlay may be, whatever the anchor width
    pub min_width: u16,
    /// Line height used when the surface reports none
    pub line_height: u16,
    /// Rows shown before the list scrolls
    pub max_visible: u16,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            padding: 1,
            min_width: 24,
            line_height: 1,
            max_visible: 8,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}
