use serde::Deserialize;

/// Reservations module configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReservationsConfig {
    /// Page size used when a list request does not name one.
    pub default_page_size: u32,
    /// Upper bound for requested page sizes; larger requests are clamped.
    pub max_page_size: u32,
}

impl Default for ReservationsConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}
