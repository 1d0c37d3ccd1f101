#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Geocoding search endpoint, queried with `?q=<address>`.
    pub geocode_base: String,
    /// Map viewer base URL the hash parameters are appended to.
    pub map_base: String,
    /// Overlay token repeated under the viewer's three layer parameter names.
    pub map_layer: String,
    pub map_zoom: u8,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}
