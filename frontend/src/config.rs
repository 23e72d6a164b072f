/// Runtime configuration for the portal.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the guest service. Empty means same-origin relative paths.
    pub api_base_url: String,
    /// Name shown in the "Logged in as" slot of the header. Injected here so
    /// the view never carries a hardcoded minister identity.
    pub minister_display_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            minister_display_name: "Attending Minister".to_string(),
        }
    }
}
