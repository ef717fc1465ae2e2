/// Where the remote API lives.
///
/// The default base is the same-origin `/api/v1` prefix; deployments that
/// serve the API elsewhere bake the URL in at build time through the
/// `TODOPRO_API_BASE` environment variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("TODOPRO_API_BASE").unwrap_or("/api/v1"))
    }
}
