use serde::Deserialize;

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_related_limit() -> usize {
    4
}

/// Configuration options specific to the news service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Catalog JSON file. The bundled catalog is used when unset.
    #[serde(default)]
    pub seed_path: Option<String>,
    /// Upper bound of related articles on the detail view.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            seed_path: None,
            related_limit: default_related_limit(),
        }
    }
}
