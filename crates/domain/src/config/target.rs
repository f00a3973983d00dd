use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetConfig {
    /// Resolver under load, as host:port. Defaults to the local resolver.
    #[serde(default = "default_server")]
    pub server: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
        }
    }
}

fn default_server() -> String {
    "127.0.0.1:53".to_string()
}
