use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_graphql_path")]
    pub graphql_path: String,

    #[serde(default = "default_graphiql_path")]
    pub graphiql_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3030
}

fn default_graphql_path() -> String {
    "/graphql".to_string()
}

fn default_graphiql_path() -> String {
    "/graphiql".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphql_path: default_graphql_path(),
            graphiql_path: default_graphiql_path(),
        }
    }
}

impl ServerSettings {
    /// Host and port handed to the listener; the host may be a name or an
    /// IPv4/IPv6 literal.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl BlogConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BlogError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: BlogConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults when `path` is `None`, the file's contents otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        for path in [&self.server.graphql_path, &self.server.graphiql_path] {
            if !path.starts_with('/') {
                return Err(BlogError::Config(format!(
                    "Route path must start with '/': {}",
                    path
                )));
            }
        }
        if self.server.graphql_path.trim_end_matches('/')
            == self.server.graphiql_path.trim_end_matches('/')
        {
            return Err(BlogError::Config(
                "graphql_path and graphiql_path must differ".to_string(),
            ));
        }
        Ok(())
    }
}
