use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the inventory files live. `records` and `taxonomy` are resolved
/// relative to `directory` unless absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub directory: String,
    pub records: String,
    pub taxonomy: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            records: "inventory.csv".to_string(),
            taxonomy: "brands_and_categories.json".to_string(),
        }
    }
}

impl StorageConfig {
    pub fn records_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.records)
    }

    pub fn taxonomy_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.taxonomy)
    }
}

impl AppConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Add environment variables with prefix "INVENTORY_"
        config = config.add_source(
            config::Environment::with_prefix("INVENTORY")
                .separator("_")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_paths() {
        let storage = StorageConfig::default();
        assert_eq!(storage.records_path(), Path::new("./inventory.csv"));
        assert_eq!(
            storage.taxonomy_path(),
            Path::new("./brands_and_categories.json")
        );
    }

    #[test]
    fn test_absolute_directory_keeps_file_names() {
        let storage = StorageConfig {
            directory: "/var/lib/inventory".to_string(),
            ..StorageConfig::default()
        };
        assert_eq!(
            storage.records_path(),
            Path::new("/var/lib/inventory/inventory.csv")
        );
        assert_eq!(AppConfig::default().server_address(), "127.0.0.1:3001");
    }
}
