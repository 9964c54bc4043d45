//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use topchef_commerce::checkout::{WhatsAppLink, DEFAULT_BASE_URL, DEFAULT_PHONE};
use topchef_commerce::cart::SNAPSHOT_KEY;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["topchef.toml", ".topchef.toml", "topchef.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Snapshot storage.
    #[serde(default)]
    pub store: StoreConfig,

    /// Outbound order channel.
    #[serde(default)]
    pub channel: ChannelConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Lecture impossible du fichier de configuration : {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Configuration JSON invalide : {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Configuration TOML invalide : {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Écriture impossible du fichier de configuration : {}", path))
    }

    /// Link builder for the configured destination.
    pub fn whatsapp_link(&self) -> WhatsAppLink {
        WhatsAppLink::new(&self.channel.base_url, &self.channel.phone)
    }

    /// Read a value by dot-separated key.
    pub fn get_value(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["store", "path"] => Ok(format!("\"{}\"", self.store.path)),
            ["store", "key"] => Ok(format!("\"{}\"", self.store.key)),
            ["channel", "base_url"] => Ok(format!("\"{}\"", self.channel.base_url)),
            ["channel", "phone"] => Ok(format!("\"{}\"", self.channel.phone)),
            _ => anyhow::bail!("Clé de configuration inconnue : {}", key),
        }
    }

    /// Set a value by dot-separated key.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["store", "path"] => self.store.path = value.to_string(),
            ["store", "key"] => self.store.key = value.to_string(),
            ["channel", "base_url"] => self.channel.base_url = value.to_string(),
            ["channel", "phone"] => self.channel.phone = value.to_string(),
            _ => anyhow::bail!("Clé de configuration inconnue : {}", key),
        }

        Ok(())
    }

    /// Collect configuration problems: (errors, warnings).
    pub fn problems(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.store.path.trim().is_empty() {
            errors.push("store.path est obligatoire".to_string());
        }
        if self.store.key.trim().is_empty() {
            errors.push("store.key est obligatoire".to_string());
        }
        if !self.channel.base_url.starts_with("https://")
            && !self.channel.base_url.starts_with("http://")
        {
            errors.push(format!(
                "channel.base_url '{}' doit être une URL http(s)",
                self.channel.base_url
            ));
        }
        let phone = self.channel.phone.trim_start_matches('+');
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            errors.push("channel.phone ne doit contenir que des chiffres".to_string());
        }
        if self.store.key != SNAPSHOT_KEY {
            warnings.push(format!(
                "store.key '{}' diffère de la valeur par défaut '{}' : les paniers existants ne seront pas retrouvés",
                self.store.key, SNAPSHOT_KEY
            ));
        }

        (errors, warnings)
    }
}

/// Snapshot storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding snapshots, relative to the working directory.
    #[serde(default = "default_store_path")]
    pub path: String,

    /// Snapshot key.
    #[serde(default = "default_store_key")]
    pub key: String,
}

fn default_store_path() -> String {
    ".topchef".to_string()
}

fn default_store_key() -> String {
    SNAPSHOT_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            key: default_store_key(),
        }
    }
}

/// Outbound channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Click-to-chat base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Restaurant number in international format.
    #[serde(default = "default_phone")]
    pub phone: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_phone() -> String {
    DEFAULT_PHONE.to_string()
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            phone: default_phone(),
        }
    }
}

/// Generate a default topchef.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Top Chef cart configuration

[store]
path = "{path}"
key = "{key}"

[channel]
base_url = "{base_url}"
phone = "{phone}"
"#,
        path = default_store_path(),
        key = SNAPSHOT_KEY,
        base_url = DEFAULT_BASE_URL,
        phone = DEFAULT_PHONE,
    )
}
