//! API credential resolution.
//!
//! The assistant reads its Gemini API key from an ordered list of named
//! sources; the first source holding a non-empty value wins. Exhausting
//! the list is a configuration error surfaced to the user, never a crash.
//!
//! Supported sources: environment variables and the secret file at
//! `~/.config/jalon/secret.json`:
//!
//! ```json
//! { "gemini": { "api_key": "..." } }
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{JalonError, Result};

/// A single named source of the API key.
///
/// Implementations must be cheap to query: the chain is re-evaluated on
/// every outbound request so a key supplied after startup is picked up
/// without a restart.
pub trait CredentialProvider: Send + Sync {
    /// Source name shown in configuration error messages.
    fn name(&self) -> &str;

    /// Returns the key if this source currently holds a non-empty one.
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from an environment variable.
pub struct EnvCredentialProvider {
    var: String,
}

impl EnvCredentialProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn name(&self) -> &str {
        &self.var
    }

    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|v| !v.is_empty())
    }
}

/// Root structure of secret.json
#[derive(Debug, Clone, Deserialize)]
struct SecretConfig {
    #[serde(default)]
    gemini: Option<GeminiSecret>,
}

/// Gemini API configuration
#[derive(Debug, Clone, Deserialize)]
struct GeminiSecret {
    api_key: String,
}

/// Reads the key from a JSON secret file.
pub struct SecretFileCredentialProvider {
    path: PathBuf,
    name: String,
}

impl SecretFileCredentialProvider {
    /// Provider for the default location, `~/.config/jalon/secret.json`.
    ///
    /// Returns `None` when the home directory cannot be determined.
    pub fn default_location() -> Option<Self> {
        let home = dirs::home_dir()?;
        let path = home.join(".config").join("jalon").join("secret.json");
        Some(Self::at_path(path))
    }

    /// Provider for an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl CredentialProvider for SecretFileCredentialProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn api_key(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                log::debug!("Failed to read secret file {}: {err}", self.path.display());
                return None;
            }
        };

        let config: SecretConfig = match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                log::debug!("Failed to parse secret file {}: {err}", self.path.display());
                return None;
            }
        };

        config
            .gemini
            .map(|gemini| gemini.api_key)
            .filter(|key| !key.is_empty())
    }
}

/// Holds a fixed in-process key. Useful for tests and embedding callers
/// that manage their own configuration.
pub struct StaticCredentialProvider {
    key: String,
}

impl StaticCredentialProvider {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn api_key(&self) -> Option<String> {
        Some(self.key.clone()).filter(|key| !key.is_empty())
    }
}

/// An ordered list of credential sources, first non-empty wins.
pub struct CredentialChain {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl CredentialChain {
    /// Builds a chain from an explicit, ordered provider list.
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }

    /// The default lookup order: `GEMINI_API_KEY`, then `API_KEY`, then
    /// the secret file.
    pub fn default_sources() -> Self {
        let mut providers: Vec<Box<dyn CredentialProvider>> = vec![
            Box::new(EnvCredentialProvider::new("GEMINI_API_KEY")),
            Box::new(EnvCredentialProvider::new("API_KEY")),
        ];
        if let Some(file) = SecretFileCredentialProvider::default_location() {
            providers.push(Box::new(file));
        }
        Self::new(providers)
    }

    /// Chain holding a single fixed key.
    pub fn from_api_key(key: impl Into<String>) -> Self {
        Self::new(vec![Box::new(StaticCredentialProvider::new(key))])
    }

    /// Source names, in lookup order.
    pub fn source_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Returns the first key found.
    ///
    /// # Errors
    ///
    /// Returns [`JalonError::MissingCredential`] naming every source when
    /// none of them holds a value.
    pub fn resolve(&self) -> Result<String> {
        for provider in &self.providers {
            if let Some(key) = provider.api_key() {
                return Ok(key);
            }
        }

        Err(JalonError::MissingCredential {
            sources: self.source_names(),
        })
    }
}
