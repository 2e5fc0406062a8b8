//! Process configuration loaded once at startup.
//!
//! Credentials come from the process environment, optionally seeded from a
//! layered dotenv source: `.env.local` is tried first, then `.env`. After
//! loading, a fixed list of required variables is validated; the worker must
//! not open any network connection when one of them is missing. The result is
//! an immutable [`Settings`] value passed by reference to whatever constructs
//! sessions, so no ambient `env::var` lookups happen past startup.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use crate::error::{AgentError, Result};

/// Environment variables that must be present (and non-empty) at startup.
pub const REQUIRED_ENV: [&str; 6] = [
    "LIVEKIT_URL",
    "LIVEKIT_API_KEY",
    "LIVEKIT_API_SECRET",
    "OPENAI_API_KEY",
    "CARTESIA_API_KEY",
    "DEEPGRAM_API_KEY",
];

/// Credentials for the room service and the three media providers.
///
/// Populated once by [`Settings::from_env`] and read-only thereafter.
#[derive(Debug)]
pub struct Settings {
    /// Room service connection URL.
    pub livekit_url: String,
    /// Room service API key.
    pub livekit_api_key: SecretString,
    /// Room service API secret.
    pub livekit_api_secret: SecretString,
    /// Language-model provider API key.
    pub openai_api_key: SecretString,
    /// Text-to-speech provider API key.
    pub cartesia_api_key: SecretString,
    /// Speech-to-text provider API key.
    pub deepgram_api_key: SecretString,
}

/// Load environment variables from the first dotenv file that exists.
///
/// Tries `primary` and then `secondary`; a missing file is not an error.
/// Values already present in the process environment are never overridden.
/// Returns the path that loaded, if any.
pub fn load_env_files_from(primary: &Path, secondary: &Path) -> Option<PathBuf> {
    if dotenvy::from_path(primary).is_ok() {
        return Some(primary.to_path_buf());
    }
    if dotenvy::from_path(secondary).is_ok() {
        return Some(secondary.to_path_buf());
    }
    None
}

/// Load `.env.local`, falling back to `.env`, from the working directory.
pub fn load_env_files() -> Option<PathBuf> {
    load_env_files_from(Path::new(".env.local"), Path::new(".env"))
}

/// Required variables the given lookup does not supply.
///
/// A variable that resolves to the empty string counts as missing. The
/// returned names keep the order of [`REQUIRED_ENV`].
pub fn missing_keys<F>(lookup: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED_ENV
        .iter()
        .copied()
        .filter(|key| lookup(key).is_none_or(|value| value.is_empty()))
        .collect()
}

impl Settings {
    /// Build settings from an arbitrary variable lookup.
    ///
    /// Returns [`AgentError::MissingEnv`] naming exactly the unsatisfied
    /// variables when validation fails.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing = missing_keys(&lookup);
        if !missing.is_empty() {
            return Err(AgentError::MissingEnv(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        let get = |key: &str| lookup(key).unwrap_or_default();
        Ok(Self {
            livekit_url: get("LIVEKIT_URL"),
            livekit_api_key: get("LIVEKIT_API_KEY").into(),
            livekit_api_secret: get("LIVEKIT_API_SECRET").into(),
            openai_api_key: get("OPENAI_API_KEY").into(),
            cartesia_api_key: get("CARTESIA_API_KEY").into(),
            deepgram_api_key: get("DEEPGRAM_API_KEY").into(),
        })
    }

    /// Build settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
