// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Keyed JSON settings over a pluggable blob store.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Where a settings blob lives. Keys are logical names such as `"sim"`.
pub trait ConfigStore {
    /// Raw bytes stored under `key`, or `None` if nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError>;
    /// Replace the bytes stored under `key`.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), ConfigError>;
}

/// Failures while reading or writing settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backing store could not be located or created.
    #[error("config store unavailable: {0}")]
    Unavailable(String),
    /// Reading or writing `key` failed at the I/O layer.
    #[error("i/o on config `{key}`: {source}")]
    Io {
        /// Logical key being accessed.
        key: String,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The blob under `key` is not valid JSON for the requested type.
    #[error("malformed config `{key}`: {source}")]
    Json {
        /// Logical key being accessed.
        key: String,
        /// Underlying error.
        source: serde_json::Error,
    },
}

/// How [`ConfigService::load_or_init`] produced its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from the store.
    Stored,
    /// Nothing stored; defaults used and left unsaved.
    Defaults,
    /// Nothing stored; defaults used and written back.
    DefaultsWritten,
}

/// A loaded settings value and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    /// The settings.
    pub value: T,
    /// Where they came from.
    pub origin: Origin,
}

/// Typed JSON access to a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Decodes the value under `key`. Missing keys and empty blobs are `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let Some(bytes) = self.store.read(key)? else {
            return Ok(None);
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| ConfigError::Json {
                key: key.to_owned(),
                source,
            })
    }

    /// Encodes `value` as pretty JSON under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let bytes = serde_json::to_vec_pretty(value).map_err(|source| ConfigError::Json {
            key: key.to_owned(),
            source,
        })?;
        self.store.write(key, &bytes)
    }

    /// Loads `key`, falling back to `T::default()` when nothing is stored.
    ///
    /// With `persist` set, the defaults are written back so the next load
    /// finds them. An existing value is never overwritten.
    pub fn load_or_init<T>(&self, key: &str, persist: bool) -> Result<Loaded<T>, ConfigError>
    where
        T: Default + Serialize + DeserializeOwned,
    {
        if let Some(value) = self.load(key)? {
            return Ok(Loaded {
                value,
                origin: Origin::Stored,
            });
        }
        let value = T::default();
        if !persist {
            return Ok(Loaded {
                value,
                origin: Origin::Defaults,
            });
        }
        self.save(key, &value)?;
        Ok(Loaded {
            value,
            origin: Origin::DefaultsWritten,
        })
    }
}
