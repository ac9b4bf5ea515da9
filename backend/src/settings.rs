//! Process configuration resolved once at startup.
//!
//! Non-secret settings load through OrthoConfig with the `CULTS` prefix so
//! CLI flags overlay environment variables. The credential pair is read
//! separately through [`mockable::Env`] and never enters a config struct that
//! could be logged or serialised.

use std::fmt;
use std::net::SocketAddr;

use mockable::Env;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;
use zeroize::Zeroize;

use crate::domain::{CatalogContext, Currency, Locale};

/// Account whose profile header the showcase displays by default.
pub const DEFAULT_NICK: &str = "nikkasouza";
/// Production GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://cults3d.com/graphql";
/// Listen address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

const USER_ENV: &str = "CULTS3D_USER";
const PASS_ENV: &str = "CULTS3D_PASS";

/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing or blank.
    #[error("missing required environment variable: {name}")]
    MissingEnv {
        /// Variable name.
        name: &'static str,
    },
    /// A setting is present but cannot be parsed.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidValue {
        /// Setting name as an environment variable.
        name: &'static str,
        /// Rejected input.
        value: String,
        /// Accepted form.
        expected: &'static str,
    },
    /// The layered configuration could not be loaded.
    #[error("failed to load configuration: {message}")]
    Load {
        /// Loader diagnostic.
        message: String,
    },
}

/// Non-secret storefront settings.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CULTS")]
pub struct StorefrontSettings {
    /// Locale for names, URLs and tags (`EN`, `FR`, `ES`, `DE`, `IT`).
    pub locale: Option<String>,
    /// Currency for prices and sales (`USD`, `EUR`, `GBP`).
    pub currency: Option<String>,
    /// Account nickname shown in the showcase header.
    pub nick: Option<String>,
    /// GraphQL endpoint override.
    pub endpoint: Option<String>,
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
}

impl StorefrontSettings {
    /// Load settings from the process arguments and environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a layer cannot be parsed.
    pub fn from_process() -> Result<Self, ConfigError> {
        Self::load_from_iter(std::env::args_os()).map_err(|error| ConfigError::Load {
            message: error.to_string(),
        })
    }

    /// Configured locale, defaulting to English.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown locale.
    pub fn locale(&self) -> Result<Locale, ConfigError> {
        self.locale.as_deref().map_or(Ok(Locale::default()), |raw| {
            raw.parse().map_err(|error: crate::domain::UnknownVariant| {
                ConfigError::InvalidValue {
                    name: "CULTS_LOCALE",
                    value: error.value,
                    expected: error.expected,
                }
            })
        })
    }

    /// Configured currency, defaulting to US dollars.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown currency.
    pub fn currency(&self) -> Result<Currency, ConfigError> {
        self.currency.as_deref().map_or(Ok(Currency::default()), |raw| {
            raw.parse().map_err(|error: crate::domain::UnknownVariant| {
                ConfigError::InvalidValue {
                    name: "CULTS_CURRENCY",
                    value: error.value,
                    expected: error.expected,
                }
            })
        })
    }

    /// Configured account nickname.
    #[must_use]
    pub fn nick(&self) -> &str {
        self.nick
            .as_deref()
            .map(str::trim)
            .filter(|nick| !nick.is_empty())
            .unwrap_or(DEFAULT_NICK)
    }

    /// Configured GraphQL endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the value is not a URL.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let raw = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidValue {
            name: "CULTS_ENDPOINT",
            value: raw.to_owned(),
            expected: "an absolute URL",
        })
    }

    /// Configured listen address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = Some(self.bind_addr.trim())
            .filter(|addr| !addr.is_empty())
            .unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|_| ConfigError::InvalidValue {
            name: "CULTS_BIND_ADDR",
            value: raw.to_owned(),
            expected: "host:port",
        })
    }

    /// Query context derived from these settings.
    ///
    /// # Errors
    ///
    /// Propagates locale and currency parse failures.
    pub fn catalog_context(&self) -> Result<CatalogContext, ConfigError> {
        Ok(CatalogContext {
            locale: self.locale()?,
            currency: self.currency()?,
            nick: self.nick().to_owned(),
        })
    }
}

/// Identifier and secret for the Cults3D API.
///
/// Both values are wiped from memory on drop. `Debug` never prints the
/// secret.
pub struct CultsCredentials {
    identifier: String,
    secret: String,
}

impl CultsCredentials {
    /// Build credentials from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] when either value is blank after
    /// trimming.
    pub fn new(identifier: &str, secret: &str) -> Result<Self, ConfigError> {
        let identifier = required(USER_ENV, Some(identifier))?;
        let secret = required(PASS_ENV, Some(secret))?;
        Ok(Self { identifier, secret })
    }

    /// Read `CULTS3D_USER` and `CULTS3D_PASS` from the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mockable::MockEnv;
    /// use storefront::settings::CultsCredentials;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "CULTS3D_USER" => Some(" seller ".to_owned()),
    ///     "CULTS3D_PASS" => Some("api-key".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let credentials = CultsCredentials::from_env(&env).expect("credentials present");
    /// assert_eq!(credentials.identifier(), "seller");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] naming the first absent or blank
    /// variable.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let identifier = required(USER_ENV, env.string(USER_ENV).as_deref())?;
        let secret = required(PASS_ENV, env.string(PASS_ENV).as_deref())?;
        Ok(Self { identifier, secret })
    }

    /// Account identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// API secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for CultsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CultsCredentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl Drop for CultsCredentials {
    fn drop(&mut self) {
        self.identifier.zeroize();
        self.secret.zeroize();
    }
}

fn required(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_owned)
        .ok_or(ConfigError::MissingEnv { name })
}
