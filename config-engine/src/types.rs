use std::fmt;
use std::str::FromStr;

use url::{Host, Url};

use crate::error::{ConfigError, Result};

/// Protocol assumed when the scheme only names the provider type
pub const DEFAULT_PROTOCOL: &str = "http";

/// Connection descriptor for a remote configuration provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    /// Provider implementation, e.g. `consul`
    pub provider_type: String,
}

impl ServiceConfig {
    /// Fill the descriptor from a `type.protocol://host:port` URL.
    ///
    /// A scheme without a `.` names only the type and gets the `http`
    /// protocol. The receiver is left untouched when parsing fails.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the URL is malformed or padded with
    /// whitespace, has no host, has no explicit numeric port, or its scheme
    /// splits into more than two parts.
    pub fn populate_from_url(&mut self, provider_url: &str) -> Result<()> {
        if provider_url.trim() != provider_url {
            return Err(ConfigError::InvalidUrl {
                url: provider_url.to_string(),
                reason: "leading or trailing whitespace".to_string(),
            });
        }

        let parsed = Url::parse(provider_url).map_err(|e| ConfigError::InvalidUrl {
            url: provider_url.to_string(),
            reason: e.to_string(),
        })?;

        let host = match parsed.host() {
            Some(Host::Ipv6(addr)) => addr.to_string(),
            Some(Host::Ipv4(addr)) => addr.to_string(),
            Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
            _ => {
                return Err(ConfigError::MissingHost {
                    url: provider_url.to_string(),
                })
            }
        };

        let port = explicit_port(&parsed, provider_url).ok_or_else(|| ConfigError::InvalidPort {
            url: provider_url.to_string(),
            reason: "no port specified".to_string(),
        })?;

        let (provider_type, protocol) = split_scheme(parsed.scheme())?;

        self.host = host;
        self.port = port;
        self.provider_type = provider_type;
        self.protocol = protocol;

        Ok(())
    }

    /// URL used to reach the provider, without the type prefix
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.bracketed_host(), self.port)
    }

    fn bracketed_host(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        }
    }
}

impl FromStr for ServiceConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let mut config = ServiceConfig::default();
        config.populate_from_url(s)?;
        Ok(config)
    }
}

impl fmt::Display for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}://{}:{}",
            self.provider_type,
            self.protocol,
            self.bracketed_host(),
            self.port
        )
    }
}

fn split_scheme(scheme: &str) -> Result<(String, String)> {
    let invalid = || ConfigError::InvalidScheme {
        scheme: scheme.to_string(),
    };

    let parts: Vec<&str> = scheme.split('.').collect();
    if parts.iter().any(|part| part.is_empty()) {
        return Err(invalid());
    }

    match parts.as_slice() {
        [provider_type] => Ok(((*provider_type).to_string(), DEFAULT_PROTOCOL.to_string())),
        [provider_type, protocol] => Ok(((*provider_type).to_string(), (*protocol).to_string())),
        _ => Err(invalid()),
    }
}

/// Port as written in the URL.
///
/// `Url` hides ports equal to the scheme default (`http://host:80`), so those
/// are recovered from the raw authority. An implied default is not accepted.
fn explicit_port(parsed: &Url, raw: &str) -> Option<u16> {
    parsed.port().or_else(|| {
        let default = parsed.port_or_known_default()?;
        let authority = raw
            .split_once("://")
            .map(|(_, rest)| rest.split(['/', '?', '#']).next().unwrap_or(rest))?;
        // skip past an IPv6 literal so its colons are not taken for the port
        let after_host = authority.rsplit_once(']').map_or(authority, |(_, rest)| rest);
        let (_, written) = after_host.rsplit_once(':')?;
        (written.parse::<u16>().ok()? == default).then_some(default)
    })
}
