//! Configuration loading and constants.
//!
//! The service has no config file. Everything comes from environment variables
//! injected by the orchestrator at container start: the listen port, the pod
//! identity reported by the status endpoint, and the log format.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// =============================================================================
// Status Payload Constants
// =============================================================================

/// Lab level reported by the status endpoint
pub const STATUS_LEVEL: u8 = 3;

/// Platform type reported by the status endpoint
pub const STATUS_TYPE: &str = "Kubernetes";

/// Fixed message reported by the status endpoint
pub const STATUS_MESSAGE: &str = "Container orchestration at scale";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Every response is per-request (timestamped status, live probe) and must not be cached
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Environment Variables and Defaults
// =============================================================================

/// Listen port
pub const ENV_PORT: &str = "PORT";

/// Pod name, set by Kubernetes to the pod's hostname
pub const ENV_POD: &str = "HOSTNAME";

/// Node name, usually injected through the downward API
pub const ENV_NODE: &str = "NODE_NAME";

/// Namespace, usually injected through the downward API
pub const ENV_NAMESPACE: &str = "POD_NAMESPACE";

/// Log format selector ("text" or "json")
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Port used when PORT is unset or empty
pub const DEFAULT_PORT: u16 = 8080;

/// Listen on all interfaces
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "kube_status=info,tower_http=info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Pod identity reported by the status endpoint
    pub identity: PodIdentity,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl HttpServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

/// Where this process is running, as seen by the orchestrator.
///
/// Fields are empty strings when the corresponding variable is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodIdentity {
    pub pod: String,
    pub node: String,
    pub namespace: String,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Unrecognized LOG_FORMAT value, kept so it can be reported once logging is up
    pub rejected_format: Option<String>,
}

impl LoggingConfig {
    fn from_value(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            None | Some("") => Self::default(),
            Some(v) if v.eq_ignore_ascii_case("text") => Self::default(),
            Some(v) if v.eq_ignore_ascii_case("json") => Self {
                format: LogFormat::Json,
                rejected_format: None,
            },
            Some(v) => Self {
                format: LogFormat::Text,
                rejected_format: Some(v.to_string()),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(ENV_PORT).filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => return Err(ConfigError::InvalidPort(raw)),
            },
        };

        let identity = PodIdentity {
            pod: lookup(ENV_POD).unwrap_or_default(),
            node: lookup(ENV_NODE).unwrap_or_default(),
            namespace: lookup(ENV_NAMESPACE).unwrap_or_default(),
        };

        Ok(Self {
            http: HttpServerConfig {
                port,
                ..Default::default()
            },
            identity,
            logging: LoggingConfig::from_value(lookup(ENV_LOG_FORMAT)),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {0:?}: expected a port number between 0 and 65535")]
    InvalidPort(String),
}
