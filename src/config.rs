//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `DHAN_ACCESS_TOKEN` | empty |
//! | `DHAN_API_BASE_URL` | `https://api.dhan.co` |
//! | `DHAN_SCRIP_MASTER` | `api-scrip-master.csv` |
//! | `DHAN_PROXY_BIND` | `0.0.0.0` |
//! | `DHAN_PROXY_PORT`, then `PORT` | `8000` |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::constants::{API_BASE_URL, DEFAULT_BIND, DEFAULT_PORT, DEFAULT_SCRIP_MASTER_PATH};
use crate::error::{ProxyError, Result};

/// Proxy configuration derived from environment variables.
#[derive(Clone)]
pub struct ProxyConfig {
    pub bind: String,
    pub port: u16,
    /// DhanHQ JWT forwarded as `access-token`. Empty ⇒ upstream will reject.
    pub access_token: String,
    pub api_base_url: String,
    /// CSV instrument dataset read at startup.
    pub scrip_master: PathBuf,
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str) -> Option<u16> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

impl ProxyConfig {
    /// Read every setting from the environment, falling back to the
    /// module-level defaults for unset or blank variables.
    pub fn from_env() -> Self {
        Self {
            bind: env_str("DHAN_PROXY_BIND", DEFAULT_BIND),
            // `PORT` is what most PaaS hosts inject.
            port: env_u16("DHAN_PROXY_PORT")
                .or_else(|| env_u16("PORT"))
                .unwrap_or(DEFAULT_PORT),
            access_token: env_str("DHAN_ACCESS_TOKEN", ""),
            api_base_url: env_str("DHAN_API_BASE_URL", API_BASE_URL),
            scrip_master: PathBuf::from(env_str("DHAN_SCRIP_MASTER", DEFAULT_SCRIP_MASTER_PATH)),
        }
    }

    /// Listen address built from `bind` and `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .map_err(|e| ProxyError::Config(format!("invalid bind address {}: {e}", self.bind)))
    }
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("bind", &self.bind)
            .field("port", &self.port)
            .field("access_token", &if self.access_token.is_empty() { "<unset>" } else { "<redacted>" })
            .field("api_base_url", &self.api_base_url)
            .field("scrip_master", &self.scrip_master)
            .finish()
    }
}
