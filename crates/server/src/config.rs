//! Server configuration
//!
//! Environment variables (a `.env` file is loaded first if present):
//!   HOST                     - bind address (default: 127.0.0.1)
//!   BACKEND_PORT / PORT      - bind port, ANSI codes stripped (default: 3000)
//!   COMPANION_CORS_ANY       - allow any origin, true/false (default: true)
//!   COMPANION_DEFAULT_SEED   - seed for sessions created without one
//!   COMPANION_MAX_SESSIONS   - cap on concurrently open sessions (default: 1024)

use strip_ansi_escapes::strip;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allow_any: bool,
    pub default_seed: Option<u64>,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            cors_allow_any: true,
            default_seed: None,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = lookup("BACKEND_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|s| parse_port(&s))
            .unwrap_or_else(|| {
                tracing::info!("No PORT environment variable set, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            });

        let cors_allow_any = lookup("COMPANION_CORS_ANY")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.cors_allow_any);

        let default_seed = lookup("COMPANION_DEFAULT_SEED").and_then(|v| v.trim().parse::<u64>().ok());

        let max_sessions = lookup("COMPANION_MAX_SESSIONS")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.max_sessions);

        Self {
            host,
            port,
            cors_allow_any,
            default_seed,
            max_sessions,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    // remove any ANSI codes, then parse
    let cleaned = String::from_utf8(strip(raw.as_bytes())).ok()?;
    cleaned.trim().parse::<u16>().ok()
}
