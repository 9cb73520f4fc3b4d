use serde::{Deserialize, Serialize};

/// Cross-origin policy for the HTTP API.
///
/// Entries are either `*` (any origin), an exact origin such as
/// `http://localhost:5173`, or an origin whose port is `*`
/// (`http://localhost:*`) which matches that scheme and host on any port.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl CorsConfig {
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    pub fn has_wildcard_ports(&self) -> bool {
        self.allowed_origins.iter().any(|o| o.ends_with(":*"))
    }

    /// Checks a request origin against the allow-list.
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| {
            if allowed == "*" {
                return true;
            }
            match allowed.strip_suffix(":*") {
                Some(prefix) => origin
                    .strip_prefix(prefix)
                    .and_then(|rest| rest.strip_prefix(':'))
                    .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())),
                None => allowed == origin,
            }
        })
    }

    pub fn validate_origin(origin: &str) -> Result<(), String> {
        if origin == "*" {
            return Ok(());
        }
        let rest = origin
            .strip_prefix("http://")
            .or_else(|| origin.strip_prefix("https://"))
            .ok_or_else(|| format!("CORS origin '{}' must start with http:// or https://", origin))?;
        if rest.is_empty() || rest.contains('/') {
            return Err(format!(
                "CORS origin '{}' must be scheme and host only, without a path",
                origin
            ));
        }
        Ok(())
    }
}
