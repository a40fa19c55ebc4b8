//! Client configuration read from the host page.
//!
//! The server renders the mount element with `data-*` attributes carrying the
//! same limits it enforces, so the client can reject oversized input early.

pub const MOUNT_ID: &str = "triage-app";
pub const EMBEDDED_RESULT_ID: &str = "server-result";

pub const DEFAULT_MAX_CHARS: usize = 40_000;
pub const DEFAULT_MAX_FILE_MB: u64 = 2;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Input limits applied before a submission is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLimits {
    pub max_chars: usize,
    pub max_file_mb: u64,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_file_mb: DEFAULT_MAX_FILE_MB,
        }
    }
}

impl FormLimits {
    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub limits: FormLimits,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            limits: FormLimits::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build from an attribute lookup. Missing, unparsable, or zero limits
    /// fall back to the defaults.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let max_chars = parse_positive(attr("data-max-chars")).unwrap_or(DEFAULT_MAX_CHARS);
        let max_file_mb = parse_positive(attr("data-max-file-mb")).unwrap_or(DEFAULT_MAX_FILE_MB);
        let log_level = attr("data-log-level")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            limits: FormLimits {
                max_chars,
                max_file_mb,
            },
            log_level,
        }
    }

    pub fn from_element(element: &web_sys::Element) -> Self {
        Self::from_attributes(|name| element.get_attribute(name))
    }
}

fn parse_positive<T>(raw: Option<String>) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    raw?.trim().parse::<T>().ok().filter(|v| *v > T::default())
}
