//! Form configuration from environment variables.

use std::time::Duration;

use employee_profile_shared::{CountryCode, PictureLimits};

/// Delay used by the simulated submitter when nothing else is configured.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    /// Dial prefix preselected when the form mounts.
    pub default_country_code: CountryCode,
    /// Stand-in latency for the simulated submitter.
    pub submit_delay: Duration,
    /// Reject pictures outside `picture_limits` instead of only warning.
    pub enforce_picture_limits: bool,
    pub picture_limits: PictureLimits,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_country_code: CountryCode::default(),
            submit_delay: DEFAULT_SUBMIT_DELAY,
            enforce_picture_limits: false,
            picture_limits: PictureLimits::default(),
        }
    }
}

impl FormConfig {
    /// Read configuration from the process environment.
    ///
    /// Environment variables:
    /// - `PROFILE_FORM_COUNTRY_CODE`: "+977" | "+1" | "+44" (default: "+977")
    /// - `PROFILE_FORM_SUBMIT_DELAY_MS`: simulated submit latency (default: 700)
    /// - `PROFILE_FORM_ENFORCE_PICTURE_LIMITS`: "true" | "false" (default: "false")
    /// - `PROFILE_FORM_MAX_PICTURE_BYTES`: picture size limit (default: 5 MB)
    ///
    /// The browser has no environment, so WASM builds always use defaults.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    /// Build a config from an arbitrary key lookup. Unparseable values are
    /// logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("PROFILE_FORM_COUNTRY_CODE") {
            match raw.parse::<CountryCode>() {
                Ok(code) => config.default_country_code = code,
                Err(e) => crate::log_warn!("Ignoring PROFILE_FORM_COUNTRY_CODE: {}", e),
            }
        }

        if let Some(raw) = lookup("PROFILE_FORM_SUBMIT_DELAY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.submit_delay = Duration::from_millis(ms),
                Err(e) => crate::log_warn!("Ignoring PROFILE_FORM_SUBMIT_DELAY_MS={}: {}", raw, e),
            }
        }

        if let Some(raw) = lookup("PROFILE_FORM_ENFORCE_PICTURE_LIMITS") {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.enforce_picture_limits = true,
                "0" | "false" | "no" | "off" => config.enforce_picture_limits = false,
                other => {
                    crate::log_warn!("Ignoring PROFILE_FORM_ENFORCE_PICTURE_LIMITS={}", other)
                }
            }
        }

        if let Some(raw) = lookup("PROFILE_FORM_MAX_PICTURE_BYTES") {
            match raw.trim().parse::<u64>() {
                Ok(bytes) if bytes > 0 => config.picture_limits.max_bytes = bytes,
                _ => crate::log_warn!("Ignoring PROFILE_FORM_MAX_PICTURE_BYTES={}", raw),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(FormConfig::from_lookup(|_| None), FormConfig::default());
    }

    #[test]
    fn recognised_values_override_defaults() {
        let config = FormConfig::from_lookup(lookup_from(&[
            ("PROFILE_FORM_COUNTRY_CODE", "+44"),
            ("PROFILE_FORM_SUBMIT_DELAY_MS", "0"),
            ("PROFILE_FORM_ENFORCE_PICTURE_LIMITS", "TRUE"),
            ("PROFILE_FORM_MAX_PICTURE_BYTES", "1024"),
        ]));

        assert_eq!(config.default_country_code, CountryCode::UnitedKingdom);
        assert_eq!(config.submit_delay, Duration::ZERO);
        assert!(config.enforce_picture_limits);
        assert_eq!(config.picture_limits.max_bytes, 1024);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = FormConfig::from_lookup(lookup_from(&[
            ("PROFILE_FORM_COUNTRY_CODE", "+91"),
            ("PROFILE_FORM_SUBMIT_DELAY_MS", "soon"),
            ("PROFILE_FORM_ENFORCE_PICTURE_LIMITS", "maybe"),
            ("PROFILE_FORM_MAX_PICTURE_BYTES", "0"),
        ]));

        assert_eq!(config, FormConfig::default());
    }
}
