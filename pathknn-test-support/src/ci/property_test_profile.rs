//! Property-test run profile shared by every proptest suite.
//!
//! CI raises case counts and local runs lower them through the environment
//! without touching individual suites.

use std::{env, num::ParseIntError};

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const PATHKNN_PBT_FORK_ENV_KEY: &str = "PATHKNN_PBT_FORK";

/// Reasons an override is ignored in favour of the suite default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count is not an unsigned integer.
    #[error("case count is not an unsigned integer: {0}")]
    InvalidCases(#[from] ParseIntError),
    /// The case count is zero.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The fork flag is not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got `{raw}`")]
    InvalidFlag {
        /// Raw value read from the environment.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the environment, falling back to the given
    /// defaults for unset or invalid overrides.
    ///
    /// # Examples
    /// ```
    /// use pathknn_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(PATHKNN_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(
    key: &'static str,
    default: T,
    parse: impl Fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|err| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %err,
            "ignoring invalid property-test override",
        );
        default
    })
}

/// Parses a positive case count.
///
/// # Errors
/// Returns [`OverrideError::InvalidCases`] for non-numeric input and
/// [`OverrideError::ZeroCases`] for zero.
pub fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>()? {
        0 => Err(OverrideError::ZeroCases),
        cases => Ok(cases),
    }
}

/// Parses a boolean flag, accepting common spellings case-insensitively.
///
/// # Errors
/// Returns [`OverrideError::InvalidFlag`] for any other spelling.
pub fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::InvalidFlag {
            raw: raw.to_owned(),
        }),
    }
}
