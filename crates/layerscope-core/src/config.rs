//! Process-wide display configuration.
//!
//! The verbosity is fixed once at startup and read-only afterwards; decoding
//! never consults it, only rendering does.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

use crate::record::Tier;

static VERBOSITY: OnceLock<Verbosity> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("verbosity {value} out of range (expected 0..=3)")]
    OutOfRange { value: u8 },
    #[error("invalid verbosity '{0}'")]
    Invalid(String),
    #[error("verbosity already initialized")]
    AlreadyInitialized,
}

/// Output detail ceiling, 0 (layer markers only) to 3 (everything).
///
/// # Examples
/// ```
/// use layerscope_core::{Tier, Verbosity};
///
/// let verbosity: Verbosity = "2".parse()?;
/// assert!(verbosity.allows(Tier::Common));
/// assert!(!verbosity.allows(Tier::Detailed));
/// # Ok::<(), layerscope_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Verbosity(u8);

impl Verbosity {
    pub const MIN: Verbosity = Verbosity(0);
    pub const MAX: Verbosity = Verbosity(3);
    pub const DEFAULT: Verbosity = Verbosity(1);

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn allows(self, tier: Tier) -> bool {
        tier.level() <= self.0
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(ConfigError::OutOfRange { value });
        }
        Ok(Self(value))
    }
}

impl FromStr for Verbosity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| ConfigError::Invalid(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fix the process-wide verbosity. Only the first call succeeds.
pub fn init_verbosity(verbosity: Verbosity) -> Result<(), ConfigError> {
    VERBOSITY
        .set(verbosity)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// The process-wide verbosity, or the default when never initialized.
pub fn verbosity() -> Verbosity {
    VERBOSITY.get().copied().unwrap_or_default()
}

/// Per-run settings for the inspect loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectOptions {
    pub verbosity: Verbosity,
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
}

impl InspectOptions {
    /// Options bound to the process-wide verbosity.
    pub fn from_global() -> Self {
        Self {
            verbosity: verbosity(),
            max_frames: None,
        }
    }
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self::from_global()
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, Verbosity, init_verbosity, verbosity};
    use crate::record::Tier;

    #[test]
    fn parses_levels_in_range() {
        assert_eq!("0".parse::<Verbosity>().unwrap(), Verbosity::MIN);
        assert_eq!(" 3 ".parse::<Verbosity>().unwrap(), Verbosity::MAX);
    }

    #[test]
    fn rejects_out_of_range_level() {
        assert_eq!(
            Verbosity::try_from(4).unwrap_err(),
            ConfigError::OutOfRange { value: 4 }
        );
        assert!(matches!(
            "loud".parse::<Verbosity>().unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[test]
    fn markers_are_always_allowed() {
        assert!(Verbosity::MIN.allows(Tier::Marker));
        assert!(!Verbosity::MIN.allows(Tier::Essential));
        assert!(Verbosity::MAX.allows(Tier::Detailed));
    }

    #[test]
    fn global_verbosity_is_set_once() {
        init_verbosity(Verbosity::MAX).unwrap();
        assert_eq!(verbosity(), Verbosity::MAX);
        assert_eq!(
            init_verbosity(Verbosity::MIN).unwrap_err(),
            ConfigError::AlreadyInitialized
        );
        assert_eq!(verbosity(), Verbosity::MAX);
    }
}
