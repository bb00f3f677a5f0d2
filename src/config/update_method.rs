//! HTTP verb selection for updates of persisted resources.

use std::fmt;
use std::str::FromStr;

use crate::clients::HttpMethod;
use crate::error::ConfigError;

/// The HTTP verb used when saving a resource that already exists remotely.
///
/// A deployment picks exactly one verb. The default is [`UpdateMethod::Patch`].
///
/// # Example
///
/// ```rust
/// use thickm::UpdateMethod;
///
/// let method: UpdateMethod = "put".parse().unwrap();
/// assert_eq!(method, UpdateMethod::Put);
/// assert_eq!(UpdateMethod::default().to_string(), "PATCH");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UpdateMethod {
    /// Full replacement via `PUT`.
    Put,
    /// Partial update via `PATCH`.
    #[default]
    Patch,
}

impl UpdateMethod {
    /// Returns the transport-level method for this verb.
    #[must_use]
    pub const fn http_method(self) -> HttpMethod {
        match self {
            Self::Put => HttpMethod::Put,
            Self::Patch => HttpMethod::Patch,
        }
    }
}

impl fmt::Display for UpdateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Put => f.write_str("PUT"),
            Self::Patch => f.write_str("PATCH"),
        }
    }
}

impl FromStr for UpdateMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "put" => Ok(Self::Put),
            "patch" => Ok(Self::Patch),
            _ => Err(ConfigError::InvalidUpdateMethod {
                method: s.to_string(),
            }),
        }
    }
}
