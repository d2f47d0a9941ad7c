//! Coarse error families, keyed off the thousands digit of the code

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Family an error code belongs to
///
/// The gateway keys log severity and reporting off the family rather
/// than off individual codes: system faults are logged as errors,
/// upstream faults as warnings, everything else is the caller's
/// problem. The mapping follows the code ranges:
/// 0xxx general, 1xxx auth, 2xxx permission, 3xxx upstream, 9xxx system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Malformed or unsatisfiable requests (0xxx)
    General,
    /// Login and registration failures (1xxx)
    Auth,
    /// Portal access denials (2xxx)
    Permission,
    /// Storefront backend failures seen through the proxy (3xxx)
    Upstream,
    /// Faults inside the gateway itself (9xxx)
    System,
}

impl ErrorCategory {
    /// Family for a raw code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Upstream,
            _ => Self::System,
        }
    }

    /// Lowercase family name, used as the `category` log field
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Upstream => "upstream",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Family this code belongs to
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
