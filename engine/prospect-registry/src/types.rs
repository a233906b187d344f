use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positional group a prospect is filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Guard,
    Wing,
    Big,
}

impl Role {
    /// Map a raw position or role cell to its group
    ///
    /// Combined labels such as `SG/PG` or `F-C` are grouped by their first
    /// position. Returns `None` for values that do not name a known position,
    /// so such prospects only show up when the role filter is `all`.
    pub fn normalize(raw: &str) -> Option<Role> {
        let value = raw.trim().to_ascii_uppercase();
        if let Some(role) = Self::from_label(&value) {
            return Some(role);
        }

        let primary = value.split(['/', '-']).next()?.trim();
        if primary.is_empty() || primary == value {
            return None;
        }
        Self::from_label(primary)
    }

    fn from_label(label: &str) -> Option<Role> {
        match label {
            "GUARD" | "G" | "PG" | "SG" | "COMBO GUARD" | "LEAD GUARD" => Some(Role::Guard),
            "WING" | "W" | "SF" | "GF" | "G/F" | "SG/SF" | "F" | "FORWARD" => Some(Role::Wing),
            "BIG" | "C" | "PF" | "FC" | "F/C" | "CENTER" => Some(Role::Big),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guard => "Guard",
            Role::Wing => "Wing",
            Role::Big => "Big",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::normalize(s).ok_or_else(|| RegistryError::UnknownRole(s.to_string()))
    }
}

/// Parse a role filter argument; `all` selects every role
pub fn parse_role_filter(value: &str) -> Result<Option<Role>, RegistryError> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    value.parse().map(Some)
}

/// Errors that can occur during prospect lookup
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Prospect not found in the loaded board
    ProspectNotFound(String),

    /// Role name that does not map to Guard, Wing or Big
    UnknownRole(String),

    /// No board has been loaded
    RegistryEmpty,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::ProspectNotFound(name) => {
                write!(f, "Prospect '{name}' not found on this board")
            }
            RegistryError::UnknownRole(role) => {
                write!(f, "Unknown role '{role}' (expected all, Guard, Wing or Big)")
            }
            RegistryError::RegistryEmpty => {
                write!(f, "No prospects loaded")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
