//! Role schema - Who is acting on the dashboard

use serde::{Deserialize, Serialize};

/// Actor role. Each role carries its own booking transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[default]
    Garage,
    Driver,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Garage => write!(f, "garage"),
            Role::Driver => write!(f, "driver"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "garage" => Ok(Role::Garage),
            "driver" => Ok(Role::Driver),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}
