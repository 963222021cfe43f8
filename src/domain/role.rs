//! Operating role of this node.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// A node either coordinates other nodes or follows a coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Master,
    Slave,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Slave => "slave",
        }
    }

    #[must_use]
    pub const fn is_master(self) -> bool {
        matches!(self, Self::Master)
    }

    /// Role selected by the "Master" checkbox.
    #[must_use]
    pub const fn from_master_flag(master: bool) -> Self {
        if master {
            Self::Master
        } else {
            Self::Slave
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match only: `Master` or ` master` are not roles.
impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "master" => Ok(Self::Master),
            "slave" => Ok(Self::Slave),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_exact_values() {
        assert_eq!("master".parse::<Role>().unwrap(), Role::Master);
        assert_eq!("slave".parse::<Role>().unwrap(), Role::Slave);
        for bad in ["", "Master", " slave", "primary"] {
            assert!(bad.parse::<Role>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn master_flag_maps_to_role() {
        assert_eq!(Role::from_master_flag(true), Role::Master);
        assert_eq!(Role::from_master_flag(false), Role::Slave);
        assert!(Role::Master.is_master());
        assert!(!Role::Slave.is_master());
    }
}
