//! Recurrence frequencies for care tasks

use serde::{Deserialize, Serialize};

/// How often a task recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    AsNeeded,
}

impl Frequency {
    /// Whether completing a task of this frequency spawns a fresh occurrence
    pub fn recurs(&self) -> bool {
        matches!(self, Self::Daily | Self::Weekly)
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::AsNeeded => write!(f, "as_needed"),
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "as_needed" | "as-needed" | "asneeded" => Ok(Self::AsNeeded),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_display() {
        assert_eq!(Frequency::Daily.to_string(), "daily");
        assert_eq!(Frequency::Weekly.to_string(), "weekly");
        assert_eq!(Frequency::Monthly.to_string(), "monthly");
        assert_eq!(Frequency::AsNeeded.to_string(), "as_needed");
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!("daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!("WEEKLY".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!("as-needed".parse::<Frequency>().unwrap(), Frequency::AsNeeded);
        assert!("fortnightly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_frequency_recurs() {
        assert!(Frequency::Daily.recurs());
        assert!(Frequency::Weekly.recurs());
        assert!(!Frequency::Monthly.recurs());
        assert!(!Frequency::AsNeeded.recurs());
    }

    #[test]
    fn test_frequency_serde() {
        let json = serde_json::to_string(&Frequency::AsNeeded).unwrap();
        assert_eq!(json, "\"as_needed\"");

        let freq: Frequency = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(freq, Frequency::Weekly);
    }
}
