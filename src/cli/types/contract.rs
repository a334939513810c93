//! Contract classification types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Free-agent category for the upcoming contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum ContractType {
    /// Unrestricted free agent
    UFA,
    /// Restricted free agent
    RFA,
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContractType::UFA => "UFA",
            ContractType::RFA => "RFA",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ContractType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UFA" => Ok(ContractType::UFA),
            "RFA" => Ok(ContractType::RFA),
            other => Err(format!("unknown contract type: {}", other)),
        }
    }
}

/// Projected value category of a contract relative to expected GAR.
///
/// Stored as free text in `projected_contracts.value_category`; anything
/// that is not one of the three known labels maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum ValueTier {
    Bargain,
    #[serde(rename = "Fair Deal")]
    FairDeal,
    Overpay,
    #[default]
    Unknown,
}

impl ValueTier {
    /// Lenient parse used for database values.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some("Bargain") => ValueTier::Bargain,
            Some("Fair Deal") => ValueTier::FairDeal,
            Some("Overpay") => ValueTier::Overpay,
            _ => ValueTier::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValueTier::Bargain => "Bargain",
            ValueTier::FairDeal => "Fair Deal",
            ValueTier::Overpay => "Overpay",
            ValueTier::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ValueTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_tier_from_label() {
        assert_eq!(ValueTier::from_label(Some("Bargain")), ValueTier::Bargain);
        assert_eq!(ValueTier::from_label(Some("Fair Deal")), ValueTier::FairDeal);
        assert_eq!(ValueTier::from_label(Some(" Overpay ")), ValueTier::Overpay);
        assert_eq!(ValueTier::from_label(Some("fair deal")), ValueTier::Unknown);
        assert_eq!(ValueTier::from_label(None), ValueTier::Unknown);
    }

    #[test]
    fn test_value_tier_serializes_as_label() {
        let json = serde_json::to_string(&ValueTier::FairDeal).unwrap();
        assert_eq!(json, "\"Fair Deal\"");
    }

    #[test]
    fn test_contract_type_parse() {
        assert_eq!("ufa".parse::<ContractType>().unwrap(), ContractType::UFA);
        assert_eq!("RFA".parse::<ContractType>().unwrap(), ContractType::RFA);
        assert!("ELC".parse::<ContractType>().is_err());
    }
}
