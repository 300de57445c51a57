//! Transaction category labels
//!
//! Categories classify what a balance change was for. The set mirrors the
//! card's spending menu plus the two labels the ledger itself applies
//! (`Deposit` for credits, `Transfer` for inter-account moves). Anything
//! else becomes a user-supplied `Other` label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Money added to the card
    Deposit,
    /// One leg of an inter-account transfer
    Transfer,
    /// Toll road payment
    TollRoad,
    /// Public transportation fare
    PublicTransportation,
    /// Supermarket purchase
    Supermarket,
    /// Gas station purchase
    GasStation,
    /// Recreational spending
    Recreational,
    /// Any other user-supplied label
    Other(String),
}

impl Category {
    /// Parse a category from user text
    ///
    /// Matching is case-insensitive and tolerates spaces/underscores. An
    /// unrecognized non-empty label becomes [`Category::Other`]; empty
    /// labels are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }

        let normalized: String = trimmed
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect();

        Some(match normalized.as_str() {
            "deposit" => Self::Deposit,
            "transfer" => Self::Transfer,
            "tollroad" => Self::TollRoad,
            "publictransportation" => Self::PublicTransportation,
            "supermarket" => Self::Supermarket,
            "gasstation" => Self::GasStation,
            "recreational" => Self::Recreational,
            "other" => Self::Other("Other".to_string()),
            _ => Self::Other(trimmed.to_string()),
        })
    }

    /// The label as shown in history and exports
    pub fn label(&self) -> &str {
        match self {
            Self::Deposit => "Deposit",
            Self::Transfer => "Transfer",
            Self::TollRoad => "Toll Road",
            Self::PublicTransportation => "Public Transportation",
            Self::Supermarket => "Supermarket",
            Self::GasStation => "Gas Station",
            Self::Recreational => "Recreational",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        assert_eq!(Category::parse("deposit"), Some(Category::Deposit));
        assert_eq!(Category::parse("Toll Road"), Some(Category::TollRoad));
        assert_eq!(Category::parse("toll_road"), Some(Category::TollRoad));
        assert_eq!(Category::parse("TOLLROAD"), Some(Category::TollRoad));
        assert_eq!(
            Category::parse("public transportation"),
            Some(Category::PublicTransportation)
        );
        assert_eq!(Category::parse("gas-station"), Some(Category::GasStation));
    }

    #[test]
    fn test_parse_custom_label() {
        assert_eq!(
            Category::parse("Campus Canteen"),
            Some(Category::Other("Campus Canteen".to_string()))
        );
    }

    #[test]
    fn test_parse_empty_rejected() {
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("   "), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Category::TollRoad), "Toll Road");
        assert_eq!(format!("{}", Category::Deposit), "Deposit");
        assert_eq!(
            format!("{}", Category::Other("Bookstore".to_string())),
            "Bookstore"
        );
    }

    #[test]
    fn test_serialization() {
        let cat = Category::Supermarket;
        let json = serde_json::to_string(&cat).unwrap();
        assert_eq!(json, "\"supermarket\"");

        let custom = Category::Other("Bookstore".to_string());
        let json = serde_json::to_string(&custom).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(custom, deserialized);
    }
}
