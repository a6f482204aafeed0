// 💳 Card Catalog - Entity model and dataset loading
// The catalog is an ordered, immutable list of cards loaded once at startup

use crate::selection::Keyed;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Embedded default dataset, compiled into the binary.
const BUILTIN_CARDS: &str = include_str!("../data/cards.json");

// ============================================================================
// CARD ATTRIBUTES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    Debit,
    Prepaid,
    Credit,
    #[serde(rename = "Secured Credit")]
    SecuredCredit,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Debit => "Debit",
            CardType::Prepaid => "Prepaid",
            CardType::Credit => "Credit",
            CardType::SecuredCredit => "Secured Credit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Visa,
    Mastercard,
    #[serde(rename = "Visa/Mastercard")]
    VisaOrMastercard,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Visa => "Visa",
            Network::Mastercard => "Mastercard",
            Network::VisaOrMastercard => "Visa/Mastercard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Custody {
    Custodial,
    #[serde(rename = "Non-Custodial")]
    NonCustodial,
    #[serde(rename = "Self-Custody")]
    SelfCustody,
}

impl Custody {
    pub fn as_str(&self) -> &'static str {
        match self {
            Custody::Custodial => "Custodial",
            Custody::NonCustodial => "Non-Custodial",
            Custody::SelfCustody => "Self-Custody",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KycLevel {
    Required,
    Light,
    None,
}

impl KycLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycLevel::Required => "Required",
            KycLevel::Light => "Light",
            KycLevel::None => "None",
        }
    }
}

// ============================================================================
// CARD ENTITY
// ============================================================================

/// One crypto card offering.
///
/// The `id` is the stable identity for the process lifetime; everything
/// else is display or matching data. `cashback_max` and `rank` are
/// optional: a card without a cashback figure fails any positive cashback
/// threshold, and a card without a rank sorts after all ranked cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub card_type: CardType,
    pub network: Network,

    /// Best-case cashback percentage, when the issuer publishes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashback_max: Option<f64>,

    pub annual_fee: String,
    pub fx_fee: String,
    pub perks: Vec<String>,
    pub signup_bonus: String,
    pub custody: Custody,

    /// Free text, comma/slash separated geographic terms
    pub regions: String,

    pub kyc: KycLevel,

    /// Currency codes; the sentinel "Global" matches any requested currency
    pub supported_currencies: Vec<String>,

    /// Paid listing rank (1 = most prominent); absent = unranked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,

    pub staking_required: String,
    pub atm_limit: String,
    pub mobile_pay: bool,
    pub supported_assets: String,
    pub official_link: String,
}

impl Keyed for Card {
    fn key(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Ordered, immutable card list for the session.
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Build a catalog from an already-parsed card list.
    /// Rejects duplicate ids so selection state stays unambiguous.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id.as_str()) {
                bail!("duplicate card id in dataset: {}", card.id);
            }
        }
        Ok(Catalog { cards })
    }

    /// Load the dataset compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let cards: Vec<Card> =
            serde_json::from_str(BUILTIN_CARDS).context("Failed to parse embedded card dataset")?;
        Catalog::from_cards(cards)
    }

    /// Load a dataset from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read card dataset: {:?}", path.as_ref()))?;
        let cards: Vec<Card> =
            serde_json::from_str(&content).context("Failed to parse card dataset JSON")?;
        Catalog::from_cards(cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_card(id: &str, name: &str) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            issuer: "Test Issuer".to_string(),
            card_type: CardType::Debit,
            network: Network::Visa,
            cashback_max: Some(2.0),
            annual_fee: "$0".to_string(),
            fx_fee: "0%".to_string(),
            perks: vec!["Test perk".to_string()],
            signup_bonus: "None".to_string(),
            custody: Custody::Custodial,
            regions: "Global".to_string(),
            kyc: KycLevel::Required,
            supported_currencies: vec!["USD".to_string()],
            rank: None,
            staking_required: "None".to_string(),
            atm_limit: "$200/mo".to_string(),
            mobile_pay: true,
            supported_assets: "BTC, ETH".to_string(),
            official_link: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_builtin_dataset_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        // Every id resolves back to its card
        for card in catalog.cards() {
            assert_eq!(catalog.get(&card.id).map(|c| c.name.as_str()), Some(card.name.as_str()));
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let cards = vec![test_card("dup", "First"), test_card("dup", "Second")];
        assert!(Catalog::from_cards(cards).is_err());
    }

    #[test]
    fn test_enum_labels_round_trip() {
        let json = serde_json::to_string(&Network::VisaOrMastercard).unwrap();
        assert_eq!(json, "\"Visa/Mastercard\"");
        let back: Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Network::VisaOrMastercard);

        assert_eq!(Custody::SelfCustody.as_str(), "Self-Custody");
        assert_eq!(KycLevel::Light.as_str(), "Light");
    }

    #[test]
    fn test_optional_fields_absent_in_dataset() {
        let catalog = Catalog::builtin().unwrap();
        // The roster carries both ranked and unranked cards, and at least
        // one card without a published cashback figure
        assert!(catalog.cards().iter().any(|c| c.rank.is_some()));
        assert!(catalog.cards().iter().any(|c| c.rank.is_none()));
        assert!(catalog.cards().iter().any(|c| c.cashback_max.is_none()));
    }
}
