// 🛡️ Privacy Protocols - Entity model and dataset
// Decoupled from the card catalog; shares the selection and sort machinery

use crate::selection::Keyed;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_PROTOCOLS: &str = include_str!("../data/protocols.json");

// ============================================================================
// PROTOCOL ATTRIBUTES
// ============================================================================

/// Categorical privacy-strength rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnonymitySet {
    High,
    Medium,
    Low,
}

impl AnonymitySet {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnonymitySet::High => "High",
            AnonymitySet::Medium => "Medium",
            AnonymitySet::Low => "Low",
        }
    }

    /// Display/sort order: stronger anonymity first
    pub fn order(&self) -> u8 {
        match self {
            AnonymitySet::High => 0,
            AnonymitySet::Medium => 1,
            AnonymitySet::Low => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultPrivacy {
    Mandatory,
    #[serde(rename = "Opt-in")]
    OptIn,
}

impl DefaultPrivacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultPrivacy::Mandatory => "Mandatory",
            DefaultPrivacy::OptIn => "Opt-in",
        }
    }
}

// ============================================================================
// PROTOCOL ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Protocol {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub tagline: String,

    /// Headline technique, e.g. "zk-SNARKs", "Ring Signatures & RingCT"
    pub privacy_tech: String,
    pub privacy_tech_details: Vec<String>,

    pub anonymity_set: AnonymitySet,
    pub default_privacy: DefaultPrivacy,
    pub transaction_speed: String,
    pub average_fees: String,

    pub consensus: String,
    pub launch_year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
    pub website: String,

    pub key_features: Vec<String>,
    pub use_cases: Vec<String>,
}

impl Keyed for Protocol {
    fn key(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// PROTOCOL CATALOG
// ============================================================================

pub struct ProtocolCatalog {
    protocols: Vec<Protocol>,
}

impl ProtocolCatalog {
    pub fn from_protocols(protocols: Vec<Protocol>) -> Result<Self> {
        let mut seen = HashSet::new();
        for protocol in &protocols {
            if !seen.insert(protocol.id.as_str()) {
                bail!("duplicate protocol id in dataset: {}", protocol.id);
            }
        }
        Ok(ProtocolCatalog { protocols })
    }

    pub fn builtin() -> Result<Self> {
        let protocols: Vec<Protocol> = serde_json::from_str(BUILTIN_PROTOCOLS)
            .context("Failed to parse embedded protocol dataset")?;
        ProtocolCatalog::from_protocols(protocols)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read protocol dataset: {:?}", path.as_ref()))?;
        let protocols: Vec<Protocol> =
            serde_json::from_str(&content).context("Failed to parse protocol dataset JSON")?;
        ProtocolCatalog::from_protocols(protocols)
    }

    pub fn protocols(&self) -> &[Protocol] {
        &self.protocols
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Protocol> {
        self.protocols.iter().find(|p| p.id == id)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_protocol(id: &str, name: &str) -> Protocol {
        Protocol {
            id: id.to_string(),
            name: name.to_string(),
            ticker: "TST".to_string(),
            tagline: "Test protocol".to_string(),
            privacy_tech: "zk-SNARKs".to_string(),
            privacy_tech_details: vec!["Detail one".to_string(), "Detail two".to_string()],
            anonymity_set: AnonymitySet::Medium,
            default_privacy: DefaultPrivacy::OptIn,
            transaction_speed: "~10 seconds".to_string(),
            average_fees: "< $0.05".to_string(),
            consensus: "Proof of Stake".to_string(),
            launch_year: 2020,
            market_cap: None,
            website: "https://example.com".to_string(),
            key_features: vec!["Feature one".to_string()],
            use_cases: vec!["Use case one".to_string()],
        }
    }

    #[test]
    fn test_builtin_dataset_parses() {
        let catalog = ProtocolCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("monero").is_some());
    }

    #[test]
    fn test_opt_in_label_round_trip() {
        let json = serde_json::to_string(&DefaultPrivacy::OptIn).unwrap();
        assert_eq!(json, "\"Opt-in\"");
        let back: DefaultPrivacy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DefaultPrivacy::OptIn);
    }

    #[test]
    fn test_anonymity_order() {
        assert!(AnonymitySet::High.order() < AnonymitySet::Medium.order());
        assert!(AnonymitySet::Medium.order() < AnonymitySet::Low.order());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let protocols = vec![test_protocol("dup", "A"), test_protocol("dup", "B")];
        assert!(ProtocolCatalog::from_protocols(protocols).is_err());
    }
}
