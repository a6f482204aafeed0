// 🔎 Predicate Evaluator - Per-entity filter matching
// Each filter record is replaced wholesale on every edit; matching is a
// pure function of (entity, filter, region map) with AND across fields
// and OR within a facet

use crate::catalog::Card;
use crate::llm::{LlmCatalog, LlmModel};
use crate::protocols::Protocol;
use crate::regions::RegionMap;
use serde::{Deserialize, Serialize};

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

// ============================================================================
// CARD FILTER
// ============================================================================

/// Filter state for the card catalog. All-empty defaults admit every card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFilter {
    /// Free-text search over name, issuer, and perks
    pub search: String,

    /// Facets: empty = no constraint, otherwise membership (OR within)
    pub card_type: Vec<String>,
    pub network: Vec<String>,
    pub custody: Vec<String>,

    /// Minimum cashback percentage; 0 = no constraint
    pub min_cashback: f64,

    /// Single selections: empty string = no constraint
    pub region: String,
    pub kyc: String,
    pub currency: String,
}

impl Default for CardFilter {
    fn default() -> Self {
        CardFilter {
            search: String::new(),
            card_type: Vec::new(),
            network: Vec::new(),
            custody: Vec::new(),
            min_cashback: 0.0,
            region: String::new(),
            kyc: String::new(),
            currency: String::new(),
        }
    }
}

impl CardFilter {
    /// True when every dimension passes. Malformed or partial state never
    /// panics; it simply fails the card out of the result set.
    pub fn matches(&self, card: &Card, regions: &RegionMap) -> bool {
        self.matches_search(card)
            && self.matches_facets(card)
            && self.matches_cashback(card)
            && regions.matches(&card.regions, &self.region)
            && self.matches_kyc(card)
            && currency_supported(&card.supported_currencies, &self.currency)
    }

    fn matches_search(&self, card: &Card) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        contains_ignore_case(&card.name, &needle)
            || contains_ignore_case(&card.issuer, &needle)
            || card.perks.iter().any(|p| contains_ignore_case(p, &needle))
    }

    fn matches_facets(&self, card: &Card) -> bool {
        let type_ok = self.card_type.is_empty()
            || self.card_type.iter().any(|t| t == card.card_type.as_str());
        let network_ok = self.network.is_empty()
            || self.network.iter().any(|n| n == card.network.as_str());
        let custody_ok = self.custody.is_empty()
            || self.custody.iter().any(|c| c == card.custody.as_str());
        type_ok && network_ok && custody_ok
    }

    /// A card without a published cashback figure passes only the
    /// no-constraint threshold: unknown means ineligible for any positive
    /// requirement.
    fn matches_cashback(&self, card: &Card) -> bool {
        match card.cashback_max {
            Some(value) => value >= self.min_cashback,
            None => self.min_cashback == 0.0,
        }
    }

    fn matches_kyc(&self, card: &Card) -> bool {
        self.kyc.is_empty() || card.kyc.as_str() == self.kyc
    }

    /// Toggle a value in one of the card facets (membership flip).
    pub fn toggle_facet(&mut self, facet: CardFacet, value: &str) {
        let values = match facet {
            CardFacet::CardType => &mut self.card_type,
            CardFacet::Network => &mut self.network,
            CardFacet::Custody => &mut self.custody,
        };
        if let Some(pos) = values.iter().position(|v| v == value) {
            values.remove(pos);
        } else {
            values.push(value.to_string());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFacet {
    CardType,
    Network,
    Custody,
}

/// Currency rule shared by the filter bar and the wizard: an empty request
/// passes, otherwise the supported list must carry the requested code or
/// the "Global" sentinel.
pub fn currency_supported(supported: &[String], requested: &str) -> bool {
    requested.is_empty()
        || supported.iter().any(|c| c == requested || c == "Global")
}

// ============================================================================
// PROTOCOL FILTER
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtocolFilter {
    /// Free-text search over name, ticker, privacy tech, and tagline
    pub search: String,

    pub privacy_tech: Vec<String>,
    pub anonymity_set: Vec<String>,
    pub default_privacy: Vec<String>,
}

impl ProtocolFilter {
    pub fn matches(&self, protocol: &Protocol) -> bool {
        self.matches_search(protocol)
            && (self.privacy_tech.is_empty()
                || self.privacy_tech.iter().any(|t| t == &protocol.privacy_tech))
            && (self.anonymity_set.is_empty()
                || self
                    .anonymity_set
                    .iter()
                    .any(|a| a == protocol.anonymity_set.as_str()))
            && (self.default_privacy.is_empty()
                || self
                    .default_privacy
                    .iter()
                    .any(|d| d == protocol.default_privacy.as_str()))
    }

    fn matches_search(&self, protocol: &Protocol) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        contains_ignore_case(&protocol.name, &needle)
            || contains_ignore_case(&protocol.ticker, &needle)
            || contains_ignore_case(&protocol.privacy_tech, &needle)
            || contains_ignore_case(&protocol.tagline, &needle)
    }

    pub fn toggle_facet(&mut self, facet: ProtocolFacet, value: &str) {
        let values = match facet {
            ProtocolFacet::PrivacyTech => &mut self.privacy_tech,
            ProtocolFacet::AnonymitySet => &mut self.anonymity_set,
            ProtocolFacet::DefaultPrivacy => &mut self.default_privacy,
        };
        if let Some(pos) = values.iter().position(|v| v == value) {
            values.remove(pos);
        } else {
            values.push(value.to_string());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolFacet {
    PrivacyTech,
    AnonymitySet,
    DefaultPrivacy,
}

// ============================================================================
// LLM FILTER
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmFilter {
    pub search: String,

    /// Id of the selected user need, if any
    pub selected_need: Option<String>,
}

impl LlmFilter {
    pub fn matches(&self, model: &LlmModel, catalog: &LlmCatalog) -> bool {
        self.matches_search(model) && self.matches_need(model, catalog)
    }

    fn matches_search(&self, model: &LlmModel) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        contains_ignore_case(&model.name, &needle)
            || contains_ignore_case(&model.provider, &needle)
            || contains_ignore_case(&model.primary_strength, &needle)
            || contains_ignore_case(&model.tagline, &needle)
            || model
                .special_features
                .iter()
                .any(|f| contains_ignore_case(f, &needle))
    }

    fn matches_need(&self, model: &LlmModel, catalog: &LlmCatalog) -> bool {
        match &self.selected_need {
            None => true,
            Some(need_id) => match catalog.need(need_id) {
                Some(need) => need.matches(model),
                // Unknown need id excludes everything rather than erroring
                None => false,
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
