// 🤖 LLM Ecosystem - Assistant model, user needs, need-based matching
// A smaller variant of the card catalog: search plus a single "what do
// you need it for" dimension instead of a full facet bar

use crate::selection::Keyed;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_LLMS: &str = include_str!("../data/llms.json");

// ============================================================================
// LLM ENTITY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingModel {
    Free,
    Freemium,
    Subscription,
    #[serde(rename = "API Only")]
    ApiOnly,
}

impl PricingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingModel::Free => "Free",
            PricingModel::Freemium => "Freemium",
            PricingModel::Subscription => "Subscription",
            PricingModel::ApiOnly => "API Only",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmModel {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub provider: String,

    /// Headline capability, matched against user needs
    pub primary_strength: String,
    pub secondary_strengths: Vec<String>,

    pub pricing_model: PricingModel,
    pub pricing_details: String,
    pub context_window: String,
    pub api_available: bool,
    pub special_features: Vec<String>,
    pub best_for: Vec<String>,
    pub official_link: String,
}

impl Keyed for LlmModel {
    fn key(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// USER NEEDS
// ============================================================================

/// One answer in the "what do you need it for" smart filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserNeed {
    pub id: String,
    pub label: String,

    /// Strength labels that satisfy this need
    pub match_strengths: Vec<String>,

    pub description: String,
}

impl UserNeed {
    /// A model satisfies a need when its primary strength equals, or its
    /// secondary strengths contain, any of the need's match strengths.
    pub fn matches(&self, model: &LlmModel) -> bool {
        self.match_strengths.iter().any(|strength| {
            model.primary_strength == *strength
                || model.secondary_strengths.contains(strength)
        })
    }
}

// ============================================================================
// LLM CATALOG
// ============================================================================

#[derive(Deserialize)]
struct LlmDataset {
    models: Vec<LlmModel>,
    needs: Vec<UserNeed>,
}

pub struct LlmCatalog {
    models: Vec<LlmModel>,
    needs: Vec<UserNeed>,
}

impl LlmCatalog {
    pub fn from_parts(models: Vec<LlmModel>, needs: Vec<UserNeed>) -> Result<Self> {
        let mut seen = HashSet::new();
        for model in &models {
            if !seen.insert(model.id.as_str()) {
                bail!("duplicate model id in dataset: {}", model.id);
            }
        }
        Ok(LlmCatalog { models, needs })
    }

    pub fn builtin() -> Result<Self> {
        let dataset: LlmDataset =
            serde_json::from_str(BUILTIN_LLMS).context("Failed to parse embedded LLM dataset")?;
        LlmCatalog::from_parts(dataset.models, dataset.needs)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read LLM dataset: {:?}", path.as_ref()))?;
        let dataset: LlmDataset =
            serde_json::from_str(&content).context("Failed to parse LLM dataset JSON")?;
        LlmCatalog::from_parts(dataset.models, dataset.needs)
    }

    pub fn models(&self) -> &[LlmModel] {
        &self.models
    }

    pub fn needs(&self) -> &[UserNeed] {
        &self.needs
    }

    pub fn get(&self, id: &str) -> Option<&LlmModel> {
        self.models.iter().find(|m| m.id == id)
    }

    pub fn need(&self, id: &str) -> Option<&UserNeed> {
        self.needs.iter().find(|n| n.id == id)
    }

    /// Ids of all models satisfying a need, in catalog order.
    pub fn matched_ids(&self, need_id: &str) -> Vec<&str> {
        let Some(need) = self.need(need_id) else {
            return Vec::new();
        };
        self.models
            .iter()
            .filter(|m| need.matches(m))
            .map(|m| m.id.as_str())
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_parses() {
        let catalog = LlmCatalog::builtin().unwrap();
        assert!(!catalog.models().is_empty());
        assert!(!catalog.needs().is_empty());
    }

    #[test]
    fn test_need_matches_primary_strength() {
        let catalog = LlmCatalog::builtin().unwrap();
        let matched = catalog.matched_ids("coding");
        assert!(matched.contains(&"claude"));
    }

    #[test]
    fn test_need_matches_secondary_strength() {
        let catalog = LlmCatalog::builtin().unwrap();
        // "long-docs" matches Claude via its secondary "Long Context"
        // as well as Kimi via its primary strength
        let matched = catalog.matched_ids("long-docs");
        assert!(matched.contains(&"kimi"));
        assert!(matched.contains(&"claude"));
    }

    #[test]
    fn test_unknown_need_matches_nothing() {
        let catalog = LlmCatalog::builtin().unwrap();
        assert!(catalog.matched_ids("time-travel").is_empty());
    }
}
