// 🧭 Recommendation Wizard - Three questions, one filtered result list
// Linear state machine: Region → Currency → Privacy → Result. The result
// step runs the same region/currency/KYC predicates as the filter bar.

use crate::catalog::Card;
use crate::filters::CardFilter;
use crate::regions::RegionMap;
use serde::{Deserialize, Serialize};

/// Privacy answer that disables the KYC constraint.
pub const KYC_ANY: &str = "Any";

/// Countries offered on the region step, in display order.
pub const WIZARD_COUNTRIES: [&str; 20] = [
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "India",
    "Nigeria",
    "Brazil",
    "Germany",
    "France",
    "Japan",
    "South Korea",
    "Vietnam",
    "Indonesia",
    "Turkey",
    "Mexico",
    "Argentina",
    "South Africa",
    "UAE",
    "Singapore",
    "Philippines",
];

/// Currencies offered on the currency step.
pub const WIZARD_CURRENCIES: [&str; 8] = ["USD", "EUR", "GBP", "INR", "BRL", "NGN", "JPY", "KRW"];

/// Privacy preferences offered on the KYC step.
pub const WIZARD_KYC_CHOICES: [&str; 3] = ["Required", "Light", KYC_ANY];

// ============================================================================
// STEPS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Region,
    Currency,
    Privacy,
    Result,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Region => "Where do you live?",
            WizardStep::Currency => "Primary currency?",
            WizardStep::Privacy => "Privacy preference?",
            WizardStep::Result => "Matches",
        }
    }
}

// ============================================================================
// ANSWERS
// ============================================================================

/// Accumulated answers; empty strings until the matching step is answered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardAnswers {
    pub region: String,
    pub currency: String,
    pub kyc: String,
}

impl WizardAnswers {
    /// The equivalent filter-bar state: region and currency carry over
    /// directly, "Any" relaxes the KYC constraint entirely.
    pub fn to_filter(&self) -> CardFilter {
        CardFilter {
            region: self.region.clone(),
            currency: self.currency.clone(),
            kyc: if self.kyc == KYC_ANY {
                String::new()
            } else {
                self.kyc.clone()
            },
            ..CardFilter::default()
        }
    }
}

// ============================================================================
// WIZARD
// ============================================================================

/// The wizard flow. Created fresh each time the user opens it; `restart`
/// drops every answer and returns to the first question.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    answers: WizardAnswers,
    results: Vec<String>,
}

impl Wizard {
    pub fn new() -> Self {
        Wizard {
            step: WizardStep::Region,
            answers: WizardAnswers::default(),
            results: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &WizardAnswers {
        &self.answers
    }

    /// Matching card ids, populated once the Result step is reached.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Record the answer for the current step and advance. On the last
    /// question this computes the result list; answering while already on
    /// Result is ignored.
    pub fn answer(&mut self, value: &str, cards: &[Card], regions: &RegionMap) {
        match self.step {
            WizardStep::Region => {
                self.answers = WizardAnswers {
                    region: value.to_string(),
                    ..self.answers.clone()
                };
                self.step = WizardStep::Currency;
            }
            WizardStep::Currency => {
                self.answers = WizardAnswers {
                    currency: value.to_string(),
                    ..self.answers.clone()
                };
                self.step = WizardStep::Privacy;
            }
            WizardStep::Privacy => {
                self.answers = WizardAnswers {
                    kyc: value.to_string(),
                    ..self.answers.clone()
                };
                self.results = self.compute_results(cards, regions);
                self.step = WizardStep::Result;
            }
            WizardStep::Result => {}
        }
    }

    fn compute_results(&self, cards: &[Card], regions: &RegionMap) -> Vec<String> {
        let filter = self.answers.to_filter();
        cards
            .iter()
            .filter(|card| filter.matches(card, regions))
            .map(|card| card.id.clone())
            .collect()
    }

    /// Back to the first question with a cleared record.
    pub fn restart(&mut self) {
        *self = Wizard::new();
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Card, CardType, Custody, KycLevel, Network};

    fn card(id: &str, regions: &str, currencies: &[&str], kyc: KycLevel) -> Card {
        Card {
            id: id.to_string(),
            name: id.to_string(),
            issuer: "Issuer".to_string(),
            card_type: CardType::Prepaid,
            network: Network::Visa,
            cashback_max: Some(1.0),
            annual_fee: "$0".to_string(),
            fx_fee: "1%".to_string(),
            perks: Vec::new(),
            signup_bonus: "None".to_string(),
            custody: Custody::Custodial,
            regions: regions.to_string(),
            kyc,
            supported_currencies: currencies.iter().map(|c| c.to_string()).collect(),
            rank: None,
            staking_required: "None".to_string(),
            atm_limit: "-".to_string(),
            mobile_pay: false,
            supported_assets: "-".to_string(),
            official_link: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_linear_step_progression() {
        let regions = RegionMap::new();
        let cards = vec![card("a", "Global", &["Global"], KycLevel::Required)];

        let mut wizard = Wizard::new();
        assert_eq!(wizard.step(), WizardStep::Region);

        wizard.answer("India", &cards, &regions);
        assert_eq!(wizard.step(), WizardStep::Currency);

        wizard.answer("INR", &cards, &regions);
        assert_eq!(wizard.step(), WizardStep::Privacy);

        wizard.answer(KYC_ANY, &cards, &regions);
        assert_eq!(wizard.step(), WizardStep::Result);
        assert_eq!(wizard.answers().region, "India");
        assert_eq!(wizard.answers().currency, "INR");
    }

    #[test]
    fn test_nigeria_usd_any_matches_africa_global_card() {
        let regions = RegionMap::new();
        let cards = vec![card(
            "africa-card",
            "Africa",
            &["Global"],
            KycLevel::Required,
        )];

        let mut wizard = Wizard::new();
        wizard.answer("Nigeria", &cards, &regions);
        wizard.answer("USD", &cards, &regions);
        wizard.answer(KYC_ANY, &cards, &regions);

        assert_eq!(wizard.results(), &["africa-card"]);
    }

    #[test]
    fn test_kyc_answer_constrains_results() {
        let regions = RegionMap::new();
        let cards = vec![
            card("strict", "Global", &["Global"], KycLevel::Required),
            card("light", "Global", &["Global"], KycLevel::Light),
        ];

        let mut wizard = Wizard::new();
        wizard.answer("Germany", &cards, &regions);
        wizard.answer("EUR", &cards, &regions);
        wizard.answer("Light", &cards, &regions);

        assert_eq!(wizard.results(), &["light"]);
    }

    #[test]
    fn test_currency_without_support_excludes() {
        let regions = RegionMap::new();
        let cards = vec![card("usd-only", "Global", &["USD"], KycLevel::Required)];

        let mut wizard = Wizard::new();
        wizard.answer("India", &cards, &regions);
        wizard.answer("INR", &cards, &regions);
        wizard.answer(KYC_ANY, &cards, &regions);

        assert!(wizard.results().is_empty());
    }

    #[test]
    fn test_restart_clears_everything() {
        let regions = RegionMap::new();
        let cards = vec![card("a", "Global", &["Global"], KycLevel::Required)];

        let mut wizard = Wizard::new();
        wizard.answer("India", &cards, &regions);
        wizard.answer("INR", &cards, &regions);
        wizard.answer(KYC_ANY, &cards, &regions);
        assert!(!wizard.results().is_empty());

        wizard.restart();
        assert_eq!(wizard.step(), WizardStep::Region);
        assert_eq!(wizard.answers(), &WizardAnswers::default());
        assert!(wizard.results().is_empty());
    }

    #[test]
    fn test_answer_on_result_step_is_ignored() {
        let regions = RegionMap::new();
        let cards = vec![card("a", "Global", &["Global"], KycLevel::Required)];

        let mut wizard = Wizard::new();
        wizard.answer("India", &cards, &regions);
        wizard.answer("USD", &cards, &regions);
        wizard.answer(KYC_ANY, &cards, &regions);

        let before = wizard.answers().clone();
        wizard.answer("noise", &cards, &regions);
        assert_eq!(wizard.step(), WizardStep::Result);
        assert_eq!(wizard.answers(), &before);
    }
}
