// 🏆 Best-Pick Scorer - Weighted protocol scoring for the comparison view
// Deterministic: ties go to the first entity in input order

use crate::protocols::{AnonymitySet, DefaultPrivacy, Protocol};

// Score weights. Fee tiers are string-substring checks evaluated in
// priority order: first match wins, not cumulative.
const ANONYMITY_HIGH: u32 = 30;
const ANONYMITY_MEDIUM: u32 = 15;
const ANONYMITY_OTHER: u32 = 5;

const PRIVACY_MANDATORY: u32 = 25;
const PRIVACY_OPT_IN: u32 = 10;

const FEES_SUB_CENT: u32 = 20;
const FEES_SUB_NICKEL: u32 = 15;
const FEES_OTHER: u32 = 5;

const PER_LIST_ITEM: u32 = 2;

/// Weighted score of one protocol.
pub fn score(protocol: &Protocol) -> u32 {
    let mut total = match protocol.anonymity_set {
        AnonymitySet::High => ANONYMITY_HIGH,
        AnonymitySet::Medium => ANONYMITY_MEDIUM,
        AnonymitySet::Low => ANONYMITY_OTHER,
    };

    total += match protocol.default_privacy {
        DefaultPrivacy::Mandatory => PRIVACY_MANDATORY,
        DefaultPrivacy::OptIn => PRIVACY_OPT_IN,
    };

    total += if protocol.average_fees.contains("< $0.01") {
        FEES_SUB_CENT
    } else if protocol.average_fees.contains("< $0.05") {
        FEES_SUB_NICKEL
    } else {
        FEES_OTHER
    };

    total += PER_LIST_ITEM * protocol.key_features.len() as u32;
    total += PER_LIST_ITEM * protocol.privacy_tech_details.len() as u32;

    total
}

/// Id of the highest-scoring protocol in the comparison subset.
///
/// Strict-greater fold from the left, so the first protocol achieving the
/// maximum score wins ties. Empty subset yields `None`.
pub fn pick_best<'a>(subset: &[&'a Protocol]) -> Option<&'a str> {
    let mut best: Option<(&'a Protocol, u32)> = None;

    for protocol in subset {
        let candidate = score(protocol);
        match best {
            Some((_, best_score)) if candidate > best_score => {
                best = Some((protocol, candidate));
            }
            None => best = Some((protocol, candidate)),
            _ => {}
        }
    }

    best.map(|(protocol, _)| protocol.id.as_str())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn protocol(
        id: &str,
        anonymity: AnonymitySet,
        privacy: DefaultPrivacy,
        fees: &str,
        features: usize,
        details: usize,
    ) -> Protocol {
        Protocol {
            id: id.to_string(),
            name: id.to_string(),
            ticker: "TST".to_string(),
            tagline: String::new(),
            privacy_tech: "zk-SNARKs".to_string(),
            privacy_tech_details: (0..details).map(|i| format!("detail {i}")).collect(),
            anonymity_set: anonymity,
            default_privacy: privacy,
            transaction_speed: String::new(),
            average_fees: fees.to_string(),
            consensus: String::new(),
            launch_year: 2020,
            market_cap: None,
            website: String::new(),
            key_features: (0..features).map(|i| format!("feature {i}")).collect(),
            use_cases: Vec::new(),
        }
    }

    #[test]
    fn test_score_components() {
        // High + Mandatory + sub-cent fees + 3 features + 2 details
        let p = protocol(
            "a",
            AnonymitySet::High,
            DefaultPrivacy::Mandatory,
            "< $0.01",
            3,
            2,
        );
        assert_eq!(score(&p), 30 + 25 + 20 + 6 + 4);
    }

    #[test]
    fn test_fee_tiers_first_match_wins() {
        let sub_cent = protocol("a", AnonymitySet::Low, DefaultPrivacy::OptIn, "< $0.01", 0, 0);
        let sub_nickel = protocol("b", AnonymitySet::Low, DefaultPrivacy::OptIn, "< $0.05", 0, 0);
        let variable = protocol("c", AnonymitySet::Low, DefaultPrivacy::OptIn, "Variable", 0, 0);

        assert_eq!(score(&sub_cent) - score(&variable), 15);
        assert_eq!(score(&sub_nickel) - score(&variable), 10);
    }

    #[test]
    fn test_pick_best_is_deterministic() {
        let strong = protocol("strong", AnonymitySet::High, DefaultPrivacy::Mandatory, "< $0.01", 4, 4);
        let weak = protocol("weak", AnonymitySet::Low, DefaultPrivacy::OptIn, "Variable", 0, 0);
        let subset = vec![&weak, &strong];

        for _ in 0..3 {
            assert_eq!(pick_best(&subset), Some("strong"));
        }
    }

    #[test]
    fn test_pick_best_tie_goes_to_first() {
        let first = protocol("first", AnonymitySet::High, DefaultPrivacy::Mandatory, "< $0.01", 2, 2);
        let twin = protocol("twin", AnonymitySet::High, DefaultPrivacy::Mandatory, "< $0.01", 2, 2);
        let subset = vec![&first, &twin];

        assert_eq!(score(&first), score(&twin));
        assert_eq!(pick_best(&subset), Some("first"));
    }

    #[test]
    fn test_pick_best_empty_subset() {
        assert_eq!(pick_best(&[]), None);
    }
}
