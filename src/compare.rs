// 📋 Comparison Rows - Typed row descriptors for the comparison tables
// Every row is an enum variant with a label and a typed accessor, so the
// table layout is checked against the entity shape at compile time

use crate::catalog::Card;
use crate::protocols::Protocol;

// ============================================================================
// CARD ROWS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRow {
    Issuer,
    CardType,
    Network,
    CashbackMax,
    AnnualFee,
    FxFee,
    SignupBonus,
    Custody,
    StakingRequired,
    AtmLimit,
    MobilePay,
    SupportedAssets,
    Regions,
    Kyc,
    Currencies,
}

impl CardRow {
    pub const ALL: [CardRow; 15] = [
        CardRow::Issuer,
        CardRow::CardType,
        CardRow::Network,
        CardRow::CashbackMax,
        CardRow::AnnualFee,
        CardRow::FxFee,
        CardRow::SignupBonus,
        CardRow::Custody,
        CardRow::StakingRequired,
        CardRow::AtmLimit,
        CardRow::MobilePay,
        CardRow::SupportedAssets,
        CardRow::Regions,
        CardRow::Kyc,
        CardRow::Currencies,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardRow::Issuer => "Issuer",
            CardRow::CardType => "Card Type",
            CardRow::Network => "Network",
            CardRow::CashbackMax => "Max Cashback",
            CardRow::AnnualFee => "Annual Fee",
            CardRow::FxFee => "FX Fee",
            CardRow::SignupBonus => "Signup Bonus",
            CardRow::Custody => "Custody",
            CardRow::StakingRequired => "Staking Required",
            CardRow::AtmLimit => "ATM Limit",
            CardRow::MobilePay => "Mobile Pay",
            CardRow::SupportedAssets => "Supported Assets",
            CardRow::Regions => "Regions",
            CardRow::Kyc => "KYC",
            CardRow::Currencies => "Currencies",
        }
    }

    pub fn value(&self, card: &Card) -> String {
        match self {
            CardRow::Issuer => card.issuer.clone(),
            CardRow::CardType => card.card_type.as_str().to_string(),
            CardRow::Network => card.network.as_str().to_string(),
            CardRow::CashbackMax => match card.cashback_max {
                Some(value) => format!("{value}%"),
                None => "N/A".to_string(),
            },
            CardRow::AnnualFee => card.annual_fee.clone(),
            CardRow::FxFee => card.fx_fee.clone(),
            CardRow::SignupBonus => card.signup_bonus.clone(),
            CardRow::Custody => card.custody.as_str().to_string(),
            CardRow::StakingRequired => card.staking_required.clone(),
            CardRow::AtmLimit => card.atm_limit.clone(),
            CardRow::MobilePay => if card.mobile_pay { "Yes" } else { "No" }.to_string(),
            CardRow::SupportedAssets => card.supported_assets.clone(),
            CardRow::Regions => card.regions.clone(),
            CardRow::Kyc => card.kyc.as_str().to_string(),
            CardRow::Currencies => card.supported_currencies.join(", "),
        }
    }
}

// ============================================================================
// PROTOCOL ROWS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolRow {
    PrivacyTech,
    AnonymitySet,
    DefaultPrivacy,
    TransactionSpeed,
    AverageFees,
    Consensus,
    LaunchYear,
    MarketCap,
}

impl ProtocolRow {
    pub const ALL: [ProtocolRow; 8] = [
        ProtocolRow::PrivacyTech,
        ProtocolRow::AnonymitySet,
        ProtocolRow::DefaultPrivacy,
        ProtocolRow::TransactionSpeed,
        ProtocolRow::AverageFees,
        ProtocolRow::Consensus,
        ProtocolRow::LaunchYear,
        ProtocolRow::MarketCap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProtocolRow::PrivacyTech => "Privacy Technology",
            ProtocolRow::AnonymitySet => "Anonymity Set",
            ProtocolRow::DefaultPrivacy => "Default Privacy",
            ProtocolRow::TransactionSpeed => "Transaction Speed",
            ProtocolRow::AverageFees => "Average Fees",
            ProtocolRow::Consensus => "Consensus",
            ProtocolRow::LaunchYear => "Launch Year",
            ProtocolRow::MarketCap => "Market Cap",
        }
    }

    pub fn value(&self, protocol: &Protocol) -> String {
        match self {
            ProtocolRow::PrivacyTech => protocol.privacy_tech.clone(),
            ProtocolRow::AnonymitySet => protocol.anonymity_set.as_str().to_string(),
            ProtocolRow::DefaultPrivacy => protocol.default_privacy.as_str().to_string(),
            ProtocolRow::TransactionSpeed => protocol.transaction_speed.clone(),
            ProtocolRow::AverageFees => protocol.average_fees.clone(),
            ProtocolRow::Consensus => protocol.consensus.clone(),
            ProtocolRow::LaunchYear => protocol.launch_year.to_string(),
            ProtocolRow::MarketCap => protocol
                .market_cap
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::protocols::ProtocolCatalog;

    #[test]
    fn test_every_card_row_renders() {
        let catalog = Catalog::builtin().unwrap();
        for card in catalog.cards() {
            for row in CardRow::ALL {
                assert!(!row.label().is_empty());
                // Never panics, even for optional fields
                let _ = row.value(card);
            }
        }
    }

    #[test]
    fn test_missing_cashback_renders_na() {
        let catalog = Catalog::builtin().unwrap();
        let card = catalog.get("gnosis-pay").unwrap();
        assert_eq!(CardRow::CashbackMax.value(card), "N/A");
    }

    #[test]
    fn test_protocol_market_cap_fallback() {
        let catalog = ProtocolCatalog::builtin().unwrap();
        for protocol in catalog.protocols() {
            let rendered = ProtocolRow::MarketCap.value(protocol);
            assert!(!rendered.is_empty());
        }
    }
}
