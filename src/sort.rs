// 📊 Sort Composer - Ordering strategies over the filtered list
// All comparators are total (missing fields use sentinels, never panic)
// and rely on the standard stable sort so ties keep their prior order

use crate::catalog::Card;
use crate::protocols::Protocol;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Rank assigned to cards without a paid listing rank: sorts after every
/// ranked card.
pub const UNRANKED: u32 = 999;

// ============================================================================
// CARD SORT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardSort {
    /// Ascending by listing rank; unranked cards keep catalog order at the end
    Featured,

    /// Descending by best-case cashback; cards without a figure sort last
    CashbackHigh,

    /// Ascending by name, case-insensitive
    NameAz,

    /// Pass-through: there is no timestamp field to sort by, so this
    /// strategy deliberately leaves the filtered order untouched
    Newest,
}

impl CardSort {
    pub const ALL: [CardSort; 4] = [
        CardSort::Featured,
        CardSort::CashbackHigh,
        CardSort::NameAz,
        CardSort::Newest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardSort::Featured => "Featured",
            CardSort::CashbackHigh => "Highest Cashback",
            CardSort::NameAz => "Name A-Z",
            CardSort::Newest => "Newest",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            CardSort::Featured => CardSort::CashbackHigh,
            CardSort::CashbackHigh => CardSort::NameAz,
            CardSort::NameAz => CardSort::Newest,
            CardSort::Newest => CardSort::Featured,
        }
    }

    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        match self {
            CardSort::Featured => {
                let rank_a = a.rank.unwrap_or(UNRANKED);
                let rank_b = b.rank.unwrap_or(UNRANKED);
                rank_a.cmp(&rank_b)
            }
            CardSort::CashbackHigh => {
                let value_a = a.cashback_max.unwrap_or(0.0);
                let value_b = b.cashback_max.unwrap_or(0.0);
                value_b.total_cmp(&value_a)
            }
            CardSort::NameAz => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            CardSort::Newest => Ordering::Equal,
        }
    }
}

impl Default for CardSort {
    fn default() -> Self {
        CardSort::Featured
    }
}

/// Stable in-place sort of a filtered view.
pub fn sort_cards(cards: &mut [&Card], strategy: CardSort) {
    cards.sort_by(|a, b| strategy.compare(a, b));
}

// ============================================================================
// PROTOCOL SORT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolSort {
    /// Pass-through: keeps dataset order
    Featured,

    NameAz,

    /// Descending by launch year (most recent first)
    LaunchYear,

    /// High anonymity before Medium before Low
    AnonymityHigh,
}

impl ProtocolSort {
    pub const ALL: [ProtocolSort; 4] = [
        ProtocolSort::Featured,
        ProtocolSort::NameAz,
        ProtocolSort::LaunchYear,
        ProtocolSort::AnonymityHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProtocolSort::Featured => "Featured",
            ProtocolSort::NameAz => "Name A-Z",
            ProtocolSort::LaunchYear => "Launch Year",
            ProtocolSort::AnonymityHigh => "Anonymity",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ProtocolSort::Featured => ProtocolSort::NameAz,
            ProtocolSort::NameAz => ProtocolSort::LaunchYear,
            ProtocolSort::LaunchYear => ProtocolSort::AnonymityHigh,
            ProtocolSort::AnonymityHigh => ProtocolSort::Featured,
        }
    }

    pub fn compare(&self, a: &Protocol, b: &Protocol) -> Ordering {
        match self {
            ProtocolSort::Featured => Ordering::Equal,
            ProtocolSort::NameAz => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            ProtocolSort::LaunchYear => b.launch_year.cmp(&a.launch_year),
            ProtocolSort::AnonymityHigh => a.anonymity_set.order().cmp(&b.anonymity_set.order()),
        }
    }
}

impl Default for ProtocolSort {
    fn default() -> Self {
        ProtocolSort::Featured
    }
}

pub fn sort_protocols(protocols: &mut [&Protocol], strategy: ProtocolSort) {
    protocols.sort_by(|a, b| strategy.compare(a, b));
}

// ============================================================================
// TESTS
// ============================================================================
