// Cardscope - Core Library
// Exposes all modules for use in the terminal browser and tests

pub mod catalog;
pub mod compare;
pub mod filters;
pub mod llm;
pub mod protocols;
pub mod regions;
pub mod score;
pub mod selection;
pub mod session;
pub mod sort;
pub mod wizard;

// UI module only compiles when the TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use catalog::{Card, CardType, Catalog, Custody, KycLevel, Network};
pub use compare::{CardRow, ProtocolRow};
pub use filters::{
    currency_supported, CardFacet, CardFilter, LlmFilter, ProtocolFacet, ProtocolFilter,
};
pub use llm::{LlmCatalog, LlmModel, PricingModel, UserNeed};
pub use protocols::{AnonymitySet, DefaultPrivacy, Protocol, ProtocolCatalog};
pub use regions::{RegionMap, GLOBAL_REGION};
pub use score::{pick_best, score};
pub use selection::{
    Keyed, SelectionSet, ToggleOutcome, MAX_COMPARE_CARDS, MAX_COMPARE_LLMS,
    MAX_COMPARE_PROTOCOLS,
};
pub use session::{CatalogPage, Session, View};
pub use sort::{sort_cards, sort_protocols, CardSort, ProtocolSort, UNRANKED};
pub use wizard::{Wizard, WizardAnswers, WizardStep};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
