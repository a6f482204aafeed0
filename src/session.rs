// 🗂️ Session State - One value per UI session, replaced per user intent
// Every user action funnels through an intent method that swaps in a new
// state record wholesale; derived lists are recomputed on demand, so no
// cache has to be invalidated for correctness

use crate::catalog::{Card, Catalog};
use crate::filters::{CardFacet, CardFilter, LlmFilter, ProtocolFacet, ProtocolFilter};
use crate::llm::{LlmCatalog, LlmModel, UserNeed};
use crate::protocols::{Protocol, ProtocolCatalog};
use crate::regions::RegionMap;
use crate::score;
use crate::selection::{
    SelectionSet, ToggleOutcome, MAX_COMPARE_CARDS, MAX_COMPARE_LLMS, MAX_COMPARE_PROTOCOLS,
};
use crate::sort::{sort_cards, sort_protocols, CardSort, ProtocolSort};
use crate::wizard::Wizard;
use anyhow::Result;

// ============================================================================
// PAGES AND VIEWS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPage {
    Cards,
    Privacy,
    Llms,
}

impl CatalogPage {
    pub fn next(&self) -> Self {
        match self {
            CatalogPage::Cards => CatalogPage::Privacy,
            CatalogPage::Privacy => CatalogPage::Llms,
            CatalogPage::Llms => CatalogPage::Cards,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CatalogPage::Cards => "Crypto Cards",
            CatalogPage::Privacy => "Privacy Protocols",
            CatalogPage::Llms => "LLM Assistants",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Discover,
    Compare,
}

// ============================================================================
// SESSION
// ============================================================================

/// All mutable state for one browsing session, plus the immutable
/// datasets it operates over. Nothing here survives a process restart.
pub struct Session {
    catalog: Catalog,
    protocols: ProtocolCatalog,
    llms: LlmCatalog,
    regions: RegionMap,

    card_filter: CardFilter,
    card_sort: CardSort,
    card_selection: SelectionSet,

    protocol_filter: ProtocolFilter,
    protocol_sort: ProtocolSort,
    protocol_selection: SelectionSet,

    llm_filter: LlmFilter,
    llm_selection: SelectionSet,

    page: CatalogPage,
    view: View,

    /// Present while the wizard overlay is open
    wizard: Option<Wizard>,
}

impl Session {
    pub fn new(catalog: Catalog, protocols: ProtocolCatalog, llms: LlmCatalog) -> Self {
        Session {
            catalog,
            protocols,
            llms,
            regions: RegionMap::new(),
            card_filter: CardFilter::default(),
            card_sort: CardSort::default(),
            card_selection: SelectionSet::new(MAX_COMPARE_CARDS),
            protocol_filter: ProtocolFilter::default(),
            protocol_sort: ProtocolSort::default(),
            protocol_selection: SelectionSet::new(MAX_COMPARE_PROTOCOLS),
            llm_filter: LlmFilter::default(),
            llm_selection: SelectionSet::new(MAX_COMPARE_LLMS),
            page: CatalogPage::Cards,
            view: View::Discover,
            wizard: None,
        }
    }

    /// Session over the datasets compiled into the binary.
    pub fn with_builtin_data() -> Result<Self> {
        Ok(Session::new(
            Catalog::builtin()?,
            ProtocolCatalog::builtin()?,
            LlmCatalog::builtin()?,
        ))
    }

    // ========================================================================
    // READ ACCESS
    // ========================================================================

    pub fn cards(&self) -> &[Card] {
        self.catalog.cards()
    }

    pub fn protocols(&self) -> &[Protocol] {
        self.protocols.protocols()
    }

    pub fn llms(&self) -> &[LlmModel] {
        self.llms.models()
    }

    pub fn needs(&self) -> &[UserNeed] {
        self.llms.needs()
    }

    pub fn card_filter(&self) -> &CardFilter {
        &self.card_filter
    }

    pub fn card_sort(&self) -> CardSort {
        self.card_sort
    }

    pub fn card_selection(&self) -> &SelectionSet {
        &self.card_selection
    }

    pub fn protocol_filter(&self) -> &ProtocolFilter {
        &self.protocol_filter
    }

    pub fn protocol_sort(&self) -> ProtocolSort {
        self.protocol_sort
    }

    pub fn protocol_selection(&self) -> &SelectionSet {
        &self.protocol_selection
    }

    pub fn llm_filter(&self) -> &LlmFilter {
        &self.llm_filter
    }

    pub fn llm_selection(&self) -> &SelectionSet {
        &self.llm_selection
    }

    pub fn page(&self) -> CatalogPage {
        self.page
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn wizard(&self) -> Option<&Wizard> {
        self.wizard.as_ref()
    }

    // ========================================================================
    // DERIVED VIEWS (recomputed per call)
    // ========================================================================

    /// Cards passing the current filter, ordered by the current strategy.
    pub fn filtered_cards(&self) -> Vec<&Card> {
        let mut view: Vec<&Card> = self
            .catalog
            .cards()
            .iter()
            .filter(|card| self.card_filter.matches(card, &self.regions))
            .collect();
        sort_cards(&mut view, self.card_sort);
        view
    }

    pub fn filtered_protocols(&self) -> Vec<&Protocol> {
        let mut view: Vec<&Protocol> = self
            .protocols
            .protocols()
            .iter()
            .filter(|protocol| self.protocol_filter.matches(protocol))
            .collect();
        sort_protocols(&mut view, self.protocol_sort);
        view
    }

    pub fn filtered_llms(&self) -> Vec<&LlmModel> {
        self.llms
            .models()
            .iter()
            .filter(|model| self.llm_filter.matches(model, &self.llms))
            .collect()
    }

    /// Comparison subset in selection order.
    pub fn selected_cards(&self) -> Vec<&Card> {
        self.card_selection.project(self.catalog.cards())
    }

    pub fn selected_protocols(&self) -> Vec<&Protocol> {
        self.protocol_selection.project(self.protocols.protocols())
    }

    pub fn selected_llms(&self) -> Vec<&LlmModel> {
        self.llm_selection.project(self.llms.models())
    }

    /// Highlighted protocol in the comparison view, if any are selected.
    pub fn best_pick(&self) -> Option<&str> {
        score::pick_best(&self.selected_protocols())
    }

    /// Wizard result ids resolved back to cards, in result order.
    pub fn wizard_results(&self) -> Vec<&Card> {
        match &self.wizard {
            Some(wizard) => wizard
                .results()
                .iter()
                .filter_map(|id| self.catalog.get(id))
                .collect(),
            None => Vec::new(),
        }
    }

    // ========================================================================
    // CARD INTENTS
    // ========================================================================

    pub fn set_card_search(&mut self, text: &str) {
        self.card_filter = CardFilter {
            search: text.to_string(),
            ..self.card_filter.clone()
        };
    }

    pub fn toggle_card_facet(&mut self, facet: CardFacet, value: &str) {
        let mut next = self.card_filter.clone();
        next.toggle_facet(facet, value);
        self.card_filter = next;
    }

    pub fn set_min_cashback(&mut self, min: f64) {
        self.card_filter = CardFilter {
            min_cashback: min,
            ..self.card_filter.clone()
        };
    }

    pub fn set_region(&mut self, region: &str) {
        self.card_filter = CardFilter {
            region: region.to_string(),
            ..self.card_filter.clone()
        };
    }

    pub fn set_currency(&mut self, currency: &str) {
        self.card_filter = CardFilter {
            currency: currency.to_string(),
            ..self.card_filter.clone()
        };
    }

    pub fn set_kyc(&mut self, kyc: &str) {
        self.card_filter = CardFilter {
            kyc: kyc.to_string(),
            ..self.card_filter.clone()
        };
    }

    pub fn clear_card_filters(&mut self) {
        self.card_filter = CardFilter::default();
    }

    pub fn set_card_sort(&mut self, sort: CardSort) {
        self.card_sort = sort;
    }

    pub fn toggle_card(&mut self, id: &str) -> ToggleOutcome {
        let outcome = self.card_selection.toggle(id);
        self.enforce_view_rule();
        outcome
    }

    // ========================================================================
    // PROTOCOL INTENTS
    // ========================================================================

    pub fn set_protocol_search(&mut self, text: &str) {
        self.protocol_filter = ProtocolFilter {
            search: text.to_string(),
            ..self.protocol_filter.clone()
        };
    }

    pub fn toggle_protocol_facet(&mut self, facet: ProtocolFacet, value: &str) {
        let mut next = self.protocol_filter.clone();
        next.toggle_facet(facet, value);
        self.protocol_filter = next;
    }

    pub fn clear_protocol_filters(&mut self) {
        self.protocol_filter = ProtocolFilter::default();
    }

    pub fn set_protocol_sort(&mut self, sort: ProtocolSort) {
        self.protocol_sort = sort;
    }

    pub fn toggle_protocol(&mut self, id: &str) -> ToggleOutcome {
        let outcome = self.protocol_selection.toggle(id);
        self.enforce_view_rule();
        outcome
    }

    // ========================================================================
    // LLM INTENTS
    // ========================================================================

    pub fn set_llm_search(&mut self, text: &str) {
        self.llm_filter = LlmFilter {
            search: text.to_string(),
            ..self.llm_filter.clone()
        };
    }

    pub fn select_need(&mut self, need_id: Option<&str>) {
        self.llm_filter = LlmFilter {
            selected_need: need_id.map(|n| n.to_string()),
            ..self.llm_filter.clone()
        };
    }

    pub fn toggle_llm(&mut self, id: &str) -> ToggleOutcome {
        let outcome = self.llm_selection.toggle(id);
        self.enforce_view_rule();
        outcome
    }

    // ========================================================================
    // NAVIGATION INTENTS
    // ========================================================================

    pub fn set_page(&mut self, page: CatalogPage) {
        self.page = page;
        self.enforce_view_rule();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.next());
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.enforce_view_rule();
    }

    /// Compare views with nothing to compare bounce back to discover.
    fn enforce_view_rule(&mut self) {
        if self.view != View::Compare {
            return;
        }
        let empty = match self.page {
            CatalogPage::Cards => self.card_selection.is_empty(),
            CatalogPage::Privacy => self.protocol_selection.is_empty(),
            CatalogPage::Llms => self.llm_selection.is_empty(),
        };
        if empty {
            self.view = View::Discover;
        }
    }

    // ========================================================================
    // WIZARD INTENTS
    // ========================================================================

    pub fn open_wizard(&mut self) {
        self.wizard = Some(Wizard::new());
    }

    pub fn close_wizard(&mut self) {
        self.wizard = None;
    }

    pub fn wizard_answer(&mut self, value: &str) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.answer(value, self.catalog.cards(), &self.regions);
        }
    }

    pub fn wizard_restart(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.restart();
        }
    }

    /// Pick a wizard result: add it to the card comparison (same overflow
    /// rule as direct selection) and close the wizard.
    pub fn wizard_pick(&mut self, id: &str) -> ToggleOutcome {
        let outcome = self.card_selection.toggle(id);
        self.wizard = None;
        self.enforce_view_rule();
        outcome
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CardType, Custody, KycLevel, Network};

    fn card(id: &str, name: &str, regions: &str, rank: Option<u32>, cashback: Option<f64>) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            issuer: "Issuer".to_string(),
            card_type: CardType::Debit,
            network: Network::Visa,
            cashback_max: cashback,
            annual_fee: "$0".to_string(),
            fx_fee: "0%".to_string(),
            perks: Vec::new(),
            signup_bonus: "None".to_string(),
            custody: Custody::Custodial,
            regions: regions.to_string(),
            kyc: KycLevel::Required,
            supported_currencies: vec!["Global".to_string()],
            rank,
            staking_required: "None".to_string(),
            atm_limit: "-".to_string(),
            mobile_pay: false,
            supported_assets: "-".to_string(),
            official_link: "https://example.com".to_string(),
        }
    }

    fn session_with_cards(cards: Vec<Card>) -> Session {
        Session::new(
            Catalog::from_cards(cards).unwrap(),
            ProtocolCatalog::builtin().unwrap(),
            LlmCatalog::builtin().unwrap(),
        )
    }

    fn builtin_session() -> Session {
        Session::with_builtin_data().unwrap()
    }

    #[test]
    fn test_default_state_admits_full_catalog() {
        let session = builtin_session();
        assert_eq!(session.filtered_cards().len(), session.cards().len());
        assert_eq!(session.filtered_protocols().len(), session.protocols().len());
        assert_eq!(session.filtered_llms().len(), session.llms().len());
    }

    #[test]
    fn test_region_and_featured_sort_scenario() {
        // One US card with rank 1, one Global-only card without a rank:
        // filtering by "United States" under Featured yields only the first
        let session = {
            let mut s = session_with_cards(vec![
                card("global-only", "Global Card", "Global only", None, Some(2.0)),
                card("us-card", "US Card", "United States, Global", Some(1), Some(2.0)),
            ]);
            s.set_region("United States");
            s.set_card_sort(CardSort::Featured);
            s
        };

        let view = session.filtered_cards();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "us-card");
    }

    #[test]
    fn test_missing_cashback_threshold_scenario() {
        let mut session = session_with_cards(vec![card(
            "no-figure",
            "No Figure",
            "Global",
            None,
            None,
        )]);

        session.set_min_cashback(0.0);
        assert_eq!(session.filtered_cards().len(), 1);

        session.set_min_cashback(1.0);
        assert!(session.filtered_cards().is_empty());
    }

    #[test]
    fn test_selection_overflow_scenario() {
        let cards: Vec<Card> = (0..8)
            .map(|i| card(&format!("c{i}"), &format!("Card {i}"), "Global", None, None))
            .collect();
        let mut session = session_with_cards(cards);

        for i in 0..6 {
            assert_eq!(session.toggle_card(&format!("c{i}")), ToggleOutcome::Added);
        }
        assert_eq!(session.toggle_card("c6"), ToggleOutcome::Rejected);
        assert_eq!(session.card_selection().len(), 6);

        // Removing one frees a slot for the rejected id
        assert_eq!(session.toggle_card("c0"), ToggleOutcome::Removed);
        assert_eq!(session.toggle_card("c6"), ToggleOutcome::Added);
        assert_eq!(session.card_selection().len(), 6);
    }

    #[test]
    fn test_compare_view_bounces_when_selection_empties() {
        let mut session = session_with_cards(vec![card("a", "A", "Global", None, None)]);

        session.toggle_card("a");
        session.set_view(View::Compare);
        assert_eq!(session.view(), View::Compare);

        session.toggle_card("a");
        assert!(session.card_selection().is_empty());
        assert_eq!(session.view(), View::Discover);
    }

    #[test]
    fn test_compare_view_rejected_when_nothing_selected() {
        let mut session = builtin_session();
        session.set_view(View::Compare);
        assert_eq!(session.view(), View::Discover);
    }

    #[test]
    fn test_clear_filters_restores_defaults() {
        let mut session = builtin_session();
        session.set_card_search("nexo");
        session.set_region("Germany");
        session.set_min_cashback(2.0);
        assert_ne!(session.card_filter(), &CardFilter::default());

        session.clear_card_filters();
        assert_eq!(session.card_filter(), &CardFilter::default());
        assert_eq!(session.filtered_cards().len(), session.cards().len());
    }

    #[test]
    fn test_selected_cards_keep_selection_order() {
        let mut session = builtin_session();
        session.toggle_card("nexo-card");
        session.toggle_card("coinbase-card");

        let ids: Vec<&str> = session.selected_cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["nexo-card", "coinbase-card"]);
    }

    #[test]
    fn test_best_pick_follows_comparison_subset() {
        let mut session = builtin_session();
        assert_eq!(session.best_pick(), None);

        // Dash (Medium/Opt-in) alone is the best of one
        session.toggle_protocol("dash");
        assert_eq!(session.best_pick(), Some("dash"));

        // Monero (High/Mandatory/sub-cent) outscores Dash
        session.toggle_protocol("monero");
        assert_eq!(session.best_pick(), Some("monero"));

        // Removing Monero hands the pick back
        session.toggle_protocol("monero");
        assert_eq!(session.best_pick(), Some("dash"));
    }

    #[test]
    fn test_wizard_end_to_end_scenario() {
        let mut session = session_with_cards(vec![card(
            "africa-card",
            "Africa Card",
            "Africa",
            None,
            Some(1.0),
        )]);

        session.open_wizard();
        session.wizard_answer("Nigeria");
        session.wizard_answer("USD");
        session.wizard_answer("Any");

        let results: Vec<&str> = session.wizard_results().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(results, vec!["africa-card"]);

        // Picking a result selects the card and closes the wizard
        let outcome = session.wizard_pick("africa-card");
        assert_eq!(outcome, ToggleOutcome::Added);
        assert!(session.wizard().is_none());
        assert!(session.card_selection().contains("africa-card"));
    }

    #[test]
    fn test_wizard_restart_clears_answers() {
        let mut session = builtin_session();
        session.open_wizard();
        session.wizard_answer("India");
        session.wizard_answer("INR");
        session.wizard_answer("Any");
        session.wizard_restart();

        let wizard = session.wizard().unwrap();
        assert_eq!(wizard.step(), crate::wizard::WizardStep::Region);
        assert!(wizard.results().is_empty());
    }

    #[test]
    fn test_llm_need_selection_narrows_list() {
        let mut session = builtin_session();
        let all = session.filtered_llms().len();

        session.select_need(Some("realtime"));
        let narrowed = session.filtered_llms();
        assert!(narrowed.len() < all);
        assert!(narrowed.iter().any(|m| m.id == "grok"));

        session.select_need(None);
        assert_eq!(session.filtered_llms().len(), all);
    }

    #[test]
    fn test_llm_selection_bound_is_four() {
        let mut session = builtin_session();
        for id in ["claude", "chatgpt", "kimi", "grok"] {
            assert_eq!(session.toggle_llm(id), ToggleOutcome::Added);
        }
        assert_eq!(session.toggle_llm("gemini"), ToggleOutcome::Rejected);
    }

    #[test]
    fn test_page_switch_keeps_per_page_selections() {
        let mut session = builtin_session();
        session.toggle_card("coinbase-card");
        session.set_page(CatalogPage::Privacy);
        session.toggle_protocol("zcash");
        session.set_page(CatalogPage::Cards);

        assert!(session.card_selection().contains("coinbase-card"));
        assert!(session.protocol_selection().contains("zcash"));
    }
}
