use crate::compare::{CardRow, ProtocolRow};
use crate::filters::{CardFacet, ProtocolFacet};
use crate::selection::ToggleOutcome;
use crate::session::{CatalogPage, Session, View};
use crate::wizard::{WizardStep, WIZARD_COUNTRIES, WIZARD_CURRENCIES, WIZARD_KYC_CHOICES};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

pub struct App {
    pub session: Session,
    pub list_state: TableState,
    pub wizard_state: TableState,
    pub search_mode: bool,
    pub status: Option<String>,
}

impl App {
    pub fn new(session: Session) -> Self {
        let mut list_state = TableState::default();
        list_state.select(Some(0));

        let mut wizard_state = TableState::default();
        wizard_state.select(Some(0));

        Self {
            session,
            list_state,
            wizard_state,
            search_mode: false,
            status: None,
        }
    }

    fn visible_count(&self) -> usize {
        match self.session.page() {
            CatalogPage::Cards => self.session.filtered_cards().len(),
            CatalogPage::Privacy => self.session.filtered_protocols().len(),
            CatalogPage::Llms => self.session.filtered_llms().len(),
        }
    }

    /// Id of the entity under the cursor on the discover list.
    fn highlighted_id(&self) -> Option<String> {
        let index = self.list_state.selected()?;
        match self.session.page() {
            CatalogPage::Cards => self
                .session
                .filtered_cards()
                .get(index)
                .map(|c| c.id.clone()),
            CatalogPage::Privacy => self
                .session
                .filtered_protocols()
                .get(index)
                .map(|p| p.id.clone()),
            CatalogPage::Llms => self
                .session
                .filtered_llms()
                .get(index)
                .map(|m| m.id.clone()),
        }
    }

    /// Keep the cursor inside the (possibly shrunken) filtered list.
    fn clamp_cursor(&mut self) {
        let len = self.visible_count();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(i) if i < len => {}
            _ => self.list_state.select(Some(0)),
        }
    }

    pub fn next(&mut self) {
        let len = self.visible_count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.visible_count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn toggle_highlighted(&mut self) {
        let Some(id) = self.highlighted_id() else {
            return;
        };
        let (outcome, limit, noun) = match self.session.page() {
            CatalogPage::Cards => (
                self.session.toggle_card(&id),
                self.session.card_selection().limit(),
                "cards",
            ),
            CatalogPage::Privacy => (
                self.session.toggle_protocol(&id),
                self.session.protocol_selection().limit(),
                "protocols",
            ),
            CatalogPage::Llms => (
                self.session.toggle_llm(&id),
                self.session.llm_selection().limit(),
                "assistants",
            ),
        };
        if outcome.overflowed() {
            self.status = Some(format!(
                "You can select up to {limit} {noun} for comparison."
            ));
        } else {
            self.status = None;
        }
    }

    fn search_text(&self) -> &str {
        match self.session.page() {
            CatalogPage::Cards => &self.session.card_filter().search,
            CatalogPage::Privacy => &self.session.protocol_filter().search,
            CatalogPage::Llms => &self.session.llm_filter().search,
        }
    }

    fn set_search(&mut self, text: String) {
        match self.session.page() {
            CatalogPage::Cards => self.session.set_card_search(&text),
            CatalogPage::Privacy => self.session.set_protocol_search(&text),
            CatalogPage::Llms => self.session.set_llm_search(&text),
        }
        self.clamp_cursor();
    }

    fn cycle_sort(&mut self) {
        match self.session.page() {
            CatalogPage::Cards => {
                let next = self.session.card_sort().next();
                self.session.set_card_sort(next);
            }
            CatalogPage::Privacy => {
                let next = self.session.protocol_sort().next();
                self.session.set_protocol_sort(next);
            }
            CatalogPage::Llms => {}
        }
    }

    /// Cycle the LLM need filter: none → first need → ... → none.
    fn cycle_need(&mut self) {
        let needs: Vec<String> = self
            .session
            .needs()
            .iter()
            .map(|n| n.id.clone())
            .collect();
        let next = match &self.session.llm_filter().selected_need {
            None => needs.first().cloned(),
            Some(current) => {
                let pos = needs.iter().position(|n| n == current);
                match pos {
                    Some(i) if i + 1 < needs.len() => Some(needs[i + 1].clone()),
                    _ => None,
                }
            }
        };
        self.session.select_need(next.as_deref());
        self.clamp_cursor();
    }

    /// Step the minimum-cashback threshold through fixed notches.
    fn cycle_min_cashback(&mut self) {
        let current = self.session.card_filter().min_cashback;
        let next = match current {
            c if c < 1.0 => 1.0,
            c if c < 2.0 => 2.0,
            c if c < 4.0 => 4.0,
            c if c < 8.0 => 8.0,
            _ => 0.0,
        };
        self.session.set_min_cashback(next);
        self.clamp_cursor();
    }

    /// Step the region filter through a short list of common countries.
    fn cycle_region(&mut self) {
        const REGIONS: [&str; 6] = [
            "",
            "United States",
            "United Kingdom",
            "India",
            "Nigeria",
            "Brazil",
        ];
        let current = self.session.card_filter().region.clone();
        let pos = REGIONS.iter().position(|r| *r == current).unwrap_or(0);
        let next = REGIONS[(pos + 1) % REGIONS.len()];
        self.session.set_region(next);
        self.clamp_cursor();
    }

    /// Number keys toggle the canned facet values of the current page.
    fn toggle_numbered_facet(&mut self, digit: u8) {
        match self.session.page() {
            CatalogPage::Cards => {
                let binding = match digit {
                    1 => Some((CardFacet::Network, "Visa")),
                    2 => Some((CardFacet::Network, "Mastercard")),
                    3 => Some((CardFacet::Custody, "Custodial")),
                    4 => Some((CardFacet::Custody, "Self-Custody")),
                    5 => Some((CardFacet::CardType, "Debit")),
                    6 => Some((CardFacet::CardType, "Credit")),
                    _ => None,
                };
                if let Some((facet, value)) = binding {
                    self.session.toggle_card_facet(facet, value);
                }
            }
            CatalogPage::Privacy => {
                let binding = match digit {
                    1 => Some((ProtocolFacet::AnonymitySet, "High")),
                    2 => Some((ProtocolFacet::AnonymitySet, "Medium")),
                    3 => Some((ProtocolFacet::AnonymitySet, "Low")),
                    4 => Some((ProtocolFacet::DefaultPrivacy, "Mandatory")),
                    5 => Some((ProtocolFacet::DefaultPrivacy, "Opt-in")),
                    _ => None,
                };
                if let Some((facet, value)) = binding {
                    self.session.toggle_protocol_facet(facet, value);
                }
            }
            CatalogPage::Llms => {}
        }
        self.clamp_cursor();
    }

    fn clear_filters(&mut self) {
        match self.session.page() {
            CatalogPage::Cards => self.session.clear_card_filters(),
            CatalogPage::Privacy => self.session.clear_protocol_filters(),
            CatalogPage::Llms => {
                self.session.set_llm_search("");
                self.session.select_need(None);
            }
        }
        self.clamp_cursor();
    }

    fn wizard_options(&self) -> Vec<String> {
        let Some(wizard) = self.session.wizard() else {
            return Vec::new();
        };
        match wizard.step() {
            WizardStep::Region => {
                let mut options: Vec<String> =
                    WIZARD_COUNTRIES.iter().map(|c| c.to_string()).collect();
                options.push("Other / Global".to_string());
                options
            }
            WizardStep::Currency => WIZARD_CURRENCIES.iter().map(|c| c.to_string()).collect(),
            WizardStep::Privacy => WIZARD_KYC_CHOICES.iter().map(|c| c.to_string()).collect(),
            WizardStep::Result => self
                .session
                .wizard_results()
                .iter()
                .map(|card| format!("{} ({})", card.name, card.issuer))
                .collect(),
        }
    }

    fn wizard_confirm(&mut self) {
        let Some(step) = self.session.wizard().map(|w| w.step()) else {
            return;
        };
        let index = self.wizard_state.selected().unwrap_or(0);

        match step {
            WizardStep::Region => {
                let value = if index < WIZARD_COUNTRIES.len() {
                    WIZARD_COUNTRIES[index].to_string()
                } else {
                    "Global".to_string()
                };
                self.session.wizard_answer(&value);
            }
            WizardStep::Currency => {
                if let Some(value) = WIZARD_CURRENCIES.get(index) {
                    self.session.wizard_answer(value);
                }
            }
            WizardStep::Privacy => {
                if let Some(value) = WIZARD_KYC_CHOICES.get(index) {
                    self.session.wizard_answer(value);
                }
            }
            WizardStep::Result => {
                let picked = self
                    .session
                    .wizard_results()
                    .get(index)
                    .map(|card| card.id.clone());
                if let Some(id) = picked {
                    let outcome = self.session.wizard_pick(&id);
                    if outcome == ToggleOutcome::Rejected {
                        let limit = self.session.card_selection().limit();
                        self.status = Some(format!(
                            "You can select up to {limit} cards for comparison."
                        ));
                    }
                }
            }
        }
        self.wizard_state.select(Some(0));
    }

    fn wizard_move(&mut self, down: bool) {
        let len = self.wizard_options().len();
        if len == 0 {
            return;
        }
        let current = self.wizard_state.selected().unwrap_or(0);
        let next = if down {
            (current + 1) % len
        } else if current == 0 {
            len - 1
        } else {
            current - 1
        };
        self.wizard_state.select(Some(next));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Search entry captures printable keys first
            if app.search_mode {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter => app.search_mode = false,
                    KeyCode::Backspace => {
                        let mut text = app.search_text().to_string();
                        text.pop();
                        app.set_search(text);
                    }
                    KeyCode::Char(c) => {
                        let mut text = app.search_text().to_string();
                        text.push(c);
                        app.set_search(text);
                    }
                    _ => {}
                }
                continue;
            }

            // Wizard overlay has its own key map
            if app.session.wizard().is_some() {
                match key.code {
                    KeyCode::Esc => app.session.close_wizard(),
                    KeyCode::Down | KeyCode::Char('j') => app.wizard_move(true),
                    KeyCode::Up | KeyCode::Char('k') => app.wizard_move(false),
                    KeyCode::Enter => app.wizard_confirm(),
                    KeyCode::Char('r') => {
                        app.session.wizard_restart();
                        app.wizard_state.select(Some(0));
                    }
                    _ => {}
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        // Cycling three pages twice lands on the previous one
                        app.session.next_page();
                        app.session.next_page();
                    } else {
                        app.session.next_page();
                    }
                    app.clamp_cursor();
                }
                KeyCode::Char('/') => app.search_mode = true,
                KeyCode::Char('s') => {
                    app.cycle_sort();
                    app.clamp_cursor();
                }
                KeyCode::Char('n') => {
                    if app.session.page() == CatalogPage::Llms {
                        app.cycle_need();
                    }
                }
                KeyCode::Char('m') => {
                    if app.session.page() == CatalogPage::Cards {
                        app.cycle_min_cashback();
                    }
                }
                KeyCode::Char('r') => {
                    if app.session.page() == CatalogPage::Cards {
                        app.cycle_region();
                    }
                }
                KeyCode::Char(c @ '1'..='6') => {
                    app.toggle_numbered_facet(c as u8 - b'0');
                }
                KeyCode::Char('x') => app.clear_filters(),
                KeyCode::Char('c') => {
                    let target = match app.session.view() {
                        View::Discover => View::Compare,
                        View::Compare => View::Discover,
                    };
                    app.session.set_view(target);
                }
                KeyCode::Char('w') => {
                    app.session.open_wizard();
                    app.wizard_state.select(Some(0));
                }
                KeyCode::Char(' ') => app.toggle_highlighted(),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Home => app.list_state.select(Some(0)),
                KeyCode::End => {
                    let len = app.visible_count();
                    if len > 0 {
                        app.list_state.select(Some(len - 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.session.view() {
        View::Discover => render_discover(f, chunks[1], app),
        View::Compare => render_compare(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);

    if app.session.wizard().is_some() {
        render_wizard(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [CatalogPage::Cards, CatalogPage::Privacy, CatalogPage::Llms];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.session.page() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    let (visible, selected) = match app.session.page() {
        CatalogPage::Cards => (
            app.session.filtered_cards().len(),
            app.session.card_selection().len(),
        ),
        CatalogPage::Privacy => (
            app.session.filtered_protocols().len(),
            app.session.protocol_selection().len(),
        ),
        CatalogPage::Llms => (
            app.session.filtered_llms().len(),
            app.session.llm_selection().len(),
        ),
    };

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Showing: {}", visible),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Compare: {}", selected),
        Style::default().fg(Color::Green),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_discover(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter summary
            Constraint::Min(0),    // Entity table
        ])
        .split(area);

    render_filter_bar(f, chunks[0], app);

    match app.session.page() {
        CatalogPage::Cards => render_card_table(f, chunks[1], app),
        CatalogPage::Privacy => render_protocol_table(f, chunks[1], app),
        CatalogPage::Llms => render_llm_table(f, chunks[1], app),
    }
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" Search: {:<20}", truncate(app.search_text(), 20)),
        if app.search_mode {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        },
    )];

    match app.session.page() {
        CatalogPage::Cards => {
            let filter = app.session.card_filter();
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("Sort: {}", app.session.card_sort().label()),
                Style::default().fg(Color::Cyan),
            ));
            if !filter.region.is_empty() {
                spans.push(Span::raw(" | "));
                spans.push(Span::styled(
                    format!("Region: {}", filter.region),
                    Style::default().fg(Color::Green),
                ));
            }
            if filter.min_cashback > 0.0 {
                spans.push(Span::raw(" | "));
                spans.push(Span::styled(
                    format!("Cashback >= {}%", filter.min_cashback),
                    Style::default().fg(Color::Green),
                ));
            }
            let facet_count = filter.card_type.len() + filter.network.len() + filter.custody.len();
            if facet_count > 0 {
                spans.push(Span::raw(" | "));
                spans.push(Span::styled(
                    format!("Facets: {}", facet_count),
                    Style::default().fg(Color::Green),
                ));
            }
        }
        CatalogPage::Privacy => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("Sort: {}", app.session.protocol_sort().label()),
                Style::default().fg(Color::Cyan),
            ));
            let filter = app.session.protocol_filter();
            let facet_count = filter.privacy_tech.len()
                + filter.anonymity_set.len()
                + filter.default_privacy.len();
            if facet_count > 0 {
                spans.push(Span::raw(" | "));
                spans.push(Span::styled(
                    format!("Facets: {}", facet_count),
                    Style::default().fg(Color::Green),
                ));
            }
        }
        CatalogPage::Llms => {
            if let Some(need_id) = &app.session.llm_filter().selected_need {
                let label = app
                    .session
                    .needs()
                    .iter()
                    .find(|n| &n.id == need_id)
                    .map(|n| n.label.clone())
                    .unwrap_or_else(|| need_id.clone());
                spans.push(Span::raw(" | "));
                spans.push(Span::styled(
                    format!("Need: {}", label),
                    Style::default().fg(Color::Green),
                ));
            }
        }
    }

    let bar = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Filters "),
    );

    f.render_widget(bar, area);
}

fn render_card_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["", "Name", "Issuer", "Type", "Network", "Cashback", "Regions", "KYC"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let selection = app.session.card_selection().clone();
    let rows: Vec<Row> = app
        .session
        .filtered_cards()
        .iter()
        .map(|card| {
            let marker = if selection.contains(&card.id) { "*" } else { " " };
            let cashback = match card.cashback_max {
                Some(value) => format!("{value}%"),
                None => "-".to_string(),
            };
            Row::new(vec![
                Cell::from(marker).style(Style::default().fg(Color::Green)),
                Cell::from(truncate(&card.name, 22)),
                Cell::from(truncate(&card.issuer, 18)),
                Cell::from(card.card_type.as_str()),
                Cell::from(card.network.as_str()),
                Cell::from(cashback),
                Cell::from(truncate(&card.regions, 24)),
                Cell::from(card.kyc.as_str()),
            ])
            .height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(24),
            Constraint::Length(20),
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(26),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Cards "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.list_state);
}

fn render_protocol_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["", "Name", "Ticker", "Privacy Tech", "Anonymity", "Default", "Fees"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let selection = app.session.protocol_selection().clone();
    let rows: Vec<Row> = app
        .session
        .filtered_protocols()
        .iter()
        .map(|protocol| {
            let marker = if selection.contains(&protocol.id) { "*" } else { " " };
            let anonymity_color = match protocol.anonymity_set.as_str() {
                "High" => Color::Green,
                "Medium" => Color::Yellow,
                _ => Color::Red,
            };
            Row::new(vec![
                Cell::from(marker).style(Style::default().fg(Color::Green)),
                Cell::from(truncate(&protocol.name, 18)),
                Cell::from(protocol.ticker.clone()),
                Cell::from(truncate(&protocol.privacy_tech, 30)),
                Cell::from(protocol.anonymity_set.as_str())
                    .style(Style::default().fg(anonymity_color)),
                Cell::from(protocol.default_privacy.as_str()),
                Cell::from(truncate(&protocol.average_fees, 20)),
            ])
            .height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(20),
            Constraint::Length(8),
            Constraint::Length(32),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(22),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Privacy Protocols "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.list_state);
}

fn render_llm_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["", "Name", "Provider", "Primary Strength", "Context", "Pricing"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let selection = app.session.llm_selection().clone();
    let rows: Vec<Row> = app
        .session
        .filtered_llms()
        .iter()
        .map(|model| {
            let marker = if selection.contains(&model.id) { "*" } else { " " };
            Row::new(vec![
                Cell::from(marker).style(Style::default().fg(Color::Green)),
                Cell::from(truncate(&model.name, 16)),
                Cell::from(truncate(&model.provider, 16)),
                Cell::from(truncate(&model.primary_strength, 20)),
                Cell::from(model.context_window.clone()),
                Cell::from(model.pricing_model.as_str()),
            ])
            .height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(18),
            Constraint::Length(18),
            Constraint::Length(22),
            Constraint::Length(14),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" LLM Assistants "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.list_state);
}

fn render_compare(f: &mut Frame, area: Rect, app: &App) {
    match app.session.page() {
        CatalogPage::Cards => {
            let cards = app.session.selected_cards();
            let names: Vec<String> = cards.iter().map(|c| c.name.clone()).collect();
            let rows: Vec<Vec<String>> = CardRow::ALL
                .iter()
                .map(|row| {
                    let mut line = vec![row.label().to_string()];
                    line.extend(cards.iter().map(|c| row.value(c)));
                    line
                })
                .collect();
            render_compare_table(f, area, " Card Comparison ", &names, &rows, None);
        }
        CatalogPage::Privacy => {
            let protocols = app.session.selected_protocols();
            let best = app.session.best_pick().map(|id| id.to_string());
            let best_index = protocols
                .iter()
                .position(|p| best.as_deref() == Some(p.id.as_str()));
            let names: Vec<String> = protocols.iter().map(|p| p.name.clone()).collect();
            let rows: Vec<Vec<String>> = ProtocolRow::ALL
                .iter()
                .map(|row| {
                    let mut line = vec![row.label().to_string()];
                    line.extend(protocols.iter().map(|p| row.value(p)));
                    line
                })
                .collect();
            render_compare_table(f, area, " Protocol Comparison ", &names, &rows, best_index);
        }
        CatalogPage::Llms => {
            let models = app.session.selected_llms();
            let names: Vec<String> = models.iter().map(|m| m.name.clone()).collect();
            let labels = [
                "Provider",
                "Primary Strength",
                "Context Window",
                "Pricing",
                "API Available",
            ];
            let rows: Vec<Vec<String>> = labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    let mut line = vec![label.to_string()];
                    line.extend(models.iter().map(|m| match i {
                        0 => m.provider.clone(),
                        1 => m.primary_strength.clone(),
                        2 => m.context_window.clone(),
                        3 => m.pricing_model.as_str().to_string(),
                        _ => if m.api_available { "Yes" } else { "No" }.to_string(),
                    }));
                    line
                })
                .collect();
            render_compare_table(f, area, " LLM Comparison ", &names, &rows, None);
        }
    }
}

fn render_compare_table(
    f: &mut Frame,
    area: Rect,
    title: &str,
    names: &[String],
    rows: &[Vec<String>],
    best_index: Option<usize>,
) {
    let mut header_cells = vec![Cell::from("")];
    for (i, name) in names.iter().enumerate() {
        let mut label = name.clone();
        let mut style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        if Some(i) == best_index {
            label = format!("★ {label}");
            style = style.fg(Color::Green);
        }
        header_cells.push(Cell::from(label).style(style));
    }

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let body: Vec<Row> = rows
        .iter()
        .map(|line| {
            let cells: Vec<Cell> = line
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    if i == 0 {
                        Cell::from(value.clone()).style(Style::default().fg(Color::Cyan))
                    } else {
                        Cell::from(truncate(value, 28))
                    }
                })
                .collect();
            Row::new(cells).height(1)
        })
        .collect();

    let mut widths = vec![Constraint::Length(18)];
    widths.extend(names.iter().map(|_| Constraint::Length(30)));

    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title.to_string()),
    );

    f.render_widget(table, area);
}

fn render_wizard(f: &mut Frame, app: &mut App) {
    let Some(wizard) = app.session.wizard() else {
        return;
    };
    let step = wizard.step();

    let area = centered_rect(50, 70, f.size());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Question
            Constraint::Min(0),    // Options
        ])
        .split(area);

    let title = match step {
        WizardStep::Result => format!("We found {} matches", app.session.wizard_results().len()),
        _ => step.title().to_string(),
    };

    let question = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Card Wizard "),
    );
    f.render_widget(question, chunks[0]);

    let options = app.wizard_options();
    let rows: Vec<Row> = options
        .iter()
        .map(|option| Row::new(vec![Cell::from(option.clone())]).height(1))
        .collect();

    let hint = match step {
        WizardStep::Result => " Enter select | r restart | Esc close ",
        _ => " Enter answer | Esc close ",
    };

    let table = Table::new(rows, [Constraint::Percentage(100)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(hint),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(table, chunks[1], &mut app.wizard_state);
}

/// Centered overlay rectangle, sized as a percentage of the frame.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    if let Some(message) = &app.status {
        status_spans.push(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        status_spans.push(Span::raw("| "));
    } else {
        let position = app.list_state.selected().map(|i| i + 1).unwrap_or(0);
        status_spans.push(Span::styled(
            format!(" Row: {}/{} ", position, app.visible_count()),
            Style::default().fg(Color::Cyan),
        ));
        status_spans.push(Span::raw("| "));
    }

    status_spans.push(Span::styled("Space", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Select | "));
    status_spans.push(Span::styled("c", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Compare | "));
    status_spans.push(Span::styled("/", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Search | "));
    status_spans.push(Span::styled("s", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Sort | "));
    match app.session.page() {
        CatalogPage::Cards => {
            status_spans.push(Span::styled("1-6", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Facets | "));
            status_spans.push(Span::styled("m", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Min% | "));
            status_spans.push(Span::styled("r", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Region | "));
        }
        CatalogPage::Privacy => {
            status_spans.push(Span::styled("1-5", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Facets | "));
        }
        CatalogPage::Llms => {
            status_spans.push(Span::styled("n", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Need | "));
        }
    }
    status_spans.push(Span::styled("w", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Wizard | "));
    status_spans.push(Span::styled("x", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Clear | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
