//! Terminal front-end
//!
//! Renders the counter views with ratatui and dispatches key intents into the
//! application state. Strictly synchronous: every mutation completes before
//! the next event is read, matching the single-writer model of the stores.

use crate::core::{App, AppView, ConfirmAction};
use crate::printing::render_receipt;
use crate::sessions::calculate_total;
use crate::utils::format::{format_currency, format_time};
use crate::views::{
    self, CatalogFilter, HistoryFilter, SearchMode, categories, filter_catalog, filter_history,
    order_codes, sales_stats, validate_customer_name,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{prelude::*, widgets::*};
use shared::{Product, SessionStatus};
use std::io;
use std::time::Duration;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// What currently receives typed text
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    #[default]
    Normal,
    /// Catalog search box on the order screen
    Search,
    /// History search box
    HistorySearch,
    /// Product form in the catalog editor
    ProductForm,
    /// Combo component picker inside the product form
    ComponentPicker,
}

/// Catalog editor form
#[derive(Default)]
struct ProductForm {
    /// Existing product id when editing, `None` when adding
    editing: Option<String>,
    name: Input,
    code: Input,
    price: Input,
    category: Input,
    field: usize,
    is_combo: bool,
    combo_items: Vec<String>,
    picker_idx: usize,
}

impl ProductForm {
    fn from_product(product: &Product) -> Self {
        Self {
            editing: Some(product.id.clone()),
            name: Input::new(product.name.clone()),
            code: Input::new(product.code.clone()),
            price: Input::new(product.price.to_string()),
            category: Input::new(product.category.clone()),
            field: 0,
            is_combo: product.is_combo,
            combo_items: product.combo_items.clone(),
            picker_idx: 0,
        }
    }

    fn field_mut(&mut self) -> &mut Input {
        match self.field {
            0 => &mut self.name,
            1 => &mut self.code,
            2 => &mut self.price,
            _ => &mut self.category,
        }
    }
}

/// Billing entry inputs, prefilled from the staged order
#[derive(Default)]
struct BillingForm {
    name: Input,
    phone: Input,
    field: usize,
}

/// TUI state on top of the application state
pub struct Tui {
    app: App,
    input_mode: InputMode,
    search: Input,
    search_mode: SearchMode,
    category_idx: usize,
    product_idx: usize,
    cart_idx: usize,
    queue_idx: usize,
    catalog_idx: usize,
    history_query: Input,
    history_date: Input,
    history_month: Input,
    history_year: Input,
    history_field: usize,
    product_form: Option<ProductForm>,
    billing_form: BillingForm,
    should_quit: bool,
}

/// Enter the alternate screen and run the event loop until quit
pub fn run(app: App) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut tui = Tui::new(app);
    let result = tui.event_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

impl Tui {
    pub fn new(app: App) -> Self {
        Self {
            app,
            input_mode: InputMode::default(),
            search: Input::default(),
            search_mode: SearchMode::default(),
            category_idx: 0,
            product_idx: 0,
            cart_idx: 0,
            queue_idx: 0,
            catalog_idx: 0,
            history_query: Input::default(),
            history_date: Input::default(),
            history_month: Input::default(),
            history_year: Input::default(),
            history_field: 0,
            product_form: None,
            billing_form: BillingForm::default(),
            should_quit: false,
        }
    }

    fn event_loop(&mut self, terminal: &mut Terminal<impl Backend>) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key)?;
            }
        }
        Ok(())
    }

    fn catalog_filter(&self) -> CatalogFilter {
        let category_names = categories(self.app.catalog.products());
        let category = if self.category_idx == 0 {
            None
        } else {
            category_names.get(self.category_idx).cloned()
        };
        CatalogFilter {
            search: self.search.value().to_string(),
            mode: self.search_mode,
            category,
        }
    }

    // ========== Key handling ==========

    fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        // Confirmation dialog swallows everything until resolved
        if self.app.pending_confirm().is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.app.confirm_pending()?,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.app.dismiss_pending()
                }
                _ => {}
            }
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::Search => return self.handle_search_key(key),
            InputMode::HistorySearch => return self.handle_history_search_key(key),
            InputMode::ProductForm => return self.handle_product_form_key(key),
            InputMode::ComponentPicker => return self.handle_component_picker_key(key),
            InputMode::Normal => {}
        }

        // The billing screen owns every key (text entry)
        if self.app.view() == AppView::Billing {
            return self.handle_billing_key(key);
        }

        // Global navigation
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Tab => {
                let next = match self.app.view() {
                    AppView::Order => AppView::Queue,
                    AppView::Queue => AppView::Management,
                    AppView::Management => AppView::History,
                    _ => AppView::Order,
                };
                self.app.set_view(next);
                return Ok(());
            }
            _ => {}
        }

        match self.app.view() {
            AppView::Order => self.handle_order_key(key)?,
            AppView::Queue => self.handle_queue_key(key)?,
            AppView::Billing => {}
            AppView::Management => self.handle_management_key(key)?,
            AppView::History => self.handle_history_key(key)?,
            AppView::Success => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                    self.app.new_order();
                }
            }
        }
        Ok(())
    }

    fn handle_order_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        let filter = self.catalog_filter();
        let active = self.app.sessions.active_session().cloned();
        let shown = filter_catalog(self.app.catalog.products(), &filter, active.as_ref()).len();

        match key.code {
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Char('p') => {
                self.search_mode = match self.search_mode {
                    SearchMode::Text => SearchMode::Price,
                    SearchMode::Price => SearchMode::Text,
                };
            }
            KeyCode::Char('c') => {
                let count = categories(self.app.catalog.products()).len();
                self.category_idx = (self.category_idx + 1) % count.max(1);
            }
            KeyCode::Up => self.product_idx = self.product_idx.saturating_sub(1),
            KeyCode::Down => {
                self.product_idx = (self.product_idx + 1).min(shown.saturating_sub(1));
            }
            KeyCode::Enter => {
                let filtered =
                    filter_catalog(self.app.catalog.products(), &filter, active.as_ref());
                if let Some(product) = filtered.get(self.product_idx) {
                    let product = (*product).clone();
                    self.app.sessions.add_to_cart(&product)?;
                }
            }
            KeyCode::Char('+') | KeyCode::Char('-') | KeyCode::Char('x') => {
                if let Some(session) = active
                    && let Some(item) = session.items.get(self.cart_idx)
                {
                    match key.code {
                        KeyCode::Char('+') => self.app.sessions.update_quantity(&item.id, 1)?,
                        KeyCode::Char('-') => self.app.sessions.update_quantity(&item.id, -1)?,
                        _ => self.app.sessions.remove_item(&item.id)?,
                    }
                }
            }
            KeyCode::PageUp => self.cart_idx = self.cart_idx.saturating_sub(1),
            KeyCode::PageDown => {
                let len = active.map_or(0, |s| s.items.len());
                self.cart_idx = (self.cart_idx + 1).min(len.saturating_sub(1));
            }
            KeyCode::Left | KeyCode::Right => self.cycle_active_draft(key.code == KeyCode::Right),
            KeyCode::Char('n') => self.app.sessions.set_active(None),
            KeyCode::Char('d') => {
                if let Some(id) = self.app.sessions.active_id() {
                    let id = id.to_string();
                    self.app.request_discard_draft(id);
                }
            }
            KeyCode::Char('h') => {
                self.app.sessions.hold_order()?;
            }
            KeyCode::Char('b') => {
                self.app.confirm_order()?;
                if self.app.view() == AppView::Billing {
                    self.open_billing_form();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Move the active-session reference across the draft tabs
    fn cycle_active_draft(&mut self, forward: bool) {
        let drafts = self.app.sessions.drafts();
        if drafts.is_empty() {
            return;
        }
        let current = self
            .app
            .sessions
            .active_id()
            .and_then(|id| drafts.iter().position(|d| d.id == id));
        let next = match current {
            None => 0,
            Some(pos) if forward => (pos + 1) % drafts.len(),
            Some(pos) => (pos + drafts.len() - 1) % drafts.len(),
        };
        let id = drafts[next].id.clone();
        self.app.sessions.set_active(Some(id));
        self.cart_idx = 0;
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            _ => {
                self.search.handle_event(&Event::Key(key));
                self.product_idx = 0;
            }
        }
        Ok(())
    }

    fn handle_queue_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        let orders = self.app.sessions.pending_orders();
        let len = orders.len();
        let selected = orders.get(self.queue_idx).cloned();

        match key.code {
            KeyCode::Up => self.queue_idx = self.queue_idx.saturating_sub(1),
            KeyCode::Down => self.queue_idx = (self.queue_idx + 1).min(len.saturating_sub(1)),
            KeyCode::Char('d') => {
                if let Some(order) = selected {
                    self.app.sessions.deliver_order(&order.id)?;
                }
            }
            KeyCode::Char('c') => {
                if let Some(order) = selected {
                    self.app.request_cancel_order(order.id);
                }
            }
            KeyCode::Char('r') => {
                // resume is offered for held orders only
                if let Some(order) = selected
                    && order.status == SessionStatus::Hold
                {
                    self.app.resume_order(&order.id)?;
                }
            }
            KeyCode::Char('o') => self.app.set_view(AppView::Order),
            _ => {}
        }
        Ok(())
    }

    fn handle_billing_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        match key.code {
            KeyCode::Tab => self.billing_form.field = (self.billing_form.field + 1) % 2,
            KeyCode::Enter => {
                if validate_customer_name(self.billing_form.name.value()) {
                    let name = self.billing_form.name.value().to_string();
                    let phone = self.billing_form.phone.value().to_string();
                    self.app.send_to_queue(&name, &phone)?;
                }
            }
            KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let name = self.billing_form.name.value().to_string();
                let phone = self.billing_form.phone.value().to_string();
                self.app.hold_from_billing(&name, &phone)?;
            }
            _ => {
                let field = match self.billing_form.field {
                    0 => &mut self.billing_form.name,
                    _ => &mut self.billing_form.phone,
                };
                field.handle_event(&Event::Key(key));
            }
        }
        Ok(())
    }

    /// Prefill the billing inputs from the staged order
    fn open_billing_form(&mut self) {
        if let Some(order) = self.app.sessions.staged_order() {
            self.billing_form = BillingForm {
                name: Input::new(order.customer_name.clone()),
                phone: Input::new(order.customer_phone.clone().unwrap_or_default()),
                field: 0,
            };
        }
    }

    fn handle_management_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        let len = self.app.catalog.products().len();
        match key.code {
            KeyCode::Up => self.catalog_idx = self.catalog_idx.saturating_sub(1),
            KeyCode::Down => self.catalog_idx = (self.catalog_idx + 1).min(len.saturating_sub(1)),
            KeyCode::Char('u') => {
                if let Some(product) = self.app.catalog.products().get(self.catalog_idx) {
                    let mut product = product.clone();
                    product.available = !product.available;
                    self.app.catalog.update_product(product)?;
                }
            }
            KeyCode::Char('d') => {
                if let Some(product) = self.app.catalog.products().get(self.catalog_idx) {
                    let id = product.id.clone();
                    self.app.catalog.delete_product(&id)?;
                    self.catalog_idx = self.catalog_idx.min(
                        self.app.catalog.products().len().saturating_sub(1),
                    );
                }
            }
            KeyCode::Char('a') => {
                self.product_form = Some(ProductForm::default());
                self.input_mode = InputMode::ProductForm;
            }
            KeyCode::Char('e') => {
                if let Some(product) = self.app.catalog.products().get(self.catalog_idx) {
                    self.product_form = Some(ProductForm::from_product(product));
                    self.input_mode = InputMode::ProductForm;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_product_form_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        let Some(form) = &mut self.product_form else {
            self.input_mode = InputMode::Normal;
            return Ok(());
        };
        match key.code {
            KeyCode::Esc => {
                self.product_form = None;
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Tab => form.field = (form.field + 1) % 4,
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.is_combo = !form.is_combo;
                if form.is_combo {
                    form.category = Input::new("Combos".to_string());
                }
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if form.is_combo {
                    form.picker_idx = 0;
                    self.input_mode = InputMode::ComponentPicker;
                }
            }
            KeyCode::Enter => {
                let price = form.price.value().trim().parse::<f64>().unwrap_or(0.0);
                let mut product = Product::new(
                    form.editing.clone().unwrap_or_default(),
                    form.name.value().trim(),
                    form.code.value().trim(),
                    price,
                    form.category.value().trim(),
                );
                product.is_combo = form.is_combo;
                if form.is_combo {
                    product.combo_items = form.combo_items.clone();
                }
                let editing = form.editing.is_some();
                self.product_form = None;
                self.input_mode = InputMode::Normal;
                if editing {
                    // keep availability and image of the existing entry
                    if let Some(existing) = self.app.catalog.find(&product.id) {
                        product.available = existing.available;
                        product.image = existing.image.clone();
                    }
                    self.app.catalog.update_product(product)?;
                } else {
                    self.app.catalog.add_product(product)?;
                }
            }
            _ => {
                form.field_mut().handle_event(&Event::Key(key));
            }
        }
        Ok(())
    }

    fn handle_component_picker_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        let candidates: Vec<String> = views::component_candidates(self.app.catalog.products())
            .iter()
            .map(|p| p.id.clone())
            .collect();
        let Some(form) = &mut self.product_form else {
            self.input_mode = InputMode::Normal;
            return Ok(());
        };
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::ProductForm,
            KeyCode::Up => form.picker_idx = form.picker_idx.saturating_sub(1),
            KeyCode::Down => {
                form.picker_idx = (form.picker_idx + 1).min(candidates.len().saturating_sub(1));
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = candidates.get(form.picker_idx) {
                    views::toggle_component(&mut form.combo_items, id);
                    if form.name.value().trim().is_empty() {
                        let name = views::management::combo_auto_name(
                            &form.combo_items,
                            self.app.catalog.products(),
                        );
                        form.name = Input::new(name);
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_history_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        match key.code {
            KeyCode::Char('/') => self.input_mode = InputMode::HistorySearch,
            KeyCode::Char('x') => self.app.request_clear_history(),
            _ => {}
        }
        Ok(())
    }

    fn handle_history_search_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Tab => self.history_field = (self.history_field + 1) % 4,
            _ => {
                let field = match self.history_field {
                    0 => &mut self.history_query,
                    1 => &mut self.history_date,
                    2 => &mut self.history_month,
                    _ => &mut self.history_year,
                };
                field.handle_event(&Event::Key(key));
            }
        }
        Ok(())
    }

    fn history_filter(&self) -> HistoryFilter {
        HistoryFilter {
            query: self.history_query.value().to_string(),
            date: self.history_date.value().trim().to_string(),
            month: self.history_month.value().trim().to_string(),
            year: self.history_year.value().trim().to_string(),
        }
    }

    // ========== Rendering ==========

    fn draw(&mut self, frame: &mut Frame) {
        let [tabs_area, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.draw_tabs(frame, tabs_area);
        match self.app.view() {
            AppView::Order => self.draw_order(frame, body),
            AppView::Queue => self.draw_queue(frame, body),
            AppView::Billing => self.draw_billing(frame, body),
            AppView::Management => self.draw_management(frame, body),
            AppView::History => self.draw_history(frame, body),
            AppView::Success => self.draw_success(frame, body),
        }
        self.draw_footer(frame, footer);

        if let Some(action) = self.app.pending_confirm() {
            draw_confirm_dialog(frame, action);
        }
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let pending = self.app.sessions.pending_count();
        let titles = vec![
            "Order".to_string(),
            format!("Queue ({pending})"),
            "Products".to_string(),
            "History".to_string(),
        ];
        let selected = match self.app.view() {
            AppView::Order | AppView::Billing | AppView::Success => 0,
            AppView::Queue => 1,
            AppView::Management => 2,
            AppView::History => 3,
        };
        let tabs = Tabs::new(titles)
            .select(selected)
            .highlight_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.app.view() {
            AppView::Order => {
                "↑↓ browse  Enter add  +/- qty  x remove  ←→ drafts  n new  h hold  b bill  d discard  / search  p price-mode  c category  Tab views  q quit"
            }
            AppView::Queue => "↑↓ select  d deliver  c cancel  r resume  o new order  Tab views",
            AppView::Billing => "type name  Tab name/phone  Enter confirm  Ctrl-h hold",
            AppView::Management => "↑↓ select  a add  e edit  u toggle  d delete  Tab views",
            AppView::History => "/ filter (Tab cycles search/date/month/year)  x clear history  Tab views",
            AppView::Success => "Enter new order",
        };
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn draw_order(&mut self, frame: &mut Frame, area: Rect) {
        let [catalog_area, cart_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);

        let filter = self.catalog_filter();
        let active = self.app.sessions.active_session().cloned();
        let filtered = filter_catalog(self.app.catalog.products(), &filter, active.as_ref());
        self.product_idx = self.product_idx.min(filtered.len().saturating_sub(1));

        let category_names = categories(self.app.catalog.products());
        let category_label = category_names
            .get(self.category_idx)
            .cloned()
            .unwrap_or_else(|| "All".to_string());
        let mode_label = match self.search_mode {
            SearchMode::Text => "TEXT",
            SearchMode::Price => "PRICE",
        };
        let title = format!(
            " Catalog [{category_label}] search({mode_label}): {} ",
            self.search.value()
        );

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|p| {
                let qty = active
                    .as_ref()
                    .map_or(0, |session| session.item_quantity(&p.id));
                let badge = if qty > 0 {
                    format!(" [x{qty}]")
                } else {
                    String::new()
                };
                let combo = if p.is_combo { " COMBO" } else { "" };
                ListItem::new(format!(
                    "{:<8} {:<30} {:>9}{combo}{badge}",
                    p.code,
                    p.name,
                    format_currency(p.price)
                ))
            })
            .collect();
        let mut state = ListState::default().with_selected(Some(self.product_idx));
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(Style::default().bg(Color::Red).fg(Color::White)),
            catalog_area,
            &mut state,
        );

        self.draw_cart(frame, cart_area, active.as_ref());
    }

    fn draw_cart(&mut self, frame: &mut Frame, area: Rect, active: Option<&shared::OrderSession>) {
        let drafts = self.app.sessions.drafts();
        let tabs_line = if drafts.is_empty() {
            "no drafts".to_string()
        } else {
            drafts
                .iter()
                .map(|d| {
                    let marker = if Some(d.id.as_str()) == self.app.sessions.active_id() {
                        "*"
                    } else {
                        " "
                    };
                    format!("[{marker}{}]", d.id)
                })
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut lines = vec![Line::from(tabs_line), Line::from("")];
        match active {
            Some(session) => {
                self.cart_idx = self.cart_idx.min(session.items.len().saturating_sub(1));
                for (idx, item) in session.items.iter().enumerate() {
                    let marker = if idx == self.cart_idx { ">" } else { " " };
                    lines.push(Line::from(format!(
                        "{marker} {:<24} x{:<3} {:>9}",
                        item.name,
                        item.quantity,
                        format_currency(item.line_total())
                    )));
                }
                lines.push(Line::from(""));
                lines.push(
                    Line::from(format!(
                        "TOTAL {:>33}",
                        format_currency(calculate_total(&session.items))
                    ))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                );
            }
            None => lines.push(Line::from("Cart is empty - add products to start a draft")),
        }

        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Cart ")),
            area,
        );
    }

    fn draw_queue(&mut self, frame: &mut Frame, area: Rect) {
        let orders = self.app.sessions.pending_orders();
        self.queue_idx = self.queue_idx.min(orders.len().saturating_sub(1));

        let items: Vec<ListItem> = orders
            .iter()
            .map(|order| {
                let name = if order.customer_name.is_empty() {
                    "Guest"
                } else {
                    &order.customer_name
                };
                ListItem::new(format!(
                    "{} {:<21} {:<16} {:>2} items {:>10}  {}",
                    order.id,
                    views::queue::status_label(order),
                    name,
                    order.unit_count(),
                    format_currency(calculate_total(&order.items)),
                    views::time_ago(order.timestamp),
                ))
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(self.queue_idx));
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::default().borders(Borders::ALL).title(" Delivery Queue "))
                .highlight_style(Style::default().bg(Color::Red).fg(Color::White)),
            area,
            &mut state,
        );
    }

    fn draw_billing(&mut self, frame: &mut Frame, area: Rect) {
        let Some(order) = self.app.sessions.staged_order().cloned() else {
            frame.render_widget(Paragraph::new("No order staged"), area);
            return;
        };
        let form = &self.billing_form;

        let name_valid = validate_customer_name(form.name.value());
        let name_style = if name_valid {
            Style::default()
        } else {
            Style::default().fg(Color::Red)
        };

        let mut lines = vec![
            Line::from(format!("Order {}  ({} items)", order.id, order.unit_count())),
            Line::from(""),
            Line::from(vec![
                Span::raw(if form.field == 0 { "> " } else { "  " }),
                Span::raw("Customer name: "),
                Span::styled(form.name.value().to_string(), name_style),
            ]),
            Line::from(vec![
                Span::raw(if form.field == 1 { "> " } else { "  " }),
                Span::raw("Phone:         "),
                Span::raw(form.phone.value().to_string()),
            ]),
            Line::from(""),
            Line::from(format!(
                "TOTAL: {}",
                format_currency(calculate_total(&order.items))
            )),
            Line::from(""),
            Line::from("Item codes:"),
        ];
        for code_line in order_codes(&order).lines() {
            lines.push(Line::from(format!("  {code_line}")));
        }
        if !name_valid {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Customer name is required",
                Style::default().fg(Color::Red),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Billing ")),
            area,
        );
    }

    fn draw_management(&mut self, frame: &mut Frame, area: Rect) {
        let products = self.app.catalog.products();
        self.catalog_idx = self.catalog_idx.min(products.len().saturating_sub(1));

        let items: Vec<ListItem> = products
            .iter()
            .map(|p| {
                let availability = if p.available { "   " } else { "OFF" };
                let combo = if p.is_combo {
                    format!(" COMBO(sum {})", format_currency(p.individual_total(products)))
                } else {
                    String::new()
                };
                ListItem::new(format!(
                    "{:<8} {:<30} {:>9} {availability}{combo}",
                    p.code,
                    p.name,
                    format_currency(p.price)
                ))
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(self.catalog_idx));
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::default().borders(Borders::ALL).title(" Products "))
                .highlight_style(Style::default().bg(Color::Red).fg(Color::White)),
            area,
            &mut state,
        );

        if matches!(
            self.input_mode,
            InputMode::ProductForm | InputMode::ComponentPicker
        ) && let Some(form) = &self.product_form
        {
            let popup = centered_rect(50, 60, frame.area());
            frame.render_widget(Clear, popup);
            let fields = [
                ("Name", form.name.value()),
                ("Code", form.code.value()),
                ("Price", form.price.value()),
                ("Category", form.category.value()),
            ];
            let mut lines: Vec<Line> = fields
                .iter()
                .enumerate()
                .map(|(idx, (label, value))| {
                    let marker = if idx == form.field { "> " } else { "  " };
                    Line::from(format!("{marker}{label:<9} {value}"))
                })
                .collect();
            lines.push(Line::from(format!(
                "  Combo     {}",
                if form.is_combo { "yes" } else { "no" }
            )));
            if form.is_combo {
                for id in &form.combo_items {
                    if let Some(component) = products.iter().find(|p| &p.id == id) {
                        lines.push(Line::from(format!("    - {}", component.name)));
                    }
                }
                lines.push(Line::from(format!(
                    "  Individual total: {}",
                    format_currency(views::management::components_total(
                        &form.combo_items,
                        products
                    ))
                )));
            }
            lines.push(Line::from(""));
            lines.push(
                Line::from("Tab field  Ctrl-b combo  Ctrl-p components  Enter save  Esc cancel")
                    .style(Style::default().fg(Color::DarkGray)),
            );
            let title = if form.editing.is_some() {
                " Edit Product "
            } else {
                " Add Product "
            };
            frame.render_widget(
                Paragraph::new(lines)
                    .block(Block::default().borders(Borders::ALL).title(title)),
                popup,
            );

            if self.input_mode == InputMode::ComponentPicker {
                self.draw_component_picker(frame, form);
            }
        }
    }

    fn draw_component_picker(&self, frame: &mut Frame, form: &ProductForm) {
        let candidates = views::component_candidates(self.app.catalog.products());
        let popup = centered_rect(40, 50, frame.area());
        frame.render_widget(Clear, popup);

        let items: Vec<ListItem> = candidates
            .iter()
            .map(|p| {
                let mark = if form.combo_items.contains(&p.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                ListItem::new(format!(
                    "{mark} {:<26} {:>9}",
                    p.name,
                    format_currency(p.price)
                ))
            })
            .collect();
        let mut state = ListState::default().with_selected(Some(form.picker_idx));
        frame.render_stateful_widget(
            List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Components (Enter toggle, Esc back) "),
                )
                .highlight_style(Style::default().bg(Color::Red).fg(Color::White)),
            popup,
            &mut state,
        );
    }

    fn draw_history(&mut self, frame: &mut Frame, area: Rect) {
        let filter = self.history_filter();
        let filtered = filter_history(self.app.sessions.history(), &filter);
        let stats = sales_stats(&filtered);

        let [stats_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let field_names = ["search", "date", "month", "year"];
        let field_values = [&filter.query, &filter.date, &filter.month, &filter.year];
        let filter_line = field_names
            .iter()
            .zip(field_values)
            .enumerate()
            .map(|(idx, (name, value))| {
                let marker = if self.input_mode == InputMode::HistorySearch
                    && idx == self.history_field
                {
                    ">"
                } else {
                    ""
                };
                format!("{marker}{name}: {value}")
            })
            .collect::<Vec<_>>()
            .join("  ");

        let stats_line = format!(
            "Sales {}   Orders {}   Items {}   Avg {}",
            format_currency(stats.total_sales),
            stats.total_orders,
            stats.total_items,
            format_currency(stats.average_order_value),
        );
        frame.render_widget(
            Paragraph::new(stats_line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Analytics ({filter_line}) ")),
            ),
            stats_area,
        );

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|order| {
                let status = match order.status {
                    SessionStatus::Delivered => "DELIVERED",
                    SessionStatus::Cancelled => "CANCELLED",
                    _ => "?",
                };
                let name = if order.customer_name.is_empty() {
                    "Guest"
                } else {
                    &order.customer_name
                };
                ListItem::new(format!(
                    "{} {status} {:<16} {:>10}  {}",
                    order.id,
                    name,
                    format_currency(calculate_total(&order.items)),
                    format_time(order.timestamp),
                ))
            })
            .collect();
        frame.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" History ({} matches) ", filtered.len())),
            ),
            list_area,
        );
    }

    fn draw_success(&mut self, frame: &mut Frame, area: Rect) {
        let Some(order) = self.app.sessions.last_confirmed() else {
            frame.render_widget(Paragraph::new("Nothing confirmed yet"), area);
            return;
        };
        let receipt = render_receipt(order);
        let mut lines = vec![
            Line::from(Span::styled(
                "Order sent to queue",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(receipt.lines().map(|l| Line::from(l.to_string())));
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Receipt ")),
            area,
        );
    }
}

fn draw_confirm_dialog(frame: &mut Frame, action: &ConfirmAction) {
    let popup = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from(action.prompt()),
        Line::from(""),
        Line::from("y = confirm    n / Esc = keep everything"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Confirm ")
                    .border_style(Style::default().fg(Color::Red)),
            ),
        popup,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
