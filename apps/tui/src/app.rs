use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::TableState;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use ratedesk_core::editor::run_lookup;
use ratedesk_core::{
    BoardSnapshot, LookupGate, LookupRequest, LookupResponse, RateBoardServiceTrait, RateTable,
    RowEditor,
};
use ratedesk_market_data::CurrencyCode;

/// Results delivered back to the UI loop by background tasks.
#[derive(Debug)]
pub enum AppEvent {
    BoardLoaded {
        token: u64,
        result: ratedesk_core::Result<BoardSnapshot>,
    },
    LookupFinished(LookupResponse),
}

pub struct App {
    pub service: Arc<dyn RateBoardServiceTrait>,
    pub table: RateTable,
    pub tsel: TableState,
    pub editor: RowEditor,
    pub base: Option<CurrencyCode>,
    pub loading: bool,
    pub modal_error: Option<String>,
    pub quit: bool,
    loads: LookupGate,
    debounce: Duration,
    tx: UnboundedSender<AppEvent>,
    rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(service: Arc<dyn RateBoardServiceTrait>, debounce: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let editor = RowEditor::new(service.spread().clone());
        Self {
            service,
            table: RateTable::new(),
            tsel: TableState::default(),
            editor,
            base: None,
            loading: false,
            modal_error: None,
            quit: false,
            loads: LookupGate::new(),
            debounce,
            tx,
            rx,
        }
    }

    /// Start a background load of the whole board.
    ///
    /// Only the most recently started load is applied.
    pub fn refresh(&mut self) {
        self.loading = true;
        let token = self.loads.issue();
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = service.load_board().await;
            let _ = tx.send(AppEvent::BoardLoaded { token, result });
        });
    }

    fn spawn_lookup(&self, request: LookupRequest) {
        let service = Arc::clone(&self.service);
        let gate = self.editor.gate().clone();
        let tx = self.tx.clone();
        let debounce = self.debounce;
        tokio::spawn(async move {
            if let Some(response) = run_lookup(service.as_ref(), &gate, request, debounce).await {
                let _ = tx.send(AppEvent::LookupFinished(response));
            }
        });
    }

    /// Apply everything background tasks have reported since the last tick.
    pub fn drain_events(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.handle_event(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::BoardLoaded { token, .. } if !self.loads.is_current(token) => {
                tracing::debug!("Discarding board load #{}", token);
            }
            AppEvent::BoardLoaded { result: Ok(board), .. } => {
                self.loading = false;
                if !board.skipped.is_empty() {
                    tracing::warn!(skipped = ?board.skipped, "Some currencies had no usable rate");
                }
                tracing::info!(rows = board.rows.len(), base = %board.base, "Exchange rates loaded");
                self.table.replace_loaded(board.rows);
                self.base = Some(board.base);
                self.clamp_selection();
            }
            AppEvent::BoardLoaded { result: Err(e), .. } => {
                self.loading = false;
                tracing::error!("Error fetching exchange rates: {}", e);
            }
            AppEvent::LookupFinished(response) => {
                self.editor.apply_lookup(response);
            }
        }
    }

    pub fn handle_key(&mut self, k: KeyEvent) {
        if k.kind != KeyEventKind::Press {
            return;
        }
        if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if self.editor.is_open() {
            self.handle_modal_key(k);
            return;
        }

        match k.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('a') => {
                self.modal_error = None;
                self.editor.open();
            }
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, k: KeyEvent) {
        let request = match k.code {
            KeyCode::Esc => {
                self.editor.cancel();
                self.modal_error = None;
                None
            }
            KeyCode::Enter => {
                match self.editor.confirm(&mut self.table) {
                    Ok(_) => {
                        self.modal_error = None;
                        self.clamp_selection();
                    }
                    Err(e) => self.modal_error = Some(e.to_string()),
                }
                None
            }
            KeyCode::Backspace => self.editor.pop_char(),
            KeyCode::Char(c) => self.editor.push_char(c),
            _ => None,
        };

        if let Some(request) = request {
            self.modal_error = None;
            self.spawn_lookup(request);
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let n = self.table.len();
        if n == 0 {
            self.tsel.select(None);
            return;
        }
        let cur = self.tsel.selected().unwrap_or(0) as isize;
        let next = (cur + delta).rem_euclid(n as isize) as usize;
        self.tsel.select(Some(next));
    }

    fn clamp_selection(&mut self) {
        let len = self.table.len();
        match (len, self.tsel.selected()) {
            (0, _) => self.tsel.select(None),
            (n, Some(i)) if i >= n => self.tsel.select(Some(n - 1)),
            _ => {}
        }
    }
}
