use log::{debug, info, warn};
use rust_decimal::Decimal;

use super::editor_errors::RowEditorError;
use super::editor_model::{Draft, LookupOutcome, LookupRequest, LookupResponse, ModalState};
use super::lookup_gate::LookupGate;
use crate::board::{ExchangeRateRow, RateTable, SpreadPolicy};
use ratedesk_market_data::CurrencyCode;

/// State of the add-currency dialog and its draft.
///
/// The editor never performs I/O itself: input changes hand back a
/// [`LookupRequest`] for the caller to run, and the caller feeds the answer to
/// [`RowEditor::apply_lookup`].
#[derive(Debug, Clone, Default)]
pub struct RowEditor {
    modal: ModalState,
    draft: Draft,
    gate: LookupGate,
    spread: SpreadPolicy,
    pending: Option<u64>,
    // Unrounded rate behind `draft.mid_rate`.
    mid: Option<Decimal>,
}

impl RowEditor {
    pub fn new(spread: SpreadPolicy) -> Self {
        Self {
            spread,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Handle shared with lookup tasks.
    pub fn gate(&self) -> &LookupGate {
        &self.gate
    }

    /// True while the latest issued lookup has not been answered.
    pub fn is_lookup_pending(&self) -> bool {
        self.pending.is_some_and(|t| self.gate.is_current(t))
    }

    pub fn open(&mut self) {
        self.reset_draft();
        self.modal = ModalState::Open;
    }

    /// Discard the draft and close without touching any table.
    pub fn cancel(&mut self) {
        self.reset_draft();
        self.modal = ModalState::Closed;
    }

    /// Replace the input text.
    ///
    /// Empty input resets the draft and issues nothing. Otherwise the code is
    /// upper-cased, the previous rate is dropped, and a lookup for the new
    /// code is returned.
    pub fn on_input(&mut self, text: &str) -> Option<LookupRequest> {
        if !self.is_open() {
            return None;
        }

        if text.trim().is_empty() {
            self.reset_draft();
            return None;
        }

        self.draft.currency_code = text.to_uppercase();
        self.clear_rate();

        let token = self.gate.issue();
        self.pending = Some(token);
        Some(LookupRequest {
            token,
            code: CurrencyCode::new(&self.draft.currency_code),
        })
    }

    pub fn push_char(&mut self, c: char) -> Option<LookupRequest> {
        let mut text = self.draft.currency_code.clone();
        text.push(c);
        self.on_input(&text)
    }

    pub fn pop_char(&mut self) -> Option<LookupRequest> {
        let mut text = self.draft.currency_code.clone();
        text.pop();
        self.on_input(&text)
    }

    /// Apply a lookup answer. Returns false when the answer is stale.
    pub fn apply_lookup(&mut self, response: LookupResponse) -> bool {
        if !self.is_open() || !self.gate.is_current(response.token) {
            debug!(
                "Discarding stale lookup #{} for {}",
                response.token, response.code
            );
            return false;
        }

        self.pending = None;
        match response.outcome {
            LookupOutcome::Found(rate) => {
                self.draft.mid_rate = self.spread.format_rate(rate);
                self.mid = Some(rate);
            }
            LookupOutcome::Unknown => {
                info!("No rate quoted for {}", response.code);
                self.clear_rate();
            }
            LookupOutcome::Failed(message) => {
                warn!("Rate lookup for {} failed: {}", response.code, message);
                self.clear_rate();
            }
        }
        true
    }

    /// Append a row built from the draft, then close and reset.
    ///
    /// A draft without a usable rate is refused and left open for editing.
    pub fn confirm(&mut self, table: &mut RateTable) -> Result<ExchangeRateRow, RowEditorError> {
        if !self.is_open() {
            return Err(RowEditorError::ModalClosed);
        }

        let code = CurrencyCode::new(&self.draft.currency_code);
        if code.is_empty() {
            return Err(RowEditorError::MissingCurrency);
        }
        // Derive from the looked-up rate, not its rounded display form.
        let mid = match self.mid {
            Some(mid) if self.draft.has_rate() => mid,
            _ => return Err(RowEditorError::MissingRate(code.to_string())),
        };
        let row = self
            .spread
            .derive_row(code.clone(), mid)
            .map_err(|e| RowEditorError::InvalidRate {
                code: code.to_string(),
                reason: e.to_string(),
            })?;

        table.push(row.clone());
        info!("Added {} at {}", row.currency_code, row.mid_rate);
        self.cancel();
        Ok(row)
    }

    fn clear_rate(&mut self) {
        self.draft.mid_rate.clear();
        self.mid = None;
    }

    fn reset_draft(&mut self) {
        self.draft.reset();
        self.mid = None;
        self.gate.invalidate();
        self.pending = None;
    }
}
