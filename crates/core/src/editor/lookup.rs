use std::time::Duration;

use log::debug;

use super::editor_model::{LookupOutcome, LookupRequest, LookupResponse};
use super::lookup_gate::LookupGate;
use crate::board::RateBoardServiceTrait;

/// Run a draft lookup after a quiet period.
///
/// Returns `None` without touching the provider when a newer request was
/// issued while waiting.
pub async fn run_lookup(
    service: &dyn RateBoardServiceTrait,
    gate: &LookupGate,
    request: LookupRequest,
    debounce: Duration,
) -> Option<LookupResponse> {
    if !debounce.is_zero() {
        tokio::time::sleep(debounce).await;
    }

    if !gate.is_current(request.token) {
        debug!("Lookup #{} for {} superseded", request.token, request.code);
        return None;
    }

    let outcome = match service.lookup_mid_rate(&request.code).await {
        Ok(Some(rate)) => LookupOutcome::Found(rate),
        Ok(None) => LookupOutcome::Unknown,
        Err(e) => LookupOutcome::Failed(e.to_string()),
    };

    Some(LookupResponse {
        token: request.token,
        code: request.code,
        outcome,
    })
}
