//! Property-based integration tests for the rate board and row editor.
//!
//! These tests check that pricing and editing invariants hold across random
//! rates and random keystroke sequences, using the `proptest` crate.

use proptest::prelude::*;
use ratedesk_core::board::{RateTable, SpreadPolicy};
use ratedesk_core::editor::{LookupOutcome, LookupResponse, RowEditor};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

// =============================================================================
// Generators
// =============================================================================

/// Generates a positive mid rate between 0.00000001 and ~100000.
fn arb_mid_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000i64, 0u32..=8).prop_map(|(mantissa, scale)| {
        let mid = Decimal::new(mantissa, scale);
        if mid > dec!(100000) {
            Decimal::new(mantissa, 8)
        } else {
            mid
        }
    })
}

/// Generates keystroke text as typed in the currency input.
fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z]{1,4}", " {1,3}"]
}

fn round4(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Buy and sell are the mid rate moved by five percent, rounded to four places.
    #[test]
    fn prop_spread_matches_formula(mid in arb_mid_rate()) {
        let policy = SpreadPolicy::default();
        let row = policy.derive_row("CAD".into(), mid).unwrap();

        prop_assert_eq!(row.buy_price, round4(mid * dec!(1.05)));
        prop_assert_eq!(row.sell_price, round4(mid * dec!(0.95)));
        prop_assert_eq!(row.mid_rate, round4(mid));
    }

    /// Every rendered price carries exactly four fractional digits.
    #[test]
    fn prop_prices_have_four_decimals(mid in arb_mid_rate()) {
        let row = SpreadPolicy::default().derive_row("JPY".into(), mid).unwrap();

        for cell in &row.cells()[1..] {
            let (_, frac) = cell.split_once('.').expect("decimal point");
            prop_assert_eq!(frac.len(), 4, "cell {} should have 4 decimals", cell);
        }
    }

    /// We never buy below, or sell above, the displayed mid rate.
    #[test]
    fn prop_buy_mid_sell_ordering(mid in arb_mid_rate()) {
        let row = SpreadPolicy::default().derive_row("EUR".into(), mid).unwrap();

        prop_assert!(row.buy_price >= row.mid_rate);
        prop_assert!(row.mid_rate >= row.sell_price);
    }

    /// Whatever was typed, cancelling leaves the table as it was and empties the draft.
    #[test]
    fn prop_cancel_never_mutates_table(
        inputs in proptest::collection::vec(arb_input(), 0..10),
        mid in arb_mid_rate(),
    ) {
        let policy = SpreadPolicy::default();
        let mut table = RateTable::from_rows(vec![policy.derive_row("GBP".into(), dec!(0.79)).unwrap()]);
        let before = table.clone();

        let mut editor = RowEditor::new(policy);
        editor.open();
        for input in &inputs {
            if let Some(req) = editor.on_input(input) {
                editor.apply_lookup(LookupResponse {
                    token: req.token,
                    code: req.code,
                    outcome: LookupOutcome::Found(mid),
                });
            }
        }
        editor.cancel();

        prop_assert_eq!(&table, &before);
        prop_assert!(editor.draft().is_empty());
        prop_assert!(editor.confirm(&mut table).is_err());
        prop_assert_eq!(table, before);
    }

    /// Only the answer to the most recent keystroke reaches the draft.
    #[test]
    fn prop_only_latest_lookup_applies(
        text in "[a-z]{2,6}",
        stale_mid in arb_mid_rate(),
        latest_mid in arb_mid_rate(),
    ) {
        let policy = SpreadPolicy::default();
        let mut editor = RowEditor::new(policy.clone());
        editor.open();

        let requests: Vec<_> = text.chars().filter_map(|c| editor.push_char(c)).collect();
        let (latest, stale) = requests.split_last().expect("at least one request");

        // answers arrive newest first, then the stale ones
        let applied = editor.apply_lookup(LookupResponse {
            token: latest.token,
            code: latest.code.clone(),
            outcome: LookupOutcome::Found(latest_mid),
        });
        prop_assert!(applied);
        for req in stale {
            let applied = editor.apply_lookup(LookupResponse {
                token: req.token,
                code: req.code.clone(),
                outcome: LookupOutcome::Found(stale_mid),
            });
            prop_assert!(!applied);
        }

        prop_assert_eq!(&editor.draft().currency_code, &text.to_uppercase());
        prop_assert_eq!(&editor.draft().mid_rate, &policy.format_rate(latest_mid));
    }
}
