//! Gone Fishin' game logic: pure functions over [`FishingState`].
//!
//! Every mutation ends with `refresh_affordability`, so the upgrade buttons
//! are always in sync with the catch without any polling timer.

use tracing::{debug, info};

use super::state::FishingState;
use super::upgrade::{self, PurchaseResult};

/// Accrue passive catch for `elapsed_seconds` of wall-clock time.
///
/// Zero, negative and non-finite spans credit nothing (see
/// [`Economy::advance_time`](super::economy::Economy::advance_time)).
pub fn tick(state: &mut FishingState, elapsed_seconds: f64) {
    state.economy.advance_time(elapsed_seconds);
    state.refresh_affordability();
}

/// Manual click on the fish button.
pub fn click(state: &mut FishingState) {
    state.economy.catch_by_hand();
    state.refresh_affordability();
}

/// Try to buy the upgrade at `idx`.
///
/// Returns `None` when `idx` is outside the catalog. An unaffordable attempt
/// is not an error: state is left untouched and the result says so.
pub fn buy_upgrade(state: &mut FishingState, idx: usize) -> Option<PurchaseResult> {
    let target = state.upgrades.get_mut(idx)?;
    let result = upgrade::purchase(target, &mut state.economy);

    match &result {
        PurchaseResult::Purchased {
            cost,
            count,
            growth_rate,
        } => {
            let name = state.upgrades[idx].name.clone();
            info!(
                "bought {} #{} (next {:.2}, rate {:.1}/s)",
                name, count, cost, growth_rate
            );
            state.add_log(&format!("{} purchased: {}", name, count), false);
            if *count == 1 {
                state.add_log(
                    &format!(
                        "Catch rate is now {} fish/sec",
                        format_rate(*growth_rate)
                    ),
                    true,
                );
            }
        }
        PurchaseResult::Unaffordable { cost, shortfall } => {
            debug!(
                "ignored purchase of {}: costs {:.2}, short by {:.2}",
                state.upgrades[idx].name, cost, shortfall
            );
        }
    }

    state.refresh_affordability();
    Some(result)
}

/// Page the shop one upgrade down, stopping at the last entry.
pub fn scroll_shop_down(state: &mut FishingState) {
    let last = state.upgrades.len().saturating_sub(1) as u16;
    state.shop_scroll = (state.shop_scroll + 1).min(last);
}

/// Page the shop one upgrade up.
pub fn scroll_shop_up(state: &mut FishingState) {
    state.shop_scroll = state.shop_scroll.saturating_sub(1);
}

/// Catch display: two decimals.
pub fn format_catch(n: f64) -> String {
    format!("{:.2}", n)
}

/// Rate display: one decimal.
pub fn format_rate(n: f64) -> String {
    format!("{:.1}", n)
}

/// Upgrade button label, e.g. `Buy Fishing Net (+10 fish/sec, costs 100.00)`.
pub fn upgrade_label(name: &str, rate: f64, cost: f64) -> String {
    format!("Buy {} (+{} fish/sec, costs {:.2})", name, rate, cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_once_then_unaffordable_purchase() {
        let mut state = FishingState::new();
        click(&mut state);
        assert!((state.economy.resources - 1.0).abs() < 1e-9);

        let result = buy_upgrade(&mut state, 0).unwrap();
        assert!(!result.is_purchased());
        assert!((state.economy.resources - 1.0).abs() < 1e-9);
        assert_eq!(state.upgrades[0].count, 0);
        assert!((state.upgrades[0].cost - 10.0).abs() < 1e-9);
    }

    #[test]
    fn purchase_scenario_ten_for_bait() {
        let mut state = FishingState::new();
        state.economy.resources = 10.0;
        let result = buy_upgrade(&mut state, 0).unwrap();

        assert!(result.is_purchased());
        assert!(state.economy.resources.abs() < 1e-9);
        assert!((state.economy.growth_rate - 0.1).abs() < 1e-9);
        assert_eq!(state.upgrades[0].count, 1);
        assert!((state.upgrades[0].cost - 11.5).abs() < 1e-9);
    }

    #[test]
    fn tick_credits_elapsed_times_rate() {
        let mut state = FishingState::new();
        state.economy.growth_rate = 2.0;
        tick(&mut state, 1.5);
        assert!((state.economy.resources - 3.0).abs() < 1e-9);
    }

    #[test]
    fn tick_zero_is_noop() {
        let mut state = FishingState::new();
        state.economy.growth_rate = 5.0;
        tick(&mut state, 0.0);
        assert_eq!(state.economy.resources, 0.0);
    }

    #[test]
    fn tick_with_nan_or_negative_span_credits_nothing() {
        let mut state = FishingState::new();
        state.economy.resources = 9.0;
        state.economy.growth_rate = 5.0;
        tick(&mut state, f64::NAN);
        tick(&mut state, -3.0);
        tick(&mut state, f64::INFINITY);
        assert_eq!(state.economy.resources, 9.0);
        assert!(!state.is_affordable(0));
    }

    #[test]
    fn clicks_enable_button_reactively() {
        let mut state = FishingState::new();
        for _ in 0..9 {
            click(&mut state);
        }
        assert!(!state.is_affordable(0));
        click(&mut state);
        assert!(state.is_affordable(0));
    }

    #[test]
    fn tick_enables_button_reactively() {
        let mut state = FishingState::new();
        state.economy.growth_rate = 1.0;
        tick(&mut state, 9.5);
        assert!(!state.is_affordable(0));
        tick(&mut state, 0.5);
        assert!(state.is_affordable(0));
    }

    #[test]
    fn purchase_disables_button_when_broke() {
        let mut state = FishingState::new();
        state.economy.resources = 10.0;
        state.refresh_affordability();
        assert!(state.is_affordable(0));
        buy_upgrade(&mut state, 0);
        assert!(!state.is_affordable(0));
    }

    #[test]
    fn out_of_range_index_is_none() {
        let mut state = FishingState::new();
        state.economy.resources = 1e9;
        assert!(buy_upgrade(&mut state, 42).is_none());
        assert!((state.economy.resources - 1e9).abs() < 1e-3);
    }

    #[test]
    fn purchase_logs_count() {
        let mut state = FishingState::new();
        state.economy.resources = 100.0;
        buy_upgrade(&mut state, 0);
        assert!(state
            .log
            .iter()
            .any(|e| e.text == "Better Bait purchased: 1"));
        assert!(state
            .log
            .iter()
            .any(|e| e.is_important && e.text == "Catch rate is now 0.1 fish/sec"));
    }

    #[test]
    fn unaffordable_attempt_does_not_log() {
        let mut state = FishingState::new();
        let before = state.log.len();
        buy_upgrade(&mut state, 4);
        assert_eq!(state.log.len(), before);
    }

    #[test]
    fn rates_from_different_upgrades_stack() {
        let mut state = FishingState::new();
        state.economy.resources = 160.0;
        buy_upgrade(&mut state, 0); // 10 → +0.1
        buy_upgrade(&mut state, 1); // 50 → +2.0
        buy_upgrade(&mut state, 2); // 100 → +10.0
        assert!(state.economy.resources.abs() < 1e-9);
        assert!((state.economy.growth_rate - 12.1).abs() < 1e-9);
        assert_eq!(state.total_upgrades_owned(), 3);
    }

    #[test]
    fn shop_scroll_is_bounded() {
        let mut state = FishingState::new();
        scroll_shop_up(&mut state);
        assert_eq!(state.shop_scroll, 0);
        for _ in 0..20 {
            scroll_shop_down(&mut state);
        }
        assert_eq!(state.shop_scroll as usize, state.upgrades.len() - 1);
        scroll_shop_up(&mut state);
        assert_eq!(state.shop_scroll as usize, state.upgrades.len() - 2);
    }

    #[test]
    fn labels() {
        assert_eq!(format_catch(1.0), "1.00");
        assert_eq!(format_catch(12.346), "12.35");
        assert_eq!(format_rate(0.1), "0.1");
        assert_eq!(format_rate(12.1), "12.1");
        assert_eq!(
            upgrade_label("Fishing Net", 10.0, 100.0),
            "Buy Fishing Net (+10 fish/sec, costs 100.00)"
        );
        assert_eq!(
            upgrade_label("Better Bait", 0.1, 11.5),
            "Buy Better Bait (+0.1 fish/sec, costs 11.50)"
        );
    }
}
