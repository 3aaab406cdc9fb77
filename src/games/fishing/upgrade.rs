//! Upgrade catalog entries and the purchase rule.

use super::economy::Economy;

/// Price growth applied after each purchase of the same upgrade.
pub const COST_MULTIPLIER: f64 = 1.15;

/// A purchasable upgrade that adds to the passive catch rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Upgrade {
    pub name: String,
    pub description: String,
    /// Price of the next unit. Compounds by `cost_multiplier` per purchase.
    pub cost: f64,
    /// Fish per second added by each unit.
    pub rate: f64,
    pub count: u32,
    pub cost_multiplier: f64,
}

/// Outcome of a purchase attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum PurchaseResult {
    /// Bought one unit. Carries the post-purchase values for display.
    Purchased {
        cost: f64,
        count: u32,
        growth_rate: f64,
    },
    /// Not enough fish on hand. Nothing was changed.
    Unaffordable { cost: f64, shortfall: f64 },
}

impl PurchaseResult {
    #[cfg(test)]
    pub fn is_purchased(&self) -> bool {
        matches!(self, PurchaseResult::Purchased { .. })
    }
}

impl Upgrade {
    pub fn new(name: &str, cost: f64, rate: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            cost,
            rate,
            count: 0,
            cost_multiplier: COST_MULTIPLIER,
        }
    }

    /// Catch rate gained by buying the next unit.
    pub fn next_unit_gain(&self) -> f64 {
        self.rate
    }

    /// Seconds of this upgrade's own output needed to repay its price.
    pub fn payback_seconds(&self) -> Option<f64> {
        if self.rate > 0.0 {
            Some(self.cost / self.rate)
        } else {
            None
        }
    }

    /// Total catch rate contributed by all purchased units.
    pub fn total_rate(&self) -> f64 {
        self.count as f64 * self.rate
    }
}

/// Try to buy one unit of `upgrade`, paying from `economy`.
///
/// The debit uses the price before this purchase; the multiplier only
/// raises the price of the next one.
pub fn purchase(upgrade: &mut Upgrade, economy: &mut Economy) -> PurchaseResult {
    if !economy.can_afford(upgrade.cost) {
        return PurchaseResult::Unaffordable {
            cost: upgrade.cost,
            shortfall: upgrade.cost - economy.resources,
        };
    }

    economy.apply_delta(-upgrade.cost);
    economy.growth_rate += upgrade.rate;
    upgrade.count += 1;
    upgrade.cost *= upgrade.cost_multiplier;

    PurchaseResult::Purchased {
        cost: upgrade.cost,
        count: upgrade.count,
        growth_rate: economy.growth_rate,
    }
}

/// The starting catalog, in display order.
pub fn default_catalog() -> Vec<Upgrade> {
    vec![
        Upgrade::new(
            "Better Bait",
            10.0,
            0.1,
            "with better bait, the fish practically hook themselves",
        ),
        Upgrade::new(
            "Upgraded Fishing Rod",
            50.0,
            2.0,
            "an angler's pride is their rod",
        ),
        Upgrade::new(
            "Fishing Net",
            100.0,
            10.0,
            "who says you have to reel in fish to catch 'em?",
        ),
        Upgrade::new("Fishing Boat", 1000.0, 25.0, "bigger boat"),
        Upgrade::new("Assistant Angler", 5000.0, 150.0, "more hands on deck!"),
    ]
}
