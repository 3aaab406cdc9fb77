//! Catch counter and passive growth rate.

/// Fish credited per manual click on the fish button.
pub const CLICK_AMOUNT: f64 = 1.0;

/// The player's running economy: current catch and passive rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Economy {
    /// Current fish on hand. Fractional, since passive growth accrues per frame.
    pub resources: f64,
    /// Passive catch rate in fish per second.
    pub growth_rate: f64,
    /// Everything ever credited by positive deltas (stats only).
    pub caught_all_time: f64,
    /// Manual clicks on the fish button.
    pub total_clicks: u64,
    /// Fish credited per manual click.
    pub click_amount: f64,
}

impl Economy {
    pub fn new() -> Self {
        Self::with_click_amount(CLICK_AMOUNT)
    }

    pub fn with_click_amount(click_amount: f64) -> Self {
        Self {
            resources: 0.0,
            growth_rate: 0.0,
            caught_all_time: 0.0,
            total_clicks: 0,
            click_amount,
        }
    }

    /// Add a signed amount to the catch.
    ///
    /// Total over all inputs. Callers debiting a purchase must check
    /// [`Economy::can_afford`] first; nothing here stops the count going negative.
    pub fn apply_delta(&mut self, amount: f64) {
        self.resources += amount;
        if amount > 0.0 {
            self.caught_all_time += amount;
        }
    }

    /// Credit `elapsed_seconds × growth_rate`.
    ///
    /// Negative or non-finite elapsed values count as zero.
    pub fn advance_time(&mut self, elapsed_seconds: f64) {
        if !elapsed_seconds.is_finite() || elapsed_seconds <= 0.0 {
            return;
        }
        self.apply_delta(elapsed_seconds * self.growth_rate);
    }

    /// One manual catch from the fish button.
    pub fn catch_by_hand(&mut self) {
        self.apply_delta(self.click_amount);
        self.total_clicks += 1;
    }

    /// Inclusive: exactly `cost` on hand is enough.
    pub fn can_afford(&self, cost: f64) -> bool {
        self.resources >= cost
    }
}

impl Default for Economy {
    fn default() -> Self {
        Self::new()
    }
}
