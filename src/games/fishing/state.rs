//! Gone Fishin' session state.

use crate::config::GameConfig;

use super::economy::Economy;
use super::upgrade::Upgrade;

/// Maximum number of log entries kept.
const LOG_CAPACITY: usize = 50;

/// Log entry for the fishing game.
#[derive(Clone, Debug)]
pub struct FishingLogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Full state of a fishing session.
pub struct FishingState {
    pub title: String,
    pub economy: Economy,
    /// Upgrades in display order.
    pub upgrades: Vec<Upgrade>,
    /// `affordable[i]` mirrors `economy.can_afford(upgrades[i].cost)`.
    /// Kept current by [`FishingState::refresh_affordability`] after each mutation.
    pub affordable: Vec<bool>,
    /// Index of the first upgrade shown when the shop is paged.
    pub shop_scroll: u16,
    pub log: Vec<FishingLogEntry>,
}

impl FishingState {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let upgrades = config.build_upgrades();
        let mut state = Self {
            title: config.title.clone(),
            economy: Economy::with_click_amount(config.click_amount),
            affordable: vec![false; upgrades.len()],
            upgrades,
            shop_scroll: 0,
            log: vec![FishingLogEntry {
                text: format!("Welcome to {}!", config.title),
                is_important: true,
            }],
        };
        state.refresh_affordability();
        state
    }

    /// Recompute which upgrade buttons are enabled.
    pub fn refresh_affordability(&mut self) {
        let economy = &self.economy;
        self.affordable.clear();
        self.affordable
            .extend(self.upgrades.iter().map(|u| economy.can_afford(u.cost)));
    }

    pub fn is_affordable(&self, idx: usize) -> bool {
        self.affordable.get(idx).copied().unwrap_or(false)
    }

    /// Number of upgrade buttons currently enabled.
    pub fn affordable_count(&self) -> usize {
        self.affordable.iter().filter(|a| **a).count()
    }

    /// Total units purchased across all upgrades.
    pub fn total_upgrades_owned(&self) -> u32 {
        self.upgrades.iter().map(|u| u.count).sum()
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(FishingLogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > LOG_CAPACITY {
            self.log.remove(0);
        }
    }
}

impl Default for FishingState {
    fn default() -> Self {
        Self::new()
    }
}
