//! Game configuration: title, click power and the upgrade catalog.
//!
//! Defaults reproduce the built-in catalog. A page can override any field by
//! embedding `<script id="game-config" type="application/json">` with a JSON
//! object; missing fields fall back to the defaults.

use tracing::warn;
use serde::{Deserialize, Serialize};

use crate::games::fishing::economy::CLICK_AMOUNT;
use crate::games::fishing::upgrade::{default_catalog, Upgrade, COST_MULTIPLIER};

/// DOM id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "game-config";

/// One catalog entry as written in config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpgradeSpec {
    pub name: String,
    pub cost: f64,
    pub rate: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub click_amount: f64,
    pub cost_multiplier: f64,
    pub upgrades: Vec<UpgradeSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Gone Fishin'".into(),
            click_amount: CLICK_AMOUNT,
            cost_multiplier: COST_MULTIPLIER,
            upgrades: default_catalog()
                .into_iter()
                .map(|u| UpgradeSpec {
                    name: u.name,
                    cost: u.cost,
                    rate: u.rate,
                    description: u.description,
                })
                .collect(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON override and sanitize it.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Parse a JSON override, falling back to defaults on any error.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                warn!("invalid game config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Drop entries that would break the economy's invariants.
    fn validated(mut self) -> Self {
        if !(self.cost_multiplier.is_finite() && self.cost_multiplier >= 1.0) {
            warn!(
                "cost_multiplier {} must be >= 1, using {}",
                self.cost_multiplier, COST_MULTIPLIER
            );
            self.cost_multiplier = COST_MULTIPLIER;
        }
        if !(self.click_amount.is_finite() && self.click_amount > 0.0) {
            warn!(
                "click_amount {} must be positive, using {}",
                self.click_amount, CLICK_AMOUNT
            );
            self.click_amount = CLICK_AMOUNT;
        }
        self.upgrades.retain(|u| {
            let ok = u.cost.is_finite() && u.cost > 0.0 && u.rate.is_finite() && u.rate >= 0.0;
            if !ok {
                warn!(
                    "dropping upgrade {:?}: cost must be > 0 and rate >= 0",
                    u.name
                );
            }
            ok
        });
        self
    }

    /// Build the live upgrade list for a new session.
    pub fn build_upgrades(&self) -> Vec<Upgrade> {
        self.upgrades
            .iter()
            .map(|spec| {
                let mut u = Upgrade::new(&spec.name, spec.cost, spec.rate, &spec.description);
                u.cost_multiplier = self.cost_multiplier;
                u
            })
            .collect()
    }

    /// Read the inline config element from the page, if any.
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json_or_default(&json),
            _ => Self::default(),
        }
    }
}
