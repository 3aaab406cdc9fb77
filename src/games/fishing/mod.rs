//! Gone Fishin': an incremental fishing clicker.

pub mod actions;
pub mod economy;
pub mod logic;
pub mod render;
pub mod state;
pub mod upgrade;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::config::GameConfig;
use crate::games::Game;
use crate::input::{ClickState, InputEvent};

use actions::{upgrade_index, CATCH_FISH, SHOP_SCROLL_DOWN, SHOP_SCROLL_UP};
use state::FishingState;

pub struct FishingGame {
    pub state: FishingState,
}

impl FishingGame {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: FishingState::from_config(config),
        }
    }
}

impl Game for FishingGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        let id = match event {
            InputEvent::Click(id) => *id,
        };
        match id {
            CATCH_FISH => logic::click(&mut self.state),
            SHOP_SCROLL_UP => logic::scroll_shop_up(&mut self.state),
            SHOP_SCROLL_DOWN => logic::scroll_shop_down(&mut self.state),
            _ => {
                return match upgrade_index(id) {
                    Some(idx) => logic::buy_upgrade(&mut self.state, idx).is_some(),
                    None => false,
                };
            }
        }
        true
    }

    fn tick(&mut self, elapsed_seconds: f64) {
        logic::tick(&mut self.state, elapsed_seconds);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
