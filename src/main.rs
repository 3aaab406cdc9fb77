mod config;
mod games;
mod input;
mod logging;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use config::GameConfig;
use games::fishing::FishingGame;
use games::Game;
use input::{ClickState, InputEvent};
use tracing::{debug, info};
use ratzilla::event::{MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::FrameClock;

/// Map a page-space click to a registered target via the grid container's rect.
fn dom_pixel_to_event(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<InputEvent> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();
    let event = cs.resolve_pixel(click_x, click_y, rect.width(), rect.height());

    debug!(
        "click: pixel=({}, {}), event={:?}, targets={}",
        mouse_x,
        mouse_y,
        event,
        cs.targets.len()
    );

    event
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    logging::init();

    let config = GameConfig::from_document();
    set_document_title(&config.title);
    info!(
        "starting {} with {} upgrades",
        config.title,
        config.upgrades.len()
    );

    let game: Rc<RefCell<Box<dyn Game>>> =
        Rc::new(RefCell::new(Box::new(FishingGame::new(&config))));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let clock = Rc::new(RefCell::new(FrameClock::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let event = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                dom_pixel_to_event(mouse_event.x, mouse_event.y, &cs)
            };

            if let Some(event) = event {
                game.borrow_mut().handle_input(&event);
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let elapsed = clock.borrow_mut().advance(time::now_ms());
            let mut game = game.borrow_mut();
            game.tick(elapsed);

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            game.render(f, size, &click_state);
        }
    });

    Ok(())
}
