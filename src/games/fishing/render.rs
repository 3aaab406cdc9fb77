//! Gone Fishin' rendering: fish button, catch counters, upgrade shop and log.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{line_rows, ClickableList};

use super::actions::{BUY_UPGRADE_BASE, CATCH_FISH, SHOP_SCROLL_DOWN, SHOP_SCROLL_UP};
use super::logic::{format_catch, format_rate, upgrade_label};
use super::state::FishingState;

/// Fish button art. Every row is part of the click target.
const FISH_ART: &[&str] = &[
    "  ><(((º>    ",
    "   🐟 🐟 🐟   ",
    "    <º)))><  ",
];

/// Height of the fish panel: borders + art + blank + 3 counter lines.
const FISH_PANEL_HEIGHT: u16 = 2 + 3 + 1 + 3;

/// Rows per upgrade entry in the full shop: button, purchased count, description.
const ROWS_PER_UPGRADE: u16 = 3;

pub fn render(
    state: &FishingState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let narrow = is_narrow_layout(area.width);

    // Log panel on the right when there is room for it
    let (main_area, side_log) = if narrow {
        (area, None)
    } else {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (h_chunks[0], Some(h_chunks[1]))
    };

    let shop_height = state.upgrades.len() as u16 * ROWS_PER_UPGRADE + 2;
    let constraints: Vec<Constraint> = if narrow {
        vec![
            Constraint::Length(3),
            Constraint::Length(FISH_PANEL_HEIGHT),
            Constraint::Min(shop_height),
            Constraint::Length(8),
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Length(FISH_PANEL_HEIGHT),
            Constraint::Min(5),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(main_area);

    render_title(state, f, chunks[0]);
    render_fish_panel(state, f, chunks[1], click_state);
    render_shop(state, f, chunks[2], click_state);

    match side_log {
        Some(log_area) => render_log(state, f, log_area),
        None => render_log(state, f, chunks[3]),
    }
}

fn render_title(state: &FishingState, f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        state.title.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_fish_panel(
    state: &FishingState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let economy = &state.economy;
    let fish_style = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);

    let mut cl = ClickableList::new();
    for row in FISH_ART {
        cl.push_clickable(Line::from(Span::styled(*row, fish_style)), CATCH_FISH);
    }
    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        format!("{} fish caught", format_catch(economy.resources)),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!(
            "Current Catch Rate: {} fish/sec",
            format_rate(economy.growth_rate)
        ),
        Style::default().fg(Color::White),
    )));
    cl.push(Line::from(Span::styled(
        format!(
            "clicks {} · all-time {}",
            economy.total_clicks,
            format_catch(economy.caught_all_time)
        ),
        Style::default().fg(Color::DarkGray),
    )));

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);
    }

    let widget = Paragraph::new(cl.into_lines())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" tap the fish "),
        );
    f.render_widget(widget, area);
}

fn render_shop(
    state: &FishingState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);

    let full = full_shop_list(state);
    let cl = if full.visual_height(inner_width) <= inner_height {
        full
    } else {
        paged_shop_list(state, inner_width, inner_height)
    };

    let title = match state.affordable_count() {
        0 => format!(" Upgrades · owned {} ", state.total_upgrades_owned()),
        n => format!(
            " Upgrades · owned {} · {} ready ",
            state.total_upgrades_owned(),
            n
        ),
    };

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, 0, inner_width);
    }

    let widget = Paragraph::new(cl.into_lines())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(title),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn buy_button(state: &FishingState, i: usize) -> Line<'static> {
    let upgrade = &state.upgrades[i];
    let button_style = if state.is_affordable(i) {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(Span::styled(
        upgrade_label(&upgrade.name, upgrade.next_unit_gain(), upgrade.cost),
        button_style,
    ))
}

/// Button, purchase count and description for every upgrade.
fn full_shop_list(state: &FishingState) -> ClickableList<'static> {
    let mut cl = ClickableList::new();

    for (i, upgrade) in state.upgrades.iter().enumerate() {
        cl.push_clickable(buy_button(state, i), BUY_UPGRADE_BASE + i as u16);
        let mut owned = vec![Span::styled(
            format!("  {} purchased: {}", upgrade.name, upgrade.count),
            Style::default().fg(Color::White),
        )];
        if upgrade.count > 0 {
            owned.push(Span::styled(
                format!(" · {} fish/sec", format_rate(upgrade.total_rate())),
                Style::default().fg(Color::Cyan),
            ));
        }
        if let Some(secs) = upgrade.payback_seconds() {
            owned.push(Span::styled(
                format!(" · pays back in {:.0}s", secs),
                Style::default().fg(Color::DarkGray),
            ));
        }
        cl.push(Line::from(owned));
        cl.push(Line::from(Span::styled(
            format!("  {}", upgrade.description),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    cl
}

/// Buttons only, starting at `shop_scroll`, with paging rows when entries
/// are hidden above or below. At least one button is always shown.
fn paged_shop_list(
    state: &FishingState,
    inner_width: u16,
    inner_height: u16,
) -> ClickableList<'static> {
    let total = state.upgrades.len();
    let first = (state.shop_scroll as usize).min(total.saturating_sub(1));
    let pager_style = Style::default().fg(Color::Yellow);

    let mut cl = ClickableList::new();
    if first > 0 {
        cl.push_clickable(
            Line::from(Span::styled(format!("▲ {} more", first), pager_style)),
            SHOP_SCROLL_UP,
        );
    }

    let mut used = cl.visual_height(inner_width);
    let mut shown = first;
    for i in first..total {
        let button = buy_button(state, i);
        let rows = line_rows(&button, inner_width);
        let pager_reserve = u16::from(i + 1 < total);
        if shown > first && used + rows + pager_reserve > inner_height {
            break;
        }
        cl.push_clickable(button, BUY_UPGRADE_BASE + i as u16);
        used += rows;
        shown = i + 1;
    }

    if shown < total {
        cl.push_clickable(
            Line::from(Span::styled(
                format!("▼ {} more", total - shown),
                pager_style,
            )),
            SHOP_SCROLL_DOWN,
        );
    }
    cl
}

fn render_log(state: &FishingState, f: &mut Frame, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let start = state.log.len().saturating_sub(visible_height);

    let log_lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|entry| {
            let style = if entry.is_important {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(entry.text.as_str(), style))
        })
        .collect();

    let widget = Paragraph::new(log_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Log "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::fishing::logic;
    use ratzilla::ratatui::backend::TestBackend;
    use ratzilla::ratatui::buffer::Buffer;
    use ratzilla::ratatui::Terminal;

    fn draw_full(state: &FishingState, width: u16, height: u16) -> (Buffer, ClickState) {
        let click_state = Rc::new(RefCell::new(ClickState::new()));
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(state, f, area, &click_state);
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (buffer, click_state.replace(ClickState::new()))
    }

    fn draw(state: &FishingState, width: u16, height: u16) -> ClickState {
        draw_full(state, width, height).1
    }

    /// Position of the first cell where `needle` starts, scanning row by row.
    fn find_text(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let chars: Vec<String> = needle.chars().map(|c| c.to_string()).collect();
        let area = buf.area;
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                let fits = chars.iter().enumerate().all(|(k, ch)| {
                    let cx = x + k as u16;
                    cx < area.x + area.width && buf[(cx, y)].symbol() == ch.as_str()
                });
                if fits {
                    return Some((x, y));
                }
            }
        }
        None
    }

    fn has_button(cs: &ClickState, i: usize) -> bool {
        cs.targets
            .iter()
            .any(|t| t.action_id == BUY_UPGRADE_BASE + i as u16)
    }

    #[test]
    fn fish_art_rows_are_clickable() {
        let state = FishingState::new();
        let cs = draw(&state, 100, 40);
        // title (3 rows) + panel top border
        let first_art_row = 3 + 1;
        for r in 0..FISH_ART.len() as u16 {
            assert_eq!(cs.hit_test(10, first_art_row + r), Some(CATCH_FISH));
        }
        // counter line below the art is not a button
        assert_eq!(cs.hit_test(10, first_art_row + FISH_ART.len() as u16 + 1), None);
    }

    #[test]
    fn every_upgrade_has_a_button() {
        let state = FishingState::new();
        for (w, h) in [(100, 40), (100, 24), (40, 42), (40, 60)] {
            let cs = draw(&state, w, h);
            for i in 0..state.upgrades.len() {
                assert!(
                    has_button(&cs, i),
                    "{}x{}: no button for {}",
                    w,
                    h,
                    state.upgrades[i].name
                );
            }
        }
    }

    #[test]
    fn short_screen_pages_through_every_upgrade() {
        let mut state = FishingState::new();
        let mut seen = vec![false; state.upgrades.len()];
        for _ in 0..state.upgrades.len() {
            let cs = draw(&state, 100, 18);
            for (i, s) in seen.iter_mut().enumerate() {
                *s |= has_button(&cs, i);
            }
            if !cs.targets.iter().any(|t| t.action_id == SHOP_SCROLL_DOWN) {
                break;
            }
            logic::scroll_shop_down(&mut state);
        }
        assert!(seen.iter().all(|s| *s), "unreachable upgrades: {:?}", seen);
    }

    #[test]
    fn paged_shop_offers_scroll_back_up() {
        let mut state = FishingState::new();
        let cs = draw(&state, 100, 18);
        assert!(cs.targets.iter().any(|t| t.action_id == SHOP_SCROLL_DOWN));
        assert!(!cs.targets.iter().any(|t| t.action_id == SHOP_SCROLL_UP));

        logic::scroll_shop_down(&mut state);
        let (buf, cs) = draw_full(&state, 100, 18);
        assert!(cs.targets.iter().any(|t| t.action_id == SHOP_SCROLL_UP));
        assert!(find_text(&buf, "▲ 1 more").is_some());
        assert!(!has_button(&cs, 0));
    }

    #[test]
    fn narrow_layout_still_registers_buttons() {
        let state = FishingState::new();
        let cs = draw(&state, 40, 60);
        assert!(cs.targets.iter().any(|t| t.action_id == CATCH_FISH));
        assert!(cs.targets.iter().any(|t| t.action_id == BUY_UPGRADE_BASE));
    }

    #[test]
    fn catch_count_shows_two_decimals() {
        let mut state = FishingState::new();
        let (buf, _) = draw_full(&state, 100, 40);
        assert!(find_text(&buf, "0.00 fish caught").is_some());

        logic::click(&mut state);
        let (buf, _) = draw_full(&state, 100, 40);
        assert!(find_text(&buf, "1.00 fish caught").is_some());
    }

    #[test]
    fn purchase_updates_rate_count_and_price() {
        let mut state = FishingState::new();
        let (buf, _) = draw_full(&state, 100, 40);
        assert!(find_text(&buf, "Current Catch Rate: 0.0 fish/sec").is_some());

        state.economy.resources = 10.0;
        logic::buy_upgrade(&mut state, 0);
        let (buf, _) = draw_full(&state, 100, 40);
        assert!(find_text(&buf, "Current Catch Rate: 0.1 fish/sec").is_some());
        assert!(find_text(&buf, "Better Bait purchased: 1").is_some());
        assert!(find_text(&buf, "Buy Better Bait (+0.1 fish/sec, costs 11.50)").is_some());
    }

    #[test]
    fn button_style_follows_affordability() {
        let mut state = FishingState::new();
        state.economy.resources = 60.0;
        state.refresh_affordability();
        let (buf, _) = draw_full(&state, 100, 40);

        for (i, upgrade) in state.upgrades.iter().enumerate() {
            let label = format!("Buy {}", upgrade.name);
            let (x, y) = find_text(&buf, &label)
                .unwrap_or_else(|| panic!("no label for {}", upgrade.name));
            let cell = &buf[(x, y)];
            if state.is_affordable(i) {
                assert_eq!(cell.fg, Color::Green, "{}", upgrade.name);
                assert!(cell.modifier.contains(Modifier::BOLD), "{}", upgrade.name);
            } else {
                assert_eq!(cell.fg, Color::DarkGray, "{}", upgrade.name);
                assert!(!cell.modifier.contains(Modifier::BOLD), "{}", upgrade.name);
            }
        }
        assert!(state.is_affordable(1));
        assert!(!state.is_affordable(2));
    }
}
