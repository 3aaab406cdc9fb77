//! Semantic action IDs for Gone Fishin' click targets.
//!
//! Registered during render and dispatched via `InputEvent::Click`.

/// The big fish button.
pub const CATCH_FISH: u16 = 0;

/// Shop paging when the upgrade list does not fit its panel.
pub const SHOP_SCROLL_UP: u16 = 10;
pub const SHOP_SCROLL_DOWN: u16 = 11;

/// Upgrade purchase (base + catalog index).
pub const BUY_UPGRADE_BASE: u16 = 100;

/// Map an action ID back to an upgrade index, if it is a purchase action.
pub fn upgrade_index(action_id: u16) -> Option<usize> {
    action_id
        .checked_sub(BUY_UPGRADE_BASE)
        .map(|i| i as usize)
}
