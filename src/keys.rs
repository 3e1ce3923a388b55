// Keyboard shortcuts, kept free of browser types so they can be tested on the host.
use awop_core::Action;

/// Actions for a `KeyboardEvent.key`, given whether a token is focused.
#[inline]
pub fn actions_for_key(key: &str, focused: bool) -> Vec<Action> {
    match key {
        "ArrowLeft" if focused => vec![Action::Navigate(-1)],
        "ArrowRight" if focused => vec![Action::Navigate(1)],
        "Escape" => vec![Action::ClearFocus, Action::DismissHelp],
        _ => Vec::new(),
    }
}
