use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    Dismiss,
    MoveLeft,
    MoveRight,
    Activate,
    UseSlot(usize),
    Run,
    DiscardWeapon,
    Restart,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::Dismiss,
        KeyCode::Left => InputAction::MoveLeft,
        KeyCode::Right => InputAction::MoveRight,
        KeyCode::Enter => InputAction::Activate,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char('h') => InputAction::MoveLeft,
        KeyCode::Char('l') => InputAction::MoveRight,
        KeyCode::Char(' ') => InputAction::Activate,
        KeyCode::Char(ch @ '1'..='4') => InputAction::UseSlot(ch as usize - '1' as usize),
        KeyCode::Char('r') => InputAction::Run,
        KeyCode::Char('w') => InputAction::DiscardWeapon,
        KeyCode::Char('n') => InputAction::Restart,
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_basic_actions() {
        assert_eq!(map_key(key(KeyCode::Char('r'))), InputAction::Run);
        assert_eq!(map_key(key(KeyCode::Char('w'))), InputAction::DiscardWeapon);
        assert_eq!(map_key(key(KeyCode::Char('n'))), InputAction::Restart);
        assert_eq!(map_key(key(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(map_key(key(KeyCode::Enter)), InputAction::Activate);
    }

    #[test]
    fn digits_pick_room_slots() {
        assert_eq!(map_key(key(KeyCode::Char('1'))), InputAction::UseSlot(0));
        assert_eq!(map_key(key(KeyCode::Char('4'))), InputAction::UseSlot(3));
        assert_eq!(map_key(key(KeyCode::Char('5'))), InputAction::None);
        assert_eq!(map_key(key(KeyCode::Char('0'))), InputAction::None);
    }

    #[test]
    fn vi_keys_move_cursor() {
        assert_eq!(map_key(key(KeyCode::Char('h'))), InputAction::MoveLeft);
        assert_eq!(map_key(key(KeyCode::Char('l'))), InputAction::MoveRight);
    }
}
