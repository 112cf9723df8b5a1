use crate::app::App;
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::Dismiss => app.show_help = false,
        InputAction::MoveLeft => app.move_cursor(false),
        InputAction::MoveRight => app.move_cursor(true),
        InputAction::Activate => app.use_cursor(),
        InputAction::UseSlot(slot) => app.use_slot(slot),
        InputAction::Run => app.run_from_room(),
        InputAction::DiscardWeapon => app.discard_weapon(),
        InputAction::Restart => app.restart(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_and_help_toggle_flags() {
        let mut app = App::new(5);
        dispatch(&mut app, InputAction::ToggleHelp);
        assert!(app.show_help);
        dispatch(&mut app, InputAction::Dismiss);
        assert!(!app.show_help);
        dispatch(&mut app, InputAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn run_then_run_again_is_refused() {
        let mut app = App::new(5);
        dispatch(&mut app, InputAction::Run);
        assert!(app.engine.just_ran());
        dispatch(&mut app, InputAction::Run);
        assert_eq!(app.status_line, "Cannot run from rooms consecutively!");
    }
}
