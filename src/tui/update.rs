//! State transitions: Action → Transition, then applied to the App.
//!
//! `update` is pure and decides what an action means. `apply` is the one
//! place the App changes in response.

use tracing::warn;

use crate::builtin::{NERV_NAME, TEXTUAL_DARK_NAME};

use super::state::{Action, App, Transition};

/// Pure state transition function.
pub fn update(active_theme: &str, action: &Action) -> Transition {
    match action {
        Action::Quit => Transition::Quit,
        Action::ToggleTheme => Transition::SwitchTheme(toggle_target(active_theme).to_string()),
    }
}

/// Theme the toggle moves to: away from nerv goes to the default dark
/// theme, anything else goes to nerv.
///
/// The toggle does not remember the starting theme. Starting on
/// `textual-light` and toggling twice lands on `textual-dark`.
pub fn toggle_target(active_theme: &str) -> &'static str {
    if active_theme == NERV_NAME {
        TEXTUAL_DARK_NAME
    } else {
        NERV_NAME
    }
}

/// Carry out a transition.
pub fn apply(app: &mut App, transition: Transition) {
    match transition {
        Transition::Quit => app.should_quit = true,
        Transition::SwitchTheme(name) => {
            // Unknown target leaves the current theme in place
            if let Err(e) = app.registry.set_active(&name) {
                warn!("cannot toggle theme: {}", e);
            }
        }
    }
}

/// Update then apply.
pub fn dispatch(app: &mut App, action: &Action) {
    let transition = update(app.theme_name(), action);
    apply(app, transition);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{self, TEXTUAL_LIGHT_NAME};
    use crate::registry::ThemeRegistry;

    fn nerv_app() -> App {
        let mut registry = ThemeRegistry::with_builtins();
        registry.set_active(NERV_NAME).unwrap();
        App::new(registry)
    }

    #[test]
    fn quit_action_quits() {
        assert_eq!(update(NERV_NAME, &Action::Quit), Transition::Quit);

        let mut app = nerv_app();
        dispatch(&mut app, &Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn toggle_from_nerv_goes_to_dark() {
        assert_eq!(
            update(NERV_NAME, &Action::ToggleTheme),
            Transition::SwitchTheme(TEXTUAL_DARK_NAME.to_string())
        );
    }

    #[test]
    fn toggle_from_anything_else_goes_to_nerv() {
        assert_eq!(toggle_target(TEXTUAL_DARK_NAME), NERV_NAME);
        assert_eq!(toggle_target("textual-light"), NERV_NAME);
    }

    #[test]
    fn toggling_twice_restores_theme() {
        let mut app = nerv_app();
        dispatch(&mut app, &Action::ToggleTheme);
        assert_eq!(app.theme_name(), TEXTUAL_DARK_NAME);
        dispatch(&mut app, &Action::ToggleTheme);
        assert_eq!(app.theme_name(), NERV_NAME);
        assert!(!app.should_quit);
    }

    #[test]
    fn toggling_twice_from_light_lands_on_dark() {
        let mut registry = ThemeRegistry::with_builtins();
        registry.set_active(TEXTUAL_LIGHT_NAME).unwrap();
        let mut app = App::new(registry);

        dispatch(&mut app, &Action::ToggleTheme);
        assert_eq!(app.theme_name(), NERV_NAME);
        dispatch(&mut app, &Action::ToggleTheme);
        assert_eq!(app.theme_name(), TEXTUAL_DARK_NAME);
    }

    #[test]
    fn toggle_to_unregistered_theme_stays_put() {
        let mut app = App::new(ThemeRegistry::new(builtin::nerv()));
        dispatch(&mut app, &Action::ToggleTheme);
        assert_eq!(app.theme_name(), NERV_NAME);
    }
}
