use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Screen};
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) => {
                        if k.kind == KeyEventKind::Press
                            && tx.blocking_send(Event::Input(InputEvent::Key(k))).is_err()
                        {
                            break;
                        }
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Resize)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {}
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Key(k) => match state.screen {
            Screen::Palette => handle_palette_screen(k),
            Screen::Shades => handle_shades_screen(k),
            Screen::Help => handle_help_screen(k),
        },
    }
}

fn handle_palette_screen(k: KeyEvent) -> Option<Action> {
    match k.code {
        // Quit
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),

        // History
        KeyCode::Char(' ') => Some(Action::Generate),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousPalette),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPalette),
        KeyCode::Char('g') => Some(Action::FirstPalette),
        KeyCode::Char('G') => Some(Action::LastPalette),

        // Columns
        KeyCode::Tab => Some(Action::NextColumn),
        KeyCode::BackTab => Some(Action::PrevColumn),
        KeyCode::Char(c @ '1'..='9') => Some(Action::SelectColumn(c as usize - '1' as usize)),
        KeyCode::Char('f') => Some(Action::CycleNotation),
        KeyCode::Enter => Some(Action::OpenShades),

        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::SetScreen(Screen::Help)),

        _ => None,
    }
}

fn handle_shades_screen(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),

        KeyCode::Up | KeyCode::Char('k') => Some(Action::ShadeUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ShadeDown),
        KeyCode::Char('e') | KeyCode::Tab => Some(Action::CycleExportFormat),
        KeyCode::Char('f') => Some(Action::CycleNotation),

        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::SetScreen(Screen::Help)),

        _ => None,
    }
}

fn handle_help_screen(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('?') | KeyCode::Enter => {
            Some(Action::Back)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Notation;
    use crate::palette::{ExportFormat, GeneratorMode};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn state_on(screen: Screen) -> AppState {
        let mut state = AppState::new(GeneratorMode::Mixed, Notation::Hex, ExportFormat::Css);
        state.screen = screen;
        state
    }

    #[test]
    fn test_palette_keys() {
        let state = state_on(Screen::Palette);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char(' '))), Some(Action::Generate));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Left)), Some(Action::PreviousPalette));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Right)), Some(Action::NextPalette));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('3'))), Some(Action::SelectColumn(2)));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::OpenShades));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_digit_keys_cover_wide_palettes() {
        let state = state_on(Screen::Palette);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('1'))), Some(Action::SelectColumn(0)));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('9'))), Some(Action::SelectColumn(8)));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('0'))), None);
        assert_eq!(map_input_to_action(&state, key(KeyCode::BackTab)), Some(Action::PrevColumn));
    }

    #[test]
    fn test_backspace_goes_back_only_off_palette() {
        assert_eq!(map_input_to_action(&state_on(Screen::Palette), key(KeyCode::Backspace)), None);
        assert_eq!(
            map_input_to_action(&state_on(Screen::Shades), key(KeyCode::Backspace)),
            Some(Action::Back)
        );
        assert_eq!(
            map_input_to_action(&state_on(Screen::Help), key(KeyCode::Backspace)),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_escape_depends_on_screen() {
        assert_eq!(
            map_input_to_action(&state_on(Screen::Palette), key(KeyCode::Esc)),
            Some(Action::Quit)
        );
        assert_eq!(
            map_input_to_action(&state_on(Screen::Shades), key(KeyCode::Esc)),
            Some(Action::Back)
        );
        assert_eq!(
            map_input_to_action(&state_on(Screen::Help), key(KeyCode::Esc)),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_shades_keys() {
        let state = state_on(Screen::Shades);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('e'))), Some(Action::CycleExportFormat));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Down)), Some(Action::ShadeDown));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char(' '))), None);
    }
}
