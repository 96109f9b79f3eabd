use crate::palette::Palette;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Commit(Commit),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Resize,
}

/// A history change held back until the transition finishes
#[derive(Debug, Clone)]
pub enum Commit {
    Append(Palette),
    GoTo(usize),
}
