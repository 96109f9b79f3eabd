use super::state::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SetScreen(Screen),
    Back,

    // History
    Generate,
    PreviousPalette,
    NextPalette,
    FirstPalette,
    LastPalette,

    // Palette screen
    SelectColumn(usize),
    NextColumn,
    PrevColumn,
    CycleNotation,
    OpenShades,

    // Shades screen
    ShadeUp,
    ShadeDown,
    CycleExportFormat,

    Resize,
}
