/// Everything the app can be asked to do, decoupled from the key or mouse
/// event that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoTop,
    GoBottom,
    PageUp,
    PageDown,
    DrillIn,
    NavigateBack,
    CycleFocus,

    // Search
    StartSearch,
    SearchInput(char),
    SearchConfirm,
    SearchCancel,
    NextSuggestion,
    PrevSuggestion,
    ToggleMatchMode,

    // Menus and panels
    ToggleMenu(usize),
    ResetPanel,

    // Global
    ToggleHelp,
    SaveConfig,
    Quit,
    ClickAt(u16, u16),
    Resize(u16, u16),
    Tick,
    None,
}
