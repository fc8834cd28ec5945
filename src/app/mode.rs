#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing into the formula input
    Editing,
    /// Choosing a different suggestion for an existing tag
    Reselecting,
    Quit,
}
