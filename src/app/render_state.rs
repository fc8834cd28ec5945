use crate::app::mode::AppMode;
use crate::formula::{Token, TokenId};
use crate::suggest::Suggestion;

/// Re-selection popup contents
#[derive(Debug, Clone, PartialEq)]
pub struct ReselectView {
    pub token_id: TokenId,
    pub candidates: Vec<Suggestion>,
    pub selected: Option<usize>,
}

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub tokens: Vec<Token>,
    pub input: String,
    pub suggestions: Vec<Suggestion>,
    pub show_suggestions: bool,
    pub loading: bool,
    pub highlighted: Option<usize>,
    /// Formatted result, or "Invalid"
    pub result: String,
    pub reselect: Option<ReselectView>,
}

impl RenderState {
    /// Whether the token with `id` is focused for re-selection
    pub fn is_focused(&self, id: TokenId) -> bool {
        self.reselect
            .as_ref()
            .is_some_and(|view| view.token_id == id)
    }
}
