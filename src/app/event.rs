use crate::formula::TokenId;
use crate::suggest::Suggestion;

/// Keys with commit semantics in the formula input
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    Enter,
    Space,
    Backspace,
}

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    /// The whole input text was replaced
    InputChanged(String),
    /// A printable character typed at the end of the input
    TypeChar(char),
    Key(Key),
    SuggestionPicked(Suggestion),
    /// Pick the highlighted dropdown entry
    PickHighlighted,
    HighlightNext,
    HighlightPrevious,
    /// Resolve a tag to the suggestion called `name`
    Reselect { token_id: TokenId, name: String },
    /// Focus the last tag for re-selection
    BeginReselect,
    FocusNextTag,
    FocusPreviousTag,
    CandidateNext,
    CandidatePrevious,
    ApplyCandidate,
    /// Leave re-selection, or hide the dropdown
    Cancel,
    Clear,
    Quit,
}
