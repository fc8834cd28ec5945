use super::token::{Token, TokenId, TokenKind};
use crate::suggest::Suggestion;
use tracing::debug;

/// Ordered, single-writer container for the tokens of one formula.
///
/// The store does not validate sequences; callers check
/// [`can_append`](super::can_append) before appending. The token list is
/// only reachable read-only, so every change goes through the four
/// mutating operations below.
#[derive(Debug, Default, Clone)]
pub struct FormulaStore {
    formula: Vec<Token>,
    next_id: u64,
    revision: u64,
}

impl FormulaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn formula(&self) -> &[Token] {
        &self.formula
    }

    pub fn last(&self) -> Option<&Token> {
        self.formula.last()
    }

    pub fn len(&self) -> usize {
        self.formula.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formula.is_empty()
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.formula.iter().find(|token| token.id == id)
    }

    /// Bumped on every mutation that changed the sequence.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a token with a fresh id and returns that id.
    ///
    /// A suggestion passed with a non-tag kind is dropped.
    pub fn add_tag(
        &mut self,
        value: impl Into<String>,
        kind: TokenKind,
        suggestion: Option<Suggestion>,
    ) -> TokenId {
        self.next_id += 1;
        let id = TokenId(self.next_id);
        let suggestion = if kind == TokenKind::Tag { suggestion } else { None };
        let token = Token {
            id,
            value: value.into(),
            kind,
            suggestion,
        };
        debug!(%id, kind = ?token.kind, value = %token.value, "token appended");
        self.formula.push(token);
        self.revision += 1;
        id
    }

    pub fn remove_tag(&mut self, id: TokenId) {
        let before = self.formula.len();
        self.formula.retain(|token| token.id != id);
        if self.formula.len() != before {
            debug!(%id, "token removed");
            self.revision += 1;
        }
    }

    /// Swaps value and suggestion in place; position, kind and id stay.
    pub fn update_tag(
        &mut self,
        id: TokenId,
        value: impl Into<String>,
        suggestion: Option<Suggestion>,
    ) {
        let Some(token) = self.formula.iter_mut().find(|token| token.id == id) else {
            return;
        };
        token.value = value.into();
        token.suggestion = if token.kind == TokenKind::Tag {
            suggestion
        } else {
            None
        };
        debug!(%id, value = %token.value, "token updated");
        self.revision += 1;
    }

    pub fn clear_formula(&mut self) {
        if !self.formula.is_empty() {
            debug!(count = self.formula.len(), "formula cleared");
            self.revision += 1;
        }
        self.formula.clear();
    }
}
