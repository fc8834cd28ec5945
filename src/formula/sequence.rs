use super::token::{Token, TokenKind};

/// Whether a token of `candidate` kind may follow `last`.
///
/// Formulas alternate strictly between values (tags, numbers) and operands,
/// starting with a value. Parentheses count as ordinary operands; nothing
/// checks that they balance.
pub fn can_append(candidate: TokenKind, last: Option<&Token>) -> bool {
    let last_kind = last.map(|token| token.kind);
    match candidate {
        TokenKind::Operand => last_kind.is_some_and(TokenKind::is_value),
        TokenKind::Tag | TokenKind::Number => {
            matches!(last_kind, None | Some(TokenKind::Operand))
        }
    }
}
