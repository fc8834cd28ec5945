//! Formula core: classification, sequence rules, the token store and the
//! left-to-right evaluator. Nothing in here does I/O.

pub mod classify;
pub mod evaluate;
pub mod sequence;
pub mod store;
pub mod token;

pub use classify::classify;
pub use evaluate::{evaluate, format_result, INVALID_RESULT};
pub use sequence::can_append;
pub use store::FormulaStore;
pub use token::{Operator, Token, TokenId, TokenKind};
