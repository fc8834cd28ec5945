use super::classify::is_fraction_literal;
use super::token::{Operator, Token, TokenKind};

pub const INVALID_RESULT: &str = "Invalid";

/// Numeric reading of a value token; operands have none.
pub fn token_value(token: &Token) -> Option<f64> {
    match token.kind {
        TokenKind::Tag => Some(
            token
                .suggestion
                .as_ref()
                .map_or(0.0, |suggestion| suggestion.value.as_f64()),
        ),
        TokenKind::Number => Some(parse_number(&token.value)),
        TokenKind::Operand => None,
    }
}

/// Parses a number literal: decimal, or `a/b` computed as `a ÷ b`.
pub fn parse_number(literal: &str) -> f64 {
    let literal = literal.trim();
    if is_fraction_literal(literal) {
        if let Some((numerator, denominator)) = literal.split_once('/') {
            let numerator = numerator.parse::<f64>().unwrap_or(f64::NAN);
            let denominator = denominator.parse::<f64>().unwrap_or(f64::NAN);
            return numerator / denominator;
        }
    }
    literal.parse::<f64>().unwrap_or(f64::NAN)
}

/// Latched state of the left-to-right reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Reduction {
    result: f64,
    pending: Option<Operator>,
}

impl Reduction {
    fn start() -> Self {
        Self {
            result: 0.0,
            pending: None,
        }
    }

    fn step(self, index: usize, token: &Token) -> Self {
        if let Some(operator) = token.operator() {
            if operator.is_grouping() {
                return self;
            }
            return Self {
                pending: Some(operator),
                ..self
            };
        }

        let Some(value) = token_value(token) else {
            return self;
        };

        if index == 0 {
            return Self {
                result: value,
                ..self
            };
        }

        match self.pending {
            // The operator stays latched until the next operand replaces it.
            Some(operator) => Self {
                result: apply(operator, self.result, value, token.kind),
                ..self
            },
            None => self,
        }
    }
}

fn apply(operator: Operator, lhs: f64, rhs: f64, rhs_kind: TokenKind) -> f64 {
    match operator {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div => {
            // Only a literal zero is masked; a tag worth zero still divides by zero.
            let divisor = if rhs_kind == TokenKind::Number && rhs == 0.0 {
                1.0
            } else {
                rhs
            };
            lhs / divisor
        }
        Operator::Pow => lhs.powf(rhs),
        Operator::Open | Operator::Close => lhs,
    }
}

/// Reduces a formula strictly left to right, without precedence or grouping.
pub fn evaluate(formula: &[Token]) -> f64 {
    formula
        .iter()
        .enumerate()
        .fold(Reduction::start(), |state, (index, token)| {
            state.step(index, token)
        })
        .result
}

/// Renders a result, or [`INVALID_RESULT`] when it is NaN or infinite.
pub fn format_result(result: f64) -> String {
    if !result.is_finite() {
        return INVALID_RESULT.to_string();
    }
    if result == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    result.to_string()
}
