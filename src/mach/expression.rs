use super::{Operation, Var};
use crate::error;
use crate::lang::token::{Literal, Operator, Token};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluation
///
/// There is no precedence grammar. An expression is one operand or
/// exactly one binary operation `operand op operand` with `+ - * /`
/// or one of the comparisons `= < >`.
/// An operand is a number or numeric variable, optionally preceded by
/// a minus sign since the lexer never produces negative literals.

pub fn evaluate(tokens: &[Token], var: &mut Var) -> Result<f64> {
    match binary_operator(tokens) {
        Some((index, op)) => {
            let lhs = operand(&tokens[..index], var)?;
            let rhs = operand(&tokens[index + 1..], var)?;
            Operation::binary(op, lhs, rhs)
        }
        None => operand(tokens, var),
    }
}

pub fn operand(tokens: &[Token], var: &mut Var) -> Result<f64> {
    match tokens {
        [token] => value(token, var),
        [Token::Operator(Operator::Minus), token] if token.is_value() => {
            Operation::negate(value(token, var)?)
        }
        _ => Err(error!(SyntaxError; "INVALID EXPRESSION")),
    }
}

/// Strings have no operators; only a literal or a string variable.
pub fn string_value(tokens: &[Token], var: &mut Var) -> Result<String> {
    match tokens {
        [Token::Literal(Literal::String(s))] => Ok(s.clone()),
        [Token::Ident(ident)] => var.fetch_string(ident),
        [Token::Literal(Literal::Number(_))] => Err(error!(TypeMismatch)),
        _ => Err(error!(SyntaxError; "INVALID STRING EXPRESSION")),
    }
}

fn value(token: &Token, var: &mut Var) -> Result<f64> {
    match token {
        Token::Literal(Literal::Number(s)) => s
            .parse::<f64>()
            .map_err(|_| error!(SyntaxError; "INVALID NUMBER")),
        Token::Ident(ident) => var.fetch_number(ident),
        Token::Literal(Literal::String(_)) => Err(error!(TypeMismatch)),
        _ => Err(error!(SyntaxError; "INVALID NUMERIC VALUE")),
    }
}

/// The first operator that follows a value.
fn binary_operator(tokens: &[Token]) -> Option<(usize, Operator)> {
    tokens
        .windows(2)
        .enumerate()
        .find_map(|(index, pair)| match &pair[1] {
            Token::Operator(op) if pair[0].is_value() => Some((index + 1, *op)),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::token::Ident;
    use crate::lang::Line;
    use crate::mach::Val;

    fn tokens(s: &str) -> Vec<Token> {
        let line = Line::new(&format!("LET {}", s));
        line.tokens()[1..].to_vec()
    }

    fn eval(s: &str, var: &mut Var) -> Result<f64> {
        evaluate(&tokens(s), var)
    }

    #[test]
    fn test_single_values() {
        let mut var = Var::new();
        assert_eq!(eval("42", &mut var), Ok(42.0));
        assert_eq!(eval("0.125", &mut var), Ok(0.125));
        assert_eq!(eval("- 3", &mut var), Ok(-3.0));
        assert_eq!(eval("X", &mut var), Ok(0.0));
    }

    #[test]
    fn test_binary() {
        let mut var = Var::new();
        var.store(&Ident::new("A"), Val::Number(4.0)).unwrap();
        assert_eq!(eval("A + 1", &mut var), Ok(5.0));
        assert_eq!(eval("A*A", &mut var), Ok(16.0));
        assert_eq!(eval("-A - -1", &mut var), Ok(-3.0));
        assert_eq!(eval("A / 8", &mut var), Ok(0.5));
        assert_eq!(eval("2 * -A", &mut var), Ok(-8.0));
    }

    #[test]
    fn test_no_precedence_grammar() {
        let mut var = Var::new();
        assert!(eval("1 + 2 + 3", &mut var).is_err());
        assert!(eval("(1 + 2)", &mut var).is_err());
        assert!(eval("1 2", &mut var).is_err());
        assert!(eval("A < > 2", &mut var).is_err());
        assert!(eval("", &mut var).is_err());
    }

    #[test]
    fn test_comparison() {
        let mut var = Var::new();
        var.store(&Ident::new("A"), Val::Number(2.0)).unwrap();
        assert_eq!(eval("A = 2", &mut var), Ok(-1.0));
        assert_eq!(eval("A < 2", &mut var), Ok(0.0));
        assert_eq!(eval("-A < 2", &mut var), Ok(-1.0));
    }

    #[test]
    fn test_division_by_zero() {
        let mut var = Var::new();
        let e = eval("6 / 0", &mut var).unwrap_err();
        assert_eq!(e.to_string(), "DIVISION BY ZERO");
    }

    #[test]
    fn test_type_mismatch() {
        let mut var = Var::new();
        assert!(eval("A$ + 1", &mut var).is_err());
        assert!(eval("\"X\"", &mut var).is_err());
        assert_eq!(
            string_value(&tokens("\"HI\""), &mut var),
            Ok("HI".to_string())
        );
        assert!(string_value(&tokens("5"), &mut var).is_err());
        assert!(string_value(&tokens("N"), &mut var).is_err());
    }
}
