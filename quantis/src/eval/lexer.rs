//! Lexer for unit formulas
//!
//! Tokenizes a formula into identifiers, numbers and the operators
//! `+ - * / ^ ( )` using the Logos library.
//!
//! Number tokens are scanned greedily: once a digit starts a number, every
//! following letter, digit, `_` and `.` belongs to it, plus a sign directly
//! after an exponent marker. `1_.5` or `0b102` therefore arrive at the
//! literal parser whole and get a precise diagnosis instead of being split
//! into confusing fragments.

use logos::{Lexer, Logos};

use super::error::EvalError;
use crate::common::Span;

/// Token kinds
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Unit or caller-supplied name (case-sensitive)
    #[regex(r"[A-Za-z_]+")]
    Ident,

    #[regex(r"[0-9]", lex_number)]
    Number,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("^")]
    Caret,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    Eof,
}

impl TokenKind {
    /// Human-readable description used in diagnostics
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Caret => "`^`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Eof => "end of formula",
        }
    }
}

/// A token with its source text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

fn lex_number(lex: &mut Lexer<TokenKind>) -> bool {
    let hex = lex.slice() == "0" && lex.remainder().starts_with('x');
    let mut prev = lex.slice().chars().last().unwrap_or('0');
    let mut len = 0;

    for c in lex.remainder().chars() {
        let is_sign = matches!(c, '+' | '-')
            && if hex {
                matches!(prev, 'p' | 'P')
            } else {
                matches!(prev, 'e' | 'E')
            };
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '.' || is_sign) {
            break;
        }
        len += c.len_utf8();
        prev = c;
    }

    lex.bump(len);
    true
}

/// Lex a formula into tokens, ending with [`TokenKind::Eof`]
pub fn lex(source: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = match result {
            Ok(kind) => kind,
            Err(()) => {
                let found = source
                    .get(span.start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(EvalError::UnexpectedCharacter {
                    found: found.to_string(),
                    span: Span::new(span.start, span.start + found.len_utf8()).into(),
                });
            }
        };

        tokens.push(Token {
            kind,
            span: Span::new(span.start, span.end),
            text: source[span].to_string(),
        });
    }

    // Add EOF token
    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::point(source.len()),
        text: String::new(),
    });

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_lex_simple() {
        let tokens = lex("kg / m^3").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].text, "kg");
        assert_eq!(tokens[1].kind, TokenKind::Slash);
        assert_eq!(tokens[2].kind, TokenKind::Ident);
        assert_eq!(tokens[3].kind, TokenKind::Caret);
        assert_eq!(tokens[4].kind, TokenKind::Number);
        assert_eq!(tokens[4].text, "3");
        assert_eq!(tokens[5].kind, TokenKind::Eof);
    }

    #[test]
    fn test_lex_operators() {
        assert_eq!(
            kinds("+ - * / ^ ( )"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Caret,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_numbers_are_greedy() {
        let tokens = lex("32.174_049*lb").unwrap();
        assert_eq!(tokens[0].text, "32.174_049");
        assert_eq!(tokens[1].kind, TokenKind::Star);

        let tokens = lex("1_.5").unwrap();
        assert_eq!(tokens[0].text, "1_.5");
        assert_eq!(tokens[1].kind, TokenKind::Eof);

        let tokens = lex("2m").unwrap();
        assert_eq!(tokens[0].text, "2m");
    }

    #[test]
    fn test_lex_exponent_sign() {
        let tokens = lex("1.5e-3-2").unwrap();
        assert_eq!(tokens[0].text, "1.5e-3");
        assert_eq!(tokens[1].kind, TokenKind::Minus);
        assert_eq!(tokens[2].text, "2");

        // `e` is a hex digit, so the minus is an operator here
        let tokens = lex("0x1e-3").unwrap();
        assert_eq!(tokens[0].text, "0x1e");
        assert_eq!(tokens[1].kind, TokenKind::Minus);

        let tokens = lex("0x1p-3").unwrap();
        assert_eq!(tokens[0].text, "0x1p-3");
    }

    #[test]
    fn test_lex_spans() {
        let tokens = lex("  km *h").unwrap();
        assert_eq!(tokens[0].span, Span::new(2, 4));
        assert_eq!(tokens[1].span, Span::new(5, 6));
        assert_eq!(tokens[2].span, Span::new(6, 7));
        assert_eq!(tokens[3].span, Span::point(7));
    }

    #[test]
    fn test_lex_unexpected_character() {
        let err = lex("m % s").unwrap_err();
        assert!(matches!(
            err,
            EvalError::UnexpectedCharacter { ref found, .. } if found == "%"
        ));
        assert_eq!(err.span().offset(), 2);
    }
}
