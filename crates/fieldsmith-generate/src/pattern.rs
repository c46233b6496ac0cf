//! Placeholder templates.
//!
//! Supports placeholders:
//! - `{UPPER}` - one uppercase ASCII letter
//! - `{lower}` - one lowercase ASCII letter
//! - `{digit}` - one decimal digit
//! - `{random}` - a 6-character alphanumeric token
//!
//! Any other text, including unrecognized braces, is copied verbatim.

use rand::RngCore;

use fieldsmith_core::FieldType;

use crate::generators::primitives::{random_alphanumeric, random_digit, random_letter};

pub const RANDOM_TOKEN_LEN: usize = 6;

/// One segment of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Upper,
    Lower,
    Digit,
    Random,
}

impl Token {
    fn placeholder(&self) -> Option<&'static str> {
        match self {
            Token::Literal(_) => None,
            Token::Upper => Some("{UPPER}"),
            Token::Lower => Some("{lower}"),
            Token::Digit => Some("{digit}"),
            Token::Random => Some("{random}"),
        }
    }
}

const PLACEHOLDERS: [Token; 4] = [Token::Upper, Token::Lower, Token::Digit, Token::Random];

/// A template split into literal and placeholder segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Replace every placeholder with freshly drawn characters.
    pub fn expand(&self, rng: &mut dyn RngCore) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Upper => out.push(random_letter(rng, true)),
                Token::Lower => out.push(random_letter(rng, false)),
                Token::Digit => out.push(random_digit(rng)),
                Token::Random => out.push_str(&random_alphanumeric(rng, RANDOM_TOKEN_LEN)),
            }
        }
        out
    }

    fn push_literal(&mut self, ch: char) {
        if let Some(Token::Literal(text)) = self.tokens.last_mut() {
            text.push(ch);
        } else {
            self.tokens.push(Token::Literal(ch.to_string()));
        }
    }

    fn push(&mut self, token: Token) {
        match token {
            Token::Literal(text) => text.chars().for_each(|ch| self.push_literal(ch)),
            other => self.tokens.push(other),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            match token {
                Token::Literal(text) => f.write_str(text)?,
                other => f.write_str(other.placeholder().unwrap_or_default())?,
            }
        }
        Ok(())
    }
}

/// Split a template into tokens.
pub fn compile(template: &str) -> Pattern {
    let mut pattern = Pattern::default();
    let mut rest = template;

    while let Some(ch) = rest.chars().next() {
        if ch == '{' {
            let matched = PLACEHOLDERS.iter().find(|token| {
                token
                    .placeholder()
                    .is_some_and(|placeholder| rest.starts_with(placeholder))
            });
            if let Some(token) = matched {
                let len = token.placeholder().map_or(1, str::len);
                pattern.push(token.clone());
                rest = &rest[len..];
                continue;
            }
        }
        pattern.push_literal(ch);
        rest = &rest[ch.len_utf8()..];
    }

    pattern
}

/// Expand a template in one step.
///
/// The field type does not change how placeholders expand; it is part of the
/// call so callers can route every pattern field through the same entry point.
pub fn expand(template: &str, _field_type: FieldType, rng: &mut dyn RngCore) -> String {
    compile(template).expand(rng)
}

/// Derive a template from an observed password by character class.
pub fn derive_password_pattern(sample: &str) -> String {
    let mut pattern = Pattern::default();
    for ch in sample.chars() {
        let token = if ch.is_ascii_uppercase() {
            Token::Upper
        } else if ch.is_ascii_lowercase() {
            Token::Lower
        } else if ch.is_ascii_digit() {
            Token::Digit
        } else {
            Token::Literal(ch.to_string())
        };
        pattern.push(token);
    }
    pattern.to_string()
}

/// Derive a template from an observed phone number by masking its digits.
pub fn derive_phone_pattern(sample: &str) -> String {
    let mut pattern = Pattern::default();
    for ch in sample.chars() {
        if ch.is_ascii_digit() {
            pattern.push(Token::Digit);
        } else {
            pattern.push_literal(ch);
        }
    }
    pattern.to_string()
}
