//! Ordered-choice tokenizer
//!
//! At every scan position the rules are tried in declaration order and the
//! first match wins, even when a later rule would match more text. Text no
//! rule accepts is consumed one character at a time as an unclassified
//! token, so tokenizing never fails and every byte of the input ends up in
//! exactly one token.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::rules::Rule;
use super::setanta::setanta_rules;
use super::tokens::TokenClass;
use crate::error::Result;

/// A classified, contiguous span of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Classification of the span
    pub class: TokenClass,
    /// The source text of the span
    pub text: &'a str,
    /// Byte offset where the token starts (inclusive)
    pub start: usize,
    /// Byte offset where the token ends (exclusive)
    pub end: usize,
}

impl<'a> Token<'a> {
    pub fn new(class: TokenClass, text: &'a str, start: usize) -> Self {
        Self {
            class,
            text,
            start,
            end: start + text.len(),
        }
    }

    /// Length of the token in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn shifted(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
            ..self
        }
    }
}

/// A compiled, ordered rule table
#[derive(Debug, Clone)]
pub struct Tokenizer {
    rules: Vec<Rule>,
}

impl Tokenizer {
    /// Tokenizer for the Setanta language
    pub fn setanta() -> Result<Self> {
        let rules = setanta_rules()?;
        debug!(rules = rules.len(), "compiled Setanta rule table");
        Ok(Self::from_rules(rules))
    }

    /// Tokenizer over an arbitrary rule list, tried in the given order
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Lazily tokenize `text`
    pub fn tokenize<'t, 'a>(&'t self, text: &'a str) -> Tokens<'t, 'a> {
        Tokens {
            tokenizer: self,
            text,
            pos: 0,
            pending: VecDeque::new(),
        }
    }

    /// Tokenize `text` one line at a time.
    ///
    /// Each line is scanned on its own, as a host editor re-tokenizing a
    /// single edited line would. Token offsets are absolute into `text`.
    pub fn tokenize_lines<'t, 'a>(&'t self, text: &'a str) -> Lines<'t, 'a> {
        Lines {
            tokenizer: self,
            lines: text.split_inclusive('\n').enumerate(),
            offset: 0,
        }
    }

    /// Tokens produced at `pos`; never empty while `pos` is inside `text`
    fn scan_at<'a>(&self, text: &'a str, pos: usize) -> Vec<Token<'a>> {
        for rule in &self.rules {
            if let Some(tokens) = rule.apply(text, pos) {
                trace!(rule = %rule.name, offset = pos, "rule matched");
                return tokens;
            }
        }

        match text[pos..].chars().next() {
            Some(ch) => {
                trace!(offset = pos, character = ?ch, "no rule matched");
                let end = pos + ch.len_utf8();
                vec![Token::new(TokenClass::None, &text[pos..end], pos)]
            }
            None => Vec::new(),
        }
    }
}

/// Lazy token sequence over one buffer
#[derive(Debug, Clone)]
pub struct Tokens<'t, 'a> {
    tokenizer: &'t Tokenizer,
    text: &'a str,
    pos: usize,
    pending: VecDeque<Token<'a>>,
}

impl<'t, 'a> Tokens<'t, 'a> {
    /// Byte offset up to which the input has been scanned
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl<'t, 'a> Iterator for Tokens<'t, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        if self.pos >= self.text.len() {
            return None;
        }

        let tokens = self.tokenizer.scan_at(self.text, self.pos);
        debug_assert!(tokens.iter().all(|token| !token.is_empty()));
        if let Some(last) = tokens.last() {
            self.pos = last.end;
        }
        self.pending.extend(tokens);
        self.pending.pop_front()
    }
}

impl FusedIterator for Tokens<'_, '_> {}

/// Tokens of a single source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// 0-based line number
    pub index: usize,
    /// Byte offset of the first character of the line
    pub start: usize,
    /// Tokens of the line, including its terminator
    pub tokens: Vec<Token<'a>>,
}

/// Per-line token sequence
#[derive(Debug, Clone)]
pub struct Lines<'t, 'a> {
    tokenizer: &'t Tokenizer,
    lines: std::iter::Enumerate<std::str::SplitInclusive<'a, char>>,
    offset: usize,
}

impl<'t, 'a> Iterator for Lines<'t, 'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, line) = self.lines.next()?;
        let start = self.offset;
        self.offset += line.len();

        let tokens = self
            .tokenizer
            .tokenize(line)
            .map(|token| token.shifted(start))
            .collect();
        Some(Line { index, start, tokens })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::VariableKind;

    fn classes(tokenizer: &Tokenizer, text: &str) -> Vec<TokenClass> {
        tokenizer.tokenize(text).map(|t| t.class).collect()
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::setanta().unwrap();
        assert_eq!(tokenizer.tokenize("").count(), 0);
        assert_eq!(tokenizer.tokenize_lines("").count(), 0);
    }

    #[test]
    fn test_simple_statement() {
        let tokenizer = Tokenizer::setanta().unwrap();
        let tokens: Vec<_> = tokenizer.tokenize("x = 42").collect();
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["x", " ", "=", " ", "42"]);
        assert_eq!(tokens[4].class, TokenClass::Number);
        assert_eq!((tokens[4].start, tokens[4].end), (4, 6));
    }

    #[test]
    fn test_fallback_is_one_character() {
        let tokenizer = Tokenizer::setanta().unwrap();
        let tokens: Vec<_> = tokenizer.tokenize("@€").collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "€");
        assert_eq!(tokens[1].len(), 3);
        assert!(tokens.iter().all(|t| t.class == TokenClass::None));
    }

    #[test]
    fn test_definition_beats_keyword() {
        let tokenizer = Tokenizer::setanta().unwrap();
        assert_eq!(classes(&tokenizer, "gníomh")[0], TokenClass::Keyword);
        assert_eq!(classes(&tokenizer, "gníomh f()")[0], TokenClass::Definition);
    }

    #[test]
    fn test_header_emits_pending_tokens_in_order() {
        let tokenizer = Tokenizer::setanta().unwrap();
        let mut tokens = tokenizer.tokenize("gnímh f(a) x");
        assert_eq!(tokens.next().map(|t| t.class), Some(TokenClass::Definition));
        assert_eq!(tokens.offset(), 11);
        let rest: Vec<_> = tokens.map(|t| t.class).collect();
        assert_eq!(
            rest,
            vec![
                TokenClass::None,
                TokenClass::Variable(VariableKind::FunctionName),
                TokenClass::None,
                TokenClass::Variable(VariableKind::ParameterList),
                TokenClass::None,
                TokenClass::None,
                TokenClass::Variable(VariableKind::Plain),
            ]
        );
    }

    #[test]
    fn test_custom_rules() {
        let rules = vec![Rule::single("digit", "[0-9]", TokenClass::Number).unwrap()];
        let tokenizer = Tokenizer::from_rules(rules);
        assert_eq!(
            classes(&tokenizer, "1a2"),
            vec![TokenClass::Number, TokenClass::None, TokenClass::Number]
        );
    }

    #[test]
    fn test_lines_have_absolute_offsets() {
        let tokenizer = Tokenizer::setanta().unwrap();
        let lines: Vec<_> = tokenizer.tokenize_lines("má x\nbris\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].index, 1);
        assert_eq!(lines[1].start, 6);
        assert_eq!(lines[1].tokens[0].text, "bris");
        assert_eq!(lines[1].tokens[0].start, 6);
        assert_eq!(lines[1].tokens[0].class, TokenClass::Keyword);
        // Terminator belongs to the line it ends
        assert_eq!(lines[0].tokens.last().map(|t| t.text), Some("\n"));
    }
}
