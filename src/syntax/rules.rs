//! Pattern rules for tokenizing
//!
//! A rule pairs a regex, anchored at the scan position, with the
//! classification of whatever it matches.

use regex::{Regex, RegexBuilder};

use super::tokenizer::Token;
use super::tokens::TokenClass;
use crate::error::{HighlightError, Result};

/// What a rule produces when its pattern matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The whole match becomes one token of this class
    Single(TokenClass),
    /// Capture group `i + 1` becomes a token of class `i`; `None` leaves it unclassified
    Groups(Vec<Option<TokenClass>>),
}

/// A single ordered rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging and error messages
    pub name: String,
    /// Compiled pattern, anchored at the start of the haystack
    pub pattern: Regex,
    /// Classification of the match
    pub outcome: Outcome,
    /// Characters that may not directly follow a match
    pub word_char: Option<fn(char) -> bool>,
}

impl Rule {
    /// Compile a rule.
    ///
    /// `$` matches at end of line so a rule sees the same text whether the
    /// buffer is scanned whole or line by line.
    pub fn new(name: &str, pattern: &str, outcome: Outcome) -> Result<Self> {
        let regex = RegexBuilder::new(&format!(r"\A(?:{pattern})"))
            .multi_line(true)
            .build()
            .map_err(|source| HighlightError::Pattern {
                rule: name.to_string(),
                source,
            })?;

        if let Outcome::Groups(classes) = &outcome {
            let groups = regex.captures_len() - 1;
            if classes.len() != groups {
                return Err(HighlightError::GroupCount {
                    rule: name.to_string(),
                    mapped: classes.len(),
                    groups,
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            pattern: regex,
            outcome,
            word_char: None,
        })
    }

    /// Reject matches followed by a character for which `word_char` holds,
    /// so a fixed word never matches the head of a longer identifier
    pub fn whole_word(mut self, word_char: fn(char) -> bool) -> Self {
        self.word_char = Some(word_char);
        self
    }

    fn ends_word(&self, rest: &str, end: usize) -> bool {
        match (self.word_char, rest[end..].chars().next()) {
            (Some(word_char), Some(next)) => !word_char(next),
            _ => true,
        }
    }

    /// Shorthand for a rule emitting a single token
    pub fn single(name: &str, pattern: &str, class: TokenClass) -> Result<Self> {
        Self::new(name, pattern, Outcome::Single(class))
    }

    /// Try the rule at byte offset `pos` of `text`.
    ///
    /// Returns the tokens it produces, in order and covering exactly the
    /// matched span, or `None` if the pattern does not match there. An empty
    /// match is treated as no match.
    pub fn apply<'a>(&self, text: &'a str, pos: usize) -> Option<Vec<Token<'a>>> {
        let rest = text.get(pos..)?;
        if rest.is_empty() {
            return None;
        }

        match &self.outcome {
            Outcome::Single(class) => {
                let m = self.pattern.find(rest)?;
                if m.end() == 0 || !self.ends_word(rest, m.end()) {
                    return None;
                }
                Some(vec![Token::new(*class, &rest[..m.end()], pos)])
            }
            Outcome::Groups(classes) => {
                let caps = self.pattern.captures(rest)?;
                let end = caps.get(0)?.end();
                if end == 0 || !self.ends_word(rest, end) {
                    return None;
                }

                let mut tokens = Vec::with_capacity(classes.len());
                let mut cursor = 0;
                for (index, class) in classes.iter().enumerate() {
                    let group = match caps.get(index + 1) {
                        Some(group) if !group.is_empty() && group.start() >= cursor => group,
                        _ => continue,
                    };
                    if group.start() > cursor {
                        tokens.push(Token::new(TokenClass::None, &rest[cursor..group.start()], pos + cursor));
                    }
                    let class = class.unwrap_or(TokenClass::None);
                    tokens.push(Token::new(class, group.as_str(), pos + group.start()));
                    cursor = group.end();
                }
                if cursor < end {
                    tokens.push(Token::new(TokenClass::None, &rest[cursor..end], pos + cursor));
                }
                Some(tokens)
            }
        }
    }
}
