//! Syntax highlighting for Setanta
//!
//! This module provides:
//! - The token classes and their default styles
//! - Ordered regex rules and the Setanta rule table
//! - The tokenizer that applies them to source text
//! - Themes and display positions used when rendering tokens

mod position;
mod rules;
mod setanta;
mod style;
mod tokenizer;
mod tokens;

pub use position::Position;
pub use rules::{Outcome, Rule};
pub use setanta::setanta_rules;
pub use style::{Color, Style, Theme};
pub use tokenizer::{Line, Lines, Token, Tokenizer, Tokens};
pub use tokens::{TokenClass, VariableKind};
