//! Token classes for Setanta highlighting
//!
//! This module defines the closed set of categories a token can be
//! classified as, and their default visual styles.

use super::style::{Color, Style};

/// Flavours of identifier the rule table distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// Any identifier in ordinary position
    Plain,
    /// The name in a function definition header
    FunctionName,
    /// The parameter list body of a function definition header
    ParameterList,
}

/// Classification assigned to a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Control and structural keywords (má, le, bris, ...)
    Keyword,
    /// Builtin procedures (scríobh)
    Builtin,
    /// Boolean literals (fíor, breag)
    Atom,
    /// Numeric literals
    Number,
    /// Runs of operator characters
    Operator,
    /// Identifiers
    Variable(VariableKind),
    /// The keyword opening a function definition
    Definition,
    /// Structurally necessary text with no highlight
    None,
}

impl TokenClass {
    /// All classes, in declaration order
    pub const ALL: [TokenClass; 10] = [
        TokenClass::Keyword,
        TokenClass::Builtin,
        TokenClass::Atom,
        TokenClass::Number,
        TokenClass::Operator,
        TokenClass::Variable(VariableKind::Plain),
        TokenClass::Variable(VariableKind::FunctionName),
        TokenClass::Variable(VariableKind::ParameterList),
        TokenClass::Definition,
        TokenClass::None,
    ];

    /// Get the default terminal style for this class
    pub fn default_style(&self) -> Style {
        match self {
            TokenClass::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenClass::Builtin => Style::fg(Color::BrightMagenta),
            TokenClass::Atom => Style::fg(Color::Blue),
            TokenClass::Number => Style::fg(Color::Green),
            TokenClass::Operator => Style::fg(Color::BrightWhite),
            TokenClass::Variable(VariableKind::Plain) => Style::default(),
            TokenClass::Variable(VariableKind::FunctionName) => Style::fg(Color::BrightBlue),
            TokenClass::Variable(VariableKind::ParameterList) => Style::fg(Color::Cyan),
            TokenClass::Definition => Style::fg(Color::Blue).with_bold(),
            TokenClass::None => Style::default(),
        }
    }

    /// Stable kebab-case name, used in config files and token dumps
    pub fn name(&self) -> &'static str {
        match self {
            TokenClass::Keyword => "keyword",
            TokenClass::Builtin => "builtin",
            TokenClass::Atom => "atom",
            TokenClass::Number => "number",
            TokenClass::Operator => "operator",
            TokenClass::Variable(VariableKind::Plain) => "variable",
            TokenClass::Variable(VariableKind::FunctionName) => "function-name",
            TokenClass::Variable(VariableKind::ParameterList) => "parameter-list",
            TokenClass::Definition => "definition",
            TokenClass::None => "none",
        }
    }

    /// Parse a class from its name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        TokenClass::ALL.into_iter().find(|class| class.name() == name)
    }

    /// Style class understood by browser-based editor widgets.
    ///
    /// `None` tokens carry no class at all.
    pub fn editor_class(&self) -> Option<&'static str> {
        match self {
            TokenClass::Keyword => Some("keyword"),
            TokenClass::Builtin => Some("builtin"),
            TokenClass::Atom => Some("atom"),
            TokenClass::Number => Some("number"),
            TokenClass::Operator => Some("operator"),
            TokenClass::Variable(VariableKind::Plain) => Some("variable"),
            TokenClass::Variable(VariableKind::FunctionName) => Some("variable-2"),
            TokenClass::Variable(VariableKind::ParameterList) => Some("variable-3"),
            TokenClass::Definition => Some("def"),
            TokenClass::None => None,
        }
    }
}
