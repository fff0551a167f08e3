//! setanta-highlight - syntax highlighting for the Setanta language
//!
//! Classifies Setanta source text into keyword, literal, operator and
//! identifier tokens for an editor or terminal to colour.
//!
//! ```
//! use setanta_highlight::{TokenClass, Tokenizer};
//!
//! let tokenizer = Tokenizer::setanta()?;
//! let classes: Vec<_> = tokenizer.tokenize("má fíor").map(|t| t.class).collect();
//! assert_eq!(classes, [TokenClass::Keyword, TokenClass::None, TokenClass::Atom]);
//! # Ok::<(), setanta_highlight::HighlightError>(())
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod syntax;

pub use config::Config;
pub use error::{HighlightError, Result};
pub use syntax::{Token, TokenClass, Tokenizer, VariableKind};
