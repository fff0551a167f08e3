//! Setanta language rule table
//!
//! Rules are listed in the order they are tried. The first one matching at
//! the scan position wins, so the definition header must stay ahead of the
//! plain keyword rule.

use super::rules::{Outcome, Rule};
use super::tokens::{TokenClass, VariableKind};
use crate::error::Result;

/// Latin letters plus the accented Gaelic vowels
const LETTER: &str = "a-zA-ZáéíóúÁÉÍÓÚ";

/// Whitespace that never crosses a line break
const HSPACE: &str = r"[\s&&[^\n]]+";

/// gníomh, with the unaccented and gnímh spellings
const GNIOMH: &str = "gn(?:[ií]omh|ímh)";

/// Characters that can continue an identifier
fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, 'á' | 'é' | 'í' | 'ó' | 'ú' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | '$')
}

/// Build the ordered rule table.
///
/// Anything no rule matches is consumed one character at a time by the
/// tokenizer as an unclassified token.
pub fn setanta_rules() -> Result<Vec<Rule>> {
    let rules = vec![
        // gníomh ainm(a, b)
        Rule::new(
            "function_header",
            &format!(r"({GNIOMH})({HSPACE})([{LETTER}]+)(\()(.*)(\))"),
            Outcome::Groups(vec![
                Some(TokenClass::Definition),
                None,
                Some(TokenClass::Variable(VariableKind::FunctionName)),
                None,
                Some(TokenClass::Variable(VariableKind::ParameterList)),
                None,
            ]),
        )?,
        Rule::single(
            "keyword",
            &format!(r"{GNIOMH}|má|le|bris|idir|nuair{HSPACE}a|nó"),
            TokenClass::Keyword,
        )?
        .whole_word(is_identifier_char),
        Rule::single("builtin", r"scr[ií]obh", TokenClass::Builtin)?.whole_word(is_identifier_char),
        // Block-opening má / nó; shadowed by the keyword rule in practice
        Rule::new(
            "block_keyword",
            r"(má|nó)([ {]|$)",
            Outcome::Groups(vec![Some(TokenClass::Keyword), None]),
        )?,
        Rule::single("atom", r"f[ií]or|breag", TokenClass::Atom)?.whole_word(is_identifier_char),
        Rule::single(
            "number",
            r"(?i:0x[0-9a-f]+|[-+]?(?:\.[0-9]+|[0-9]+\.?[0-9]*)(?:e[-+]?[0-9]+)?)",
            TokenClass::Number,
        )?,
        Rule::single("operator", r"[-+/*=<>!]+", TokenClass::Operator)?,
        Rule::single(
            "identifier",
            &format!(r"[{LETTER}$]+"),
            TokenClass::Variable(VariableKind::Plain),
        )?,
    ];

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule<'r>(rules: &'r [Rule], name: &str) -> &'r Rule {
        rules.iter().find(|r| r.name == name).unwrap()
    }

    fn whole_match(rule: &Rule, text: &str) -> bool {
        rule.apply(text, 0)
            .map(|tokens| tokens.last().map(|t| t.end) == Some(text.len()))
            .unwrap_or(false)
    }

    #[test]
    fn test_table_order() {
        let rules = setanta_rules().unwrap();
        let names: Vec<_> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "function_header",
                "keyword",
                "builtin",
                "block_keyword",
                "atom",
                "number",
                "operator",
                "identifier",
            ]
        );
    }

    #[test]
    fn test_keyword_variants() {
        let rules = setanta_rules().unwrap();
        let keyword = rule(&rules, "keyword");
        for word in ["gníomh", "gnímh", "má", "le", "bris", "idir", "nuair a", "nó"] {
            assert!(whole_match(keyword, word), "{word} should be a keyword");
        }
        assert!(!whole_match(keyword, "nuair\na"));
        assert!(keyword.apply("leis", 0).is_none());
        assert!(keyword.apply("máthair", 0).is_none());
        assert!(keyword.apply("má$x", 0).is_none());
        // Only identifier characters block a keyword
        assert!(whole_match(keyword, "bris") && keyword.apply("bris_", 0).is_some());
        assert_eq!(keyword.apply("leñ", 0).unwrap()[0].text, "le");
        assert_eq!(keyword.apply("má1", 0).unwrap()[0].text, "má");
    }

    #[test]
    fn test_builtin_and_atoms() {
        let rules = setanta_rules().unwrap();
        assert!(whole_match(rule(&rules, "builtin"), "scríobh"));
        assert!(whole_match(rule(&rules, "builtin"), "scriobh"));
        assert!(rule(&rules, "builtin").apply("scríobhaí", 0).is_none());

        let atom = rule(&rules, "atom");
        assert!(whole_match(atom, "fíor"));
        assert!(whole_match(atom, "fior"));
        assert!(whole_match(atom, "breag"));
        assert!(atom.apply("breagach", 0).is_none());
        assert!(atom.apply("fíor$", 0).is_none());
        assert!(rule(&rules, "builtin").apply("scríobh$", 0).is_none());
    }

    #[test]
    fn test_numbers() {
        let rules = setanta_rules().unwrap();
        let number = rule(&rules, "number");
        for literal in ["0x1F", "0xff", "42", "-3.14e2", "+7", ".5", "1.", "6E-3"] {
            assert!(whole_match(number, literal), "{literal} should be a number");
        }
        assert!(number.apply("x1", 0).is_none());
        assert!(number.apply("-", 0).is_none());
    }

    #[test]
    fn test_operators_and_identifiers() {
        let rules = setanta_rules().unwrap();
        assert!(whole_match(rule(&rules, "operator"), ">="));
        assert!(whole_match(rule(&rules, "operator"), "!=+"));
        assert!(whole_match(rule(&rules, "identifier"), "ÁitÍ$"));
        assert!(rule(&rules, "identifier").apply("_x", 0).is_none());
    }

    #[test]
    fn test_block_keyword() {
        let rules = setanta_rules().unwrap();
        let block = rule(&rules, "block_keyword");
        let tokens = block.apply("má{", 0).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].class, TokenClass::Keyword);
        assert_eq!(tokens[1].class, TokenClass::None);
        // At end of input the delimiter group is empty and emits nothing
        assert_eq!(block.apply("nó", 0).unwrap().len(), 1);
    }
}
