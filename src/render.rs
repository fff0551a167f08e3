//! Output formats for tokenized source
//!
//! Every renderer writes each token's text exactly once, in order, so the
//! visible output is always the input source.

use std::borrow::Cow;
use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};

use crate::error::Result;
use crate::syntax::{Color, Position, Style, Theme, Token};

/// Write tokens with terminal colours from `theme`
pub fn render_ansi<'a, W, I>(out: &mut W, tokens: I, theme: &Theme) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Token<'a>>,
{
    for token in tokens {
        let style = theme.style_for(token.class);
        if style.is_default() {
            queue!(out, Print(token.text))?;
            continue;
        }
        apply_style(out, style)?;
        queue!(out, Print(token.text), SetAttribute(Attribute::Reset), ResetColor)?;
    }
    out.flush()?;
    Ok(())
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> Result<()> {
    if style.fg != Color::Default {
        queue!(out, SetForegroundColor(style.fg.into()))?;
    }
    if style.bg != Color::Default {
        queue!(out, SetBackgroundColor(style.bg.into()))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

/// Write tokens as an HTML fragment using the editor style classes
pub fn render_html<'a, W, I>(out: &mut W, tokens: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Token<'a>>,
{
    write!(out, "<pre class=\"cm-s-default\">")?;
    for token in tokens {
        let text = escape_html(token.text);
        match token.class.editor_class() {
            Some(class) => write!(out, "<span class=\"cm-{class}\">{text}</span>")?,
            None => write!(out, "{text}")?,
        }
    }
    writeln!(out, "</pre>")?;
    Ok(())
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Write one `LINE:COL<TAB>CLASS<TAB>TEXT` row per token
///
/// `tokens` must come from `source`, in order.
pub fn render_token_table<'a, W, I>(out: &mut W, source: &str, tokens: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Token<'a>>,
{
    let mut pos = Position::START;
    let mut offset = 0;
    for token in tokens {
        if let Some(skipped) = source.get(offset..token.start) {
            pos = pos.advance(skipped);
        }
        writeln!(out, "{}\t{}\t{:?}", pos, token.class.name(), token.text)?;
        pos = pos.advance(token.text);
        offset = token.end;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{TokenClass, Tokenizer};

    fn plain_theme() -> Theme {
        let mut theme = Theme::default();
        for class in TokenClass::ALL {
            theme.set(class, Style::default());
        }
        theme
    }

    #[test]
    fn test_ansi_plain_theme_is_verbatim() {
        let tokenizer = Tokenizer::setanta().unwrap();
        let source = "má x >= 1 { scríobh(x) }\n";
        let mut out = Vec::new();
        render_ansi(&mut out, tokenizer.tokenize(source), &plain_theme()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), source);
    }

    #[test]
    fn test_ansi_styles_keywords() {
        let tokenizer = Tokenizer::setanta().unwrap();
        let mut out = Vec::new();
        render_ansi(&mut out, tokenizer.tokenize("bris"), &Theme::default()).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("\x1b["));
        assert!(rendered.contains("bris"));
    }

    #[test]
    fn test_html() {
        let tokenizer = Tokenizer::setanta().unwrap();
        let mut out = Vec::new();
        render_html(&mut out, tokenizer.tokenize("x<1")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<pre class=\"cm-s-default\"><span class=\"cm-variable\">x</span>\
             <span class=\"cm-operator\">&lt;</span>\
             <span class=\"cm-number\">1</span></pre>\n"
        );
    }

    #[test]
    fn test_escape_html() {
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
        assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
    }

    #[test]
    fn test_token_table() {
        let tokenizer = Tokenizer::setanta().unwrap();
        let source = "fíor\nbreag";
        let mut out = Vec::new();
        render_token_table(&mut out, source, tokenizer.tokenize(source)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1:1\tatom\t\"fíor\"\n1:5\tnone\t\"\\n\"\n2:1\tatom\t\"breag\"\n"
        );
    }
}
