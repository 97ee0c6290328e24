//! Lexer for the CSS subset found in SVG `<style>` blocks, using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // Delimiters
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("!")]
    Bang,

    // Combinators and the universal selector
    #[token("*")]
    Star,
    #[token(">")]
    Greater,
    #[token("+")]
    Plus,
    #[token("~")]
    Tilde,

    // Literals - identifiers may carry a single leading hyphen (vendor prefixes)
    // and any non-ASCII character
    #[regex(r"-?([a-zA-Z_]|[^\x00-\x7F])([a-zA-Z0-9_-]|[^\x00-\x7F])*", |lex| lex.slice().to_string())]
    Ident(String),

    #[regex(r"@-?[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice()[1..].to_string())]
    AtKeyword(String),

    /// `#abc` - a hex color in values, an id selector in preludes
    #[regex(r"#[a-zA-Z0-9_-]+", |lex| lex.slice()[1..].to_string())]
    Hash(String),

    /// Number with an optional unit suffix, kept verbatim (`12`, `.5`, `10px`, `50%`)
    #[regex(r"([0-9]+(\.[0-9]+)?|\.[0-9]+)[a-zA-Z%]*", |lex| lex.slice().to_string())]
    Number(String),

    #[regex(r#""([^"\\]|\\.)*""#, unquote)]
    #[regex(r#"'([^'\\]|\\.)*'"#, unquote)]
    String(String),

    // Comments and HTML comment markers (skip)
    #[token("/*", skip_block_comment)]
    BlockComment,
    #[token("<!--", logos::skip)]
    Cdo,
    #[token("-->", logos::skip)]
    Cdc,

    /// Any input the lexer does not recognize
    Unknown,
}

/// Skip to just past the closing `*/`, or to end of input if there is none
fn skip_block_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let len = match lex.remainder().find("*/") {
        Some(end) => end + 2,
        None => lex.remainder().len(),
    };
    lex.bump(len);
    logos::Skip
}

fn unquote(lex: &mut logos::Lexer<Token>) -> String {
    let s = lex.slice();
    s[1..s.len() - 1].to_string()
}

/// Lex input string into tokens with spans
///
/// Unrecognized input is kept as [`Token::Unknown`] so that a rule containing
/// it fails to parse instead of silently changing meaning.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Unknown), span))
}
