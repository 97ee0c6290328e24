//! Rule scanner and parsers for the CSS subset, using chumsky
//!
//! The token stream is first split into top-level rules by tracking brace
//! depth, then each rule's selector and declarations are parsed on their own.
//! A fragment that fails to parse is dropped without affecting its neighbours.

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;
use tracing::debug;

use super::ast::{Declaration, Selector, StyleRule};
use super::lexer::{lex, Span, Token};

type Lexeme = (Token, Span);

/// One top-level construct before parsing: the tokens ahead of `{` and the
/// tokens inside the matching block, if there was one
#[derive(Debug)]
struct RawRule {
    prelude: Vec<Lexeme>,
    block: Option<Vec<Lexeme>>,
    span: Span,
}

/// Splits a token stream into [`RawRule`]s
struct RuleScanner<I> {
    tokens: I,
}

impl<I: Iterator<Item = Lexeme>> RuleScanner<I> {
    fn new(tokens: I) -> Self {
        Self { tokens }
    }

    /// Collect tokens up to the brace closing an already opened block.
    /// An unterminated block is closed at end of input.
    fn read_block(&mut self, mut end: usize) -> (Vec<Lexeme>, usize) {
        let mut depth = 1usize;
        let mut block = Vec::new();
        for (tok, span) in self.tokens.by_ref() {
            end = span.end;
            match tok {
                Token::BraceOpen => depth += 1,
                Token::BraceClose => {
                    depth -= 1;
                    if depth == 0 {
                        return (block, end);
                    }
                }
                _ => {}
            }
            block.push((tok, span));
        }
        (block, end)
    }
}

impl<I: Iterator<Item = Lexeme>> Iterator for RuleScanner<I> {
    type Item = RawRule;

    fn next(&mut self) -> Option<RawRule> {
        let mut prelude: Vec<Lexeme> = Vec::new();
        while let Some((tok, span)) = self.tokens.next() {
            let start = prelude.first().map_or(span.start, |(_, s)| s.start);
            match tok {
                Token::BraceOpen => {
                    let (block, end) = self.read_block(span.end);
                    return Some(RawRule {
                        prelude,
                        block: Some(block),
                        span: start..end,
                    });
                }
                // Block-less at-rules (`@import ...;`) and stray closing braces
                Token::Semicolon | Token::BraceClose => {
                    return Some(RawRule {
                        prelude,
                        block: None,
                        span: start..span.end,
                    });
                }
                _ => prelude.push((tok, span)),
            }
        }

        let start = prelude.first()?.1.start;
        let end = prelude.last().map_or(start, |(_, s)| s.end);
        Some(RawRule {
            prelude,
            block: None,
            span: start..end,
        })
    }
}

/// Parse style text into rules
///
/// Never fails: statements without a block are skipped, selectors that are not
/// a single class become [`Selector::Other`], and malformed declarations are
/// dropped from their rule.
pub fn parse_stylesheet(input: &str) -> Vec<StyleRule> {
    RuleScanner::new(lex(input))
        .filter_map(|raw| build_rule(input, raw))
        .collect()
}

fn build_rule(input: &str, raw: RawRule) -> Option<StyleRule> {
    let Some(block) = raw.block else {
        debug!(text = &input[raw.span.clone()], "skipping CSS statement without a block");
        return None;
    };

    let selector = match parse_selector(&raw.prelude) {
        Some(name) => Selector::Class(name),
        None => Selector::Other(source_text(input, &raw.prelude).to_string()),
    };

    let declarations = split_declarations(block)
        .into_iter()
        .filter_map(|tokens| match parse_declaration(&tokens) {
            Some((property, value_len)) => Some(Declaration {
                property: property.to_ascii_lowercase(),
                value: source_text(input, &tokens[2..2 + value_len]).trim().to_string(),
            }),
            None => {
                debug!(text = source_text(input, &tokens), "skipping malformed CSS declaration");
                None
            }
        })
        .collect();

    Some(StyleRule {
        selector,
        declarations,
        span: raw.span,
    })
}

/// Split block contents on top-level semicolons
fn split_declarations(block: Vec<Lexeme>) -> Vec<Vec<Lexeme>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    let mut depth = 0usize;

    for (tok, span) in block {
        match tok {
            Token::ParenOpen | Token::BracketOpen | Token::BraceOpen => depth += 1,
            Token::ParenClose | Token::BracketClose | Token::BraceClose => {
                depth = depth.saturating_sub(1)
            }
            Token::Semicolon if depth == 0 => {
                if !current.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
                continue;
            }
            _ => {}
        }
        current.push((tok, span));
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Source text covered by a token run
fn source_text<'s>(input: &'s str, tokens: &[Lexeme]) -> &'s str {
    match (tokens.first(), tokens.last()) {
        (Some((_, first)), Some((_, last))) => &input[first.start..last.end],
        _ => "",
    }
}

fn parse_selector(prelude: &[Lexeme]) -> Option<String> {
    let end = prelude.last().map_or(0, |(_, s)| s.end);
    let token_iter = prelude
        .iter()
        .map(|(tok, span)| (tok.clone(), SimpleSpan::from(span.clone())));

    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((end..end).into(), |(t, s): (_, _)| (t, s));

    class_selector().parse(token_stream).into_result().ok()
}

fn parse_declaration(tokens: &[Lexeme]) -> Option<(String, usize)> {
    let end = tokens.last().map_or(0, |(_, s)| s.end);
    let token_iter = tokens
        .iter()
        .map(|(tok, span)| (tok.clone(), SimpleSpan::from(span.clone())));

    let token_stream = Stream::from_iter(token_iter)
        .map((end..end).into(), |(t, s): (_, _)| (t, s));

    declaration().parse(token_stream).into_result().ok()
}

/// `.name` and nothing else
fn class_selector<'a, I>() -> impl Parser<'a, I, String, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    just(Token::Dot)
        .ignore_then(select! { Token::Ident(name) => name })
        .then_ignore(end())
}

/// `property: value [!important]`, yielding the property and the number of
/// value tokens. A trailing `!important` is accepted and discarded.
fn declaration<'a, I>() -> impl Parser<'a, I, (String, usize), extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let property = select! { Token::Ident(name) => name };

    let value = any()
        .filter(|tok: &Token| !matches!(tok, Token::Bang))
        .repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .map(|tokens| tokens.len());

    let important = just(Token::Bang)
        .ignore_then(select! { Token::Ident(word) => word })
        .filter(|word: &String| word.eq_ignore_ascii_case("important"))
        .or_not();

    property
        .then_ignore(just(Token::Colon))
        .then(value)
        .then_ignore(important)
        .then_ignore(end())
}
