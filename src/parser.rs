//! Parse argument-list text into a labeled tree using PEST.

use crate::ast::{ParseNode, PropertyNode};
use pest::error::{ErrorVariant, InputLocation, LineColLocation};
use pest::iterators::Pair;
use pest::Token;
use pest::Parser;
use pest_derive::Parser as PestParser;
use std::num::ParseIntError;

#[derive(PestParser)]
#[grammar = "grammar.pest"]
struct ArgumentsGrammar;

/// Default bound on array/object nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Parse error at line {line}, column {column} (offset {offset}): expected {}", .expected.join(", "))]
    GrammarParse {
        offset: usize,
        line: usize,
        column: usize,
        /// Rules the grammar attempted at the furthest failure point.
        expected: Vec<String>,
        /// Human-readable rendering with the offending line and a caret.
        rendered: String,
    },
    #[error("Integer out of range at offset {offset}: {text}")]
    IntegerDecode {
        text: String,
        offset: usize,
        #[source]
        source: ParseIntError,
    },
    #[error("Nesting deeper than {limit} at offset {offset}")]
    NestingTooDeep { offset: usize, limit: usize },
    #[error("Unexpected rule in parse tree: {0}")]
    UnexpectedRule(String),
}

impl ParseError {
    /// Byte offset the error points at, when it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::GrammarParse { offset, .. }
            | ParseError::IntegerDecode { offset, .. }
            | ParseError::NestingTooDeep { offset, .. } => Some(*offset),
            ParseError::UnexpectedRule(_) => None,
        }
    }
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        let offset = match err.location {
            InputLocation::Pos(p) => p,
            InputLocation::Span((start, _)) => start,
        };
        let (line, column) = match err.line_col {
            LineColLocation::Pos(lc) => lc,
            LineColLocation::Span(lc, _) => lc,
        };
        let expected = match &err.variant {
            ErrorVariant::ParsingError { positives, .. } => {
                positives.iter().map(|r| format!("{:?}", r)).collect()
            }
            ErrorVariant::CustomError { message } => vec![message.clone()],
        };
        ParseError::GrammarParse {
            offset,
            line,
            column,
            expected,
            rendered: err.to_string(),
        }
    }
}

/// Parse argument-list text into its top-level nodes, with the default nesting limit.
pub fn parse_tree(input: &str) -> Result<Vec<ParseNode>, ParseError> {
    parse_tree_with_limit(input, DEFAULT_MAX_DEPTH)
}

/// Parse argument-list text into its top-level nodes.
///
/// A parse nested deeper than `max_depth` arrays/objects is rejected before
/// any node is built.
pub fn parse_tree_with_limit(input: &str, max_depth: usize) -> Result<Vec<ParseNode>, ParseError> {
    let pairs = ArgumentsGrammar::parse(Rule::argument_list, input).map_err(|e| {
        let err = ParseError::from(e);
        if let ParseError::GrammarParse { rendered, .. } = &err {
            log::debug!("argument list failed to parse:\n{}", rendered);
        }
        err
    })?;
    let list = pairs
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::UnexpectedRule("empty parse".to_string()))?;
    check_depth(&list, max_depth)?;
    list.into_inner()
        .filter(|p| p.as_rule() != Rule::EOI)
        .map(build_node)
        .collect()
}

/// Reject trees nested deeper than `limit` arrays/objects.
///
/// Walks the flat token stream of the parse, so the check itself does not recurse.
fn check_depth(list: &Pair<Rule>, limit: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for token in list.clone().tokens() {
        match token {
            Token::Start { rule: Rule::array | Rule::object, pos } => {
                depth += 1;
                if depth > limit {
                    return Err(ParseError::NestingTooDeep { offset: pos.pos(), limit });
                }
            }
            Token::End { rule: Rule::array | Rule::object, .. } => depth -= 1,
            _ => {}
        }
    }
    Ok(())
}

fn build_node(pair: Pair<Rule>) -> Result<ParseNode, ParseError> {
    match pair.as_rule() {
        Rule::array => {
            let elements = pair
                .into_inner()
                .map(build_array_element)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ParseNode::ArrayElements(elements))
        }
        Rule::object => {
            let properties = pair
                .into_inner()
                .map(build_property)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ParseNode::Properties(properties))
        }
        Rule::integer => Ok(ParseNode::Integer {
            text: pair.as_str().to_string(),
            offset: pair.as_span().start(),
        }),
        Rule::string => {
            let content = pair
                .into_inner()
                .next()
                .ok_or_else(|| ParseError::UnexpectedRule("string: missing content".to_string()))?;
            Ok(ParseNode::String(unescape(content.as_str())))
        }
        Rule::address => Ok(ParseNode::Address(pair.as_str().to_string())),
        Rule::null => Ok(ParseNode::Null),
        Rule::flag_list => Ok(ParseNode::FlagList(pair.as_str().to_string())),
        other => Err(ParseError::UnexpectedRule(format!("{:?}", other))),
    }
}

fn build_array_element(pair: Pair<Rule>) -> Result<ParseNode, ParseError> {
    if pair.as_rule() != Rule::array_element {
        return Err(ParseError::UnexpectedRule(format!("{:?}", pair.as_rule())));
    }
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::UnexpectedRule("array_element: missing value".to_string()))?;
    Ok(ParseNode::ArrayElement(Box::new(build_node(inner)?)))
}

fn build_property(pair: Pair<Rule>) -> Result<PropertyNode, ParseError> {
    let mut key = None;
    let mut value = Vec::new();
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::key => key = Some(inner.as_str().to_string()),
            Rule::property_value => {
                value = inner.into_inner().map(build_node).collect::<Result<Vec<_>, _>>()?;
            }
            other => return Err(ParseError::UnexpectedRule(format!("{:?}", other))),
        }
    }
    let key = key.ok_or_else(|| ParseError::UnexpectedRule("property: missing key".to_string()))?;
    Ok(PropertyNode { key, value })
}

/// Resolve backslash escapes: `\c` becomes `c` for any character `c`.
/// Standard escape codes (`\n`, octal) are not interpreted.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
