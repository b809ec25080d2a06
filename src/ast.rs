//! Labeled parse tree produced by the grammar, before value decoding.
//!
//! Nodes carry matched text only; turning text into typed values is the job
//! of [`crate::transform`].

/// One labeled node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNode {
    /// Contents of `[...]`, in source order.
    ArrayElements(Vec<ParseNode>),
    /// A single array slot wrapping its value.
    ArrayElement(Box<ParseNode>),
    /// Contents of `{...}`, in source order. Duplicate keys are kept.
    Properties(Vec<PropertyNode>),
    /// Matched digit run (with optional leading `-`) and its byte offset.
    Integer { text: String, offset: usize },
    /// String contents with escapes already resolved.
    String(String),
    /// `0x...` text, prefix included.
    Address(String),
    Null,
    /// `NAME|NAME|...` text as matched.
    FlagList(String),
}

/// `key=value...` inside an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    pub key: String,
    pub value: Vec<ParseNode>,
}

impl ParseNode {
    /// Label of the node, as named by the grammar.
    pub fn label(&self) -> &'static str {
        match self {
            ParseNode::ArrayElements(_) => "array_elements",
            ParseNode::ArrayElement(_) => "array_element",
            ParseNode::Properties(_) => "properties",
            ParseNode::Integer { .. } => "integer",
            ParseNode::String(_) => "string",
            ParseNode::Address(_) => "address",
            ParseNode::Null => "null",
            ParseNode::FlagList(_) => "flag_list",
        }
    }
}
