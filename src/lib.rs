//! # strace-args — typed values from syscall tracer argument lists
//!
//! Parses the argument text a syscall tracer prints between a call's
//! parentheses into ordered, typed [`Value`]s.
//!
//! ```text
//! mmap(NULL, 16384, PROT_READ|PROT_WRITE, MAP_PRIVATE|MAP_ANONYMOUS, -1, 0)
//!      ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//! ```
//!
//! ## Values
//!
//! - Integers: `27`, `-1` (`i64`)
//! - Strings: `"buf"`, `'c'` (backslash escapes the next character verbatim)
//! - Addresses: `0x7ffd3c1a` (kept as text)
//! - `NULL`
//! - Flag expressions: `O_RDONLY|O_CLOEXEC` (kept as one token)
//! - Arrays: `[1, 2, [3]]`
//! - Structs: `{st_mode=S_IFREG, st_size=10}`
//!
//! ## Pipeline
//!
//! 1. [`parser`]: PEST grammar (ordered choice) → labeled [`ParseNode`] tree
//! 2. [`transform`]: tree → [`ArgumentList`]
//!
//! ## Usage
//!
//! ```
//! use strace_args::{parse_arguments, Value};
//!
//! let args = parse_arguments("27, 8192, SEEK_SET").unwrap();
//! assert_eq!(args[0], Value::Integer(27));
//! assert_eq!(args[2].as_flags(), Some("SEEK_SET"));
//! ```

pub mod ast;
pub mod dump;
pub mod parser;
pub mod transform;
pub mod value;

pub use ast::{ParseNode, PropertyNode};
pub use dump::format_tree;
pub use parser::{parse_tree, ParseError, DEFAULT_MAX_DEPTH};
pub use transform::transform;
pub use value::{ArgumentList, Property, Value};

/// Parser configuration. The parser holds no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentsParser {
    /// Deepest `[`/`{` nesting accepted.
    pub max_depth: usize,
}

impl Default for ArgumentsParser {
    fn default() -> Self {
        ArgumentsParser { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl ArgumentsParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse and decode a complete argument list.
    pub fn parse(&self, input: &str) -> Result<ArgumentList, ParseError> {
        let nodes = parser::parse_tree_with_limit(input, self.max_depth)?;
        transform::transform(nodes)
    }
}

/// Parse and decode a complete argument list with the default configuration.
pub fn parse_arguments(input: &str) -> Result<ArgumentList, ParseError> {
    ArgumentsParser::default().parse(input)
}
