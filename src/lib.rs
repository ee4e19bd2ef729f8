#![forbid(missing_docs)]
//! # `braces`
//! The `braces` crate provides a small, lenient scanner for configuration files written in a
//! brace and semicolon delimited syntax, like BIND's `named.conf`:
//! `key { nested "value"; };`.
//!
//! It is not a parser. It builds no syntax tree and validates nothing beyond delimiter matching.
//! Instead it answers positional questions about a buffer: where does this comment end, which
//! character closes this bracket, where does the next token start, where is this key in the
//! current scope. Comments (`#`, `//` and `/* */`) and string literals are respected throughout.
//!
//! Malformed input never panics. A miss is reported as `None`; the `try_*` methods of the
//! [Scanner] report the reason as a [ScanError].
//!
//! # Example
//! ```rust
//! use braces::{find_key, remove_comments, Scanner};
//!
//! const CONFIG: &str = r#"
//! options {
//!     directory "/var/named"; # where zones live
//! };
//! zone "example.org" { type master; };
//! "#;
//!
//! let stripped = remove_comments(CONFIG);
//! assert!(!stripped.contains("where zones live"));
//!
//! let zone = find_key(CONFIG, "zone", 0).expect("zone statement");
//! assert!(CONFIG[zone..].starts_with("zone \"example.org\""));
//!
//! let block = Scanner::default()
//!     .find_section(CONFIG, "zone", 0)
//!     .expect("zone block");
//! assert_eq!(&CONFIG[block.range()], "{ type master; }");
//! ```
//!
//! # Crate features
//! - `serde`: Enabled by default. Derives `Serialize` and `Deserialize` for the public data types
//!   and provides [ScannerConfig::from_json].

/// Module with the scanner configuration
mod config;
pub use config::{ScannerConfig, DEFAULT_MAX_DEPTH};

/// Module with the delimiter pair table
mod delimiter;
pub use delimiter::Delimiter;

/// Module with error definitions
mod errors;
pub use errors::{Result, ScanError, ScanErrorKind};

/// Module with the free scanner functions
mod functions;
pub use functions::{
    find_closing_char, find_end_of_comment, find_key, find_next_token, is_comment_start,
    remove_comments,
};

/// The module with internal implementation details.
mod internal;

/// The module with the scanner.
mod scanner;
pub use scanner::Scanner;

/// The module with the scanner builder.
mod scanner_builder;
pub use scanner_builder::ScannerBuilder;

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module that provides a Token type
mod token;
pub use token::{Token, TokenKind};

/// Module that provides a Tokens iterator
mod tokens;
pub use tokens::Tokens;
