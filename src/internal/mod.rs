/// Module with the comment classifier.
pub(crate) mod comment;

/// Module with the delimiter matcher.
pub(crate) mod matcher;

/// Module with the comment stripper.
pub(crate) mod stripper;

/// Module that advances from token to token.
pub(crate) mod advancer;

/// Module that locates keys and their blocks.
pub(crate) mod locator;
