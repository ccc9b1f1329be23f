//! Errors from parsing and printing.
//!
//! The pass itself never fails: only turning text into a tree, or a tree
//! back into text, can.

use std::fmt::Display;

use markdown::unist::Point;

/// Something went wrong while parsing or serializing.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// Human readable reason.
    pub msg: String,
    /// Place in the input, if known.
    pub point: Option<Point>,
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self {
            msg: value,
            point: None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(point) = &self.point {
            write!(f, "{}:{} ", point.line, point.column)?;
        }

        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for Error {}
