use alloc::string::FromUtf8Error;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use std::io;

/// An attribute operation error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttributeError {
    /// An attribute name not allowed in HTML.
    InvalidName(String),
    /// A node which cannot carry attributes.
    NotElement,
}

impl Error for AttributeError {}

impl Display for AttributeError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(formatter, "invalid attribute name: {name:?}"),
            Self::NotElement => write!(formatter, "node is not an element"),
        }
    }
}

/// An element error.
#[derive(Debug)]
pub enum ElementError {
    /// An unexpected number of top-level elements in an HTML fragment.
    ElementCount(usize),
    /// An element name not allowed in HTML.
    InvalidName(String),
    /// An I/O error during serialization.
    Io(io::Error),
    /// A node which is not an element.
    NotElement,
    /// Serialized HTML not in UTF-8.
    Utf8(FromUtf8Error),
}

impl Error for ElementError {}

impl Display for ElementError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementCount(count) => {
                write!(formatter, "expected exactly one element but found {count}")
            }
            Self::InvalidName(name) => write!(formatter, "invalid element name: {name:?}"),
            Self::Io(error) => write!(formatter, "{error}"),
            Self::NotElement => write!(formatter, "node is not an element"),
            Self::Utf8(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<io::Error> for ElementError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<FromUtf8Error> for ElementError {
    fn from(error: FromUtf8Error) -> Self {
        Self::Utf8(error)
    }
}
