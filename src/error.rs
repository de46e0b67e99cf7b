use core::fmt::{self, Display};

use crate::json::ValueKind;
use crate::path::{self, CodingPath, PathSegment};

/// Where and why a decode failed.
#[derive(Clone, Debug, PartialEq)]
pub struct Context {
    /// Path from the document root to the failing value.
    pub coding_path: Vec<PathSegment>,
    /// Human readable explanation. Not meant to be parsed.
    pub debug_description: String,
}

impl Context {
    pub fn new(coding_path: &CodingPath, debug_description: impl Into<String>) -> Self {
        Context {
            coding_path: coding_path.to_vec(),
            debug_description: debug_description.into(),
        }
    }
}

/// Error type when decoding fails.
///
/// The first error aborts the whole decode; there are no partial results.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The value has a different shape than the requested type needs.
    TypeMismatch {
        expected: &'static str,
        found: ValueKind,
        context: Context,
    },
    /// A value was required but there was none, e.g. reading past the end
    /// of an array.
    ValueNotFound {
        expected: &'static str,
        context: Context,
    },
    /// A required object member is absent.
    KeyNotFound { key: String, context: Context },
    /// The value has the right shape but its content can not be represented,
    /// e.g. a number that does not fit in the requested type.
    DataCorrupted(Context),
}

impl Error {
    pub(crate) fn type_mismatch(expected: &'static str, found: ValueKind, path: &CodingPath) -> Self {
        Error::TypeMismatch {
            expected,
            found,
            context: Context::new(
                path,
                format!(
                    "Expected to decode {} but found {} instead.",
                    expected,
                    found.description()
                ),
            ),
        }
    }

    pub(crate) fn value_not_found(
        expected: &'static str,
        path: &CodingPath,
        msg: impl Into<String>,
    ) -> Self {
        Error::ValueNotFound {
            expected,
            context: Context::new(path, msg),
        }
    }

    pub(crate) fn key_not_found(key: &str, path: &CodingPath) -> Self {
        Error::KeyNotFound {
            key: key.to_owned(),
            context: Context::new(path, format!("No value associated with key \"{}\".", key)),
        }
    }

    pub(crate) fn data_corrupted(path: &CodingPath, msg: impl Into<String>) -> Self {
        Error::DataCorrupted(Context::new(path, msg))
    }

    pub(crate) fn number_does_not_fit(lexeme: &str, ty: &str, path: &CodingPath) -> Self {
        Error::data_corrupted(
            path,
            format!("Parsed JSON number <{}> does not fit in {}.", lexeme, ty),
        )
    }

    pub fn context(&self) -> &Context {
        match self {
            Error::TypeMismatch { context, .. }
            | Error::ValueNotFound { context, .. }
            | Error::KeyNotFound { context, .. }
            | Error::DataCorrupted(context) => context,
        }
    }

    pub fn coding_path(&self) -> &[PathSegment] {
        &self.context().coding_path
    }

    pub fn debug_description(&self) -> &str {
        &self.context().debug_description
    }
}

/// Result type returned by decoding functions.
pub type Result<T> = core::result::Result<T, Error>;

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let context = self.context();
        formatter.write_str(&context.debug_description)?;
        if !context.coding_path.is_empty() {
            formatter.write_str(" (at ")?;
            path::write_segments(formatter, &context.coding_path)?;
            formatter.write_str(")")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
