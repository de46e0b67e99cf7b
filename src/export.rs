pub use core::option::Option::{self, None, Some};
pub use core::result::Result::{self, Err, Ok};
pub use std::string::String;

pub use self::help::Str as str;

mod help {
    pub type Str = str;
}

use crate::de::KeyedContainer;
use crate::error::Error;

/// Error for a member that a type with unknown-field checking does not
/// recognize.
pub fn unknown_field(container: &KeyedContainer, key: &str, expected: &[&str]) -> Error {
    container.data_corrupted(
        key,
        format!(
            "Found unexpected field `{}`, expected one of {}.",
            key,
            one_of(expected)
        ),
    )
}

/// Error for a variant name that matches none of `expected`.
pub fn unknown_variant(
    path: &crate::path::CodingPath,
    variant: &str,
    expected: &[&str],
) -> Error {
    Error::data_corrupted(
        path,
        format!(
            "Unknown variant `{}`, expected one of {}.",
            variant,
            one_of(expected)
        ),
    )
}

fn one_of(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("`{}`", name))
        .collect::<Vec<_>>()
        .join(", ")
}
