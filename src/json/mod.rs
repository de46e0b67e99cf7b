//! JSON value model.
//!
//! Values are produced by an external parser (see the `serde_json` feature
//! for the bundled adapter) and are never mutated while being decoded.

mod value;
pub use self::value::{Value, ValueKind};

mod number;
pub use self::number::Number;

mod object;
pub use self::object::Object;

/// A JSON array.
pub type Array = Vec<Value>;
