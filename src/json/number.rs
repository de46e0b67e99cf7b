use core::fmt::{self, Debug, Display};

/// A JSON number, kept as the lexeme it was parsed from.
///
/// Whether a number fits a given Rust type is decided when it is decoded
/// into that type, so the literal `1000e1000` is a perfectly fine `Number`
/// that only fails once someone asks for an `f64`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Number {
    lexeme: String,
}

impl Number {
    /// Wraps a numeric lexeme produced by a JSON parser. The text is not
    /// validated here.
    pub fn from_lexeme(lexeme: impl Into<String>) -> Self {
        Number {
            lexeme: lexeme.into(),
        }
    }

    /// Returns `None` for NaN and infinities, which have no JSON form.
    pub fn from_f64(n: f64) -> Option<Self> {
        if n.is_finite() {
            Some(Number::from_lexeme(ryu::Buffer::new().format_finite(n)))
        } else {
            None
        }
    }

    /// Returns `None` for NaN and infinities, which have no JSON form.
    pub fn from_f32(n: f32) -> Option<Self> {
        if n.is_finite() {
            Some(Number::from_lexeme(ryu::Buffer::new().format_finite(n)))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.lexeme
    }

    pub fn into_lexeme(self) -> String {
        self.lexeme
    }
}

macro_rules! integer {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::from_lexeme(itoa::Buffer::new().format(n))
                }
            }
        )*
    };
}
integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.lexeme)
    }
}

impl Debug for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Number({})", self.lexeme)
    }
}
