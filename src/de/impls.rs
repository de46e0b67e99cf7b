use core::hash::{BuildHasher, Hash};
use core::str::FromStr;
use std::collections::{BTreeMap, HashMap};

use crate::de::{Decodable, Decoder};
use crate::error::{Error, Result};
use crate::json::Value;
use crate::path::PathSegment;

impl Decodable for () {
    fn decode(decoder: &Decoder) -> Result<Self> {
        match decoder.value() {
            Value::Null => Ok(()),
            other => Err(Error::type_mismatch("()", other.kind(), decoder.coding_path())),
        }
    }
}

impl Decodable for bool {
    fn decode(decoder: &Decoder) -> Result<Self> {
        decoder.single_value_container().decode_bool()
    }
}

impl Decodable for String {
    fn decode(decoder: &Decoder) -> Result<Self> {
        decoder.single_value_container().decode_string()
    }
}

macro_rules! integer {
    ($($ty:ident)*) => {
        $(
            impl Decodable for $ty {
                fn decode(decoder: &Decoder) -> Result<Self> {
                    decoder
                        .single_value_container()
                        .decode_integer::<$ty>(stringify!($ty))
                }
            }
        )*
    };
}
integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

macro_rules! float {
    ($($ty:ident)*) => {
        $(
            impl Decodable for $ty {
                fn decode(decoder: &Decoder) -> Result<Self> {
                    decoder
                        .single_value_container()
                        .decode_float::<$ty>(stringify!($ty), $ty::is_finite)
                }
            }
        )*
    };
}
float!(f32 f64);

impl Decodable for Value {
    fn decode(decoder: &Decoder) -> Result<Self> {
        Ok(decoder.value().clone())
    }
}

impl<T: Decodable> Decodable for Option<T> {
    fn decode(decoder: &Decoder) -> Result<Self> {
        if decoder.single_value_container().decode_nil() {
            Ok(None)
        } else {
            T::decode(decoder).map(Some)
        }
    }

    #[inline]
    fn absent() -> Option<Self> {
        Some(None)
    }
}

impl<T: Decodable> Decodable for Box<T> {
    fn decode(decoder: &Decoder) -> Result<Self> {
        T::decode(decoder).map(Box::new)
    }
}

impl<T: Decodable> Decodable for Vec<T> {
    fn decode(decoder: &Decoder) -> Result<Self> {
        let mut container = decoder.unkeyed_container()?;
        let mut vec = Vec::with_capacity(container.count());
        while !container.is_at_end() {
            vec.push(container.decode()?);
        }
        Ok(vec)
    }
}

/// Decodes each member of an object, parsing its name with `FromStr`.
fn decode_entries<K, V, F>(decoder: &Decoder, mut insert: F) -> Result<()>
where
    K: FromStr,
    V: Decodable,
    F: FnMut(K, V),
{
    let container = decoder.keyed_container()?;
    for key in container.all_keys() {
        let parsed = match K::from_str(key) {
            Ok(parsed) => parsed,
            Err(_) => {
                return Err(container.data_corrupted(key, format!("can not parse map key `{}`", key)))
            }
        };
        insert(parsed, container.decode(key)?);
    }
    Ok(())
}

impl<K, V, H> Decodable for HashMap<K, V, H>
where
    K: FromStr + Hash + Eq,
    V: Decodable,
    H: BuildHasher + Default,
{
    fn decode(decoder: &Decoder) -> Result<Self> {
        let mut map = HashMap::with_hasher(H::default());
        decode_entries(decoder, |k, v| {
            map.insert(k, v);
        })?;
        Ok(map)
    }
}

impl<K: FromStr + Ord, V: Decodable> Decodable for BTreeMap<K, V> {
    fn decode(decoder: &Decoder) -> Result<Self> {
        let mut map = BTreeMap::new();
        decode_entries(decoder, |k, v| {
            map.insert(k, v);
        })?;
        Ok(map)
    }
}

macro_rules! tuple {
    ($len:expr => $($name:ident)+) => {
        impl<$($name: Decodable),+> Decodable for ($($name,)+) {
            fn decode(decoder: &Decoder) -> Result<Self> {
                let mut container = decoder.unkeyed_container()?;
                let tuple = ($(container.decode::<$name>()?,)+);
                if !container.is_at_end() {
                    return Err(Error::data_corrupted(
                        &container.coding_path().push(PathSegment::Index($len)),
                        format!(
                            "tuple should have {} items but the array has {}",
                            $len,
                            container.count()
                        ),
                    ));
                }
                Ok(tuple)
            }
        }
    };
}
tuple!(2 => A B);
tuple!(3 => A B C);
