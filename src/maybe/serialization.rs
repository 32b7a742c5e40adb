//! `Serialize`/`Deserialize` for `Maybe`, encoded exactly like `Option`.
//!
//! `Just(x)` is written with `serialize_some` and `Nothing` with
//! `serialize_none`, so in JSON a `Maybe<T>` is `x` or `null` and can be read
//! back as an `Option<T>` (and vice versa).
//!
//! Like `Option<Option<T>>`, a nested `Just(Nothing)` is written as `null`
//! and therefore reads back as the outer `Nothing`.

use std::fmt;
use std::marker::PhantomData;

use super::Maybe;

impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Just(value) => serializer.serialize_some(value),
            Self::Nothing => serializer.serialize_none(),
        }
    }
}

struct MaybeVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> MaybeVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> serde::de::Visitor<'de> for MaybeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Maybe<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an optional value")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Maybe::Nothing)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Maybe::Nothing)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Maybe::Just)
    }
}

impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_option(MaybeVisitor::new())
    }
}
