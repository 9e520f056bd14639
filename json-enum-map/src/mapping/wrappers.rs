use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::Value;

use super::MappingError;
use crate::JsonEnum;

/// Wraps a value to serialize it with the total encode.
pub struct Lenient<'a, E: JsonEnum> {
    value: &'a E,
}

impl<'a, E: JsonEnum> Lenient<'a, E> {
    pub fn new(value: &'a E) -> Self {
        Self { value }
    }
}

impl<E: JsonEnum> Serialize for Lenient<'_, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        E::mapping().encode_ref(*self.value).serialize(serializer)
    }
}

/// Deserializes any JSON value with the total decode.
///
/// Unknown input becomes the enum's first-declared member.
pub struct LenientValue<E>(pub E);

impl<'de, E: JsonEnum> Deserialize<'de> for LenientValue<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(LenientValue(E::mapping().decode(&value)))
    }
}

/// Wraps a slice to serialize as a JSON array with the total encode.
pub struct LenientSeq<'a, E: JsonEnum> {
    values: &'a [E],
}

impl<'a, E: JsonEnum> LenientSeq<'a, E> {
    pub fn new(values: &'a [E]) -> Self {
        Self { values }
    }
}

impl<E: JsonEnum> Serialize for LenientSeq<'_, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.values.iter().map(Lenient::new))
    }
}

/// Wraps a value to serialize it with the fallible encode, failing when the
/// value has no mapping entry.
pub struct Strict<'a, E: JsonEnum> {
    value: &'a E,
}

impl<'a, E: JsonEnum> Strict<'a, E> {
    pub fn new(value: &'a E) -> Self {
        Self { value }
    }
}

impl<E: JsonEnum> Serialize for Strict<'_, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Some(representation) = E::mapping().representation_of(*self.value) else {
            let err = MappingError::unmapped_value(type_name::<E>());
            return Err(ser::Error::custom(err));
        };
        representation.serialize(serializer)
    }
}

/// Deserializes with the fallible decode, rejecting unknown representations.
pub struct StrictValue<E>(pub E);

impl<'de, E: JsonEnum> Deserialize<'de> for StrictValue<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        strict_decode(&value).map(StrictValue)
    }
}

/// Wraps an optional value for strict deserialization.
///
/// `null` reads as `None` unless the enum maps `null` to one of its members.
pub struct StrictOption<E>(pub Option<E>);

impl<'de, E: JsonEnum> Deserialize<'de> for StrictOption<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(StrictOption(E::mapping().try_decode(&value)));
        }
        strict_decode(&value).map(|value| StrictOption(Some(value)))
    }
}

/// Wraps a slice to serialize as a JSON array with the fallible encode.
pub struct StrictSeq<'a, E: JsonEnum> {
    values: &'a [E],
}

impl<'a, E: JsonEnum> StrictSeq<'a, E> {
    pub fn new(values: &'a [E]) -> Self {
        Self { values }
    }
}

impl<E: JsonEnum> Serialize for StrictSeq<'_, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.values.iter().map(Strict::new))
    }
}

/// Wraps a vector for strict deserialization. `null` reads as empty.
pub struct StrictVec<E>(pub Vec<E>);

impl<'de, E: JsonEnum> Deserialize<'de> for StrictVec<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor<E>(PhantomData<E>);

        impl<'de, E: JsonEnum> de::Visitor<'de> for Visitor<E> {
            type Value = StrictVec<E>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence or null")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(value) = seq.next_element::<StrictValue<E>>()? {
                    values.push(value.0);
                }
                Ok(StrictVec(values))
            }

            /// A JSON `null` in place of the array reads as an empty vector,
            /// the same way an absent repeated field would.
            fn visit_unit<Err>(self) -> Result<Self::Value, Err>
            where
                Err: de::Error,
            {
                Ok(StrictVec(Vec::new()))
            }

            /// `None` from self-describing formats is treated like `null`.
            fn visit_none<Err>(self) -> Result<Self::Value, Err>
            where
                Err: de::Error,
            {
                self.visit_unit()
            }
        }

        deserializer.deserialize_any(Visitor(PhantomData))
    }
}

fn strict_decode<E: JsonEnum, Err: de::Error>(value: &Value) -> Result<E, Err> {
    let Some(decoded) = E::mapping().try_decode(value) else {
        let err = MappingError::unmapped_representation(type_name::<E>(), value);
        return Err(de::Error::custom(err));
    };
    Ok(decoded)
}

/// Field adapter for `#[serde(with = "json_enum_map::strict")]`.
///
/// Serialization fails on values without a mapping entry and
/// deserialization rejects unknown representations, instead of substituting
/// the first-declared member.
pub mod strict {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Strict, StrictValue};
    use crate::JsonEnum;

    /// # Errors
    /// Returns a serializer error when `value` has no mapping entry.
    pub fn serialize<E, S>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: JsonEnum,
        S: Serializer,
    {
        Strict::new(value).serialize(serializer)
    }

    /// # Errors
    /// Returns a deserializer error when the input matches no mapping entry.
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
    where
        E: JsonEnum,
        D: Deserializer<'de>,
    {
        StrictValue::deserialize(deserializer).map(|value| value.0)
    }
}
