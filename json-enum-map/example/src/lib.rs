//! Demo enums and documents for documentation and tests.

use json_enum_map::{EnumEntries, JsonEnum};
use serde::{Deserialize, Serialize};

/// Canonical names only. The first-declared member is not the one with the
/// lowest discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonEnum)]
pub enum Basic {
    Foo = 0,
    Bar = 1,
    Baz = -1,
}

/// Overrides to a renamed string and to `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonEnum)]
#[json_enum(overrides(EncodeAsOtherString = "Hello, world", EncodeAsNull = null))]
pub enum Overridden {
    EncodeAsNull = -1,
    Foo = 0,
    Bar,
    EncodeAsOtherString,
}

/// Two spellings of the same member; the first one listed is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonEnum)]
#[json_enum(overrides(Gray = "gray"))]
#[json_enum(overrides(Gray = "grey", Red = "crimson"))]
pub enum Color {
    Red,
    Gray,
    Blue,
}

/// Non-string overrides of every literal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonEnum)]
#[json_enum(overrides(
    Low = -1,
    High = 2.5,
    On = true,
    Huge = 18446744073709551615,
    Pair = serde_json::json!(["a", 1]),
))]
pub enum Setting {
    Low,
    High,
    On,
    Huge,
    Pair,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonEnum)]
#[json_enum(overrides(Rain = "rain", Unknown = null))]
pub enum Weather {
    Sun,
    Rain,
    Unknown,
}

/// Reflection only, no JSON registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumEntries)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// A document embedding enums with the lenient derived conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u32,
    pub weather: Weather,
    pub history: Vec<Weather>,
    pub forecast: Option<Weather>,
}

/// A document that rejects unknown enum input instead of substituting the
/// first-declared member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrictTicket {
    pub id: u32,
    #[serde(with = "json_enum_map::strict")]
    pub weather: Weather,
}
