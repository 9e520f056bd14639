//! Table-driven JSON conversion for fieldless enums.
//!
//! Enum members serialize by their declared name rather than by ordinal.
//! When a member needs a different JSON form (a renamed string, `null`, a
//! number), an override entry says so; overrides are checked before the
//! declared names, in the order they are written.
//!
//! # Example
//! ```rust
#![doc = include_str!("../docs/usage.rs")]
//! ```
//!
//! Unknown input is handled two ways. The total conversions
//! ([`JsonEnum::to_json`], [`JsonEnum::from_json`] and the derived serde
//! impls) never fail: they substitute the enum's first-declared member. This
//! is a compatibility behavior and masks malformed input. The fallible
//! conversions ([`JsonEnum::try_to_json`], [`JsonEnum::try_from_json`],
//! [`Strict`], [`StrictValue`] and the [`strict`] field adapter) report the
//! miss instead.

mod mapping;

pub use mapping::{
    Lenient, LenientSeq, LenientValue, MappingEntry, MappingError, MappingTable, Representation,
    Strict, StrictOption, StrictSeq, StrictValue, StrictVec, representations_equal, strict,
};

#[cfg(feature = "derive")]
pub use json_enum_map_derive::{EnumEntries, JsonEnum};

extern crate self as json_enum_map;

/// Reflection over a fieldless enum: its members paired with their declared
/// identifiers.
///
/// `#[derive(EnumEntries)]` generates this. A hand-written impl should list
/// every member exactly once, in declaration order; the first entry is the
/// fallback target for the total conversions. A member left out has no
/// entry, so only the total conversions can encode it.
pub trait EnumEntries: Copy + PartialEq + 'static {
    /// Members and their declared names, in declaration order.
    const ENTRIES: &'static [(Self, &'static str)];

    /// Returns the declared identifier of this member.
    fn canonical_name(self) -> Option<&'static str> {
        Self::ENTRIES
            .iter()
            .find(|(value, _)| *value == self)
            .map(|(_, name)| *name)
    }

    /// Looks a member up by its declared identifier.
    fn from_canonical_name(name: &str) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(value, _)| *value)
    }
}

/// An enum registered for JSON conversion through a [`MappingTable`].
///
/// `#[derive(JsonEnum)]` implements this together with [`EnumEntries`],
/// `serde::Serialize` and `serde::Deserialize`, building the table once on
/// first use.
pub trait JsonEnum: EnumEntries {
    /// The effective table for this enum: overrides, then declared names.
    fn mapping() -> &'static MappingTable<Self>;

    /// Encodes this member, substituting the first-declared member's name if
    /// it has no entry.
    fn to_json(self) -> Representation {
        Self::mapping().encode(self)
    }

    /// Encodes this member, or returns `None` if it has no entry.
    fn try_to_json(self) -> Option<Representation> {
        Self::mapping().try_encode(self)
    }

    /// Decodes a representation, substituting the first-declared member for
    /// unknown input.
    fn from_json(representation: &Representation) -> Self {
        Self::mapping().decode(representation)
    }

    /// Decodes a representation, or returns `None` for unknown input.
    fn try_from_json(representation: &Representation) -> Option<Self> {
        Self::mapping().try_decode(representation)
    }
}
