use core::any::type_name;
use core::slice;

use serde_json::Value;
use tracing::trace;

use super::{MappingError, Representation};

/// One row of a mapping table: an enum value and the representation it
/// encodes to and decodes from.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingEntry<E> {
    pub value: E,
    pub representation: Representation,
}

/// Ordered lookup table shared by encode and decode.
///
/// Override entries come first in caller order, followed by one canonical
/// entry per enum member in declaration order. Lookups in either direction
/// take the first matching row, so an override shadows the canonical entry
/// for the same member, and an override representation that collides with
/// another member's canonical name decodes to the overridden member.
///
/// The table is never empty: it always holds at least one canonical entry,
/// which doubles as the fallback for the total codec operations.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingTable<E> {
    pub(super) entries: Vec<MappingEntry<E>>,
    pub(super) override_count: usize,
}

impl<E: Copy + PartialEq> MappingTable<E> {
    /// Builds a table from canonical `(value, name)` pairs in declaration
    /// order and override `(value, representation)` pairs in precedence
    /// order.
    ///
    /// Nothing is deduplicated or reordered: overrides are placed ahead of the
    /// canonical entries exactly as given.
    ///
    /// # Panics
    /// Panics if `canonical` is empty. An enum without members cannot be
    /// mapped; use [`MappingTable::try_build`] to get an error instead.
    pub fn build<N, O>(canonical: &[(E, N)], overrides: O) -> Self
    where
        N: AsRef<str>,
        O: IntoIterator<Item = (E, Representation)>,
    {
        match Self::try_build(canonical, overrides) {
            Ok(table) => table,
            Err(err) => panic!("{err}"),
        }
    }

    /// Builds a table like [`MappingTable::build`], rejecting an empty
    /// canonical sequence.
    ///
    /// # Errors
    /// Returns a [`MappingError`] when `canonical` has no entries.
    pub fn try_build<N, O>(canonical: &[(E, N)], overrides: O) -> Result<Self, MappingError>
    where
        N: AsRef<str>,
        O: IntoIterator<Item = (E, Representation)>,
    {
        if canonical.is_empty() {
            return Err(MappingError::empty_enum(type_name::<E>()));
        }

        let mut entries: Vec<MappingEntry<E>> = overrides
            .into_iter()
            .map(|(value, representation)| MappingEntry {
                value,
                representation,
            })
            .collect();
        let override_count = entries.len();
        entries.reserve(canonical.len());
        entries.extend(canonical.iter().map(|(value, name)| MappingEntry {
            value: *value,
            representation: Value::String(name.as_ref().to_owned()),
        }));

        trace!(
            enum_type = type_name::<E>(),
            overrides = override_count,
            entries = entries.len(),
            "built enum mapping table"
        );

        Ok(Self {
            entries,
            override_count,
        })
    }

    /// Builds a table with no overrides.
    ///
    /// # Panics
    /// Panics if `canonical` is empty.
    pub fn canonical<N: AsRef<str>>(canonical: &[(E, N)]) -> Self {
        Self::build(canonical, core::iter::empty())
    }
}

impl<E: crate::EnumEntries> MappingTable<E> {
    /// Builds the table for an enum from its reflected members.
    ///
    /// # Panics
    /// Panics if `E::ENTRIES` is empty.
    pub fn for_enum<O>(overrides: O) -> Self
    where
        O: IntoIterator<Item = (E, Representation)>,
    {
        Self::build(E::ENTRIES, overrides)
    }
}

impl<E> MappingTable<E> {
    /// All rows in lookup order.
    pub fn entries(&self) -> &[MappingEntry<E>] {
        &self.entries
    }

    /// The override rows, in caller order.
    pub fn overrides(&self) -> &[MappingEntry<E>] {
        &self.entries[..self.override_count]
    }

    /// The canonical rows, in declaration order.
    pub fn canonical_entries(&self) -> &[MappingEntry<E>] {
        &self.entries[self.override_count..]
    }

    pub fn override_count(&self) -> usize {
        self.override_count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, MappingEntry<E>> {
        self.entries.iter()
    }

    /// The canonical row of the first-declared member.
    ///
    /// This is the declaration-order head, which is not necessarily the
    /// member with the lowest discriminant.
    pub fn first_declared_entry(&self) -> &MappingEntry<E> {
        &self.entries[self.override_count]
    }
}

impl<E: Copy> MappingTable<E> {
    pub fn first_declared(&self) -> E {
        self.first_declared_entry().value
    }
}

impl<'a, E> IntoIterator for &'a MappingTable<E> {
    type Item = &'a MappingEntry<E>;
    type IntoIter = slice::Iter<'a, MappingEntry<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
