use core::any::type_name;

use serde_json::Value;
use tracing::debug;

use super::{MappingTable, Representation, representations_equal};

impl<E: Copy + PartialEq> MappingTable<E> {
    /// Returns the representation of the first row holding `value`, without
    /// cloning it.
    pub fn representation_of(&self, value: E) -> Option<&Representation> {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| &entry.representation)
    }

    /// Encodes `value`, or returns `None` when no row holds it.
    pub fn try_encode(&self, value: E) -> Option<Representation> {
        self.representation_of(value).cloned()
    }

    /// Encodes `value`, falling back to the canonical name of the
    /// first-declared member when no row holds it.
    ///
    /// The fallback is a compatibility behavior for values that were
    /// produced without going through the enum's constructors. It never
    /// uses an override, even one registered for the first-declared member.
    pub fn encode(&self, value: E) -> Representation {
        self.encode_ref(value).clone()
    }

    /// Borrowing form of [`MappingTable::encode`].
    pub fn encode_ref(&self, value: E) -> &Representation {
        if let Some(representation) = self.representation_of(value) {
            return representation;
        }
        let fallback = &self.first_declared_entry().representation;
        debug!(
            enum_type = type_name::<E>(),
            fallback = %fallback,
            "enum value has no mapping entry; encoding as first-declared member"
        );
        fallback
    }

    /// Decodes `representation` to the value of the first matching row, or
    /// returns `None` when nothing matches.
    ///
    /// Matching uses [`representations_equal`], so the kind of value matters
    /// and numbers match by numeric value.
    pub fn try_decode(&self, representation: &Value) -> Option<E> {
        self.entries
            .iter()
            .find(|entry| representations_equal(&entry.representation, representation))
            .map(|entry| entry.value)
    }

    /// Decodes `representation`, falling back to the first-declared member
    /// when nothing matches.
    ///
    /// Unknown input is not an error here: this is a lenient compatibility
    /// path. Use [`MappingTable::try_decode`] to reject malformed input.
    pub fn decode(&self, representation: &Value) -> E {
        if let Some(value) = self.try_decode(representation) {
            return value;
        }
        debug!(
            enum_type = type_name::<E>(),
            %representation,
            "unmapped representation; decoding as first-declared member"
        );
        self.first_declared()
    }
}
