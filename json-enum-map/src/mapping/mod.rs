//! Mapping tables and the codec built on them.
//!
//! Most users derive `JsonEnum` and then use `serde_json` directly. This
//! module exists for advanced cases: building tables by hand for enums that
//! cannot use the derive, or wrapping values when strict handling is needed.

mod codec;
mod error;
mod table;
mod value;
mod wrappers;

pub use error::MappingError;
pub use table::{MappingEntry, MappingTable};
pub use value::{Representation, representations_equal};
pub use wrappers::{
    Lenient, LenientSeq, LenientValue, Strict, StrictOption, StrictSeq, StrictValue, StrictVec,
    strict,
};
