//! Trait definitions for NV-CONTROL attribute access
//!
//! `AttributeSource` abstracts the native query surface so typed accessors
//! can run against a fake backend in tests instead of a live X display.

use crate::error::ControlError;
use crate::xnv::attributes::{IntAttribute, StringAttribute, Target};

/// Capability interface over the NV-CONTROL query surface
///
/// One implementation talks to the real display connection
/// ([`Session`](crate::xnv::Session)); the `mock` feature provides a fake
/// backed by in-memory tables.
pub trait AttributeSource {
    /// Query an integer attribute on the given target
    fn query_int(&self, target: Target, index: u32, attr: IntAttribute)
        -> Result<i32, ControlError>;

    /// Query a string attribute on the given target
    ///
    /// The native buffer is copied into an owned `String` and released by
    /// the implementation; callers never see the raw allocation.
    fn query_string(
        &self,
        target: Target,
        index: u32,
        attr: StringAttribute,
    ) -> Result<String, ControlError>;

    /// Set an integer attribute on the given target
    ///
    /// Returns the backend's raw status code unmodified (1 success,
    /// 0 failure). `Err` is reserved for transport-level failures the
    /// backend itself cannot report, such as a missing symbol.
    fn set_int(
        &mut self,
        target: Target,
        index: u32,
        attr: IntAttribute,
        value: i32,
    ) -> Result<i32, ControlError>;
}
