//! NV-CONTROL abstraction layer
//!
//! Protocol constants, the `AttributeSource` capability trait, the real
//! display-backed session, and the typed `GpuControl` accessors.

pub mod attributes;
pub mod control;
pub mod session;
pub mod traits;

pub use attributes::{IntAttribute, StringAttribute, Target, XNV_OK};
pub use control::GpuControl;
pub use session::Session;
pub use traits::AttributeSource;
