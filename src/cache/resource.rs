//! Resource Marker Module
//!
//! Marker trait for values that own an external resource.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::error::{CacheError, Result};

// == Resource Handle ==
/// Marker trait for values holding an external resource that must be
/// explicitly released (connections, file handles, ...).
///
/// The cache never releases anything it evicts or overwrites, so it refuses
/// to store values declared as `Box<dyn ResourceHandle>`. The check is on
/// the declared type only: a concrete type that implements this trait is
/// still accepted, and releasing it remains the caller's responsibility.
pub trait ResourceHandle: Send + Sync {
    /// Releases the underlying resource.
    fn release(&mut self);
}

impl fmt::Debug for dyn ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn ResourceHandle")
    }
}

// == Type Check ==
/// Rejects the boxed `ResourceHandle` trait object as a cached value type.
pub(crate) fn reject_resource_handle<T: Any>() -> Result<()> {
    if TypeId::of::<T>() == TypeId::of::<Box<dyn ResourceHandle>>() {
        return Err(CacheError::UnsupportedType(type_name::<T>().to_string()));
    }
    Ok(())
}
