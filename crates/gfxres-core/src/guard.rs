//! RAII lock guard

use crate::context::DeviceContext;
use crate::resource::GraphicsResource;
use crate::Result;
use std::ptr::NonNull;

/// CPU view of a locked resource, unlocked on drop
pub struct ResourceGuard<'a> {
    resource: &'a mut GraphicsResource,
    context: &'a dyn DeviceContext,
    ptr: NonNull<u8>,
    len: usize,
    /// Whether drop still has to unlock
    locked: bool,
}

impl<'a> ResourceGuard<'a> {
    pub(crate) fn new(
        resource: &'a mut GraphicsResource,
        context: &'a dyn DeviceContext,
        ptr: NonNull<u8>,
        len: usize,
    ) -> Self {
        Self {
            resource,
            context,
            ptr,
            len,
            locked: true,
        }
    }

    /// The locked resource
    pub fn resource(&self) -> &GraphicsResource {
        self.resource
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get CPU slice (read-only)
    pub fn as_slice(&self) -> &[u8] {
        // Safety: the mapping stays valid for `len` bytes until unlock
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Get CPU slice (mutable)
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Unlock now and report the result
    pub fn unlock(mut self) -> Result<()> {
        self.locked = false;
        self.resource.unlock(Some(self.context))
    }
}

impl Drop for ResourceGuard<'_> {
    fn drop(&mut self) {
        if self.locked {
            if let Err(e) = self.resource.unlock(Some(self.context)) {
                log::warn!("unlock on drop failed for '{}': {}", self.resource.name(), e);
            }
        }
    }
}
