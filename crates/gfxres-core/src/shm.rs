//! POSIX shared memory backing for software buffer objects

use crate::{Error, Result};
use shared_memory::{Shmem, ShmemConf};

/// Shared memory region wrapper
pub struct SharedMemory {
    inner: Shmem,
    size: usize,
}

// Safety: the mapping is process-wide and never remapped while the wrapper
// lives; access is serialized by the owning buffer object
unsafe impl Send for SharedMemory {}
unsafe impl Sync for SharedMemory {}

impl SharedMemory {
    /// Create a new zero-filled region with a generated OS id
    pub fn create(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::SharedMemory("zero-sized region".to_string()));
        }

        let shmem = ShmemConf::new()
            .size(size)
            .create()
            .map_err(|e| Error::SharedMemory(e.to_string()))?;

        Ok(Self { inner: shmem, size })
    }

    /// Get the OS identifier of the region
    pub fn os_id(&self) -> &str {
        self.inner.get_os_id()
    }

    /// Get the size of the shared memory region
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get a raw pointer to the shared memory
    pub fn as_ptr(&self) -> *mut u8 {
        self.inner.as_ptr()
    }
}
