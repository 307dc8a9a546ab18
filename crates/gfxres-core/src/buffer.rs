//! Buffer objects and their storage

use crate::shm::SharedMemory;
use crate::tile::TilingMode;
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicPtr, Ordering};

/// Caller-provided system memory backing a resource
#[derive(Debug, Clone, Copy)]
pub struct SystemMemory {
    ptr: NonNull<u8>,
    len: usize,
}

// Safety: the creator of a SystemMemory guarantees exclusive use of the range
unsafe impl Send for SystemMemory {}
unsafe impl Sync for SystemMemory {}

impl SystemMemory {
    /// Wrap a caller-owned memory range
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `len` bytes and must
    /// outlive every resource allocated on top of it.
    pub unsafe fn new(ptr: NonNull<u8>, len: usize) -> Self {
        Self { ptr, len }
    }

    /// Wrap a mutable byte slice
    ///
    /// # Safety
    ///
    /// The slice must outlive every resource allocated on top of it and must
    /// not be accessed while such a resource exists.
    pub unsafe fn from_slice(slice: &mut [u8]) -> Self {
        Self {
            ptr: NonNull::new_unchecked(slice.as_mut_ptr()),
            len: slice.len(),
        }
    }

    pub fn as_ptr(&self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Buffer object storage
pub enum BufferBacking {
    /// Memory owned by the buffer manager
    Shared(SharedMemory),
    /// Caller memory wrapped with a user pointer
    UserPtr(SystemMemory),
}

impl BufferBacking {
    /// Get size in bytes
    pub fn size(&self) -> usize {
        match self {
            BufferBacking::Shared(shm) => shm.size(),
            BufferBacking::UserPtr(mem) => mem.len(),
        }
    }

    /// Get CPU pointer to the storage
    pub fn as_ptr(&self) -> *mut u8 {
        match self {
            BufferBacking::Shared(shm) => shm.as_ptr(),
            BufferBacking::UserPtr(mem) => mem.as_ptr(),
        }
    }
}

/// Callback run with the handle when a buffer object is dropped
pub type ReleaseHook = Box<dyn FnOnce(u32) + Send + Sync>;

/// A GPU buffer object handed out by a buffer manager
///
/// Identity is the allocation itself; resources compare buffer objects with
/// `Arc::ptr_eq`.
pub struct BufferObject {
    handle: u32,
    tiling: TilingMode,
    pitch: u32,
    /// CPU address of the current mapping, null while unmapped
    virt: AtomicPtr<u8>,
    backing: BufferBacking,
    on_release: Option<ReleaseHook>,
}

impl BufferObject {
    pub fn new(handle: u32, tiling: TilingMode, pitch: u32, backing: BufferBacking) -> Self {
        Self {
            handle,
            tiling,
            pitch,
            virt: AtomicPtr::new(ptr::null_mut()),
            backing,
            on_release: None,
        }
    }

    /// Run `hook` with the handle once the last reference is dropped
    pub fn with_release_hook(mut self, hook: impl FnOnce(u32) + Send + Sync + 'static) -> Self {
        self.on_release = Some(Box::new(hook));
        self
    }

    /// Kernel handle of the buffer
    pub fn handle(&self) -> u32 {
        self.handle
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.backing.size()
    }

    pub fn tiling(&self) -> TilingMode {
        self.tiling
    }

    pub fn pitch(&self) -> u32 {
        self.pitch
    }

    pub fn backing(&self) -> &BufferBacking {
        &self.backing
    }

    /// CPU address of the current mapping
    pub fn virt(&self) -> *mut u8 {
        self.virt.load(Ordering::Acquire)
    }

    pub fn set_virt(&self, ptr: *mut u8) {
        self.virt.store(ptr, Ordering::Release);
    }

    pub fn is_user_ptr(&self) -> bool {
        matches!(self.backing, BufferBacking::UserPtr(_))
    }
}

impl std::fmt::Debug for BufferObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferObject")
            .field("handle", &self.handle)
            .field("size", &self.size())
            .field("tiling", &self.tiling)
            .field("pitch", &self.pitch)
            .field("mapped", &!self.virt().is_null())
            .finish_non_exhaustive()
    }
}

impl Drop for BufferObject {
    fn drop(&mut self) {
        if let Some(hook) = self.on_release.take() {
            hook(self.handle);
        }
    }
}
