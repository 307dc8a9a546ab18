//! Buffer manager interface and the shared-memory implementation

use crate::buffer::{BufferBacking, BufferObject, SystemMemory};
use crate::shm::SharedMemory;
use crate::storage::{MapOperation, MemType};
use crate::tile::TilingMode;
use crate::{Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;

/// Alignment used for linear allocations
pub const LINEAR_ALIGNMENT: u64 = 4096;

/// Linear allocation request
#[derive(Debug, Clone)]
pub struct LinearAlloc<'a> {
    pub name: &'a str,
    pub size: u64,
    pub alignment: u64,
    pub mem_type: MemType,
}

/// Tiled allocation request
#[derive(Debug, Clone)]
pub struct TiledAlloc<'a> {
    pub name: &'a str,
    /// Width in elements
    pub x: u32,
    /// Height in rows
    pub y: u32,
    /// Bytes per element
    pub cpp: u32,
    pub tiling: TilingMode,
    pub mem_type: MemType,
}

/// User-pointer allocation request
#[derive(Debug, Clone)]
pub struct UserptrAlloc<'a> {
    pub name: &'a str,
    pub memory: SystemMemory,
    pub tiling: TilingMode,
    pub stride: u32,
    pub size: u64,
}

/// Buffer allocation and CPU mapping
///
/// Each `map*` call opens a mapping that must be closed by the matching
/// `unmap*` call.
pub trait BufferManager: Send + Sync {
    fn alloc(&self, params: &LinearAlloc<'_>) -> Result<Arc<BufferObject>>;

    /// Tiled allocation, the granted pitch is `BufferObject::pitch`
    fn alloc_tiled(&self, params: &TiledAlloc<'_>) -> Result<Arc<BufferObject>>;

    fn alloc_userptr(&self, params: &UserptrAlloc<'_>) -> Result<Arc<BufferObject>>;

    /// Drop a reference to a buffer
    fn unreference(&self, bo: Arc<BufferObject>) {
        drop(bo);
    }

    fn map(&self, bo: &BufferObject, write_only: bool) -> Result<()>;
    fn unmap(&self, bo: &BufferObject) -> Result<()>;
    fn map_wc(&self, bo: &BufferObject) -> Result<()>;
    fn unmap_wc(&self, bo: &BufferObject) -> Result<()>;
    fn map_gtt(&self, bo: &BufferObject) -> Result<()>;
    fn unmap_gtt(&self, bo: &BufferObject) -> Result<()>;
}

/// Tile footprint in bytes per row and rows
fn tile_dims(tiling: TilingMode) -> (u32, u32) {
    match tiling {
        TilingMode::None => (64, 1),
        TilingMode::X => (512, 8),
        TilingMode::Y => (128, 32),
    }
}

pub(crate) fn align_up(value: u64, alignment: u64) -> u64 {
    debug_assert!(alignment.is_power_of_two());
    (value + alignment - 1) & !(alignment - 1)
}

/// Buffer manager backed by anonymous POSIX shared memory
pub struct ShmBufferManager {
    next_handle: AtomicU32,
    released: AtomicUsize,
    /// Open mappings by handle, pruned when a buffer object drops
    mappings: Arc<Mutex<HashMap<u32, MapOperation>>>,
}

impl Default for ShmBufferManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShmBufferManager {
    pub fn new() -> Self {
        Self {
            next_handle: AtomicU32::new(1),
            released: AtomicUsize::new(0),
            mappings: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of buffers released through `unreference`
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Mapping technique currently open on a buffer
    pub fn mapping_of(&self, handle: u32) -> Option<MapOperation> {
        self.mappings.lock().get(&handle).copied()
    }

    fn next_handle(&self) -> u32 {
        self.next_handle.fetch_add(1, Ordering::SeqCst)
    }

    /// Share the buffer, dropping its mapping record with the last reference
    fn track(&self, bo: BufferObject) -> Arc<BufferObject> {
        let mappings = Arc::downgrade(&self.mappings);
        Arc::new(bo.with_release_hook(move |handle| {
            if let Some(mappings) = mappings.upgrade() {
                mappings.lock().remove(&handle);
            }
        }))
    }

    fn create(&self, name: &str, size: u64, tiling: TilingMode, pitch: u32) -> Result<Arc<BufferObject>> {
        let shm = SharedMemory::create(size as usize).map_err(|e| Error::OutOfMemory {
            name: format!("{} ({})", name, e),
            size,
        })?;
        let handle = self.next_handle();
        log::debug!("bo {} '{}': {} bytes at {}", handle, name, size, shm.os_id());
        Ok(self.track(BufferObject::new(
            handle,
            tiling,
            pitch,
            BufferBacking::Shared(shm),
        )))
    }

    fn open_mapping(&self, bo: &BufferObject, op: MapOperation) -> Result<()> {
        let mut mappings = self.mappings.lock();
        if let Some(existing) = mappings.get(&bo.handle()) {
            return Err(Error::InvalidState(format!(
                "bo {} already mapped with {:?}",
                bo.handle(),
                existing
            )));
        }
        mappings.insert(bo.handle(), op);
        bo.set_virt(bo.backing().as_ptr());
        Ok(())
    }

    fn close_mapping(&self, bo: &BufferObject, op: MapOperation) -> Result<()> {
        let mut mappings = self.mappings.lock();
        match mappings.get(&bo.handle()) {
            Some(existing) if *existing == op => {
                mappings.remove(&bo.handle());
                bo.set_virt(std::ptr::null_mut());
                Ok(())
            }
            Some(existing) => Err(Error::InvalidState(format!(
                "bo {} mapped with {:?}, unmapped with {:?}",
                bo.handle(),
                existing,
                op
            ))),
            None => Err(Error::InvalidState(format!("bo {} is not mapped", bo.handle()))),
        }
    }
}

impl BufferManager for ShmBufferManager {
    fn alloc(&self, params: &LinearAlloc<'_>) -> Result<Arc<BufferObject>> {
        let alignment = params.alignment.max(1).next_power_of_two();
        let size = align_up(params.size, alignment);
        log::trace!("linear alloc '{}' in {:?}", params.name, params.mem_type);
        self.create(params.name, size, TilingMode::None, 0)
    }

    fn alloc_tiled(&self, params: &TiledAlloc<'_>) -> Result<Arc<BufferObject>> {
        let (tile_width, tile_height) = tile_dims(params.tiling);
        let pitch = align_up(params.x as u64 * params.cpp.max(1) as u64, tile_width as u64);
        let rows = align_up(params.y as u64, tile_height as u64);
        let size = align_up(pitch * rows, LINEAR_ALIGNMENT);
        log::trace!(
            "tiled alloc '{}' {:?} pitch {} rows {} in {:?}",
            params.name,
            params.tiling,
            pitch,
            rows,
            params.mem_type
        );
        self.create(params.name, size, params.tiling, pitch as u32)
    }

    fn alloc_userptr(&self, params: &UserptrAlloc<'_>) -> Result<Arc<BufferObject>> {
        if (params.memory.len() as u64) < params.size {
            return Err(Error::InvalidParameter(format!(
                "user memory of {} bytes is smaller than {}",
                params.memory.len(),
                params.size
            )));
        }
        let handle = self.next_handle();
        log::debug!("bo {} '{}': userptr {} bytes", handle, params.name, params.size);
        Ok(self.track(BufferObject::new(
            handle,
            params.tiling,
            params.stride,
            BufferBacking::UserPtr(params.memory),
        )))
    }

    fn unreference(&self, bo: Arc<BufferObject>) {
        self.mappings.lock().remove(&bo.handle());
        self.released.fetch_add(1, Ordering::SeqCst);
        drop(bo);
    }

    fn map(&self, bo: &BufferObject, write_only: bool) -> Result<()> {
        log::trace!("map bo {} write_only={}", bo.handle(), write_only);
        self.open_mapping(bo, MapOperation::Mmap)
    }

    fn unmap(&self, bo: &BufferObject) -> Result<()> {
        self.close_mapping(bo, MapOperation::Mmap)
    }

    fn map_wc(&self, bo: &BufferObject) -> Result<()> {
        self.open_mapping(bo, MapOperation::MmapWc)
    }

    fn unmap_wc(&self, bo: &BufferObject) -> Result<()> {
        self.close_mapping(bo, MapOperation::MmapWc)
    }

    fn map_gtt(&self, bo: &BufferObject) -> Result<()> {
        self.open_mapping(bo, MapOperation::MmapGtt)
    }

    fn unmap_gtt(&self, bo: &BufferObject) -> Result<()> {
        self.close_mapping(bo, MapOperation::MmapGtt)
    }
}
