//! Device context: capability tables and platform collaborators

use crate::buffer::BufferObject;
use crate::bufmgr::{BufferManager, ShmBufferManager};
use crate::descriptor::MosResource;
use crate::flags::{SkuFlags, WaFlags};
use crate::policy::{DefaultMemoryPolicy, MemoryPlacementPolicy};
use crate::resinfo::{ResourceInfo, ResourceInfoService, SoftResourceInfoService};
use crate::storage::{MemoryObjectControl, ResourceUsage};
use crate::trace::{LogSink, TraceSink};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Auxiliary translation table holding compression mappings
pub trait AuxTableManager: Send + Sync {
    fn unmap_resource(&self, res_info: &dyn ResourceInfo, bo: &BufferObject);
}

/// Hardware decompression of media-compressed surfaces
pub trait MediaDecompressor: Send + Sync {
    /// Decompress the surface in place
    fn decompress(&self, resource: &MosResource<'_>);
}

/// Platform context a resource is allocated against
///
/// Implementations are chosen once per device and expose only what the
/// resource lifecycle needs.
pub trait DeviceContext {
    fn is_valid(&self) -> bool;
    fn sku_table(&self) -> SkuFlags;
    fn wa_table(&self) -> WaFlags;
    fn buffer_manager(&self) -> &dyn BufferManager;
    fn resource_info_service(&self) -> &dyn ResourceInfoService;

    fn aux_table(&self) -> Option<&dyn AuxTableManager> {
        None
    }

    fn decompressor(&self) -> Option<&dyn MediaDecompressor> {
        None
    }

    /// Legacy SoC without regular GTT semantics
    fn is_atom_soc(&self) -> bool {
        false
    }

    /// Tiled surfaces must be swizzled on the CPU
    fn use_sw_swizzling(&self) -> bool {
        false
    }

    fn tile_y_is_legacy(&self) -> bool {
        true
    }

    fn memory_policy(&self) -> &dyn MemoryPlacementPolicy {
        &DefaultMemoryPolicy
    }

    fn trace_sink(&self) -> &dyn TraceSink {
        &LogSink
    }

    /// Cache-policy tag for a usage type
    fn memory_object_control(&self, usage: ResourceUsage) -> MemoryObjectControl;
}

/// Platform description for `SoftContext`
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub sku: SkuFlags,
    pub wa: WaFlags,
    pub atom_soc: bool,
    pub sw_swizzling: bool,
    pub tile_y_legacy: bool,
    pub aux_table: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            sku: SkuFlags::empty(),
            wa: WaFlags::empty(),
            atom_soc: false,
            sw_swizzling: false,
            tile_y_legacy: true,
            aux_table: false,
        }
    }
}

impl PlatformConfig {
    pub fn with_sku(mut self, sku: SkuFlags) -> Self {
        self.sku = sku;
        self
    }

    pub fn with_wa(mut self, wa: WaFlags) -> Self {
        self.wa = wa;
        self
    }

    pub fn with_atom_soc(mut self, atom_soc: bool) -> Self {
        self.atom_soc = atom_soc;
        self
    }

    pub fn with_sw_swizzling(mut self, sw_swizzling: bool) -> Self {
        self.sw_swizzling = sw_swizzling;
        self
    }

    pub fn with_tile_y_legacy(mut self, legacy: bool) -> Self {
        self.tile_y_legacy = legacy;
        self
    }

    pub fn with_aux_table(mut self, aux_table: bool) -> Self {
        self.aux_table = aux_table;
        self
    }
}

/// Aux table that records the buffers it unmaps
#[derive(Default)]
pub struct SoftAuxTable {
    unmapped: Mutex<Vec<u32>>,
}

impl SoftAuxTable {
    /// Handles of unmapped buffers, in order
    pub fn unmapped(&self) -> Vec<u32> {
        self.unmapped.lock().clone()
    }
}

impl AuxTableManager for SoftAuxTable {
    fn unmap_resource(&self, res_info: &dyn ResourceInfo, bo: &BufferObject) {
        log::trace!("aux table unmap bo {} ({} bytes)", bo.handle(), res_info.size_surface());
        self.unmapped.lock().push(bo.handle());
    }
}

/// Software device context backed by shared memory
pub struct SoftContext {
    config: PlatformConfig,
    valid: AtomicBool,
    bufmgr: ShmBufferManager,
    resinfo: SoftResourceInfoService,
    aux: Option<SoftAuxTable>,
    decompressor: Option<Box<dyn MediaDecompressor>>,
    trace: Arc<dyn TraceSink>,
}

impl Default for SoftContext {
    fn default() -> Self {
        Self::new(PlatformConfig::default())
    }
}

impl SoftContext {
    pub fn new(config: PlatformConfig) -> Self {
        let aux = config.aux_table.then(SoftAuxTable::default);
        Self {
            config,
            valid: AtomicBool::new(true),
            bufmgr: ShmBufferManager::new(),
            resinfo: SoftResourceInfoService::new(),
            aux,
            decompressor: None,
            trace: Arc::new(LogSink),
        }
    }

    pub fn with_decompressor(mut self, decompressor: Box<dyn MediaDecompressor>) -> Self {
        self.decompressor = Some(decompressor);
        self
    }

    pub fn with_trace_sink(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.trace = sink;
        self
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Mark the context as torn down
    pub fn invalidate(&self) {
        self.valid.store(false, Ordering::SeqCst);
    }

    pub fn bufmgr(&self) -> &ShmBufferManager {
        &self.bufmgr
    }

    pub fn resinfo(&self) -> &SoftResourceInfoService {
        &self.resinfo
    }

    pub fn soft_aux_table(&self) -> Option<&SoftAuxTable> {
        self.aux.as_ref()
    }
}

impl DeviceContext for SoftContext {
    fn is_valid(&self) -> bool {
        self.valid.load(Ordering::SeqCst)
    }

    fn sku_table(&self) -> SkuFlags {
        self.config.sku
    }

    fn wa_table(&self) -> WaFlags {
        self.config.wa
    }

    fn buffer_manager(&self) -> &dyn BufferManager {
        &self.bufmgr
    }

    fn resource_info_service(&self) -> &dyn ResourceInfoService {
        &self.resinfo
    }

    fn aux_table(&self) -> Option<&dyn AuxTableManager> {
        self.aux.as_ref().map(|aux| aux as &dyn AuxTableManager)
    }

    fn decompressor(&self) -> Option<&dyn MediaDecompressor> {
        self.decompressor.as_deref()
    }

    fn is_atom_soc(&self) -> bool {
        self.config.atom_soc
    }

    fn use_sw_swizzling(&self) -> bool {
        self.config.sw_swizzling
    }

    fn tile_y_is_legacy(&self) -> bool {
        self.config.tile_y_legacy
    }

    fn trace_sink(&self) -> &dyn TraceSink {
        self.trace.as_ref()
    }

    fn memory_object_control(&self, usage: ResourceUsage) -> MemoryObjectControl {
        // Uncached for staging, write-back everywhere else
        let index = match usage {
            ResourceUsage::Staging => 1,
            _ => 2,
        };
        MemoryObjectControl(index << 1)
    }
}
