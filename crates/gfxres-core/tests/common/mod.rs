//! Scripted platform for failure-path tests
#![allow(dead_code)]

use gfxres_core::bufmgr::{LinearAlloc, TiledAlloc, UserptrAlloc};
use gfxres_core::storage::MemoryObjectControl;
use gfxres_core::{
    BufferManager, BufferObject, DeviceContext, Error, MemorySink, ResourceInfoService, ResourceUsage, Result,
    ShmBufferManager, SkuFlags, SoftResourceInfoService, TraceSink, WaFlags,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// How the scripted buffer manager misbehaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    #[default]
    Normal,
    /// Every allocation fails
    FailAlloc,
    /// Maps succeed but leave no CPU address
    NullMap,
}

/// Shared-memory buffer manager that follows a script and records names
pub struct ScriptedBufferManager {
    inner: ShmBufferManager,
    script: Script,
    names: Mutex<Vec<String>>,
}

impl ScriptedBufferManager {
    fn record(&self, name: &str) -> Result<()> {
        self.names.lock().push(name.to_string());
        match self.script {
            Script::FailAlloc => Err(Error::SharedMemory("scripted exhaustion".to_string())),
            _ => Ok(()),
        }
    }

    fn after_map(&self, bo: &BufferObject) {
        if self.script == Script::NullMap {
            bo.set_virt(std::ptr::null_mut());
        }
    }

    /// Names received by the allocation calls, in order
    pub fn names(&self) -> Vec<String> {
        self.names.lock().clone()
    }

    pub fn inner(&self) -> &ShmBufferManager {
        &self.inner
    }
}

impl BufferManager for ScriptedBufferManager {
    fn alloc(&self, params: &LinearAlloc<'_>) -> Result<Arc<BufferObject>> {
        self.record(params.name)?;
        self.inner.alloc(params)
    }

    fn alloc_tiled(&self, params: &TiledAlloc<'_>) -> Result<Arc<BufferObject>> {
        self.record(params.name)?;
        self.inner.alloc_tiled(params)
    }

    fn alloc_userptr(&self, params: &UserptrAlloc<'_>) -> Result<Arc<BufferObject>> {
        self.record(params.name)?;
        self.inner.alloc_userptr(params)
    }

    fn unreference(&self, bo: Arc<BufferObject>) {
        self.inner.unreference(bo);
    }

    fn map(&self, bo: &BufferObject, write_only: bool) -> Result<()> {
        self.inner.map(bo, write_only)?;
        self.after_map(bo);
        Ok(())
    }

    fn unmap(&self, bo: &BufferObject) -> Result<()> {
        self.inner.unmap(bo)
    }

    fn map_wc(&self, bo: &BufferObject) -> Result<()> {
        self.inner.map_wc(bo)?;
        self.after_map(bo);
        Ok(())
    }

    fn unmap_wc(&self, bo: &BufferObject) -> Result<()> {
        self.inner.unmap_wc(bo)
    }

    fn map_gtt(&self, bo: &BufferObject) -> Result<()> {
        self.inner.map_gtt(bo)?;
        self.after_map(bo);
        Ok(())
    }

    fn unmap_gtt(&self, bo: &BufferObject) -> Result<()> {
        self.inner.unmap_gtt(bo)
    }
}

/// Device context around a `ScriptedBufferManager`
pub struct ScriptedContext {
    bufmgr: ScriptedBufferManager,
    resinfo: SoftResourceInfoService,
    sink: MemorySink,
}

impl ScriptedContext {
    pub fn new(script: Script) -> Self {
        Self {
            bufmgr: ScriptedBufferManager {
                inner: ShmBufferManager::new(),
                script,
                names: Mutex::new(Vec::new()),
            },
            resinfo: SoftResourceInfoService::new(),
            sink: MemorySink::new(),
        }
    }

    pub fn bufmgr(&self) -> &ScriptedBufferManager {
        &self.bufmgr
    }

    pub fn resinfo(&self) -> &SoftResourceInfoService {
        &self.resinfo
    }

    pub fn sink(&self) -> &MemorySink {
        &self.sink
    }

    pub fn dev(&self) -> Option<&dyn DeviceContext> {
        Some(self as &dyn DeviceContext)
    }
}

impl DeviceContext for ScriptedContext {
    fn is_valid(&self) -> bool {
        true
    }

    fn sku_table(&self) -> SkuFlags {
        SkuFlags::empty()
    }

    fn wa_table(&self) -> WaFlags {
        WaFlags::empty()
    }

    fn buffer_manager(&self) -> &dyn BufferManager {
        &self.bufmgr
    }

    fn resource_info_service(&self) -> &dyn ResourceInfoService {
        &self.resinfo
    }

    fn trace_sink(&self) -> &dyn TraceSink {
        &self.sink
    }

    fn memory_object_control(&self, _usage: ResourceUsage) -> MemoryObjectControl {
        MemoryObjectControl::default()
    }
}
