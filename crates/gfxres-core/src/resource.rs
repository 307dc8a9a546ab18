//! Graphics resource: one GPU buffer and its CPU mapping state

use crate::buffer::{BufferObject, SystemMemory};
use crate::bufmgr::{BufferManager, LinearAlloc, TiledAlloc, UserptrAlloc, LINEAR_ALIGNMENT};
use crate::context::DeviceContext;
use crate::descriptor::MosResource;
use crate::error::status_of;
use crate::flags::{ResourceFlags, SkuFlags};
use crate::format::Format;
use crate::guard::ResourceGuard;
use crate::policy::MemoryPolicyParameter;
use crate::resinfo::{ResInfoRequest, ResourceInfo};
use crate::storage::{HwResourceType, MapOperation, MemType, MemoryObjectControl, ResourceKind, ResourceUsage};
use crate::swizzle::{swizzle, YTileLayout};
use crate::tile::{ForcedTileMode, MmcHint, MmcMode, TileModeGmm, TileType, TilingMode};
use crate::trace::{AllocateEventData, TraceEvent};
use crate::{Error, Result};
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Longest buffer name passed to the buffer manager, in bytes
pub const MAX_BUF_NAME_LEN: usize = 256;

/// Live graphics allocations in this process
static ALLOC_COUNTER: AtomicI64 = AtomicI64::new(0);

/// Number of allocated, not yet freed resources in this process
pub fn allocation_count() -> i64 {
    ALLOC_COUNTER.load(Ordering::SeqCst)
}

/// Allocation request
#[derive(Debug, Clone, Default)]
pub struct CreateParams {
    pub kind: ResourceKind,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub format: Format,
    pub tile_type: TileType,
    pub tile_mode_by_force: Option<ForcedTileMode>,
    /// Content may be media compressed
    pub compressible: bool,
    pub compression_mode: MmcMode,
    /// Caller memory backing the resource, forces a linear layout
    pub system_memory: Option<SystemMemory>,
    pub name: String,
    /// Preferred memory pool
    pub mem_type: MemType,
    pub usage: ResourceUsage,
}

impl CreateParams {
    pub fn new(kind: ResourceKind, format: Format, width: u32, height: u32) -> Self {
        Self {
            kind,
            format,
            width,
            height,
            depth: 1,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_tile_type(mut self, tile_type: TileType) -> Self {
        self.tile_type = tile_type;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_compression(mut self, mode: MmcMode) -> Self {
        self.compressible = true;
        self.compression_mode = mode;
        self
    }

    pub fn with_forced_tile_mode(mut self, mode: ForcedTileMode) -> Self {
        self.tile_mode_by_force = Some(mode);
        self
    }

    pub fn with_system_memory(mut self, memory: SystemMemory) -> Self {
        self.system_memory = Some(memory);
        self
    }

    pub fn with_mem_type(mut self, mem_type: MemType) -> Self {
        self.mem_type = mem_type;
        self
    }

    pub fn with_usage(mut self, usage: ResourceUsage) -> Self {
        self.usage = usage;
        self
    }
}

/// Lock request
#[derive(Debug, Clone, Copy, Default)]
pub struct LockParams {
    /// Skip decompression of compressed surfaces
    pub no_decompress: bool,
    /// Map tiled surfaces without detiling
    pub tile_as_tiled: bool,
    /// Write-combined mapping
    pub uncached: bool,
    /// Caller only writes through the mapping
    pub write_request: bool,
}

/// A single GPU buffer plus its CPU mapping state
pub struct GraphicsResource {
    format: Format,
    width: u32,
    height: u32,
    depth: u32,
    array_size: u32,
    pitch: u32,
    size: u64,
    tile_type: TileType,
    tile_mode_gmm: TileModeGmm,
    gmm_tile_enabled: bool,
    compressible: bool,
    is_compressed: bool,
    compression_mode: MmcMode,
    bo: Option<Arc<BufferObject>>,
    res_info: Option<Box<dyn ResourceInfo>>,
    mapped: bool,
    map_operation: MapOperation,
    /// Linear copy of a tiled surface while software swizzling
    shadow: Option<Vec<u8>>,
    data: *mut u8,
    memory_object_control: MemoryObjectControl,
    usage: ResourceUsage,
    user_provided_va: Option<u64>,
    name: String,
}

// Safety: `data` points into the owned shadow buffer or the mapping of the
// owned buffer object; a resource has a single owner at a time
unsafe impl Send for GraphicsResource {}

impl Default for GraphicsResource {
    fn default() -> Self {
        Self::new()
    }
}

fn check_context(context: Option<&dyn DeviceContext>) -> Result<&dyn DeviceContext> {
    let context = context.ok_or_else(|| {
        log::error!("Unable to get the active device context.");
        Error::InvalidHandle("no device context")
    })?;
    if !context.is_valid() {
        log::error!("The device context is not valid.");
        return Err(Error::InvalidHandle("device context is not valid"));
    }
    Ok(context)
}

/// Undo a mapping opened with `operation`
fn close_mapping(bufmgr: &dyn BufferManager, bo: &BufferObject, operation: MapOperation) -> Result<()> {
    match operation {
        MapOperation::MmapGtt => bufmgr.unmap_gtt(bo),
        MapOperation::MmapWc => bufmgr.unmap_wc(bo),
        MapOperation::Mmap => bufmgr.unmap(bo),
        MapOperation::None => {
            log::error!("Invalid mmap operation type");
            Ok(())
        }
    }
}

/// Truncate to `MAX_BUF_NAME_LEN - 1` bytes on a char boundary
fn buffer_name(name: &str) -> &str {
    if name.len() < MAX_BUF_NAME_LEN {
        return name;
    }
    let mut end = MAX_BUF_NAME_LEN - 1;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

impl GraphicsResource {
    /// Create an empty resource
    pub fn new() -> Self {
        Self {
            format: Format::Invalid,
            width: 0,
            height: 0,
            depth: 0,
            array_size: 0,
            pitch: 0,
            size: 0,
            tile_type: TileType::Linear,
            tile_mode_gmm: TileModeGmm::Linear,
            gmm_tile_enabled: false,
            compressible: false,
            is_compressed: false,
            compression_mode: MmcMode::Disabled,
            bo: None,
            res_info: None,
            mapped: false,
            map_operation: MapOperation::None,
            shadow: None,
            data: ptr::null_mut(),
            memory_object_control: MemoryObjectControl::default(),
            usage: ResourceUsage::Default,
            user_provided_va: None,
            name: String::new(),
        }
    }

    /// Allocate the GPU buffer described by `params`
    ///
    /// On failure the resource stays empty.
    pub fn allocate(&mut self, context: Option<&dyn DeviceContext>, params: &CreateParams) -> Result<()> {
        let context = check_context(context)?;
        if self.bo.is_some() {
            return Err(Error::InvalidState(format!("'{}' is already allocated", self.name)));
        }

        let (resource_type, mut flags, base_height, depth) = match params.kind {
            ResourceKind::Buffer | ResourceKind::Scratch => {
                (HwResourceType::Buffer, ResourceFlags::STATE, 1, 1)
            }
            ResourceKind::Surface2D => (HwResourceType::Surface2D, ResourceFlags::VIDEO, params.height, 1),
            ResourceKind::Volume => (
                HwResourceType::Volume,
                ResourceFlags::VIDEO,
                params.height,
                params.depth,
            ),
            ResourceKind::Invalid => {
                log::error!("Unknown surface type");
                return Err(Error::UnknownKind);
            }
        };

        let format = params.format.to_hw().ok_or_else(|| {
            log::error!("Unsupported format {:?}", params.format);
            Error::UnsupportedFormat(params.format)
        })?;

        log::debug!(
            "tilemode: {:?} for '{}', forced {:?}",
            params.tile_type,
            params.name,
            params.tile_mode_by_force
        );

        let sku = context.sku_table();
        match params.tile_type {
            TileType::Y => {
                if params.compressible
                    && sku.contains(SkuFlags::E2E_COMPRESSION | SkuFlags::COMPRESSIBLE_SURFACE_DEFAULT)
                {
                    flags |= ResourceFlags::MMC
                        | ResourceFlags::MEDIA_COMPRESSED
                        | ResourceFlags::CCS
                        | ResourceFlags::RENDER_TARGET
                        | ResourceFlags::UNIFIED_AUX_SURFACE;
                    if sku.contains(SkuFlags::FLAT_PHYS_CCS) {
                        flags.remove(ResourceFlags::UNIFIED_AUX_SURFACE);
                    }
                }
                match params.tile_mode_by_force {
                    Some(ForcedTileMode::Tile4) => flags |= ResourceFlags::TILE4,
                    Some(ForcedTileMode::Tile64) => flags |= ResourceFlags::TILE64,
                    None => {}
                }
            }
            TileType::X => flags |= ResourceFlags::TILED_X,
            TileType::Linear => flags |= ResourceFlags::LINEAR,
        }

        let mut request = ResInfoRequest {
            resource_type,
            format,
            base_width: params.width,
            base_height,
            depth,
            array_size: 1,
            flags,
            no_gfx_memory: false,
            existing_sys_mem_size: 0,
            existing_sys_mem: None,
        };

        let service = context.resource_info_service();
        if let Some(memory) = params.system_memory {
            // Caller pages back the resource, it must be linear. Compute the
            // unmanaged size first, then bind the memory.
            request.flags |= ResourceFlags::LINEAR | ResourceFlags::CACHEABLE;
            request.no_gfx_memory = true;
            let sizing = service.create(&request).ok_or_else(|| {
                log::error!("Create sizing resource info failed");
                Error::Unknown("sizing resource info failed".to_string())
            })?;
            request.existing_sys_mem_size = sizing.size_surface();
            drop(sizing);

            request.existing_sys_mem = Some(memory);
            request.no_gfx_memory = false;
            request.flags |= ResourceFlags::EXISTING_SYS_MEM;
        } else if sku.contains(SkuFlags::LOCAL_MEMORY) {
            request.flags |= ResourceFlags::LOCAL_ONLY;
        }

        let mut res_info = service.create(&request).ok_or_else(|| {
            log::error!("Create resource info failed for '{}'", params.name);
            Error::InvalidParameter(format!("resource info rejected '{}'", params.name))
        })?;

        let tile_type = res_info.tile_type().to_tile_type();
        let tiling = TilingMode::from(tile_type);
        if params.tile_type == TileType::Y {
            res_info.set_mmc_mode(params.compression_mode, 0);
        }

        let mut pitch = res_info.render_pitch() as u32;
        let size = res_info.size_surface();
        let height = res_info.base_height();
        let bufname = buffer_name(&params.name);

        let mem_type = match params.system_memory {
            Some(_) => MemType::Video,
            None => context.memory_policy().choose(&MemoryPolicyParameter {
                sku,
                wa: context.wa_table(),
                res_info: &*res_info,
                name: &params.name,
                preferred: params.mem_type,
            }),
        };

        let sink = context.trace_sink();
        sink.emit(&TraceEvent::AllocateStart);

        let bufmgr = context.buffer_manager();
        let allocated = if let Some(memory) = params.system_memory {
            bufmgr.alloc_userptr(&UserptrAlloc {
                name: bufname,
                memory,
                tiling,
                stride: pitch,
                size,
            })
        } else if tiling == TilingMode::None {
            bufmgr.alloc(&LinearAlloc {
                name: bufname,
                size,
                alignment: LINEAR_ALIGNMENT,
                mem_type,
            })
        } else {
            bufmgr
                .alloc_tiled(&TiledAlloc {
                    name: bufname,
                    x: pitch,
                    y: size.div_ceil(pitch.max(1) as u64) as u32,
                    cpp: 1,
                    tiling,
                    mem_type,
                })
                .inspect(|bo| pitch = bo.pitch())
        };

        let result = match allocated {
            Ok(bo) => {
                self.format = params.format;
                self.width = params.width;
                self.height = height;
                self.pitch = pitch;
                self.depth = res_info.base_depth().max(1);
                self.array_size = 1;
                self.size = size;
                self.tile_type = tile_type;
                self.tile_mode_gmm = res_info.tile_mode_surface_state();
                self.gmm_tile_enabled = true;
                self.compressible =
                    flags.contains(ResourceFlags::MMC) && res_info.mmc_hint(0) == MmcHint::On;
                self.is_compressed = res_info.is_media_memory_compressed(0);
                self.compression_mode = res_info.mmc_mode(0);
                self.memory_object_control = context.memory_object_control(params.usage);
                self.usage = params.usage;
                self.user_provided_va = params.system_memory.map(|memory| memory.as_ptr() as u64);
                self.name = params.name.clone();
                self.mapped = false;
                self.map_operation = MapOperation::None;
                self.data = bo.virt();

                log::debug!(
                    "Alloc {} bytes ({} x {} resource), tile encoding {:?}",
                    size,
                    params.width,
                    height,
                    self.tile_mode_gmm
                );

                let data = AllocateEventData {
                    handle: bo.handle(),
                    format: params.format as u32,
                    base_width: self.width,
                    base_height: self.height,
                    pitch: self.pitch,
                    size: self.size as u32,
                    tile_type: self.tile_type as u32,
                    resource_flags: res_info.res_flags().bits(),
                    reserved: 0,
                };
                sink.emit(&TraceEvent::AllocateInfo {
                    data,
                    name: &params.name,
                });

                self.bo = Some(bo);
                self.res_info = Some(res_info);
                ALLOC_COUNTER.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            Err(e) => {
                log::error!(
                    "Fail to Alloc {} bytes ({} x {} resource): {}",
                    size,
                    params.width,
                    params.height,
                    e
                );
                Err(Error::OutOfMemory {
                    name: params.name.clone(),
                    size,
                })
            }
        };

        sink.emit(&TraceEvent::AllocateEnd {
            status: status_of(&result),
        });
        result
    }

    /// Release the buffer and its metadata; never fails and is idempotent
    pub fn free(&mut self, context: Option<&dyn DeviceContext>, _flags: u32) {
        let Some(bo) = self.bo.take() else {
            return;
        };
        if self.mapped {
            log::warn!("Freeing '{}' while mapped with {:?}", self.name, self.map_operation);
        }

        let res_info = self.res_info.take();
        match context {
            Some(context) => {
                if let (Some(aux), Some(info)) = (context.aux_table(), res_info.as_deref()) {
                    aux.unmap_resource(info, &bo);
                }
                context.buffer_manager().unreference(bo);
            }
            None => drop(bo),
        }

        if let Some(info) = res_info {
            drop(info);
            ALLOC_COUNTER.fetch_sub(1, Ordering::SeqCst);
        }

        *self = Self::new();
    }

    /// Map the resource for CPU access
    ///
    /// A second lock while mapped returns the existing pointer.
    pub fn lock(&mut self, context: Option<&dyn DeviceContext>, params: &LockParams) -> Result<NonNull<u8>> {
        let context = check_context(context)?;
        let bo = self.bo.clone().ok_or(Error::NotAllocated)?;

        let needs_decompress = {
            let res_info = self
                .res_info
                .as_deref()
                .ok_or_else(|| Error::InvalidState("resource info missing".to_string()))?;
            !params.no_decompress
                && (res_info.res_flags().is_media_compressed() || res_info.is_media_memory_compressed(0))
        };

        if needs_decompress {
            let decompressor = context.decompressor().ok_or_else(|| {
                log::error!("Compressed surface '{}' locked without a decompressor", self.name);
                Error::InvalidState("media decompression is not available".to_string())
            })?;
            decompressor.decompress(&self.to_mos_resource());
        }

        if self.mapped {
            return NonNull::new(self.data)
                .ok_or_else(|| Error::InvalidState(format!("'{}' is mapped without a pointer", self.name)));
        }

        let bufmgr = context.buffer_manager();
        let operation = if context.is_atom_soc() {
            bufmgr.map_gtt(&bo)?;
            MapOperation::MmapGtt
        } else if self.tile_type.is_tiled() && !params.tile_as_tiled {
            if context.use_sw_swizzling() {
                if self.tile_type != TileType::Y {
                    return Err(Error::InvalidState(format!(
                        "software swizzling does not support {:?} tiles",
                        self.tile_type
                    )));
                }
                bufmgr.map(&bo, params.write_request)?;
                if let Err(e) = self.detile_to_shadow(context, &bo) {
                    self.shadow = None;
                    if let Err(unmap) = bufmgr.unmap(&bo) {
                        log::error!("Unmap after failed detile: {}", unmap);
                    }
                    return Err(e);
                }
                MapOperation::Mmap
            } else {
                bufmgr.map_gtt(&bo)?;
                MapOperation::MmapGtt
            }
        } else if params.uncached {
            bufmgr.map_wc(&bo)?;
            MapOperation::MmapWc
        } else {
            bufmgr.map(&bo, params.write_request)?;
            MapOperation::Mmap
        };

        let data = match self.shadow.as_mut() {
            Some(shadow) => shadow.as_mut_ptr(),
            None => bo.virt(),
        };
        let Some(ptr) = NonNull::new(data) else {
            log::error!("Buffer of '{}' produced no mapping", self.name);
            self.shadow = None;
            if let Err(e) = close_mapping(bufmgr, &bo, operation) {
                log::error!("Unmap after failed mapping: {}", e);
            }
            return Err(Error::InvalidState("allocated buffer produced no mapping".to_string()));
        };

        self.map_operation = operation;
        self.mapped = true;
        self.data = data;
        Ok(ptr)
    }

    /// Close the CPU mapping opened by `lock`
    pub fn unlock(&mut self, context: Option<&dyn DeviceContext>) -> Result<()> {
        let context = check_context(context)?;
        let Some(bo) = self.bo.clone() else {
            return Ok(());
        };

        let mut result = Ok(());
        if self.mapped {
            let bufmgr = context.buffer_manager();
            if context.is_atom_soc() {
                result = bufmgr.unmap_gtt(&bo);
            } else {
                if let Some(shadow) = self.shadow.take() {
                    result = self.retile_from_shadow(context, &bo, &shadow);
                }

                result = result.and(close_mapping(bufmgr, &bo, self.map_operation));
            }

            self.mapped = false;
            self.map_operation = MapOperation::None;
            bo.set_virt(ptr::null_mut());
        }
        self.data = ptr::null_mut();

        if let Err(e) = &result {
            log::error!("Unlock of '{}' failed: {}", self.name, e);
        }
        result
    }

    /// Lock and return a guard that unlocks when dropped
    pub fn map<'a>(
        &'a mut self,
        context: &'a dyn DeviceContext,
        params: &LockParams,
    ) -> Result<ResourceGuard<'a>> {
        if self.mapped {
            return Err(Error::InvalidState(format!("'{}' is already mapped", self.name)));
        }
        let ptr = self.lock(Some(context), params)?;
        let len = self.mapped_len();
        Ok(ResourceGuard::new(self, context, ptr, len))
    }

    /// Shadow rows, pitch and layout for software swizzling
    fn swizzle_geometry(&self, context: &dyn DeviceContext) -> Result<(usize, usize, YTileLayout)> {
        let res_info = self
            .res_info
            .as_deref()
            .ok_or_else(|| Error::InvalidState("resource info missing".to_string()))?;
        if self.pitch == 0 {
            return Err(Error::InvalidState("invalid pitch".to_string()));
        }
        let pitch = self.pitch as usize;
        let rows = res_info.size_main_surface() as usize / pitch;
        Ok((rows, pitch, YTileLayout::from_legacy_flag(context.tile_y_is_legacy())))
    }

    fn detile_to_shadow(&mut self, context: &dyn DeviceContext, bo: &BufferObject) -> Result<()> {
        let (rows, pitch, layout) = self.swizzle_geometry(context)?;
        if bo.virt().is_null() || bo.size() == 0 {
            return Err(Error::InvalidState("invalid buffer mapping".to_string()));
        }
        // Safety: the buffer is mapped for `bo.size()` bytes until unlock
        let raw = unsafe { std::slice::from_raw_parts(bo.virt(), bo.size()) };
        let shadow = self.shadow.get_or_insert_with(|| vec![0u8; bo.size()]);
        swizzle(raw, shadow, TileType::Y, TileType::Linear, rows, pitch, layout)
    }

    fn retile_from_shadow(&self, context: &dyn DeviceContext, bo: &BufferObject, shadow: &[u8]) -> Result<()> {
        let (rows, pitch, layout) = self.swizzle_geometry(context)?;
        if bo.virt().is_null() {
            return Err(Error::InvalidState("invalid buffer mapping".to_string()));
        }
        // Safety: the buffer is mapped for `bo.size()` bytes and the shadow
        // is a separate allocation
        let raw = unsafe { std::slice::from_raw_parts_mut(bo.virt(), bo.size()) };
        swizzle(shadow, raw, TileType::Linear, TileType::Y, rows, pitch, layout)
    }

    /// Bytes reachable through the current mapping
    pub fn mapped_len(&self) -> usize {
        if !self.mapped {
            return 0;
        }
        match (&self.shadow, &self.bo) {
            (Some(shadow), _) => shadow.len(),
            (None, Some(bo)) => bo.size(),
            (None, None) => 0,
        }
    }

    /// Fill `out` with a borrowed descriptor of this resource
    pub fn convert_to_mos_resource<'a>(&'a self, out: Option<&mut MosResource<'a>>) -> Result<()> {
        let out = out.ok_or_else(|| Error::InvalidParameter("no output descriptor".to_string()))?;
        *out = self.to_mos_resource();
        Ok(())
    }

    pub fn to_mos_resource(&self) -> MosResource<'_> {
        MosResource {
            format: self.format,
            width: self.width,
            height: self.height,
            pitch: self.pitch,
            depth: self.depth,
            tile_type: self.tile_type,
            tile_mode_gmm: self.tile_mode_gmm,
            gmm_tile_enabled: self.gmm_tile_enabled,
            count: 0,
            data: self.data,
            name: &self.name,
            bo: self.bo.as_ref(),
            mapped: self.mapped,
            map_operation: self.map_operation,
            res_info: self.res_info.as_deref(),
            user_provided_va: self.user_provided_va,
            memory_object_control: self.memory_object_control,
            usage: self.usage,
            gfx_resource: Some(self),
        }
    }

    /// Same underlying buffer; false when either side has none
    pub fn is_equal(&self, other: Option<&GraphicsResource>) -> bool {
        match (&self.bo, other.and_then(|other| other.bo.as_ref())) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.bo.is_some()
    }

    /// No buffer and, in debug builds, no CPU pointer
    pub fn resource_is_null(&self) -> bool {
        self.bo.is_none() && (!cfg!(debug_assertions) || self.data.is_null())
    }

    /// GPU synchronization is not tracked on this platform
    pub fn set_sync_tag(&self, _context: Option<&dyn DeviceContext>, _stream_index: u32) -> Result<()> {
        Ok(())
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn array_size(&self) -> u32 {
        self.array_size
    }

    pub fn pitch(&self) -> u32 {
        self.pitch
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn tile_type(&self) -> TileType {
        self.tile_type
    }

    pub fn tile_mode_gmm(&self) -> TileModeGmm {
        self.tile_mode_gmm
    }

    pub fn is_compressible(&self) -> bool {
        self.compressible
    }

    pub fn is_compressed(&self) -> bool {
        self.is_compressed
    }

    pub fn compression_mode(&self) -> MmcMode {
        self.compression_mode
    }

    pub fn is_mapped(&self) -> bool {
        self.mapped
    }

    pub fn map_operation(&self) -> MapOperation {
        self.map_operation
    }

    /// Whether a software-swizzle shadow buffer is live
    pub fn has_shadow(&self) -> bool {
        self.shadow.is_some()
    }

    pub fn buffer(&self) -> Option<&Arc<BufferObject>> {
        self.bo.as_ref()
    }

    pub fn res_info(&self) -> Option<&dyn ResourceInfo> {
        self.res_info.as_deref()
    }

    pub fn memory_object_control(&self) -> MemoryObjectControl {
        self.memory_object_control
    }

    pub fn usage(&self) -> ResourceUsage {
        self.usage
    }

    pub fn user_provided_va(&self) -> Option<u64> {
        self.user_provided_va
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for GraphicsResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsResource")
            .field("name", &self.name)
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pitch", &self.pitch)
            .field("size", &self.size)
            .field("tile_type", &self.tile_type)
            .field("bo", &self.bo)
            .field("mapped", &self.mapped)
            .field("map_operation", &self.map_operation)
            .finish_non_exhaustive()
    }
}
