//! Resource-info service: tiling, pitch, size and compression metadata

use crate::buffer::SystemMemory;
use crate::bufmgr::{align_up, LINEAR_ALIGNMENT};
use crate::flags::ResourceFlags;
use crate::format::HwFormat;
use crate::storage::HwResourceType;
use crate::tile::{HwTileType, MmcHint, MmcMode, TileModeGmm};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Request describing the surface to compute metadata for
#[derive(Debug, Clone)]
pub struct ResInfoRequest {
    pub resource_type: HwResourceType,
    pub format: HwFormat,
    pub base_width: u32,
    pub base_height: u32,
    pub depth: u32,
    pub array_size: u32,
    pub flags: ResourceFlags,
    /// Only size the surface, no memory will back it
    pub no_gfx_memory: bool,
    pub existing_sys_mem_size: u64,
    pub existing_sys_mem: Option<SystemMemory>,
}

/// Metadata of one resource; dropping it destroys the object
pub trait ResourceInfo: Send {
    fn tile_type(&self) -> HwTileType;
    fn render_pitch(&self) -> u64;
    /// Total size including aux surfaces
    fn size_surface(&self) -> u64;
    fn size_main_surface(&self) -> u64;
    fn base_height(&self) -> u32;
    fn base_depth(&self) -> u32;
    fn mmc_hint(&self, plane: u32) -> MmcHint;
    fn mmc_mode(&self, plane: u32) -> MmcMode;
    fn set_mmc_mode(&mut self, mode: MmcMode, plane: u32);
    fn is_media_memory_compressed(&self, plane: u32) -> bool;
    fn res_flags(&self) -> ResourceFlags;
    fn tile_mode_surface_state(&self) -> TileModeGmm;
}

/// Factory for resource-info objects
pub trait ResourceInfoService: Send + Sync {
    /// `None` when the request cannot be satisfied
    fn create(&self, request: &ResInfoRequest) -> Option<Box<dyn ResourceInfo>>;
}

/// Software resource-info service modelled on the hardware layout rules
#[derive(Default)]
pub struct SoftResourceInfoService {
    live: Arc<AtomicUsize>,
}

impl SoftResourceInfoService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resource-info objects not yet destroyed
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

fn granted_tiling(request: &ResInfoRequest) -> HwTileType {
    let flags = request.flags;
    if request.resource_type == HwResourceType::Buffer
        || flags.intersects(ResourceFlags::LINEAR | ResourceFlags::EXISTING_SYS_MEM)
    {
        HwTileType::NotTiled
    } else if flags.contains(ResourceFlags::TILED_X) {
        HwTileType::TiledX
    } else if flags.contains(ResourceFlags::TILE64) {
        HwTileType::Tiled64
    } else if flags.contains(ResourceFlags::TILE4) {
        HwTileType::Tiled4
    } else {
        HwTileType::TiledY
    }
}

/// Pitch alignment in bytes and row alignment for a tiling
fn tile_alignment(tile: HwTileType) -> (u64, u64) {
    match tile {
        HwTileType::NotTiled => (64, 1),
        HwTileType::TiledX => (512, 8),
        HwTileType::TiledY | HwTileType::Tiled4 => (128, 32),
        HwTileType::Tiled64 => (256, 256),
    }
}

impl ResourceInfoService for SoftResourceInfoService {
    fn create(&self, request: &ResInfoRequest) -> Option<Box<dyn ResourceInfo>> {
        if request.base_width == 0 || request.base_height == 0 {
            log::warn!("resource info rejected: zero sized surface");
            return None;
        }

        let tile = granted_tiling(request);
        let bpp = request.format.bytes_per_pixel() as u64;
        let row_bytes = request.base_width as u64 * bpp;
        let depth = match request.resource_type {
            HwResourceType::Volume => request.depth.max(1),
            _ => 1,
        };

        let (pitch, rows) = if request.resource_type == HwResourceType::Buffer {
            (row_bytes, 1)
        } else {
            let (pitch_align, row_align) = tile_alignment(tile);
            let height = request.base_height as u64;
            let mut rows = align_up(height, row_align);
            if request.format.is_planar_420() {
                rows += align_up(height.div_ceil(2), row_align);
            }
            (align_up(row_bytes, pitch_align), rows)
        };

        let main_size = align_up(pitch * rows * depth as u64, LINEAR_ALIGNMENT);
        let aux_size = if request.flags.contains(ResourceFlags::UNIFIED_AUX_SURFACE)
            && request.flags.intersects(ResourceFlags::MMC | ResourceFlags::CCS)
        {
            align_up(main_size / 256, LINEAR_ALIGNMENT)
        } else {
            0
        };
        let size = main_size + aux_size;

        if request.flags.contains(ResourceFlags::EXISTING_SYS_MEM) {
            let Some(memory) = request.existing_sys_mem else {
                log::warn!("resource info rejected: existing system memory not supplied");
                return None;
            };
            if request.existing_sys_mem_size < size || (memory.len() as u64) < size {
                log::warn!(
                    "resource info rejected: system memory of {} bytes is smaller than {}",
                    request.existing_sys_mem_size.min(memory.len() as u64),
                    size
                );
                return None;
            }
        }

        self.live.fetch_add(1, Ordering::SeqCst);
        Some(Box::new(SoftResourceInfo {
            tile,
            pitch,
            size,
            main_size,
            base_height: request.base_height,
            base_depth: depth,
            flags: request.flags,
            mmc_mode: MmcMode::Disabled,
            live: self.live.clone(),
        }))
    }
}

struct SoftResourceInfo {
    tile: HwTileType,
    pitch: u64,
    size: u64,
    main_size: u64,
    base_height: u32,
    base_depth: u32,
    flags: ResourceFlags,
    mmc_mode: MmcMode,
    live: Arc<AtomicUsize>,
}

impl ResourceInfo for SoftResourceInfo {
    fn tile_type(&self) -> HwTileType {
        self.tile
    }

    fn render_pitch(&self) -> u64 {
        self.pitch
    }

    fn size_surface(&self) -> u64 {
        self.size
    }

    fn size_main_surface(&self) -> u64 {
        self.main_size
    }

    fn base_height(&self) -> u32 {
        self.base_height
    }

    fn base_depth(&self) -> u32 {
        self.base_depth
    }

    fn mmc_hint(&self, _plane: u32) -> MmcHint {
        if self.flags.contains(ResourceFlags::MMC) {
            MmcHint::On
        } else {
            MmcHint::Off
        }
    }

    fn mmc_mode(&self, _plane: u32) -> MmcMode {
        self.mmc_mode
    }

    fn set_mmc_mode(&mut self, mode: MmcMode, _plane: u32) {
        self.mmc_mode = mode;
    }

    fn is_media_memory_compressed(&self, _plane: u32) -> bool {
        self.flags.contains(ResourceFlags::MMC | ResourceFlags::MEDIA_COMPRESSED)
            && self.mmc_mode != MmcMode::Disabled
    }

    fn res_flags(&self) -> ResourceFlags {
        self.flags
    }

    fn tile_mode_surface_state(&self) -> TileModeGmm {
        match self.tile {
            HwTileType::NotTiled => TileModeGmm::Linear,
            HwTileType::TiledX => TileModeGmm::X,
            HwTileType::TiledY | HwTileType::Tiled4 => TileModeGmm::Y,
            HwTileType::Tiled64 => TileModeGmm::Tile64,
        }
    }
}

impl Drop for SoftResourceInfo {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(format: HwFormat, width: u32, height: u32, flags: ResourceFlags) -> ResInfoRequest {
        ResInfoRequest {
            resource_type: HwResourceType::Surface2D,
            format,
            base_width: width,
            base_height: height,
            depth: 1,
            array_size: 1,
            flags,
            no_gfx_memory: false,
            existing_sys_mem_size: 0,
            existing_sys_mem: None,
        }
    }

    #[test]
    fn test_linear_layout() {
        let service = SoftResourceInfoService::new();
        let info = service
            .create(&request(HwFormat::R8Unorm, 100, 10, ResourceFlags::LINEAR))
            .unwrap();
        assert_eq!(info.tile_type(), HwTileType::NotTiled);
        assert_eq!(info.render_pitch(), 128);
        assert_eq!(info.size_surface(), 4096);
        assert_eq!(info.tile_mode_surface_state(), TileModeGmm::Linear);
    }

    #[test]
    fn test_tile_y_layout() {
        let service = SoftResourceInfoService::new();
        let info = service
            .create(&request(HwFormat::B8G8R8A8Unorm, 100, 40, ResourceFlags::VIDEO))
            .unwrap();
        assert_eq!(info.tile_type(), HwTileType::TiledY);
        assert_eq!(info.render_pitch(), 512);
        assert_eq!(info.size_main_surface(), 512 * 64);
    }

    #[test]
    fn test_nv12_adds_chroma_rows() {
        let service = SoftResourceInfoService::new();
        let info = service
            .create(&request(HwFormat::Nv12, 64, 64, ResourceFlags::TILED_X))
            .unwrap();
        assert_eq!(info.tile_type(), HwTileType::TiledX);
        assert_eq!(info.size_main_surface(), 512 * (64 + 32));
    }

    #[test]
    fn test_compression_adds_aux() {
        let service = SoftResourceInfoService::new();
        let flags = ResourceFlags::MMC
            | ResourceFlags::MEDIA_COMPRESSED
            | ResourceFlags::CCS
            | ResourceFlags::UNIFIED_AUX_SURFACE;
        let mut info = service
            .create(&request(HwFormat::R8Unorm, 256, 256, flags))
            .unwrap();
        assert_eq!(info.size_main_surface(), 65536);
        assert_eq!(info.size_surface(), 65536 + 4096);
        assert_eq!(info.mmc_hint(0), MmcHint::On);
        assert!(!info.is_media_memory_compressed(0));
        info.set_mmc_mode(MmcMode::Mc, 0);
        assert!(info.is_media_memory_compressed(0));
    }

    #[test]
    fn test_live_count_tracks_drop() {
        let service = SoftResourceInfoService::new();
        let info = service
            .create(&request(HwFormat::R8Unorm, 16, 16, ResourceFlags::LINEAR))
            .unwrap();
        assert_eq!(service.live(), 1);
        drop(info);
        assert_eq!(service.live(), 0);
    }

    #[test]
    fn test_zero_size_rejected() {
        let service = SoftResourceInfoService::new();
        assert!(service
            .create(&request(HwFormat::R8Unorm, 0, 16, ResourceFlags::LINEAR))
            .is_none());
        assert_eq!(service.live(), 0);
    }
}
