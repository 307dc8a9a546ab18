//! Resource flags and platform capability tables

use bitflags::bitflags;

bitflags! {
    /// Resource creation flags shared with the resource-info service.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResourceFlags: u32 {
        /// Surface is bound as GPU state (raw buffers).
        const STATE = 1 << 0;
        /// Surface is used by the video engines.
        const VIDEO = 1 << 1;
        /// Media memory compression is requested.
        const MMC = 1 << 2;
        /// Color control surface is requested.
        const CCS = 1 << 3;
        const RENDER_TARGET = 1 << 4;
        /// Aux surface is allocated together with the main surface.
        const UNIFIED_AUX_SURFACE = 1 << 5;

        const LINEAR = 1 << 8;
        const TILED_X = 1 << 9;
        const TILE4 = 1 << 10;
        const TILE64 = 1 << 11;
        const CACHEABLE = 1 << 12;
        /// Backed by caller-provided system memory.
        const EXISTING_SYS_MEM = 1 << 13;
        const LOCAL_ONLY = 1 << 14;
        const NON_LOCAL_ONLY = 1 << 15;
        /// Contents are media compressed.
        const MEDIA_COMPRESSED = 1 << 16;
    }
}

bitflags! {
    /// Platform feature table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SkuFlags: u32 {
        const E2E_COMPRESSION = 1 << 0;
        const COMPRESSIBLE_SURFACE_DEFAULT = 1 << 1;
        /// Compression metadata lives in a flat physical range, no aux surface.
        const FLAT_PHYS_CCS = 1 << 2;
        /// Discrete device with local memory.
        const LOCAL_MEMORY = 1 << 3;
    }
}

bitflags! {
    /// Platform workaround table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WaFlags: u32 {
        /// Place every resource in device-local memory.
        const FORCE_ALLOCATE_LOCAL = 1 << 0;
    }
}

impl Default for ResourceFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for SkuFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for WaFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl ResourceFlags {
    /// Whether the flags describe media-compressed content
    pub fn is_media_compressed(&self) -> bool {
        self.intersects(ResourceFlags::MMC | ResourceFlags::CCS)
            && self.contains(ResourceFlags::MEDIA_COMPRESSED)
    }
}
