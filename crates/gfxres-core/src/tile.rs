//! Tiling and compression definitions

/// Logical tiling requested by callers and recorded on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum TileType {
    #[default]
    Linear = 0,
    X = 1,
    Y = 2,
}

impl TileType {
    pub fn is_tiled(&self) -> bool {
        *self != TileType::Linear
    }
}

/// Tiling granted by the resource-info service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwTileType {
    NotTiled,
    TiledX,
    TiledY,
    Tiled4,
    Tiled64,
}

impl HwTileType {
    /// Logical tiling for a granted layout; dense modes are addressed as Y
    pub fn to_tile_type(self) -> TileType {
        match self {
            HwTileType::NotTiled => TileType::Linear,
            HwTileType::TiledX => TileType::X,
            HwTileType::TiledY | HwTileType::Tiled4 | HwTileType::Tiled64 => TileType::Y,
        }
    }
}

/// Kernel tiling mode passed to the buffer manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TilingMode {
    None = 0,
    X = 1,
    Y = 2,
}

impl From<TileType> for TilingMode {
    fn from(tile: TileType) -> Self {
        match tile {
            TileType::Linear => TilingMode::None,
            TileType::X => TilingMode::X,
            TileType::Y => TilingMode::Y,
        }
    }
}

/// Tile mode as encoded in surface state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum TileModeGmm {
    #[default]
    Linear = 0,
    Tile64 = 1,
    X = 2,
    Y = 3,
}

/// Hardware tile mode forced independent of the Y/X/linear request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcedTileMode {
    Tile4,
    Tile64,
}

/// Media memory compression mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum MmcMode {
    #[default]
    Disabled = 0,
    Horizontal = 1,
    Vertical = 2,
    Mc = 3,
    Rc = 4,
}

/// Compression hint reported by the resource-info service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MmcHint {
    On,
    Off,
}
