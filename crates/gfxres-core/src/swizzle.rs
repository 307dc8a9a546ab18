//! CPU swizzling between tiled and linear layouts
//!
//! Tiles are 4 KiB. X tiles are 512 bytes by 8 rows with rows stored
//! contiguously. Y tiles are 128 bytes by 32 rows stored as 16-byte columns;
//! the legacy layout walks each column top to bottom, the Tile4 layout
//! interleaves 64-byte blocks of 4 rows.

use crate::tile::TileType;
use crate::{Error, Result};

/// Y tile addressing in use on a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YTileLayout {
    Legacy,
    Tile4,
}

impl YTileLayout {
    pub fn from_legacy_flag(tile_y_is_legacy: bool) -> Self {
        if tile_y_is_legacy {
            YTileLayout::Legacy
        } else {
            YTileLayout::Tile4
        }
    }
}

/// Bytes per tile row and rows per tile
fn tile_dims(tiling: TileType) -> (usize, usize) {
    match tiling {
        TileType::Linear => (1, 1),
        TileType::X => (512, 8),
        TileType::Y => (128, 32),
    }
}

/// Byte offset of `(x, y)` in a surface with the given tiling
pub fn tiled_offset(x: usize, y: usize, pitch: usize, tiling: TileType, layout: YTileLayout) -> usize {
    match tiling {
        TileType::Linear => y * pitch + x,
        TileType::X => (y & !7) * pitch + (x & !511) * 8 + (y & 7) * 512 + (x & 511),
        TileType::Y => {
            let tile_base = (y & !31) * pitch + (x & !127) * 32;
            let within = match layout {
                YTileLayout::Legacy => ((x >> 4) & 7) * 512 + (y & 31) * 16 + (x & 15),
                YTileLayout::Tile4 => {
                    (x & 15)
                        | (y & 3) << 4
                        | ((x >> 4) & 1) << 6
                        | ((y >> 2) & 3) << 7
                        | ((x >> 5) & 1) << 9
                        | ((y >> 4) & 1) << 10
                        | ((x >> 6) & 1) << 11
                }
            };
            tile_base + within
        }
    }
}

/// Copy `rows` rows of `pitch` bytes between a tiled and a linear buffer
///
/// Exactly one of `src_tiling` and `dst_tiling` must be tiled. The tiled
/// buffer must cover the rows rounded up to whole tiles.
pub fn swizzle(
    src: &[u8],
    dst: &mut [u8],
    src_tiling: TileType,
    dst_tiling: TileType,
    rows: usize,
    pitch: usize,
    layout: YTileLayout,
) -> Result<()> {
    let (tiling, to_linear) = match (src_tiling.is_tiled(), dst_tiling.is_tiled()) {
        (true, false) => (src_tiling, true),
        (false, true) => (dst_tiling, false),
        _ => {
            return Err(Error::Swizzle(format!(
                "unsupported conversion {:?} -> {:?}",
                src_tiling, dst_tiling
            )))
        }
    };

    let (tile_width, tile_height) = tile_dims(tiling);
    if pitch == 0 || pitch % tile_width != 0 {
        return Err(Error::Swizzle(format!(
            "pitch {} is not a multiple of the {} byte tile width",
            pitch, tile_width
        )));
    }

    let linear_len = rows * pitch;
    let tiled_len = rows.div_ceil(tile_height) * tile_height * pitch;
    let (linear_avail, tiled_avail) = if to_linear {
        (dst.len(), src.len())
    } else {
        (src.len(), dst.len())
    };
    if linear_avail < linear_len || tiled_avail < tiled_len {
        return Err(Error::Swizzle(format!(
            "buffers of {}/{} bytes too small for {} rows of pitch {}",
            linear_avail, tiled_avail, rows, pitch
        )));
    }

    // Bytes stay contiguous within a tile row segment of this width
    let run = match tiling {
        TileType::X => 512,
        _ => 16,
    };

    for y in 0..rows {
        for x in (0..pitch).step_by(run) {
            let linear = y * pitch + x;
            let tiled = tiled_offset(x, y, pitch, tiling, layout);
            if to_linear {
                dst[linear..linear + run].copy_from_slice(&src[tiled..tiled + run]);
            } else {
                dst[tiled..tiled + run].copy_from_slice(&src[linear..linear + run]);
            }
        }
    }

    Ok(())
}
