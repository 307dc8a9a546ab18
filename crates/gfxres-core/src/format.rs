//! Pixel format definitions

/// Logical pixel formats requested by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Format {
    #[default]
    Invalid = 0,
    Any = 1,
    Buffer = 2,
    A8R8G8B8 = 3,
    X8R8G8B8 = 4,
    A8B8G8R8 = 5,
    R5G6B5 = 6,
    L8 = 7,
    R16 = 8,
    R32F = 9,
    Yuy2 = 10,
    Nv12 = 11,
    P010 = 12,
}

/// Hardware surface formats understood by the resource-info service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwFormat {
    Generic8Bit,
    B8G8R8A8Unorm,
    B8G8R8X8Unorm,
    R8G8B8A8Unorm,
    B5G6R5Unorm,
    R8Unorm,
    R16Unorm,
    R32Float,
    Yuy2,
    Nv12,
    P010,
}

impl Format {
    /// Hardware equivalent, `None` when the format has no hardware mapping
    pub fn to_hw(self) -> Option<HwFormat> {
        match self {
            Format::Invalid | Format::Any => None,
            Format::Buffer => Some(HwFormat::Generic8Bit),
            Format::A8R8G8B8 => Some(HwFormat::B8G8R8A8Unorm),
            Format::X8R8G8B8 => Some(HwFormat::B8G8R8X8Unorm),
            Format::A8B8G8R8 => Some(HwFormat::R8G8B8A8Unorm),
            Format::R5G6B5 => Some(HwFormat::B5G6R5Unorm),
            Format::L8 => Some(HwFormat::R8Unorm),
            Format::R16 => Some(HwFormat::R16Unorm),
            Format::R32F => Some(HwFormat::R32Float),
            Format::Yuy2 => Some(HwFormat::Yuy2),
            Format::Nv12 => Some(HwFormat::Nv12),
            Format::P010 => Some(HwFormat::P010),
        }
    }
}

impl HwFormat {
    /// Bytes per element of the first plane
    pub const fn bytes_per_pixel(&self) -> u32 {
        match self {
            HwFormat::Generic8Bit | HwFormat::R8Unorm | HwFormat::Nv12 => 1,
            HwFormat::B5G6R5Unorm | HwFormat::R16Unorm | HwFormat::Yuy2 | HwFormat::P010 => 2,
            HwFormat::B8G8R8A8Unorm
            | HwFormat::B8G8R8X8Unorm
            | HwFormat::R8G8B8A8Unorm
            | HwFormat::R32Float => 4,
        }
    }

    /// Whether the format carries a half-height interleaved chroma plane
    pub const fn is_planar_420(&self) -> bool {
        matches!(self, HwFormat::Nv12 | HwFormat::P010)
    }
}
