//! Resource kinds, memory pools and mapping techniques

/// Kind of resource requested by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceKind {
    #[default]
    Invalid,
    Buffer,
    Scratch,
    Surface2D,
    Volume,
}

/// Hardware resource shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwResourceType {
    Buffer,
    Surface2D,
    Volume,
}

/// Memory pool backing an allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum MemType {
    /// Driver default placement
    #[default]
    Video = 0,
    /// Device-local memory
    Device = 1,
    /// System memory
    System = 2,
}

/// Technique used to open the current CPU mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapOperation {
    #[default]
    None,
    /// Direct CPU mapping
    Mmap,
    /// Direct write-combined mapping
    MmapWc,
    /// Mapping through the graphics translation table aperture
    MmapGtt,
}

/// Cache-policy usage type of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(u32)]
pub enum ResourceUsage {
    #[default]
    Default = 0,
    DecodeOutput = 1,
    EncodeInput = 2,
    VpOutput = 3,
    Staging = 4,
}

/// Memory object control state, the cache-policy tag for a usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryObjectControl(pub u32);
