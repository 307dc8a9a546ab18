//! gfxres - GPU graphics resource lifecycle

pub mod buffer;
pub mod bufmgr;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod flags;
pub mod format;
pub mod guard;
pub mod policy;
pub mod resinfo;
pub mod resource;
pub mod shm;
pub mod storage;
pub mod swizzle;
pub mod tile;
pub mod trace;

pub use buffer::{BufferObject, SystemMemory};
pub use bufmgr::{BufferManager, ShmBufferManager};
pub use context::{AuxTableManager, DeviceContext, MediaDecompressor, PlatformConfig, SoftContext};
pub use descriptor::MosResource;
pub use error::{Error, Result};
pub use flags::{ResourceFlags, SkuFlags, WaFlags};
pub use format::{Format, HwFormat};
pub use guard::ResourceGuard;
pub use policy::{DefaultMemoryPolicy, MemoryPlacementPolicy};
pub use resinfo::{ResourceInfo, ResourceInfoService, SoftResourceInfoService};
pub use resource::{allocation_count, CreateParams, GraphicsResource, LockParams, MAX_BUF_NAME_LEN};
pub use storage::{MapOperation, MemType, ResourceKind, ResourceUsage};
pub use tile::{ForcedTileMode, MmcMode, TileModeGmm, TileType};
pub use trace::{MemorySink, TraceEvent, TraceSink};
