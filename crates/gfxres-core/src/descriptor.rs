//! Plain resource descriptor for layers that do not know `GraphicsResource`

use crate::buffer::BufferObject;
use crate::format::Format;
use crate::resinfo::ResourceInfo;
use crate::resource::GraphicsResource;
use crate::storage::{MapOperation, MemoryObjectControl, ResourceUsage};
use crate::tile::{TileModeGmm, TileType};
use std::sync::Arc;

/// Borrowed view of a resource; must not outlive it
#[derive(Clone)]
pub struct MosResource<'a> {
    pub format: Format,
    pub width: u32,
    pub height: u32,
    pub pitch: u32,
    pub depth: u32,
    pub tile_type: TileType,
    pub tile_mode_gmm: TileModeGmm,
    pub gmm_tile_enabled: bool,
    pub count: u32,
    /// CPU pointer, null while unmapped
    pub data: *mut u8,
    pub name: &'a str,
    pub bo: Option<&'a Arc<BufferObject>>,
    pub mapped: bool,
    pub map_operation: MapOperation,
    pub res_info: Option<&'a dyn ResourceInfo>,
    pub user_provided_va: Option<u64>,
    pub memory_object_control: MemoryObjectControl,
    pub usage: ResourceUsage,
    pub gfx_resource: Option<&'a GraphicsResource>,
}

impl Default for MosResource<'_> {
    fn default() -> Self {
        Self {
            format: Format::Invalid,
            width: 0,
            height: 0,
            pitch: 0,
            depth: 0,
            tile_type: TileType::Linear,
            tile_mode_gmm: TileModeGmm::Linear,
            gmm_tile_enabled: false,
            count: 0,
            data: std::ptr::null_mut(),
            name: "",
            bo: None,
            mapped: false,
            map_operation: MapOperation::None,
            res_info: None,
            user_provided_va: None,
            memory_object_control: MemoryObjectControl::default(),
            usage: ResourceUsage::Default,
            gfx_resource: None,
        }
    }
}

impl std::fmt::Debug for MosResource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MosResource")
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pitch", &self.pitch)
            .field("tile_type", &self.tile_type)
            .field("name", &self.name)
            .field("bo", &self.bo.map(|bo| bo.handle()))
            .field("mapped", &self.mapped)
            .field("map_operation", &self.map_operation)
            .finish_non_exhaustive()
    }
}
