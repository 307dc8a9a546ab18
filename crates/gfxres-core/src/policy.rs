//! Memory placement policy

use crate::flags::{ResourceFlags, SkuFlags, WaFlags};
use crate::resinfo::ResourceInfo;
use crate::storage::MemType;

/// Inputs to a placement decision
pub struct MemoryPolicyParameter<'a> {
    pub sku: SkuFlags,
    pub wa: WaFlags,
    pub res_info: &'a dyn ResourceInfo,
    pub name: &'a str,
    pub preferred: MemType,
}

/// Chooses the memory pool backing a resource
pub trait MemoryPlacementPolicy: Send + Sync {
    fn choose(&self, params: &MemoryPolicyParameter<'_>) -> MemType;
}

/// Placement rules for integrated and discrete parts
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultMemoryPolicy;

impl MemoryPlacementPolicy for DefaultMemoryPolicy {
    fn choose(&self, params: &MemoryPolicyParameter<'_>) -> MemType {
        let flags = params.res_info.res_flags();

        let mem_type = if !params.sku.contains(SkuFlags::LOCAL_MEMORY) {
            MemType::Video
        } else if flags.contains(ResourceFlags::NON_LOCAL_ONLY) {
            MemType::System
        } else if params.wa.contains(WaFlags::FORCE_ALLOCATE_LOCAL) {
            MemType::Device
        } else if params.preferred != MemType::Video {
            params.preferred
        } else if flags.contains(ResourceFlags::LOCAL_ONLY) {
            MemType::Device
        } else {
            MemType::Video
        };

        log::debug!(
            "memory policy: '{}' preferred {:?} -> {:?}",
            params.name,
            params.preferred,
            mem_type
        );
        mem_type
    }
}
