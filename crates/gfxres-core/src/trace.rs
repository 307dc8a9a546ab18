//! Allocation trace events

use bytemuck::{Pod, Zeroable};
use parking_lot::Mutex;

/// Fixed part of an allocation-info record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct AllocateEventData {
    pub handle: u32,
    pub format: u32,
    pub base_width: u32,
    pub base_height: u32,
    pub pitch: u32,
    pub size: u32,
    pub tile_type: u32,
    pub resource_flags: u32,
    pub reserved: u32,
}

impl AllocateEventData {
    /// Size of the fixed record in bytes
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Record bytes followed by the NUL-terminated name
    pub fn encode(&self, name: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::SIZE + name.len() + 1);
        bytes.extend_from_slice(bytemuck::bytes_of(self));
        bytes.extend_from_slice(name.as_bytes());
        bytes.push(0);
        bytes
    }

    /// Parse a record produced by `encode`
    pub fn decode(bytes: &[u8]) -> Option<(Self, &str)> {
        if bytes.len() < Self::SIZE + 1 || bytes.last() != Some(&0) {
            return None;
        }
        let data = bytemuck::pod_read_unaligned(&bytes[..Self::SIZE]);
        let name = std::str::from_utf8(&bytes[Self::SIZE..bytes.len() - 1]).ok()?;
        Some((data, name))
    }
}

/// Events emitted around a resource allocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    AllocateStart,
    AllocateInfo {
        data: AllocateEventData,
        name: &'a str,
    },
    /// Final status, 0 on success
    AllocateEnd { status: u32 },
}

/// Destination of trace events
pub trait TraceSink: Send + Sync {
    fn emit(&self, event: &TraceEvent<'_>);
}

/// Forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn emit(&self, event: &TraceEvent<'_>) {
        match event {
            TraceEvent::AllocateStart => log::trace!("resource allocate: start"),
            TraceEvent::AllocateInfo { data, name } => log::trace!(
                "resource allocate: '{}' handle {} {}x{} pitch {} size {} tile {} flags {:#x}",
                name,
                data.handle,
                data.base_width,
                data.base_height,
                data.pitch,
                data.size,
                data.tile_type,
                data.resource_flags
            ),
            TraceEvent::AllocateEnd { status } => log::trace!("resource allocate: end status {}", status),
        }
    }
}

/// Owned copy of a trace event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent {
    AllocateStart,
    /// Encoded record with name trailer
    AllocateInfo(Vec<u8>),
    AllocateEnd(u32),
}

/// Keeps every event in memory
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<RecordedEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded events, leaving the sink empty
    pub fn take(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl TraceSink for MemorySink {
    fn emit(&self, event: &TraceEvent<'_>) {
        let recorded = match event {
            TraceEvent::AllocateStart => RecordedEvent::AllocateStart,
            TraceEvent::AllocateInfo { data, name } => RecordedEvent::AllocateInfo(data.encode(name)),
            TraceEvent::AllocateEnd { status } => RecordedEvent::AllocateEnd(*status),
        };
        self.events.lock().push(recorded);
    }
}
