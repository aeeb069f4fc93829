//! stanza-blocks: contracts between the block editor host and its tools.
//!
//! This crate provides:
//! - `BlockTool` trait - the lifecycle interface the host drives blocks through
//! - Static tool descriptors the host reads (toolbox, paste, conversion, sanitize)
//! - `Surface` trait for rendering abstraction, with opaque `NodeId` handles
//! - `MemorySurface` - an in-memory implementation used by native hosts and tests
//!
//! Tool logic stays generic over `Surface`, so the same block implementations
//! work against a browser DOM bridge, a native widget tree, or the in-memory
//! surface without change.

pub mod memory;
pub mod surface;
pub mod tool;

pub use memory::MemorySurface;
pub use surface::{NodeId, Surface, SurfaceError};
pub use tool::{
    BlockStyles, BlockTool, ConversionConfig, PasteConfig, PasteEvent, SanitizeConfig,
    SanitizeRule, Toolbox, ToolContext,
};
