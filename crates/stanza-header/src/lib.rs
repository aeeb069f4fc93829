//! stanza-header: heading block tool for the stanza block editor.
//!
//! Renders one editable heading element (levels 1-4), offers level and
//! alignment pickers in the block settings panel, and round-trips its
//! state as `{ text, level, align }` records. The host drives the tool
//! through the `BlockTool` trait from `stanza-blocks`; all rendering goes
//! through the `Surface` abstraction, so the tool itself never touches a
//! concrete UI toolkit.

pub mod data;
pub mod icons;
pub mod registry;
pub mod tool;

pub use data::{validate_record, HeaderData};
pub use registry::{lookup_align, AlignEntry, LevelEntry, LevelSet, ALIGNMENTS, LEVELS};
pub use tool::{HeaderConfig, HeaderTool};
