//! The `BlockTool` trait and the static descriptors the host reads.
//!
//! The host never holds a concrete tool type. It constructs tools from
//! persisted data, drives them through this trait (render, save, merge,
//! paste), and consults the descriptor methods to decide which paste
//! content a tool claims, how saved fields are sanitized, and how the tool
//! is listed in the insertion toolbox.

use serde_json::Value;
use smol_str::SmolStr;

use crate::surface::{NodeId, Surface};

/// How the host sanitizer treats one field of a saved record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeRule {
    /// Freeform markup, run through the host's inline whitelist.
    InlineMarkup,
    /// Structured data, passed through untouched.
    Opaque,
}

/// Per-field sanitizer rules for a tool's saved record.
#[derive(Debug, Clone, Default)]
pub struct SanitizeConfig {
    pub rules: Vec<(SmolStr, SanitizeRule)>,
}

impl SanitizeConfig {
    /// Rule for a named field, if the tool declared one.
    pub fn rule_for(&self, field: &str) -> Option<SanitizeRule> {
        self.rules
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| *rule)
    }
}

/// Entry for the host's block-insertion toolbox.
#[derive(Debug, Clone)]
pub struct Toolbox {
    pub title: SmolStr,
    /// Inline SVG markup.
    pub icon: &'static str,
}

/// Tag names a tool claims from host paste routing.
#[derive(Debug, Clone, Default)]
pub struct PasteConfig {
    pub tags: Vec<SmolStr>,
}

impl PasteConfig {
    /// Check a tag name against the claimed set, case-insensitively.
    pub fn claims(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Field names used when converting a block to or from another block kind.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Field projected out when this block is converted away.
    pub export: SmolStr,
    /// Field populated when another block is converted into this one.
    pub import: SmolStr,
}

/// CSS class names the host supplies to every tool.
#[derive(Debug, Clone)]
pub struct BlockStyles {
    pub block: SmolStr,
    pub settings_button: SmolStr,
    pub settings_button_active: SmolStr,
}

impl Default for BlockStyles {
    fn default() -> Self {
        Self {
            block: SmolStr::new_static("stz-block"),
            settings_button: SmolStr::new_static("stz-settings-button"),
            settings_button_active: SmolStr::new_static("stz-settings-button--active"),
        }
    }
}

/// Host-supplied construction context.
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    pub styles: BlockStyles,
    pub read_only: bool,
}

/// A paste event routed to a tool because the pasted element's tag is in
/// the tool's [`PasteConfig`].
#[derive(Debug, Clone, Copy)]
pub struct PasteEvent {
    /// Surface node holding the pasted element.
    pub node: NodeId,
}

/// Lifecycle interface between the host and a block tool.
///
/// Required methods cover rendering and persistence. Capability methods
/// (merge, paste, descriptors) have no-op defaults so tools only implement
/// what they support, and the host feature-detects through the same trait.
pub trait BlockTool<S: Surface> {
    /// Build the block's view and return its root node. The host attaches
    /// the returned node to its own container.
    fn render(&mut self, surface: &mut S) -> NodeId;

    /// Build the settings panel for this block.
    fn render_settings(&mut self, surface: &mut S) -> NodeId;

    /// Extract the persistable record from the rendered content.
    fn save(&mut self, surface: &S, content: NodeId) -> Value;

    /// Whether a saved record is worth persisting. Records that fail are
    /// discarded by the host without further messaging.
    fn validate(&self, _data: &Value) -> bool {
        true
    }

    /// Absorb the record of an adjacent block of the same kind that the
    /// host is collapsing into this one.
    fn merge(&mut self, _surface: &mut S, _data: Value) {}

    /// Handle pasted content the host routed here per [`Self::paste_config`].
    fn on_paste(&mut self, _surface: &mut S, _event: PasteEvent) {}

    /// Toolbox listing, or `None` to stay out of the insertion menu.
    fn toolbox(&self) -> Option<Toolbox> {
        None
    }

    /// Cross-kind conversion fields, or `None` if not convertible.
    fn conversion_config(&self) -> Option<ConversionConfig> {
        None
    }

    /// Sanitizer rules for the saved record's fields.
    fn sanitize_config(&self) -> SanitizeConfig {
        SanitizeConfig::default()
    }

    /// Pasted tag names this tool claims.
    fn paste_config(&self) -> PasteConfig {
        PasteConfig::default()
    }

    /// Whether the tool can render inside a read-only host.
    fn is_read_only_supported(&self) -> bool {
        false
    }
}
