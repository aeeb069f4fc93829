//! The Header block tool: lifecycle implementation and descriptors.

use serde::Deserialize;
use serde_json::{json, Value};
use smol_str::SmolStr;
use stanza_blocks::{
    BlockTool, ConversionConfig, NodeId, PasteConfig, PasteEvent, SanitizeConfig, SanitizeRule,
    Surface, Toolbox, ToolContext,
};

use crate::data::{validate_record, HeaderData};
use crate::icons;
use crate::registry::LevelSet;

use settings::SettingsState;

mod settings;
mod view;

#[cfg(test)]
mod tests;

/// Host-supplied tool configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Hint shown in an empty heading.
    pub placeholder: String,
    /// Restrict the offered levels to these ids. Unknown ids are dropped;
    /// an empty result keeps the full registry.
    pub levels: Option<Vec<u8>>,
    /// Level substituted when a record carries none. Ignored unless it
    /// names an enabled level.
    pub default_level: Option<u8>,
}

/// Heading block: one editable element at a configured level, with a
/// settings panel offering level and alignment choices.
///
/// The tool owns its view node exclusively; the host only reads it (for
/// `save`) or re-parents it. Every record entering from outside is
/// normalized before it is held.
#[derive(Debug)]
pub struct HeaderTool {
    data: HeaderData,
    levels: LevelSet,
    placeholder: String,
    ctx: ToolContext,
    node: Option<NodeId>,
    settings: Option<SettingsState>,
}

impl HeaderTool {
    pub fn new(data: &Value, config: HeaderConfig, ctx: ToolContext) -> Self {
        let levels = LevelSet::from_config(config.levels.as_deref(), config.default_level);
        let data = HeaderData::normalize(data, &levels);
        Self {
            data,
            levels,
            placeholder: config.placeholder,
            ctx,
            node: None,
            settings: None,
        }
    }

    /// Current canonical record.
    pub fn data(&self) -> &HeaderData {
        &self.data
    }

    /// Root node of the rendered view, once `render` has run.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Enabled levels for this instance.
    pub fn levels(&self) -> &LevelSet {
        &self.levels
    }
}

impl<S: Surface> BlockTool<S> for HeaderTool {
    fn render(&mut self, surface: &mut S) -> NodeId {
        let node = self.build_view(surface);
        self.node = Some(node);
        node
    }

    fn render_settings(&mut self, surface: &mut S) -> NodeId {
        self.render_settings_panel(surface)
    }

    fn save(&mut self, surface: &S, content: NodeId) -> Value {
        // Text comes from the rendered content as-is; sanitization is the
        // host's job per `sanitize_config`. Level and align come from
        // internal state, not re-parsed from the view.
        self.data.text = surface.text(content);
        serde_json::to_value(&self.data).unwrap_or(Value::Null)
    }

    fn validate(&self, data: &Value) -> bool {
        validate_record(data)
    }

    fn merge(&mut self, surface: &mut S, data: Value) {
        let other = HeaderData::normalize(&data, &self.levels);
        let combined = format!("{}{}", self.current_text(surface), other.text);
        // Only text is taken from the incoming record. Adjacent blocks are
        // homogeneous when the host merges them, so the fragment's level
        // and alignment are irrelevant.
        self.set_record(surface, &json!({ "text": combined }));
    }

    fn on_paste(&mut self, surface: &mut S, event: PasteEvent) {
        let tag = surface.tag(event.node);
        let entry = self.levels.from_tag(&tag);
        let text = surface.text(event.node);
        tracing::debug!(
            target: "stanza::header",
            %tag,
            level = entry.id,
            "claiming pasted element"
        );
        self.set_record(surface, &json!({ "text": text, "level": entry.id }));
    }

    fn toolbox(&self) -> Option<Toolbox> {
        Some(Toolbox {
            title: SmolStr::new_static("Header"),
            icon: icons::ICON_HEADER,
        })
    }

    fn conversion_config(&self) -> Option<ConversionConfig> {
        Some(ConversionConfig {
            export: SmolStr::new_static("text"),
            import: SmolStr::new_static("text"),
        })
    }

    fn sanitize_config(&self) -> SanitizeConfig {
        SanitizeConfig {
            rules: vec![
                (SmolStr::new_static("text"), SanitizeRule::InlineMarkup),
                (SmolStr::new_static("level"), SanitizeRule::Opaque),
                (SmolStr::new_static("align"), SanitizeRule::Opaque),
            ],
        }
    }

    fn paste_config(&self) -> PasteConfig {
        PasteConfig {
            tags: self.levels.tags(),
        }
    }

    fn is_read_only_supported(&self) -> bool {
        true
    }
}
