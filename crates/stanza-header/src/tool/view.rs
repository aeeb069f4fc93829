//! View synchronization: keeping the rendered element, the record, and
//! the settings highlights consistent across edits and overwrites.

use serde_json::{json, Value};
use stanza_blocks::{NodeId, Surface};

use crate::data::HeaderData;

use super::HeaderTool;

impl HeaderTool {
    /// Build a fresh view element for the current record.
    pub(super) fn build_view<S: Surface>(&self, surface: &mut S) -> NodeId {
        let entry = self.levels.get(self.data.level);
        let node = surface.create_element(entry.tag);
        surface.set_text(node, &self.data.text);
        surface.set_style(node, "text-align", &self.data.align);
        surface.set_attr(node, "data-placeholder", &self.placeholder);
        surface.set_attr(
            node,
            "contenteditable",
            if self.ctx.read_only { "false" } else { "true" },
        );
        surface.add_class(node, &self.ctx.styles.block);
        node
    }

    /// Text as the user currently sees it: the live element when one
    /// exists, the stored record otherwise.
    pub(super) fn current_text<S: Surface>(&self, surface: &S) -> String {
        match self.node {
            Some(node) => surface.text(node),
            None => self.data.text.clone(),
        }
    }

    /// Switch the heading level, preserving the displayed text.
    pub fn apply_level<S: Surface>(&mut self, surface: &mut S, id: u8) {
        let text = self.current_text(surface);
        self.set_record(
            surface,
            &json!({ "level": id, "align": self.data.align.as_str(), "text": text }),
        );
        self.refresh_highlights(surface);
    }

    /// Switch the text alignment. Runs through the same rebuild path as a
    /// level change, so element identity is not guaranteed to survive.
    pub fn apply_align<S: Surface>(&mut self, surface: &mut S, id: &str) {
        let text = self.current_text(surface);
        self.set_record(
            surface,
            &json!({ "level": self.data.level, "align": id, "text": text }),
        );
        self.refresh_highlights(surface);
    }

    /// General-purpose external setter, used by paste and merge and open
    /// to host overwrites. Patch fields overlay the current record before
    /// normalization.
    ///
    /// The element is rebuilt (tag swap in place) only when the patch
    /// carries a `level` and the element is attached; the alignment style
    /// is re-applied on the replacement even when `align` itself did not
    /// change. A patch without `text` must not clobber what the user
    /// typed, so the displayed text is carried over.
    pub fn set_record<S: Surface>(&mut self, surface: &mut S, patch: &Value) {
        let level_given = patch.get("level").is_some_and(|v| !v.is_null());
        let text_given = patch.get("text").is_some_and(|v| !v.is_null());

        let mut merged = serde_json::Map::new();
        merged.insert(
            "text".to_owned(),
            if text_given {
                patch.get("text").cloned().unwrap_or(Value::Null)
            } else {
                Value::String(self.current_text(surface))
            },
        );
        merged.insert(
            "level".to_owned(),
            if level_given {
                patch.get("level").cloned().unwrap_or(Value::Null)
            } else {
                json!(self.data.level)
            },
        );
        merged.insert(
            "align".to_owned(),
            patch
                .get("align")
                .cloned()
                .unwrap_or_else(|| json!(self.data.align.as_str())),
        );

        self.data = HeaderData::normalize(&Value::Object(merged), &self.levels);

        let attached = self.node.filter(|n| surface.is_attached(*n));
        if let Some(old) = attached.filter(|_| level_given) {
            let new = self.build_view(surface);
            tracing::debug!(
                target: "stanza::header",
                from = %surface.tag(old),
                to = %surface.tag(new),
                "swapping heading element"
            );
            if surface.replace(old, new).is_ok() {
                self.node = Some(new);
                return;
            }
            // Attachment point vanished under us; fall through and mutate
            // the existing element instead.
        }

        if let Some(node) = self.node {
            if text_given {
                surface.set_text(node, &self.data.text);
            }
            surface.set_style(node, "text-align", &self.data.align);
        }
    }
}
