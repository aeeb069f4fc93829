//! Settings panel: a level button group and an alignment button group.

use smol_str::SmolStr;
use stanza_blocks::{NodeId, Surface};

use crate::registry::ALIGNMENTS;

use super::HeaderTool;

/// Rendered settings controls, kept for highlight updates.
#[derive(Debug)]
pub(super) struct SettingsState {
    pub(super) level_buttons: Vec<(NodeId, u8)>,
    pub(super) align_buttons: Vec<(NodeId, SmolStr)>,
}

impl HeaderTool {
    pub(super) fn render_settings_panel<S: Surface>(&mut self, surface: &mut S) -> NodeId {
        let wrapper = surface.create_element("div");

        let mut level_buttons = Vec::with_capacity(self.levels.entries().len());
        for entry in self.levels.entries() {
            let button = surface.create_element("span");
            surface.add_class(button, &self.ctx.styles.settings_button);
            surface.set_attr(button, "data-level", &entry.id.to_string());
            surface.set_text(button, entry.icon);
            surface.append_child(wrapper, button);
            level_buttons.push((button, entry.id));
        }

        let mut align_buttons = Vec::with_capacity(ALIGNMENTS.len());
        for entry in &ALIGNMENTS {
            let button = surface.create_element("span");
            surface.add_class(button, &self.ctx.styles.settings_button);
            surface.set_attr(button, "data-align", entry.id);
            surface.set_text(button, entry.icon);
            surface.append_child(wrapper, button);
            align_buttons.push((button, SmolStr::new_static(entry.id)));
        }

        self.settings = Some(SettingsState {
            level_buttons,
            align_buttons,
        });
        self.refresh_highlights(surface);
        wrapper
    }

    /// Reflect the current record on the settings buttons: exactly one
    /// active button per group, the groups independent of each other.
    pub(super) fn refresh_highlights<S: Surface>(&self, surface: &mut S) {
        let Some(settings) = &self.settings else {
            return;
        };
        let active = self.ctx.styles.settings_button_active.clone();

        for (button, id) in &settings.level_buttons {
            if *id == self.data.level {
                surface.add_class(*button, &active);
            } else {
                surface.remove_class(*button, &active);
            }
        }
        for (button, id) in &settings.align_buttons {
            if *id == self.data.align {
                surface.add_class(*button, &active);
            } else {
                surface.remove_class(*button, &active);
            }
        }
    }
}
