//! Host-lifecycle scenario tests: construct, render, settings, paste,
//! merge, save, as the host drives them.

use serde_json::{json, Value};
use smol_str::SmolStr;
use stanza_blocks::{
    BlockTool, MemorySurface, NodeId, PasteEvent, SanitizeRule, Surface, ToolContext,
};

use super::{HeaderConfig, HeaderTool};

const ACTIVE: &str = "stz-settings-button--active";

fn tool(data: Value) -> HeaderTool {
    HeaderTool::new(&data, HeaderConfig::default(), ToolContext::default())
}

fn mount(surface: &mut MemorySurface, tool: &mut HeaderTool) -> NodeId {
    let root = surface.container();
    let node = tool.render(surface);
    surface.append_child(root, node);
    node
}

fn active_levels(surface: &MemorySurface, tool: &HeaderTool) -> Vec<u8> {
    let settings = tool.settings.as_ref().expect("settings not rendered");
    settings
        .level_buttons
        .iter()
        .filter(|(button, _)| surface.has_class(*button, ACTIVE))
        .map(|(_, id)| *id)
        .collect()
}

fn active_aligns(surface: &MemorySurface, tool: &HeaderTool) -> Vec<SmolStr> {
    let settings = tool.settings.as_ref().expect("settings not rendered");
    settings
        .align_buttons
        .iter()
        .filter(|(button, _)| surface.has_class(*button, ACTIVE))
        .map(|(_, id)| id.clone())
        .collect()
}

#[test]
fn test_construct_render_save_round_trip() {
    let mut surface = MemorySurface::new();
    let mut tool = HeaderTool::new(
        &json!({"text": "Hi", "level": 3, "align": "center"}),
        HeaderConfig {
            placeholder: "Title".to_owned(),
            ..HeaderConfig::default()
        },
        ToolContext::default(),
    );
    let node = mount(&mut surface, &mut tool);

    assert_eq!(surface.tag(node), "h3");
    assert_eq!(surface.attr(node, "data-placeholder").unwrap(), "Title");
    assert_eq!(surface.style(node, "text-align").unwrap(), "center");

    let saved = tool.save(&surface, node);
    assert_eq!(saved, json!({"text": "Hi", "level": 3, "align": "center"}));
    assert!(<HeaderTool as BlockTool<MemorySurface>>::validate(&tool, &saved));
}

#[test]
fn test_empty_construction_saves_defaults_and_fails_validation() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({}));
    let node = mount(&mut surface, &mut tool);

    let saved = tool.save(&surface, node);
    assert_eq!(saved, json!({"text": "", "level": 2, "align": "left"}));
    assert!(!<HeaderTool as BlockTool<MemorySurface>>::validate(&tool, &saved));
}

#[test]
fn test_normalized_construction_snapshot() {
    let tool = tool(json!({"text": "Hi", "level": "3", "align": "center"}));
    insta::assert_debug_snapshot!(tool.data(), @r#"
    HeaderData {
        text: "Hi",
        level: 3,
        align: "center",
    }
    "#);
}

#[test]
fn test_apply_level_swaps_element_in_place() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({"text": "Hi"}));
    let node = mount(&mut surface, &mut tool);
    let root = surface.parent(node).unwrap();

    tool.apply_level(&mut surface, 4);

    let swapped = tool.node().unwrap();
    assert_eq!(surface.children(root), &[swapped]);
    assert_eq!(surface.tag(swapped), "h4");
    assert_eq!(surface.text(swapped), "Hi");
    assert!(!surface.is_attached(node));
}

#[test]
fn test_level_change_keeps_user_edits() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({"text": "Draft"}));
    let node = mount(&mut surface, &mut tool);

    // The user typed into the rendered element since the last save.
    surface.set_text(node, "Edited draft");
    tool.apply_level(&mut surface, 1);

    let swapped = tool.node().unwrap();
    assert_eq!(surface.text(swapped), "Edited draft");
    assert_eq!(tool.data().level, 1);
}

#[test]
fn test_detached_level_change_updates_state_only() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({"text": "Hi"}));
    let node = tool.render(&mut surface);

    tool.apply_level(&mut surface, 4);

    // No container to swap under, so the element stays; the record is
    // updated for the next render.
    assert_eq!(tool.node(), Some(node));
    assert_eq!(tool.data().level, 4);
    let rerendered = tool.render(&mut surface);
    assert_eq!(surface.tag(rerendered), "h4");
}

#[test]
fn test_settings_highlight_exclusive_per_group() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({"text": "Hi"}));
    mount(&mut surface, &mut tool);
    let panel = tool.render_settings(&mut surface);
    assert_eq!(surface.children(panel).len(), 7);

    assert_eq!(active_levels(&surface, &tool), vec![2]);
    assert_eq!(active_aligns(&surface, &tool), vec!["left"]);

    tool.apply_level(&mut surface, 3);
    assert_eq!(active_levels(&surface, &tool), vec![3]);
    assert_eq!(active_aligns(&surface, &tool), vec!["left"]);

    tool.apply_align(&mut surface, "center");
    assert_eq!(active_aligns(&surface, &tool), vec!["center"]);
    assert_eq!(active_levels(&surface, &tool), vec![3]);
}

#[test]
fn test_apply_align_sets_style() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({"text": "Hi"}));
    mount(&mut surface, &mut tool);

    tool.apply_align(&mut surface, "right");

    let node = tool.node().unwrap();
    assert_eq!(surface.style(node, "text-align").unwrap(), "right");
    assert_eq!(tool.data().align, "right");
    assert_eq!(surface.text(node), "Hi");
}

#[test]
fn test_merge_appends_text_and_keeps_own_level_and_align() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({"text": "Hello", "level": 3, "align": "right"}));
    let node = mount(&mut surface, &mut tool);

    tool.merge(
        &mut surface,
        json!({"text": " world", "level": 1, "align": "center"}),
    );

    let saved = tool.save(&surface, node);
    assert_eq!(
        saved,
        json!({"text": "Hello world", "level": 3, "align": "right"})
    );
}

#[test]
fn test_merge_with_missing_text_appends_nothing() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({"text": "Hello"}));
    let node = mount(&mut surface, &mut tool);

    tool.merge(&mut surface, json!({"level": 4}));

    assert_eq!(surface.text(node), "Hello");
    assert_eq!(tool.data().level, 2);
}

#[test]
fn test_paste_maps_tag_to_level() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({"text": "Old", "align": "center"}));
    mount(&mut surface, &mut tool);

    let pasted = surface.create_element("h3");
    surface.set_text(pasted, "Pasted title");
    tool.on_paste(&mut surface, PasteEvent { node: pasted });

    let node = tool.node().unwrap();
    assert_eq!(surface.tag(node), "h3");
    assert_eq!(surface.text(node), "Pasted title");
    // Alignment is not part of the pasted markup and is retained.
    assert_eq!(surface.style(node, "text-align").unwrap(), "center");
    assert!(surface.is_attached(node));
}

#[test]
fn test_paste_with_unrecognized_tag_falls_back_to_default_level() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({"text": "Old"}));
    mount(&mut surface, &mut tool);

    let pasted = surface.create_element("blockquote");
    surface.set_text(pasted, "Quoted");
    tool.on_paste(&mut surface, PasteEvent { node: pasted });

    assert_eq!(tool.data().level, 2);
    assert_eq!(surface.tag(tool.node().unwrap()), "h2");
}

#[test]
fn test_set_record_without_text_preserves_displayed_content() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({"text": "Typed"}));
    let node = mount(&mut surface, &mut tool);
    surface.set_text(node, "Typed by user");

    tool.set_record(&mut surface, &json!({"level": 4}));

    let swapped = tool.node().unwrap();
    assert_eq!(surface.tag(swapped), "h4");
    assert_eq!(surface.text(swapped), "Typed by user");
}

#[test]
fn test_set_record_with_text_overwrites_displayed_content() {
    let mut surface = MemorySurface::new();
    let mut tool = tool(json!({"text": "Typed"}));
    mount(&mut surface, &mut tool);

    tool.set_record(&mut surface, &json!({"level": 1, "text": "Overwritten"}));

    let swapped = tool.node().unwrap();
    assert_eq!(surface.tag(swapped), "h1");
    assert_eq!(surface.text(swapped), "Overwritten");
}

#[test]
fn test_read_only_render_is_not_editable() {
    let mut surface = MemorySurface::new();
    let mut tool = HeaderTool::new(
        &json!({"text": "Hi"}),
        HeaderConfig::default(),
        ToolContext {
            read_only: true,
            ..ToolContext::default()
        },
    );
    let node = mount(&mut surface, &mut tool);

    assert_eq!(surface.attr(node, "contenteditable").unwrap(), "false");
    assert!(<HeaderTool as BlockTool<MemorySurface>>::is_read_only_supported(&tool));
}

#[test]
fn test_restricted_levels_shape_settings_and_paste_claims() {
    let mut surface = MemorySurface::new();
    let mut tool = HeaderTool::new(
        &json!({"text": "Hi"}),
        HeaderConfig {
            levels: Some(vec![2, 3, 4]),
            default_level: Some(3),
            ..HeaderConfig::default()
        },
        ToolContext::default(),
    );
    let node = mount(&mut surface, &mut tool);
    assert_eq!(surface.tag(node), "h3");

    let panel = tool.render_settings(&mut surface);
    assert_eq!(surface.children(panel).len(), 6);

    let paste = <HeaderTool as BlockTool<MemorySurface>>::paste_config(&tool);
    assert_eq!(paste.tags, vec!["h2", "h3", "h4"]);
    assert!(paste.claims("H4"));
    assert!(!paste.claims("h1"));
}

#[test]
fn test_descriptors() {
    let tool = tool(json!({}));

    let toolbox = <HeaderTool as BlockTool<MemorySurface>>::toolbox(&tool).unwrap();
    assert_eq!(toolbox.title, "Header");
    assert!(toolbox.icon.starts_with("<svg"));

    let conversion = <HeaderTool as BlockTool<MemorySurface>>::conversion_config(&tool).unwrap();
    assert_eq!(conversion.export, "text");
    assert_eq!(conversion.import, "text");

    let sanitize = <HeaderTool as BlockTool<MemorySurface>>::sanitize_config(&tool);
    assert_eq!(sanitize.rule_for("text"), Some(SanitizeRule::InlineMarkup));
    assert_eq!(sanitize.rule_for("level"), Some(SanitizeRule::Opaque));
    assert_eq!(sanitize.rule_for("align"), Some(SanitizeRule::Opaque));
}

#[test]
fn test_host_drives_tool_behind_trait_object() {
    let mut surface = MemorySurface::new();
    let root = surface.container();
    let mut block: Box<dyn BlockTool<MemorySurface>> = Box::new(tool(json!({"text": "Hi"})));

    let node = block.render(&mut surface);
    surface.append_child(root, node);
    let saved = block.save(&surface, node);

    assert_eq!(saved, json!({"text": "Hi", "level": 2, "align": "left"}));
    assert!(block.validate(&saved));
}
