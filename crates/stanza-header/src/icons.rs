//! Inline SVG assets for the toolbox and settings buttons.

pub const ICON_HEADER: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg"><path d="M4 3v14M16 3v14M4 10h12" stroke="currentColor" stroke-width="2" stroke-linecap="round" fill="none"/></svg>"#;

pub const ICON_H1: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg"><path d="M3 4v12M10 4v12M3 10h7M14 7l2.5-1.5V16" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" fill="none"/></svg>"#;

pub const ICON_H2: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg"><path d="M3 4v12M10 4v12M3 10h7M13.5 7.5c0-1.2 1-2 2.2-2s2.2.8 2.2 2c0 2.2-4.4 4-4.4 8.5h4.6" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" fill="none"/></svg>"#;

pub const ICON_H3: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg"><path d="M3 4v12M10 4v12M3 10h7M13.5 6.5c.5-.7 1.3-1 2.2-1 1.2 0 2.2.8 2.2 1.9s-.9 1.8-2 1.9c1.3 0 2.3.9 2.3 2.1 0 1.3-1.1 2.1-2.5 2.1-.9 0-1.7-.3-2.2-1" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" fill="none"/></svg>"#;

pub const ICON_H4: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg"><path d="M3 4v12M10 4v12M3 10h7M17 5.5l-3.5 6h4.5M17 9v6.5" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" fill="none"/></svg>"#;

pub const ICON_ALIGN_LEFT: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg"><path d="M3 5h14M3 9h9M3 13h14M3 17h9" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>"#;

pub const ICON_ALIGN_CENTER: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg"><path d="M3 5h14M5.5 9h9M3 13h14M5.5 17h9" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>"#;

pub const ICON_ALIGN_RIGHT: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg"><path d="M3 5h14M8 9h9M3 13h14M8 17h9" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>"#;
