//! Static level and alignment registries with default-fallback lookup.
//!
//! Entry order matters only for settings-panel display; lookup never
//! depends on it.

use smol_str::SmolStr;

use crate::icons;

/// One supported heading level.
#[derive(Debug, PartialEq, Eq)]
pub struct LevelEntry {
    pub id: u8,
    /// Tag the view element is created with.
    pub tag: &'static str,
    /// Settings-button icon, inline SVG.
    pub icon: &'static str,
}

/// One supported text alignment.
#[derive(Debug, PartialEq, Eq)]
pub struct AlignEntry {
    pub id: &'static str,
    pub icon: &'static str,
}

/// Full level table, ascending by id.
pub static LEVELS: [LevelEntry; 4] = [
    LevelEntry {
        id: 1,
        tag: "h1",
        icon: icons::ICON_H1,
    },
    LevelEntry {
        id: 2,
        tag: "h2",
        icon: icons::ICON_H2,
    },
    LevelEntry {
        id: 3,
        tag: "h3",
        icon: icons::ICON_H3,
    },
    LevelEntry {
        id: 4,
        tag: "h4",
        icon: icons::ICON_H4,
    },
];

/// Alignment table. The first entry is the fallback for unknown ids.
pub static ALIGNMENTS: [AlignEntry; 3] = [
    AlignEntry {
        id: "left",
        icon: icons::ICON_ALIGN_LEFT,
    },
    AlignEntry {
        id: "center",
        icon: icons::ICON_ALIGN_CENTER,
    },
    AlignEntry {
        id: "right",
        icon: icons::ICON_ALIGN_RIGHT,
    },
];

/// Level id used as the default whenever it is enabled.
const PREFERRED_DEFAULT_LEVEL: u8 = 2;

/// Look up an alignment by id, falling back to the first entry.
pub fn lookup_align(id: &str) -> &'static AlignEntry {
    ALIGNMENTS.iter().find(|a| a.id == id).unwrap_or(&ALIGNMENTS[0])
}

/// Config-filtered view over [`LEVELS`] with a resolved default entry.
///
/// All level lookups in the tool go through a `LevelSet`, so a restricted
/// configuration also restricts normalization fallbacks and paste claims.
#[derive(Debug, Clone)]
pub struct LevelSet {
    entries: Vec<&'static LevelEntry>,
    default_index: usize,
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::from_config(None, None)
    }
}

impl LevelSet {
    /// Build from host config. Unknown ids in `enabled` are dropped; if
    /// nothing survives, the full table is used. `default_level` wins when
    /// it names an enabled entry, then level 2 when enabled, then the
    /// first enabled entry.
    pub fn from_config(enabled: Option<&[u8]>, default_level: Option<u8>) -> Self {
        let mut entries: Vec<&'static LevelEntry> = match enabled {
            Some(ids) => LEVELS.iter().filter(|e| ids.contains(&e.id)).collect(),
            None => LEVELS.iter().collect(),
        };
        if entries.is_empty() {
            tracing::trace!(
                target: "stanza::header",
                requested = ?enabled,
                "level config matched nothing, keeping full registry"
            );
            entries = LEVELS.iter().collect();
        }

        let default_index = default_level
            .and_then(|id| entries.iter().position(|e| e.id == id))
            .or_else(|| entries.iter().position(|e| e.id == PREFERRED_DEFAULT_LEVEL))
            .unwrap_or(0);

        Self {
            entries,
            default_index,
        }
    }

    /// Enabled entries in registry order.
    pub fn entries(&self) -> &[&'static LevelEntry] {
        &self.entries
    }

    /// The entry lookups fall back to.
    pub fn default_entry(&self) -> &'static LevelEntry {
        self.entries[self.default_index]
    }

    /// Look up an enabled level by id, falling back to the default entry.
    pub fn get(&self, id: u8) -> &'static LevelEntry {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .copied()
            .unwrap_or_else(|| self.default_entry())
    }

    /// Whether an id names an enabled level.
    pub fn contains(&self, id: u8) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Map a markup tag name to its enabled entry, falling back to the
    /// default entry. Backs paste routing, so the match is
    /// case-insensitive.
    pub fn from_tag(&self, tag: &str) -> &'static LevelEntry {
        self.entries
            .iter()
            .find(|e| e.tag.eq_ignore_ascii_case(tag))
            .copied()
            .unwrap_or_else(|| self.default_entry())
    }

    /// Tag names of the enabled levels, for the paste-config descriptor.
    pub fn tags(&self) -> Vec<SmolStr> {
        self.entries.iter().map(|e| SmolStr::new_static(e.tag)).collect()
    }
}
