//! The canonical heading record and its normalizer.
//!
//! Every record entering the tool from outside (construction, paste,
//! merge, settings change) passes through [`HeaderData::normalize`] before
//! it is held, so a stored record always has `level` and `align` resolved
//! to registry values. Malformed input never errors, it degrades to
//! defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smol_str::SmolStr;

use crate::registry::{lookup_align, LevelSet};

/// Persisted heading state.
///
/// Wire format: `{ "text": string, "level": int, "align": string }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderData {
    pub text: String,
    pub level: u8,
    pub align: SmolStr,
}

impl HeaderData {
    /// Coerce an arbitrary record into canonical form.
    ///
    /// Non-object input counts as an empty record. `level` accepts JSON
    /// integers and numeric strings; anything else, or an id outside the
    /// enabled set, lands on the set's default entry. Unknown `align` ids
    /// land on the first alignment entry. Idempotent.
    pub fn normalize(raw: &Value, levels: &LevelSet) -> Self {
        let obj = raw.as_object();

        let text = obj
            .and_then(|o| o.get("text"))
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_owned();

        let requested = obj.and_then(|o| o.get("level"));
        let level = match requested.and_then(parse_level) {
            Some(id) => levels.get(id).id,
            None => {
                if requested.is_some_and(|v| !v.is_null()) {
                    let requested_shown = requested.unwrap_or(&Value::Null);
                    tracing::trace!(
                        target: "stanza::header",
                        requested = %requested_shown,
                        fallback = levels.default_entry().id,
                        "unparseable level, using default"
                    );
                }
                levels.default_entry().id
            }
        };

        let align = obj
            .and_then(|o| o.get("align"))
            .and_then(Value::as_str)
            .unwrap_or("");

        Self {
            text,
            level,
            align: SmolStr::new_static(lookup_align(align).id),
        }
    }
}

/// Integer-parse a level value: JSON integers as-is, strings via
/// `str::parse`. Floats and everything else fail.
fn parse_level(value: &Value) -> Option<u8> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Whether a saved record carries visible text. Records failing this are
/// discarded by the host; level and align values never fail validation.
pub fn validate_record(data: &Value) -> bool {
    data.get("text")
        .and_then(Value::as_str)
        .is_some_and(|text| !text.trim().is_empty())
}
