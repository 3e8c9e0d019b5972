//! Landing-page representations.
//!
//! Two shapes of the same data exist: the nested editor state the admin UI
//! works with, and the flat relational rows the pages live as in storage.
//! Every editable field is a structured record carrying an optional value,
//! an optional color, and a visibility flag, keyed by field id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Landing experiences always render this many page slots.
pub const PAGE_SLOT_COUNT: usize = 5;

/// Template kind of the first (cover) page slot.
pub const COVER_TEMPLATE: &str = "표지";

/// Template kind of every other default slot.
pub const DEFAULT_TEMPLATE: &str = "기타";

/// Default template variant for unpopulated slots.
pub const DEFAULT_VARIANT: &str = "유형1";

/// Per-field content in the editor representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldContent {
    /// The field's text value. Fields without a value are not persisted.
    #[serde(default)]
    pub value: Option<String>,

    /// Optional display color.
    #[serde(default)]
    pub color: Option<String>,

    /// Visibility flag; absent means visible.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl FieldContent {
    /// A visible field with just a value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            color: None,
            visible: true,
        }
    }

    /// Whether this field produces a persisted content row.
    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// One page as the editor sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorPage {
    /// Template kind (e.g. cover, menu, map).
    pub template_kind: String,

    /// Template variant within the kind.
    pub template_variant: String,

    /// Field contents keyed by field id. BTreeMap keeps row emission
    /// deterministic.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldContent>,
}

impl EditorPage {
    /// The default page for an unpopulated slot; slot numbers are 1-based.
    pub fn default_for_slot(slot_no: usize) -> Self {
        let kind = if slot_no == 1 {
            COVER_TEMPLATE
        } else {
            DEFAULT_TEMPLATE
        };
        Self {
            template_kind: kind.to_string(),
            template_variant: DEFAULT_VARIANT.to_string(),
            fields: BTreeMap::new(),
        }
    }
}

/// The whole landing experience as the editor sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditorState {
    /// Populated pages, first slot first. May hold fewer than
    /// [`PAGE_SLOT_COUNT`] entries; conversion pads the rest.
    pub pages: Vec<EditorPage>,
}

/// One persisted content row of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRow {
    pub field_id: String,
    pub field_value: String,
    pub field_color: Option<String>,
    pub is_visible: bool,
}

/// One page as it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// 1-based slot number.
    pub page_no: i32,
    pub template_kind: String,
    pub template_variant: String,
    pub contents: Vec<FieldRow>,
}
