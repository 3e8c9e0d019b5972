//! Conversion between the editor and relational landing-page shapes.
//!
//! Pure and I/O-free. The forward direction always emits exactly
//! [`PAGE_SLOT_COUNT`] page records, padding unpopulated slots with
//! type-specific defaults, and drops fields without a value; color and
//! visibility alone do not produce a row. The inverse reconstructs the
//! editor state, so the round trip is exact for states whose declared
//! fields all carry non-empty values.

use std::collections::BTreeMap;

use super::landing_page::{
    EditorPage, EditorState, FieldContent, FieldRow, PageRecord, PAGE_SLOT_COUNT,
};

/// Flattens editor state into the fixed five page records.
pub fn to_records(editor: &EditorState) -> Vec<PageRecord> {
    (1..=PAGE_SLOT_COUNT)
        .map(|slot_no| {
            let page = editor
                .pages
                .get(slot_no - 1)
                .cloned()
                .unwrap_or_else(|| EditorPage::default_for_slot(slot_no));

            let contents = page
                .fields
                .iter()
                .filter(|(_, content)| content.has_value())
                .map(|(field_id, content)| FieldRow {
                    field_id: field_id.clone(),
                    field_value: content.value.clone().unwrap_or_default(),
                    field_color: content.color.clone(),
                    is_visible: content.visible,
                })
                .collect();

            PageRecord {
                page_no: slot_no as i32,
                template_kind: page.template_kind,
                template_variant: page.template_variant,
                contents,
            }
        })
        .collect()
}

/// Rebuilds editor state from page records.
///
/// Records are slotted by `page_no`; missing slots come back as defaults so
/// the editor always sees five pages. Visibility is taken verbatim from the
/// row; the visible-by-default rule applies only on the forward direction.
pub fn to_editor(records: &[PageRecord]) -> EditorState {
    let by_slot: BTreeMap<i32, &PageRecord> =
        records.iter().map(|r| (r.page_no, r)).collect();

    let pages = (1..=PAGE_SLOT_COUNT)
        .map(|slot_no| match by_slot.get(&(slot_no as i32)) {
            Some(record) => EditorPage {
                template_kind: record.template_kind.clone(),
                template_variant: record.template_variant.clone(),
                fields: record
                    .contents
                    .iter()
                    .map(|row| {
                        (
                            row.field_id.clone(),
                            FieldContent {
                                value: Some(row.field_value.clone()),
                                color: row.field_color.clone(),
                                visible: row.is_visible,
                            },
                        )
                    })
                    .collect(),
            },
            None => EditorPage::default_for_slot(slot_no),
        })
        .collect();

    EditorState { pages }
}
