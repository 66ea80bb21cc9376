//! Collection editing helpers used by the form layer.
//!
//! Each add assigns a fresh document-unique id and the next display order
//! and returns the id; updates and removals address entries by id. The form
//! layer clones the CV, applies one of these operations, and calls
//! `Cv::touch()` — every edit yields a new value with a bumped version.

use uuid::Uuid;

use crate::errors::EditError;
use crate::models::entities::SectionEntity;

/// Appends an entry: assigns a fresh id and `max(order) + 1`, returns the id.
pub fn add_entry<T: SectionEntity>(items: &mut Vec<T>, mut entry: T) -> String {
    let id = Uuid::new_v4().to_string();
    let next_order = items
        .iter()
        .map(SectionEntity::display_order)
        .max()
        .map_or(0, |max| max + 1);
    entry.assign(id.clone(), next_order);
    items.push(entry);
    id
}

/// Replaces the entry with the given id, preserving its id and display
/// order — content edits never reshuffle the list.
pub fn update_entry<T: SectionEntity>(
    items: &mut [T],
    id: &str,
    mut entry: T,
) -> Result<(), EditError> {
    let existing = items
        .iter_mut()
        .find(|e| e.id() == id)
        .ok_or_else(|| EditError::UnknownId(id.to_string()))?;
    entry.assign(id.to_string(), existing.display_order());
    *existing = entry;
    Ok(())
}

/// Removes and returns the entry with the given id.
pub fn remove_entry<T: SectionEntity>(items: &mut Vec<T>, id: &str) -> Result<T, EditError> {
    let index = items
        .iter()
        .position(|e| e.id() == id)
        .ok_or_else(|| EditError::UnknownId(id.to_string()))?;
    Ok(items.remove(index))
}

/// Moves the entry with the given id to `new_index` in display order, then
/// rewrites every `order` field to the compact sequence 0..n.
pub fn move_entry<T: SectionEntity>(
    items: &mut [T],
    id: &str,
    new_index: usize,
) -> Result<(), EditError> {
    let mut positions: Vec<usize> = (0..items.len()).collect();
    positions.sort_by_key(|&i| items[i].display_order());

    let current = positions
        .iter()
        .position(|&i| items[i].id() == id)
        .ok_or_else(|| EditError::UnknownId(id.to_string()))?;
    let moved = positions.remove(current);
    positions.insert(new_index.min(positions.len()), moved);

    for (order, &i) in positions.iter().enumerate() {
        let id = items[i].id().to_string();
        items[i].assign(id, order as i32);
    }
    Ok(())
}
