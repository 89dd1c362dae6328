use crate::model::item::{Item, ItemFields};

/// Error type for list mutations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required.")]
    EmptyTitle,
}

/// Generate a new item key: the decimal millisecond timestamp at creation.
///
/// Two items created within the same millisecond collide. That is a known
/// property of the format, kept for compatibility with existing data; the
/// app is single-user and every creation is a separate user action.
pub fn generate_key() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

// ---------------------------------------------------------------------------
// Pure list operations
// ---------------------------------------------------------------------------
//
// None of these touch storage. Input is borrowed, output is a fresh Vec;
// the caller decides whether and when to persist the result.

/// Append a new item built from `fields` with a freshly generated key.
///
/// Fails with `EmptyTitle` when the trimmed title is empty, in which case
/// the caller's collection is untouched.
pub fn add(items: &[Item], fields: ItemFields) -> Result<Vec<Item>, ValidationError> {
    if fields.text.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let mut next = items.to_vec();
    next.push(Item::from_fields(generate_key(), fields, false));
    Ok(next)
}

/// Replace the entry with `key` in place, or append a new entry when the
/// key is absent.
///
/// Replacement is total over the editable fields: the result carries the
/// old key and completion flag but takes every field from `fields`.
/// Carry-over of unedited fields is the caller's job (pre-populate the
/// form from the existing entry before editing).
pub fn upsert_by_key(
    items: &[Item],
    key: &str,
    fields: ItemFields,
) -> Result<Vec<Item>, ValidationError> {
    if fields.text.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    match items.iter().position(|item| item.key == key) {
        Some(idx) => {
            let mut next = items.to_vec();
            let completed = next[idx].completed;
            next[idx] = Item::from_fields(key.to_string(), fields, completed);
            Ok(next)
        }
        None => add(items, fields),
    }
}

/// Remove the entry with `key`. No-op when the key is absent.
pub fn remove_by_key(items: &[Item], key: &str) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.key != key)
        .cloned()
        .collect()
}

/// Flip `completed` on the entry with `key`, leaving everything else
/// untouched. No-op when the key is absent.
pub fn toggle_completed_by_key(items: &[Item], key: &str) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            if item.key == key {
                let mut toggled = item.clone();
                toggled.completed = !toggled.completed;
                toggled
            } else {
                item.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::Priority;

    fn item(key: &str, text: &str) -> Item {
        Item {
            key: key.into(),
            text: text.into(),
            description: String::new(),
            priority: Priority::Medium,
            due_date: String::new(),
            completed: false,
        }
    }

    fn fields(text: &str) -> ItemFields {
        ItemFields {
            text: text.into(),
            ..ItemFields::default()
        }
    }

    #[test]
    fn add_appends_and_preserves_prior_entries() {
        let items = vec![item("1", "first"), item("2", "second")];
        let next = add(&items, fields("third")).unwrap();
        assert_eq!(next.len(), 3);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[1], items[1]);
        assert_eq!(next[2].text, "third");
        assert!(!next[2].completed);
        assert!(!next[2].key.is_empty());
    }

    #[test]
    fn add_rejects_whitespace_only_title() {
        let items = vec![item("1", "first")];
        assert_eq!(add(&items, fields("   ")), Err(ValidationError::EmptyTitle));
        assert_eq!(add(&items, fields("")), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn upsert_existing_key_replaces_in_place() {
        let items = vec![item("1", "first"), item("2", "second"), item("3", "third")];
        let new_fields = ItemFields {
            text: "second, revised".into(),
            description: "notes".into(),
            priority: Priority::High,
            due_date: "2025-07-01".into(),
        };
        let next = upsert_by_key(&items, "2", new_fields).unwrap();
        assert_eq!(next.len(), 3);
        // Position and key are stable
        assert_eq!(next[1].key, "2");
        assert_eq!(next[1].text, "second, revised");
        assert_eq!(next[1].priority, Priority::High);
        // Neighbors untouched
        assert_eq!(next[0], items[0]);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn upsert_preserves_completed_flag() {
        let mut done = item("1", "done already");
        done.completed = true;
        let next = upsert_by_key(&[done], "1", fields("renamed")).unwrap();
        assert!(next[0].completed);
    }

    #[test]
    fn upsert_absent_key_appends_with_fresh_key() {
        let items = vec![item("1", "first")];
        let next = upsert_by_key(&items, "999", fields("new entry")).unwrap();
        assert_eq!(next.len(), 2);
        assert_eq!(next[1].text, "new entry");
        // A fresh key is generated, not the missing one
        assert_ne!(next[1].key, "999");
    }

    #[test]
    fn upsert_rejects_empty_title_without_mutating() {
        let items = vec![item("1", "first")];
        assert_eq!(
            upsert_by_key(&items, "1", fields(" ")),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(items[0].text, "first");
    }

    #[test]
    fn remove_by_key_drops_exactly_one_entry() {
        let items = vec![item("1", "first"), item("2", "second")];
        let next = remove_by_key(&items, "1");
        assert_eq!(next.len(), 1);
        assert!(next.iter().all(|i| i.key != "1"));
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let items = vec![item("1", "first")];
        assert_eq!(remove_by_key(&items, "nope"), items);
    }

    #[test]
    fn toggle_twice_is_involution() {
        let items = vec![item("1", "first"), item("2", "second")];
        let once = toggle_completed_by_key(&items, "2");
        assert!(once[1].completed);
        assert!(!once[0].completed);
        let twice = toggle_completed_by_key(&once, "2");
        assert_eq!(twice, items);
    }

    #[test]
    fn toggle_absent_key_is_noop() {
        let items = vec![item("1", "first")];
        assert_eq!(toggle_completed_by_key(&items, "nope"), items);
    }

    #[test]
    fn colliding_keys_are_possible_within_one_millisecond() {
        // Key generation is the creation timestamp in milliseconds. Two
        // entries constructed with the same key both enter the collection;
        // nothing deduplicates them. This pins the documented behavior.
        let a = Item::from_fields("1700000000000".into(), fields("one"), false);
        let b = Item::from_fields("1700000000000".into(), fields("two"), false);
        let items = vec![a, b];
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].key, items[1].key);
        // Key-addressed ops act on every match.
        let toggled = toggle_completed_by_key(&items, "1700000000000");
        assert!(toggled[0].completed && toggled[1].completed);
        assert!(remove_by_key(&items, "1700000000000").is_empty());
    }
}
