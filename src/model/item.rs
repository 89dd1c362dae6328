use serde::{Deserialize, Serialize};

/// Priority of a todo item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Display label, also the serialized form
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Parse a priority from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Priority> {
        match s.to_ascii_lowercase().as_str() {
            "low" | "l" => Some(Priority::Low),
            "medium" | "med" | "m" => Some(Priority::Medium),
            "high" | "h" => Some(Priority::High),
            _ => None,
        }
    }

    /// Next priority in the Low → Medium → High cycle (wraps)
    pub fn next(self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous priority in the cycle (wraps)
    pub fn prev(self) -> Priority {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

/// A single todo item.
///
/// Serialized field names match the on-disk `todos.json` layout. `completed`
/// is defaulted because payloads written before the field existed omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique key, assigned at creation and never changed
    pub key: String,
    /// Title text (non-empty after trimming)
    pub text: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// ISO date (`YYYY-MM-DD`) or empty for no deadline
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
}

/// The editable fields of an item, as collected by a form or CLI flags.
/// `key` and `completed` are carried by the operation, not the form.
#[derive(Debug, Clone, Default)]
pub struct ItemFields {
    pub text: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: String,
}

impl Item {
    /// Create an item from editable fields with the given key
    pub fn from_fields(key: String, fields: ItemFields, completed: bool) -> Self {
        Item {
            key,
            text: fields.text,
            description: fields.description,
            priority: fields.priority,
            due_date: fields.due_date,
            completed,
        }
    }

    /// The editable fields of this item (for pre-populating an edit form)
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            text: self.text.clone(),
            description: self.description.clone(),
            priority: self.priority,
            due_date: self.due_date.clone(),
        }
    }

    /// Due date for display: the stored date, or "No deadline" when empty
    pub fn due_label(&self) -> &str {
        if self.due_date.is_empty() {
            "No deadline"
        } else {
            &self.due_date
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parse_accepts_case_and_shorthand() {
        assert_eq!(Priority::parse("High"), Some(Priority::High));
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("m"), Some(Priority::Medium));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn priority_cycle_wraps_both_ways() {
        assert_eq!(Priority::High.next(), Priority::Low);
        assert_eq!(Priority::Low.prev(), Priority::High);
        assert_eq!(Priority::Medium.next().prev(), Priority::Medium);
    }

    #[test]
    fn item_serializes_with_camel_case_due_date() {
        let item = Item {
            key: "1700000000000".into(),
            text: "Buy milk".into(),
            description: String::new(),
            priority: Priority::High,
            due_date: "2025-06-01".into(),
            completed: false,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""dueDate":"2025-06-01""#));
        assert!(json.contains(r#""priority":"High""#));
    }

    #[test]
    fn item_deserializes_legacy_payload_without_completed() {
        // Earlier revision of the stored format had no `completed` field
        let json = r#"{"key":"1","text":"old","description":"","priority":"Medium","dueDate":""}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(!item.completed);
    }

    #[test]
    fn due_label_falls_back_when_empty() {
        let mut item = Item::from_fields("1".into(), ItemFields::default(), false);
        assert_eq!(item.due_label(), "No deadline");
        item.due_date = "2025-01-01".into();
        assert_eq!(item.due_label(), "2025-01-01");
    }
}
