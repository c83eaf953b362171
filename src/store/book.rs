//! Book entity and its creation/update payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// A catalog record.
///
/// The wire representation always carries all seven keys; optional fields
/// serialize as explicit `null` when absent, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub language: String,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub genre: Option<String>,
}

/// Validated creation payload.
///
/// The REST layer builds this after required-field checks; the store only
/// assigns the id.
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub language: String,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub genre: Option<String>,
}

/// Partial update payload.
///
/// Each field distinguishes "key absent" (outer `None`, field untouched) from
/// "key present" (outer `Some`, field overwritten with the inner value, which
/// may itself be `null`). For the three required string fields an explicit
/// `null` overwrites with the empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookPatch {
    #[serde(deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub author: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub language: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub isbn: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub published_year: Option<Option<i32>>,
    #[serde(deserialize_with = "present")]
    pub genre: Option<Option<String>>,
}

/// Wraps any key that appears in the body in `Some`, so a present-but-null
/// key deserializes as `Some(None)` rather than collapsing into `None`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_serializes_all_keys() {
        let book = Book {
            id: 1,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            language: "English".to_string(),
            isbn: None,
            published_year: None,
            genre: None,
        };

        let value = serde_json::to_value(&book).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        assert!(obj["isbn"].is_null());
        assert!(obj["published_year"].is_null());
        assert!(obj["genre"].is_null());
    }

    #[test]
    fn test_patch_absent_key_is_outer_none() {
        let patch: BookPatch = serde_json::from_value(json!({"title": "New"})).unwrap();
        assert_eq!(patch.title, Some(Some("New".to_string())));
        assert_eq!(patch.author, None);
        assert_eq!(patch.isbn, None);
    }

    #[test]
    fn test_patch_null_key_is_inner_none() {
        let patch: BookPatch = serde_json::from_value(json!({"isbn": null})).unwrap();
        assert_eq!(patch.isbn, Some(None));
        assert_eq!(patch.genre, None);
    }
}
