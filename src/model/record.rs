use serde::{Deserialize, Serialize};

/// One entry of the notes file, as stored on disk.
///
/// Every field is optional so that an incomplete entry can be reported as a
/// missing field instead of failing the whole file; see
/// [`Note::from_record`](super::Note::from_record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_deserialize_as_none() {
        let record: NoteRecord = serde_json::from_str(r#"{"id": 1, "title": "x"}"#).unwrap();
        assert_eq!(record.id, Some(1));
        assert_eq!(record.title.as_deref(), Some("x"));
        assert_eq!(record.content, None);
        assert_eq!(record.tags, None);
    }

    #[test]
    fn test_serialized_key_order() {
        let record = NoteRecord {
            id: Some(1),
            title: Some("a".to_string()),
            content: Some("b".to_string()),
            priority: Some("low".to_string()),
            status: Some("done".to_string()),
            tags: Some(vec![]),
            created_at: Some("2024-01-01T00:00:00.000000".to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"title":"a","content":"b","priority":"low","status":"done","tags":[],"created_at":"2024-01-01T00:00:00.000000"}"#
        );
    }
}
