use serde::{Deserialize, Deserializer, Serialize};

use super::EntityId;

/// Tag applied when the backend sends no memory type
pub const DEFAULT_MEMORY_TYPE: &str = "fact";

/// A long-term memory entry as listed by `GET /api/memories`.
///
/// The store has shipped a few record shapes over time, so decoding goes
/// through [`MemoryRecord`]: `memory_id` wins over `id`, `content` wins over
/// the legacy `memory` field, and a missing type becomes `fact`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MemoryRecord")]
pub struct Memory {
    pub id: EntityId,
    pub title: Option<String>,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tags: Vec<String>,
}

impl Memory {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Memory")
    }

    /// Decode a memory list record by record.
    ///
    /// Records that cannot be read are logged and skipped so one bad file in
    /// the store never hides the rest.
    pub fn decode_list(records: Vec<serde_json::Value>) -> Vec<Memory> {
        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Memory>(record) {
                Ok(memory) => Some(memory),
                Err(e) => {
                    tracing::warn!("skipping memory record #{}: {}", index, e);
                    None
                }
            })
            .collect()
    }
}

/// Wire shape of a memory record
#[derive(Debug, Deserialize)]
struct MemoryRecord {
    #[serde(default)]
    memory_id: Option<EntityId>,
    #[serde(default)]
    id: Option<EntityId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    memory: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    tags: Vec<String>,
}

/// Non-array tags become empty; non-string elements are dropped
fn lenient_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

impl TryFrom<MemoryRecord> for Memory {
    type Error = String;

    fn try_from(record: MemoryRecord) -> Result<Self, Self::Error> {
        let id = record
            .memory_id
            .or(record.id)
            .ok_or_else(|| "memory record has neither memory_id nor id".to_string())?;

        let content = record
            .content
            .filter(|c| !c.is_empty())
            .or(record.memory)
            .unwrap_or_default();

        Ok(Memory {
            id,
            title: record.title,
            content,
            kind: record
                .kind
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| DEFAULT_MEMORY_TYPE.to_string()),
            tags: record.tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_id_preferred_over_id() {
        let json = r#"{"memory_id":"m-1","id":"legacy","content":"likes tea"}"#;
        let mem: Memory = serde_json::from_str(json).unwrap();
        assert_eq!(mem.id.as_str(), "m-1");
    }

    #[test]
    fn test_legacy_fields_fall_back() {
        let json = r#"{"id":"m-2","memory":"birthday is in may"}"#;
        let mem: Memory = serde_json::from_str(json).unwrap();
        assert_eq!(mem.id.as_str(), "m-2");
        assert_eq!(mem.content, "birthday is in may");
        assert_eq!(mem.kind, DEFAULT_MEMORY_TYPE);
        assert!(mem.tags.is_empty());
        assert_eq!(mem.display_title(), "Memory");
    }

    #[test]
    fn test_tags_keep_order() {
        let json = r#"{"id":"m-3","title":"Zoom","content":"x","type":"habit","tags":["work","calls"]}"#;
        let mem: Memory = serde_json::from_str(json).unwrap();
        assert_eq!(mem.tags, vec!["work".to_string(), "calls".to_string()]);
        assert_eq!(mem.kind, "habit");
        assert_eq!(mem.display_title(), "Zoom");
    }

    #[test]
    fn test_malformed_tags_are_tolerated() {
        let json = r#"{"id":"m-4","content":"x","tags":"work"}"#;
        let mem: Memory = serde_json::from_str(json).unwrap();
        assert!(mem.tags.is_empty());

        let json = r#"{"id":"m-5","content":"x","tags":["home",3,null,"diy"]}"#;
        let mem: Memory = serde_json::from_str(json).unwrap();
        assert_eq!(mem.tags, vec!["home".to_string(), "diy".to_string()]);
    }

    #[test]
    fn test_bad_record_skipped_not_whole_list() {
        let records: Vec<serde_json::Value> = serde_json::from_str(
            r#"[
                {"memory_id":"a","content":"ok"},
                {"content":"no id at all"},
                {"memory_id":"b","content":"x","tags":"work"},
                {"memory_id":"c","content":17}
            ]"#,
        )
        .unwrap();

        let ids: Vec<String> = Memory::decode_list(records)
            .iter()
            .map(|m| m.id.to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_ids_rejected() {
        let result = serde_json::from_str::<Memory>(r#"{"content":"orphan"}"#);
        assert!(result.is_err());
    }
}
