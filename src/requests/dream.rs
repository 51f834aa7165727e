//! Request bodies for `/Dream/*` operations.
use serde::Serialize;

/// A dream entry, for `/Dream/Create` and `/Dream/Update/{id}`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DreamPayload {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    /// The night the dream happened, as the backend expects it (`YYYY-MM-DD`).
    pub dream_date: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::DreamPayload;

    #[test]
    fn dream_payloads_should_serialize_with_camel_case_keys() {
        let payload = DreamPayload {
            title: "Falling".to_string(),
            content: "I was falling from a rooftop.".to_string(),
            tags: vec!["falling".to_string()],
            is_public: false,
            dream_date: "2024-05-01".to_string(),
        };

        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({
                "title": "Falling",
                "content": "I was falling from a rooftop.",
                "tags": ["falling"],
                "isPublic": false,
                "dreamDate": "2024-05-01",
            })
        );
    }
}
