//! Request bodies for `/Admin/*` operations.
//!
//! Admin login reuses [`crate::requests::auth::Credentials`].
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NewEmotion {
    pub emotion_name: String,
    pub color: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NewDreamType {
    pub type_name: String,
    pub color: String,
}

/// Batch log deletion for `/Admin/DeleteLogs`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogDeletion {
    pub log_ids: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{LogDeletion, NewEmotion};

    #[test]
    fn admin_resource_forms_should_serialize_with_pascal_case_keys() {
        let emotion = NewEmotion {
            emotion_name: "joy".to_string(),
            color: "#ffcc00".to_string(),
        };

        assert_eq!(
            serde_json::to_value(emotion).unwrap(),
            json!({ "EmotionName": "joy", "Color": "#ffcc00" })
        );
    }

    #[test]
    fn log_deletions_should_serialize_the_id_list_with_a_camel_case_key() {
        let deletion = LogDeletion {
            log_ids: vec![1, 2, 3],
        };

        assert_eq!(
            serde_json::to_value(deletion).unwrap(),
            json!({ "logIds": [1, 2, 3] })
        );
    }
}
