//! Request bodies for `/AI/*` operations.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One message of a conversation with the AI assistant.
///
/// Conversations are ordered and keyed by `(source_type, source_id)`: the
/// dream or analysis the chat is about.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub text: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordExtraction {
    pub content: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DreamAnalysisRequest {
    pub content: String,
    pub context: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub question: String,
    pub dream_context: String,
    pub chat_history: Vec<ChatMessage>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    /// The dream entries to summarize, as the backend returned them.
    pub dreams: Vec<Value>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionSuggestionsRequest {
    pub emotions: Vec<String>,
}

/// Identifies one stored conversation. The body of
/// `/AI/DeleteChatHistory` and the query of `/AI/GetChatHistory`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryKey {
    pub source_type: String,
    pub source_id: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveChatHistory {
    pub source_type: String,
    pub source_id: u64,
    pub messages: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ChatMessage, ChatRequest, SaveChatHistory};

    #[test]
    fn chat_requests_should_serialize_with_camel_case_keys() {
        let request = ChatRequest {
            question: "What does it mean?".to_string(),
            dream_context: "I was falling.".to_string(),
            chat_history: vec![],
        };

        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({
                "question": "What does it mean?",
                "dreamContext": "I was falling.",
                "chatHistory": [],
            })
        );
    }

    #[test]
    fn saved_conversations_should_be_keyed_by_source_type_and_id() {
        let request = SaveChatHistory {
            source_type: "dream".to_string(),
            source_id: 42,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                text: "hello".to_string(),
            }],
        };

        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({
                "sourceType": "dream",
                "sourceId": 42,
                "messages": [{ "role": "user", "text": "hello" }],
            })
        );
    }
}
