//! AI assistant operations: `/AI/*`. All require a token.
//!
//! Chat histories are ordered conversations keyed by
//! `(source_type, source_id)`, where the source is either a dream entry or a
//! stored analysis.
use serde_json::Value;

use super::{Client, Error};
use crate::endpoints::ai;
use crate::query::{Query, QueryParam};
use crate::requests::ai::{
    ChatHistoryKey, ChatMessage, ChatRequest, DreamAnalysisRequest, EmotionSuggestionsRequest,
    KeywordExtraction, SaveChatHistory, SummaryRequest,
};

impl Client {
    /// Extracts keywords, emotions and dream types from a dream's content.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn extract_keywords(&self, content: &str) -> Result<Value, Error> {
        self.post_json(
            ai::EXTRACT_KEYWORDS,
            &KeywordExtraction {
                content: content.to_string(),
            },
        )
        .await
    }

    /// Requests an AI interpretation of a dream. `context` may be empty.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn analyze_dream(&self, content: &str, context: &str) -> Result<Value, Error> {
        self.post_json(
            ai::ANALYZE_DREAM,
            &DreamAnalysisRequest {
                content: content.to_string(),
                context: context.to_string(),
            },
        )
        .await
    }

    /// Asks the assistant a question about a dream or analysis report.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn chat(
        &self,
        question: &str,
        dream_context: &str,
        chat_history: &[ChatMessage],
    ) -> Result<Value, Error> {
        self.post_json(
            ai::CHAT,
            &ChatRequest {
                question: question.to_string(),
                dream_context: dream_context.to_string(),
                chat_history: chat_history.to_vec(),
            },
        )
        .await
    }

    /// Summarizes a set of dream entries.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn generate_summary(&self, dreams: &[Value]) -> Result<Value, Error> {
        self.post_json(
            ai::GENERATE_SUMMARY,
            &SummaryRequest {
                dreams: dreams.to_vec(),
            },
        )
        .await
    }

    /// Requests well-being suggestions for a set of logged emotions.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_emotion_suggestions(&self, emotions: &[String]) -> Result<Value, Error> {
        self.post_json(
            ai::GET_EMOTION_SUGGESTIONS,
            &EmotionSuggestionsRequest {
                emotions: emotions.to_vec(),
            },
        )
        .await
    }

    /// Combined interpretation and keyword extraction in one round trip.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn analyze_dream_with_keywords(
        &self,
        content: &str,
        context: &str,
    ) -> Result<Value, Error> {
        self.post_json(
            ai::ANALYZE_WITH_KEYWORDS,
            &DreamAnalysisRequest {
                content: content.to_string(),
                context: context.to_string(),
            },
        )
        .await
    }

    /// Fetches the stored conversation about a dream or analysis.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_chat_history(
        &self,
        source_type: &str,
        source_id: u64,
    ) -> Result<Value, Error> {
        self.get(
            ai::GET_CHAT_HISTORY,
            Query::params(vec![
                QueryParam::new("sourceType", source_type),
                QueryParam::new("sourceId", &source_id.to_string()),
            ]),
        )
        .await
    }

    /// Stores a conversation, replacing any previous one for the same source.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn save_chat_history(
        &self,
        source_type: &str,
        source_id: u64,
        messages: &[ChatMessage],
    ) -> Result<Value, Error> {
        self.post_json(
            ai::SAVE_CHAT_HISTORY,
            &SaveChatHistory {
                source_type: source_type.to_string(),
                source_id,
                messages: messages.to_vec(),
            },
        )
        .await
    }

    /// Deletes the stored conversation for a source. A POST on the wire, not
    /// a DELETE.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn delete_chat_history(
        &self,
        source_type: &str,
        source_id: u64,
    ) -> Result<Value, Error> {
        self.post_json(
            ai::DELETE_CHAT_HISTORY,
            &ChatHistoryKey {
                source_type: source_type.to_string(),
                source_id,
            },
        )
        .await
    }
}
