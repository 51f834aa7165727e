//! Endpoint registry: the base-URL-relative path of every backend operation.
//!
//! Paths are pure data grouped by resource family. Entries for
//! delete/detail-by-id operations are functions of the identifier instead of
//! fixed strings. Nothing here is mutated at runtime.
//!
//! The original front end also referenced `SEARCH` and `SHARE` dream
//! endpoints that were never registered anywhere; those are dead entries and
//! are deliberately not defined here.

/// Token validity check. The only operation outside a resource family.
pub const CHECK_TOKEN: &str = "/CheckJWTToken";

pub mod auth {
    pub const LOGIN: &str = "/Auth/Login";
    pub const SIGN_UP: &str = "/Auth/Sign";
    pub const VERIFY: &str = "/Auth/Verify";
    pub const RESET_PASSWORD: &str = "/Auth/ResetPassword";
    pub const UPDATE_PASSWORD: &str = "/Auth/UpdatePassword";
}

pub mod user {
    pub const GET_INFO: &str = "/User/GetInfo";
    pub const UPDATE_INFO: &str = "/User/UpdateInfo";
    pub const UPLOAD_AVATAR: &str = "/User/UploadAvatar";
    pub const GET_STATISTICS: &str = "/User/GetStatistics";
}

pub mod dream {
    pub const CREATE: &str = "/Dream/Create";
    pub const GET_LIST: &str = "/Dream/GetList";
    pub const GET_EMOTIONS: &str = "/Dream/GetEmotions";
    pub const GET_DREAM_TYPES: &str = "/Dream/GetDreamTypes";

    #[must_use]
    pub fn detail(dream_id: u64) -> String {
        format!("/Dream/GetDetail/{dream_id}")
    }

    #[must_use]
    pub fn update(dream_id: u64) -> String {
        format!("/Dream/Update/{dream_id}")
    }

    #[must_use]
    pub fn delete(dream_id: u64) -> String {
        format!("/Dream/Delete/{dream_id}")
    }
}

pub mod analysis {
    pub const CREATE: &str = "/Analysis/Create";
    pub const GET_LIST: &str = "/Analysis/GetList";

    #[must_use]
    pub fn detail(analysis_id: u64) -> String {
        format!("/Analysis/GetDetail/{analysis_id}")
    }

    #[must_use]
    pub fn delete(analysis_id: u64) -> String {
        format!("/Analysis/Delete/{analysis_id}")
    }
}

pub mod ai {
    pub const EXTRACT_KEYWORDS: &str = "/AI/ExtractKeywords";
    pub const ANALYZE_DREAM: &str = "/AI/AnalyzeDream";
    pub const CHAT: &str = "/AI/Chat";
    pub const GENERATE_SUMMARY: &str = "/AI/GenerateSummary";
    pub const GET_EMOTION_SUGGESTIONS: &str = "/AI/GetEmotionSuggestions";
    pub const ANALYZE_WITH_KEYWORDS: &str = "/AI/AnalyzeDreamWithKeywords";
    pub const GET_CHAT_HISTORY: &str = "/AI/GetChatHistory";
    pub const SAVE_CHAT_HISTORY: &str = "/AI/SaveChatHistory";
    pub const DELETE_CHAT_HISTORY: &str = "/AI/DeleteChatHistory";
}

pub mod admin {
    pub const LOGIN: &str = "/Admin/Login";
    pub const GET_LOGS: &str = "/Admin/GetLogs";
    pub const DELETE_LOGS: &str = "/Admin/DeleteLogs";
    pub const GET_EMOTIONS: &str = "/Admin/GetEmotions";
    pub const ADD_EMOTION: &str = "/Admin/AddEmotion";
    pub const GET_DREAM_TYPES: &str = "/Admin/GetDreamTypes";
    pub const ADD_DREAM_TYPE: &str = "/Admin/AddDreamType";
    pub const GET_PUBLIC_DREAMS: &str = "/Admin/GetPublicDreams";

    #[must_use]
    pub fn delete_emotion(emotion_id: u64) -> String {
        format!("/Admin/DeleteEmotion/{emotion_id}")
    }

    #[must_use]
    pub fn delete_dream_type(type_id: u64) -> String {
        format!("/Admin/DeleteDreamType/{type_id}")
    }
}
