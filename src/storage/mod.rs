//! Client-data persistence
//!
//! The app's data model is a small set of string keys with JSON-encoded
//! values (the `mental-link-*` entries the mobile front-end keeps in local
//! storage). Here they live in a single SQLite `kv` table so the stored
//! bytes stay compatible with existing data. Malformed stored JSON is
//! treated as absence of data, never propagated to the user.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tokio::sync::Mutex;

use crate::conversation::Message;

pub const KEY_USER: &str = "mental-link-user";
pub const KEY_CHAT_HISTORY: &str = "mental-link-chat-history";
pub const KEY_DAILY_DIAGNOSIS: &str = "mental-link-daily-diagnosis";
pub const KEY_THEME: &str = "mental-link-theme";
pub const KEY_LANG: &str = "mental-link-lang";
pub const KEY_ONBOARDING: &str = "mental-link-onboarding-completed";

/// The registration form's profile record. The chat core only reads this;
/// field names match the JSON the front-end stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    pub email: String,
    #[serde(default)]
    pub emergency_contact_relation: String,
    #[serde(default)]
    pub emergency_contact_name: String,
    #[serde(default)]
    pub emergency_contact_phone: String,
}

impl UserProfile {
    pub fn is_registered(&self) -> bool {
        !self.first_name.trim().is_empty()
    }

    pub fn has_emergency_contact(&self) -> bool {
        !self.emergency_contact_name.trim().is_empty()
    }
}

/// One daily-diagnosis submission, 1-10 integer scales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisEntry {
    pub mood: u8,
    pub energy: u8,
    pub stress: u8,
    pub sleep: u8,
    pub social: u8,
    #[serde(default)]
    pub notes: String,
    /// Calendar day, `YYYY-MM-DD`
    pub date: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value store backing all persisted app data
pub struct KvStore {
    pool: SqlitePool,
    /// Serializes the read-modify-write list appends; concurrent writers
    /// would otherwise overwrite each other's entries.
    append_lock: Mutex<()>,
}

impl KvStore {
    /// Open (or create) the store at the given SQLite path
    pub async fn new(db_path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self {
            pool,
            append_lock: Mutex::new(()),
        };
        store.init_schema().await?;
        Ok(store)
    }

    /// In-memory store for tests
    pub async fn new_in_memory() -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self {
            pool,
            append_lock: Mutex::new(()),
        };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    pub async fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO kv (key, value, updated_at) VALUES (?, ?, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// JSON read; a value that fails to decode reads as absent.
    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.get_raw(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                tracing::warn!(key, %error, "malformed stored JSON, treating as absent");
                Ok(None)
            }
        }
    }

    async fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw).await
    }

    // -- profile --------------------------------------------------------

    pub async fn user_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        self.get_json(KEY_USER).await
    }

    pub async fn put_user_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        self.put_json(KEY_USER, profile).await
    }

    pub async fn delete_user_profile(&self) -> Result<(), StorageError> {
        self.remove(KEY_USER).await
    }

    // -- chat transcript ------------------------------------------------

    pub async fn chat_history(&self) -> Result<Vec<Message>, StorageError> {
        Ok(self.get_json(KEY_CHAT_HISTORY).await?.unwrap_or_default())
    }

    pub async fn save_chat_history(&self, messages: &[Message]) -> Result<(), StorageError> {
        self.put_json(KEY_CHAT_HISTORY, &messages).await
    }

    pub async fn append_chat_messages(&self, messages: &[Message]) -> Result<(), StorageError> {
        let _guard = self.append_lock.lock().await;
        let mut history = self.chat_history().await?;
        history.extend_from_slice(messages);
        self.save_chat_history(&history).await
    }

    pub async fn clear_chat_history(&self) -> Result<(), StorageError> {
        self.remove(KEY_CHAT_HISTORY).await
    }

    // -- daily diagnosis ------------------------------------------------

    pub async fn diagnosis_entries(&self) -> Result<Vec<DiagnosisEntry>, StorageError> {
        Ok(self
            .get_json(KEY_DAILY_DIAGNOSIS)
            .await?
            .unwrap_or_default())
    }

    pub async fn append_diagnosis(&self, entry: &DiagnosisEntry) -> Result<(), StorageError> {
        let _guard = self.append_lock.lock().await;
        let mut entries = self.diagnosis_entries().await?;
        entries.push(entry.clone());
        self.put_json(KEY_DAILY_DIAGNOSIS, &entries).await
    }

    // -- settings -------------------------------------------------------

    pub async fn theme(&self) -> Result<Option<Theme>, StorageError> {
        Ok(self.get_raw(KEY_THEME).await?.and_then(|v| Theme::parse(&v)))
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.put_raw(KEY_THEME, theme.as_str()).await
    }

    pub async fn language(&self) -> Result<Option<Language>, StorageError> {
        Ok(self
            .get_raw(KEY_LANG)
            .await?
            .and_then(|v| Language::parse(&v)))
    }

    pub async fn set_language(&self, language: Language) -> Result<(), StorageError> {
        self.put_raw(KEY_LANG, language.as_str()).await
    }

    pub async fn onboarding_completed(&self) -> Result<bool, StorageError> {
        Ok(self.get_raw(KEY_ONBOARDING).await?.as_deref() == Some("true"))
    }

    pub async fn complete_onboarding(&self) -> Result<(), StorageError> {
        self.put_raw(KEY_ONBOARDING, "true").await
    }

    /// The settings screen's "delete my data" action: profile, diagnosis
    /// history and theme. The chat transcript has its own delete.
    pub async fn delete_user_data(&self) -> Result<(), StorageError> {
        self.remove(KEY_USER).await?;
        self.remove(KEY_DAILY_DIAGNOSIS).await?;
        self.remove(KEY_THEME).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            birth_date: Some("2009-03-14".to_string()),
            email: "a@b.com".to_string(),
            emergency_contact_relation: "Madre".to_string(),
            emergency_contact_name: "María Pérez".to_string(),
            emergency_contact_phone: "+54 11 5555-0000".to_string(),
        }
    }

    #[tokio::test]
    async fn profile_roundtrip_uses_camel_case_on_disk() {
        let store = KvStore::new_in_memory().await.unwrap();
        store.put_user_profile(&profile()).await.unwrap();

        let raw = store.get_raw(KEY_USER).await.unwrap().unwrap();
        assert!(raw.contains("\"firstName\":\"Ana\""));
        assert!(raw.contains("\"emergencyContactPhone\""));

        let loaded = store.user_profile().await.unwrap().unwrap();
        assert_eq!(loaded, profile());
    }

    #[tokio::test]
    async fn malformed_json_reads_as_absent() {
        let store = KvStore::new_in_memory().await.unwrap();
        store.put_raw(KEY_USER, "{not json").await.unwrap();
        assert!(store.user_profile().await.unwrap().is_none());

        store.put_raw(KEY_CHAT_HISTORY, "]]").await.unwrap();
        assert!(store.chat_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn chat_history_appends_in_order() {
        let store = KvStore::new_in_memory().await.unwrap();
        let now = Utc::now();
        let message = |id: i64, text: &str| Message {
            id,
            text: text.to_string(),
            is_bot: id % 2 == 0,
            timestamp: now,
            options: None,
        };

        store
            .append_chat_messages(&[message(1, "hola"), message(2, "¡Hola!")])
            .await
            .unwrap();
        store
            .append_chat_messages(&[message(3, "estoy triste")])
            .await
            .unwrap();

        let history = store.chat_history().await.unwrap();
        let ids: Vec<i64> = history.iter().map(|m| m.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[tokio::test]
    async fn concurrent_appends_keep_every_message() {
        let store = std::sync::Arc::new(KvStore::new_in_memory().await.unwrap());
        let now = Utc::now();

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .append_chat_messages(&[Message {
                        id: i,
                        text: format!("mensaje {i}"),
                        is_bot: false,
                        timestamp: now,
                        options: None,
                    }])
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.chat_history().await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn diagnosis_entries_accumulate() {
        let store = KvStore::new_in_memory().await.unwrap();
        let entry = DiagnosisEntry {
            mood: 7,
            energy: 5,
            stress: 3,
            sleep: 8,
            social: 6,
            notes: "buen día".to_string(),
            date: "2026-08-26".to_string(),
            timestamp: Utc::now(),
        };

        store.append_diagnosis(&entry).await.unwrap();
        store.append_diagnosis(&entry).await.unwrap();
        assert_eq!(store.diagnosis_entries().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn settings_store_raw_sentinel_values() {
        let store = KvStore::new_in_memory().await.unwrap();
        store.set_theme(Theme::Dark).await.unwrap();
        store.set_language(Language::Es).await.unwrap();
        store.complete_onboarding().await.unwrap();

        assert_eq!(store.get_raw(KEY_THEME).await.unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get_raw(KEY_LANG).await.unwrap().as_deref(), Some("es"));
        assert_eq!(
            store.get_raw(KEY_ONBOARDING).await.unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(store.theme().await.unwrap(), Some(Theme::Dark));

        // Unknown stored values read as unset rather than erroring.
        store.put_raw(KEY_THEME, "sepia").await.unwrap();
        assert_eq!(store.theme().await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_user_data_leaves_chat_history_alone() {
        let store = KvStore::new_in_memory().await.unwrap();
        store.put_user_profile(&profile()).await.unwrap();
        store.set_theme(Theme::Light).await.unwrap();
        store
            .append_chat_messages(&[Message {
                id: 1,
                text: "hola".to_string(),
                is_bot: false,
                timestamp: Utc::now(),
                options: None,
            }])
            .await
            .unwrap();

        store.delete_user_data().await.unwrap();
        assert!(store.user_profile().await.unwrap().is_none());
        assert_eq!(store.theme().await.unwrap(), None);
        assert_eq!(store.chat_history().await.unwrap().len(), 1);
    }
}
