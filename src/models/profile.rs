//! The single persisted record
//!
//! Stored as `{ "userName": string, "setupComplete": bool }`. Loading merges
//! over defaults key by key: a missing key, or one holding the wrong type,
//! falls back to [`UserProfile::default`], and unknown keys are ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Longest name the setup field accepts, in characters
pub const MAX_NAME_CHARS: usize = 15;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(deserialize_with = "or_default")]
    pub user_name: String,
    #[serde(deserialize_with = "or_default")]
    pub setup_complete: bool,
}

/// Field value, or the field's default when the stored value has another type
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

impl UserProfile {
    /// Profile produced by a successful setup, or `None` when the trimmed
    /// name is empty
    pub fn from_setup(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            user_name: name.to_string(),
            setup_complete: true,
        })
    }

    /// Name used in greetings
    pub fn display_name(&self) -> &str {
        if self.user_name.is_empty() {
            "You"
        } else {
            &self.user_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_object_merges_over_defaults() {
        let profile: UserProfile = serde_json::from_str(r#"{"userName":"Zoe"}"#).unwrap();
        assert_eq!(
            profile,
            UserProfile {
                user_name: "Zoe".to_string(),
                setup_complete: false,
            }
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let raw = r#"{"setupComplete":true,"theme":"pink","userName":"Ava"}"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.user_name, "Ava");
        assert!(profile.setup_complete);
    }

    #[test]
    fn test_serializes_camel_case() {
        let profile = UserProfile::from_setup("Mia").unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        let expected = serde_json::json!({"userName": "Mia", "setupComplete": true});
        assert_eq!(json, expected);
    }

    #[test]
    fn test_from_setup_trims_and_rejects_blank() {
        assert_eq!(UserProfile::from_setup("   "), None);
        assert_eq!(UserProfile::from_setup(""), None);
        assert_eq!(UserProfile::from_setup("  Mia ").unwrap().user_name, "Mia");
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(UserProfile::default().display_name(), "You");
        let mia = UserProfile::from_setup("Mia").unwrap();
        assert_eq!(mia.display_name(), "Mia");
    }

    #[test]
    fn test_null_name_keeps_setup_flag() {
        let raw = r#"{"userName":null,"setupComplete":true}"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.user_name, "");
        assert!(profile.setup_complete);
        assert_eq!(profile.display_name(), "You");
    }

    #[test]
    fn test_mistyped_flag_keeps_name() {
        let raw = r#"{"userName":"Ava","setupComplete":"yes"}"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.user_name, "Ava");
        assert!(!profile.setup_complete);
    }
}
