//! Domain DTOs for the posts API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! The backend may attach extra fields (a storage id, for instance); serde
//! ignores them, and nothing on the client reads one back. Missing or `null`
//! fields decode to their defaults so a sparse record still renders.

use serde::{Deserialize, Deserializer, Serialize};

/// A single post, both as sent on create and as returned by list/search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    /// Years of experience.
    #[serde(default, deserialize_with = "null_as_default")]
    pub exp: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub techs: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_all_four_fields() {
        let post = Post {
            profile: "Rust dev".to_string(),
            desc: "Systems work".to_string(),
            exp: 4,
            techs: vec!["rust".to_string(), "tokio".to_string()],
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["profile"], "Rust dev");
        assert_eq!(json["desc"], "Systems work");
        assert_eq!(json["exp"], 4);
        assert_eq!(json["techs"], serde_json::json!(["rust", "tokio"]));
    }

    #[test]
    fn missing_exp_and_techs_default() {
        let post: Post = serde_json::from_str(r#"{"profile":"A","desc":"d"}"#).unwrap();
        assert_eq!(post.exp, 0);
        assert!(post.techs.is_empty());
    }

    #[test]
    fn null_techs_decode_as_empty() {
        let post: Post =
            serde_json::from_str(r#"{"profile":"A","desc":"d","exp":1,"techs":null}"#).unwrap();
        assert!(post.techs.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let post: Post = serde_json::from_str(
            r#"{"id":"66b1","profile":"A","desc":"d","exp":2,"techs":["x"],"_class":"Post"}"#,
        )
        .unwrap();
        assert_eq!(post.profile, "A");
        assert_eq!(post.techs, vec!["x".to_string()]);
    }
}
