//! Form text to `Post` coercion.
//!
//! The form holds four raw strings. Turning them into a `Post` is a set of
//! pure functions: `parse_exp` for the experience number, `split_techs` for
//! the comma list, and `PostDraft::to_post` for trimming and the required
//! field check.

use crate::error::{PostsError, Result};
use crate::types::Post;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Profile and description are required";

/// Raw, not-yet-submitted form text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub profile: String,
    pub desc: String,
    pub exp: String,
    pub techs: String,
}

impl PostDraft {
    /// Build the post to submit, or a validation error when the trimmed
    /// profile or description is empty.
    pub fn to_post(&self) -> Result<Post> {
        let post = Post {
            profile: self.profile.trim().to_string(),
            desc: self.desc.trim().to_string(),
            exp: parse_exp(&self.exp),
            techs: split_techs(&self.techs),
        };
        if post.profile.is_empty() || post.desc.is_empty() {
            return Err(PostsError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        Ok(post)
    }
}

/// Leading-integer parse of the experience field.
///
/// Leading whitespace and a `+` sign are accepted and parsing stops at the
/// first non-digit, so `"3.5"` is 3 and `"7 years"` is 7. Anything without
/// leading digits, negative values, and overflow give 0.
pub fn parse_exp(raw: &str) -> u32 {
    let s = raw.trim_start();
    let digits = match s.strip_prefix('-') {
        Some(_) => return 0,
        None => s.strip_prefix('+').unwrap_or(s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().unwrap_or(0)
}

/// Split on commas, trim each token, drop empty ones.
pub fn split_techs(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
