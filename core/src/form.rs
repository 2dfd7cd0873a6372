//! Post creation form.
//!
//! Holds the draft text, validates and submits it, and reports a successful
//! create to the page as `FormEvent::Created`. The success notice stays up
//! for `SUCCESS_WINDOW` and is cleared by `tick`.

use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::client::PostsClient;
use crate::dispatch::{Origin, Outgoing, Sequencer, Ticket};
use crate::draft::PostDraft;
use crate::error::{ApiError, PostsError};
use crate::http::HttpResponse;
use crate::types::Post;

pub const CREATE_FALLBACK_MESSAGE: &str = "Failed to create post. Check your backend connection.";
pub const SUCCESS_MESSAGE: &str = "Post created successfully!";
pub const SUCCESS_WINDOW: Duration = Duration::from_secs(3);

/// One of the four editable draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Profile,
    Desc,
    Exp,
    Techs,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Profile, Field::Desc, Field::Exp, Field::Techs];

    pub fn name(self) -> &'static str {
        match self {
            Field::Profile => "profile",
            Field::Desc => "desc",
            Field::Exp => "exp",
            Field::Techs => "techs",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "profile" => Ok(Field::Profile),
            "desc" | "description" => Ok(Field::Desc),
            "exp" | "experience" => Ok(Field::Exp),
            "techs" | "tech" => Ok(Field::Techs),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The backend accepted the post. Carries its response body.
    Created(Post),
}

#[derive(Debug)]
pub struct DraftForm {
    draft: PostDraft,
    error: Option<String>,
    success_until: Option<Instant>,
    seq: Sequencer,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftForm {
    pub fn new() -> Self {
        Self {
            draft: PostDraft::default(),
            error: None,
            success_until: None,
            seq: Sequencer::new(Origin::Create),
        }
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Profile => self.draft.profile = value,
            Field::Desc => self.draft.desc = value,
            Field::Exp => self.draft.exp = value,
            Field::Techs => self.draft.techs = value,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Profile => &self.draft.profile,
            Field::Desc => &self.draft.desc,
            Field::Exp => &self.draft.exp,
            Field::Techs => &self.draft.techs,
        }
    }

    pub fn submitting(&self) -> bool {
        self.seq.in_flight()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn just_succeeded(&self) -> bool {
        self.success_until.is_some()
    }

    /// Validate the draft and build the create request.
    ///
    /// Returns `None` when validation fails; the message is then in
    /// `error_message` and nothing goes out.
    pub fn submit(&mut self, client: &PostsClient) -> Option<Outgoing> {
        self.error = None;
        self.success_until = None;

        let request = self
            .draft
            .to_post()
            .and_then(|post| client.build_create_post(&post));
        match request {
            Ok(request) => {
                tracing::debug!(path = %request.path, "submitting post");
                Some(self.seq.issue(request))
            }
            Err(err) => {
                tracing::warn!(error = %err, "post not submitted");
                self.error = Some(message_or_fallback(&err));
                None
            }
        }
    }

    /// Apply the outcome of a create request.
    pub fn complete(
        &mut self,
        client: &PostsClient,
        ticket: Ticket,
        result: Result<HttpResponse, ApiError>,
        now: Instant,
    ) -> Option<FormEvent> {
        if !self.seq.accept(ticket) {
            return None;
        }
        let outcome = result
            .map_err(PostsError::CreateFailed)
            .and_then(|response| client.parse_create_post(response));
        match outcome {
            Ok(created) => {
                self.draft = PostDraft::default();
                self.success_until = Some(now + SUCCESS_WINDOW);
                Some(FormEvent::Created(created))
            }
            Err(err) => {
                tracing::error!(error = %err, "error creating post");
                self.error = Some(message_or_fallback(&err));
                None
            }
        }
    }

    /// Expire the success notice. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.success_until {
            Some(until) if now >= until => {
                self.success_until = None;
                true
            }
            _ => false,
        }
    }
}

fn message_or_fallback(err: &PostsError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        CREATE_FALLBACK_MESSAGE.to_string()
    } else {
        message
    }
}
