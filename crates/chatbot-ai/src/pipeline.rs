//! Turn pipeline: one user submission in, one `TurnOutcome` out.
//!
//! Order of work per turn:
//! 1. ignore input that is empty after trimming (no turn, no calls)
//! 2. append the user turn
//! 3. ask the model; on failure substitute `FIXED_APOLOGY` and mark the
//!    turn degraded
//! 4. run the video and course lookups concurrently; each failure yields
//!    an empty list and never touches the answer. Only the video list is
//!    capped by `max_results`.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::lookup::{LookupClient, LookupResult, DEFAULT_MAX_RESULTS};
use crate::session::Session;
use crate::{ModelClient, Turn};

/// Assistant text recorded when the model call fails.
pub const FIXED_APOLOGY: &str = "I'm sorry, but I'm having trouble processing your request.";

/// Which prior turns are sent to the model with each prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Every earlier turn of the session, oldest first.
    #[default]
    Replay,
    /// Nothing: each prompt starts a fresh exchange.
    Fresh,
}

/// What the presentation surface renders for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    pub assistant_text: String,
    /// The model call failed and `assistant_text` is the apology.
    pub degraded: bool,
    pub videos: Vec<LookupResult>,
    pub courses: Vec<LookupResult>,
}

pub struct TurnPipeline {
    model: Arc<dyn ModelClient>,
    videos: Option<Arc<dyn LookupClient>>,
    courses: Option<Arc<dyn LookupClient>>,
    history_mode: HistoryMode,
    max_results: usize,
}

impl TurnPipeline {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self {
            model,
            videos: None,
            courses: None,
            history_mode: HistoryMode::default(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_videos(mut self, client: Arc<dyn LookupClient>) -> Self {
        self.videos = Some(client);
        self
    }

    pub fn with_courses(mut self, client: Arc<dyn LookupClient>) -> Self {
        self.courses = Some(client);
        self
    }

    pub fn with_history_mode(mut self, mode: HistoryMode) -> Self {
        self.history_mode = mode;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn history_mode(&self) -> HistoryMode {
        self.history_mode
    }

    /// Handle one user submission against `session`.
    ///
    /// Returns `None`, leaving the session untouched, when `text` is empty
    /// after trimming.
    #[tracing::instrument(skip_all, fields(session = %session.id()))]
    pub async fn handle_user_input(&self, session: &mut Session, text: &str) -> Option<TurnOutcome> {
        let query = text.trim();
        if query.is_empty() {
            debug!("ignoring empty input");
            return None;
        }

        let prior = session.len();
        session.append_user(text);

        let history: &[Turn] = match self.history_mode {
            HistoryMode::Replay => &session.turns()[..prior],
            HistoryMode::Fresh => &[],
        };

        let (assistant_text, degraded, tokens) = match self.model.generate(text, history).await {
            Ok(generated) => (generated.text, false, generated.usage.total_tokens()),
            Err(e) => {
                warn!(error = %e, "model call failed, answering with apology");
                (FIXED_APOLOGY.to_string(), true, 0)
            }
        };
        session.append_assistant(assistant_text.clone());

        let (videos, courses) = tokio::join!(
            lookup(self.videos.as_deref(), query, self.max_results),
            lookup(self.courses.as_deref(), query, usize::MAX),
        );

        info!(
            turns = session.len(),
            degraded,
            tokens,
            videos = videos.len(),
            courses = courses.len(),
            "turn complete"
        );

        Some(TurnOutcome {
            assistant_text,
            degraded,
            videos,
            courses,
        })
    }
}

async fn lookup(
    client: Option<&dyn LookupClient>,
    query: &str,
    max_results: usize,
) -> Vec<LookupResult> {
    let Some(client) = client else {
        return Vec::new();
    };

    match client.search(query, max_results).await {
        Ok(results) => results,
        Err(e) => {
            warn!(lookup = client.name(), error = %e, "lookup failed, showing no results");
            Vec::new()
        }
    }
}
