use crate::config::DEFAULT_EMPTY_MESSAGE;
use crate::error::TrendError;
use crate::models::AnalysisResult;
use std::rc::Rc;
use yew::Reducible;

/// A trimmed, non-empty search prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which panel the widget shows. Exactly one is visible at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Error(String),
    Empty(String),
    Results(Rc<AnalysisResult>),
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    /// Maps a finished request onto the panel that should be shown for it.
    pub fn from_outcome(outcome: Result<AnalysisResult, TrendError>) -> Self {
        match outcome {
            Err(error) => Phase::Error(error.user_message()),
            Ok(result) if !result.success => {
                let message = result
                    .message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string());
                Phase::Empty(message)
            }
            Ok(result) => Phase::Results(Rc::new(result)),
        }
    }
}

pub enum WidgetAction {
    Submit {
        ticket: u64,
        query: Query,
    },
    Resolve {
        ticket: u64,
        outcome: Result<AnalysisResult, TrendError>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetState {
    pub latest_ticket: u64,
    pub query: Option<Query>,
    pub phase: Phase,
}

impl WidgetState {
    pub fn accepts(&self, ticket: u64) -> bool {
        ticket == self.latest_ticket && self.phase.is_loading()
    }

    /// Line shown above the panel naming the prompt it belongs to.
    pub fn query_caption(&self) -> Option<String> {
        let query = self.query.as_ref()?;
        match self.phase {
            Phase::Idle => None,
            Phase::Loading => Some(format!("Analyzing \"{}\"...", query.as_str())),
            _ => Some(format!("Results for \"{}\"", query.as_str())),
        }
    }
}

/// Hands out request tickets and remembers which one is still wanted.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn next_ticket(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// Retires every ticket handed out so far.
    pub fn cancel_all(&mut self) {
        self.latest += 1;
    }
}

impl Reducible for WidgetState {
    type Action = WidgetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            WidgetAction::Submit { ticket, query } => Rc::new(WidgetState {
                latest_ticket: ticket,
                query: Some(query),
                phase: Phase::Loading,
            }),
            WidgetAction::Resolve { ticket, outcome } => {
                if !self.accepts(ticket) {
                    log::debug!(
                        "Discarding response for request #{ticket}, latest is #{}",
                        self.latest_ticket
                    );
                    return self;
                }

                Rc::new(WidgetState {
                    latest_ticket: self.latest_ticket,
                    query: self.query.clone(),
                    phase: Phase::from_outcome(outcome),
                })
            }
        }
    }
}
