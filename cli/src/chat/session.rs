//! # PsiGame Chat Session
//!
//! File: cli/src/chat/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A `ChatSession` is one instance of the chat widget: open/closed state, the
//! unread badge, the starter-suggestion flag, the follow-up signal and the
//! append-only transcript. It wraps a `Matcher` and reports everything it
//! appends to an injected `TranscriptSink`, so it can be driven and observed
//! without any presentation layer.
//!
//! ## Architecture
//!
//! Replies are produced asynchronously with a small artificial delay. Instead
//! of one timer per submission (which would let replies race each other), each
//! session owns a single worker task fed by an unbounded FIFO queue:
//!
//! 1. `submit` trims the text and, if non-empty, enqueues an exchange. It never
//!    waits on earlier exchanges.
//! 2. The worker takes exchanges one at a time: it appends the user message,
//!    sleeps `reply_delay`, asks the matcher, appends the bot message and, when
//!    the reply asks for it, sleeps `follow_up_delay` and raises the follow-up
//!    signal.
//! 3. Because a single task serializes the exchanges, the transcript always
//!    reads `[user:A, bot:A, user:B, bot:B]` however quickly A and B arrive.
//!
//! State shared between the handle and the worker sits behind a `Mutex`; the
//! lock is never held across an `.await` or while calling the sink.
//!
//! Sessions must be started from inside a tokio runtime.
//!
//! ## Examples
//!
//! ```rust
//! use psigame::chat::{ChatSession, Matcher, NullSink, SessionSettings, Submitted};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), psigame::chat::ChatError> {
//! let session = ChatSession::start(Matcher::builtin(), SessionSettings::instant(), NullSink);
//! session.open();
//! assert_eq!(session.submit("Quanto custa?")?, Submitted::Queued);
//! assert_eq!(session.submit("   ")?, Submitted::Ignored);
//! session.settle().await?;
//! assert_eq!(session.transcript().len(), 2);
//! # Ok(())
//! # }
//! ```
//!
use super::matcher::Matcher;
use super::message::{ChatMessage, Sender};
use super::ChatError;
use crate::core::config::ChatConfig;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Timing and suggestion content for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Pause between a user message and the bot reply.
    pub reply_delay: Duration,
    /// Pause between a bot reply and the follow-up signal.
    pub follow_up_delay: Duration,
    /// Questions offered before the first submission.
    pub starter_suggestions: Vec<String>,
    /// Questions offered after replies that suggest a follow-up.
    pub follow_up_suggestions: Vec<String>,
}

impl SessionSettings {
    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            reply_delay: Duration::from_millis(config.reply_delay_ms),
            follow_up_delay: Duration::from_millis(config.follow_up_delay_ms),
            starter_suggestions: config.starter_suggestions.clone(),
            follow_up_suggestions: config.follow_up_suggestions.clone(),
        }
    }

    /// Default content with both delays set to zero.
    pub fn instant() -> Self {
        Self::default().without_delays()
    }

    pub fn without_delays(mut self) -> Self {
        self.reply_delay = Duration::ZERO;
        self.follow_up_delay = Duration::ZERO;
        self
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}

/// Something the session reports to its sink, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A message was appended to the transcript.
    Message(ChatMessage),
    /// Follow-up suggestions should now be shown.
    FollowUpSuggestions(Vec<String>),
}

/// # Transcript Sink (`TranscriptSink`)
///
/// The output boundary of a session. The worker task owns the sink and calls
/// `deliver` once per event, in transcript order.
pub trait TranscriptSink: Send + 'static {
    fn deliver(&mut self, event: SessionEvent);
}

impl TranscriptSink for mpsc::UnboundedSender<SessionEvent> {
    fn deliver(&mut self, event: SessionEvent) {
        if self.send(event).is_err() {
            debug!("Transcript receiver dropped; event discarded.");
        }
    }
}

/// A sink that ignores every event. Useful when the caller only polls
/// `ChatSession::transcript`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TranscriptSink for NullSink {
    fn deliver(&mut self, _event: SessionEvent) {}
}

/// Outcome of `ChatSession::submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// The text was blank after trimming; nothing happened.
    Ignored,
    /// The exchange is queued and will be answered in submission order.
    Queued,
}

enum Job {
    Exchange(String),
    Settle(oneshot::Sender<()>),
}

#[derive(Debug)]
struct SessionState {
    is_open: bool,
    unread: bool,
    starters_hidden: bool,
    suggestions_visible: bool,
    transcript: Vec<ChatMessage>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            is_open: false,
            unread: true,
            starters_hidden: false,
            suggestions_visible: false,
            transcript: Vec::new(),
        }
    }

    fn append(&mut self, sender: Sender, text: &str) -> ChatMessage {
        let message = ChatMessage::new(self.transcript.len(), sender, text);
        self.transcript.push(message.clone());
        message
    }
}

type SharedState = Arc<Mutex<SessionState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, SessionState> {
    // The worker never panics while holding the lock, so a poisoned state is
    // still consistent.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Chat Session (`ChatSession`)
///
/// Handle to one chat widget instance. See the module documentation for the
/// queueing model.
#[derive(Debug)]
pub struct ChatSession {
    state: SharedState,
    jobs: mpsc::UnboundedSender<Job>,
    worker: JoinHandle<()>,
    starter_suggestions: Vec<String>,
}

impl ChatSession {
    /// # Start Session (`start`)
    ///
    /// Creates a closed session with an empty transcript and the unread badge
    /// set, and spawns its worker task on the current tokio runtime.
    ///
    /// ## Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(matcher: Matcher, settings: SessionSettings, sink: impl TranscriptSink) -> Self {
        let state: SharedState = Arc::new(Mutex::new(SessionState::new()));
        let (jobs, queue) = mpsc::unbounded_channel();
        let starter_suggestions = settings.starter_suggestions.clone();
        let worker = tokio::spawn(run_worker(
            queue,
            Arc::clone(&state),
            matcher,
            settings,
            sink,
        ));
        info!("Chat session started.");
        Self {
            state,
            jobs,
            worker,
            starter_suggestions,
        }
    }

    /// Opens the widget and clears the unread badge. Idempotent.
    pub fn open(&self) {
        let mut state = lock(&self.state);
        state.is_open = true;
        state.unread = false;
        debug!("Chat widget opened.");
    }

    /// Closes the widget. Idempotent.
    pub fn close(&self) {
        lock(&self.state).is_open = false;
        debug!("Chat widget closed.");
    }

    /// Flips between open and closed; returns the new open state.
    pub fn toggle(&self) -> bool {
        let mut state = lock(&self.state);
        state.is_open = !state.is_open;
        if state.is_open {
            state.unread = false;
        }
        debug!("Chat widget toggled (open: {}).", state.is_open);
        state.is_open
    }

    /// # Submit Message (`submit`)
    ///
    /// Trims `text`. Blank input is ignored: no message is appended and the
    /// matcher is never consulted. Anything else hides the starter suggestions
    /// for good and queues an exchange, returning immediately.
    ///
    /// Submitting works whether the widget is open or closed.
    ///
    /// The user message is appended by the worker when its turn comes, not
    /// here. While earlier exchanges are still pending (reply and follow-up
    /// delays included), `transcript()` does not show it yet; `settle` waits
    /// for it.
    ///
    /// ## Errors
    ///
    /// `ChatError::SessionTerminated` if the worker task is gone.
    pub fn submit(&self, text: &str) -> Result<Submitted, ChatError> {
        if self.jobs.is_closed() {
            return Err(ChatError::SessionTerminated);
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring blank submission.");
            return Ok(Submitted::Ignored);
        }
        self.jobs
            .send(Job::Exchange(trimmed.to_string()))
            .map_err(|_| ChatError::SessionTerminated)?;
        lock(&self.state).starters_hidden = true;
        debug!("Queued exchange for {:?}.", trimmed);
        Ok(Submitted::Queued)
    }

    /// Resolves once every exchange queued before this call has been
    /// answered, follow-up signal included.
    pub async fn settle(&self) -> Result<(), ChatError> {
        let (done, wait) = oneshot::channel();
        self.jobs
            .send(Job::Settle(done))
            .map_err(|_| ChatError::SessionTerminated)?;
        wait.await.map_err(|_| ChatError::SessionTerminated)
    }

    /// Tears the session down after answering everything already queued.
    pub async fn shutdown(self) -> Result<(), ChatError> {
        let ChatSession { jobs, worker, .. } = self;
        drop(jobs);
        worker.await.map_err(|e| {
            warn!("Chat session worker ended abnormally: {}", e);
            ChatError::SessionTerminated
        })?;
        info!("Chat session shut down.");
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        lock(&self.state).is_open
    }

    /// True until the widget is opened for the first time.
    pub fn has_unread(&self) -> bool {
        lock(&self.state).unread
    }

    /// True once anything has been submitted; never reset.
    pub fn starters_hidden(&self) -> bool {
        lock(&self.state).starters_hidden
    }

    /// True between a follow-up signal and the next user message.
    pub fn suggestions_visible(&self) -> bool {
        lock(&self.state).suggestions_visible
    }

    /// Starter questions to offer, or none once they have been hidden.
    pub fn starter_suggestions(&self) -> &[String] {
        if self.starters_hidden() {
            &[]
        } else {
            &self.starter_suggestions
        }
    }

    /// A snapshot of the transcript in append order.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        lock(&self.state).transcript.clone()
    }
}

async fn run_worker(
    mut queue: mpsc::UnboundedReceiver<Job>,
    state: SharedState,
    matcher: Matcher,
    settings: SessionSettings,
    mut sink: impl TranscriptSink,
) {
    while let Some(job) = queue.recv().await {
        match job {
            Job::Exchange(text) => {
                answer(&text, &state, &matcher, &settings, &mut sink).await;
            }
            Job::Settle(done) => {
                // The waiter may have given up; nothing to do then.
                let _ = done.send(());
            }
        }
    }
    debug!("Chat session queue closed; worker exiting.");
}

async fn answer(
    text: &str,
    state: &SharedState,
    matcher: &Matcher,
    settings: &SessionSettings,
    sink: &mut impl TranscriptSink,
) {
    let user_message = {
        let mut state = lock(state);
        state.suggestions_visible = false;
        state.append(Sender::User, text)
    };
    sink.deliver(SessionEvent::Message(user_message));

    pause(settings.reply_delay).await;

    let reply = matcher.respond(&text.to_lowercase());
    debug!("Answering with topic '{}'.", reply.topic);
    let bot_message = lock(state).append(Sender::Bot, reply.text);
    sink.deliver(SessionEvent::Message(bot_message));

    if reply.suggests_follow_up {
        pause(settings.follow_up_delay).await;
        lock(state).suggestions_visible = true;
        sink.deliver(SessionEvent::FollowUpSuggestions(
            settings.follow_up_suggestions.clone(),
        ));
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
