// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Conversation state: the message log, the travel context, and the
//! delayed bot reply for each submitted user message.

use crate::config::AssistantConfig;
use crate::sampler::Sampler;
use crate::synth::respond;
use chrono::{DateTime, Local, NaiveTime};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use wanderguide_nlu::TravelContext;

pub const WELCOME_ID: &str = "welcome";

pub const WELCOME_TEXT: &str = "Hello! 👋 I'm your **WanderGuide AI** for **Dantewada District**, Chhattisgarh.

I can help you:
• Find cities, towns and villages in Dantewada district
• Get directions to temples, waterfalls, and landmarks
• Discover local restaurants and stay options
• Plan your route with bus timings

Try asking:
• *\"Tell me about Danteshwari Temple\"*
• *\"How to reach Kirandul from Dantewada?\"*
• *\"Villages in Dantewada district\"*";

pub const QUICK_SUGGESTIONS: [&str; 4] = [
    "How to reach Danteshwari Temple?",
    "Villages near Dantewada",
    "Restaurants in Dantewada",
    "Help",
];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueError {
    #[error("Message is empty")]
    EmptyInput,
    #[error("A reply is still being prepared")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    pub fn welcome() -> Self {
        Self {
            id: WELCOME_ID.to_string(),
            ..Self::new(Role::Bot, WELCOME_TEXT)
        }
    }

    pub fn is_welcome(&self) -> bool {
        self.id == WELCOME_ID
    }

    /// Local wall-clock time as `HH:MM`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueState {
    Idle,
    AwaitingResponse,
}

type Clock = Arc<dyn Fn() -> NaiveTime + Send + Sync>;

struct Session {
    log: Vec<Message>,
    context: TravelContext,
    state: DialogueState,
    /// Cancelled by `clear`; every pending reply holds a clone.
    generation: CancellationToken,
    sampler: Sampler<Box<dyn RngCore + Send>>,
}

/// Handle to a bot reply that is still being "typed".
///
/// Dropping it does not cancel the reply; it is still appended to the log.
#[derive(Debug)]
pub struct PendingReply {
    handle: JoinHandle<Option<Message>>,
}

impl PendingReply {
    /// The appended bot message, or `None` if the conversation was cleared first.
    pub async fn wait(self) -> Option<Message> {
        match self.handle.await {
            Ok(message) => message,
            Err(e) => {
                log::error!("[Dialogue] Reply task failed: {}", e);
                None
            }
        }
    }
}

/// Owns one conversation. Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct DialogueController {
    session: Arc<Mutex<Session>>,
    typing_delay: RangeInclusive<u64>,
    clock: Clock,
}

impl DialogueController {
    pub fn new(config: &AssistantConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &AssistantConfig, rng: impl RngCore + Send + 'static) -> Self {
        let rng: Box<dyn RngCore + Send> = Box::new(rng);
        let session = Session {
            log: vec![Message::welcome()],
            context: TravelContext::default(),
            state: DialogueState::Idle,
            generation: CancellationToken::new(),
            sampler: Sampler::new(rng),
        };
        Self {
            session: Arc::new(Mutex::new(session)),
            typing_delay: config.typing_delay(),
            clock: Arc::new(|| Local::now().time()),
        }
    }

    /// Replaces the wall clock used for bus departure times.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveTime + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Appends the user message and schedules the bot reply after the typing delay.
    pub async fn submit(&self, text: &str) -> Result<PendingReply, DialogueError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DialogueError::EmptyInput);
        }

        let mut session = self.session.lock().await;
        if session.state == DialogueState::AwaitingResponse {
            return Err(DialogueError::Busy);
        }

        session.log.push(Message::new(Role::User, text));
        session.state = DialogueState::AwaitingResponse;
        let token = session.generation.clone();
        let delay = session.sampler.typing_delay(self.typing_delay.clone());
        drop(session);

        log::debug!("[Dialogue] Replying to '{}' in {:?}", text, delay);
        let handle = tokio::spawn(Self::reply_after(
            Arc::clone(&self.session),
            text.to_string(),
            token,
            delay,
            Arc::clone(&self.clock),
        ));
        Ok(PendingReply { handle })
    }

    /// Submits and waits for the reply.
    pub async fn send(&self, text: &str) -> Result<Option<Message>, DialogueError> {
        Ok(self.submit(text).await?.wait().await)
    }

    async fn reply_after(
        session: Arc<Mutex<Session>>,
        text: String,
        token: CancellationToken,
        delay: Duration,
        clock: Clock,
    ) -> Option<Message> {
        tokio::select! {
            _ = token.cancelled() => {
                log::info!("[Dialogue] Pending reply dropped by clear");
                return None;
            }
            _ = tokio::time::sleep(delay) => {}
        }

        let mut session = session.lock().await;
        // `clear` may have won the lock while we were waking up.
        if token.is_cancelled() {
            log::info!("[Dialogue] Pending reply dropped by clear");
            return None;
        }

        let context = session.context.clone();
        let reply = respond(&text, &context, &mut session.sampler, clock());
        let message = Message::new(Role::Bot, reply.text);
        if reply.context != context {
            log::debug!("[Dialogue] Context now {:?}", reply.context);
        }
        session.context = reply.context;
        session.log.push(message.clone());
        session.state = DialogueState::Idle;
        Some(message)
    }

    /// Resets to a fresh welcome message and empty context. Any pending reply is discarded.
    pub async fn clear(&self) {
        let mut session = self.session.lock().await;
        session.generation.cancel();
        session.generation = CancellationToken::new();
        session.log = vec![Message::welcome()];
        session.context = TravelContext::default();
        session.state = DialogueState::Idle;
        log::debug!("[Dialogue] Conversation cleared");
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.session.lock().await.log.clone()
    }

    pub async fn context(&self) -> TravelContext {
        self.session.lock().await.context.clone()
    }

    pub async fn state(&self) -> DialogueState {
        self.session.lock().await.state
    }
}
