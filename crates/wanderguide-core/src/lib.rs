// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! WanderGuide conversation engine.
//!
//! Intent recognition lives in `wanderguide-nlu`; this crate adds the random
//! content sampler, reply synthesis, and the dialogue controller that owns a
//! conversation's message log and travel context.

pub mod config;
pub mod dialogue;
pub mod markup;
pub mod sampler;
pub mod synth;

pub use config::AssistantConfig;
pub use dialogue::{
    DialogueController, DialogueError, DialogueState, Message, PendingReply, Role,
    QUICK_SUGGESTIONS, WELCOME_TEXT,
};
pub use sampler::{next_departures, PoiSelection, RouteInfo, Sampler};
pub use synth::{respond, synthesize, Reply};
pub use wanderguide_nlu::{Intent, TravelContext};
