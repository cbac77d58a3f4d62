// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Rule-based understanding layer for the WanderGuide travel assistant.
//!
//! Everything in this crate is a pure function of its input: no randomness,
//! no clock, no session state. Content generation lives in `wanderguide-core`.

use serde::{Deserialize, Serialize};

pub mod category;
pub mod intent;
pub mod knowledge;
pub mod slots;

pub use category::{advisory_for, category_of, PlaceCategory};
pub use intent::{classify, Intent, IntentClassifier, SlotSource};
pub use knowledge::KnowledgeEntry;
pub use slots::{extract_slots, SlotPair};

/// The session's last known route.
///
/// Never edited in place: every turn produces a replacement value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TravelContext {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl TravelContext {
    pub fn new(from: Option<String>, to: Option<String>) -> Self {
        Self { from, to }
    }

    pub fn route(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Both endpoints, when the route is complete.
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => Some((from.as_str(), to.as_str())),
            _ => None,
        }
    }

    pub fn with_from(&self, from: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: self.to.clone(),
        }
    }

    pub fn with_to(&self, to: impl Into<String>) -> Self {
        Self {
            from: self.from.clone(),
            to: Some(to.into()),
        }
    }

    /// Compact route label for a status line: `from → to`, or whichever half is known.
    pub fn indicator(&self) -> Option<String> {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => Some(format!("{} → {}", from, to)),
            (Some(from), None) => Some(from.clone()),
            (None, Some(to)) => Some(to.clone()),
            (None, None) => None,
        }
    }
}
