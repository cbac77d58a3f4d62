// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::knowledge;
use crate::slots::extract_slots;
use crate::TravelContext;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// How a single-slot intent obtained its place name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotSource {
    /// Pulled out of a phrase by the slot extractor.
    Extracted,
    /// The whole turn was taken as a place name.
    BarePhrase,
}

/// The classified purpose of one user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Help,
    KnowledgeLookup { key: String },
    DistrictOverview,
    DurationFollowUp,
    BusFollowUp,
    RestaurantFollowUp,
    SafetyFollowUp,
    HoursFollowUp,
    ShoppingFollowUp,
    RouteRequest { from: String, to: String },
    OriginOnly { from: String, source: SlotSource },
    DestinationOnly { to: String, source: SlotSource },
    Fallback,
}

/// Input to a rule: the trimmed turn and its lowercase form.
struct Turn<'a> {
    raw: &'a str,
    lower: String,
}

type Matcher = fn(&Turn, &TravelContext) -> Option<Intent>;

struct Rule {
    name: &'static str,
    matcher: Matcher,
}

// Precedence ladder. Later rules are broader; in particular "slot extraction"
// splits on any " to " and must not run before the keyword rules.
static RULES: [Rule; 13] = [
    Rule { name: "greeting", matcher: match_greeting },
    Rule { name: "knowledge lookup", matcher: match_knowledge },
    Rule { name: "district overview", matcher: match_district },
    Rule { name: "help", matcher: match_help },
    Rule { name: "duration follow-up", matcher: match_duration },
    Rule { name: "bus follow-up", matcher: match_bus },
    Rule { name: "restaurant follow-up", matcher: match_restaurant },
    Rule { name: "safety", matcher: match_safety },
    Rule { name: "opening hours", matcher: match_hours },
    Rule { name: "shopping", matcher: match_shopping },
    Rule { name: "slot extraction", matcher: match_slots },
    Rule { name: "bare place name", matcher: match_bare_phrase },
    Rule { name: "fallback", matcher: match_fallback },
];

/// Ordered rule set mapping raw text plus the current context to one intent.
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn classify(text: &str, context: &TravelContext) -> Intent {
        Self::classify_with_rule(text, context).0
    }

    /// Returns the intent and the name of the rule that produced it.
    pub fn classify_with_rule(text: &str, context: &TravelContext) -> (Intent, &'static str) {
        let raw = text.trim();
        let turn = Turn {
            raw,
            lower: raw.to_lowercase(),
        };

        for rule in &RULES {
            if let Some(intent) = (rule.matcher)(&turn, context) {
                log::debug!("[Intent] '{}' -> {:?} (rule: {})", raw, intent, rule.name);
                return (intent, rule.name);
            }
        }
        // match_fallback always fires; kept for totality.
        (Intent::Fallback, "fallback")
    }

    /// Rule names in evaluation order.
    pub fn rule_names() -> impl Iterator<Item = &'static str> {
        RULES.iter().map(|r| r.name)
    }
}

pub fn classify(text: &str, context: &TravelContext) -> Intent {
    IntentClassifier::classify(text, context)
}

macro_rules! keyword_re {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).unwrap())
        }
    };
}

keyword_re!(
    greeting_re,
    r"^(hi|hello|hey|howdy|good\s+morning|good\s+afternoon|good\s+evening|yo)\b"
);
keyword_re!(
    district_re,
    r"dantewada.*district|about.*dantewada|what.*dantewada|tell.*dantewada|villages.*dantewada|cities.*dantewada|towns.*dantewada"
);
keyword_re!(help_re, r"\bhelp\b");
keyword_re!(duration_re, r"how long|travel time|duration|how much time");
keyword_re!(
    bus_re,
    r"which bus|what bus|bus number|bus route|bus schedule"
);
keyword_re!(
    restaurant_re,
    r"restaurant|food|eat|dining|cafe|lunch|dinner|breakfast"
);
keyword_re!(safety_re, r"safe|safety|secure|danger");
keyword_re!(hours_re, r"open|hours|what time|opening|close|closing");
keyword_re!(
    shopping_re,
    r"shop|market|buy|purchase|souvenir|mall|bazaar"
);

fn match_greeting(turn: &Turn, _: &TravelContext) -> Option<Intent> {
    greeting_re().is_match(&turn.lower).then_some(Intent::Greeting)
}

fn match_knowledge(turn: &Turn, _: &TravelContext) -> Option<Intent> {
    knowledge::guarded_lookup(&turn.lower).map(|entry| Intent::KnowledgeLookup {
        key: entry.key.to_string(),
    })
}

fn match_district(turn: &Turn, _: &TravelContext) -> Option<Intent> {
    district_re()
        .is_match(&turn.lower)
        .then_some(Intent::DistrictOverview)
}

fn match_help(turn: &Turn, _: &TravelContext) -> Option<Intent> {
    help_re().is_match(&turn.lower).then_some(Intent::Help)
}

fn match_duration(turn: &Turn, _: &TravelContext) -> Option<Intent> {
    duration_re()
        .is_match(&turn.lower)
        .then_some(Intent::DurationFollowUp)
}

fn match_bus(turn: &Turn, _: &TravelContext) -> Option<Intent> {
    bus_re().is_match(&turn.lower).then_some(Intent::BusFollowUp)
}

fn match_restaurant(turn: &Turn, _: &TravelContext) -> Option<Intent> {
    restaurant_re()
        .is_match(&turn.lower)
        .then_some(Intent::RestaurantFollowUp)
}

fn match_safety(turn: &Turn, _: &TravelContext) -> Option<Intent> {
    safety_re()
        .is_match(&turn.lower)
        .then_some(Intent::SafetyFollowUp)
}

fn match_hours(turn: &Turn, _: &TravelContext) -> Option<Intent> {
    hours_re().is_match(&turn.lower).then_some(Intent::HoursFollowUp)
}

fn match_shopping(turn: &Turn, _: &TravelContext) -> Option<Intent> {
    shopping_re()
        .is_match(&turn.lower)
        .then_some(Intent::ShoppingFollowUp)
}

fn match_slots(turn: &Turn, _: &TravelContext) -> Option<Intent> {
    let slots = extract_slots(turn.raw);
    match (slots.from, slots.to) {
        (Some(from), Some(to)) => Some(Intent::RouteRequest { from, to }),
        (None, Some(to)) => Some(Intent::DestinationOnly {
            to,
            source: SlotSource::Extracted,
        }),
        (Some(from), None) => Some(Intent::OriginOnly {
            from,
            source: SlotSource::Extracted,
        }),
        (None, None) => None,
    }
}

/// A short turn with no keywords is taken as a place name for whichever slot is still empty.
fn match_bare_phrase(turn: &Turn, context: &TravelContext) -> Option<Intent> {
    let len = turn.raw.chars().count();
    if len <= 2 || len >= 50 {
        return None;
    }
    if context.from.is_none() {
        Some(Intent::OriginOnly {
            from: turn.raw.to_string(),
            source: SlotSource::BarePhrase,
        })
    } else if context.to.is_none() {
        Some(Intent::DestinationOnly {
            to: turn.raw.to_string(),
            source: SlotSource::BarePhrase,
        })
    } else {
        None
    }
}

fn match_fallback(_: &Turn, _: &TravelContext) -> Option<Intent> {
    Some(Intent::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> TravelContext {
        TravelContext::default()
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = IntentClassifier::rule_names().collect();
        assert_eq!(names.first(), Some(&"greeting"));
        assert_eq!(names.last(), Some(&"fallback"));
        let slots = names.iter().position(|n| *n == "slot extraction").unwrap();
        let shopping = names.iter().position(|n| *n == "shopping").unwrap();
        assert!(shopping < slots);
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn test_greeting() {
        assert_eq!(classify("Hello there", &empty()), Intent::Greeting);
        assert_eq!(classify("good  morning!", &empty()), Intent::Greeting);
        // Must start with the token, as a whole word.
        assert_ne!(classify("history of barsur", &empty()), Intent::Greeting);
        assert_ne!(classify("say hello", &empty()), Intent::Greeting);
    }

    #[test]
    fn test_greeting_beats_knowledge() {
        assert_eq!(classify("hi, tell me about barsur", &empty()), Intent::Greeting);
    }

    #[test]
    fn test_knowledge_lookup() {
        assert_eq!(
            classify("Tell me about Danteshwari Temple", &empty()),
            Intent::KnowledgeLookup {
                key: "danteshwari temple".to_string()
            }
        );
    }

    #[test]
    fn test_knowledge_guard_routes_instead() {
        let (intent, rule) =
            IntentClassifier::classify_with_rule("How to get to Danteshwari Temple", &empty());
        assert_eq!(rule, "slot extraction");
        assert_eq!(
            intent,
            Intent::DestinationOnly {
                to: "Danteshwari Temple".to_string(),
                source: SlotSource::Extracted
            }
        );
    }

    #[test]
    fn test_district_overview() {
        // "towns" carries "to", which suppresses the dantewada fact card.
        let (intent, rule) =
            IntentClassifier::classify_with_rule("what towns are in dantewada", &empty());
        assert_eq!(intent, Intent::DistrictOverview);
        assert_eq!(rule, "district overview");
    }

    #[test]
    fn test_help() {
        assert_eq!(classify("help", &empty()), Intent::Help);
        assert_eq!(classify("can you HELP me", &empty()), Intent::Help);
        assert_ne!(classify("helpful", &empty()), Intent::Help);
    }

    #[test]
    fn test_follow_ups_ignore_context() {
        let full = TravelContext::route("Central Station", "Old Museum");
        for ctx in [empty(), full] {
            assert_eq!(
                classify("how long will it take", &ctx),
                Intent::DurationFollowUp
            );
            assert_eq!(classify("which bus should I take", &ctx), Intent::BusFollowUp);
            assert_eq!(
                classify("any good food nearby", &ctx),
                Intent::RestaurantFollowUp
            );
            assert_eq!(classify("is it safe at night", &ctx), Intent::SafetyFollowUp);
            assert_eq!(classify("when does it open", &ctx), Intent::HoursFollowUp);
            assert_eq!(
                classify("where can I buy souvenirs", &ctx),
                Intent::ShoppingFollowUp
            );
        }
    }

    #[test]
    fn test_duration_beats_route_extraction() {
        assert_eq!(
            classify("how long from Geedam to Barsur", &empty()),
            Intent::DurationFollowUp
        );
    }

    #[test]
    fn test_route_request() {
        assert_eq!(
            classify("From Central Station to Heritage Museum", &empty()),
            Intent::RouteRequest {
                from: "Central Station".to_string(),
                to: "Heritage Museum".to_string()
            }
        );
    }

    #[test]
    fn test_origin_only_from_phrase() {
        assert_eq!(
            classify("I'm starting from Jagdalpur", &empty()),
            Intent::OriginOnly {
                from: "Jagdalpur".to_string(),
                source: SlotSource::Extracted
            }
        );
    }

    #[test]
    fn test_bare_phrase_fills_origin_then_destination() {
        assert_eq!(
            classify("Museum", &empty()),
            Intent::OriginOnly {
                from: "Museum".to_string(),
                source: SlotSource::BarePhrase
            }
        );
        assert_eq!(
            classify("Museum", &empty().with_from("Park")),
            Intent::DestinationOnly {
                to: "Museum".to_string(),
                source: SlotSource::BarePhrase
            }
        );
    }

    #[test]
    fn test_bare_phrase_length_bounds() {
        // Two characters is too short, 50 too long.
        assert_eq!(classify("ab", &empty()), Intent::Fallback);
        assert_eq!(classify(&"x".repeat(50), &empty()), Intent::Fallback);
        assert!(matches!(
            classify("abc", &empty()),
            Intent::OriginOnly { .. }
        ));
        assert!(matches!(
            classify(&"x".repeat(49), &empty()),
            Intent::OriginOnly { .. }
        ));
    }

    #[test]
    fn test_bare_phrase_with_full_context_falls_back() {
        let full = TravelContext::route("Park", "Museum");
        assert_eq!(classify("Library", &full), Intent::Fallback);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Intent::RouteRequest {
            from: "A".to_string(),
            to: "B".to_string(),
        })
        .unwrap();
        assert_eq!(json["intent"], "route_request");
        assert_eq!(json["from"], "A");
    }
}
