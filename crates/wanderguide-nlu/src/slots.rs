// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Origin and destination pulled out of a single turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPair {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl SlotPair {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Two-slot patterns, tried in order; the first match wins.
/// Index 3 is the permissive "A to B" split and must stay last.
fn route_patterns() -> &'static [Regex; 4] {
    static ROUTE_RES: OnceLock<[Regex; 4]> = OnceLock::new();
    ROUTE_RES.get_or_init(|| {
        [
            Regex::new(r"(?i)\bfrom\s+(.+?)\s+to\s+(.+)").unwrap(),
            Regex::new(r"(?i)\bat\s+(.+?)\s+(?:and\s+)?(?:want\s+to\s+go|going)\s+to\s+(.+)")
                .unwrap(),
            Regex::new(
                r"(?i)\bi(?:'m|\s+am)\s+(?:at|in)\s+(.+?)\s+(?:and\s+)?(?:want\s+to\s+go|going)\s+to\s+(.+)",
            )
            .unwrap(),
            Regex::new(r"(?i)(.+?)\s+to\s+(.+)").unwrap(),
        ]
    })
}

/// Pulls an (origin, destination) pair, or a single slot, out of raw text.
///
/// Matching is case-insensitive; captured text keeps the user's casing.
pub fn extract_slots(text: &str) -> SlotPair {
    let text = text.trim();

    for (idx, re) in route_patterns().iter().enumerate() {
        if let Some(caps) = re.captures(text) {
            let from = clean_capture(&caps[1]);
            let to = clean_capture(&caps[2]);
            log::debug!(
                "[Slots] route pattern #{} matched: from={:?} to={:?}",
                idx + 1,
                from,
                to
            );
            return refine_lead_in(SlotPair { from, to });
        }
    }

    // Single-slot fallbacks: "to X" at the start, or "from X" anywhere.
    static TO_RE: OnceLock<Regex> = OnceLock::new();
    let to_re = TO_RE.get_or_init(|| Regex::new(r"(?i)^to\s+(.+)").unwrap());
    if let Some(caps) = to_re.captures(text) {
        return SlotPair {
            from: None,
            to: clean_capture(&caps[1]),
        };
    }

    static FROM_RE: OnceLock<Regex> = OnceLock::new();
    let from_re = FROM_RE.get_or_init(|| Regex::new(r"(?i)\bfrom\s+(.+)").unwrap());
    if let Some(caps) = from_re.captures(text) {
        return SlotPair {
            from: clean_capture(&caps[1]),
            to: None,
        };
    }

    SlotPair::default()
}

/// Trims and drops trailing `.,!?` runs. Empty results count as absent.
fn clean_capture(raw: &str) -> Option<String> {
    let cleaned = raw
        .trim()
        .trim_end_matches(['.', ',', '!', '?'])
        .trim_end();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Conversational openers that the permissive "A to B" split captures as an origin.
/// e.g. "How to get to Barsur" yields origin "How", destination "get to Barsur".
/// Matched on whole trailing words, so "Can you tell me how" and
/// "Please show me the way" count as well.
fn is_lead_in(origin: &str) -> bool {
    const LEAD_INS: &[&str] = &[
        "how",
        "i want",
        "i wanna go",
        "i need",
        "i'd like",
        "i would like",
        "want",
        "need",
        "go",
        "take me",
        "help me get",
        "directions",
        "direction",
        "route",
        "the way",
        "best way",
        "which way",
    ];
    let lower = origin.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    if words.first() == Some(&"how") {
        return true;
    }
    LEAD_INS.iter().any(|lead| {
        let lead_words: Vec<&str> = lead.split_whitespace().collect();
        words.ends_with(&lead_words)
    })
}

/// Splits "Kirandul from Dantewada" into (destination, origin).
fn split_trailing_origin(dest: &str) -> Option<(String, String)> {
    static TRAILING_FROM_RE: OnceLock<Regex> = OnceLock::new();
    let re = TRAILING_FROM_RE.get_or_init(|| Regex::new(r"(?i)^(.+?)\s+from\s+(.+)").unwrap());
    let caps = re.captures(dest)?;
    Some((clean_capture(&caps[1])?, clean_capture(&caps[2])?))
}

fn refine_lead_in(pair: SlotPair) -> SlotPair {
    let Some(origin) = pair.from.as_deref() else {
        return pair;
    };
    if !is_lead_in(origin) {
        return pair;
    }

    let to = pair.to.as_deref().and_then(|dest| {
        let lower = dest.to_lowercase();
        let stripped = ["get to ", "go to ", "reach ", "get "]
            .iter()
            .find(|prefix| lower.starts_with(*prefix))
            .map(|prefix| dest[prefix.len()..].trim())
            .unwrap_or(dest);
        clean_capture(stripped)
    });

    if let Some((to, from)) = to.as_deref().and_then(split_trailing_origin) {
        log::debug!(
            "[Slots] origin '{}' is a lead-in, route is {} -> {}",
            origin,
            from,
            to
        );
        return SlotPair {
            from: Some(from),
            to: Some(to),
        };
    }

    log::debug!("[Slots] origin '{}' is a lead-in, keeping destination {:?}", origin, to);
    SlotPair { from: None, to }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(from: Option<&str>, to: Option<&str>) -> SlotPair {
        SlotPair {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        }
    }

    #[test]
    fn test_from_to() {
        assert_eq!(
            extract_slots("From Central Station to Heritage Museum"),
            pair(Some("Central Station"), Some("Heritage Museum"))
        );
    }

    #[test]
    fn test_at_going_to() {
        assert_eq!(
            extract_slots("I am at City Center and want to go to the Beach!"),
            pair(Some("City Center"), Some("the Beach"))
        );
        assert_eq!(
            extract_slots("we are at the hotel going to Grand Bazaar"),
            pair(Some("the hotel"), Some("Grand Bazaar"))
        );
    }

    #[test]
    fn test_im_in_going_to() {
        assert_eq!(
            extract_slots("I'm in Geedam and going to Barsur."),
            pair(Some("Geedam"), Some("Barsur"))
        );
    }

    #[test]
    fn test_generic_split() {
        assert_eq!(
            extract_slots("City Park to Grand Bazaar?!"),
            pair(Some("City Park"), Some("Grand Bazaar"))
        );
    }

    #[test]
    fn test_from_beats_generic_split() {
        // Pattern 1 takes the text after "from", not everything before " to ".
        assert_eq!(
            extract_slots("Bus from Geedam to Kirandul"),
            pair(Some("Geedam"), Some("Kirandul"))
        );
    }

    #[test]
    fn test_trailing_punctuation_stripped() {
        assert_eq!(
            extract_slots("from Geedam,, to Barsur?!."),
            pair(Some("Geedam"), Some("Barsur"))
        );
    }

    #[test]
    fn test_lead_in_origin_becomes_destination_only() {
        assert_eq!(
            extract_slots("How to get to Danteshwari Temple"),
            pair(None, Some("Danteshwari Temple"))
        );
        assert_eq!(
            extract_slots("I want to go to the beach"),
            pair(None, Some("the beach"))
        );
        assert_eq!(extract_slots("take me to Barsur"), pair(None, Some("Barsur")));
    }

    #[test]
    fn test_lead_in_matched_on_trailing_words() {
        assert_eq!(
            extract_slots("Can you tell me how to get to Barsur"),
            pair(None, Some("Barsur"))
        );
        assert_eq!(
            extract_slots("Please show me the way to Geedam"),
            pair(None, Some("Geedam"))
        );
        assert_eq!(
            extract_slots("could you please take me to Bacheli"),
            pair(None, Some("Bacheli"))
        );
    }

    #[test]
    fn test_lead_in_keeps_trailing_origin() {
        assert_eq!(
            extract_slots("How to reach Kirandul from Dantewada?"),
            pair(Some("Dantewada"), Some("Kirandul"))
        );
        assert_eq!(
            extract_slots("Take me to Barsur from Geedam"),
            pair(Some("Geedam"), Some("Barsur"))
        );
    }

    #[test]
    fn test_place_words_are_not_lead_ins() {
        // "way" only counts as part of a phrase, and never inside a word.
        assert_eq!(
            extract_slots("Harbour Way to Old Museum"),
            pair(Some("Harbour Way"), Some("Old Museum"))
        );
        assert_eq!(
            extract_slots("Highway Junction to Geedam"),
            pair(Some("Highway Junction"), Some("Geedam"))
        );
    }

    #[test]
    fn test_single_slots() {
        assert_eq!(extract_slots("to Old Museum."), pair(None, Some("Old Museum")));
        assert_eq!(
            extract_slots("I'm starting from Jagdalpur"),
            pair(Some("Jagdalpur"), None)
        );
    }

    #[test]
    fn test_punctuation_only_capture_is_absent() {
        assert_eq!(extract_slots("?? to Barsur"), pair(None, Some("Barsur")));
    }

    #[test]
    fn test_no_match() {
        assert!(extract_slots("Museum").is_empty());
        assert!(extract_slots("").is_empty());
        assert!(extract_slots("tomorrow maybe").is_empty());
    }
}
