// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Response synthesis: turns a classified [`Intent`] into reply text and the
//! travel context to carry into the next turn.

use crate::sampler::{PoiSelection, RouteInfo, Sampler};
use chrono::NaiveTime;
use rand::Rng;
use serde::Serialize;
use wanderguide_nlu::knowledge::{self, DISTRICT_OVERVIEW};
use wanderguide_nlu::{advisory_for, classify, Intent, SlotSource, TravelContext};

pub const GREETING: &str = "Hello! 👋 Welcome to **WanderGuide AI** — your personal travel assistant!

I can help you:
• Get step-by-step directions to any destination
• Find the right bus and departure times
• Discover restaurants, shops & markets along the way
• Learn about your destination

Just tell me where you are and where you'd like to go.
For example: *\"I am at City Center and want to go to the Beach\"*";

pub const HELP: &str = "🤖 **How to use WanderGuide AI**

Tell me your starting point and destination in any of these ways:
• *\"From Central Station to Heritage Museum\"*
• *\"I'm at the hotel and want to go to the beach\"*
• *\"City Park to Grand Bazaar\"*

I'll give you:
✅ Step-by-step bus directions
✅ Live departure times
✅ Restaurants & shops on the route
✅ Washrooms & markets
✅ What to expect at your destination";

pub const SAFETY_TIPS: &str = "🛡️ **Safety Tips for Tourists**

• Keep your belongings secure in crowded areas
• Use official taxi services or rideshare apps
• Keep a copy of your ID separate from the original
• Stay on well-lit streets at night
• Share your itinerary with someone you trust
• Save the local emergency number: 112 (international standard)
• Visit the local tourist information centre for area-specific advice";

pub const FALLBACK: &str = "I'd love to help you navigate! 🗺️

Please tell me:
• Where you **currently are** (starting point)
• Where you **want to go** (destination)

Example: *\"I'm at Central Station and want to go to the Old Museum\"*";

const DURATION_NEEDS_ROUTE: &str = "To estimate travel time, I'll need your starting point and destination. Please tell me where you are and where you're headed!";

const BUS_NEEDS_ROUTE: &str =
    "Please share your starting location and destination so I can find the right bus for you!";

/// Text plus the context that replaces the caller's context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub context: TravelContext,
}

impl Reply {
    fn keep(text: impl Into<String>, context: &TravelContext) -> Self {
        Self {
            text: text.into(),
            context: context.clone(),
        }
    }
}

/// Classifies `text` against `context` and synthesizes the answer in one step.
pub fn respond<R: Rng>(
    text: &str,
    context: &TravelContext,
    sampler: &mut Sampler<R>,
    now: NaiveTime,
) -> Reply {
    let intent = classify(text, context);
    synthesize(&intent, context, sampler, now)
}

pub fn synthesize<R: Rng>(
    intent: &Intent,
    context: &TravelContext,
    sampler: &mut Sampler<R>,
    now: NaiveTime,
) -> Reply {
    match intent {
        Intent::Greeting => Reply::keep(GREETING, context),
        Intent::Help => Reply::keep(HELP, context),
        Intent::KnowledgeLookup { key } => match knowledge::get(key) {
            Some(entry) => Reply::keep(entry.text, context),
            None => {
                log::warn!("[Synth] no knowledge entry for key '{}'", key);
                Reply::keep(FALLBACK, context)
            }
        },
        Intent::DistrictOverview => Reply::keep(DISTRICT_OVERVIEW, context),
        Intent::DurationFollowUp => match context.endpoints() {
            Some((from, to)) => {
                let mins = sampler.duration_estimate();
                Reply::keep(
                    format!(
                        "⏱️ The journey from **{}** to **{}** takes approximately **{} minutes** in total, including walking time to the bus stop and from the drop-off point.",
                        from, to, mins
                    ),
                    context,
                )
            }
            None => Reply::keep(DURATION_NEEDS_ROUTE, context),
        },
        Intent::BusFollowUp => match context.endpoints() {
            Some((from, to)) => {
                let number = sampler.bus_number();
                let departures = crate::sampler::next_departures(now).join(", ");
                Reply::keep(
                    format!(
                        "🚌 **Bus {}** runs between **{}** and **{}**.\n\
                         Next departures: **{}**\n\
                         Frequency: Every 30 minutes.\n\
                         Tip: Validate your ticket before boarding.",
                        number, from, to, departures
                    ),
                    context,
                )
            }
            None => Reply::keep(BUS_NEEDS_ROUTE, context),
        },
        Intent::RestaurantFollowUp => {
            let set = sampler.restaurants();
            let area = context.to.as_deref().unwrap_or("the area");
            Reply::keep(
                format!(
                    "🍽️ **Restaurants near {}**:\n\
                     • {} — local favourites, open 11 AM – 10 PM\n\
                     • {} — great for a quick bite, outdoor seating available\n\
                     • {} — popular with tourists, set menus available\n\n\
                     Most open until late evening. Reservations recommended on weekends!",
                    area, set[0], set[1], set[2]
                ),
                context,
            )
        }
        Intent::SafetyFollowUp => Reply::keep(SAFETY_TIPS, context),
        Intent::HoursFollowUp => {
            let dest = context.to.as_deref();
            Reply::keep(
                format!(
                    "🕐 **General opening hours for {}**:\n{}\n\n\
                     For the most accurate timings, I recommend checking the official website or calling ahead — especially on public holidays!",
                    dest.unwrap_or("most tourist attractions"),
                    advisory_for(dest.unwrap_or_default())
                ),
                context,
            )
        }
        Intent::ShoppingFollowUp => {
            let shops = sampler.shops();
            let markets = sampler.markets();
            Reply::keep(
                format!(
                    "🛍️ **Shops & Markets nearby**:\n\n\
                     Shops:\n• {}\n• {}\n• {}\n\n\
                     Markets:\n\
                     • {} — open mornings, great for local produce\n\
                     • {} — evening market, handmade crafts & souvenirs\n\n\
                     Tip: Bargaining is welcomed at the market stalls!",
                    shops[0], shops[1], shops[2], markets[0], markets[1]
                ),
                context,
            )
        }
        Intent::RouteRequest { from, to } => full_route(from, to, sampler, now),
        Intent::DestinationOnly { to, .. } => match context.from.as_deref() {
            Some(from) => full_route(from, to, sampler, now),
            None => Reply {
                text: format!(
                    "Got it — you want to visit **{}**! 📍\n\n\
                     Where are you starting from? Just tell me your current location or landmark and I'll map out the full route for you.",
                    to
                ),
                context: context.with_to(to.as_str()),
            },
        },
        Intent::OriginOnly { from, source } => match context.to.as_deref() {
            Some(to) => full_route(from, to, sampler, now),
            None => {
                let text = match source {
                    SlotSource::Extracted => format!(
                        "Got it — you're starting from **{}**. 🚩\n\n\
                         Where would you like to go? Tell me your destination and I'll plan the route!",
                        from
                    ),
                    SlotSource::BarePhrase => format!(
                        "I'll note that as your starting point: **{}**.\n\n\
                         Now where would you like to go? Tell me your destination!",
                        from
                    ),
                };
                Reply {
                    text,
                    context: context.with_from(from.as_str()),
                }
            }
        },
        Intent::Fallback => Reply::keep(FALLBACK, context),
    }
}

fn full_route<R: Rng>(from: &str, to: &str, sampler: &mut Sampler<R>, now: NaiveTime) -> Reply {
    let info = sampler.bus_route(from, to, now);
    let pois = sampler.pois();
    let washroom_shop = sampler.pick(pois.shops);
    log::debug!(
        "[Synth] route {} -> {}: bus {} via {}, {} min",
        from,
        to,
        info.bus_number,
        info.transit_hub,
        info.total_minutes
    );
    Reply {
        text: route_message(&info, &pois, washroom_shop),
        context: TravelContext::route(from, to),
    }
}

fn bullets(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the full directions message for one journey.
pub fn route_message(info: &RouteInfo, pois: &PoiSelection, washroom_shop: &str) -> String {
    let from = &info.from;
    let to = &info.to;
    format!(
        "Great! Here's how to get from **{from}** to **{to}**:

🗺️ DIRECTIONS
1. Start from {from} heading towards the main road
2. Walk ~{walk_to} minutes to the nearest bus stop
3. Board **Bus {bus}** towards {hub}
   ↳ Runs every 30 minutes
   ↳ Next departures: {departures}
4. Ride for ~{stops} stops (about {ride} min)
5. Alight at \"{to} Stop\" and walk ~{walk_from} min to your destination

⏱️ TOTAL TRAVEL TIME: ~{total} minutes

🍽️ RESTAURANTS ON THE WAY
{restaurants}

🛍️ SHOPS NEARBY
{shops}

🚻 WASHROOMS
• Main bus terminal at {hub}
• At the entrance of {to}
• {washroom_shop} shopping area

🛒 MARKETS
{markets}

📌 AT YOUR DESTINATION ({to})
{advisory}

Safe travels! 🌍 Ask me anything else about your trip.",
        walk_to = info.walk_to_stop,
        bus = info.bus_number,
        hub = info.transit_hub,
        departures = info.departures_label(),
        stops = info.ride_stops,
        ride = info.ride_minutes,
        walk_from = info.walk_from_stop,
        total = info.total_minutes,
        restaurants = bullets(pois.restaurants),
        shops = bullets(pois.shops),
        markets = bullets(pois.markets),
        advisory = advisory_for(to),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 5, 0).unwrap()
    }

    fn zero_sampler() -> Sampler<StepRng> {
        Sampler::new(StepRng::new(0, 0))
    }

    #[test]
    fn test_route_message_sections() {
        let mut sampler = zero_sampler();
        let reply = synthesize(
            &Intent::RouteRequest {
                from: "City Park".into(),
                to: "Old Museum".into(),
            },
            &TravelContext::default(),
            &mut sampler,
            noon(),
        );

        assert_eq!(reply.context, TravelContext::route("City Park", "Old Museum"));
        let text = &reply.text;
        assert!(text.starts_with("Great! Here's how to get from **City Park** to **Old Museum**:"));
        assert!(text.contains("Board **Bus 10** towards Central Station"));
        assert!(text.contains("Next departures: 12:30 PM, 1:00 PM, 1:30 PM"));
        assert!(text.contains("Ride for ~3 stops (about 9 min)"));
        assert!(text.contains("TOTAL TRAVEL TIME: ~14 minutes"));
        assert!(text.contains("• The Golden Spoon\n• Saffron Garden\n• Harbour Bites"));
        assert!(text.contains("• Heritage Craft Store shopping area"));
        assert!(text.contains("📌 AT YOUR DESTINATION (Old Museum)"));
        assert!(text.contains(advisory_for("Old Museum")));
        assert!(text.ends_with("Safe travels! 🌍 Ask me anything else about your trip."));
    }

    #[test]
    fn test_follow_ups_keep_context() {
        let ctx = TravelContext::route("Park", "Museum");
        let mut sampler = Sampler::new(StdRng::seed_from_u64(1));
        for intent in [
            Intent::Greeting,
            Intent::Help,
            Intent::DistrictOverview,
            Intent::DurationFollowUp,
            Intent::BusFollowUp,
            Intent::RestaurantFollowUp,
            Intent::SafetyFollowUp,
            Intent::HoursFollowUp,
            Intent::ShoppingFollowUp,
            Intent::Fallback,
        ] {
            let reply = synthesize(&intent, &ctx, &mut sampler, noon());
            assert_eq!(reply.context, ctx, "{:?} must not touch the context", intent);
            assert!(!reply.text.is_empty());
        }
    }

    #[test]
    fn test_duration_needs_both_endpoints() {
        let mut sampler = zero_sampler();
        let reply = synthesize(
            &Intent::DurationFollowUp,
            &TravelContext::default().with_to("Museum"),
            &mut sampler,
            noon(),
        );
        assert_eq!(reply.text, DURATION_NEEDS_ROUTE);

        let reply = synthesize(
            &Intent::DurationFollowUp,
            &TravelContext::route("Park", "Museum"),
            &mut sampler,
            noon(),
        );
        assert!(reply.text.contains("approximately **20 minutes**"));
    }

    #[test]
    fn test_bus_follow_up() {
        let mut sampler = zero_sampler();
        let reply = synthesize(
            &Intent::BusFollowUp,
            &TravelContext::route("Park", "Museum"),
            &mut sampler,
            noon(),
        );
        assert!(reply.text.starts_with("🚌 **Bus 10** runs between **Park** and **Museum**."));
        assert!(reply.text.contains("Next departures: **12:30 PM, 1:00 PM, 1:30 PM**"));

        let reply = synthesize(&Intent::BusFollowUp, &TravelContext::default(), &mut sampler, noon());
        assert_eq!(reply.text, BUS_NEEDS_ROUTE);
    }

    #[test]
    fn test_restaurants_and_hours_default_area() {
        let mut sampler = zero_sampler();
        let reply = synthesize(
            &Intent::RestaurantFollowUp,
            &TravelContext::default(),
            &mut sampler,
            noon(),
        );
        assert!(reply.text.starts_with("🍽️ **Restaurants near the area**:"));

        let reply = synthesize(&Intent::HoursFollowUp, &TravelContext::default(), &mut sampler, noon());
        assert!(reply.text.starts_with("🕐 **General opening hours for most tourist attractions**:"));
        assert!(reply.text.contains(advisory_for("")));
    }

    #[test]
    fn test_destination_only_without_origin_prompts() {
        let mut sampler = zero_sampler();
        let reply = synthesize(
            &Intent::DestinationOnly {
                to: "Barsur".into(),
                source: SlotSource::Extracted,
            },
            &TravelContext::default(),
            &mut sampler,
            noon(),
        );
        assert!(reply.text.starts_with("Got it — you want to visit **Barsur**!"));
        assert_eq!(reply.context, TravelContext::default().with_to("Barsur"));
    }

    #[test]
    fn test_destination_only_with_origin_routes() {
        let mut sampler = zero_sampler();
        let reply = synthesize(
            &Intent::DestinationOnly {
                to: "Museum".into(),
                source: SlotSource::BarePhrase,
            },
            &TravelContext::default().with_from("Park"),
            &mut sampler,
            noon(),
        );
        assert!(reply.text.starts_with("Great! Here's how to get from **Park** to **Museum**"));
        assert_eq!(reply.context, TravelContext::route("Park", "Museum"));
    }

    #[test]
    fn test_origin_only_prompts_by_source() {
        let mut sampler = zero_sampler();
        let extracted = synthesize(
            &Intent::OriginOnly {
                from: "Geedam".into(),
                source: SlotSource::Extracted,
            },
            &TravelContext::default(),
            &mut sampler,
            noon(),
        );
        assert!(extracted.text.starts_with("Got it — you're starting from **Geedam**."));

        let bare = synthesize(
            &Intent::OriginOnly {
                from: "Geedam".into(),
                source: SlotSource::BarePhrase,
            },
            &TravelContext::default(),
            &mut sampler,
            noon(),
        );
        assert!(bare.text.starts_with("I'll note that as your starting point: **Geedam**."));
        assert_eq!(bare.context, TravelContext::default().with_from("Geedam"));
    }

    #[test]
    fn test_origin_only_with_destination_routes() {
        let mut sampler = zero_sampler();
        let reply = synthesize(
            &Intent::OriginOnly {
                from: "Geedam".into(),
                source: SlotSource::Extracted,
            },
            &TravelContext::default().with_to("Barsur"),
            &mut sampler,
            noon(),
        );
        assert_eq!(reply.context, TravelContext::route("Geedam", "Barsur"));
        assert!(reply.text.contains("TOTAL TRAVEL TIME"));
    }

    #[test]
    fn test_unknown_knowledge_key_falls_back() {
        let mut sampler = zero_sampler();
        let reply = synthesize(
            &Intent::KnowledgeLookup {
                key: "atlantis".into(),
            },
            &TravelContext::default(),
            &mut sampler,
            noon(),
        );
        assert_eq!(reply.text, FALLBACK);
    }

    #[test]
    fn test_respond_end_to_end() {
        let mut sampler = zero_sampler();
        let reply = respond("hello there", &TravelContext::default(), &mut sampler, noon());
        assert_eq!(reply.text, GREETING);

        let reply = respond("Tell me about Barsur", &TravelContext::default(), &mut sampler, noon());
        assert!(reply.text.contains("Barsur"));
        assert!(reply.context.is_empty());
    }
}
