// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod catalogue;

use catalogue::{MARKETS, RESTAURANTS, SHOPS, TRANSIT_HUBS};
use chrono::{Duration as TimeDelta, NaiveTime, Timelike};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::ops::RangeInclusive;
use std::time::Duration;

/// One synthesized bus journey.
///
/// `total_minutes` is always `walk_to_stop + ride_minutes + walk_from_stop`
/// and `ride_minutes` is always `ride_stops * per_stop_minutes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub bus_number: u32,
    pub ride_stops: u32,
    pub per_stop_minutes: u32,
    pub ride_minutes: u32,
    pub walk_to_stop: u32,
    pub walk_from_stop: u32,
    pub total_minutes: u32,
    pub transit_hub: &'static str,
    pub next_departures: [String; 3],
    pub from: String,
    pub to: String,
}

impl RouteInfo {
    pub fn departures_label(&self) -> String {
        self.next_departures.join(", ")
    }
}

/// Restaurant, shop and market sets for one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoiSelection {
    pub restaurants: &'static [&'static str; 3],
    pub shops: &'static [&'static str; 3],
    pub markets: &'static [&'static str; 2],
}

/// Stateless content generator over an injected random source.
pub struct Sampler<R> {
    rng: R,
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn bus_number(&mut self) -> u32 {
        self.rng.gen_range(10..=99)
    }

    /// Rough door-to-door estimate for follow-up questions.
    pub fn duration_estimate(&mut self) -> u32 {
        self.rng.gen_range(20..=65)
    }

    pub fn bus_route(&mut self, from: &str, to: &str, now: NaiveTime) -> RouteInfo {
        let bus_number = self.bus_number();
        let ride_stops = self.rng.gen_range(3..=8);
        let per_stop_minutes = self.rng.gen_range(3..=5);
        let walk_to_stop = self.rng.gen_range(3..=8);
        let walk_from_stop = self.rng.gen_range(2..=5);
        let transit_hub = TRANSIT_HUBS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(TRANSIT_HUBS[0]);

        let ride_minutes = ride_stops * per_stop_minutes;
        RouteInfo {
            bus_number,
            ride_stops,
            per_stop_minutes,
            ride_minutes,
            walk_to_stop,
            walk_from_stop,
            total_minutes: walk_to_stop + ride_minutes + walk_from_stop,
            transit_hub,
            next_departures: next_departures(now),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn restaurants(&mut self) -> &'static [&'static str; 3] {
        RESTAURANTS.choose(&mut self.rng).unwrap_or(&RESTAURANTS[0])
    }

    pub fn shops(&mut self) -> &'static [&'static str; 3] {
        SHOPS.choose(&mut self.rng).unwrap_or(&SHOPS[0])
    }

    pub fn markets(&mut self) -> &'static [&'static str; 2] {
        MARKETS.choose(&mut self.rng).unwrap_or(&MARKETS[0])
    }

    pub fn pois(&mut self) -> PoiSelection {
        PoiSelection {
            restaurants: self.restaurants(),
            shops: self.shops(),
            markets: self.markets(),
        }
    }

    pub fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    pub fn typing_delay(&mut self, range_ms: RangeInclusive<u64>) -> Duration {
        if range_ms.is_empty() {
            return Duration::ZERO;
        }
        Duration::from_millis(self.rng.gen_range(range_ms))
    }
}

/// Next three half-hourly departures at or after `now`, as 12-hour clock strings.
pub fn next_departures(now: NaiveTime) -> [String; 3] {
    let first = round_up_to_half_hour(now);
    [0, 30, 60].map(|mins| {
        (first + TimeDelta::minutes(mins))
            .format("%-I:%M %p")
            .to_string()
    })
}

/// A time exactly on :00 or :30 is its own slot; anything past it moves on.
/// Adding to `NaiveTime` wraps at midnight.
fn round_up_to_half_hour(now: NaiveTime) -> NaiveTime {
    let slot_start = now
        .with_minute(now.minute() / 30 * 30)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);
    if slot_start == now {
        now
    } else {
        slot_start + TimeDelta::minutes(30)
    }
}
