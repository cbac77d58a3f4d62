// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use regex::Regex;
use std::sync::OnceLock;

/// A canned fact card for a named place in Dantewada district.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// Lowercase place name. Matched as a substring of the lowercased input.
    pub key: &'static str,
    pub text: &'static str,
}

const fn entry(key: &'static str, text: &'static str) -> KnowledgeEntry {
    KnowledgeEntry { key, text }
}

// Order is significant: the first key contained in the input wins.
// No key may be a substring of another (see test_no_overlapping_keys).
static PLACES: &[KnowledgeEntry] = &[
    entry(
        "dantewada",
        "📍 Dantewada is the district headquarters of Dantewada district in Chhattisgarh, India.\n\n\
🏛️ Key attractions:\n\
• Danteshwari Temple — Famous Shakti Peeth, one of 52 Shakti Peethas in India\n\
• Ecomuseum — showcases tribal culture and crafts\n\
• Weekly markets with local tribal handicrafts\n\n\
🚌 How to reach:\n\
• From Raipur: Take NH30, ~480 km, ~9 hours by road or bus\n\
• From Jagdalpur: ~80 km on NH30, ~2 hours by bus or taxi\n\
• Nearest railway station: Kirandul (NMDC rail line)\n\
• Daily bus services from Jagdalpur bus stand\n\n\
🕐 Best time to visit: October to March (cool weather)\n\
📞 STD Code: 07856",
    ),
    entry(
        "danteshwari temple",
        "🛕 Danteshwari Temple is one of the 52 Shakti Peethas and the most sacred temple in Bastar region.\n\n\
📍 Location: Central Dantewada town\n\
🕐 Timings: 6:00 AM – 1:00 PM and 3:00 PM – 8:00 PM\n\
📅 Main festival: Navratri (huge celebration, October)\n\n\
🚌 How to reach:\n\
• From Dantewada bus stand: 10-minute walk or auto-rickshaw\n\
• From Jagdalpur: 80 km via NH30, buses available\n\
• From Raipur: ~480 km, overnight bus available\n\n\
💡 Tips:\n\
• Remove footwear before entering\n\
• Photography may be restricted in inner sanctum\n\
• Very crowded during Navratri — plan accordingly",
    ),
    entry(
        "geedam",
        "📍 Geedam is a town in Dantewada district known for its weekly market and as a transport hub.\n\n\
🚌 How to reach from Dantewada:\n\
• Distance: ~40 km north of Dantewada\n\
• Bus: Regular buses from Dantewada bus stand, ~1 hour\n\
• Auto-rickshaw/taxi also available\n\n\
🛍️ Local attractions:\n\
• Weekly market (haat bazaar) — local produce, handicrafts, tribal goods\n\
• Gateway to surrounding villages\n\n\
🕐 Best time: Any season, weekday market days most vibrant",
    ),
    entry(
        "barsur",
        "🏛️ Barsur is an ancient historic town famous for its 12th-century temples and sculptures.\n\n\
📍 Location: South of Dantewada, ~25 km\n\n\
🏛️ Must-see:\n\
• Mamda Devi Temple — ancient Shiva complex\n\
• Chandradittya Temple with intricate carvings\n\
• Large Ganesh statues (9th–12th century)\n\n\
🚌 How to reach:\n\
• From Dantewada: ~25 km south, auto/jeep/taxi\n\
• Buses via Aranpur route, 45 min–1 hour\n\n\
🕐 Best time to visit: 9 AM – 5 PM daily",
    ),
    entry(
        "kirandul",
        "🏭 Kirandul is an industrial town home to NMDC's Bailadila Iron Ore Project, one of India's largest.\n\n\
📍 Location: ~130 km south of Dantewada\n\n\
🚌 How to reach:\n\
• From Dantewada: ~2.5 hours by road\n\
• Rail: Kirandul has a railway station on the Kirandul–Visakhapatnam line\n\
• Trains from Visakhapatnam: Kirandul Express\n\n\
🏭 Attractions:\n\
• Bailadila Iron Ore Mines (permission required for visit)\n\
• Bailadila Hills trekking\n\
• Indravati River views",
    ),
    entry(
        "bailadila",
        "⛰️ Bailadila (meaning \"Bullocks' Hump\") is a range of hills rich in iron ore, a major mining region.\n\n\
📍 Location: Near Kirandul, ~130 km south of Dantewada\n\n\
⛏️ Known for:\n\
• Bailadila Iron Ore Mine — one of the largest in India\n\
• Scenic Bailadila Hills for trekking\n\
• NMDC operations\n\n\
🚌 How to reach from Dantewada:\n\
• Road: ~130 km south, ~2.5–3 hours by car/bus\n\
• Rail: Kirandul Railway Station",
    ),
    entry(
        "jagdalpur",
        "🏙️ Jagdalpur is the headquarters of Bastar district and major city near Dantewada.\n\n\
📍 Distance from Dantewada: ~80 km north on NH30\n\n\
🏛️ Must visit:\n\
• Chitrakoot Waterfall — India's widest waterfall (~38 km from Jagdalpur)\n\
• Bastar Palace\n\
• Kailash Cave\n\
• Tirathgarh Waterfall\n\
• Bastar Dussehra (world's longest festival!)\n\n\
🚌 How to reach:\n\
• From Dantewada: Regular bus (NH30), ~2 hours\n\
• From Raipur: ~300 km, ~6 hours by road\n\
• Nearest airport: Jagdalpur Airport (JAI) — flights to Raipur\n\n\
🕐 Best time: October–March",
    ),
    entry(
        "pharasgaon",
        "🏘️ Pharasgaon is a small town north of Dantewada.\n\
🚌 Reach from Dantewada: Regular buses via Geedam, ~1–1.5 hours\n\
🛍️ Local weekly market, traditional Gondi culture, local produce",
    ),
    entry(
        "chitalnar",
        "🏘️ Chitalnar is a village in Dantewada district known for traditional tribal way of life.\n\
🚌 Reach from Dantewada: ~20–30 km, auto/jeep/taxi\n\
🌿 Experience: Rural Chhattisgarhi village life, local food, nature",
    ),
    entry(
        "bacheli",
        "🏘️ Bacheli is a township near Kirandul, home to NMDC workers.\n\
🚌 Reach from Dantewada: ~120 km south by road\n\
🏭 Connected to Bailadila iron ore project",
    ),
    entry(
        "katekalyan",
        "🏘️ Katekalyan is a block headquarters in Dantewada district.\n\
🚌 Reach from Dantewada: ~40 km, local buses available\n\
🌄 Gateway to forested areas and tribal villages",
    ),
    entry(
        "indravati",
        "🐯 Indravati National Park and Tiger Reserve is one of India's pristine tiger reserves.\n\n\
📍 Location: Western Dantewada / Bijapur district border\n\n\
🦁 Wildlife:\n\
• Bengal tigers, leopards\n\
• Wild buffalo (rare)\n\
• Gaur, deer, wild boar\n\
• Rich birdlife\n\n\
🚌 How to reach:\n\
• From Dantewada: ~80–100 km west, private vehicle recommended\n\
• Nearest town: Bhopalpatnam\n\n\
📅 Season: October–June (closed July–September monsoon)\n\
⚠️ Entry permit required from Forest Department",
    ),
    entry(
        "chitrakoot",
        "💧 Chitrakoot Waterfall is called \"India's Niagara Falls\" — the widest waterfall in India.\n\n\
📍 Location: ~38 km west of Jagdalpur (Bastar), ~120 km from Dantewada\n\n\
🌊 Best time: July–October (peak flow during monsoon)\n\
🕐 Open: Sunrise to sunset\n\n\
🚌 How to reach from Dantewada:\n\
• Bus to Jagdalpur (2 hrs) then local bus/taxi to Chitrakoot (~1 hr)\n\
• Total: ~3–4 hours journey\n\n\
💡 Tips:\n\
• Boat rides available at base\n\
• Very crowded on weekends and holidays",
    ),
];

/// District-wide guide shown for "villages in…", "about dantewada" style questions.
pub const DISTRICT_OVERVIEW: &str = "🗺️ **Dantewada District — Complete Guide**\n\n\
📍 **Cities & Towns:**\n\
• Dantewada (District HQ)\n\
• Geedam\n\
• Katekalyan\n\
• Kuakonda\n\
• Barsur\n\
• Bacheli\n\
• Kirandul\n\n\
🏘️ **Villages:**\n\
• Pharasgaon, Chitalnar, Tongpal, Haldi\n\
• Darbha, Makdi, Nakulnar, Dornapal\n\
• Kistaram, Bhairamgarh, Aranpur\n\
• Hiroli, Pamed, Bhopalpatnam\n\n\
🛕 **Famous Landmarks:**\n\
• Danteshwari Temple (Shakti Peeth)\n\
• Barsur Ancient Temples\n\
• Bailadila Iron Ore Mine\n\
• Indravati National Park\n\n\
🚌 **How to reach Dantewada:**\n\
• From Raipur: ~480 km via NH30, ~9 hrs\n\
• From Jagdalpur: ~80 km, ~2 hrs bus\n\
• Train: Kirandul–Visakhapatnam line\n\n\
Ask me about any specific place for detailed directions!";

/// All entries, in match-priority order.
pub fn entries() -> &'static [KnowledgeEntry] {
    PLACES
}

/// Exact key lookup.
pub fn get(key: &str) -> Option<&'static KnowledgeEntry> {
    let key = key.trim().to_lowercase();
    PLACES.iter().find(|e| e.key == key)
}

/// First entry whose key occurs anywhere in `text` (case-insensitive).
pub fn lookup(text: &str) -> Option<&'static KnowledgeEntry> {
    let lower = text.to_lowercase();
    PLACES.iter().find(|e| lower.contains(e.key))
}

/// True when the text reads like a routing request rather than a fact question.
///
/// Plain substring semantics: "to" inside "towns" counts.
pub fn is_routing_phrase(text: &str) -> bool {
    static ROUTING_RE: OnceLock<Regex> = OnceLock::new();
    let re = ROUTING_RE
        .get_or_init(|| Regex::new(r"(?i)from|to|how.*get|direction|route").unwrap());
    re.is_match(text)
}

/// Fact-card lookup with the routing guard applied.
pub fn guarded_lookup(text: &str) -> Option<&'static KnowledgeEntry> {
    let found = lookup(text)?;
    if is_routing_phrase(text) {
        log::debug!(
            "[Knowledge] '{}' matched but suppressed by routing phrasing",
            found.key
        );
        return None;
    }
    Some(found)
}
