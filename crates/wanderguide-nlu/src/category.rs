use serde::{Deserialize, Serialize};

/// Destination families recognized by keyword, in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceCategory {
    Beach,
    Museum,
    Park,
    Market,
    Restaurant,
    Hotel,
    Landmark,
    General,
}

const FAMILY_ORDER: [PlaceCategory; 7] = [
    PlaceCategory::Beach,
    PlaceCategory::Museum,
    PlaceCategory::Park,
    PlaceCategory::Market,
    PlaceCategory::Restaurant,
    PlaceCategory::Hotel,
    PlaceCategory::Landmark,
];

impl PlaceCategory {
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            PlaceCategory::Beach => &["beach", "coast", "shore"],
            PlaceCategory::Museum => &["museum", "gallery", "exhibit"],
            PlaceCategory::Park => &["park", "garden", "reserve"],
            PlaceCategory::Market => &["market", "bazaar"],
            PlaceCategory::Restaurant => &["restaurant", "cafe", "diner"],
            PlaceCategory::Hotel => &["hotel", "resort", "inn"],
            PlaceCategory::Landmark => &["landmark", "monument", "tower"],
            PlaceCategory::General => &[],
        }
    }

    /// Static visitor advisory for this family.
    pub fn advisory(self) -> &'static str {
        match self {
            PlaceCategory::Beach => {
                "🏖️ Best time to visit: Early morning (7–10 AM) or late afternoon (4–7 PM) to avoid peak heat.\n\
Bring sunscreen, water, and a hat. Lifeguards are on duty from 8 AM – 6 PM.\n\
Beach equipment rental is available at the main entrance. Nearby changing rooms and showers are open 7 AM – 8 PM."
            }
            PlaceCategory::Museum => {
                "🏛️ Opening hours: Tue–Sun, 9 AM – 5 PM (last entry 4:30 PM). Closed Mondays.\n\
Current featured exhibit is running until end of the season.\n\
Student & senior discounts available. Audio guides available at reception for a small fee."
            }
            PlaceCategory::Park => {
                "🌳 Open daily: Sunrise to sunset. Free entry to main grounds.\n\
Weekend nature walks led by local guides depart at 9 AM from the main gate.\n\
Picnic areas and BBQ grills available — book in advance on weekends."
            }
            PlaceCategory::Market => {
                "🛒 Open: Mon–Sat, 8 AM – 7 PM. Sunday 9 AM – 3 PM.\n\
Best deals in the morning. Bring cash — many stalls don't accept cards.\n\
Look out for the local spice section and handmade crafts near the south entrance."
            }
            PlaceCategory::Restaurant => {
                "🍽️ Typically open 11 AM – 10 PM. Reservations recommended on weekends.\n\
Most restaurants offer set lunch menus from 12–2 PM at reduced rates.\n\
Local specialties are highly recommended — ask the staff for the dish of the day."
            }
            PlaceCategory::Hotel => {
                "🏨 Check-in usually from 2 PM, check-out by 11 AM. Early check-in subject to availability.\n\
The hotel concierge can arrange local tours and transport.\n\
Amenities typically include restaurant, pool, and business centre."
            }
            PlaceCategory::Landmark => {
                "🗼 Open daily, typically 9 AM – 6 PM (extended hours in summer).\n\
Guided tours available at 10 AM and 2 PM.\n\
Photography permitted in most areas — check signs for restricted zones."
            }
            PlaceCategory::General => {
                "📍 Typically open to visitors during daylight hours.\n\
Check locally for current events or seasonal activities.\n\
It's recommended to arrive early, especially on weekends and public holidays."
            }
        }
    }
}

/// First keyword family contained in the destination name; `General` otherwise.
pub fn category_of(destination: &str) -> PlaceCategory {
    let lower = destination.to_lowercase();
    FAMILY_ORDER
        .into_iter()
        .find(|family| family.keywords().iter().any(|k| lower.contains(k)))
        .unwrap_or(PlaceCategory::General)
}

pub fn advisory_for(destination: &str) -> &'static str {
    category_of(destination).advisory()
}
