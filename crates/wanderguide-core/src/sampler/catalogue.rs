// Themed point-of-interest sets. Each row is drawn as a whole so that one
// response never mixes items from different themes.

pub static RESTAURANTS: [[&str; 3]; 5] = [
    ["The Golden Spoon", "Saffron Garden", "Harbour Bites"],
    ["Mama Rosa's", "Street Flavours", "The Noodle Corner"],
    ["Spice Route", "Lakeside Grill", "Terra Kitchen"],
    ["The Urban Plate", "Café Bonanza", "The Hungry Wanderer"],
    ["Bazaar Bites", "Sunset Terrace", "Old Town Bistro"],
];

pub static SHOPS: [[&str; 3]; 5] = [
    ["Heritage Craft Store", "Silk Road Boutique", "The Map Shop"],
    ["Artisan Alley", "The Local Market Co.", "Wanderer's Gear"],
    ["Souvenir Square", "The Textile House", "Palmetto Gifts"],
    ["City Bazaar", "The Book Nook", "Spice & Scent"],
    ["Nomad Supply Co.", "Pottery Lane", "The Trinket Store"],
];

pub static MARKETS: [[&str; 2]; 4] = [
    ["Central Bazaar", "Old Quarter Night Market"],
    ["Waterfront Market", "Heritage Street Market"],
    ["The Grand Bazaar", "Dawn Market"],
    ["Folk Craft Market", "Evening Spice Market"],
];

pub static TRANSIT_HUBS: [&str; 8] = [
    "Central Station",
    "North Terminal",
    "City Junction",
    "East Market Square",
    "Harbour Front",
    "Heritage Quarter",
    "University Road",
    "Riverside Walk",
];
