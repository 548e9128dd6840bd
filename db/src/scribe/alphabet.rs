//! The Paleo-Hebrew alphabet, as seeded into `paleo_letters`.
use crate::models::NewPaleoLetter;

macro_rules! letter {
    ($order:expr, $letter:expr, $symbol:expr, $name:expr, $sound:expr, $value:expr,
     $pictograph:expr, $meaning:expr) => {
        NewPaleoLetter {
            letter: $letter,
            paleo_symbol: $symbol,
            name: $name,
            meaning: $meaning,
            pictograph_description: $pictograph,
            sound: $sound,
            numerical_value: Some($value),
            order: $order,
        }
    };
}

/// All 22 letters in alphabetical order.
pub const ALPHABET: [NewPaleoLetter<'static>; 22] = [
    letter!(1, "א", "\u{10900}", "Aleph", "a", 1, "Head of an ox", "Strength, leader, first"),
    letter!(2, "ב", "\u{10901}", "Bet", "b", 2, "Floor plan of a tent", "House, family, in"),
    letter!(3, "ג", "\u{10902}", "Gimel", "g", 3, "Foot", "Gather, walk, carry"),
    letter!(4, "ד", "\u{10903}", "Dalet", "d", 4, "Tent door", "Door, move, hang"),
    letter!(5, "ה", "\u{10904}", "He", "h", 5, "Man with raised arms", "Behold, reveal, breath"),
    letter!(6, "ו", "\u{10905}", "Vav", "w", 6, "Tent peg", "Add, secure, hook"),
    letter!(7, "ז", "\u{10906}", "Zayin", "z", 7, "Mattock", "Cut, food, harvest"),
    letter!(8, "ח", "\u{10907}", "Chet", "ch", 8, "Tent wall", "Outside, divide, separate"),
    letter!(9, "ט", "\u{10908}", "Tet", "t", 9, "Basket", "Surround, contain, mud"),
    letter!(10, "י", "\u{10909}", "Yod", "y", 10, "Arm and closed hand", "Work, throw, deed"),
    letter!(11, "כ", "\u{1090A}", "Kaf", "k", 20, "Open palm", "Bend, open, allow"),
    letter!(12, "ל", "\u{1090B}", "Lamed", "l", 30, "Shepherd staff", "Teach, yoke, authority"),
    letter!(13, "מ", "\u{1090C}", "Mem", "m", 40, "Water", "Chaos, mighty, blood"),
    letter!(14, "נ", "\u{1090D}", "Nun", "n", 50, "Seed", "Continue, heir, son"),
    letter!(15, "ס", "\u{1090E}", "Samekh", "s", 60, "Thorn", "Grab, hate, protect"),
    letter!(16, "ע", "\u{1090F}", "Ayin", "'", 70, "Eye", "Watch, know, shade"),
    letter!(17, "פ", "\u{10910}", "Pe", "p", 80, "Mouth", "Blow, scatter, edge"),
    letter!(18, "צ", "\u{10911}", "Tsadi", "ts", 90, "Man lying on his side", "Wait, chase, hunt"),
    letter!(19, "ק", "\u{10912}", "Qof", "q", 100, "Sun on the horizon", "Condense, circle, time"),
    letter!(20, "ר", "\u{10913}", "Resh", "r", 200, "Head of a man", "First, top, beginning"),
    letter!(21, "ש", "\u{10914}", "Shin", "sh", 300, "Two front teeth", "Sharp, press, eat"),
    letter!(22, "ת", "\u{10915}", "Tav", "t", 400, "Crossed sticks", "Mark, sign, covenant"),
];
