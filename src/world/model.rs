use std::collections::HashMap;
use std::fmt;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop. Loaded once from TOML and
/// mutated in place for the rest of the session (rooms lose/gain items,
/// puzzles get marked solved); no room or item is ever created or
/// destroyed after load, except the coin a random event may drop.
#[derive(Debug)]
pub struct World {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub start_room: String,

    /// Room reachable only while `gate_key` is in the inventory.
    pub treasure_room: String,
    /// Room where the trap event and the wrong-answer punishment live.
    pub trap_room: String,

    /// Item ids the engine's fixed rules key on. The TOML may rename
    /// them; defaults reproduce the classic labyrinth.
    pub gate_key: String,
    pub chest_item: String,
    pub chest_key: String,
    pub coin_item: String,
    pub deterrent_item: String,
    pub ward_item: String,

    pub rooms: HashMap<String, Room>,
    pub items: HashMap<String, Item>,
}

#[derive(Debug)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub exits: Vec<Exit>,
    /// Item ids currently lying in the room, in placement order.
    pub items: Vec<String>,
    pub puzzle: Option<Puzzle>,
}

#[derive(Debug)]
pub struct Exit {
    pub direction: Direction,
    pub target: String,
}

#[derive(Debug)]
pub struct Puzzle {
    pub question: String,
    /// Canonical answer. Also doubles as the chest code in the treasure
    /// room, where it is compared case-sensitively.
    pub answer: String,
    pub alternates: Vec<String>,
    pub reward: Option<String>,
    /// Set once by a correct answer, never cleared.
    pub solved: bool,
}

#[derive(Debug)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Flavor text printed on `use`; empty means the generic shrug.
    pub use_text: String,
    /// Item granted the first time this one is used (a box with a key
    /// inside). `spent` latches after the grant.
    pub contains: Option<String>,
    pub spent: bool,
    pub portable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Accepts full lowercase names and single-letter abbreviations.
    pub fn parse(token: &str) -> Option<Direction> {
        match token {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Room {
    pub fn exit_to(&self, direction: Direction) -> Option<&str> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target.as_str())
    }
}

impl World {
    /// Display name for an item id; falls back to the id itself so a
    /// stray id never panics mid-message.
    pub fn item_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.items.get(id).map(|i| i.name.as_str()).unwrap_or(id)
    }
}
