use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::model::{Direction, Exit, Item, Puzzle, Room, World};
use super::validator::validate_world;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read world file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse world file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid world: {0}")]
    Invalid(String),
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,
    start_room: String,
    treasure_room: String,
    trap_room: String,

    // Engine-designated item ids; defaults match the classic labyrinth.
    #[serde(default = "default_gate_key")]
    gate_key: String,
    #[serde(default = "default_chest_item")]
    chest_item: String,
    #[serde(default = "default_chest_key")]
    chest_key: String,
    #[serde(default = "default_coin_item")]
    coin_item: String,
    #[serde(default = "default_deterrent_item")]
    deterrent_item: String,
    #[serde(default = "default_ward_item")]
    ward_item: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    /// Direction name -> target room id, e.g. `north = "hall"`.
    #[serde(default)]
    exits: HashMap<String, String>,

    #[serde(default)]
    items: Vec<String>,

    #[serde(default)]
    puzzle: Option<PuzzleConfig>,
}

#[derive(Deserialize)]
struct PuzzleConfig {
    question: String,
    answer: String,
    #[serde(default)]
    alternates: Vec<String>,
    #[serde(default)]
    reward: Option<String>,
}

#[derive(Deserialize)]
struct ItemConfig {
    id: String,
    name: String,

    #[serde(default)]
    use_text: String,

    #[serde(default)]
    contains: Option<String>,

    // default to true if omitted
    #[serde(default = "default_true")]
    portable: bool,
}

// Helpers for serde defaults
fn default_true() -> bool {
    true
}
fn default_gate_key() -> String {
    "rusty_key".to_string()
}
fn default_chest_item() -> String {
    "treasure_chest".to_string()
}
fn default_chest_key() -> String {
    "treasure_key".to_string()
}
fn default_coin_item() -> String {
    "coin".to_string()
}
fn default_deterrent_item() -> String {
    "sword".to_string()
}
fn default_ward_item() -> String {
    "torch".to_string()
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Public API: load a world from TOML text (embedded defaults, tests).
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    if world_file.world.id.trim().is_empty() {
        return Err(WorldError::Invalid("world.id may not be empty".into()));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::Invalid(
            "world.start_room may not be empty".into(),
        ));
    }

    // Build rooms map
    let mut rooms_map: HashMap<String, Room> = HashMap::new();

    for room_cfg in world_file.room {
        if rooms_map.contains_key(&room_cfg.id) {
            return Err(WorldError::Invalid(format!(
                "duplicate room id: {}",
                room_cfg.id
            )));
        }

        let exits = parse_exits(&room_cfg.id, &room_cfg.exits)?;

        let puzzle = room_cfg.puzzle.map(|p| Puzzle {
            question: p.question,
            answer: p.answer,
            alternates: p.alternates,
            reward: p.reward,
            solved: false,
        });

        rooms_map.insert(
            room_cfg.id.clone(),
            Room {
                id: room_cfg.id,
                name: room_cfg.name,
                desc: room_cfg.desc,
                exits,
                items: room_cfg.items,
                puzzle,
            },
        );
    }

    // Build items map
    let mut items_map: HashMap<String, Item> = HashMap::new();

    for ic in world_file.item {
        if items_map.contains_key(&ic.id) {
            return Err(WorldError::Invalid(format!("duplicate item id: {}", ic.id)));
        }
        if ic.name.trim().is_empty() {
            return Err(WorldError::Invalid(format!(
                "item '{}' has an empty name",
                ic.id
            )));
        }

        items_map.insert(
            ic.id.clone(),
            Item {
                id: ic.id,
                name: ic.name,
                use_text: ic.use_text,
                contains: ic.contains,
                spent: false,
                portable: ic.portable,
            },
        );
    }

    let h = world_file.world;
    let world = World {
        id: h.id,
        name: h.name,
        desc: h.desc,
        start_room: h.start_room,
        treasure_room: h.treasure_room,
        trap_room: h.trap_room,
        gate_key: h.gate_key,
        chest_item: h.chest_item,
        chest_key: h.chest_key,
        coin_item: h.coin_item,
        deterrent_item: h.deterrent_item,
        ward_item: h.ward_item,
        rooms: rooms_map,
        items: items_map,
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(WorldError::Invalid(joined));
    }

    log::debug!(
        "loaded world '{}': {} rooms, {} items",
        world.id,
        world.rooms.len(),
        world.items.len()
    );

    Ok(world)
}

/// Exits come in as a free-form table; every key must be one of the four
/// compass directions. Output order is fixed N/S/E/W regardless of the
/// TOML order so room listings stay stable.
fn parse_exits(
    room_id: &str,
    raw: &HashMap<String, String>,
) -> Result<Vec<Exit>, WorldError> {
    for key in raw.keys() {
        if Direction::parse(key).is_none() {
            return Err(WorldError::Invalid(format!(
                "room '{}' has an exit in unknown direction '{}'",
                room_id, key
            )));
        }
    }

    let mut exits = Vec::new();
    for direction in Direction::ALL {
        if let Some(target) = raw.get(direction.as_str()) {
            exits.push(Exit {
                direction,
                target: target.clone(),
            });
        }
    }
    Ok(exits)
}
