use std::collections::HashMap;

use super::model::World;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Cross-reference checks run once after load. The engine assumes all of
/// this afterwards, so a world that fails here never reaches the loop.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    for (label, room_id) in [
        ("start_room", &world.start_room),
        ("treasure_room", &world.treasure_room),
        ("trap_room", &world.trap_room),
    ] {
        if !world.rooms.contains_key(room_id) {
            errors.push(ValidationError::new(format!(
                "{} '{}' not found among rooms",
                label, room_id
            )));
        }
    }

    // Exits must target existing rooms
    for (room_id, room) in &world.rooms {
        for exit in &room.exits {
            if !world.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, exit.direction, exit.target
                )));
            }
        }
    }

    // The ids the engine's fixed rules key on must exist
    for (label, item_id) in [
        ("gate_key", &world.gate_key),
        ("chest_item", &world.chest_item),
        ("chest_key", &world.chest_key),
        ("coin_item", &world.coin_item),
        ("deterrent_item", &world.deterrent_item),
        ("ward_item", &world.ward_item),
    ] {
        if !world.items.contains_key(item_id) {
            errors.push(ValidationError::new(format!(
                "{} '{}' not found among items",
                label, item_id
            )));
        }
    }

    if world
        .items
        .get(&world.chest_item)
        .is_some_and(|i| i.portable)
    {
        errors.push(ValidationError::new(format!(
            "chest_item '{}' must not be portable",
            world.chest_item
        )));
    }

    // An item may exist in at most one location: one room's list, one
    // container's `contains`, or one puzzle's `reward`. Anything else
    // would let the same id be granted twice.
    let mut placements: HashMap<&str, Vec<String>> = HashMap::new();

    for (room_id, room) in &world.rooms {
        for item_id in &room.items {
            if !world.items.contains_key(item_id) {
                errors.push(ValidationError::new(format!(
                    "room '{}' lists unknown item '{}'",
                    room_id, item_id
                )));
            }
            placements
                .entry(item_id)
                .or_default()
                .push(format!("room '{}'", room_id));
        }
        if let Some(puzzle) = &room.puzzle {
            if let Some(reward) = &puzzle.reward {
                if !world.items.contains_key(reward) {
                    errors.push(ValidationError::new(format!(
                        "room '{}' puzzle rewards unknown item '{}'",
                        room_id, reward
                    )));
                }
                placements
                    .entry(reward)
                    .or_default()
                    .push(format!("puzzle reward in room '{}'", room_id));
            }
        }
    }

    for item in world.items.values() {
        if let Some(content) = &item.contains {
            if content == &item.id {
                errors.push(ValidationError::new(format!(
                    "item '{}' cannot contain itself",
                    item.id
                )));
            }
            if !world.items.contains_key(content) {
                errors.push(ValidationError::new(format!(
                    "item '{}' contains unknown item '{}'",
                    item.id, content
                )));
            }
            placements
                .entry(content)
                .or_default()
                .push(format!("inside item '{}'", item.id));
        }
    }

    for (item_id, spots) in placements {
        if spots.len() > 1 {
            errors.push(ValidationError::new(format!(
                "item '{}' is placed in more than one location: {}",
                item_id,
                spots.join(", ")
            )));
        }
    }

    errors
}
