use crate::GameState;
use crate::engine::output::Output;

/// Describe the current room: title, description, notable items, exits,
/// and a hint if an unsolved riddle waits here. Read-only.
pub fn describe_room(out: &mut Output, state: &GameState) {
    let Some(room) = state.world.rooms.get(&state.current_room_id) else {
        return;
    };

    out.title(format!("== {} ==", room.name));

    if !room.desc.trim().is_empty() {
        out.say(room.desc.trim());
    }

    if !room.items.is_empty() {
        let names: Vec<&str> = room
            .items
            .iter()
            .map(|id| state.world.item_name(id))
            .collect();
        out.say(format!("Notable items: {}", names.join(", ")));
    }

    if !room.exits.is_empty() {
        let directions: Vec<&str> = room.exits.iter().map(|e| e.direction.as_str()).collect();
        out.set_exits(format!("Exits: {}", directions.join(", ")));
    }

    if let Some(puzzle) = &room.puzzle {
        if !puzzle.solved {
            out.say("Something here looks like a riddle (try the 'solve' command).");
        }
    }
}

const HELP: &[(&str, &str)] = &[
    ("north/south/east/west", "move in that direction"),
    ("go <direction>", "same, spelled out"),
    ("look", "describe the current room"),
    ("take <item>", "pick up an item"),
    ("use <item>", "use an item you carry"),
    ("solve", "tackle the room's riddle, or the chest"),
    ("inventory", "list what you carry"),
    ("help", "show this list"),
    ("quit", "leave the game"),
];

pub fn show_help(out: &mut Output) {
    out.say("Available commands:");
    for (command, what) in HELP {
        out.say(format!("  {:<22} - {}", command, what));
    }
}
