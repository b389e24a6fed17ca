use crate::GameState;
use crate::engine::input::InputSource;
use crate::engine::output::Output;

/// Try to open the treasure chest in the current room. The chest key
/// opens it outright; without it the player may type a code, checked
/// case-sensitively against the room riddle's canonical answer. Opening
/// the chest wins the game.
pub fn attempt_open_treasure(
    out: &mut Output,
    state: &mut GameState,
    source: &mut dyn InputSource,
) -> bool {
    let room_id = state.current_room_id.clone();
    let chest = state.world.chest_item.clone();

    let chest_here = state
        .world
        .rooms
        .get(&room_id)
        .is_some_and(|room| room.items.iter().any(|i| *i == chest));

    if !chest_here {
        out.say("There is no treasure chest here.");
        return false;
    }

    if state.inventory.contains(&state.world.chest_key) {
        out.say("You fit the key into the lock, and it clicks. The chest is open!");
        open_chest(out, state, &room_id, &chest);
        return true;
    }

    out.say("The chest is locked, and you have no key for it.");

    let Some(choice) = source.prompt_line(out, "Try a code? (yes/no): ") else {
        state.game_over = true;
        return false;
    };

    match choice.trim().to_lowercase().as_str() {
        "yes" | "y" => {}
        _ => {
            out.say("You step back from the chest.");
            return false;
        }
    }

    let Some(code) = source.prompt_line(out, "Enter the code: ") else {
        state.game_over = true;
        return false;
    };
    let code = code.trim();

    // The code is the canonical riddle answer, compared exactly.
    let answer = state
        .world
        .rooms
        .get(&room_id)
        .and_then(|room| room.puzzle.as_ref())
        .map(|puzzle| puzzle.answer.clone());

    match answer {
        Some(answer) if code == answer => {
            out.say("The code is right! The lock springs open.");
            open_chest(out, state, &room_id, &chest);
            true
        }
        _ => {
            out.say("Wrong code. The chest stays locked.");
            false
        }
    }
}

fn open_chest(out: &mut Output, state: &mut GameState, room_id: &str, chest: &str) {
    if let Some(room) = state.world.rooms.get_mut(room_id) {
        room.items.retain(|i| i != chest);
    }
    out.say("Inside lies the treasure of the labyrinth. You won!");
    state.game_over = true;
}
