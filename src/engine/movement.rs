use crate::GameState;
use crate::engine::events::random_event;
use crate::engine::output::Output;
use crate::engine::render::describe_room;
use crate::world::Direction;

/// Try to move through the exit in `direction`. On success the step
/// counter advances, the new room is described, and the post-move random
/// event runs. Rejections (no exit, locked treasure door) leave the
/// state untouched; the two failure messages stay distinguishable from
/// each other and from an invalid direction token.
pub fn move_player(out: &mut Output, state: &mut GameState, direction: Direction) -> bool {
    let Some(room) = state.world.rooms.get(&state.current_room_id) else {
        // Unreachable after validation; bail out loudly rather than panic.
        out.say(format!(
            "Error: you are in an unknown room '{}'",
            state.current_room_id
        ));
        state.game_over = true;
        return false;
    };

    let Some(target) = room.exit_to(direction).map(str::to_string) else {
        out.say("You can't go that way.");
        return false;
    };

    // Hard gate: the treasure room only opens to the gate key, no matter
    // which exit leads there.
    if target == state.world.treasure_room {
        if !state.inventory.contains(&state.world.gate_key) {
            out.say("The door is locked. You need a key to go further.");
            return false;
        }
        out.say(format!(
            "You turn the {} in the lock, and the way opens.",
            state.world.item_name(&state.world.gate_key)
        ));
    }

    state.current_room_id = target;
    state.steps_taken += 1;

    describe_room(out, state);
    random_event(out, state);

    true
}
