use crate::GameState;
use crate::engine::output::Output;
use crate::engine::rng::pseudo_random;

/// Runs once after every successful move, seeded by the step counter.
/// Fires on a 1-in-10 roll; a second roll picks one of three kinds.
pub fn random_event(out: &mut Output, state: &mut GameState) {
    let chance = pseudo_random(state.steps_taken, 10);
    log::debug!(
        "random event roll: steps={} chance={}",
        state.steps_taken,
        chance
    );
    if chance != 0 {
        return;
    }

    match pseudo_random(state.steps_taken + 1, 3) {
        0 => spawn_coin(out, state),
        1 => ambience(out, state),
        _ => trap_check(out, state),
    }
}

fn spawn_coin(out: &mut Output, state: &mut GameState) {
    out.event("Something glints on the floor: a small coin!");

    let coin = state.world.coin_item.clone();
    if let Some(room) = state.world.rooms.get_mut(&state.current_room_id) {
        if !room.items.contains(&coin) {
            room.items.push(coin);
        }
    }
}

fn ambience(out: &mut Output, state: &GameState) {
    out.event("You hear a strange rustle in the darkness...");
    if state.inventory.contains(&state.world.deterrent_item) {
        out.event("You draw your blade, and whatever it was retreats!");
    } else {
        out.event("A chill runs down your spine.");
    }
}

fn trap_check(out: &mut Output, state: &mut GameState) {
    if state.current_room_id == state.world.trap_room
        && !state.inventory.contains(&state.world.ward_item)
    {
        out.event("You sense danger closing in...");
        trigger_trap(out, state);
    }
}

/// The trap costs the player a random carried item; with empty hands it
/// rolls for lethal damage instead (under 3 on a d10 kills).
pub fn trigger_trap(out: &mut Output, state: &mut GameState) {
    out.event("The trap springs! The floor begins to shudder...");

    if !state.inventory.is_empty() {
        let index = pseudo_random(state.steps_taken, state.inventory.len() as u64) as usize;
        let lost = state.inventory.remove(index);
        let name = state.world.item_name(&lost).to_string();
        out.event(format!("You lost an item: {}", name));
    } else if pseudo_random(state.steps_taken, 10) < 3 {
        out.event("The trap strikes true. Everything goes dark.");
        state.game_over = true;
    } else {
        out.event("You twist aside, and the trap snaps shut on nothing!");
    }
}
