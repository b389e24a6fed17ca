use crate::GameState;
use crate::engine::output::Output;

/// Pick up an item lying in the current room. Non-portable items (the
/// treasure chest) are refused; an id that is not in the room is a
/// message, not a mutation.
pub fn take_item(out: &mut Output, state: &mut GameState, item_id: &str) -> bool {
    let in_room = state
        .world
        .rooms
        .get(&state.current_room_id)
        .is_some_and(|room| room.items.iter().any(|i| i == item_id));

    if !in_room {
        out.say("There is no such item here.");
        return false;
    }

    // Unknown ids default to portable; the validator keeps the shipped
    // worlds from ever listing one.
    let portable = state
        .world
        .items
        .get(item_id)
        .map_or(true, |item| item.portable);

    if !portable {
        out.say(format!(
            "You can't take the {}, it is far too heavy.",
            state.world.item_name(item_id)
        ));
        return false;
    }

    if let Some(room) = state.world.rooms.get_mut(&state.current_room_id) {
        if let Some(pos) = room.items.iter().position(|i| i == item_id) {
            let id = room.items.remove(pos);
            state.inventory.push(id);
        }
    }

    out.say(format!("You picked up: {}", state.world.item_name(item_id)));
    true
}

/// Use an item from the inventory. Most items only print flavor text; a
/// container item grants whatever it holds the first time, then reports
/// empty. Items the game knows nothing about still count as a handled
/// turn, with a generic message.
pub fn use_item(out: &mut Output, state: &mut GameState, item_id: &str) -> bool {
    if !state.inventory.iter().any(|i| i == item_id) {
        out.say("You don't have that item.");
        return false;
    }

    let mut flavor: Option<String> = None;
    let mut granted: Option<String> = None;
    let mut emptied = false;

    if let Some(item) = state.world.items.get_mut(item_id) {
        if !item.use_text.trim().is_empty() {
            flavor = Some(item.use_text.clone());
        }
        if let Some(content) = item.contains.clone() {
            if item.spent {
                emptied = true;
            } else {
                item.spent = true;
                granted = Some(content);
            }
        }
    }

    match flavor {
        Some(text) => out.say(text),
        None if granted.is_none() && !emptied => {
            out.say(format!(
                "You don't know how to use the {}.",
                state.world.item_name(item_id)
            ));
        }
        None => {}
    }

    if let Some(content) = granted {
        out.say(format!(
            "Inside you find: {}!",
            state.world.item_name(&content)
        ));
        state.inventory.push(content);
    } else if emptied {
        out.say("It is empty.");
    }

    true
}

/// Numbered inventory listing, in pickup order.
pub fn show_inventory(out: &mut Output, state: &GameState) {
    if state.inventory.is_empty() {
        out.say("Your inventory is empty.");
        return;
    }

    out.say("You are carrying:");
    for (index, item_id) in state.inventory.iter().enumerate() {
        out.say(format!(
            "  {}. {}",
            index + 1,
            state.world.item_name(item_id)
        ));
    }
}
