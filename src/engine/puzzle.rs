use crate::GameState;
use crate::engine::events::trigger_trap;
use crate::engine::input::InputSource;
use crate::engine::output::Output;

/// Present the current room's riddle and judge one answer read through
/// `source`. Solving is permanent and the reward is granted at most
/// once; asking again in a solved room succeeds without re-asking.
/// A wrong answer in the trap room springs the trap.
pub fn solve_puzzle(out: &mut Output, state: &mut GameState, source: &mut dyn InputSource) -> bool {
    let room_id = state.current_room_id.clone();

    let Some(room) = state.world.rooms.get(&room_id) else {
        out.say("There are no puzzles here.");
        return false;
    };
    let Some(puzzle) = &room.puzzle else {
        out.say("There are no puzzles here.");
        return false;
    };

    if puzzle.solved {
        out.say("You have already solved the puzzle in this room.");
        return true;
    }

    out.say(format!("Riddle: {}", puzzle.question));

    let Some(reply) = source.prompt_line(out, "Your answer: ") else {
        // Stream ended mid-question: quit gracefully, nothing solved.
        out.say("The labyrinth falls silent.");
        state.game_over = true;
        return false;
    };
    let guess = reply.trim().to_lowercase();

    // Re-borrow mutably now that the blocking read is done.
    let Some(puzzle) = state
        .world
        .rooms
        .get_mut(&room_id)
        .and_then(|r| r.puzzle.as_mut())
    else {
        return false;
    };

    let correct = guess == puzzle.answer.trim().to_lowercase()
        || puzzle
            .alternates
            .iter()
            .any(|alt| alt.trim().to_lowercase() == guess);

    if correct {
        puzzle.solved = true;
        let reward = puzzle.reward.clone();

        out.say("Correct! The riddle gives way.");

        if let Some(reward) = reward {
            out.say(format!(
                "You receive a reward: {}!",
                state.world.item_name(&reward)
            ));
            state.inventory.push(reward);
        }
        true
    } else {
        out.say("Wrong. Try again.");
        if room_id == state.world.trap_room {
            trigger_trap(out, state);
        }
        false
    }
}
