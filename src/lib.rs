pub mod engine;
pub mod world;

use engine::{
    Command, InputSource, Output, attempt_open_treasure, describe_room, move_player, parse,
    show_help, show_inventory, solve_puzzle, take_item, use_item,
};
use world::{Direction, World};

pub use world::{load_world_from_file, load_world_from_str};

/// The whole mutable state of one session. Owned by the game loop and
/// passed by reference into every action; there is no other state.
pub struct GameState {
    pub world: World,
    pub current_room_id: String,
    /// Item ids in pickup order. Duplicates are not enforced away here;
    /// the world validator keeps placements unique instead.
    pub inventory: Vec<String>,
    /// Incremented once per successful move; doubles as the seed for
    /// every pseudo-random roll.
    pub steps_taken: u64,
    /// Monotonic: once true, `step` refuses to mutate anything further.
    pub game_over: bool,
}

impl GameState {
    pub fn new(world: World) -> Self {
        let current_room_id = world.start_room.clone();
        GameState {
            world,
            current_room_id,
            inventory: Vec::new(),
            steps_taken: 0,
            game_over: false,
        }
    }

    /// Render the starting room, once, before the first prompt.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        describe_room(&mut out, self);
        out
    }

    /// Process a single player input line. Nested prompts (riddle
    /// answers, the chest code) block through `source`. The caller
    /// checks `game_over` after each step.
    pub fn step(&mut self, input: &str, source: &mut dyn InputSource) -> Output {
        let mut out = Output::new();

        if self.game_over {
            return out;
        }

        match parse(input) {
            Command::Empty => {}
            Command::Look => describe_room(&mut out, self),
            Command::Go(None) => {
                out.say("Which way? Try: go north/south/east/west.");
            }
            Command::Go(Some(token)) => match Direction::parse(&token) {
                Some(direction) => {
                    move_player(&mut out, self, direction);
                }
                None => {
                    out.say("Invalid direction. Use north, south, east or west.");
                }
            },
            Command::Take(None) => {
                out.say("Take what? Try: take <item>.");
            }
            Command::Take(Some(item)) => {
                take_item(&mut out, self, &item);
            }
            Command::UseItem(None) => {
                out.say("Use what? Try: use <item>.");
            }
            Command::UseItem(Some(item)) => {
                use_item(&mut out, self, &item);
            }
            Command::Solve => {
                // In the treasure room "solve" means the chest itself.
                if self.current_room_id == self.world.treasure_room {
                    attempt_open_treasure(&mut out, self, source);
                } else {
                    solve_puzzle(&mut out, self, source);
                }
            }
            Command::Inventory => show_inventory(&mut out, self),
            Command::Help => show_help(&mut out),
            Command::Quit => {
                out.say("Thanks for playing! Farewell.");
                self.game_over = true;
            }
            Command::Unknown(verb) => {
                out.say(format!(
                    "Unknown command '{}'. Type 'help' for the list of commands.",
                    verb
                ));
            }
        }

        out
    }
}
