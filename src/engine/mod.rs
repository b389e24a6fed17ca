mod events;
mod input;
mod items;
mod movement;
mod output;
mod parser;
mod puzzle;
mod render;
mod rng;
mod treasure;

pub use events::{random_event, trigger_trap};
pub use input::{InputSource, ScriptedInput, StdinInput};
pub use items::{show_inventory, take_item, use_item};
pub use movement::move_player;
pub use output::{Output, OutputBlock, flush_to_stdout};
pub use parser::{Command, parse};
pub use puzzle::solve_puzzle;
pub use render::{describe_room, show_help};
pub use rng::pseudo_random;
pub use treasure::attempt_open_treasure;
