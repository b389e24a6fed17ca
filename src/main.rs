use std::env;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process;

use labyrinth::engine::{self, InputSource, Output, StdinInput};
use labyrinth::{GameState, load_world_from_file, load_world_from_str};

/// The world shipped with the game; a path argument overrides it.
const DEFAULT_WORLD: &str = include_str!("../worlds/labyrinth.toml");

fn main() {
    env_logger::init();

    let world = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => match load_world_from_file(&path) {
            Ok(world) => {
                println!("Using world file: {}", path.display());
                world
            }
            Err(e) => {
                eprintln!("Failed to load world file '{}': {e}", path.display());
                process::exit(1);
            }
        },
        None => match load_world_from_str(DEFAULT_WORLD) {
            Ok(world) => world,
            Err(e) => {
                eprintln!("Built-in world is broken: {e}");
                process::exit(1);
            }
        },
    };

    println!("Welcome to {}!", world.name);
    if !world.desc.trim().is_empty() {
        println!("{}", world.desc.trim());
    }

    let mut state = GameState::new(world);
    let mut source = StdinInput;

    let mut out = Output::new();
    engine::show_help(&mut out);
    engine::flush_to_stdout(&mut out);

    let mut out = state.initialize();
    engine::flush_to_stdout(&mut out);

    while !state.game_over {
        let mut prompt_buf = Output::new();
        let Some(line) = source.prompt_line(&mut prompt_buf, "\n> ") else {
            println!("\nInput closed. Farewell.");
            break;
        };

        if line.is_empty() {
            continue;
        }

        // A panic inside a turn must not take the session down with it;
        // report it and keep prompting.
        let turn = panic::catch_unwind(AssertUnwindSafe(|| state.step(&line, &mut source)));

        match turn {
            Ok(mut out) => engine::flush_to_stdout(&mut out),
            Err(_) => {
                eprintln!("Something went wrong on that turn. Try another command.");
            }
        }
    }
}
