use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::engine::output::{self, Output, OutputBlock};

/// Single seam for every blocking read in the game: the main prompt, the
/// puzzle answer, and the treasure yes/no/code prompts. Implementations
/// must surface any buffered output before blocking, so the player sees
/// the question they are answering.
///
/// `None` means the input stream ended; every caller treats that as an
/// implicit quit, never an error.
pub trait InputSource {
    fn prompt_line(&mut self, out: &mut Output, prompt: &str) -> Option<String>;
}

/// Real terminal input.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn prompt_line(&mut self, out: &mut Output, prompt: &str) -> Option<String> {
        output::flush_to_stdout(out);

        print!("{}", prompt);
        io::stdout().flush().ok();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

/// Canned replies for tests. Flushed blocks are kept in `transcript` so
/// assertions can see everything printed before each prompt; an empty
/// reply queue behaves like end-of-input.
#[derive(Default)]
pub struct ScriptedInput {
    replies: VecDeque<String>,
    pub transcript: Vec<OutputBlock>,
}

impl ScriptedInput {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            replies: replies.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn prompt_line(&mut self, out: &mut Output, _prompt: &str) -> Option<String> {
        self.transcript.append(&mut out.blocks);
        self.replies.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_replays_then_ends() {
        let mut source = ScriptedInput::new(["yes", "echo"]);
        let mut out = Output::new();
        out.say("question?");

        assert_eq!(source.prompt_line(&mut out, "> "), Some("yes".to_string()));
        assert_eq!(source.prompt_line(&mut out, "> "), Some("echo".to_string()));
        assert_eq!(source.prompt_line(&mut out, "> "), None);
        assert!(out.blocks.is_empty(), "prompt should drain the buffer");
        assert_eq!(source.transcript.len(), 1);
    }
}
