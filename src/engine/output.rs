#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    /// Room name header.
    Title(String),
    /// Ordinary message line.
    Text(String),
    /// Random-event line; flushed with visual separation.
    Event(String),
    /// Exit listing; at most one per turn, kept last among non-events.
    Exits(String),
}

impl OutputBlock {
    pub fn text(&self) -> &str {
        match self {
            OutputBlock::Title(s)
            | OutputBlock::Text(s)
            | OutputBlock::Event(s)
            | OutputBlock::Exits(s) => s,
        }
    }
}

/// Buffered turn output. Actions append blocks; the loop (or an input
/// source about to block on a prompt) flushes them to the terminal.
/// Tests assert on the blocks instead of capturing stdout.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // ensure only one Exits block exists
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    /// True if any block contains `needle`. Test helper, mostly.
    pub fn contains(&self, needle: &str) -> bool {
        self.blocks.iter().any(|b| b.text().contains(needle))
    }
}

/// Print and drain the buffered blocks. Titles get a leading blank line,
/// the first event is visually separated from the prose above it.
pub fn flush_to_stdout(out: &mut Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks.drain(..) {
        match block {
            OutputBlock::Title(t) => {
                println!("\n{}", t);
                printed_anything = true;
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!();
                    }
                    started_events = true;
                }
                println!("{}", ev);
                printed_anything = true;
            }
            OutputBlock::Exits(exits) => {
                println!("\n{}", exits);
                printed_anything = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped() {
        let mut out = Output::new();
        out.say("  ");
        out.event("");
        assert!(out.blocks.is_empty());
    }

    #[test]
    fn only_one_exits_block_survives() {
        let mut out = Output::new();
        out.set_exits("Exits: north");
        out.say("hello");
        out.set_exits("Exits: south");
        let exits: Vec<_> = out
            .blocks
            .iter()
            .filter(|b| matches!(b, OutputBlock::Exits(_)))
            .collect();
        assert_eq!(exits.len(), 1);
        assert_eq!(exits[0].text(), "Exits: south");
    }
}
