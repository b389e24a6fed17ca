use crate::world::Direction;

/// Canonical command, one variant per action the dispatcher knows.
/// Synonyms collapse here so the dispatch itself is a single exhaustive
/// match with no string branching left in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input; the caller treats it as a no-op, not an error.
    Empty,
    Look,
    Go(Option<String>),
    Take(Option<String>),
    UseItem(Option<String>),
    Solve,
    Inventory,
    Help,
    Quit,
    Unknown(String),
}

/// Lowercase and trim, split on whitespace; first token is the verb,
/// second (if present) the argument. Extra tokens are ignored, so
/// multi-word item names cannot be referenced; that limitation is part
/// of the observable behavior and stays.
pub fn parse(raw: &str) -> Command {
    let lower = raw.trim().to_lowercase();
    let mut parts = lower.split_whitespace();

    let Some(verb) = parts.next() else {
        return Command::Empty;
    };
    let argument = parts.next().map(str::to_string);

    canonicalize(verb, argument)
}

fn canonicalize(verb: &str, argument: Option<String>) -> Command {
    match verb {
        "look" | "l" | "survey" => Command::Look,
        "go" | "move" | "walk" => Command::Go(argument),
        "take" | "pick" | "get" => Command::Take(argument),
        "use" | "apply" => Command::UseItem(argument),
        "solve" | "answer" => Command::Solve,
        "inventory" | "items" | "i" => Command::Inventory,
        "help" | "commands" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        // A bare direction token is shorthand for "go <direction>".
        _ if Direction::parse(verb).is_some() => Command::Go(Some(verb.to_string())),
        _ => Command::Unknown(verb.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_input_are_noops() {
        assert_eq!(parse(""), Command::Empty);
        assert_eq!(parse("   \t "), Command::Empty);
    }

    #[test]
    fn verbs_fold_case_and_trim() {
        assert_eq!(parse("  LOOK  "), Command::Look);
        assert_eq!(parse("Go North"), Command::Go(Some("north".to_string())));
    }

    #[test]
    fn synonyms_collapse() {
        for verb in ["take", "pick", "get"] {
            assert_eq!(
                parse(&format!("{verb} torch")),
                Command::Take(Some("torch".to_string()))
            );
        }
        assert_eq!(parse("exit"), Command::Quit);
        assert_eq!(parse("items"), Command::Inventory);
        assert_eq!(parse("answer"), Command::Solve);
    }

    #[test]
    fn bare_directions_become_movement() {
        assert_eq!(parse("north"), Command::Go(Some("north".to_string())));
        assert_eq!(parse("w"), Command::Go(Some("w".to_string())));
    }

    #[test]
    fn extra_tokens_are_ignored() {
        assert_eq!(
            parse("take rusty_key please"),
            Command::Take(Some("rusty_key".to_string()))
        );
    }

    #[test]
    fn missing_argument_is_preserved_as_none() {
        assert_eq!(parse("go"), Command::Go(None));
        assert_eq!(parse("use"), Command::UseItem(None));
    }

    #[test]
    fn unknown_verbs_are_reported_back() {
        assert_eq!(parse("dance"), Command::Unknown("dance".to_string()));
    }
}
