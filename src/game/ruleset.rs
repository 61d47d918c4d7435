use std::fmt::{self, Display, Formatter};

/// The three incremental versions of the game
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Variant {
    /// Heads leave the window for good, the debug key grows the snake
    Prototype,
    /// Edges wrap around, the debug key ends the game
    Ending,
    /// Edges wrap around, the debug key grows the snake
    Wrapping,
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Prototype => "prototype",
            Variant::Ending => "ending",
            Variant::Wrapping => "wrapping",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DebugAction {
    Grow,
    EndGame,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Ruleset {
    /// Toroidal board, otherwise the head is free to leave it
    pub wrap: bool,
    pub debug_action: DebugAction,
}

impl From<Variant> for Ruleset {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Prototype => Self { wrap: false, debug_action: DebugAction::Grow },
            Variant::Ending => Self { wrap: true, debug_action: DebugAction::EndGame },
            Variant::Wrapping => Self { wrap: true, debug_action: DebugAction::Grow },
        }
    }
}

#[test]
fn test_variant_rulesets() {
    use clap::ValueEnum;

    for variant in Variant::value_variants() {
        let ruleset = Ruleset::from(*variant);
        assert_eq!(ruleset.wrap, *variant != Variant::Prototype);
        assert_eq!(
            ruleset.debug_action == DebugAction::EndGame,
            *variant == Variant::Ending
        );
        let name = variant.to_possible_value().unwrap();
        assert_eq!(name.get_name(), variant.to_string());
    }
}
