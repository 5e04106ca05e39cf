//! Compile-time constants

pub const TITLE_BASE: &str = "Oddsboard";

/// The prefix of the css classes used for the odds table transition.
pub const ODDS_TRANSITION: &str = "slide-fade";

/// The duration of the odds table transition in milliseconds.
pub const ODDS_TRANSITION_DURATION: u32 = 300;
