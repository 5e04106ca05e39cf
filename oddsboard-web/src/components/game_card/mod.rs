mod odds_table;

use odds_table::OddsTable;

use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use oddsboard_api::{Game, Prediction};
use yew::prelude::*;

use crate::components::icons::{FaChevronDown, FaChevronRight};
use crate::components::Transition;
use crate::consts::{ODDS_TRANSITION, ODDS_TRANSITION_DURATION};

/// A card showing a single game. Clicking the header shows the odds of all bookmakers.
pub struct GameCard {
    expanded: bool,
}

impl GameCard {
    fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

impl Component for GameCard {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { expanded: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Toggle => {
                self.toggle();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let game = &ctx.props().game;
        let prediction = ctx.props().prediction.clone();

        let onclick = ctx.link().callback(|_| Message::Toggle);

        let caret = if self.expanded {
            html! { <FaChevronDown label="Hide odds" classes="ob-card-caret" /> }
        } else {
            html! { <FaChevronRight label="Show odds" classes="ob-card-caret" /> }
        };

        let score = if has_score(game) {
            let pair = if shows_score_pair(game) {
                html! {
                    <>
                        <span class="ob-card-score">{ game.home_team_score.clone() }</span>
                        <span class="ob-card-score-separator">{ "-" }</span>
                        <span class="ob-card-score">{ game.away_team_score.clone() }</span>
                    </>
                }
            } else {
                html! {}
            };

            html! {
                <div class="ob-card-scores">{ pair }</div>
            }
        } else {
            html! {}
        };

        let status = GameStatus::new(&game.start_time);

        let projected = match &prediction {
            Some(prediction) => html! {
                <div class="ob-card-prediction">{ projected_text(prediction) }</div>
            },
            None => html! {},
        };

        let result = if shows_winner(game) {
            html! {
                <div class="ob-card-winner">{ winner_text(game) }</div>
            }
        } else {
            html! {}
        };

        html! {
            <div class="ob-card">
                <h5 class="ob-card-header" {onclick} aria-expanded={self.expanded.to_string()}>
                    { caret }
                    { format!("{} vs {}", game.home_team_name, game.away_team_name) }
                </h5>
                { score }
                <div class="ob-card-status">{ status.to_string() }</div>
                { projected }
                { result }
                <Transition show={self.expanded} name={ODDS_TRANSITION} duration={ODDS_TRANSITION_DURATION}>
                    <OddsTable game={game.clone()} {prediction} />
                </Transition>
            </div>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub game: Rc<Game>,
    #[prop_or_default]
    pub prediction: Option<Rc<Prediction>>,
}

pub enum Message {
    Toggle,
}

/// The state of a game, derived from its status text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus<'a> {
    /// The game has not started yet. Contains the start time.
    Scheduled(&'a str),
    Final(&'a str),
    /// The game is running. Contains the current quarter.
    InProgress(&'a str),
}

impl<'a> GameStatus<'a> {
    pub fn new(status: &'a str) -> Self {
        if status.contains("ET") {
            Self::Scheduled(status)
        } else if status.contains("Final") {
            Self::Final(status)
        } else {
            Self::InProgress(status)
        }
    }
}

impl<'a> Display for GameStatus<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduled(time) => write!(f, "Starting @ {}", time),
            Self::Final(status) => f.write_str(status),
            Self::InProgress(quarter) => write!(f, "Current Quarter: {}", quarter),
        }
    }
}

/// Returns the name of the team with the higher score.
///
/// The away team wins ties and games with scores that are not numbers.
pub fn winner(game: &Game) -> &str {
    match (
        parse_score(&game.home_team_score),
        parse_score(&game.away_team_score),
    ) {
        (Some(home), Some(away)) if home > away => &game.home_team_name,
        _ => &game.away_team_name,
    }
}

/// Returns `true` if the winner line is shown. This only depends on `Final`, even when the
/// status text is shown as a start time.
fn shows_winner(game: &Game) -> bool {
    game.start_time.contains("Final")
}

fn projected_text(prediction: &Prediction) -> String {
    format!("Our Projected Winner: {}", prediction.predicted_winner)
}

fn winner_text(game: &Game) -> String {
    format!("Winner: {}", winner(game))
}

/// Returns `true` if at least one team has a score.
fn has_score(game: &Game) -> bool {
    !game.home_team_score.is_empty() || !game.away_team_score.is_empty()
}

/// Returns `false` if both scores are exactly `"0"`.
fn shows_score_pair(game: &Game) -> bool {
    game.away_team_score != "0" || game.home_team_score != "0"
}

/// Parses the leading integer of a score, ignoring leading whitespace and any trailing
/// characters. A `0x` prefix reads the digits as hexadecimal. Returns `None` if the score does
/// not start with a number.
fn parse_score(score: &str) -> Option<f64> {
    let score = score.trim_start();

    let (sign, digits) = match score.as_bytes().first() {
        Some(b'-') => (-1.0, &score[1..]),
        Some(b'+') => (1.0, &score[1..]),
        _ => (1.0, score),
    };

    let (radix, digits) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        _ => (10, digits),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());

    if end == 0 {
        return None;
    }

    let value = digits[..end]
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit));

    Some(sign * value)
}

#[cfg(test)]
mod tests {
    use oddsboard_api::{Game, Prediction};

    use super::{
        has_score, parse_score, projected_text, shows_score_pair, shows_winner, winner,
        winner_text, GameCard, GameStatus,
    };

    fn game(home_score: &str, away_score: &str, status: &str) -> Game {
        Game {
            home_team_name: String::from("Lions"),
            away_team_name: String::from("Bears"),
            home_team_score: home_score.to_owned(),
            away_team_score: away_score.to_owned(),
            start_time: status.to_owned(),
            odds: Vec::new(),
        }
    }

    #[test]
    fn test_winner() {
        assert_eq!(winner(&game("10", "7", "Final")), "Lions");
        assert_eq!(winner(&game("3", "10", "Final")), "Bears");
    }

    #[test]
    fn test_winner_tie() {
        assert_eq!(winner(&game("5", "5", "Final")), "Bears");
    }

    #[test]
    fn test_winner_not_a_number() {
        assert_eq!(winner(&game("abc", "7", "Final")), "Bears");
        assert_eq!(winner(&game("10", "", "Final")), "Bears");
        assert_eq!(winner(&game("", "", "Final")), "Bears");
        assert_eq!(winner(&game("12abc", " 3", "Final")), "Lions");
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("10"), Some(10.0));
        assert_eq!(parse_score("  7"), Some(7.0));
        assert_eq!(parse_score("12abc"), Some(12.0));
        assert_eq!(parse_score("-3"), Some(-3.0));
        assert_eq!(parse_score("+4"), Some(4.0));
        assert_eq!(parse_score("3.9"), Some(3.0));
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("-"), None);
        assert_eq!(parse_score("abc"), None);
    }

    #[test]
    fn test_parse_score_hex() {
        assert_eq!(parse_score("0x1A"), Some(26.0));
        assert_eq!(parse_score("0XfF"), Some(255.0));
        assert_eq!(parse_score("-0x10"), Some(-16.0));
        assert_eq!(parse_score("0x1Ag"), Some(26.0));
        assert_eq!(parse_score("0x"), None);
        assert_eq!(parse_score("0xg"), None);

        assert_eq!(winner(&game("0x1A", "20", "Final")), "Lions");
    }

    #[test]
    fn test_score_guards() {
        let both_zero = game("0", "0", "Q1 15:00");
        assert!(has_score(&both_zero));
        assert!(!shows_score_pair(&both_zero));

        let one_zero = game("0", "1", "Q1 12:00");
        assert!(has_score(&one_zero));
        assert!(shows_score_pair(&one_zero));

        // Only one of the scores has to differ from "0".
        assert!(shows_score_pair(&game("7", "0", "Q2 1:00")));

        let empty = game("", "", "7:00 PM ET");
        assert!(!has_score(&empty));

        assert!(has_score(&game("", "3", "Q1 2:00")));
    }

    #[test]
    fn test_game_status() {
        assert_eq!(
            GameStatus::new("7:00 PM ET").to_string(),
            "Starting @ 7:00 PM ET"
        );
        assert_eq!(GameStatus::new("Final").to_string(), "Final");
        assert_eq!(GameStatus::new("Final/OT").to_string(), "Final/OT");
        assert_eq!(
            GameStatus::new("Q3 2:15").to_string(),
            "Current Quarter: Q3 2:15"
        );
    }

    #[test]
    fn test_game_status_start_time_first() {
        assert_eq!(
            GameStatus::new("Final - 10:00 PM ET"),
            GameStatus::Scheduled("Final - 10:00 PM ET")
        );
    }

    #[test]
    fn test_shows_winner() {
        assert!(shows_winner(&game("10", "7", "Final")));
        assert!(shows_winner(&game("10", "7", "Final/OT")));
        assert!(!shows_winner(&game("", "", "7:00 PM ET")));
        assert!(!shows_winner(&game("3", "0", "Q4 0:30")));

        // Shown as a start time, but the game is still over.
        assert!(shows_winner(&game("10", "7", "Final - 10:00 PM ET")));
    }

    #[test]
    fn test_winner_text() {
        assert_eq!(winner_text(&game("10", "7", "Final")), "Winner: Lions");
        assert_eq!(winner_text(&game("7", "7", "Final")), "Winner: Bears");
    }

    #[test]
    fn test_projected_text() {
        let prediction = Prediction {
            home_team_name: String::from("Lions"),
            away_team_name: String::from("Bears"),
            predicted_winner: String::from("Bears"),
        };

        assert_eq!(projected_text(&prediction), "Our Projected Winner: Bears");
    }

    #[test]
    fn test_toggle() {
        let mut card = GameCard { expanded: false };

        card.toggle();
        assert!(card.expanded);

        card.toggle();
        assert!(!card.expanded);
    }
}
