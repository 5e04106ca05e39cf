use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use oddsboard_api::{Game, Odd, Prediction};
use yew::prelude::*;

/// A column of the odds table.
///
/// The `field` name doubles as the header template: `home_team` and `away_team` are replaced
/// by the team names.
pub struct Column {
    pub field: &'static str,
    pub value: fn(&Odd) -> String,
}

impl Column {
    /// Returns the header label of this column for a game between `home` and `away`.
    pub fn label(&self, home: &str, away: &str) -> String {
        self.field
            .replacen("home_team", home, 1)
            .replacen("away_team", away, 1)
            .replace('_', " ")
    }
}

pub const COLUMNS: [Column; 7] = [
    Column {
        field: "book_name",
        value: |odd| odd.book_name.clone(),
    },
    Column {
        field: "home_team_odds",
        value: |odd| odd.home_team_odds.to_string(),
    },
    Column {
        field: "away_team_odds",
        value: |odd| odd.away_team_odds.to_string(),
    },
    Column {
        field: "home_team_odds_trend",
        value: |odd| odd.home_team_odds_trend.clone(),
    },
    Column {
        field: "away_team_odds_trend",
        value: |odd| odd.away_team_odds_trend.clone(),
    },
    Column {
        field: "home_team_opening_odds",
        value: |odd| odd.home_team_opening_odds.to_string(),
    },
    Column {
        field: "away_team_opening_odds",
        value: |odd| odd.away_team_opening_odds.to_string(),
    },
];

/// Whether our bet goes with or against the bookmaker's line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BetDirection {
    With,
    Against,
}

impl BetDirection {
    /// Returns the direction of the `prediction` against the `odd`.
    ///
    /// Only the odds are compared: the home team having the higher odds is always `With`, no
    /// matter which team was predicted to win.
    pub fn new(odd: &Odd, _prediction: &Prediction) -> Self {
        if odd.home_team_odds > odd.away_team_odds {
            Self::With
        } else {
            Self::Against
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::With => "WITH",
            Self::Against => "AGAINST",
        }
    }
}

impl Display for BetDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the header labels of the odds table.
///
/// The column headers are omitted if there are no odds at all. "Our bet" is only added for a
/// prediction and does not depend on the odds.
fn header_labels(game: &Game, has_prediction: bool) -> Vec<String> {
    let mut labels: Vec<String> = if game.odds.is_empty() {
        Vec::new()
    } else {
        COLUMNS
            .iter()
            .map(|column| column.label(&game.home_team_name, &game.away_team_name))
            .collect()
    };

    if has_prediction {
        labels.push(String::from("Our bet"));
    }

    labels
}

/// Returns the cells of a single row. The last cell is the bet direction if there is a
/// prediction.
fn row_cells(odd: &Odd, prediction: Option<&Prediction>) -> Vec<String> {
    let mut cells: Vec<String> = COLUMNS.iter().map(|column| (column.value)(odd)).collect();

    if let Some(prediction) = prediction {
        cells.push(BetDirection::new(odd, prediction).to_string());
    }

    cells
}

/// The table of all bookmaker odds of a game.
pub struct OddsTable;

impl Component for OddsTable {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let game = &ctx.props().game;
        let prediction = ctx.props().prediction.as_deref();

        let headers: Html = header_labels(game, prediction.is_some())
            .into_iter()
            .map(|label| {
                html! {
                    <th class="ob-odds-header">{ label }</th>
                }
            })
            .collect();

        let rows: Html = game
            .odds
            .iter()
            .map(|odd| {
                let cells: Html = row_cells(odd, prediction)
                    .into_iter()
                    .map(|cell| {
                        html! {
                            <td class="ob-odds-cell">{ cell }</td>
                        }
                    })
                    .collect();

                html! {
                    <tr class="ob-odds-row">{ cells }</tr>
                }
            })
            .collect();

        html! {
            <div class="ob-odds">
                <table class="ob-odds-table">
                    <thead>
                        <tr>
                            { headers }
                        </tr>
                    </thead>
                    <tbody>
                        { rows }
                    </tbody>
                </table>
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
