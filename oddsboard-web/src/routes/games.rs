use std::rc::Rc;

use gloo_timers::callback::Interval;
use oddsboard_api::{Client, Game, Prediction};
use yew::prelude::*;

use crate::components::providers::{ClientProvider, Provider};
use crate::components::GameCard;
use crate::statics::config;
use crate::utils::{BoxError, FetchData};
use crate::Title;

/// Lists all current games with their odds and our predictions.
pub struct GameList {
    games: FetchData<Vec<Entry>>,
    /// A request is in flight.
    pending: bool,
    _refresh: Option<Interval>,
}

impl GameList {
    fn fetch(ctx: &Context<Self>) {
        let client = ClientProvider::take(ctx);

        ctx.link().send_future(async move { Message::Update(load(client).await) });
    }

    /// Marks a refresh as started. Returns `false` if the previous request has not finished
    /// yet.
    fn begin_refresh(&mut self) -> bool {
        if self.pending {
            return false;
        }

        self.pending = true;
        true
    }
}

/// Loads all games and pairs them with the predictions. Failing to load the predictions only
/// drops them.
async fn load(client: Client) -> Result<Vec<Entry>, BoxError> {
    let games = client.games();
    let predictions = client.predictions();

    let (games, predictions) = futures::join!(games.list(), predictions.list());

    let predictions = predictions.unwrap_or_else(|err| {
        log::warn!("Failed to load predictions: {}", err);
        Vec::new()
    });

    Ok(pair(games?, predictions))
}

impl Component for GameList {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Title::set("Games");

        Self::fetch(ctx);

        let refresh = config().refresh_interval().map(|interval| {
            log::debug!("Refreshing games every {}s", interval.as_secs());

            let millis = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
            let link = ctx.link().clone();
            Interval::new(millis, move || link.send_message(Message::Refresh))
        });

        Self {
            games: FetchData::new(),
            pending: true,
            _refresh: refresh,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if let Message::Update(_) = msg {
            self.pending = false;
        }

        match msg {
            Message::Update(Ok(entries)) => {
                log::debug!("Loaded {} games", entries.len());

                self.games = FetchData::from(entries);
                true
            }
            // Keep showing the last games if a refresh failed.
            Message::Update(Err(err)) if self.games.get().is_some() => {
                log::warn!("Failed to refresh games: {}", err);
                false
            }
            Message::Update(Err(err)) => {
                log::error!("Failed to load games: {}", err);

                self.games = FetchData::from_err(err);
                true
            }
            Message::Refresh => {
                if self.begin_refresh() {
                    Self::fetch(ctx);
                } else {
                    log::debug!("Skipping refresh, the last request is still pending");
                }

                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        self.games.render(|entries| {
            if entries.is_empty() {
                return html! {
                    <p class="ob-games-empty">{ "No games scheduled." }</p>
                };
            }

            let cards: Html = entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let key = format!(
                        "{}-{}-{}",
                        index, entry.game.home_team_name, entry.game.away_team_name
                    );

                    html! {
                        <GameCard key={key} game={entry.game.clone()} prediction={entry.prediction.clone()} />
                    }
                })
                .collect();

            html! {
                <div class="ob-games">
                    { cards }
                </div>
            }
        })
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        Title::clear();
    }
}

pub enum Message {
    Update(Result<Vec<Entry>, BoxError>),
    Refresh,
}

/// A game together with its prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub game: Rc<Game>,
    pub prediction: Option<Rc<Prediction>>,
}

/// Pairs each game with the first prediction made for it. Games keep their order.
fn pair(games: Vec<Game>, predictions: Vec<Prediction>) -> Vec<Entry> {
    games
        .into_iter()
        .map(|game| {
            let prediction = Prediction::find(&predictions, &game).cloned().map(Rc::new);

            Entry {
                game: Rc::new(game),
                prediction,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use oddsboard_api::{Client, Game, Prediction};

    use crate::utils::FetchData;

    use super::{load, pair, GameList};

    fn game(home: &str, away: &str) -> Game {
        Game {
            home_team_name: home.to_owned(),
            away_team_name: away.to_owned(),
            home_team_score: String::new(),
            away_team_score: String::new(),
            start_time: String::from("8:15 PM ET"),
            odds: Vec::new(),
        }
    }

    fn prediction(home: &str, away: &str, winner: &str) -> Prediction {
        Prediction {
            home_team_name: home.to_owned(),
            away_team_name: away.to_owned(),
            predicted_winner: winner.to_owned(),
        }
    }

    #[test]
    fn test_pair() {
        let games = vec![
            game("Lions", "Bears"),
            game("Jets", "Giants"),
            game("Packers", "Vikings"),
        ];
        let predictions = vec![
            prediction("Packers", "Vikings", "Packers"),
            prediction("Lions", "Bears", "Bears"),
        ];

        let entries = pair(games, predictions);

        let names: Vec<&str> = entries
            .iter()
            .map(|entry| entry.game.home_team_name.as_str())
            .collect();
        assert_eq!(names, ["Lions", "Jets", "Packers"]);

        let winners: Vec<Option<&str>> = entries
            .iter()
            .map(|entry| {
                entry
                    .prediction
                    .as_ref()
                    .map(|prediction| prediction.predicted_winner.as_str())
            })
            .collect();
        assert_eq!(winners, [Some("Bears"), None, Some("Packers")]);
    }

    #[test]
    fn test_load_is_static() {
        fn assert_static<F: Future + 'static>(_: F) {}

        // Never polled.
        assert_static(load(Client::new("http://localhost")));
    }

    #[test]
    fn test_begin_refresh() {
        let mut list = GameList {
            games: FetchData::new(),
            pending: true,
            _refresh: None,
        };

        // The initial request is still running.
        assert!(!list.begin_refresh());

        list.pending = false;
        assert!(list.begin_refresh());
        assert!(list.pending);

        // A slow refresh is not overlapped by the next tick.
        assert!(!list.begin_refresh());
    }

    #[test]
    fn test_pair_without_predictions() {
        let entries = pair(vec![game("Lions", "Bears")], Vec::new());

        assert_eq!(entries.len(), 1);
        assert!(entries[0].prediction.is_none());
    }
}
