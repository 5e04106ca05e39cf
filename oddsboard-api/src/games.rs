use crate::{Client, Result};

use serde::{Deserialize, Serialize};

/// A single game between two teams.
///
/// Scores are transmitted as strings and are empty before the game starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub home_team_name: String,
    pub away_team_name: String,
    #[serde(default)]
    pub home_team_score: String,
    #[serde(default)]
    pub away_team_score: String,
    /// The scheduled start time (e.g. `7:00 PM ET`), `Final` or the current quarter.
    pub start_time: String,
    #[serde(default)]
    pub odds: Vec<Odd>,
}

/// The betting lines of a single bookmaker for a [`Game`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Odd {
    pub book_name: String,
    pub home_team_odds: f64,
    pub away_team_odds: f64,
    pub home_team_odds_trend: String,
    pub away_team_odds_trend: String,
    pub home_team_opening_odds: f64,
    pub away_team_opening_odds: f64,
}

#[derive(Copy, Clone, Debug)]
pub struct GamesClient<'a> {
    client: &'a Client,
}

impl<'a> GamesClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns a list of all current [`Game`]s.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds with a non-2xx status.
    pub async fn list(&self) -> Result<Vec<Game>> {
        let req = self.client.request().uri("/sports/games").build();

        self.client.send(req).await?.json().await
    }
}
