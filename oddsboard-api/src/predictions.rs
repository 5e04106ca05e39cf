use crate::games::Game;
use crate::{Client, Result};

use serde::{Deserialize, Serialize};

/// A forecast of the winner of a [`Game`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub home_team_name: String,
    #[serde(default)]
    pub away_team_name: String,
    pub predicted_winner: String,
}

impl Prediction {
    /// Returns `true` if this `Prediction` was made for the given `game`.
    pub fn is_for(&self, game: &Game) -> bool {
        self.home_team_name == game.home_team_name && self.away_team_name == game.away_team_name
    }

    /// Returns the first `Prediction` in `predictions` made for `game`.
    pub fn find<'a>(predictions: &'a [Prediction], game: &Game) -> Option<&'a Prediction> {
        predictions.iter().find(|prediction| prediction.is_for(game))
    }
}

#[derive(Copy, Clone, Debug)]
pub struct PredictionsClient<'a> {
    client: &'a Client,
}

impl<'a> PredictionsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the predictions for all current games.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds with a non-2xx status.
    pub async fn list(&self) -> Result<Vec<Prediction>> {
        let req = self.client.request().uri("/sports/predict/all").build();

        self.client.send(req).await?.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::Prediction;
    use crate::games::Game;

    fn game(home: &str, away: &str) -> Game {
        Game {
            home_team_name: home.to_owned(),
            away_team_name: away.to_owned(),
            home_team_score: String::new(),
            away_team_score: String::new(),
            start_time: String::from("7:00 PM ET"),
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
    fn test_prediction_is_for() {
        let game = game("Lions", "Bears");

        assert!(prediction("Lions", "Bears", "Bears").is_for(&game));
        assert!(!prediction("Bears", "Lions", "Bears").is_for(&game));
        assert!(!prediction("Lions", "Packers", "Lions").is_for(&game));
    }

    #[test]
    fn test_prediction_find() {
        let predictions = [
            prediction("Packers", "Vikings", "Vikings"),
            prediction("Lions", "Bears", "Lions"),
            prediction("Lions", "Bears", "Bears"),
        ];

        let found = Prediction::find(&predictions, &game("Lions", "Bears")).unwrap();
        assert_eq!(found.predicted_winner, "Lions");

        assert!(Prediction::find(&predictions, &game("Jets", "Giants")).is_none());
        assert!(Prediction::find(&[], &game("Lions", "Bears")).is_none());
    }

    #[test]
    fn test_prediction_deserialize() {
        let prediction: Prediction =
            serde_json::from_str(r#"{"predicted_winner":"Lions"}"#).unwrap();

        assert_eq!(prediction.predicted_winner, "Lions");
        assert_eq!(prediction.home_team_name, "");
        assert_eq!(prediction.away_team_name, "");
    }
}
