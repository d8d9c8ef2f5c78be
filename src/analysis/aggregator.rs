use super::participant_stats::{
    rank_from_entries, top_rank, MasteryStats, ParticipantStats, Winrate,
};
use crate::api::client::RiotApiClient;
use crate::api::models::CurrentGameParticipant;
use crate::api::transport::Transport;

/// Builds per-participant stats. Each call failing degrades only its own field.
pub struct ParticipantAggregator<'a, T: Transport> {
    client: &'a RiotApiClient<T>,
}

impl<'a, T: Transport> ParticipantAggregator<'a, T> {
    pub fn new(client: &'a RiotApiClient<T>) -> Self {
        ParticipantAggregator { client }
    }

    pub fn build_stats(&self, participant: &CurrentGameParticipant) -> ParticipantStats {
        let entries = self
            .client
            .get_league_entries(&participant.summoner_id)
            .unwrap_or_else(|e| {
                tracing::warn!(summoner = %participant.summoner_name, error = %e, "rank unavailable");
                Vec::new()
            });

        ParticipantStats {
            summoner_name: participant.summoner_name.clone(),
            team_id: participant.team_id,
            rank: rank_from_entries(&entries),
            winrate: Winrate::from_entries(&entries),
            champion_name: self.champion_name(participant.champion_id),
            mastery: self.mastery(participant),
        }
    }

    // The catalog is fetched again for every participant; nothing is cached.
    fn champion_name(&self, champion_id: i64) -> String {
        let catalog = match self.client.get_champion_data() {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(champion_id, error = %e, "champion catalog unavailable");
                return unknown_champion(champion_id);
            }
        };

        match catalog.name_of(champion_id) {
            Some(name) => name.to_string(),
            None => {
                tracing::warn!(
                    champion_id,
                    version = %self.client.config().ddragon_version,
                    "champion id missing from catalog"
                );
                unknown_champion(champion_id)
            }
        }
    }

    fn mastery(&self, participant: &CurrentGameParticipant) -> MasteryStats {
        let mastery = match self
            .client
            .get_champion_mastery(&participant.summoner_id, participant.champion_id)
        {
            Ok(Some(mastery)) => mastery,
            Ok(None) => return MasteryStats::default(),
            Err(e) => {
                tracing::warn!(summoner = %participant.summoner_name, error = %e, "mastery unavailable");
                return MasteryStats::default();
            }
        };

        let top = self
            .client
            .get_top_masteries(&participant.puuid)
            .unwrap_or_else(|e| {
                tracing::warn!(summoner = %participant.summoner_name, error = %e, "top masteries unavailable");
                Vec::new()
            });

        MasteryStats {
            level: mastery.champion_level,
            points: mastery.champion_points,
            top_rank: top_rank(&top, participant.champion_id),
        }
    }
}

fn unknown_champion(champion_id: i64) -> String {
    format!("Unknown ({})", champion_id)
}
