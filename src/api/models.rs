use serde::Deserialize;
use std::collections::HashMap;

// Summoner V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub puuid: String,
}

// League V4 response, one entry per ranked queue
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct LeagueEntryDto {
    #[serde(default)]
    pub queue_type: String,
    pub tier: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

// Spectator V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameInfo {
    #[serde(default)]
    pub game_id: i64,
    pub participants: Vec<CurrentGameParticipant>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameParticipant {
    #[serde(default)]
    pub summoner_id: String,
    #[serde(default)]
    pub summoner_name: String,
    pub team_id: i64,
    pub champion_id: i64,
    #[serde(default)]
    pub puuid: String,
}

// Champion Mastery V4 response; the top endpoint returns a list of these
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    #[serde(default)]
    pub champion_level: u32,
    #[serde(default)]
    pub champion_points: u64,
}

// Data Dragon champion.json, keyed by internal champion name
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct ChampionInfo {
    pub id: String,
    pub name: String,
    /// Numeric champion id, serialized as a string.
    pub key: String,
}

impl DataDragonChampions {
    pub fn name_of(&self, champion_id: i64) -> Option<&str> {
        self.data
            .values()
            .find(|champion| champion.key.parse::<i64>().ok() == Some(champion_id))
            .map(|champion| champion.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_game_participants_parse_with_riot_field_names() {
        let body = r#"{
            "gameId": 4815162342,
            "gameMode": "CLASSIC",
            "participants": [
                {"summonerId": "s1", "summonerName": "Alpha", "teamId": 100, "championId": 99, "puuid": "p1", "spell1Id": 4},
                {"summonerId": "s2", "summonerName": "Beta", "teamId": 200, "championId": 1, "puuid": "p2"}
            ]
        }"#;
        let game: CurrentGameInfo = serde_json::from_str(body).unwrap();
        assert_eq!(game.game_id, 4815162342);
        assert_eq!(game.participants.len(), 2);
        assert_eq!(game.participants[0].summoner_name, "Alpha");
        assert_eq!(game.participants[0].champion_id, 99);
        assert_eq!(game.participants[1].team_id, 200);
    }

    #[test]
    fn top_mastery_entries_only_need_champion_id() {
        let body = r#"[{"championId":1},{"championId":2},{"championId":99,"championLevel":7}]"#;
        let top: Vec<ChampionMasteryDto> = serde_json::from_str(body).unwrap();
        assert_eq!(top.len(), 3);
        assert_eq!(top[2].champion_level, 7);
        assert_eq!(top[0].champion_points, 0);
    }

    #[test]
    fn catalog_lookup_matches_numeric_key() {
        let body = r#"{"type":"champion","data":{
            "Lux": {"id":"Lux","key":"99","name":"Lux"},
            "MonkeyKing": {"id":"MonkeyKing","key":"62","name":"Wukong"}
        }}"#;
        let catalog: DataDragonChampions = serde_json::from_str(body).unwrap();
        assert_eq!(catalog.name_of(62), Some("Wukong"));
        assert_eq!(catalog.name_of(99), Some("Lux"));
        assert_eq!(catalog.name_of(1), None);
    }
}
