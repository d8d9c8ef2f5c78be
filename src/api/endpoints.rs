// URL builders for the Riot platform endpoints and the Data Dragon catalog.
// Query parameters (api key, count) are attached by the client.

const DATA_DRAGON_URL: &str = "https://ddragon.leagueoflegends.com";

fn platform_base(region: &str) -> String {
    format!("https://{}.api.riotgames.com", region)
}

pub fn summoner_by_name(region: &str, summoner_name: &str) -> String {
    format!(
        "{}/lol/summoner/v4/summoners/by-name/{}",
        platform_base(region),
        urlencoding::encode(summoner_name)
    )
}

pub fn league_entries_by_summoner(region: &str, summoner_id: &str) -> String {
    format!(
        "{}/lol/league/v4/entries/by-summoner/{}",
        platform_base(region),
        summoner_id
    )
}

pub fn active_game_by_summoner(region: &str, summoner_id: &str) -> String {
    format!(
        "{}/lol/spectator/v4/active-games/by-summoner/{}",
        platform_base(region),
        summoner_id
    )
}

pub fn mastery_by_champion(region: &str, summoner_id: &str, champion_id: i64) -> String {
    format!(
        "{}/lol/champion-mastery/v4/champion-masteries/by-summoner/{}/by-champion/{}",
        platform_base(region),
        summoner_id,
        champion_id
    )
}

pub fn top_masteries_by_puuid(region: &str, puuid: &str) -> String {
    format!(
        "{}/lol/champion-mastery/v4/champion-masteries/by-puuid/{}/top",
        platform_base(region),
        puuid
    )
}

pub fn champion_catalog(version: &str) -> String {
    format!("{}/cdn/{}/data/en_US/champion.json", DATA_DRAGON_URL, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summoner_name_is_percent_encoded() {
        assert_eq!(
            summoner_by_name("na1", "Doublelift 2"),
            "https://na1.api.riotgames.com/lol/summoner/v4/summoners/by-name/Doublelift%202"
        );
    }

    #[test]
    fn region_selects_platform_host() {
        assert_eq!(
            active_game_by_summoner("euw1", "abc"),
            "https://euw1.api.riotgames.com/lol/spectator/v4/active-games/by-summoner/abc"
        );
        assert_eq!(
            league_entries_by_summoner("kr", "abc"),
            "https://kr.api.riotgames.com/lol/league/v4/entries/by-summoner/abc"
        );
    }

    #[test]
    fn mastery_urls() {
        assert_eq!(
            mastery_by_champion("na1", "sid", 99),
            "https://na1.api.riotgames.com/lol/champion-mastery/v4/champion-masteries/by-summoner/sid/by-champion/99"
        );
        assert_eq!(
            top_masteries_by_puuid("na1", "puuid-1"),
            "https://na1.api.riotgames.com/lol/champion-mastery/v4/champion-masteries/by-puuid/puuid-1/top"
        );
    }

    #[test]
    fn catalog_url_uses_version() {
        assert_eq!(
            champion_catalog("13.24.1"),
            "https://ddragon.leagueoflegends.com/cdn/13.24.1/data/en_US/champion.json"
        );
    }
}
