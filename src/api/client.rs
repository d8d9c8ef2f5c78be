use crate::config::Config;
use crate::display::output::display_status_error;
use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde::de::DeserializeOwned;
use std::thread;

use super::endpoints;
use super::models::*;
use super::transport::{RawResponse, Transport, UreqTransport};

const TOP_MASTERY_COUNT: &str = "5";

/// Receives every non-200 status from [`RiotApiClient::fetch`].
pub type StatusReporter = Box<dyn Fn(&AppError)>;

pub struct RiotApiClient<T: Transport = UreqTransport> {
    config: Config,
    transport: T,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
    status_reporter: StatusReporter,
}

impl RiotApiClient<UreqTransport> {
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> RiotApiClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        let rate_limiter = RateLimiter::direct(Quota::per_second(config.rate_limit_per_second));
        RiotApiClient {
            config,
            transport,
            rate_limiter,
            clock: DefaultClock::default(),
            status_reporter: Box::new(display_status_error),
        }
    }

    /// Replaces the default stdout status printer, e.g. to print around a progress bar.
    pub fn set_status_reporter(&mut self, reporter: impl Fn(&AppError) + 'static) {
        self.status_reporter = Box::new(reporter);
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // Blocks until the limiter hands out a slot. Pacing only, nothing is retried.
    fn wait_for_slot(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }

    /// Signed GET against a Riot platform endpoint. Returns the response whatever its status.
    fn execute_request(&self, url: &str, extra_query: &[(&str, &str)]) -> Result<RawResponse, AppError> {
        self.wait_for_slot();
        tracing::debug!(url, "riot request");

        let mut query: Vec<(&str, &str)> = extra_query.to_vec();
        query.push(("api_key", self.config.api_key.as_str()));

        let response = self.transport.get(url, &query)?;
        tracing::trace!(url, status = response.status, "riot response");
        Ok(response)
    }

    fn decode<D: DeserializeOwned>(body: &str) -> Result<D, AppError> {
        serde_json::from_str(body).map_err(|e| AppError::Json(e.to_string()))
    }

    /// Anything but 200 is printed as `{code}: {description}` and returned as an error.
    pub fn fetch<D: DeserializeOwned>(&self, url: &str, extra_query: &[(&str, &str)]) -> Result<D, AppError> {
        let response = self.execute_request(url, extra_query)?;
        if response.status != 200 {
            let err = AppError::status(response.status);
            (self.status_reporter)(&err);
            return Err(err);
        }
        Self::decode(&response.body)
    }

    /// Like [`fetch`](Self::fetch), but a non-200 status is silently `None`.
    pub fn fetch_optional<D: DeserializeOwned>(
        &self,
        url: &str,
        extra_query: &[(&str, &str)],
    ) -> Result<Option<D>, AppError> {
        let response = self.execute_request(url, extra_query)?;
        if response.status != 200 {
            tracing::debug!(url, status = response.status, "no data");
            return Ok(None);
        }
        Self::decode(&response.body).map(Some)
    }

    pub fn get_summoner_by_name(&self, summoner_name: &str) -> Result<SummonerDto, AppError> {
        let url = endpoints::summoner_by_name(&self.config.region, summoner_name);
        self.fetch(&url, &[]).map_err(|e| match e.status_code() {
            Some(404) => AppError::SummonerNotFound(summoner_name.to_string()),
            _ => e,
        })
    }

    pub fn get_active_game(&self, summoner_id: &str) -> Result<CurrentGameInfo, AppError> {
        let url = endpoints::active_game_by_summoner(&self.config.region, summoner_id);
        self.fetch(&url, &[])
    }

    pub fn get_league_entries(&self, summoner_id: &str) -> Result<Vec<LeagueEntryDto>, AppError> {
        let url = endpoints::league_entries_by_summoner(&self.config.region, summoner_id);
        self.fetch(&url, &[])
    }

    pub fn get_champion_mastery(
        &self,
        summoner_id: &str,
        champion_id: i64,
    ) -> Result<Option<ChampionMasteryDto>, AppError> {
        let url = endpoints::mastery_by_champion(&self.config.region, summoner_id, champion_id);
        self.fetch_optional(&url, &[])
    }

    pub fn get_top_masteries(&self, puuid: &str) -> Result<Vec<ChampionMasteryDto>, AppError> {
        let url = endpoints::top_masteries_by_puuid(&self.config.region, puuid);
        Ok(self
            .fetch_optional(&url, &[("count", TOP_MASTERY_COUNT)])?
            .unwrap_or_default())
    }

    /// Data Dragon is a public CDN: no api key, no rate limit.
    pub fn get_champion_data(&self) -> Result<DataDragonChampions, AppError> {
        let url = endpoints::champion_catalog(&self.config.ddragon_version);
        tracing::debug!(url = url.as_str(), "data dragon request");

        let response = self.transport.get(&url, &[])?;
        if response.status != 200 {
            return Err(AppError::status(response.status));
        }
        Self::decode(&response.body)
    }
}
