use crate::api::client::RiotApiClient;
use crate::api::models::{CurrentGameInfo, SummonerDto};
use crate::api::transport::Transport;
use crate::error::AppError;
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter summoner name to get game data: ";
const RETRY_MESSAGE: &str = "Something went wrong, please try again.";

pub fn resolve_summoner<T: Transport>(
    client: &RiotApiClient<T>,
    summoner_name: &str,
) -> Result<SummonerDto, AppError> {
    let summoner = client.get_summoner_by_name(summoner_name)?;
    tracing::info!(summoner = %summoner.name, "summoner resolved");
    Ok(summoner)
}

/// Asks for a name until one resolves. `initial` is tried first, without prompting.
/// Ends with [`AppError::InputClosed`] once `input` is exhausted.
pub fn prompt_summoner<T, R, W>(
    client: &RiotApiClient<T>,
    mut initial: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<SummonerDto, AppError>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    loop {
        let name = match initial.take() {
            Some(name) => name,
            None => {
                write!(output, "{}", PROMPT)?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Err(AppError::InputClosed);
                }
                line
            }
        };

        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        match resolve_summoner(client, name) {
            Ok(summoner) => return Ok(summoner),
            Err(e) => {
                tracing::warn!(error = %e, "summoner lookup failed");
                // Status errors were already printed by the client.
                if e.status_code().is_none() && !matches!(e, AppError::SummonerNotFound(_)) {
                    writeln!(output, "{}", e)?;
                }
                writeln!(output, "{}", RETRY_MESSAGE)?;
            }
        }
    }
}

/// A player not currently in a game cannot produce a report, so any failure is fatal.
pub fn active_match<T: Transport>(
    client: &RiotApiClient<T>,
    summoner_id: &str,
) -> Result<CurrentGameInfo, AppError> {
    client.get_active_game(summoner_id).map_err(|e| {
        tracing::warn!(error = %e, "active game lookup failed");
        AppError::NoActiveGame {
            summoner_id: summoner_id.to_string(),
            source: Box::new(e),
        }
    })
}
