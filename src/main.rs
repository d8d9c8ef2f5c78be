mod analysis;
mod api;
mod config;
mod display;
mod error;
mod logging;
mod lookup;

use analysis::aggregator::ParticipantAggregator;
use anyhow::Context;
use api::client::RiotApiClient;
use clap::Parser;
use config::Config;
use display::output::{
    display_banner, display_error, display_info, display_report, display_status_error,
    display_success,
};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser, Debug)]
#[command(name = "Sightstone")]
#[command(about = "Rank, winrate and mastery for everyone in a summoner's live game", long_about = None)]
struct Args {
    /// Summoner name to look up first (prompted for when omitted or not found)
    summoner_name: Option<String>,

    /// Platform region, e.g. na1, euw1 (default: RIOT_REGION or na1)
    #[arg(short, long)]
    region: Option<String>,

    /// Data Dragon client version for champion names (default: DDRAGON_VERSION or 13.24.1)
    #[arg(long)]
    ddragon_version: Option<String>,
}

fn main() {
    logging::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }
    if let Some(version) = args.ddragon_version {
        config.ddragon_version = version;
    }
    tracing::debug!(?config, "configuration loaded");

    display_banner();

    let mut client = RiotApiClient::new(config);

    let stdin = std::io::stdin();
    let summoner = lookup::prompt_summoner(
        &client,
        args.summoner_name,
        &mut stdin.lock(),
        &mut std::io::stdout(),
    )
    .context("no summoner selected")?;
    display_success(&format!("Found summoner {}", summoner.name));

    let game = lookup::active_match(&client, &summoner.id)?;
    tracing::info!(game_id = game.game_id, participants = game.participants.len(), "active game found");

    display_info("This may take a moment, please wait...");

    let pb = ProgressBar::new(game.participants.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Fetching participant stats");

    // Status lines go to stdout while the bar draws on stderr.
    let bar = pb.clone();
    client.set_status_reporter(move |e| bar.suspend(|| display_status_error(e)));

    let aggregator = ParticipantAggregator::new(&client);
    let mut stats = Vec::with_capacity(game.participants.len());
    for participant in &game.participants {
        stats.push(aggregator.build_stats(participant));
        pb.inc(1);
    }
    pb.finish_and_clear();

    display_report(&stats);

    Ok(())
}
