pub mod aggregator;
pub mod participant_stats;
