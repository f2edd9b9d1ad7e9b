// src/simulation/mod.rs

pub mod load_parameters;
pub mod csv;
pub mod framework;
pub mod search_cycle;

pub use search_cycle::{
    EpisodeOutcome, EpisodeResult, FixedDelay, NoPacing, SearchCycle, SearchSettings,
    SearchSummary, TickInfo, TickObserver,
};
