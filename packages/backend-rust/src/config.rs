use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use wordjet_algo::{PlannerConfig, DEFAULT_NUM_QUESTIONS, EASE_IN_TURNS, IN_FLIGHT_CARDS};

/// `DATABASE` value that selects the in-memory tally store
pub const MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub database: String,
    pub dictionary_path: PathBuf,
    pub static_dir: Option<PathBuf>,
    pub num_questions: usize,
    pub in_flight_cards: usize,
    pub ease_in_turns: u64,
    pub quiz_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let port = parse_var(&var, "PORT").unwrap_or(3000);

        let host = parse_var(&var, "HOST").unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let log_level = var("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let database = non_empty("DATABASE").unwrap_or_else(|| "db.sqlite".to_string());

        let dictionary_path = non_empty("DICTIONARY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("dictionary.txt"));

        let static_dir = non_empty("STATIC_DIR").map(PathBuf::from);

        Self {
            host,
            port,
            log_level,
            database,
            dictionary_path,
            static_dir,
            num_questions: parse_var(&var, "NUM_QUESTIONS").unwrap_or(DEFAULT_NUM_QUESTIONS),
            in_flight_cards: parse_var(&var, "IN_FLIGHT_CARDS").unwrap_or(IN_FLIGHT_CARDS),
            ease_in_turns: parse_var(&var, "EASE_IN_TURNS").unwrap_or(EASE_IN_TURNS).max(1),
            quiz_seed: parse_var(&var, "QUIZ_SEED"),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::new(self.in_flight_cards, self.ease_in_turns)
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database == MEMORY_DATABASE
    }
}

fn parse_var<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    var(key).and_then(|value| value.trim().parse().ok())
}
