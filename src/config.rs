//! Server configuration.
//!
//! Every option can be given on the command line or through an `ALBUMS_*`
//! environment variable; the command line wins.

use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "album-store",
    version,
    about = "Serves an in-memory album collection over HTTP"
)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "ALBUMS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, env = "ALBUMS_LOG", default_value = "info")]
    pub log_level: String,

    /// Start with an empty collection instead of the seed albums.
    #[arg(long, env = "ALBUMS_EMPTY")]
    pub empty: bool,
}

#[cfg(test)]
mod tests {
    use super::Config;
    use clap::Parser;
    use std::sync::{Mutex, MutexGuard};

    // Parsing reads ALBUMS_* from the process environment, so tests that parse
    // must not overlap with tests that set those variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_defaults() {
        let _guard = env_guard();
        let config = Config::try_parse_from(["album-store"]).unwrap();

        assert_eq!(config.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(!config.empty);
    }

    #[test]
    fn test_overrides() {
        let _guard = env_guard();
        let config = Config::try_parse_from([
            "album-store",
            "--bind",
            "0.0.0.0:9000",
            "--log-level",
            "debug",
            "--empty",
        ])
        .unwrap();

        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.log_level, "debug");
        assert!(config.empty);
    }

    #[test]
    fn test_rejects_invalid_bind_address() {
        let _guard = env_guard();
        let result = Config::try_parse_from(["album-store", "--bind", "localhost"]);
        assert!(result.is_err(), "bind must be an ip:port pair");
    }

    #[test]
    fn test_environment_is_used_and_command_line_wins() {
        let _guard = env_guard();
        std::env::set_var("ALBUMS_BIND", "0.0.0.0:7000");
        std::env::set_var("ALBUMS_EMPTY", "true");

        let from_env = Config::try_parse_from(["album-store"]);
        let from_args = Config::try_parse_from(["album-store", "--bind", "127.0.0.1:9001"]);

        std::env::remove_var("ALBUMS_BIND");
        std::env::remove_var("ALBUMS_EMPTY");

        let from_env = from_env.unwrap();
        assert_eq!(from_env.bind.to_string(), "0.0.0.0:7000");
        assert!(from_env.empty);

        let from_args = from_args.unwrap();
        assert_eq!(from_args.bind.to_string(), "127.0.0.1:9001");
    }
}
