//! votechain CLI — entry point for running a ballot session.
//!
//! The ledger lives only for the duration of one invocation: ballots are
//! read from a JSON file, screened and sealed, then reported.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use votechain_node::{BallotBox, NodeConfig};
use votechain_types::Vote;
use votechain_utils::LogFormat;

#[derive(Parser)]
#[command(name = "votechain", about = "Proof-of-work sealed vote ledger")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "VOTECHAIN_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "VOTECHAIN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "VOTECHAIN_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Leading zero hex characters required of every block hash.
    #[arg(long, env = "VOTECHAIN_DIFFICULTY")]
    difficulty: Option<u32>,

    /// Deadline for sealing a single ballot, in milliseconds.
    #[arg(long, env = "VOTECHAIN_APPEND_TIMEOUT_MS")]
    append_timeout_ms: Option<u64>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Cast ballots from a JSON file and print the tally.
    Cast {
        /// JSON array of `{"voter": ..., "candidate": ...}` objects.
        #[arg(long)]
        votes: PathBuf,
    },
    /// Cast ballots, then print the whole chain as JSON.
    Export {
        /// JSON array of `{"voter": ..., "candidate": ...}` objects.
        #[arg(long)]
        votes: PathBuf,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => NodeConfig::from_toml_file(path)?,
        None => NodeConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(zeros) = cli.difficulty {
        config.ledger = config.ledger.with_difficulty(zeros);
    }
    if cli.append_timeout_ms.is_some() {
        config.append_timeout_ms = cli.append_timeout_ms;
    }

    votechain_utils::init_tracing(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Cast { votes } => {
            let ballots = run_session(&config, &votes).await?;
            print_summary(&ballots)?;
        }
        Command::Export { votes } => {
            let ballots = run_session(&config, &votes).await?;
            let json = serde_json::to_string_pretty(&ballots.chain())?;
            println!("{json}");
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

fn read_votes(path: &Path) -> anyhow::Result<Vec<Vote>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read votes file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse votes file {}", path.display()))
}

async fn run_session(config: &NodeConfig, votes_path: &Path) -> anyhow::Result<BallotBox> {
    let votes = read_votes(votes_path)?;
    if config.voters.is_empty() {
        tracing::warn!("voter roster is empty; every ballot will be rejected");
    }

    tracing::info!(
        difficulty = %config.ledger.difficulty,
        ballots = votes.len(),
        "Starting ballot session"
    );
    let mut ballots = BallotBox::from_config(config)?;

    for vote in votes {
        match ballots.cast(&vote.voter, &vote.candidate).await {
            Ok(block) => eprintln!(
                "accepted {} -> {} (block #{}, nonce {}, hash {})",
                vote.voter, vote.candidate, block.index, block.nonce, block.hash
            ),
            Err(e) if e.is_rejection() => eprintln!("rejected {}: {e}", vote.voter),
            Err(e) => return Err(e).context(format!("failed to seal ballot from {}", vote.voter)),
        }
    }

    Ok(ballots)
}

fn print_summary(ballots: &BallotBox) -> anyhow::Result<()> {
    let summary = serde_json::json!({
        "tally": ballots.tally(),
        "turnout": ballots.turnout(),
        "blocks": ballots.chain().len(),
        "valid": ballots.validate()?,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "votechain",
            "--difficulty",
            "2",
            "--log-format",
            "json",
            "cast",
            "--votes",
            "votes.json",
        ])
        .unwrap();
        assert_eq!(cli.difficulty, Some(2));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(matches!(cli.command, Command::Cast { .. }));
    }

    #[test]
    fn reads_vote_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"voter":"V001","candidate":"1"}}]"#).unwrap();
        let votes = read_votes(file.path()).unwrap();
        assert_eq!(votes, vec![Vote::new("V001", "1")]);
    }

    #[test]
    fn malformed_votes_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(read_votes(file.path()).is_err());
    }
}
