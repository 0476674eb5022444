use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{Read, Write};
use std::path::PathBuf;
use teamsync::{
    ConfigPatch, RecordLayout, SessionDocument, TeamApproach, TeamEngine, DEFAULT_MAX_PARTICIPANTS,
};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Form teams from a session's survey responses
#[derive(Parser, Debug)]
#[command(name = "teamsync")]
#[command(about = "Deterministic homogeneous or heterogeneous team formation", long_about = None)]
struct Args {
    /// Session document to read; stdin when omitted or `-`
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the JSON result; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Participant record layout
    #[arg(long, value_enum, default_value_t = RecordLayout::Nested)]
    layout: RecordLayout,

    /// Override the session's team size
    #[arg(long)]
    team_size: Option<usize>,

    /// Override the session's team approach
    #[arg(long)]
    approach: Option<TeamApproach>,

    /// Override the session's similarity threshold
    #[arg(long)]
    threshold: Option<f64>,

    /// Maximum number of participants accepted in one run
    #[arg(long, default_value_t = DEFAULT_MAX_PARTICIPANTS)]
    max_participants: usize,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(args.log_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = read_input(args.input.as_ref())?;
    let document = SessionDocument::from_json_str(&input).context("Failed to parse session document")?;

    let participants = document
        .participants(args.layout)
        .context("Failed to read participant records")?;
    let mut config = document.config().context("Invalid session settings")?;

    let patch = ConfigPatch {
        team_size: args.team_size,
        team_approach: args.approach,
        characteristics: None,
        similarity_threshold: args.threshold,
    };
    if !patch.is_empty() {
        config.apply(patch).context("Invalid settings override")?;
    }

    info!(
        participants = participants.len(),
        team_size = config.team_size,
        approach = %config.team_approach,
        "Forming teams"
    );

    let engine = TeamEngine::new().with_max_participants(args.max_participants);
    let assignment = engine
        .form_teams(&participants, &config)
        .context("Team formation failed")?;

    for warning in &assignment.warnings {
        warn!("{}", warning);
    }
    info!(
        teams = assignment.summary.team_count,
        mean_thi = assignment.summary.mean_thi,
        "Teams formed"
    );

    let rendered = serde_json::to_string_pretty(&assignment)?;
    match &args.output {
        Some(path) => std::fs::write(path, rendered + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
