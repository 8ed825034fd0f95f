use std::fmt;
use std::sync::Arc;

use bimari_core::model::{ServiceSettingsDraft, ServiceSettingsError};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{ENV_DB_URL, settings_draft_from_env};
use services::{AppServices, Clock};
use storage::repository::Storage;
use tracing::info;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://bimaribot.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidTimeout { raw: String },
    Settings(ServiceSettingsError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
            ArgsError::Settings(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  bimaribot [ui] [--db <sqlite_url>] [--predict-url <url>] [--timeout-secs <n>] [--report-dir <dir>]");
    eprintln!("  bimaribot progress [--db <sqlite_url>]");
    eprintln!("  bimaribot reset    [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --predict-url {}", bimari_core::model::DEFAULT_PREDICT_URL);
    eprintln!("  --timeout-secs {}", bimari_core::model::DEFAULT_TIMEOUT_SECS);
    eprintln!("  --report-dir {}", bimari_core::model::DEFAULT_REPORT_DIR);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_DB_URL}, BIMARIBOT_PREDICT_URL, BIMARIBOT_PREDICT_TIMEOUT_SECS,");
    eprintln!("  BIMARIBOT_REPORT_DIR, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Progress,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "progress" => Some(Self::Progress),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    settings: ServiceSettingsDraft,
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
        env_db_url: Option<String>,
        settings: ServiceSettingsDraft,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env_db_url.map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut settings = settings;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                // Service flags only make sense when launching the window.
                "--predict-url" if cmd == Command::Ui => {
                    settings.predict_url = Some(require_value(args, "--predict-url")?);
                }
                "--timeout-secs" if cmd == Command::Ui => {
                    let value = require_value(args, "--timeout-secs")?;
                    let parsed: u64 = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    settings.timeout_secs = Some(parsed);
                }
                "--report-dir" if cmd == Command::Ui => {
                    settings.report_dir = Some(require_value(args, "--report-dir")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, settings })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn parse_command(argv: &mut Vec<String>) -> Result<Option<Command>, ArgsError> {
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => return Ok(None),
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => {
            Command::from_arg(first).ok_or_else(|| ArgsError::UnknownArg(first.to_string()))?
        }
    };

    if argv.first().is_some_and(|first| !first.starts_with("--")) {
        argv.remove(0);
    }
    Ok(Some(cmd))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let Some(cmd) = parse_command(&mut argv).inspect_err(|_| print_usage())? else {
        print_usage();
        return Ok(());
    };

    let mut iter = argv.into_iter();
    let parsed = Args::parse(
        cmd,
        &mut iter,
        std::env::var(ENV_DB_URL).ok(),
        settings_draft_from_env(),
    )
    .inspect_err(|e| {
        eprintln!("{e}");
        print_usage();
    })?;

    // Open + migrate SQLite in the binary glue so the library crates stay storage-agnostic.
    prepare_sqlite_file(&parsed.db_url)?;

    match cmd {
        Command::Ui => {
            let settings = parsed.settings.validate().map_err(ArgsError::Settings)?;
            let services =
                AppServices::new_sqlite(&parsed.db_url, Clock::system(), &settings).await?;
            info!(
                db = %parsed.db_url,
                predict_url = settings.predict_url(),
                timeout_secs = settings.timeout().as_secs(),
                "launching window"
            );

            let app: Arc<dyn UiApp> = Arc::new(services);
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("BIMARIBOT")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Progress => {
            let storage = Storage::sqlite(&parsed.db_url).await?;
            let progress = storage.progress().load().await;
            println!("consultations: {}", progress.count);
            if progress.badges.is_empty() {
                println!("badges: none");
            } else {
                println!("badges:");
                for id in progress.badges.iter() {
                    let definition = id.definition();
                    println!("  {} {} ({id})", definition.icon, definition.title);
                }
            }
            Ok(())
        }
        Command::Reset => {
            let storage = Storage::sqlite(&parsed.db_url).await?;
            storage.progress().clear().await?;
            info!(db = %parsed.db_url, "progress cleared");
            println!("progress cleared");
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // Printed once here; lower layers only propagate.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(cmd: Command, argv: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = argv.iter().map(|s| (*s).to_string());
        Args::parse(cmd, &mut iter, None, ServiceSettingsDraft::default())
    }

    #[test]
    fn subcommand_defaults_to_ui() {
        let mut argv = vec!["--db".to_string(), "x.sqlite3".to_string()];
        assert_eq!(parse_command(&mut argv).unwrap(), Some(Command::Ui));
        assert_eq!(argv.len(), 2);

        let mut argv = vec!["reset".to_string()];
        assert_eq!(parse_command(&mut argv).unwrap(), Some(Command::Reset));
        assert!(argv.is_empty());

        let mut argv = vec!["launch".to_string()];
        assert!(matches!(parse_command(&mut argv), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn ui_flags_override_settings() {
        let args = parse(
            Command::Ui,
            &[
                "--db",
                "sqlite::memory:",
                "--predict-url",
                "http://10.0.0.2:8000/predict",
                "--timeout-secs",
                "5",
            ],
        )
        .unwrap();
        assert_eq!(args.db_url, "sqlite::memory:");
        let settings = args.settings.validate().unwrap();
        assert_eq!(settings.predict_url(), "http://10.0.0.2:8000/predict");
        assert_eq!(settings.timeout().as_secs(), 5);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            parse(Command::Ui, &["--timeout-secs", "soon"]),
            Err(ArgsError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            parse(Command::Ui, &["--db"]),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            parse(Command::Progress, &["--predict-url", "http://x"]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/bimaribot.sqlite3".to_string());
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/bimaribot.sqlite3"));
        assert_eq!(normalize_sqlite_url("sqlite::memory:".to_string()), "sqlite::memory:");
    }
}
