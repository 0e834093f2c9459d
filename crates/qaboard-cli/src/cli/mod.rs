//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use qaboard_core::api::ApiClient;
use qaboard_core::config::{self, Config};
use qaboard_core::logging::{self, LogTarget};
use qaboard_core::session::Session;
use tracing::{debug, warn};

mod commands;

#[derive(Parser)]
#[command(name = "qaboard")]
#[command(version = "0.1")]
#[command(about = "Terminal client for the Q&A board")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backend base URL (overrides the config file)
    #[arg(long, env = "QABOARD_BASE_URL", global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Bearer token for asking, answering and voting (default: guest)
    #[arg(
        long,
        env = "QABOARD_TOKEN",
        global = true,
        hide_env_values = true,
        value_name = "TOKEN"
    )]
    token: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print all questions with their answers
    Questions {
        /// Print the raw JSON list instead
        #[arg(long)]
        json: bool,
    },

    /// Log in and print the access token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Ask a question
    Ask {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },

    /// Answer a question
    Answer {
        /// The ID of the question to answer
        #[arg(value_name = "QUESTION_ID")]
        question_id: String,
        #[arg(long)]
        content: String,
    },

    /// Upvote a question or an answer
    Vote {
        #[arg(value_enum)]
        kind: commands::vote::VoteTarget,
        /// The ID of the question or answer
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Questions { .. } => "questions",
            Commands::Login { .. } => "login",
            Commands::Signup { .. } => "signup",
            Commands::Ask { .. } => "ask",
            Commands::Answer { .. } => "answer",
            Commands::Vote { .. } => "vote",
            Commands::Config { .. } => "config",
        }
    }
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Config commands must work even when the existing file is broken.
    match cli.command {
        Some(Commands::Config { command }) => run_config(&command),
        command => run_with_backend(command, cli.base_url.as_deref(), cli.token),
    }
}

fn run_with_backend(
    command: Option<Commands>,
    base_url: Option<&str>,
    token: Option<String>,
) -> Result<()> {
    let config = Config::load()
        .context("load config")?
        .with_base_url(base_url)
        .context("apply --base-url")?;

    // The board owns the terminal, so its diagnostics go to a file.
    let (target, fallback) = match command {
        None => (LogTarget::File(config::paths::logs_dir()), "info"),
        Some(_) => (LogTarget::Stderr, "warn"),
    };
    let _log_guard = logging::init(config.log_filter.as_deref(), fallback, target)?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let name = command.as_ref().map_or("board", Commands::name);
    let result =
        rt.block_on(async move { dispatch(command, config, Session::from_token(token)).await });
    if let Err(err) = &result {
        warn!(command = name, "command failed: {err:#}");
    }
    result
}

async fn dispatch(command: Option<Commands>, config: Config, session: Session) -> Result<()> {
    debug!(
        command = command.as_ref().map_or("board", Commands::name),
        base_url = %config.base_url,
        logged_in = session.is_logged_in(),
        "dispatching"
    );
    // default to the interactive board
    let Some(command) = command else {
        return commands::board::run(&config, session).await;
    };

    let client = ApiClient::new(&config.base_url);
    match command {
        Commands::Questions { json } => commands::questions::run(&client, json).await,
        Commands::Login { email, password } => {
            commands::auth::login(&client, &email, &password).await
        }
        Commands::Signup { email, password } => {
            commands::auth::signup(&client, &email, &password).await
        }
        Commands::Ask { title, content } => {
            commands::ask::run(&client, &title, &content, &session).await
        }
        Commands::Answer {
            question_id,
            content,
        } => commands::answer::run(&client, &question_id, &content, &session).await,
        Commands::Vote { kind, id } => commands::vote::run(&client, kind, &id, &session).await,
        Commands::Config { command } => run_config(&command),
    }
}

fn run_config(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            commands::config::path();
            Ok(())
        }
        ConfigCommands::Init => commands::config::init(),
    }
}
