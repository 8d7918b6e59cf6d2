use anyhow::Result;
use clap::{Parser, Subcommand};
use familia_infrastructure::FamiliaPaths;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "familia")]
#[command(about = "Familia CLI - avatars, role matching and chat from the terminal", long_about = None)]
struct Cli {
    /// Directory holding config.toml and session.toml (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render and inspect avatars
    Avatar {
        #[command(subcommand)]
        action: AvatarAction,
    },
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the saved session
    Logout,
    /// List members offering a role
    Browse {
        /// Requested role (e.g. sibling, mentor)
        role: Option<String>,
        /// List every member with an offering role instead
        #[arg(long)]
        all: bool,
    },
    /// Run a quick-match search for a partner role
    Match {
        /// Role you are looking for
        role: String,
        /// Role you offer
        #[arg(long, default_value = "friend")]
        as_role: String,
    },
    /// Conversation commands
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// Translate a piece of text
    Translate {
        text: String,
        /// Target language code
        #[arg(long)]
        to: String,
        /// Source language code (detected when omitted)
        #[arg(long)]
        from: Option<String>,
    },
}

#[derive(Subcommand)]
enum AvatarAction {
    /// Print an avatar as SVG
    Render {
        /// JSON avatar config to render
        #[arg(long)]
        config: Option<PathBuf>,
        /// Render a random avatar
        #[arg(long)]
        random: bool,
        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,
    },
    /// List the options of every avatar field
    Catalog,
}

#[derive(Subcommand)]
enum ChatAction {
    /// Follow a conversation, sending each stdin line as a message
    Tail { relationship_id: String },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("familia=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = FamiliaPaths::new(cli.config_dir);

    match cli.command {
        Commands::Avatar { action } => match action {
            AvatarAction::Render {
                config,
                random,
                seed,
            } => commands::avatar::render(config, random, seed)?,
            AvatarAction::Catalog => commands::avatar::catalog(),
        },
        Commands::Login { email, password } => {
            commands::auth::login(&paths, &email, &password).await?
        }
        Commands::Logout => commands::auth::logout(&paths).await?,
        Commands::Browse { role, all } => commands::browse::browse(&paths, role, all).await?,
        Commands::Match { role, as_role } => {
            commands::browse::quick_match(&paths, &as_role, &role).await?
        }
        Commands::Chat { action } => match action {
            ChatAction::Tail { relationship_id } => {
                commands::chat::tail(&paths, &relationship_id).await?
            }
        },
        Commands::Translate { text, to, from } => {
            commands::translate::translate(&paths, &text, from.as_deref(), &to).await?
        }
    }

    Ok(())
}
