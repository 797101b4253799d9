//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::search::SearchQuery;
use crate::domain::session::{Credentials, PasswordChange, ProfileUpdate, Registration};

#[derive(Debug, Parser)]
#[command(name = "anishelf", version)]
#[command(about = "Terminal client for the anime catalog and favorites backend")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Search by title and/or filters
    Search {
        /// Free-text title query
        query: Vec<String>,
        /// Genre id filter
        #[arg(long)]
        genre: Option<u32>,
        /// Release year filter
        #[arg(long)]
        year: Option<u32>,
    },
    /// Title suggestions for a partial query
    Suggest { text: Vec<String> },
    /// Trending titles carousel
    Trending {
        /// Carousel page (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Anime detail with characters
    Show { mal_id: u64 },
    /// Toggle an anime in your favorites
    Favorite { mal_id: u64 },
    /// List your favorites
    Favorites,
    /// Show your profile
    Profile,
    /// Update username and/or avatar
    ProfileEdit {
        #[arg(long)]
        username: Option<String>,
        /// Image file to upload as avatar
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
    /// Change your password
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    /// Show effective merged config
    Config,
}

pub enum CliAction {
    Interactive,
    InspectConfig,
    Login(Credentials),
    Register(Registration),
    Logout,
    Search(SearchQuery),
    Suggest(String),
    Trending { page: usize },
    Show(u64),
    ToggleFavorite(u64),
    Favorites,
    Profile,
    ProfileEdit(ProfileUpdate),
    Password(PasswordChange),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        let Some(command) = self.command else {
            return Ok(CliAction::Interactive);
        };

        Ok(match command {
            Commands::Config => CliAction::InspectConfig,
            Commands::Login { email, password } => {
                CliAction::Login(Credentials { email, password })
            }
            Commands::Register {
                email,
                username,
                password,
            } => CliAction::Register(Registration {
                email,
                username,
                password,
            }),
            Commands::Logout => CliAction::Logout,
            Commands::Search { query, genre, year } => {
                CliAction::Search(SearchQuery::new(&query.join(" "), genre, year))
            }
            Commands::Suggest { text } => CliAction::Suggest(text.join(" ")),
            Commands::Trending { page } => {
                if page == 0 {
                    return Err("--page starts at 1".to_string());
                }
                CliAction::Trending { page }
            }
            Commands::Show { mal_id } => CliAction::Show(mal_id),
            Commands::Favorite { mal_id } => CliAction::ToggleFavorite(mal_id),
            Commands::Favorites => CliAction::Favorites,
            Commands::Profile => CliAction::Profile,
            Commands::ProfileEdit { username, avatar } => {
                if username.is_none() && avatar.is_none() {
                    return Err("nothing to update: pass --username and/or --avatar".to_string());
                }
                CliAction::ProfileEdit(ProfileUpdate { username, avatar })
            }
            Commands::Password {
                current,
                new,
                confirm,
            } => CliAction::Password(PasswordChange {
                current,
                new,
                confirm,
            }),
        })
    }
}
