/// Vidshelf - curate and browse a catalog of hosted videos
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidshelf_cli::{
    api::{
        self,
        auth::LoginRequest,
        browse::BrowseRequest,
        playlists::AddPlaylistRequest,
        videos::{AddVideoRequest, PlaylistChange, UpdateVideoRequest},
    },
    config::AppConfig,
    render,
    state::AppState,
};

#[derive(Parser)]
#[command(name = "vidshelf")]
#[command(about = "Curate and browse a catalog of hosted videos", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Keep everything in memory for this run
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the catalog as a visitor sees it
    Browse {
        /// Playlist to open (default: videos without a playlist)
        #[arg(short, long)]
        playlist: Option<String>,
    },
    /// Sign in as admin
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "VIDSHELF_LOGIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show whether an admin is signed in
    Status,
    /// Manage videos (admin)
    #[command(subcommand)]
    Video(VideoCommands),
    /// Manage playlists (admin)
    #[command(subcommand)]
    Playlist(PlaylistCommands),
    /// Move videos whose playlist was deleted back to the default view (admin)
    Repair,
}

#[derive(Subcommand)]
enum VideoCommands {
    /// Add a video
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
        /// Watch link, e.g. https://www.youtube.com/watch?v=<id>
        #[arg(short, long)]
        url: String,
        /// Playlist id
        #[arg(short, long)]
        playlist: Option<String>,
        /// Only visible to a signed-in admin
        #[arg(long)]
        private: bool,
    },
    /// Change fields of a video
    Update {
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        url: Option<String>,
        /// Move to this playlist
        #[arg(short, long, conflicts_with = "unassign")]
        playlist: Option<String>,
        /// Remove from its playlist
        #[arg(long)]
        unassign: bool,
        /// true or false
        #[arg(long)]
        private: Option<bool>,
    },
    /// Delete a video
    Delete { id: String },
    /// List every video
    List,
}

#[derive(Subcommand)]
enum PlaylistCommands {
    /// Add a playlist
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
        #[arg(long)]
        private: bool,
    },
    /// Delete a playlist; its videos become unassigned
    Delete { id: String },
    /// List playlists
    List,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidshelf_cli=info,vidshelf_storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let mut state = AppState::open(&config, cli.ephemeral)?;

    let output = run(&mut state, cli.command)?;
    print!("{output}");

    Ok(())
}

fn run(state: &mut AppState, command: Commands) -> vidshelf_cli::Result<String> {
    let output = match command {
        Commands::Browse { playlist } => {
            let page = api::browse::browse(state, BrowseRequest { playlist })?;
            render::browse_page(&page)
        }
        Commands::Login { username, password } => {
            api::auth::login(state, LoginRequest { username, password })?;
            "Signed in\n".to_string()
        }
        Commands::Logout => {
            api::auth::logout(state)?;
            "Signed out\n".to_string()
        }
        Commands::Status => render::status(api::auth::status(state)),
        Commands::Video(command) => run_video(state, command)?,
        Commands::Playlist(command) => run_playlist(state, command)?,
        Commands::Repair => {
            let admin = state.require_admin()?;
            let moved = api::admin::repair(state, admin)?;
            format!("Moved {moved} video(s) back to the default view\n")
        }
    };
    Ok(output)
}

fn run_video(state: &AppState, command: VideoCommands) -> vidshelf_cli::Result<String> {
    let admin = state.require_admin()?;

    let output = match command {
        VideoCommands::Add {
            title,
            description,
            url,
            playlist,
            private,
        } => {
            let video = api::videos::add(
                state,
                admin,
                AddVideoRequest {
                    title,
                    description,
                    url,
                    playlist,
                    private,
                },
            )?;
            format!("Added video {}\n", video.id)
        }
        VideoCommands::Update {
            id,
            title,
            description,
            url,
            playlist,
            unassign,
            private,
        } => {
            let playlist = match (playlist, unassign) {
                (Some(playlist), _) => PlaylistChange::Assign(playlist),
                (None, true) => PlaylistChange::Unassign,
                (None, false) => PlaylistChange::Keep,
            };
            let video = api::videos::update(
                state,
                admin,
                UpdateVideoRequest {
                    id,
                    title,
                    description,
                    url,
                    playlist,
                    private,
                },
            )?;
            format!("Updated video {}\n", video.id)
        }
        VideoCommands::Delete { id } => {
            if api::videos::delete(state, admin, &id)? {
                format!("Deleted video {id}\n")
            } else {
                format!("No video with id {id}\n")
            }
        }
        VideoCommands::List => render::video_table(&api::videos::list(state, admin)?),
    };
    Ok(output)
}

fn run_playlist(state: &AppState, command: PlaylistCommands) -> vidshelf_cli::Result<String> {
    let output = match command {
        // Listing is part of the public view
        PlaylistCommands::List => render::playlist_table(&api::playlists::list(state)?),
        PlaylistCommands::Add {
            title,
            description,
            private,
        } => {
            let playlist = api::playlists::add(
                state,
                state.require_admin()?,
                AddPlaylistRequest {
                    title,
                    description,
                    private,
                },
            )?;
            format!("Added playlist {}\n", playlist.id)
        }
        PlaylistCommands::Delete { id } => {
            if api::playlists::delete(state, state.require_admin()?, &id)? {
                format!("Deleted playlist {id}; its videos are now unassigned\n")
            } else {
                format!("No playlist with id {id}\n")
            }
        }
    };
    Ok(output)
}
