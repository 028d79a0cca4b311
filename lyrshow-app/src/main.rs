mod cli;
mod error;
mod render;

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use lyrshow_core::{
    run_session, Config, EffectsConfig, LyricsCache, SessionOptions, Stopwatch, Timeline,
};
use lyrshow_player::{MusicLibrary, PlayerProcess};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{AddArgs, Cli, Command, PlayArgs, ShowArgs};
use crate::error::{AppError, Result};

/// Extra display time after the last timed line in `lyrshow show`.
const SHOW_TAIL: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr; stdout is the lyrics screen
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_or_create_at(path)?,
        None => Config::load_or_create()?,
    };

    let cancel = CancellationToken::new();
    let ctrlc_token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received Ctrl+C, shutting down");
        ctrlc_token.cancel();
    }) {
        error!("Failed to set Ctrl+C handler: {e}");
    }

    match cli.command {
        Command::Play(args) => cmd_play(&config, &args, cancel).await,
        Command::Show(args) => cmd_show(&config, &args, cancel).await,
        Command::List => cmd_list(&config),
        Command::Add(args) => cmd_add(&config, &args),
    }
}

async fn cmd_play(config: &Config, args: &PlayArgs, cancel: CancellationToken) -> Result<()> {
    let query = args.query.join(" ");
    let library = MusicLibrary::new(config.music_dir());
    let Some(track) = library.resolve(&query)? else {
        return Err(AppError::TrackNotFound {
            query,
            dir: library.dir().to_path_buf(),
        });
    };
    let title = track_title(&track);

    let timeline = if args.audio_only {
        Timeline::default()
    } else {
        load_timeline(config, args, &title)?
    };

    let mode = args.mode.unwrap_or(config.display.mode);
    let options = session_options(config, args.glitch, args.flash);
    let player = PlayerProcess::spawn(&config.player.command, &track)?;
    info!(
        "Playing {} with {} timed lyric lines",
        track.display(),
        timeline.len()
    );

    let mut renderer = render::for_mode(mode, &title);
    let result = run_session(&timeline, player, &mut *renderer, options, cancel).await;
    info!(
        reason = ?result.reason,
        lines_shown = result.lines_shown,
        "Session ended"
    );
    Ok(())
}

async fn cmd_show(config: &Config, args: &ShowArgs, cancel: CancellationToken) -> Result<()> {
    let query = args.query.join(" ");
    let cache = LyricsCache::open(config.lyrics_dir())?;
    let Some((title, content)) = cache.resolve(&query)? else {
        return Err(AppError::LyricsNotFound { query });
    };

    let timeline = parse_lyrics(&content);
    let run_for = timeline
        .lines()
        .last()
        .map_or(Duration::ZERO, |line| line.offset + SHOW_TAIL);
    let mode = args.mode.unwrap_or(config.display.mode);
    let options = session_options(config, args.glitch, args.flash);

    let mut renderer = render::for_mode(mode, &title);
    let result = run_session(
        &timeline,
        Stopwatch::new(run_for),
        &mut *renderer,
        options,
        cancel,
    )
    .await;
    info!(reason = ?result.reason, "Show ended");
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn cmd_list(config: &Config) -> Result<()> {
    let library = MusicLibrary::new(config.music_dir());
    let cache = LyricsCache::open(config.lyrics_dir())?;

    let tracks = library.tracks()?;
    if tracks.is_empty() {
        println!("No tracks in {}", library.dir().display());
    } else {
        println!("Tracks in {}:", library.dir().display());
        for track in &tracks {
            let title = track_title(track);
            let size_mb = fs::metadata(track).map_or(0, |m| m.len()) as f64 / (1024.0 * 1024.0);
            let marker = if cache.contains(&title) { "  [lyrics]" } else { "" };
            println!("  {title} ({size_mb:.2} MB){marker}");
        }
    }

    let titles: HashSet<String> = tracks.iter().map(|track| track_title(track)).collect();
    let orphaned: Vec<String> = cache
        .titles()?
        .into_iter()
        .filter(|title| !titles.contains(title))
        .collect();
    if !orphaned.is_empty() {
        println!("\nCached lyrics without a matching track:");
        for title in orphaned {
            println!("  {title}");
        }
    }
    Ok(())
}

fn cmd_add(config: &Config, args: &AddArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file)?;
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| track_title(&args.file));

    let cache = LyricsCache::open(config.lyrics_dir())?;
    let path = cache.store(&title, &content)?;

    let timeline = Timeline::parse(&content);
    if timeline.is_empty() {
        warn!(
            "{} has no timestamped lines; `show` will display it as plain text",
            args.file.display()
        );
    }
    println!(
        "Stored lyrics for {title:?} at {} ({} timed lines)",
        path.display(),
        timeline.len()
    );
    Ok(())
}

/// Lyrics for the play session: an explicit file wins, then the cache,
/// then none at all.
fn load_timeline(config: &Config, args: &PlayArgs, title: &str) -> Result<Timeline> {
    if let Some(path) = &args.lyrics_file {
        let content = fs::read_to_string(path)?;
        return Ok(parse_lyrics(&content));
    }

    let cache = LyricsCache::open(config.lyrics_dir())?;
    match cache.resolve(title)? {
        Some((_, content)) => Ok(parse_lyrics(&content)),
        None => {
            info!("No cached lyrics for {title:?}; playing without them");
            Ok(Timeline::default())
        }
    }
}

/// Parse LRC content, falling back to plain text when nothing is timestamped.
fn parse_lyrics(content: &str) -> Timeline {
    let timeline = Timeline::parse(content);
    if timeline.is_empty() && !content.trim().is_empty() {
        info!("No timestamps found; treating lyrics as plain text");
        return Timeline::from_plain(content);
    }
    timeline
}

fn session_options(config: &Config, glitch: bool, flash: bool) -> SessionOptions {
    SessionOptions {
        poll_interval: config.poll_interval(),
        effects: EffectsConfig {
            glitch: config.effects.glitch || glitch,
            flash: config.effects.flash || flash,
        },
    }
}

fn track_title(track: &Path) -> String {
    track
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("unknown")
        .to_string()
}
