use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use announce::{AudioCache, Error, Model, Synthesizer, Voice, playback, resolve_text};

/// Announce - spoken notifications for assistant hooks
#[derive(Parser)]
#[command(name = "announce", version, about)]
struct Cli {
    /// Text to speak; omit to read hook input from stdin
    text: Option<String>,

    /// Voice preset
    #[arg(long, value_enum, default_value_t = Voice::Alloy)]
    voice: Voice,

    /// TTS model
    #[arg(long, value_enum, default_value_t = Model::Tts1)]
    model: Model,

    /// Generate (or look up) the file but don't play it
    #[arg(long)]
    no_play: bool,

    /// Only check the cache, never call the synthesis API
    #[arg(long)]
    cache_only: bool,

    /// Cache directory override
    #[arg(long, env = "ANNOUNCE_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity; stdout is reserved for result lines
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("announce: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut stdin_data = String::new();
    if cli.text.is_none() {
        tokio::io::stdin().read_to_string(&mut stdin_data).await?;
    }
    let text = resolve_text(cli.text.as_deref(), &stdin_data)?;

    let cache = AudioCache::new(cli.cache_dir.unwrap_or_else(AudioCache::default_dir));
    cache.ensure()?;

    let audio_file = cache.path_for(&text, cli.voice, cli.model);

    if cli.cache_only {
        if !audio_file.exists() {
            return Err(Error::CacheMiss(audio_file).into());
        }

        if !cli.no_play {
            // Lookup mode reports on the cache, not the speakers
            if let Err(e) = playback::play_file(&audio_file).await {
                tracing::warn!("{e}");
            }
        }

        println!("Cache hit: {}", audio_file.display());
        return Ok(());
    }

    if audio_file.exists() {
        tracing::debug!(path = %audio_file.display(), "cache hit");
    } else {
        let synthesizer = Synthesizer::from_env()?;
        synthesizer
            .synthesize_to(&text, cli.voice, cli.model, &audio_file)
            .await?;
    }

    println!("Generated: {}", audio_file.display());

    if !cli.no_play {
        playback::play_file(&audio_file).await?;
        println!("Playback completed");
    }

    Ok(())
}
