use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use ux_gui_stream::draw::RecordingContext;
use ux_gui_stream::{Config, RenderTarget, Stream, StreamFile, render_stream};

#[derive(Parser, Debug)]
#[command(name = "uxstream")]
#[command(version, about = "Replay declarative drawing streams against Cairo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a stream file to a PNG image
    Render {
        /// Stream file (TOML)
        stream: PathBuf,

        /// Output PNG path
        #[arg(long, short = 'o', value_name = "PNG")]
        output: PathBuf,

        /// Surface width in pixels (overrides stream file and config)
        #[arg(long)]
        width: Option<i32>,

        /// Surface height in pixels (overrides stream file and config)
        #[arg(long)]
        height: Option<i32>,
    },
    /// Parse and compile a stream file without rendering
    Check {
        /// Stream file (TOML)
        stream: PathBuf,

        /// Print the context calls the stream would make
        #[arg(long)]
        calls: bool,
    },
    /// Write the example config to ~/.config/ux-gui-stream/config.toml
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            stream,
            output,
            width,
            height,
        } => render(&stream, &output, width, height),
        Command::Check { stream, calls } => check(&stream, calls),
        Command::InitConfig => {
            let path = Config::create_default_file()?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

fn load_stream(path: &Path, config: &Config) -> anyhow::Result<(StreamFile, Stream)> {
    let file = StreamFile::load(path)
        .with_context(|| format!("Failed to load stream file {}", path.display()))?;
    let stream = file
        .compile(&config.default_brush())
        .with_context(|| format!("Invalid stream file {}", path.display()))?;
    Ok((file, stream))
}

fn render(
    stream_path: &Path,
    output: &Path,
    width: Option<i32>,
    height: Option<i32>,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let (file, stream) = load_stream(stream_path, &config)?;

    let mut target = RenderTarget::resolve(&file.canvas, &config)?;
    if let Some(width) = width {
        target.width = width;
    }
    if let Some(height) = height {
        target.height = height;
    }

    log::info!(
        "Rendering {} ({} ops) at {}x{}",
        stream_path.display(),
        stream.len(),
        target.width,
        target.height
    );
    let surface = render_stream(&stream, &target)
        .with_context(|| format!("Failed to render {}", stream_path.display()))?;

    let mut png = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    surface
        .write_to_png(&mut png)
        .with_context(|| format!("Failed to write PNG to {}", output.display()))?;

    println!(
        "Rendered {} ops to {} ({}x{})",
        stream.len(),
        output.display(),
        target.width,
        target.height
    );
    Ok(())
}

fn check(stream_path: &Path, print_calls: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let (_, stream) = load_stream(stream_path, &config)?;

    if print_calls {
        let mut ctx = RecordingContext::new();
        stream
            .emit(&mut ctx)
            .with_context(|| format!("Failed to replay {}", stream_path.display()))?;
        for call in ctx.calls() {
            println!("{call:?}");
        }
    }

    println!("{}: {} ops OK", stream_path.display(), stream.len());
    Ok(())
}
