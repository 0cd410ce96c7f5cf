use anyhow::Result;
use clap::Parser;
use mipgen::icon::{IconRenderer, BACKGROUND};
use mipgen::mipmap::{self, DPI_FOREGROUND_SIZE, DPI_LABEL, DPI_SIZE};
use mipgen::text::Typeface;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Android resource directory to write mipmap-<dpi> folders into
    #[clap(short, long, default_value = "app/src/main/res")]
    res: PathBuf,
    /// Label rendered onto the icons
    #[clap(short, long, default_value = "Ame")]
    label: String,
    /// Font file to use instead of the system font
    #[clap(short, long)]
    font: Option<PathBuf>,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("MIPGEN_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    let typeface = match &args.font {
        Some(path) => Typeface::open(path)?,
        None => Typeface::resolve()?,
    };
    let renderer = IconRenderer::new(typeface, &args.label, BACKGROUND);
    for ((label, size), foreground_size) in DPI_LABEL.iter().zip(DPI_SIZE).zip(DPI_FOREGROUND_SIZE)
    {
        mipmap::write_density(&renderer, &args.res, label, size, foreground_size)?;
        println!("[{label}] launcher={size}px foreground={foreground_size}px OK");
    }
    println!("Done.");
    Ok(())
}
