pub mod icon;
pub mod mipmap;
pub mod text;

pub use crate::icon::IconRenderer;
pub use crate::mipmap::mipmap_ic_launcher;
pub use crate::text::Typeface;

#[cfg(test)]
mod tests {
    use crate::text::{self, Typeface};
    use anyhow::Result;
    use std::path::Path;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    pub fn init_logger() {
        tracing_log::LogTracer::init().ok();
        let env = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "info".to_owned());
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
            .with_env_filter(EnvFilter::new(env))
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    /// Loads the fixed-path system font, or `None` on hosts without it.
    pub fn system_typeface() -> Result<Option<Typeface>> {
        if !Path::new(text::BOLD_FONT).exists() && !Path::new(text::REGULAR_FONT).exists() {
            return Ok(None);
        }
        Ok(Some(Typeface::resolve()?))
    }
}
