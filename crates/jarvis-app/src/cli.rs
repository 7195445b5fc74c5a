use clap::Parser;
use jarvis_common::ConfigError;
use jarvis_config::schema::JarvisConfig;

/// Jarvis: a terminal-driven AI assistant shell.
#[derive(Parser, Debug)]
#[command(name = "jarvis", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive (e.g. `jarvis=debug`). Overrides `[logging] level`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Assistant reply delay in milliseconds. Overrides
    /// `[conversation] reply_delay_ms`.
    #[arg(long)]
    pub reply_delay_ms: Option<u32>,
}

pub fn parse() -> Args {
    Args::parse()
}

impl Args {
    /// Apply command-line overrides to a loaded config and re-validate.
    /// An invalid override is reverted and reported.
    pub fn apply_overrides(&self, config: &mut JarvisConfig) -> Result<(), ConfigError> {
        let Some(delay) = self.reply_delay_ms else {
            return Ok(());
        };
        let previous = config.conversation.reply_delay_ms;
        config.conversation.reply_delay_ms = delay;
        if let Err(e) = jarvis_config::validation::validate(config) {
            config.conversation.reply_delay_ms = previous;
            return Err(e);
        }
        Ok(())
    }
}
