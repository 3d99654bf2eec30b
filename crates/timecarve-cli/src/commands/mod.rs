pub mod demo;
pub mod run;

use clap::{Args, ValueEnum};
use timecarve_core::export;
use timecarve_core::Session;

#[derive(Args)]
pub struct OutputOpts {
    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: Format,
    /// Also write the text summary to a file
    #[arg(long)]
    pub out: Option<std::path::PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Json,
    Text,
}

/// Print the session in the requested format and optionally write the
/// summary file.
pub fn emit(session: &Session, opts: &OutputOpts) -> Result<(), Box<dyn std::error::Error>> {
    match opts.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(session)?),
        Format::Text => print!("{}", export::render_summary(session)),
    }
    if let Some(path) = &opts.out {
        export::write_summary(session, path)?;
    }
    Ok(())
}
