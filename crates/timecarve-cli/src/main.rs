use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "timecarve-cli", version, about = "Timecarve CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a seeded demo session
    Demo {
        #[command(flatten)]
        output: commands::OutputOpts,
    },
    /// Apply a JSON command script to a fresh session
    Run {
        /// Path to a JSON array of commands, or '-' for stdin
        script: String,
        /// Total duration in seconds
        #[arg(long, default_value = "60")]
        duration: f64,
        /// Allow intervals to overlap while editing
        #[arg(long)]
        allow_overlap: bool,
        #[command(flatten)]
        output: commands::OutputOpts,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Demo { output } => commands::demo::run(&output),
        Commands::Run {
            script,
            duration,
            allow_overlap,
            output,
        } => commands::run::run(&script, duration, allow_overlap, &output),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "timecarve-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
