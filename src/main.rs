use clap::Parser;
use file_processor::{PromptError, Session};
use std::io;
use tracing::debug;

#[derive(Parser)]
#[command(name = "file-processor")]
#[command(version)]
#[command(about = "Interactively transform the lines of a text file into a new file")]
struct Cli {
    /// Diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_target(cli.verbose >= 2)
        .with_line_number(cli.verbose >= 3)
        .init();

    debug!("file-processor started with verbosity level: {}", cli.verbose);

    let mut session = Session::new(io::stdin().lock(), io::stdout());
    match session.run() {
        Ok(outcome) => {
            debug!(success = outcome.is_success(), "session ended");
            Ok(())
        }
        Err(PromptError::InputClosed) => {
            println!();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
