//! keyinject CLI - embed a terminal payload in an armored OpenPGP key
//!
//! Decodes an ASCII-armored block, prepends a literal data packet carrying
//! the chosen payload, and writes the re-armored result.

use clap::error::ErrorKind as ClapErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process;

use keyinject::designs::{self, Design};
use keyinject::file_ops;
use keyinject::logging::{self, LogFormat, LogLevel};
use keyinject::payload::{PayloadProvider, TextFileProvider};

#[derive(Parser)]
#[command(name = "keyinject")]
#[command(version)]
#[command(about = "Inject terminal art into an armored PGP key.", long_about = None)]
struct Cli {
    /// Path to the armored key to inject into (e.g. original.asc)
    #[arg(short, long, value_name = "FILE", required_unless_present = "list_designs")]
    input: Option<PathBuf>,

    /// Path where the new armored key will be written (e.g. result.asc)
    #[arg(short, long, value_name = "FILE", required_unless_present = "list_designs")]
    output: Option<PathBuf>,

    /// Built-in design to use as payload
    #[arg(short, long, value_enum, conflicts_with = "payload_file")]
    design: Option<Design>,

    /// File whose contents is used as payload instead of a built-in design
    #[arg(short, long, value_name = "FILE")]
    payload_file: Option<PathBuf>,

    /// Optional caption displayed with the payload
    #[arg(short, long, default_value = "")]
    text: String,

    /// Print the built-in designs and exit
    #[arg(long)]
    list_designs: bool,

    /// Diagnostic log level (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Diagnostic log format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format, cli.log_level);

    if cli.list_designs {
        for (name, description) in designs::registry() {
            println!("{:<18} {}", name, description);
        }
        return;
    }

    let provider = get_payload_provider(cli.design, cli.payload_file);
    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        Cli::command()
            .error(
                ClapErrorKind::MissingRequiredArgument,
                "--input and --output are required",
            )
            .exit();
    };

    if let Err(e) = file_ops::inject_file(&input, &output, &cli.text, &*provider) {
        eprintln!("Error: {}", e.chain_message());
        process::exit(1);
    }

    println!("Success! Saved to: {}", output.display());
}

fn get_payload_provider(
    design: Option<Design>,
    payload_file: Option<PathBuf>,
) -> Box<dyn PayloadProvider> {
    match (design, payload_file) {
        (Some(design), _) => Box::new(design),
        (None, Some(path)) => Box::new(TextFileProvider::new(path)),
        (None, None) => Cli::command()
            .error(
                ClapErrorKind::MissingRequiredArgument,
                "one of --design or --payload-file is required",
            )
            .exit(),
    }
}
