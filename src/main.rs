use std::{
    env,
    fs::read_to_string,
    io::{self, Read},
    path::Path,
    process::exit,
    time::Instant,
};

use stint::{display_error, run_source};

const USAGE: &str = "\
Usage: stint [FILE] [--debug|-d] [--help|-h]

Evaluates FILE, or standard input when no file is given.

Options:
  -d, --debug   Print the program, final value and final environment
  -h, --help    Print this message

Set RUST_LOG (e.g. RUST_LOG=stint=trace) to enable logging on stderr.";

/// Only initialize if RUST_LOG is set
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
            .with(filter)
            .init();
    }
}

fn main() {
    init_tracing();

    let mut debug = false;
    let mut file_path = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-d" | "--debug" => debug = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            _ if arg.starts_with('-') => {
                eprintln!("Unknown option: {}\n\n{}", arg, USAGE);
                exit(2);
            }
            _ if file_path.is_some() => {
                eprintln!("Only one file can be given\n\n{}", USAGE);
                exit(2);
            }
            _ => file_path = Some(arg),
        }
    }

    let (source, file_name) = match &file_path {
        Some(path) => match read_to_string(path) {
            Ok(source) => {
                let file_name = Path::new(path)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
                (source, file_name)
            }
            Err(error) => {
                eprintln!("Failed to read {}: {}", path, error);
                exit(1);
            }
        },
        None => {
            let mut source = String::new();
            if let Err(error) = io::stdin().read_to_string(&mut source) {
                eprintln!("Failed to read standard input: {}", error);
                exit(1);
            }
            (source, None)
        }
    };

    let start = Instant::now();

    match run_source(&source, file_name, debug, io::stdout().lock()) {
        Ok(result) => {
            tracing::debug!(elapsed = ?start.elapsed(), ty = %result.ty, "finished");
        }
        Err(error) => {
            if let Err(write_error) = display_error(&error, &source) {
                tracing::error!(%write_error, %error, "failed to report error");
            }
            exit(1);
        }
    }
}
