use std::{
    env, fs,
    io::{self, Read},
    process::ExitCode,
    time::Instant,
};

use monkey::{
    display_error,
    lexer::lexer::{tokenize, tokenize_strict},
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: monkey [--strict] [FILE]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut strict = false;
    let mut file_path = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--strict" => strict = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return ExitCode::SUCCESS;
            }
            _ if file_path.is_none() => file_path = Some(arg),
            _ => {
                eprintln!("{}", USAGE);
                return ExitCode::FAILURE;
            }
        }
    }

    let (file_name, source) = match read_source(file_path.as_deref()) {
        Ok(read) => read,
        Err(err) => {
            tracing::error!("failed to read source: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = if strict {
        match tokenize_strict(&source) {
            Ok(tokens) => tokens,
            Err(error) => {
                display_error(&error, &source, &file_name);
                return ExitCode::FAILURE;
            }
        }
    } else {
        tokenize(&source)
    };

    tracing::info!("tokenized {} bytes in {:?}", source.len(), start.elapsed());

    for token in &tokens {
        println!("{}", token);
    }

    ExitCode::SUCCESS
}

fn read_source(path: Option<&str>) -> io::Result<(String, Vec<u8>)> {
    match path {
        Some(path) => {
            let file_name = path.rsplit('/').next().unwrap_or(path).to_string();
            Ok((file_name, fs::read(path)?))
        }
        None => {
            let mut source = vec![];
            io::stdin().lock().read_to_end(&mut source)?;
            Ok((String::from("stdin"), source))
        }
    }
}
