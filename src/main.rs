use airport_engine::utils::{logger, validation::Validate};
use airport_engine::{CliConfig, Engine, Request, Response, TomlConfig};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, BufReader, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => TomlConfig::default(),
    };

    if config.logging.json || cli.json_logs {
        logger::init_json_logger(cli.verbose, config.logging.level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, config.logging.level.as_deref());
    }

    tracing::info!("Starting airport-engine");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!(
            "Configuration validation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());

        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    let startup_database = cli.database.clone().or_else(|| config.database.path.clone());
    let mut engine = Engine::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = startup_database {
        let responses = engine.process_event(Request::OpenDatabase { path });
        write_responses(&mut out, &responses)?;
    }

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("Failed to open input '{}'", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for (line_number, line) in input.lines().enumerate() {
        let line = line.context("Failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let responses = match serde_json::from_str::<Request>(&line) {
            Ok(request) => engine.process_event(request),
            Err(e) => {
                tracing::warn!("Ignoring malformed request on line {}: {}", line_number + 1, e);
                vec![Response::Error {
                    message: format!("Malformed request on line {}: {}", line_number + 1, e),
                }]
            }
        };
        write_responses(&mut out, &responses)?;

        if engine.is_terminated() {
            break;
        }
    }

    if !engine.is_terminated() {
        // Input ended without a quit request; release the database anyway.
        engine.process_event(Request::QuitInitiated);
    }

    tracing::info!("airport-engine finished");
    Ok(())
}

fn write_responses<W: Write>(out: &mut W, responses: &[Response]) -> anyhow::Result<()> {
    for response in responses {
        serde_json::to_writer(&mut *out, response)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
