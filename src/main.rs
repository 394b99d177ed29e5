use anyhow::Context;
use clap::Parser;
use domain_tracker::utils::datetime::DEFAULT_DATE_FORMAT;
use domain_tracker::utils::{logger, validation::Validate};
use domain_tracker::{
    seed_sample_domains, CliConfig, Clock, DomainStore, ExpiryEngine, FixedClock, OutputFormat,
    ReportRenderer, SearchShell, SystemClock, TomlConfig, TrackerError,
};
use std::io::{self, Write};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting domain-tracker");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let result = match config.now {
        Some(now) => run(&config, &FixedClock(now)),
        None => run(&config, &SystemClock),
    };

    if let Err(e) = result {
        tracing::error!("❌ domain-tracker failed: {:#}", e);

        match e.downcast_ref::<TrackerError>() {
            Some(tracker_error) => {
                eprintln!("❌ {}", tracker_error.user_friendly_message());
                eprintln!("💡 Suggestion: {}", tracker_error.recovery_suggestion());

                let exit_code = tracker_error.exit_code();
                if exit_code > 0 {
                    std::process::exit(exit_code);
                }
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run<C: Clock>(config: &CliConfig, clock: &C) -> anyhow::Result<()> {
    let file = match &config.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load domain file '{}'", path))?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let store = match &file {
        Some(file) => {
            if let Some(title) = file.title() {
                tracing::info!(title, "using domain file");
            }
            file.build_store()
        }
        None => {
            let mut store = DomainStore::new();
            seed_sample_domains(&mut store, clock.now());
            store
        }
    };

    let date_format = config
        .date_format
        .clone()
        .or_else(|| file.as_ref().map(|f| f.display.date_format.clone()))
        .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());
    let format = config
        .format
        .or_else(|| file.as_ref().map(|f| f.display.output_format))
        .unwrap_or_default();

    let engine = ExpiryEngine::new(&store);
    let renderer = ReportRenderer::new(date_format);
    let stdout = io::stdout();

    if format != OutputFormat::Table {
        let mut out = stdout.lock();
        renderer.write_export(&mut out, &engine, clock.now(), format)?;
        out.flush()?;
        return Ok(());
    }

    if let Some(term) = &config.search {
        let mut out = stdout.lock();
        renderer.write_overview(&mut out, &engine, clock.now())?;
        renderer.write_search_results(&mut out, &engine, clock.now(), Some(term))?;
        out.flush()?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut shell = SearchShell::new(stdin.lock(), stdout.lock());
    let rounds = shell.run(&engine, &renderer, clock)?;
    tracing::info!(rounds, "search session finished");
    Ok(())
}
