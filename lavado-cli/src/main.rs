mod args;
mod error;
mod paths;
mod report;
mod settings;

use std::fs::{self, File};

use clap::Parser;
use lavado_lib::model::{Company, Contact, Deal, EntityKind, Task};
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use args::{Cli, parse_facet, parse_filter, parse_sort};
use error::CliError;
use report::Query;
use settings::Settings;

/// Log to stderr at `level` and to the rotated log file at debug.
fn init_logging(level: LevelFilter) -> Result<(), CliError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = paths::log_file() {
        paths::rotate_logs();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| CliError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let file = File::create(&path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

fn build_query(cli: &Cli, settings: &Settings) -> Result<Query, CliError> {
    if cli.page == 0 {
        return Err(CliError::args("--page starts at 1"));
    }
    Ok(Query {
        filters: cli
            .filters
            .iter()
            .map(|f| parse_filter(f))
            .collect::<Result<_, _>>()?,
        facets: cli
            .facets
            .iter()
            .map(|f| parse_facet(f))
            .collect::<Result<_, _>>()?,
        sort: cli.sort.as_deref().map(parse_sort).transpose()?,
        page: cli.page - 1,
        page_size: cli.page_size.unwrap_or(settings.page_size),
        counts: cli.counts.clone(),
        all_columns: cli.all_columns,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    if let Some(level) = &cli.log_level {
        settings.log_level = level.clone();
    }
    init_logging(settings.level_filter()?)?;
    log::debug!("settings: {:?}", settings);

    let query = build_query(&cli, &settings)?;
    let date_format = settings.date_format.as_str();
    let output = match cli.kind {
        EntityKind::Company => report::run::<Company>(&cli.file, &query, date_format)?,
        EntityKind::Contact => report::run::<Contact>(&cli.file, &query, date_format)?,
        EntityKind::Task => report::run::<Task>(&cli.file, &query, date_format)?,
        EntityKind::Deal => report::run::<Deal>(&cli.file, &query, date_format)?,
    };
    println!("{}", output);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
