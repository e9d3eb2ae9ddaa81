use std::path::PathBuf;

use clap::Parser;
use lavado_lib::model::EntityKind;
use lavado_lib::table::Direction;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "lavado")]
#[command(about = "Browse exported CRM records as a paged table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Record kind in the file: companies, contacts, tasks or deals
    #[arg(value_parser = parse_kind)]
    pub kind: EntityKind,

    /// JSON file holding an array of records
    pub file: PathBuf,

    /// Text filter, repeatable
    #[arg(long = "filter", value_name = "COLUMN=TEXT")]
    pub filters: Vec<String>,

    /// Faceted filter on a set of values, repeatable
    #[arg(long = "facet", value_name = "COLUMN=A,B")]
    pub facets: Vec<String>,

    /// Sort column, optionally suffixed with `:asc` or `:desc`
    #[arg(long, value_name = "COLUMN[:DIR]")]
    pub sort: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the settings file)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Print value counts for a column instead of the table
    #[arg(long, value_name = "COLUMN")]
    pub counts: Option<String>,

    /// Show hidden columns too
    #[arg(long)]
    pub all_columns: bool,

    /// Log level on stderr (defaults to the settings file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Settings file to use instead of the platform default
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

fn parse_kind(value: &str) -> Result<EntityKind, String> {
    EntityKind::parse(value).ok_or_else(|| format!("unknown record kind `{}`", value))
}

fn split_pair<'a>(flag: &str, value: &'a str) -> Result<(&'a str, &'a str), CliError> {
    match value.split_once('=') {
        Some((column, rest)) if !column.trim().is_empty() => Ok((column.trim(), rest)),
        _ => Err(CliError::args(format!(
            "--{} expects COLUMN=VALUE, got `{}`",
            flag, value
        ))),
    }
}

/// `title=beta` -> (`title`, `beta`)
pub fn parse_filter(value: &str) -> Result<(String, String), CliError> {
    let (column, text) = split_pair("filter", value)?;
    Ok((column.to_string(), text.to_string()))
}

/// `status=todo,done` -> (`status`, [`todo`, `done`])
pub fn parse_facet(value: &str) -> Result<(String, Vec<String>), CliError> {
    let (column, list) = split_pair("facet", value)?;
    let values = list
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect();
    Ok((column.to_string(), values))
}

/// `title`, `title:asc` or `title:desc`.
pub fn parse_sort(value: &str) -> Result<(String, Direction), CliError> {
    let (column, direction) = match value.rsplit_once(':') {
        Some((column, "asc")) => (column, Direction::Asc),
        Some((column, "desc")) => (column, Direction::Desc),
        Some(_) => {
            return Err(CliError::args(format!(
                "--sort direction must be `asc` or `desc`, got `{}`",
                value
            )));
        }
        None => (value, Direction::Asc),
    };
    if column.trim().is_empty() {
        return Err(CliError::args("--sort needs a column"));
    }
    Ok((column.trim().to_string(), direction))
}
