use std::error::Error;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, error::ErrorKind};

use crate::config::SuggestConfig;
use crate::fragments::extract_fragments;
use crate::ingestion::{load_goal_catalogue, write_report};
use crate::pipeline::generate;
use crate::source::TextDirectoryPages;

#[derive(Debug, Parser)]
#[command(
    name = "generate_suggestions",
    disable_help_subcommand = true,
    about = "Generate example, teacher-note, and vocabulary suggestions for curriculum goals",
    long_about = "Mine plain-text dumps of the reference documents for relevant sentences, propagate vocabulary across the goal classification, and write one suggestion per goal.",
    after_help = "Document dumps are looked up as <id>.txt or <id without extension>.txt anywhere under --documents; pages are separated by form feeds."
)]
struct GenerateCli {
    #[arg(
        long,
        value_name = "PATH",
        default_value = "data/goals.json",
        help = "Goal catalogue JSON ({\"doelen\": [...]} or a bare array)"
    )]
    goals: PathBuf,
    #[arg(
        long,
        value_name = "DIR",
        default_value = "data/pages",
        help = "Directory holding the plain-text document dumps"
    )]
    documents: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        default_value = "data/suggestions.json",
        help = "Destination of the suggestion report"
    )]
    out: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        help = "Optional JSON run configuration overriding document groups and word lists"
    )]
    config: Option<PathBuf>,
    #[arg(
        long,
        value_parser = parse_positive_usize,
        help = "Override the number of fragments matched per goal"
    )]
    fragments: Option<usize>,
}

/// Run the `generate_suggestions` command with the given arguments (without program name).
pub fn run_generate<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<GenerateCli, _>(
        std::iter::once("generate_suggestions".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => SuggestConfig::from_json_file(path)?,
        None => SuggestConfig::default(),
    };
    if let Some(fragments) = cli.fragments {
        config.fragments_per_goal = fragments;
    }
    config.validate()?;

    let goals = load_goal_catalogue(&cli.goals)?;
    let pages = TextDirectoryPages::open(&cli.documents)?;
    let fragments = extract_fragments(&config.document_groups, &pages, &config.lexicon);

    let output = generate(&goals, &fragments, &config, Local::now().naive_local())?;
    write_report(&cli.out, &output.report)?;

    println!(
        "Wrote {} with {} suggestions",
        cli.out.display(),
        output.report.suggestions.len()
    );
    println!(
        "Fragments matched for {} of {} goals ({:.0}%); vocabulary: {} own, {} propagated, {} empty.",
        output.summary.with_fragments,
        output.summary.goals,
        output.summary.fragment_coverage() * 100.0,
        output.summary.own_vocab,
        output.summary.propagated_vocab,
        output.summary.empty_vocab
    );
    Ok(())
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw.parse::<usize>().map_err(|_| {
        format!(
            "Could not parse --fragments value '{}' as a positive integer",
            raw
        )
    })?;
    if parsed == 0 {
        return Err("--fragments must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<GenerateCli>, Box<dyn Error>> {
        parse_cli::<GenerateCli, _>(
            std::iter::once("generate_suggestions").chain(args.iter().copied()),
        )
    }

    #[test]
    fn defaults_point_at_data_directory() {
        let cli = parse(&[]).unwrap().unwrap();
        assert_eq!(cli.goals, PathBuf::from("data/goals.json"));
        assert_eq!(cli.documents, PathBuf::from("data/pages"));
        assert_eq!(cli.out, PathBuf::from("data/suggestions.json"));
        assert!(cli.config.is_none());
        assert!(cli.fragments.is_none());
    }

    #[test]
    fn fragments_must_be_positive() {
        assert!(parse(&["--fragments", "0"]).is_err());
        assert!(parse(&["--fragments", "abc"]).is_err());
        let cli = parse(&["--fragments", "5"]).unwrap().unwrap();
        assert_eq!(cli.fragments, Some(5));
    }

    #[test]
    fn help_is_printed_not_treated_as_error() {
        assert!(parse(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn parse_positive_usize_rejects_zero() {
        assert_eq!(parse_positive_usize("3"), Ok(3));
        assert!(parse_positive_usize("0").is_err());
    }
}
