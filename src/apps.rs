use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, error::ErrorKind};

use crate::config::RankerConfig;
use crate::constants::apps::RELATED_BIN_NAME;
use crate::corpus::{find_record, load_corpus};
use crate::data::ScoredCandidate;
use crate::dates::parse_published_at;
use crate::errors::RelatedError;
use crate::ranker::Ranker;

#[derive(Debug, Parser)]
#[command(
    name = "related",
    disable_help_subcommand = true,
    about = "List records related to a reference record",
    long_about = "Rank a JSON corpus against one reference record by tag overlap, title similarity, freshness, and category, then print the selected record ids in order.",
    after_help = "Set RUST_LOG=related_content=debug to see per-call ranking diagnostics."
)]
/// CLI for `related`.
///
/// Common usage:
/// - `related --corpus posts.json --id posts/building-a-cache`
/// - Pin the clock for reproducible output: `--now 2025-06-01T00:00:00Z`
/// - Show the score breakdown: `--explain`
struct RelatedCli {
    #[arg(long, value_name = "PATH", help = "JSON array of content records")]
    corpus: PathBuf,
    #[arg(long, value_name = "ID", help = "Id of the reference record")]
    id: String,
    #[arg(
        long = "max-count",
        value_name = "N",
        help = "Maximum number of related records (overrides --config)"
    )]
    max_count: Option<usize>,
    #[arg(long, value_name = "PATH", help = "Optional JSON ranker configuration")]
    config: Option<PathBuf>,
    #[arg(
        long,
        value_name = "TIMESTAMP",
        value_parser = parse_now_arg,
        help = "Reference time as RFC 3339 or YYYY-MM-DD (defaults to the current time)"
    )]
    now: Option<DateTime<Utc>>,
    #[arg(long, help = "Print sub-scores next to each selected id")]
    explain: bool,
}

/// Run the `related` command with `args_iter` (program name excluded).
pub fn run_related_cli<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<RelatedCli, _>(
        std::iter::once(RELATED_BIN_NAME.to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_related(&cli, &mut out)?;
    Ok(())
}

fn write_related(cli: &RelatedCli, out: &mut impl Write) -> Result<(), RelatedError> {
    let mut config = match &cli.config {
        Some(path) => RankerConfig::load(path)?,
        None => RankerConfig::default(),
    };
    if let Some(max_count) = cli.max_count {
        config.max_count = max_count;
    }

    let corpus = load_corpus(&cli.corpus)?;
    let reference = find_record(&corpus, &cli.id)?;
    let now = cli.now.unwrap_or_else(Utc::now);

    let selected = Ranker::new(config).select(reference, &corpus, now);
    for candidate in &selected {
        if cli.explain {
            writeln!(out, "{}", explain_line(candidate))?;
        } else {
            writeln!(out, "{}", candidate.record.id)?;
        }
    }
    Ok(())
}

fn explain_line(candidate: &ScoredCandidate<'_>) -> String {
    format!(
        "{}\ttotal={:.2}\ttags={:.2}\ttitle={:.2}\tfreshness={:.2}\tcategory={:.0}",
        candidate.record.id,
        candidate.total(),
        candidate.tag_match,
        candidate.title_similarity,
        candidate.freshness,
        candidate.category_bonus
    )
}

fn parse_now_arg(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_published_at(raw).ok_or_else(|| {
        format!(
            "Could not parse --now value '{}' as an RFC 3339 timestamp or YYYY-MM-DD date",
            raw
        )
    })
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
