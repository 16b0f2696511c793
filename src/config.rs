// src/config.rs
use crate::error::AppError;
use crate::presentation::TabId;
use crate::types::{QuickstartSlug, TemplateName, ValidatedUrl};
use clap::Parser;
use std::path::PathBuf;

/// Environment variable naming a remote catalog endpoint.
const CATALOG_URL_ENV: &str = "QUICKSTART_CATALOG_URL";

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Quickstart slug (e.g. "redis"), or a path to a quickstart JSON document
    pub quickstart: String,

    /// Directory of {slug}.json catalog documents (defaults to ./catalog)
    #[arg(long)]
    pub catalog_dir: Option<String>,

    /// Remote catalog endpoint; overrides --catalog-dir (or set QUICKSTART_CATALOG_URL)
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Path to a related-pages JSON table
    #[arg(long)]
    pub related_pages: Option<String>,

    /// Render only this tab (overview, dashboards, alerts, data-sources)
    #[arg(long)]
    pub tab: Option<String>,

    /// Output file for the rendered page (optional)
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Copy the rendered page to the clipboard
    #[arg(short = 'b', long, default_value_t = false)]
    pub clipboard: bool,

    /// Pipe mode - print the page directly to stdout for piping
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Page template name (a .hbs file under ./templates, or the built-in 'default')
    #[arg(long, default_value = "default")]
    pub template: String,

    /// Print emitted analytics events as JSON lines after rendering
    #[arg(long, default_value_t = false)]
    pub events_json: bool,
}

/// How the quickstart to render was named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickstartInput {
    /// A JSON document on disk, rendered without catalog lookup.
    Document(PathBuf),
    /// A slug, resolved through the configured catalog.
    Slug(QuickstartSlug),
}

/// Resolved pipeline configuration — validated and ready to drive all three
/// stages.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: QuickstartInput,
    pub catalog_dir: PathBuf,
    pub catalog_url: Option<ValidatedUrl>,
    pub related_pages: Option<PathBuf>,
    pub tab: Option<TabId>,
    pub output_file: Option<PathBuf>,
    pub clipboard: bool,
    pub pipe: bool,
    #[allow(dead_code)] // Consumed before resolve(), kept for lib consumers
    pub verbose: bool,
    pub template: TemplateName,
    pub templates_dir: PathBuf,
    pub events_json: bool,
}

impl PipelineConfig {
    /// Resolves a complete pipeline configuration from CLI input and
    /// environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let input = classify_input(&cli.quickstart)?;

        let catalog_url = match cli.catalog_url.or_else(|| std::env::var(CATALOG_URL_ENV).ok()) {
            Some(raw) => Some(ValidatedUrl::parse(&raw)?),
            None => None,
        };

        let tab = cli
            .tab
            .as_deref()
            .map(|raw| raw.parse::<TabId>())
            .transpose()?;

        let template = TemplateName::new(cli.template)?;

        let catalog_dir = cli
            .catalog_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./catalog"));

        if matches!(input, QuickstartInput::Slug(_))
            && catalog_url.is_none()
            && !catalog_dir.is_dir()
        {
            return Err(AppError::MissingConfiguration(format!(
                "no catalog to resolve slugs against: {} does not exist and neither \
                 --catalog-url nor {} is set",
                catalog_dir.display(),
                CATALOG_URL_ENV
            )));
        }

        Ok(PipelineConfig {
            input,
            catalog_dir,
            catalog_url,
            related_pages: cli.related_pages.map(PathBuf::from),
            tab,
            output_file: cli.output_file.map(PathBuf::from),
            clipboard: cli.clipboard,
            pipe: cli.pipe,
            verbose: cli.verbose,
            template,
            templates_dir: PathBuf::from("./templates"),
            events_json: cli.events_json,
        })
    }
}

/// A path-looking argument (or an existing file) is a document; anything
/// else must be a valid slug.
fn classify_input(raw: &str) -> Result<QuickstartInput, AppError> {
    let looks_like_path = raw.ends_with(".json")
        || raw.contains(std::path::MAIN_SEPARATOR)
        || std::path::Path::new(raw).is_file();
    if looks_like_path {
        Ok(QuickstartInput::Document(PathBuf::from(raw)))
    } else {
        Ok(QuickstartInput::Slug(QuickstartSlug::parse(raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_paths_are_documents() {
        let input = classify_input("fixtures/redis.json").unwrap();
        assert!(matches!(input, QuickstartInput::Document(_)));
    }

    #[test]
    fn bare_names_are_slugs() {
        let input = classify_input("aws-lambda").unwrap();
        assert_eq!(
            input,
            QuickstartInput::Slug(QuickstartSlug::parse("aws-lambda").unwrap())
        );
    }

    #[test]
    fn invalid_slugs_are_rejected() {
        assert!(classify_input("Not A Slug").is_err());
    }
}
