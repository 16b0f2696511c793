// src/main.rs

// Modules defined in the crate
mod analytics;
mod catalog;
mod config;
mod constants;
mod error;
mod formatting;
mod model;
mod output;
mod pipeline;
mod presentation;
mod types;

// Specific imports
use crate::analytics::{BufferingSink, EventSink, LogSink};
use crate::catalog::{
    classify, load_related_pages, related_resources_for, FileCatalogSource, HttpCatalogSource,
    RelatedResourceTable,
};
use crate::config::{CommandLineInput, PipelineConfig, QuickstartInput};
use crate::error::AppError;
use crate::formatting::{
    compose_error_page, compose_single_section, render_detail_page, render_page,
};
use crate::model::QuickstartRecord;
use crate::output::{deliver, DeliveryPlan, DeliveryReport, DeliveryTarget};
use crate::pipeline::{PageComposer, PageDelivery, QuickstartSource};
use crate::presentation::{page_metadata, TabController};
use crate::types::RenderedPage;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("quickstart2page.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage pipeline: resolve → compose → deliver.
async fn execute_pipeline(config: &PipelineConfig) -> Result<(), AppError> {
    let buffer = config
        .events_json
        .then(|| Arc::new(BufferingSink::new()));
    let sink: Arc<dyn EventSink> = match &buffer {
        Some(buffer) => buffer.clone(),
        None => Arc::new(LogSink),
    };

    let related_table = config
        .related_pages
        .as_deref()
        .map(load_related_pages)
        .transpose()?;

    let pipeline = QuickstartToPage::new(config, sink, related_table);

    let record = match pipeline.resolve_record().await {
        Ok(record) => record,
        // The one page-facing failure: render the singular error view
        // instead of the detail page, with nothing partial.
        Err(e) if e.is_missing_quickstart() => {
            log::warn!("{}", e);
            let report = pipeline.deliver(compose_error_page())?;
            pipeline.report_error_page(&report);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let page = pipeline.compose(&record)?;
    let report = pipeline.deliver(page)?;
    pipeline.report_completion(&record, &report)?;

    if let Some(buffer) = buffer {
        for event in buffer.drain() {
            println!("{}", serde_json::to_string(&event)?);
        }
    }

    Ok(())
}

/// Orchestrates the resolution, composition, and delivery of one detail page.
struct QuickstartToPage<'a> {
    config: &'a PipelineConfig,
    sink: Arc<dyn EventSink>,
    related_table: Option<RelatedResourceTable>,
}

impl<'a> QuickstartToPage<'a> {
    fn new(
        config: &'a PipelineConfig,
        sink: Arc<dyn EventSink>,
        related_table: Option<RelatedResourceTable>,
    ) -> Self {
        Self {
            config,
            sink,
            related_table,
        }
    }

    /// Resolves the record from whichever input shape the CLI received.
    async fn resolve_record(&self) -> Result<QuickstartRecord, AppError> {
        match &self.config.input {
            QuickstartInput::Document(path) => {
                log::info!("Reading quickstart document {}", path.display());
                FileCatalogSource::read_document(path).await
            }
            QuickstartInput::Slug(slug) => self.resolve(slug).await,
        }
    }

    /// Delivers the rendered page to configured outputs (file, clipboard, stdout).
    fn deliver_page(&self, page: RenderedPage) -> Result<DeliveryReport, AppError> {
        let content = page.into_string();
        let mut plan = DeliveryPlan::new();

        if self.config.pipe {
            plan = plan.with_target(DeliveryTarget::PrintToStdout {
                content: content.clone(),
            });
        } else {
            if let Some(output_path) = &self.config.output_file {
                plan = plan.with_target(DeliveryTarget::WriteFile {
                    path: output_path.clone(),
                    content: content.clone(),
                });
            }

            if self.config.clipboard {
                plan = plan.with_target(DeliveryTarget::CopyToClipboard { content });
            }
        }

        let report = deliver(plan)?;

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }

        Ok(report)
    }

    /// Reports completion to the user with bucket counts and delivery
    /// confirmations.
    fn report_completion(
        &self,
        record: &QuickstartRecord,
        report: &DeliveryReport,
    ) -> Result<(), AppError> {
        if self.config.pipe {
            return Ok(());
        }

        let quickstart = classify(record);
        let dropped =
            record.metadata.quickstart_components.len() - quickstart.classified_len();
        if dropped > 0 {
            eprintln!(
                "⚠️  {} component(s) had unrecognized kinds and were not rendered.",
                dropped
            );
        }

        println!(
            "📄 Rendered '{}': {} dashboards, {} alerts, {} data sources.",
            quickstart.display_name,
            quickstart.dashboards.len(),
            quickstart.alerts.len(),
            quickstart.documentation.len()
        );

        self.report_deliveries(report);

        if report.delivered.is_empty() {
            println!("✓ Page rendered (no output file or clipboard requested).");
        }

        Ok(())
    }

    fn report_error_page(&self, report: &DeliveryReport) {
        if self.config.pipe {
            return;
        }
        println!("📄 Rendered the quickstart-not-found page.");
        self.report_deliveries(report);
    }

    fn report_deliveries(&self, report: &DeliveryReport) {
        for delivered in &report.delivered {
            match delivered {
                DeliveryTarget::WriteFile { path, .. } => {
                    println!("✓ Page saved to {}", path.display());
                }
                DeliveryTarget::CopyToClipboard { .. } => {
                    println!("✓ Page copied to clipboard");
                }
                _ => {}
            }
        }
    }
}

#[async_trait::async_trait]
impl QuickstartSource for QuickstartToPage<'_> {
    async fn resolve(&self, slug: &types::QuickstartSlug) -> Result<QuickstartRecord, AppError> {
        log::info!("Resolving quickstart '{}'", slug);

        match &self.config.catalog_url {
            Some(base) => {
                HttpCatalogSource::new(base.clone())
                    .resolve(slug)
                    .await
            }
            None => {
                FileCatalogSource::new(&self.config.catalog_dir)
                    .resolve(slug)
                    .await
            }
        }
    }
}

impl PageComposer for QuickstartToPage<'_> {
    fn compose(&self, record: &QuickstartRecord) -> Result<RenderedPage, AppError> {
        let templates_dir = Some(self.config.templates_dir.as_path());

        if let Some(tab) = self.config.tab {
            // A focused view is a real tab activation: the controller moves
            // to the tab and the navigation event fires.
            let mut controller = TabController::new(
                classify(record),
                record.quickstart_url(),
                self.sink.clone(),
            );
            controller.activate(tab);

            let body = compose_single_section(record, tab);
            let metadata = page_metadata(record);
            return render_page(&body, &metadata, &self.config.template, templates_dir);
        }

        let related = self.related_table.as_ref().and_then(|table| {
            related_resources_for(table, &record.metadata.slug, &record.id)
        });
        render_detail_page(record, related, &self.config.template, templates_dir)
    }
}

impl PageDelivery for QuickstartToPage<'_> {
    fn deliver(&self, page: RenderedPage) -> Result<DeliveryReport, AppError> {
        self.deliver_page(page)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(cli)?;

    execute_pipeline(&config).await?;

    Ok(())
}
