//! `dox build` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use dox_config::{CliSettings, Config};
use dox_formatter::{FormatterRegistry, OutputMode};
use dox_page::{BuildConfig, DocBuilder, FilePageSink, HtmlPageSink, PageSink};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output mode: plain, html, or latex (overrides config).
    #[arg(short, long)]
    mode: Option<OutputMode>,

    /// Output directory for generated pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Markup source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Project title for the index page (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Path to configuration file (default: auto-discover dox.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            title: self.title.clone(),
            mode: self.mode,
            output_dir: self.output_dir.clone(),
            source_dir: self.source_dir.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let mode = config.output_resolved.mode;
        let source_dir = &config.source_resolved.dir;
        let out_dir = &config.output_resolved.dir;

        output.info(&format!("Source: {}", source_dir.display()));
        output.info(&format!("Output: {} ({mode})", out_dir.display()));

        let registry = FormatterRegistry::new();
        let sink = make_sink(mode, out_dir);

        let builder = DocBuilder::new(
            registry.get(mode),
            BuildConfig {
                project_title: config.project.title.clone(),
                source_dir: source_dir.clone(),
            },
        );
        let pages = builder.build(sink.as_ref())?;

        if pages == 1 {
            output.warning(&format!(
                "No .txt sources found in {}, wrote index only",
                source_dir.display()
            ));
        }
        output.success(&format!("Generated {pages} pages in {}", out_dir.display()));
        Ok(())
    }
}

/// Select the page sink matching the output mode.
fn make_sink(mode: OutputMode, out_dir: &Path) -> Box<dyn PageSink> {
    match mode {
        OutputMode::Html => Box::new(HtmlPageSink::new(out_dir)),
        OutputMode::Latex | OutputMode::Plain => {
            Box::new(FilePageSink::new(out_dir, mode.extension()))
        }
    }
}
