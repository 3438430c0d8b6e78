use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;

use redline_engine::{DiffReport, DocumentContent, DocumentDiffer, DocumentSource, EngineConfig};
use redline_sections::SectionExtractor;
use redline_types::DocumentDiff;

use crate::cli::*;
use crate::render;
use crate::runner::run_bounded;
use crate::source::FileSource;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "engine configuration");

    match cli.command {
        Command::Compare(args) => cmd_compare(config, args, cli.format).await,
        Command::Sections(args) => cmd_sections(args, cli.format),
        Command::Summary(args) => cmd_summary(config, args, cli.format).await,
        Command::Report(args) => cmd_report(config, args, cli.format).await,
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

fn fetch(path: &Path) -> anyhow::Result<DocumentContent> {
    Ok(FileSource.fetch(&path.display().to_string())?)
}

/// Read both revisions and compare them on a bounded blocking worker.
async fn compare_files(
    differ: Arc<DocumentDiffer>,
    files: &PairArgs,
) -> anyhow::Result<(DocumentContent, DocumentContent, DocumentDiff)> {
    let original = fetch(&files.original)?;
    let revised = fetch(&files.revised)?;
    let timeout = differ.config().timeout();

    let (o, r) = (original.markdown.clone(), revised.markdown.clone());
    let diff = run_bounded(timeout, move || differ.compare(&o, &r)).await??;
    Ok((original, revised, diff))
}

async fn cmd_compare(
    mut config: EngineConfig,
    args: CompareArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if args.no_sections {
        config.align_by_headings = false;
    }
    let differ = Arc::new(DocumentDiffer::new(config));
    let (_, _, diff) = compare_files(differ, &args.files).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diff)?),
        OutputFormat::Text => {
            println!(
                "{} {} → {}",
                "Comparing".bold(),
                args.files.original.display(),
                args.files.revised.display()
            );
            println!("{}\n", render::render_stats(&diff.stats));
            if !diff.stats.has_changes() {
                println!("{} No changes.", "✓".green().bold());
                return Ok(());
            }
            print!("{}", render::render_blocks(&diff.blocks));
            if !diff.sections.is_empty() {
                println!("\n{}", "Sections".bold().underline());
                print!("{}", render::render_sections_diff(&diff.sections));
            }
        }
    }
    Ok(())
}

fn cmd_sections(args: SectionsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let document = fetch(&args.file)?;
    let extraction = SectionExtractor::default().extract_detailed(&document.markdown);

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "strategy": extraction.strategy,
                "sections": extraction.sections,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => print!("{}", render::render_outline(&extraction)),
    }
    Ok(())
}

async fn cmd_summary(
    config: EngineConfig,
    args: PairArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let differ = Arc::new(DocumentDiffer::new(config));
    let (_, _, diff) = compare_files(differ.clone(), &args).await?;
    let summary = differ.summarize(&diff);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            println!("{}", "Summary".bold());
            print!("{}", render::render_summary(&summary));
        }
    }
    Ok(())
}

async fn cmd_report(
    config: EngineConfig,
    args: ReportArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let differ = Arc::new(DocumentDiffer::new(config));
    let (original, revised, diff) = compare_files(differ.clone(), &args.files).await?;
    let report = DiffReport::new(
        &original.markdown,
        &revised.markdown,
        &diff,
        differ.summarize(&diff),
    );
    let json = report.to_json_pretty()?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            if format == OutputFormat::Text {
                println!("{} Report written to {}", "✓".green().bold(), path.display());
            }
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn write(dir: &Path, name: &str, text: &str) -> String {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path.display().to_string()
    }

    #[test]
    fn missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }

    #[test]
    fn config_file_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "redline.toml", "timeout_secs = 5\n");
        let config = load_config(Some(Path::new(&path))).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.align_by_headings);
    }

    #[tokio::test]
    async fn report_is_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "v1.md", "# Fees\nNet 30");
        let b = write(dir.path(), "v2.md", "# Fees\nNet 60");
        let out = dir.path().join("report.json");

        let cli = Cli::try_parse_from([
            "redline",
            "report",
            a.as_str(),
            b.as_str(),
            "--output",
            out.to_str().unwrap(),
        ])
        .unwrap();
        run_command(cli).await.unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(report["stats"]["sectionsChanged"], 1);
        assert_eq!(report["summary"][0], "1 section changed");
        assert_eq!(report["sections"][0]["path"], "Fees");
    }

    #[tokio::test]
    async fn compare_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "v1.md", "text");
        let missing = dir.path().join("v2.md");

        let cli = Cli::try_parse_from([
            "redline",
            "compare",
            a.as_str(),
            missing.to_str().unwrap(),
        ])
        .unwrap();
        let err = run_command(cli).await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn oversized_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(dir.path(), "redline.toml", "max_input_bytes = 4\n");
        let a = write(dir.path(), "v1.md", "far too long");
        let b = write(dir.path(), "v2.md", "ok");

        let cli = Cli::try_parse_from([
            "redline",
            "--config",
            config.as_str(),
            "summary",
            a.as_str(),
            b.as_str(),
        ])
        .unwrap();
        assert!(run_command(cli).await.is_err());
    }
}
