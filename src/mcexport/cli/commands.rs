use super::logging::init_logging;
use super::print::{print_message, print_messages};
use super::setup::Cli;
use clap::Parser;
use mcexport::api::{
    output_path, CmdMessage, ExportApi, ExportRequest, OutputFormat, SnippetFilter,
    DEFAULT_OUTPUT_STEM,
};
use mcexport::config::{config_dir, ExportConfig};
use mcexport::error::{ExportError, Result};
use mcexport::store::fs::FileSource;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let dir = config_dir()?;
    let config = ExportConfig::load(&dir)?;
    debug!(dir = %dir.display(), ?config, "loaded config");

    // 1. Output type, before anything touches the input
    let format: OutputFormat = cli
        .output_type
        .as_deref()
        .unwrap_or(&config.output_type)
        .parse()?;

    // 2. Input must exist. Checked here, not left to `load`, so the error
    // comes before the output path is announced.
    let source = FileSource::new(&cli.path);
    if !source.exists() {
        return Err(ExportError::FileNotFound(cli.path.clone()));
    }

    // 3. Destination, announced before the pipeline runs
    let mut request = ExportRequest::new(format).with_filter(SnippetFilter {
        exclude_deleted: cli.exclude_deleted || config.exclude_deleted,
        favorites_only: cli.favorites_only,
    });
    if cli.output {
        let stem = [cli.output_path.as_deref(), Some(config.output_stem.as_str())]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_OUTPUT_STEM);
        let path = output_path(stem, format);
        print_message(&CmdMessage::info(format!(
            "Output will be saved to: {}",
            path.display()
        )));
        request = request.to_file(path);
    } else {
        request = request.with_color(!cli.no_color && stdout_supports_color());
    }

    // 4. Run and report
    let api = ExportApi::new(source);
    let result = api.export(&request)?;
    print_messages(&result.messages);
    if let Some(output) = result.output {
        println!("{}", output);
    }
    Ok(())
}

fn stdout_supports_color() -> bool {
    console::Term::stdout().features().colors_supported()
}
