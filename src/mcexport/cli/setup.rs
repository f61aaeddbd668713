use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.2"
/// Format for dev builds: "v0.3.2\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "mcexport",
    bin_name = "mcexport",
    version = get_version(),
    about = "Parse and export a massCode snippet database",
    long_about = "Reads a massCode db.json and exports every snippet, with its folder path \
                  and tag names resolved, as plain text, a searchable HTML page, or JSON."
)]
pub struct Cli {
    /// Path to the massCode db.json
    #[arg(value_name = "PATH_TO_DB_JSON")]
    pub path: PathBuf,

    /// Export results to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: bool,

    /// Path for the output file, without extension (used with --output)
    #[arg(short = 'p', long = "output-path", value_name = "STEM")]
    pub output_path: Option<String>,

    /// Output type: text, html, or json [default: html]
    #[arg(short = 't', long = "output-type", value_name = "TYPE")]
    pub output_type: Option<String>,

    /// Skip snippets in the trash
    #[arg(long, help_heading = "Filters")]
    pub exclude_deleted: bool,

    /// Only export favorite snippets
    #[arg(long, help_heading = "Filters")]
    pub favorites_only: bool,

    /// Never style text output
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,

    /// Debug-level logging to stderr
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}
