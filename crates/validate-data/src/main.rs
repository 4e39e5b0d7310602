use annotations::{ConsoleReporter, GithubReporter, Reporter};
use clap::Parser;
use std::path::PathBuf;
use validate_data::config::{ReportFormat, Settings};
use validate_data::report::{self, Outcome};

#[derive(Debug, Parser)]
#[command(
    name = "validate-data",
    about = "Validate workflow definition files and report problems as CI annotations",
    version,
    long_about = "Validate workflow definition files and report problems as CI annotations.\n\nExamples:\n  validate-data                                # Use ./settings.json\n  validate-data --config ci/settings.json      # Use another settings file\n  validate-data -f .github/workflows           # Check one folder, no settings file needed\n  validate-data --format github -f workflows   # Force GitHub workflow commands"
)]
struct Cli {
    /// Settings file (JSON, or YAML with a .yml/.yaml extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Folder to scan; replaces the configured folders (repeatable)
    #[arg(short = 'f', long = "folder")]
    folders: Vec<PathBuf>,

    /// Annotation output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Auto)]
    format: ReportFormat,

    /// Run in verbose mode with detailed output
    #[arg(short, long)]
    verbose: bool,

    /// Run in debug mode with per-file details
    #[arg(short, long)]
    debug: bool,
}

fn execute(cli: &Cli, reporter: &mut dyn Reporter) -> Outcome {
    match Settings::resolve(cli.config.as_deref(), &cli.folders) {
        Ok(settings) => validate_data::run(&settings, reporter),
        Err(e) => {
            logging::error(&e.to_string());
            report::report_unhandled(&e, reporter)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    logging::set_log_level(logging::LogLevel::from_flags(cli.verbose, cli.debug));
    logging::debug("Debug mode enabled - showing detailed logs");

    let github_actions = std::env::var("GITHUB_ACTIONS").ok();
    let outcome = match cli.format.resolve(github_actions.as_deref()) {
        ReportFormat::Github => execute(&cli, &mut GithubReporter::stdout()),
        _ => execute(&cli, &mut ConsoleReporter::stdout()),
    };

    std::process::exit(outcome.exit_code());
}
