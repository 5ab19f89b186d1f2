use clap::{Parser, Subcommand};
use enquiry_fill::cli;
use enquiry_fill::config::SYNONYMS_ENV;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "enquiry-fill")]
#[command(about = "Fill Excel enquiry templates from extracted JSON data.")]
#[command(long_about = "Enquiry Fill - populate pre-existing Excel templates from extracted data

The template layout is detected automatically:
  multi-column - an 'Item'/'Question' header row, one column per site
  vertical     - question labels in column A, answers in column B
  horizontal   - anything else, filled the same way as vertical

Template labels are matched to data keys by exact match, then substring
match, then the synonym table.

COMMANDS:
  fill      - Fill a template from a JSON data file
  detect    - Show the detected layout of a template
  headers   - Show the header row of a template
  match     - Show which data key a label resolves to
  synonyms  - List the synonym table and flag duplicate patterns

EXAMPLES:
  enquiry-fill fill BOQ/scope.json                       # Finds *Format*.xlsx next to the data
  enquiry-fill fill sizing.json -t Sizing_Format.xlsx -o out.xlsx
  enquiry-fill match \"MPPT or PWM?\" sld.json")]
#[command(version)]
struct Cli {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML synonym table to use instead of the built-in one
    #[arg(long, global = true, env = SYNONYMS_ENV)]
    synonyms: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Fill a template from extracted JSON data.

The data file holds a JSON object, or an array of per-site objects which is
treated as {\"systems\": [...]}. A surrounding ```json fence is ignored.

TEMPLATE DISCOVERY:
  Without --template, the first .xlsx whose name contains 'Format' is used,
  searched in --dir or else the data file's directory.

OUTPUT:
  Without --output, Output_<data name>_<YYYYmmdd_HHMMSS>.xlsx is written
  next to the template.

A fill count of zero is reported as a warning, not an error.")]
    /// Fill a template from a JSON data file
    Fill {
        /// Path to extracted data (.json)
        data: PathBuf,

        /// Template file (.xlsx)
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Directory to search for a *Format*.xlsx template
        #[arg(short, long, conflicts_with = "template")]
        dir: Option<PathBuf>,

        /// Output Excel file path (.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the detected layout of a template
    Detect {
        /// Template file (.xlsx)
        template: PathBuf,
    },

    /// Show the header row of a template
    Headers {
        /// Template file (.xlsx)
        template: PathBuf,
    },

    /// Show which data key a template label resolves to
    Match {
        /// Template label text
        label: String,

        /// Path to extracted data (.json)
        data: PathBuf,
    },

    /// List the synonym table and flag duplicate patterns
    Synonyms,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "enquiry_fill=debug"
    } else {
        "enquiry_fill=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Fill {
            data,
            template,
            dir,
            output,
        } => cli::fill(data, template, dir, output, cli.synonyms, cli.verbose)?,

        Commands::Detect { template } => cli::detect(template)?,

        Commands::Headers { template } => cli::headers(template)?,

        Commands::Match { label, data } => cli::match_label(label, data, cli.synonyms)?,

        Commands::Synonyms => cli::synonyms(cli.synonyms)?,
    }

    Ok(())
}
