//! tfop CLI - Inspect the decisions made by the Terraform workspace controller

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod exit_codes;

use commands::key::KeySource;

#[derive(Parser)]
#[command(name = "tfop")]
#[command(author = "tfop Contributors")]
#[command(version)]
#[command(about = "Helpers behind the Terraform workspace controller", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Log filter (EnvFilter syntax), overrides --debug
    #[arg(long, global = true, env = "TFOP_LOG")]
    log: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a remote service version and show the selected behavior
    Classify {
        /// Version string as reported by the remote service
        #[arg(value_name = "VERSION")]
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the names matching a wildcard pattern
    Match {
        /// Pattern with optional leading and/or trailing '*'
        pattern: String,

        /// Candidate names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Resolve a ConfigMap or Secret key from the cluster
    Key {
        /// Kind of object holding the key
        #[arg(value_enum)]
        source: KeySource,

        /// Object name
        name: String,

        /// Key name
        key: String,

        /// Object namespace
        #[arg(short, long, env = "TFOP_NAMESPACE", default_value = "default")]
        namespace: String,
    },

    /// Print the finalizer token used for a resource kind
    FinalizerName {
        /// Resource kind (e.g. Workspace)
        kind: String,
    },
}

fn init_logging(debug: bool, filter: Option<&str>) {
    let default = if debug { "debug" } else { "warn" };
    let (env_filter, rejected) = match filter.map(EnvFilter::try_new) {
        Some(Ok(f)) => (f, None),
        Some(Err(e)) => (EnvFilter::new(default), Some(e)),
        None => (EnvFilter::new(default), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Some(e) = rejected {
        tracing::warn!(
            filter = filter.unwrap_or_default(),
            "invalid log filter ({}), falling back to {:?}",
            e,
            default
        );
    }
}

#[tokio::main]
async fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();
    init_logging(cli.debug, cli.log.as_deref());

    let result = match cli.command {
        Commands::Classify { input, json } => commands::classify::run(&input, json),

        Commands::Match { pattern, names } => commands::matching::run(&pattern, &names),

        Commands::Key {
            source,
            name,
            key,
            namespace,
        } => commands::key::run(source, &name, &key, &namespace).await,

        Commands::FinalizerName { kind } => commands::finalizer::run(&kind),
    };

    if let Err(err) = result {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}
