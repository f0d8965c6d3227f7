use anyhow::{Context, Result};
use clap::Parser;
use play_network_metrics::{compute_metrics, data, storage, MetricsConfig};

#[derive(Parser, Debug)]
#[clap(
    name = "play-metrics",
    version,
    about = "Social network metrics for plays from scene co-occurrence data"
)]
struct Cli {
    /// Path to a JSON segment document (`-` reads stdin)
    #[clap(long, short, default_value = "-")]
    input: String,

    /// Where to write the metrics JSON (`-` writes stdout)
    #[clap(long, short, default_value = "-")]
    output: String,

    /// Pretty-print the JSON output
    #[clap(long)]
    pretty: bool,

    /// Iteration cap for eigenvector centrality
    #[clap(long, default_value = "100")]
    max_iter: usize,

    /// Per-node convergence tolerance for eigenvector centrality
    #[clap(long, default_value = "1e-6")]
    tolerance: f64,

    /// Run all analyses on the calling thread
    #[clap(long)]
    sequential: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging; stdout may carry the result, env_logger writes to stderr
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = MetricsConfig::new(args.max_iter, args.tolerance, !args.sequential);

    if config.parallel {
        // If threads = 0, use all available cores
        let num_threads = if args.threads > 0 {
            args.threads
        } else {
            num_cpus::get()
        };

        log::info!("Using {} worker threads", num_threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()?;
    }

    // 1. Load segments
    let segments = data::load_segments(&args.input)
        .with_context(|| format!("failed to load segments from {}", args.input))?;

    // 2. Build the graph and compute metrics
    let metrics = compute_metrics(&segments, &config)?;

    log::info!(
        "Computed metrics for {} characters ({} with maximum degree {})",
        metrics.size,
        metrics.max_degree_ids.len(),
        metrics.max_degree
    );

    // 3. Write results
    storage::save_results(&metrics, &args.output, args.pretty)
        .with_context(|| format!("failed to write metrics to {}", args.output))?;

    Ok(())
}
