use std::io;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use away_catalog::args;
use away_catalog::build_catalog;
use away_catalog::view::catalog::write_catalog;

fn init_tracing() {
    // RUST_LOG overrides; default keeps the end-of-run counters visible
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = args::args_checks();

    let (document, stats) = build_catalog(&args.run_paths());
    write_catalog(&document, &args.output)?;

    info!(
        files_scanned = stats.files_scanned,
        rows_seen = stats.rows_seen,
        rows_qualified = stats.rows_qualified,
        courses = stats.courses,
        courses_with_country = stats.courses_with_country,
        "away-course catalog written to {}",
        args.output.display()
    );
    Ok(())
}
