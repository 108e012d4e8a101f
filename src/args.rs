use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Builds the away-course catalog from downloaded round files", long_about = None)]
pub struct Args {
    /// Directory with one numeric folder per federation id, each holding a rounds/ subdirectory.
    #[arg(long, value_name = "ROUNDS_ROOT", default_value = "data/rounds")]
    pub rounds_root: PathBuf,
    /// Domestic master catalog; courses listed in it never reach the output.
    #[arg(long, value_name = "MASTER_CATALOG", default_value = "data/master_catalog.json")]
    pub master_catalog: PathBuf,
    /// Hand-maintained override dataset (country sections plus extra rounds).
    #[arg(long, value_name = "OVERRIDES", default_value = "data/overrides.json")]
    pub overrides: PathBuf,
    /// Where the consolidated catalog document is written.
    #[arg(long, value_name = "OUTPUT", default_value = "data/away_courses.json")]
    pub output: PathBuf,
}

/// The input paths the library consumes, detached from the clap surface.
#[derive(Clone, Debug)]
pub struct RunPaths {
    pub rounds_root: PathBuf,
    pub master_catalog: PathBuf,
    pub overrides: PathBuf,
}

impl Args {
    #[must_use]
    pub fn run_paths(&self) -> RunPaths {
        RunPaths {
            rounds_root: self.rounds_root.clone(),
            master_catalog: self.master_catalog.clone(),
            overrides: self.overrides.clone(),
        }
    }
}

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}
