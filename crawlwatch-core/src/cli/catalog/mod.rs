mod check;
mod init;
mod list;
#[cfg(test)]
mod tests;

pub use check::*;
pub use init::*;
pub use list::*;

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum CatalogCmd {
    /// Write the built-in catalog to a file for editing
    Init {
        /// Destination file
        #[arg(default_value = "catalog.hcl")]
        path: PathBuf,
    },

    /// Validate a catalog and report suspicious entries
    Check {
        /// Catalog file (defaults to the built-in catalog)
        path: Option<PathBuf>,

        /// Uncolored output
        #[arg(short, long, conflicts_with = "json")]
        plain: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the signatures of a catalog in priority order
    List {
        /// Catalog file (defaults to the built-in catalog)
        path: Option<PathBuf>,
    },
}

pub fn run(cmd: CatalogCmd) -> anyhow::Result<()> {
    match cmd {
        CatalogCmd::Init { path } => init(&path),
        CatalogCmd::Check { path, plain, json } => {
            let mode = if json {
                ReportMode::Json
            } else if plain {
                ReportMode::Plain
            } else {
                ReportMode::Pretty
            };
            print!("{}", check(path.as_deref(), mode)?);
            Ok(())
        }
        CatalogCmd::List { path } => {
            print!("{}", list(path.as_deref())?);
            Ok(())
        }
    }
}
