use clap::{Parser, Subcommand};
use crawlwatch_core::cli;
use crawlwatch_core::logging::{default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "crawlwatch",
    version,
    about = "crawlwatch: crawler traffic reports from web server access logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report bot activity found in access logs
    Analyze(cli::AnalyzeArgs),

    /// Bot catalog tooling
    Catalog {
        #[command(subcommand)]
        cmd: cli::CatalogCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Analyze(args) => {
            init_logging(args.log_format.unwrap_or_else(default_log_format));
            cli::analyze::run(args)
        }
        Command::Catalog { cmd } => {
            init_logging(default_log_format());
            cli::catalog::run(cmd)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
