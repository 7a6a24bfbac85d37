use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;
mod server;

fn main() {
    if let Err(error) = run() {
        eprintln!("sprach error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = bootstrap::load_config(&flags)?;

    match &cli.command {
        cli::Commands::Serve(args) => commands::serve::handle(args, config),
        cli::Commands::Evaluate(args) => commands::evaluate::handle(args, &config, &flags),
        cli::Commands::Config => commands::config::handle(&config, &flags),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SPRACH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
