use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};
use gazelle_ts::{Cli, run};
use gazelle_ts_core::{Config, Configurer, TypeScript};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Extensions see the command before arguments are parsed, as in Gazelle
    let ts = TypeScript::new();
    let mut config = Config::new(std::env::current_dir()?);
    let cmd = ts.register_flags(Cli::command(), "gazelle-ts", &mut config);
    let matches = cmd.get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    ts.check_flags(&matches, &mut config)?;

    run(cli, config)
}
