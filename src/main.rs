mod cli;
mod application;
mod domain;
mod data;
mod patterns;
mod infra;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dream_patterns=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
