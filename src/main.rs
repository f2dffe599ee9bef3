use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use fixture_discovery_core::metadata::DeclarationRegistry;
use fixture_discovery_core::output::OutputFormatter;
use fixture_discovery_core::{cli, logging, samples, SuiteBuilder};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    args.validate().context("Invalid arguments")?;

    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));

    let registry =
        samples::sample_registry().context("Failed to assemble the sample declarations")?;
    let registry = match args.filter.as_deref() {
        Some(filter) => filtered_registry(&registry, filter)?,
        None => registry,
    };

    let builder = SuiteBuilder::new();
    let root = builder.scan(&registry, "samples");

    let rendered = OutputFormatter::format(&root, args.format)?;
    match args.output_file {
        Some(path) => std::fs::write(&path, rendered)
            .with_context(|| format!("Cannot write output file: {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}

fn filtered_registry(
    registry: &DeclarationRegistry,
    filter: &str,
) -> Result<DeclarationRegistry> {
    let mut filtered = DeclarationRegistry::new();
    for ty in registry.types() {
        if ty.name().contains(filter) {
            filtered.register(ty.clone())?;
        }
    }
    Ok(filtered)
}
