use super::args::{Cli, Commands, ConvertArgs, StitchArgs, StoreArgs};
use super::handlers;
use anyhow::Result;
use translens_providers::{for_name, normalizer_names};
use translens_runtime::{Config, StoreProfile};
use translens_types::IdSource;

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut ids = match cli.seed {
        Some(seed) => IdSource::seeded(seed),
        None => IdSource::from_entropy(),
    };

    match cli.command {
        Commands::Chat(args) => convert(args, "chat", &config, &mut ids),
        Commands::Analytics(args) => convert(args, "analytics", &config, &mut ids),

        Commands::Stitch(StitchArgs {
            source,
            log_group,
            store,
        }) => {
            let profile = resolve_profile(store, &config)?;
            handlers::stitch::handle(&source, &log_group, &profile, config.page_size, &mut ids)
        }
    }
}

fn convert(args: ConvertArgs, kind: &str, config: &Config, ids: &mut IdSource) -> Result<()> {
    let normalizer = for_name(kind).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown source format: {} (expected one of: {})",
            kind,
            normalizer_names().join(", ")
        )
    })?;

    let profile = resolve_profile(args.store, config)?;
    handlers::convert::handle(
        &args.source,
        &args.target,
        normalizer.as_ref(),
        &profile,
        config.page_size,
        ids,
    )
}

fn resolve_profile(store: StoreArgs, config: &Config) -> Result<StoreProfile> {
    Ok(StoreProfile::resolve(
        store.region,
        store.access_key,
        store.secret_key,
        config,
    )?)
}
