use clap::Parser;
use dhcp4kit::{
    config::{Args, Command},
    v4::{concat_addresses, encode_lease_seconds, OptionCode},
    Profile,
};
use std::{error::Error as StdError, path::Path, time::Duration};
use tracing_subscriber::EnvFilter;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

async fn load_profile(path: &Path) -> dhcp4kit::Result<Profile> {
    let profile = Profile::load(path).await?;
    tracing::info!("Loaded profile from {}", path.display());
    Ok(profile)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn StdError>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    match args.command {
        Command::Options { request } => {
            let profile = load_profile(&args.profile).await?;
            let order: Option<Vec<OptionCode>> =
                request.map(|codes| codes.into_iter().map(OptionCode::from).collect());
            let options = profile.option_set();
            for option in options.select_order_or_all(order.as_deref()) {
                println!("{}: {}", option.code, hex(&option.value));
            }
        }
        Command::Pool => {
            let pool = load_profile(&args.profile).await?.pool()?;
            println!("{} - {} ({} addresses)", pool.start(), pool.stop(), pool.size());
        }
        Command::Contains { address } => {
            let pool = load_profile(&args.profile).await?.pool()?;
            match pool.offset_of(address) {
                Some(offset) => println!("{} is in the pool at offset {}", address, offset),
                None => println!("{} is outside the pool", address),
            }
        }
        Command::Nth { offset } => {
            let pool = load_profile(&args.profile).await?.pool()?;
            match pool.nth(offset) {
                Some(address) => println!("{}", address),
                None => {
                    tracing::warn!("Offset {} is past the end of the pool", offset);
                    println!("offset {} is outside the pool of {}", offset, pool.size());
                }
            }
        }
        Command::Lease { seconds } => {
            println!("{}", hex(&encode_lease_seconds(Duration::from_secs(seconds))));
        }
        Command::Join { addresses } => {
            println!("{}", hex(&concat_addresses(&addresses)));
        }
    }

    Ok(())
}
