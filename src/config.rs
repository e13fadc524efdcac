use crate::{
    error::{Dhcp4KitError, Result},
    v4::{
        concat_addresses, encode_lease_seconds, rebinding_time, renewal_time,
        try_encode_lease_seconds, AddressRange, OptionCode, OptionSet,
    },
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::{net::Ipv4Addr, path::Path, path::PathBuf, time::Duration};

/// An option length byte caps the payload at 255 bytes, i.e. 63 addresses.
const MAX_ADDRESSES_PER_OPTION: usize = 63;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Reply profile to load (JSON)
    #[arg(short, long, default_value = "profile.json")]
    pub profile: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the reply options selected for a parameter request list
    Options {
        /// Comma separated option codes (e.g. '1,3,6,51'); omit to select all
        #[arg(short, long, value_delimiter = ',')]
        request: Option<Vec<u8>>,
    },
    /// Show the address pool bounds and size
    Pool,
    /// Check whether an address belongs to the pool
    Contains { address: Ipv4Addr },
    /// Print the pool address at the given offset
    Nth { offset: u64 },
    /// Encode a lease time given in seconds
    Lease { seconds: u64 },
    /// Concatenate addresses into a single option payload
    Join { addresses: Vec<Ipv4Addr> },
}

/// Parameters a server hands out in its replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub server_identifier: Ipv4Addr,
    pub subnet_mask: Ipv4Addr,
    pub pool_start: Ipv4Addr,
    pub pool_end: Ipv4Addr,
    pub routers: Vec<Ipv4Addr>,
    pub dns_servers: Vec<Ipv4Addr>,
    pub domain_name: Option<String>,
    pub lease_time_secs: u64,
    pub renewal_time_secs: Option<u64>,
    pub rebinding_time_secs: Option<u64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            server_identifier: Ipv4Addr::new(192, 168, 1, 1),
            subnet_mask: Ipv4Addr::new(255, 255, 255, 0),
            pool_start: Ipv4Addr::new(192, 168, 1, 100),
            pool_end: Ipv4Addr::new(192, 168, 1, 200),
            routers: vec![Ipv4Addr::new(192, 168, 1, 1)],
            dns_servers: vec![Ipv4Addr::new(8, 8, 8, 8), Ipv4Addr::new(8, 8, 4, 4)],
            domain_name: None,
            lease_time_secs: 86400,
            renewal_time_secs: None,
            rebinding_time_secs: None,
        }
    }
}

impl Profile {
    /// Reads and validates a JSON profile.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading profile from {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        let profile: Profile = serde_json::from_str(&content)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<()> {
        let pool = self.pool()?;

        if pool.contains(self.server_identifier) {
            return Err(Dhcp4KitError::InvalidProfile(format!(
                "server_identifier {} must not be within the pool",
                self.server_identifier
            )));
        }

        if self.lease_time_secs == 0 {
            return Err(Dhcp4KitError::InvalidProfile(
                "lease_time_secs must be greater than 0".to_string(),
            ));
        }

        for (field, addrs) in [("routers", &self.routers), ("dns_servers", &self.dns_servers)] {
            if addrs.len() > MAX_ADDRESSES_PER_OPTION {
                return Err(Dhcp4KitError::InvalidProfile(format!(
                    "{} lists {} addresses, at most {} fit in one option",
                    field,
                    addrs.len(),
                    MAX_ADDRESSES_PER_OPTION
                )));
            }
        }

        if let Some(name) = &self.domain_name {
            if name.is_empty() || name.len() > 255 {
                return Err(Dhcp4KitError::InvalidProfile(
                    "domain_name must be between 1 and 255 bytes".to_string(),
                ));
            }
        }

        // Timers go on the wire as whole 32-bit seconds, so compare them that way.
        let lease = u32::from_be_bytes(try_encode_lease_seconds(self.lease_time())?);
        let renewal = u32::from_be_bytes(try_encode_lease_seconds(self.renewal_time())?);
        let rebinding = u32::from_be_bytes(try_encode_lease_seconds(self.rebinding_time())?);
        if !(renewal < rebinding && rebinding < lease) {
            return Err(Dhcp4KitError::InvalidProfile(format!(
                "timers must satisfy renewal ({}s) < rebinding ({}s) < lease ({}s)",
                renewal, rebinding, lease
            )));
        }

        Ok(())
    }

    pub fn pool(&self) -> Result<AddressRange> {
        AddressRange::new(self.pool_start, self.pool_end)
    }

    pub fn lease_time(&self) -> Duration {
        Duration::from_secs(self.lease_time_secs)
    }

    pub fn renewal_time(&self) -> Duration {
        self.renewal_time_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| renewal_time(self.lease_time()))
    }

    pub fn rebinding_time(&self) -> Duration {
        self.rebinding_time_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| rebinding_time(self.lease_time()))
    }

    pub fn broadcast_address(&self) -> Ipv4Addr {
        let server = u32::from(self.server_identifier);
        let mask = u32::from(self.subnet_mask);
        Ipv4Addr::from(server | !mask)
    }

    /// Builds the options this profile offers to clients.
    pub fn option_set(&self) -> OptionSet {
        let mut options = OptionSet::new();
        options.insert(OptionCode::SubnetMask, self.subnet_mask.octets().to_vec());
        if !self.routers.is_empty() {
            options.insert(OptionCode::Router, concat_addresses(&self.routers));
        }
        if !self.dns_servers.is_empty() {
            options.insert(
                OptionCode::DomainNameServer,
                concat_addresses(&self.dns_servers),
            );
        }
        if let Some(name) = &self.domain_name {
            options.insert(OptionCode::DomainName, name.clone());
        }
        options.insert(
            OptionCode::BroadcastAddr,
            self.broadcast_address().octets().to_vec(),
        );
        options.insert(
            OptionCode::AddressLeaseTime,
            encode_lease_seconds(self.lease_time()).to_vec(),
        );
        options.insert(
            OptionCode::ServerIdentifier,
            self.server_identifier.octets().to_vec(),
        );
        options.insert(
            OptionCode::Renewal,
            encode_lease_seconds(self.renewal_time()).to_vec(),
        );
        options.insert(
            OptionCode::Rebinding,
            encode_lease_seconds(self.rebinding_time()).to_vec(),
        );
        options
    }
}
