//! Command line and configuration file handling for the fixture server.

use crate::router::default_listener;
use anyhow::Context;
use clap::Parser;
use credschema_model::CredentialSchema;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, net::SocketAddr, path::PathBuf};

/// Command line options for the fixture server.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(long, env = "CONFIG_FILE")]
    pub config: PathBuf,
}

/// Configuration for the fixture server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfiguration {
    /// Address on which this server should listen for connections.
    #[serde(default = "default_listener")]
    pub listen_address: SocketAddr,

    /// A label identifying this set of fixtures.
    pub label: String,

    /// Credential schemas to serve, in the order they should be listed.
    #[serde(default)]
    pub schemas: Vec<CredentialSchema>,
}

impl ServerConfiguration {
    pub fn load(cli: &Cli) -> Result<Self, anyhow::Error> {
        let config_file = File::open(&cli.config).context("failed to open config file")?;

        serde_yaml::from_reader(BufReader::new(config_file)).context("failed to parse config file")
    }

    pub fn from_yaml(document: &str) -> Result<Self, anyhow::Error> {
        serde_yaml::from_str(document).context("failed to parse config file")
    }
}
