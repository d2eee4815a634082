use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::{
    BundleModel, ClusterModel, HostModel, ProviderModel, ResourceKind, ResourceManifest,
};
use crate::config::ConnectionOverrides;

/// Manage ADCM bundles, providers, hosts and clusters
#[derive(Parser, Debug)]
#[command(name = "adcm-provider")]
#[command(version)]
#[command(about = "Manage ADCM bundles, providers, hosts and clusters", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./adcm-provider.config.yml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// ADCM address, e.g. http://127.0.0.1:8000 (overrides ADCM_HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// ADCM user name (overrides ADCM_USERNAME)
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// ADCM password (overrides ADCM_PASSWORD)
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the resource described by a manifest file
    Create {
        /// YAML manifest with a `kind` field
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },
    /// Look up exactly one resource matching the given filters
    Read {
        /// Resource kind: bundle, provider, host or cluster
        kind: ResourceKind,
        #[command(flatten)]
        filters: Filters,
    },
    /// Update a resource in place (not supported by ADCM resources)
    Update {
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },
    /// Delete exactly one resource matching the given filters
    Delete {
        kind: ResourceKind,
        #[command(flatten)]
        filters: Filters,
    },
    /// List every bundle loaded into ADCM
    Bundles,
}

/// Search filters; unset filters do not constrain the lookup
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct Filters {
    #[arg(long)]
    pub id: Option<i64>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub fqdn: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub bundle_id: Option<i64>,
    #[arg(long)]
    pub provider_id: Option<i64>,
    #[arg(long)]
    pub cluster_id: Option<i64>,
    #[arg(long)]
    pub version: Option<String>,
    #[arg(long)]
    pub edition: Option<String>,
    #[arg(long)]
    pub display_name: Option<String>,
    #[arg(long)]
    pub license: Option<String>,
}

impl Filters {
    /// Builds a query manifest; zero ids and empty strings mean "any"
    pub fn to_manifest(&self, kind: ResourceKind) -> ResourceManifest {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let id = self.id.unwrap_or_default();

        match kind {
            ResourceKind::Bundle => ResourceManifest::Bundle(BundleModel {
                id,
                name: text(&self.name),
                display_name: text(&self.display_name),
                description: text(&self.description),
                edition: text(&self.edition),
                license: text(&self.license),
                version: text(&self.version),
                ..Default::default()
            }),
            ResourceKind::Provider => ResourceManifest::Provider(ProviderModel {
                id,
                name: text(&self.name),
                description: text(&self.description),
                bundle_id: self.bundle_id.unwrap_or_default(),
                state: text(&self.state),
                ..Default::default()
            }),
            ResourceKind::Host => ResourceManifest::Host(HostModel {
                id,
                fqdn: text(&self.fqdn),
                description: text(&self.description),
                provider_id: self.provider_id.unwrap_or_default(),
                cluster_id: self.cluster_id.unwrap_or_default(),
                state: text(&self.state),
                ..Default::default()
            }),
            ResourceKind::Cluster => ResourceManifest::Cluster(ClusterModel {
                id,
                name: text(&self.name),
                description: text(&self.description),
                bundle_id: self.bundle_id.unwrap_or_default(),
                state: text(&self.state),
                ..Default::default()
            }),
        }
    }
}

impl Args {
    pub fn connection_overrides(&self) -> ConnectionOverrides {
        ConnectionOverrides {
            host: self.host.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
