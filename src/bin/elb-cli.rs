use std::path::PathBuf;

use clap::{Parser, Subcommand};

use elb_registrar::config::{load_config, RegistrarConfig};
use elb_registrar::elb::transport::load_sdk_config;
use elb_registrar::elb::{InstanceId, LoadBalancerClient, LoadBalancerName, SdkConnector};
use elb_registrar::observability::logging;

#[derive(Parser)]
#[command(name = "elb-cli")]
#[command(about = "Manage ELB instance registration", long_about = None)]
struct Cli {
    /// AWS region (overrides config file and AWS_DEFAULT_REGION)
    #[arg(short, long)]
    region: Option<String>,

    /// Named AWS credentials profile
    #[arg(short, long)]
    profile: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List load balancers the instance is registered with
    Find { instance_id: String },
    /// Register the instance with a load balancer
    Add {
        instance_id: String,
        load_balancer: String,
    },
    /// Deregister the instance from a load balancer
    Remove {
        instance_id: String,
        load_balancer: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RegistrarConfig::default(),
    };
    logging::init(&config.observability);

    let region = cli.region.or_else(|| config.aws.region.clone());
    let profile = cli.profile.or_else(|| config.aws.profile.clone());

    let sdk_config = load_sdk_config(region, profile).await;
    let region = sdk_config
        .region()
        .map(|r| r.to_string())
        .unwrap_or_default();
    let client = LoadBalancerClient::new(SdkConnector::new(sdk_config), region)?;
    tracing::debug!(region = client.region(), "client initialized");

    match cli.command {
        Commands::Find { instance_id } => {
            let instance = InstanceId::from(instance_id);
            let load_balancers = client.find_load_balancers(&instance).await?;
            println!("{}", serde_json::to_string_pretty(&load_balancers)?);
        }
        Commands::Add {
            instance_id,
            load_balancer,
        } => {
            let instance = InstanceId::from(instance_id);
            let name = LoadBalancerName::from(load_balancer);
            client.add_instance(&instance, &name).await?;
            println!("added {} to {}", instance, name);
        }
        Commands::Remove {
            instance_id,
            load_balancer,
        } => {
            let instance = InstanceId::from(instance_id);
            let name = LoadBalancerName::from(load_balancer);
            client.remove_instance(&instance, &name).await?;
            println!("removed {} from {}", instance, name);
        }
    }

    Ok(())
}
