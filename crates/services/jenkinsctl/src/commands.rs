//! Command handlers.
//!
//! Each handler resolves the configuration, connects, performs exactly
//! one server operation, and renders the result. Argument validation
//! happens before the configuration is even loaded, so a usage error
//! never touches the network.

use std::path::Path;

use jenkinsctl_config::JenkinsConfig;
use jenkinsctl_sdk::Jenkins;
use jenkinsctl_sdk::node::NodeStatus;
use jenkinsctl_sdk::view::ViewType;

use crate::error::{Error, Result};

/// Resolves the configuration and performs the liveness call.
async fn connect(config_path: Option<&Path>) -> Result<Jenkins> {
    let config = JenkinsConfig::resolve(config_path)?;
    Ok(Jenkins::init(&config).await?)
}

pub async fn handle_connection_show(config_path: Option<&Path>) -> Result<()> {
    let jenkins = connect(config_path).await?;
    println!("{}", jenkins.server_info());
    Ok(())
}

pub async fn handle_get_plugins(config_path: Option<&Path>) -> Result<()> {
    let jenkins = connect(config_path).await?;
    let plugins = jenkins.plugins().await?;

    let usable: Vec<_> = plugins.iter().filter(|plugin| plugin.is_usable()).collect();
    if usable.is_empty() {
        println!("No plugins active and enabled");
        return Ok(());
    }
    println!("Plugins active and enabled:");
    for plugin in usable {
        println!("    {plugin}");
    }
    Ok(())
}

pub async fn handle_get_views(config_path: Option<&Path>) -> Result<()> {
    let jenkins = connect(config_path).await?;
    for view in jenkins.views().await? {
        println!("{view}");
        println!();
    }
    Ok(())
}

pub async fn handle_get_jobs(config_path: Option<&Path>) -> Result<()> {
    let jenkins = connect(config_path).await?;
    for job in jenkins.jobs().await? {
        println!("{job}");
        println!();
    }
    Ok(())
}

pub async fn handle_get_job_config(config_path: Option<&Path>, name: &str) -> Result<()> {
    let jenkins = connect(config_path).await?;
    println!("{}", jenkins.job_config(name).await?);
    Ok(())
}

pub async fn handle_get_last_build(config_path: Option<&Path>, name: &str) -> Result<()> {
    println!("Collecting job information...");
    let jenkins = connect(config_path).await?;
    match jenkins.last_build(name).await? {
        Some(build) => {
            println!("Last build number: {}", build.number);
            println!("Last build URL: {}", build.url);
        }
        None => println!("No last build available for job: {name}"),
    }
    Ok(())
}

pub async fn handle_get_last_successful_build(
    config_path: Option<&Path>,
    name: &str,
) -> Result<()> {
    println!("Collecting job information...");
    let jenkins = connect(config_path).await?;
    match jenkins.last_successful_build(name).await? {
        Some(build) => {
            println!("Last successful build number: {}", build.number);
            println!("Last successful build URL: {}", build.url);
        }
        None => println!("No last successful build available for job: {name}"),
    }
    Ok(())
}

pub async fn handle_get_build_queue(config_path: Option<&Path>) -> Result<()> {
    println!("Collecting build queue information...");
    let jenkins = connect(config_path).await?;
    let queue = jenkins.build_queue().await?;

    for item in &queue.items {
        println!("{item}");
        println!();
    }
    println!("Number of tasks in the build queue: {}", queue.len());
    Ok(())
}

pub async fn handle_get_nodes(config_path: Option<&Path>, status: NodeStatus) -> Result<()> {
    println!("Collecting node(s) information...");
    let jenkins = connect(config_path).await?;
    let nodes = jenkins.nodes(status).await?;

    for node in &nodes {
        match status {
            NodeStatus::Online => {
                println!("{} - online", node.display_name);
                if node.idle {
                    println!("{} - idle", node.display_name);
                }
            }
            NodeStatus::Offline => {
                println!("{} - offline", node.display_name);
                if !node.offline_cause_reason.is_empty() {
                    println!("Reason: {}", node.offline_cause_reason);
                }
            }
        }
    }
    Ok(())
}

pub async fn handle_create_job(
    config_path: Option<&Path>,
    xml_file: &Path,
    name: &str,
) -> Result<()> {
    println!("Creating the job {name}...");
    let jenkins = connect(config_path).await?;
    jenkins.create_job(xml_file, name).await?;
    println!("Created job: {name}");
    Ok(())
}

pub async fn handle_create_view(
    config_path: Option<&Path>,
    name: &str,
    view_type: &str,
) -> Result<()> {
    // Validated against the closed set before anything else happens.
    let view_type = ViewType::from_arg(view_type).ok_or_else(|| {
        Error::Usage(format!(
            "unsupported view type `{view_type}`; use one of: {}",
            ViewType::variants().join(", ")
        ))
    })?;

    println!("Creating view {name}...");
    let jenkins = connect(config_path).await?;
    jenkins.create_view(name, view_type).await?;
    println!("Created view: {name}");
    Ok(())
}

pub async fn handle_create_node() -> Result<()> {
    println!("Node creation is not implemented yet");
    Ok(())
}

pub async fn handle_delete_job(config_path: Option<&Path>, name: &str) -> Result<()> {
    println!("Deleting the job {name}...");
    let jenkins = connect(config_path).await?;
    jenkins.delete_job(name).await?;
    println!("Deleted job: {name}");
    Ok(())
}

pub async fn handle_download_artifacts(
    config_path: Option<&Path>,
    job: &str,
    build_id: u32,
    dest: &Path,
) -> Result<()> {
    let jenkins = connect(config_path).await?;
    let saved = jenkins.download_artifacts(job, build_id, dest).await?;

    if saved.is_empty() {
        println!("No artifacts for build {build_id} of job {job}");
        return Ok(());
    }
    for path in saved {
        println!("Saved {}", path.display());
    }
    Ok(())
}
