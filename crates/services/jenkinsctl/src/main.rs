mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{
    BuildCommands, Cli, Commands, ConnectionCommands, CreateCommands, DeleteCommands,
    DownloadCommands, GetCommands, JobCommands, NodeCommands,
};
use jenkinsctl_sdk::node::NodeStatus;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let Cli { config, command } = Cli::parse();
    let config = config.as_deref();

    let result = match command {
        Commands::Connection {
            command: ConnectionCommands::Show,
        } => commands::handle_connection_show(config).await,

        Commands::Get { command } => match command {
            GetCommands::Connection => commands::handle_connection_show(config).await,
            GetCommands::Plugins => commands::handle_get_plugins(config).await,
            GetCommands::Views => commands::handle_get_views(config).await,
            GetCommands::Jobs => commands::handle_get_jobs(config).await,
            GetCommands::Job { command } => match command {
                JobCommands::Config { name } => {
                    commands::handle_get_job_config(config, &name).await
                }
                JobCommands::LastBuild { name } => {
                    commands::handle_get_last_build(config, &name).await
                }
                JobCommands::LastSuccessfulBuild { name } => {
                    commands::handle_get_last_successful_build(config, &name).await
                }
            },
            GetCommands::Build {
                command: BuildCommands::Queue,
            } => commands::handle_get_build_queue(config).await,
            GetCommands::Nodes { command } => {
                let status = match command {
                    NodeCommands::Online => NodeStatus::Online,
                    NodeCommands::Offline => NodeStatus::Offline,
                };
                commands::handle_get_nodes(config, status).await
            }
        },

        Commands::Create { command } => match command {
            CreateCommands::Job { xml_file, name } => {
                commands::handle_create_job(config, &xml_file, &name).await
            }
            CreateCommands::View { name, view_type } => {
                commands::handle_create_view(config, &name, &view_type).await
            }
            CreateCommands::Node => commands::handle_create_node().await,
        },

        Commands::Delete {
            command: DeleteCommands::Job { name },
        } => commands::handle_delete_job(config, &name).await,

        Commands::Download {
            command:
                DownloadCommands::Artifacts {
                    job,
                    build_id,
                    dest,
                },
        } => commands::handle_download_artifacts(config, &job, build_id, &dest).await,
    };

    if let Err(e) = result {
        log::error!("Error: {}", e);
        std::process::exit(1);
    }
}
