//! Command-line interface definitions for jenkinsctl.
//!
//! Defines the CLI structure, commands, and arguments for the Jenkins
//! command-line client.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Jenkins command-line client.
#[derive(Parser)]
#[command(name = "jenkinsctl")]
#[command(about = "jenkinsctl - inspect and manage a Jenkins server")]
pub struct Cli {
    /// Path to the configuration file
    /// (defaults to $HOME/.config/jenkinsctl/config.json)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Jenkins client.
#[derive(Subcommand)]
pub enum Commands {
    /// Options related to the server connection
    Connection {
        #[command(subcommand)]
        command: ConnectionCommands,
    },

    /// Display information about the Jenkins server
    Get {
        #[command(subcommand)]
        command: GetCommands,
    },

    /// Create a resource on the Jenkins server
    Create {
        #[command(subcommand)]
        command: CreateCommands,
    },

    /// Delete a resource on the Jenkins server
    Delete {
        #[command(subcommand)]
        command: DeleteCommands,
    },

    /// Download files from the Jenkins server
    Download {
        #[command(subcommand)]
        command: DownloadCommands,
    },
}

/// Connection related commands.
#[derive(Subcommand)]
pub enum ConnectionCommands {
    /// Show connection info
    Show,
}

/// Read-only informational commands.
#[derive(Subcommand)]
pub enum GetCommands {
    /// Get connection info
    Connection,

    /// Get all plugins active and enabled
    Plugins,

    /// Get all views
    Views,

    /// Get all jobs
    Jobs,

    /// Job related commands
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },

    /// Build related commands
    Build {
        #[command(subcommand)]
        command: BuildCommands,
    },

    /// Node related commands
    Nodes {
        #[command(subcommand)]
        command: NodeCommands,
    },
}

/// Per-job informational commands.
#[derive(Subcommand)]
pub enum JobCommands {
    /// Print the job's configuration XML
    Config {
        /// Job name
        name: String,
    },

    /// Show the job's most recent build
    LastBuild {
        /// Job name
        name: String,
    },

    /// Show the job's most recent successful build
    LastSuccessfulBuild {
        /// Job name
        name: String,
    },
}

/// Build related commands.
#[derive(Subcommand)]
pub enum BuildCommands {
    /// Get the build queue
    Queue,
}

/// Node related commands.
#[derive(Subcommand)]
pub enum NodeCommands {
    /// Get nodes online
    Online,

    /// Get nodes offline
    Offline,
}

/// Resource creation commands.
#[derive(Subcommand)]
pub enum CreateCommands {
    /// Create a job from a configuration XML file
    Job {
        /// Path to the job configuration XML
        xml_file: PathBuf,

        /// Name of the job to create
        name: String,
    },

    /// Create a view
    View {
        /// Name of the view to create
        name: String,

        /// View type (LIST_VIEW, NESTED_VIEW, MY_VIEW, DASHBOARD_VIEW,
        /// PIPELINE_VIEW)
        view_type: String,
    },

    /// Create a node
    Node,
}

/// Resource deletion commands.
#[derive(Subcommand)]
pub enum DeleteCommands {
    /// Delete a job
    Job {
        /// Job name
        name: String,
    },
}

/// Download commands.
#[derive(Subcommand)]
pub enum DownloadCommands {
    /// Download the artifacts of one build
    Artifacts {
        /// Job the build belongs to
        job: String,

        /// Build number
        build_id: u32,

        /// Directory to save the artifacts into
        dest: PathBuf,
    },
}
