//! CLI argument definitions using clap derive

use crate::model::metadata::MAVEN_METADATA_XML;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// localrepo - local artifact repository paths and lookups
///
/// Computes where artifacts and metadata live in a local repository and
/// checks whether an artifact is already cached.
#[derive(Parser, Debug)]
#[command(name = "localrepo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LOCALREPO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Local repository base directory (overrides the config file)
    #[arg(short, long, global = true, env = "LOCALREPO_BASEDIR")]
    pub basedir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the relative path of an artifact or metadata file
    Path(PathArgs),

    /// Check whether an artifact is cached locally
    Find(FindArgs),

    /// Print the repository key of a configured remote
    Key(KeyArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the path command
#[derive(Parser, Debug)]
pub struct PathArgs {
    #[command(subcommand)]
    pub target: PathTarget,
}

/// What to compute a path for
#[derive(Subcommand, Debug)]
pub enum PathTarget {
    /// Artifact path from <groupId>:<artifactId>[:<extension>[:<classifier>]]:<version>
    Artifact {
        /// Artifact coordinates
        coords: String,

        /// Remote repository the artifact comes from
        #[arg(long)]
        remote: Option<String>,

        /// Request context
        #[arg(long, default_value = "")]
        context: String,
    },

    /// Metadata path for a group, artifact or version scope
    Metadata {
        /// Group id
        group: Option<String>,

        /// Artifact id
        artifact: Option<String>,

        /// Version
        #[arg(value_name = "VERSION")]
        meta_version: Option<String>,

        /// Metadata file name template
        #[arg(long = "type", default_value = MAVEN_METADATA_XML)]
        metadata_type: String,

        /// Remote repository the metadata comes from
        #[arg(long)]
        remote: Option<String>,

        /// Request context
        #[arg(long, default_value = "")]
        context: String,
    },
}

/// Arguments for the find command
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Artifact coordinates
    pub coords: String,
}

/// Arguments for the key command
#[derive(Parser, Debug)]
pub struct KeyArgs {
    /// Configured remote repository id
    pub remote: String,

    /// Request context
    #[arg(long, default_value = "")]
    pub context: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
