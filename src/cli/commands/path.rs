//! Path command - print repository-relative paths

use crate::cli::args::{PathArgs, PathTarget};
use crate::config::Config;
use crate::error::RepoResult;
use crate::manager::{create_manager, LocalRepositoryManager};
use crate::model::{Artifact, Metadata};

/// Execute the path command
pub async fn execute(args: PathArgs, config: &Config) -> RepoResult<()> {
    let manager = create_manager(config)?;

    let path = match args.target {
        PathTarget::Artifact {
            coords,
            remote,
            context,
        } => {
            let artifact: Artifact = coords.parse()?;
            match remote {
                Some(id) => {
                    let repository = config.remote(&id)?;
                    manager.path_for_remote_artifact(&artifact, &repository, &context)
                }
                None => manager.path_for_local_artifact(&artifact),
            }
        }
        PathTarget::Metadata {
            group,
            artifact,
            meta_version,
            metadata_type,
            remote,
            context,
        } => {
            let metadata = Metadata::new(
                group.as_deref().unwrap_or_default(),
                artifact.as_deref().unwrap_or_default(),
                meta_version.as_deref().unwrap_or_default(),
                &metadata_type,
            )?;
            match remote {
                Some(id) => {
                    let repository = config.remote(&id)?;
                    manager.path_for_remote_metadata(&metadata, &repository, &context)
                }
                None => manager.path_for_local_metadata(&metadata),
            }
        }
    };

    println!("{}", path);
    Ok(())
}
