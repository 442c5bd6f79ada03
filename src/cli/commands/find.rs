//! Find command - check whether an artifact is cached

use crate::cli::args::FindArgs;
use crate::config::Config;
use crate::error::RepoResult;
use crate::manager::{create_manager, LocalArtifactResult, LocalRepositoryManager};
use crate::model::Artifact;
use console::style;

/// Execute the find command
pub async fn execute(args: FindArgs, config: &Config) -> RepoResult<()> {
    let manager = create_manager(config)?;
    let artifact: Artifact = args.coords.parse()?;

    match manager.find(&artifact)? {
        LocalArtifactResult::Found(file) => println!("{}", file.display()),
        LocalArtifactResult::NotFound => {
            println!("{} {}", style("Not cached:").yellow(), artifact)
        }
    }

    Ok(())
}
