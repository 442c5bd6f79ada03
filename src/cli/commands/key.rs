//! Key command - print the repository key of a remote

use crate::cli::args::KeyArgs;
use crate::config::Config;
use crate::error::RepoResult;
use crate::manager::create_manager;

/// Execute the key command
pub async fn execute(args: KeyArgs, config: &Config) -> RepoResult<()> {
    let manager = create_manager(config)?;
    let repository = config.remote(&args.remote)?;

    println!("{}", manager.repository_key(&repository, &args.context));
    Ok(())
}
