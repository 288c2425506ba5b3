use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Import(args) => commands::import::handle(&args, ctx, flags).await,
        Commands::Probe => commands::probe::handle(ctx, flags).await,
        Commands::Wipe(args) => commands::wipe::handle(&args, ctx, flags).await,
        Commands::Programs => commands::programs::handle(ctx, flags).await,
        Commands::Day { action } => commands::day::handle(&action, ctx, flags).await,
        Commands::Log { action } => commands::log::handle(&action, ctx, flags).await,
        Commands::Validate(_) | Commands::Schema => {
            unreachable!("validate/schema are pre-dispatched in main")
        }
    }
}
