use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Directory(args) => commands::directory::handle(&args, ctx, flags),
        Commands::Events(args) => commands::events::handle(&args, ctx, flags),
        Commands::Mentors(args) => commands::mentors::handle(&args, ctx, flags),
        Commands::Donate(args) => commands::donate::handle(&args, ctx, flags),
        Commands::Admin(args) => commands::admin::handle(&args, ctx, flags).await,
        Commands::Login(args) => commands::login::handle(&args, ctx, flags).await,
        Commands::Routes(args) => commands::routes::handle(&args, ctx, flags).await,
    }
}
