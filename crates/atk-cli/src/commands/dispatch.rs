use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Create(args) => commands::create::handle(&args, ctx, flags),
        Commands::Validate(args) => commands::validate::handle(&args, flags),
        Commands::List(args) => commands::list::handle(&args, flags),
        Commands::Package(args) => commands::package::handle(&args, flags),
        Commands::Sync(args) => commands::sync::handle(&args, ctx, flags).await,
        Commands::Init(args) => commands::init::handle(&args, flags),
        Commands::Rehash(args) => commands::rehash::handle(&args, flags),
        Commands::Auth => commands::auth::handle(ctx, flags).await,
        Commands::Types(args) => commands::types::handle(&args, ctx, flags),
        Commands::Suggest(args) => commands::suggest::handle(&args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
