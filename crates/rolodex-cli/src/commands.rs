use crate::args::{Cli, Commands};
use crate::context::CliContext;
use crate::handlers;
use anyhow::Result;
use log::debug;

pub fn run(cli: Cli) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(cli))
}

async fn dispatch(cli: Cli) -> Result<()> {
    let format = cli.format;

    // Column commands are local: they touch persisted preferences
    // only, so no API handle (or reachable server) is needed.
    if let Commands::Columns { command } = &cli.command {
        let data_dir = rolodex_runtime::resolve_data_dir(cli.data_dir.as_deref())?;
        return handlers::columns::handle(&data_dir, command, format);
    }

    let context = CliContext::build(cli.data_dir.as_deref(), cli.base_url.as_deref())?;
    debug!("using directory service at {}", context.config.base_url);

    match cli.command {
        Commands::Contacts { command } => {
            handlers::contacts::handle(&context, command, format).await
        }
        Commands::Companies { command } => {
            handlers::companies::handle(&context, command, format).await
        }
        Commands::Columns { .. } => unreachable!("handled above"),
        Commands::Users { command } => handlers::users::handle(&context, command, format).await,
    }
}
