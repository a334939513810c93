//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use hockey_contracts::{
    cli::{Cli, Commands},
    commands::{
        common::{CommandContext, ContextOptions},
        compare::handle_compare,
        db_test::handle_db_test,
        debug_stats::handle_debug_stats,
        gar::handle_gar,
        init_db::handle_init_db,
        player::handle_player,
        players::{handle_players, PlayersParams},
    },
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let app = Cli::parse();
    init_logging(app.global.verbose);

    let global = app.global;
    match &app.command {
        Commands::InitDb { path } => return handle_init_db(path.clone(), global.database_url),
        Commands::DbTest { json } => {
            return handle_db_test(global.database_url, global.pool_size, *json).await
        }
        _ => {}
    }

    let ctx = CommandContext::new(ContextOptions {
        database_url: global.database_url,
        pool_size: global.pool_size,
        source: global.source,
        fallback: global.fallback,
        verbose: global.verbose,
    })
    .await?;

    let result = match app.command {
        Commands::Players { filters, json } => {
            handle_players(
                &ctx,
                PlayersParams {
                    position: filters.position,
                    contract_type: filters.contract_type,
                    value_tier: filters.tier,
                    name: filters.name,
                    team: filters.team,
                    sort: filters.sort,
                    order: filters.order,
                    limit: filters.limit,
                    as_json: json,
                },
            )
            .await
        }
        Commands::Player { id, view, json } => handle_player(&ctx, id, view, json).await,
        Commands::Compare { ids, json } => handle_compare(&ctx, ids, json).await,
        Commands::Gar { ids, json } => handle_gar(&ctx, ids, json).await,
        Commands::DebugStats { id, json } => handle_debug_stats(&ctx, id, json).await,
        Commands::InitDb { .. } | Commands::DbTest { .. } => Ok(()),
    };

    ctx.close();
    Ok(result?)
}
