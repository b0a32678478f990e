//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use usage_roles::{
    cli::{Commands, UsageRoles},
    commands::{
        compute_roles::{handle_compute_roles, BatchOptions, ComputeParams},
        import::{handle_import, ImportParams},
        open_database, resolve_season,
        show_roles::{handle_show_roles, ShowParams},
    },
    Result,
};

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
fn main() -> Result<()> {
    let app = UsageRoles::parse();
    init_logging(app.verbose);

    let mut db = open_database(app.db)?;

    match app.command {
        Commands::Import {
            file,
            season,
            replace,
            json,
        } => handle_import(
            ImportParams {
                file,
                season,
                replace,
                as_json: json,
            },
            &mut db,
        )?,

        Commands::Compute {
            role,
            season,
            min_games,
            dry_run,
            player,
            json,
        } => {
            let options = BatchOptions {
                role,
                season: resolve_season(season)?,
                min_games,
                dry_run,
                player,
            };
            handle_compute_roles(
                ComputeParams {
                    options,
                    as_json: json,
                    verbose: app.verbose,
                },
                &mut db,
            )?
        }

        Commands::Show {
            role,
            season,
            tier,
            limit,
            json,
        } => handle_show_roles(
            ShowParams {
                role,
                season: resolve_season(season)?,
                tier,
                limit,
                as_json: json,
            },
            &db,
        )?,
    }

    Ok(())
}
