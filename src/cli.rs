use std::{path::PathBuf, time::Duration};

use clap::Parser;
use diesel_async::AsyncPgConnection;
use tracing::{error, info};

use crate::coerce::TimestampPolicy;
use crate::config::{DEFAULT_DATA_DIR, SeedConfig};
use crate::pool::get_pool;
use crate::repository::{MemoryRepository, SeedRepository, seed_in_transaction};
use crate::seed::{self, SeedReport};
use crate::utils::{Result, SeedError};

#[derive(Parser, Debug)]
#[command(author, version, about = "Reload the QR menu tables from CSV seed files")]
pub struct Args {
    /// Directory holding user.csv, store.csv, menucategory.csv and menuitem.csv
    #[arg(long, env = "SEED_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    #[arg(long, env = "DATABASE_URL", required_unless_present = "dry_run")]
    pub database_url: Option<String>,

    /// How createdAt/updatedAt columns are resolved in user.csv
    #[arg(
        long,
        env = "SEED_TIMESTAMPS",
        value_enum,
        default_value_t = TimestampPolicy::Strict
    )]
    pub timestamps: TimestampPolicy,

    /// Run every phase in a single transaction
    #[arg(long, env = "SEED_ATOMIC")]
    pub atomic: bool,

    /// Load into an in-memory store instead of the database
    #[arg(long, conflicts_with = "atomic")]
    pub dry_run: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Seconds to wait for a database connection
    #[arg(long, env = "SEED_CONNECT_TIMEOUT", default_value_t = 10)]
    pub connect_timeout: u64,
}

/// Runs one seed invocation. A failure is logged at `error` before it is
/// returned; the binary maps `Err` to a failing exit status.
pub async fn execute(args: Args) -> Result<SeedReport> {
    let json = args.json;

    let outcome = match run(args).await {
        Ok(report) => publish(&report, json).map(|()| report),
        Err(err) => Err(err),
    };

    if let Err(err) = &outcome {
        error!(error = %err, "seed run failed");
    }

    outcome
}

async fn run(args: Args) -> Result<SeedReport> {
    let config = SeedConfig::new(args.data_dir).with_timestamps(args.timestamps);

    if args.dry_run {
        info!("dry run: loading into memory");
        let mut repo = MemoryRepository::constrained();
        let report = seed::run(&mut repo, &config).await?;
        log_row_counts(&mut repo).await?;
        return Ok(report);
    }

    let db_url = args
        .database_url
        .ok_or_else(|| SeedError::Config("DATABASE_URL must be set".to_owned()))?;

    let pool = get_pool(&db_url, Duration::from_secs(args.connect_timeout));

    let outcome = match pool.get().await {
        Ok(mut conn) => seed_database(&mut conn, &config, args.atomic).await,
        Err(err) => Err(SeedError::pool(err)),
    };

    drop(pool);
    info!("database connection released");

    outcome
}

async fn seed_database(
    conn: &mut AsyncPgConnection,
    config: &SeedConfig,
    atomic: bool,
) -> Result<SeedReport> {
    let report = if atomic {
        seed_in_transaction(conn, config).await?
    } else {
        seed::run(conn, config).await?
    };

    log_row_counts(conn).await?;

    Ok(report)
}

async fn log_row_counts<R: SeedRepository + ?Sized>(repo: &mut R) -> Result<()> {
    for (kind, rows) in seed::row_counts(repo).await? {
        info!(entity = %kind, rows, "table row count");
    }
    Ok(())
}

fn publish(report: &SeedReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for phase in &report.phases {
        info!(
            entity = %phase.entity,
            deleted = phase.deleted,
            read = phase.read,
            skipped = phase.skipped,
            inserted = phase.inserted,
            unchanged = phase.unchanged,
            "phase summary"
        );
    }

    Ok(())
}
