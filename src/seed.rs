use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::category::NewMenuCategory;
use crate::coerce::CoerceError;
use crate::config::{EntityKind, SeedConfig};
use crate::item::NewMenuItem;
use crate::reader::{Record, read_table};
use crate::repository::SeedRepository;
use crate::store::NewStore;
use crate::user::NewUser;
use crate::utils::{Result, SeedError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseReport {
    pub entity: EntityKind,
    pub deleted: usize,
    pub read: usize,
    /// Rows dropped by the reader for a column-count mismatch.
    pub skipped: usize,
    pub inserted: usize,
    /// Records whose key already existed.
    pub unchanged: usize,
}

impl PhaseReport {
    fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            deleted: 0,
            read: 0,
            skipped: 0,
            inserted: 0,
            unchanged: 0,
        }
    }

    fn tally(&mut self, inserted: bool) {
        if inserted {
            self.inserted += 1;
        } else {
            self.unchanged += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub phases: Vec<PhaseReport>,
}

impl Default for SeedReport {
    fn default() -> Self {
        Self {
            phases: EntityKind::LOAD_ORDER.map(PhaseReport::new).to_vec(),
        }
    }
}

impl SeedReport {
    pub fn phase(&self, kind: EntityKind) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.entity == kind)
    }

    fn phase_mut(&mut self, kind: EntityKind) -> &mut PhaseReport {
        let index = EntityKind::LOAD_ORDER
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        &mut self.phases[index]
    }
}

pub async fn run<R>(repo: &mut R, config: &SeedConfig) -> Result<SeedReport>
where
    R: SeedRepository + ?Sized,
{
    info!(
        data_dir = %config.data_dir.display(),
        timestamps = ?config.timestamps,
        "starting seed run"
    );

    let mut report = SeedReport::default();

    for kind in EntityKind::CLEAR_ORDER {
        let deleted = repo.delete_all(kind).await?;
        info!(entity = %kind, deleted, "cleared table");
        report.phase_mut(kind).deleted = deleted;
    }

    for kind in EntityKind::LOAD_ORDER {
        load(&mut *repo, config, kind, report.phase_mut(kind)).await?;
    }

    repo.sync_id_sequences().await?;
    debug!("id sequences synced");

    info!("seed run complete");

    Ok(report)
}

/// Row counts per table, in load order.
pub async fn row_counts<R>(repo: &mut R) -> Result<Vec<(EntityKind, i64)>>
where
    R: SeedRepository + ?Sized,
{
    let mut counts = Vec::with_capacity(EntityKind::LOAD_ORDER.len());
    for kind in EntityKind::LOAD_ORDER {
        counts.push((kind, repo.count(kind).await?));
    }
    Ok(counts)
}

#[instrument(skip_all, fields(entity = %kind))]
async fn load<R>(
    repo: &mut R,
    config: &SeedConfig,
    kind: EntityKind,
    phase: &mut PhaseReport,
) -> Result<()>
where
    R: SeedRepository + ?Sized,
{
    let file = kind.file_name();
    let table = read_table(&config.source_path(kind))?;
    phase.read = table.records.len();
    phase.skipped = table.skipped;

    match kind {
        EntityKind::User => {
            let stamps = config
                .timestamps
                .resolve(&table.headers)
                .map_err(|source| SeedError::Header { file, source })?;

            for record in &table.records {
                let user = NewUser::from_record(record, &stamps).map_err(row_error(file, record))?;
                debug!(id = %user.id, "upserting user");
                phase.tally(repo.upsert_user(&user).await?);
            }
        }
        EntityKind::Store => {
            for record in &table.records {
                let store = NewStore::from_record(record).map_err(row_error(file, record))?;
                debug!(id = store.id, owner_id = %store.owner_id, "upserting store");
                phase.tally(repo.upsert_store(&store).await?);
            }
        }
        EntityKind::MenuCategory => {
            for record in &table.records {
                let category =
                    NewMenuCategory::from_record(record).map_err(row_error(file, record))?;
                debug!(id = category.id, store_id = category.store_id, "upserting category");
                phase.tally(repo.upsert_category(&category).await?);
            }
        }
        EntityKind::MenuItem => {
            for record in &table.records {
                let item = NewMenuItem::from_record(record).map_err(row_error(file, record))?;
                debug!(id = item.id, category_id = item.category_id, "upserting item");
                phase.tally(repo.upsert_item(&item).await?);
            }
        }
    }

    info!(
        read = phase.read,
        skipped = phase.skipped,
        inserted = phase.inserted,
        unchanged = phase.unchanged,
        "loaded {file}"
    );

    Ok(())
}

fn row_error(file: &'static str, record: &Record) -> impl FnOnce(CoerceError) -> SeedError {
    let line = record.line();
    move |source| SeedError::Row { file, line, source }
}
