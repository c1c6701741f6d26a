//! Admin export and restore of the task collection.

use crate::{BoardContext, Result as BoardErrorResult};

use log::{info, warn};
use tb_core::backup::{export_json, parse_backup};
use tb_core::{Fields, ImportReport, Task};
use tb_store::{BatchOp, TASKS};

const IMPORT_CONFIRM_PROMPT: &str = "Importing replaces ALL current tasks. Continue?";

/// Serialize every task document into a pretty-printed backup file.
/// Admin only. Documents that no longer decode are skipped, not fatal.
pub async fn export_tasks(ctx: &BoardContext) -> BoardErrorResult<String> {
    ctx.require_admin().await?;

    let documents = ctx.store.get_all(TASKS).await?;
    let mut tasks = Vec::with_capacity(documents.len());
    for doc in &documents {
        match Task::from_fields(&doc.id, &doc.fields) {
            Ok(task) => tasks.push(task),
            Err(error) => warn!("Skipping malformed task document in export: {error}"),
        }
    }

    let json = export_json(&tasks)?;
    info!("Exported {} task(s)", tasks.len());
    Ok(json)
}

/// Restore the task collection from a backup file.
///
/// The whole file is parsed and converted before anything is deleted, so a
/// malformed record aborts with the board untouched. Existing documents
/// are then removed and the backup written back under its original ids,
/// both in batches bounded by the configured limit. Returns `None` when
/// the user declines.
pub async fn import_tasks(
    ctx: &BoardContext,
    json: &str,
) -> BoardErrorResult<Option<ImportReport>> {
    ctx.require_admin().await?;

    // 1. Validate the whole file before touching the board
    let records = parse_backup(json)?;
    let mut writes: Vec<(Option<String>, Fields)> = Vec::with_capacity(records.len());
    for record in records {
        writes.push(record.into_fields()?);
    }

    // 2. The destructive part starts after this answer
    if !ctx.dialogs.confirm(IMPORT_CONFIRM_PROMPT) {
        return Ok(None);
    }

    // 3. Clear the current collection
    let existing = ctx.store.get_all(TASKS).await?;
    let deleted = existing.len();
    let deletes = existing
        .into_iter()
        .map(|doc| BatchOp::Delete { id: doc.id })
        .collect();
    commit_chunked(ctx, deletes).await?;

    // 4. Write the backup records, reusing their stored ids
    let created = writes.len();
    let sets = writes
        .into_iter()
        .map(|(id, fields)| BatchOp::Set { id, fields })
        .collect();
    commit_chunked(ctx, sets).await?;

    info!("Imported backup: deleted {deleted} task(s), created {created} task(s)");
    ctx.metrics.write_committed("import");
    Ok(Some(ImportReport { deleted, created }))
}

async fn commit_chunked(ctx: &BoardContext, mut ops: Vec<BatchOp>) -> BoardErrorResult<()> {
    let limit = ctx.backup_batch_limit.max(1);
    while !ops.is_empty() {
        let rest = ops.split_off(ops.len().min(limit));
        ctx.store.batch(TASKS, ops).await?;
        ops = rest;
    }
    Ok(())
}
