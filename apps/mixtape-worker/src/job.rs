use std::sync::Arc;

use tokio::{sync::Semaphore, task::JoinSet};

use crate::error::{Error, Result};
use mixtape_config::Config;
use mixtape_engine::{QueryContext, orchestrate};
use mixtape_storage::{FsCheckpointStore, FsShardSource, ReportRow, write_report};

/// Outcome summary of one job run. Failed queries are reported here and in
/// the log, and omitted from the output file.
#[derive(Debug)]
pub struct JobReport {
	pub completed: usize,
	pub failed: Vec<(u64, String)>,
}

/// Runs every query playlist against the sharded corpus and writes the
/// recommendation report.
///
/// Queries are independent: each one owns its checkpoint (keyed by query
/// id), so they run concurrently with no shared mutable state, bounded by
/// the configured worker count. One query's failure never aborts its
/// siblings.
pub async fn run_job(config: &Config) -> Result<JobReport> {
	let queries = mixtape_storage::load_playlists(&config.job.query_file)?;
	let source = Arc::new(FsShardSource::new(&config.corpus.shard_dir));
	let store = Arc::new(FsCheckpointStore::new(&config.job.checkpoint_dir));
	let semaphore = Arc::new(Semaphore::new(config.runtime.workers));
	let top_k = config.ranking.top_k;
	let target_count = config.ranking.recommendations;
	let mut tasks = JoinSet::new();

	tracing::info!(
		queries = queries.len(),
		workers = config.runtime.workers,
		top_k,
		target_count,
		"Starting recommendation job."
	);

	for query in queries {
		let source = Arc::clone(&source);
		let store = Arc::clone(&store);
		let semaphore = Arc::clone(&semaphore);

		tasks.spawn(async move {
			let query_id = query.id;
			let Ok(_permit) = semaphore.acquire_owned().await else {
				return (query_id, Err("Worker pool closed.".to_string()));
			};
			let scan = tokio::task::spawn_blocking(move || {
				let ctx = QueryContext::new(query, target_count);
				let ranked = orchestrate(&ctx, source.as_ref(), store.as_ref(), top_k)?;
				let track_uris =
					mixtape_engine::assemble(&ranked, &ctx.seed_tracks, ctx.target_count);

				Ok::<_, mixtape_engine::Error>(ReportRow { query_id: ctx.query.id, track_uris })
			})
			.await;
			let result = match scan {
				Ok(Ok(row)) => Ok(row),
				Ok(Err(err)) => Err(err.to_string()),
				Err(err) => Err(format!("Query task panicked: {err}.")),
			};

			(query_id, result)
		});
	}

	let mut rows = Vec::new();
	let mut failed = Vec::new();

	while let Some(joined) = tasks.join_next().await {
		let (query_id, result) = joined.map_err(|err| Error::Join(err.to_string()))?;

		match result {
			Ok(row) => {
				tracing::debug!(query_id, tracks = row.track_uris.len(), "Query completed.");
				rows.push(row);
			},
			Err(reason) => {
				tracing::error!(query_id, %reason, "Query failed; omitting from report.");
				failed.push((query_id, reason));
			},
		}
	}

	// Tasks finish in whatever order the pool allows; the report is sorted
	// by query id so reruns produce identical files.
	rows.sort_by_key(|row| row.query_id);
	write_report(&config.job.output_file, &rows)?;

	Ok(JobReport { completed: rows.len(), failed })
}
