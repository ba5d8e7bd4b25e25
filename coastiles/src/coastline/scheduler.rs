//! Runs the refinement on a pool of worker threads.
//!
//! Workers pull tasks from the task queue and push finalized tiles into the output
//! queue. The calling thread acts as the only writer: it commits output tiles to the
//! store until both queues are drained. Workers stop once the task queue is drained.
//! All waits are bounded by the poll interval, so every loop rechecks termination and
//! the abort flag regularly.

use super::{
	Coastline, CoastlineStats, GeoTask, OutputTile, SeasideAccumulator, WorkQueue,
	refine::{RefineContext, process_task},
};
use crate::{
	CoastlineConfig,
	storage::{META_KEY_SEASIDE_TREE, TileStore},
};
use anyhow::{Context, Result, ensure};
use coastiles_core::{ConcurrencyLimits, ScopedTimer, TileCoord};
use log::{debug, info};
use parking_lot::Mutex;
use std::{
	sync::{
		Arc,
		atomic::{AtomicBool, Ordering},
	},
	thread,
	time::Duration,
};

/// Outcome counts of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoastlineReport {
	pub fully_seaside: u64,
	pub fully_dirtside: u64,
	pub finalized: u64,
	/// Words in the stored seaside summary.
	pub seaside_nodes: usize,
}

/// The first fatal error of any thread, and the flag telling all others to stop.
#[derive(Default)]
struct RunState {
	abort: AtomicBool,
	error: Mutex<Option<anyhow::Error>>,
}

impl RunState {
	fn fail(&self, error: anyhow::Error) {
		let mut slot = self.error.lock();
		if slot.is_none() {
			*slot = Some(error);
		}
		self.abort.store(true, Ordering::SeqCst);
	}

	fn is_aborted(&self) -> bool {
		self.abort.load(Ordering::SeqCst)
	}

	fn into_result(self) -> Result<()> {
		match self.error.into_inner() {
			Some(error) => Err(error),
			None => Ok(()),
		}
	}
}

/// Classifies the whole tile pyramid against `coastlines`, writes every finalized tile
/// to `store` and stores the seaside summary under [`META_KEY_SEASIDE_TREE`].
pub fn process_coastlines(
	coastlines: Vec<Arc<Coastline>>,
	store: &mut dyn TileStore,
	config: &CoastlineConfig,
) -> Result<CoastlineReport> {
	config.verify()?;
	let limits = ConcurrencyLimits::from_requested(config.workers);
	let poll_interval = config.poll_interval();
	debug!(
		"processing {} coastlines from level {} to {} with {} workers",
		coastlines.len(),
		config.initial_level,
		config.max_level,
		limits.workers
	);

	let geo_queue = WorkQueue::new();
	let db_queue = WorkQueue::new();
	let stats = CoastlineStats::new(config.max_level);
	let seaside = SeasideAccumulator::default();
	let state = RunState::default();

	for coord in TileCoord::iter_level(config.initial_level) {
		geo_queue.enqueue(GeoTask::new(coord, coastlines.clone()))?;
	}
	drop(coastlines);

	let context = RefineContext {
		geo_queue: &geo_queue,
		db_queue: &db_queue,
		stats: &stats,
		seaside: &seaside,
		max_level: config.max_level,
	};

	thread::scope(|scope| {
		for worker_id in 0..limits.workers {
			let (context, state) = (&context, &state);
			let spawned = thread::Builder::new()
				.name(format!("coastline-worker-{worker_id}"))
				.spawn_scoped(scope, move || run_worker(worker_id, context, state, poll_interval));
			if let Err(error) = spawned {
				state.fail(anyhow::Error::from(error).context("Failed to spawn worker thread"));
				break;
			}
		}
		run_writer(&context, &mut *store, &state, poll_interval);
	});

	state.into_result()?;

	ensure!(
		geo_queue.residual() == 0 && geo_queue.is_finished(),
		"task queue not drained: {} queued, {} pending",
		geo_queue.residual(),
		geo_queue.pending()
	);
	ensure!(
		db_queue.residual() == 0 && db_queue.is_finished(),
		"output queue not drained: {} queued, {} pending",
		db_queue.residual(),
		db_queue.pending()
	);

	stats.summary();

	let tree = {
		let _timer = ScopedTimer::new("seaside tree");
		seaside.into_tree()?
	};
	info!("seaside tree with {} nodes", tree.node_count());
	store
		.put_meta(META_KEY_SEASIDE_TREE, &tree.to_blob()?)
		.context("Failed to store the seaside tree")?;

	Ok(CoastlineReport {
		fully_seaside: stats.fully_seaside(),
		fully_dirtside: stats.fully_dirtside(),
		finalized: stats.finalized(),
		seaside_nodes: tree.node_count(),
	})
}

fn run_worker(worker_id: usize, context: &RefineContext, state: &RunState, poll_interval: Duration) {
	debug!("worker {worker_id} started");
	while !context.geo_queue.is_finished() && !state.is_aborted() {
		let Some(task) = context.geo_queue.dequeue(poll_interval) else {
			continue;
		};
		let coord = task.coord;
		let result = process_task(task, context);
		context.geo_queue.finish();
		if let Err(error) = result {
			state.fail(error.context(format!("worker {worker_id} failed on tile {coord}")));
		}
	}
	debug!("worker {worker_id} finished");
}

/// Commits output tiles until both queues are drained.
fn run_writer(context: &RefineContext, store: &mut dyn TileStore, state: &RunState, poll_interval: Duration) {
	while (!context.geo_queue.is_finished() || !context.db_queue.is_finished()) && !state.is_aborted() {
		let Some(tile) = context.db_queue.dequeue(poll_interval) else {
			continue;
		};
		let result = store.insert_feature(&tile.coord, &tile.feature);
		context.db_queue.finish();
		if let Err(error) = result {
			state.fail(error.context(format!("Failed to write tile {}", tile.coord)));
		}
	}
}
