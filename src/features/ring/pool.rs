//! Bounded worker pool for ring animations
//!
//! A small thread pool with a core worker, a burst limit and a bounded
//! queue. When the queue is full and no more workers may be started, the
//! oldest queued job is dropped to admit the new one.
//!
//! Jobs that were already picked up by a worker always run to completion;
//! only queued, not-yet-started jobs can be discarded.

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::{Context, bail};
use parking_lot::{Condvar, Mutex};

use crate::features::settings::PoolSettings;

/// A unit of work run on a pool worker
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// How a submitted job was admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// A new worker was started with the job
    Started,
    /// The job waits in the queue for a free worker
    Queued,
    /// The queue was full; its oldest job was dropped to make room
    DisplacedOldest,
}

/// Counters describing pool activity
#[derive(Debug, Default)]
pub struct PoolStats {
    submitted: AtomicU64,
    started: AtomicU64,
    completed: AtomicU64,
    discarded: AtomicU64,
}

impl PoolStats {
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::SeqCst)
    }

    /// Jobs that began running on a worker
    pub fn started(&self) -> u64 {
        self.started.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }

    /// Queued jobs dropped by the discard-oldest policy
    pub fn discarded(&self) -> u64 {
        self.discarded.load(Ordering::SeqCst)
    }
}

struct PoolState {
    queue: VecDeque<Job>,
    workers: usize,
    shutdown: bool,
}

struct Shared {
    state: Mutex<PoolState>,
    available: Condvar,
    stats: PoolStats,
    core_workers: usize,
    max_workers: usize,
    queue_capacity: usize,
    keep_alive: Duration,
    next_worker_id: AtomicUsize,
}

/// Worker pool running animation jobs off the UI thread
pub struct AnimationPool {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for AnimationPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationPool")
            .field("core_workers", &self.shared.core_workers)
            .field("max_workers", &self.shared.max_workers)
            .field("queue_capacity", &self.shared.queue_capacity)
            .field("stats", &self.shared.stats)
            .finish()
    }
}

impl AnimationPool {
    /// Create a pool; no threads are started until the first submission
    pub fn new(settings: &PoolSettings) -> Self {
        // A pool without a core worker would queue its first job forever
        let core_workers = if settings.core_workers == 0 {
            tracing::warn!("Animation pool needs at least one core worker, using 1");
            1
        } else {
            settings.core_workers
        };
        let max_workers = settings.max_workers.max(core_workers);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(PoolState {
                    queue: VecDeque::new(),
                    workers: 0,
                    shutdown: false,
                }),
                available: Condvar::new(),
                stats: PoolStats::default(),
                core_workers,
                max_workers,
                queue_capacity: settings.queue_capacity.max(1),
                keep_alive: settings.keep_alive(),
                next_worker_id: AtomicUsize::new(0),
            }),
        }
    }

    /// Submit a job
    ///
    /// Admission order: start a core worker, else queue, else start a burst
    /// worker, else drop the oldest queued job and queue this one.
    pub fn submit<F>(&self, job: F) -> anyhow::Result<Admission>
    where
        F: FnOnce() + Send + 'static,
    {
        let job: Job = Box::new(job);
        let shared = &self.shared;

        let mut state = shared.state.lock();
        if state.shutdown {
            bail!("animation pool is shut down");
        }
        shared.stats.submitted.fetch_add(1, Ordering::SeqCst);

        if state.workers < shared.core_workers {
            spawn_worker(shared, &mut state, job)?;
            return Ok(Admission::Started);
        }

        if state.queue.len() < shared.queue_capacity {
            state.queue.push_back(job);
            shared.available.notify_one();
            return Ok(Admission::Queued);
        }

        if state.workers < shared.max_workers {
            spawn_worker(shared, &mut state, job)?;
            return Ok(Admission::Started);
        }

        if state.queue.pop_front().is_some() {
            shared.stats.discarded.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("Animation queue full, discarded oldest queued job");
        }
        state.queue.push_back(job);
        shared.available.notify_one();
        Ok(Admission::DisplacedOldest)
    }

    pub fn stats(&self) -> &PoolStats {
        &self.shared.stats
    }

    /// Number of live worker threads
    pub fn live_workers(&self) -> usize {
        self.shared.state.lock().workers
    }

    /// Number of jobs waiting for a worker
    pub fn queued(&self) -> usize {
        self.shared.state.lock().queue.len()
    }
}

impl Drop for AnimationPool {
    fn drop(&mut self) {
        let mut state = self.shared.state.lock();
        state.shutdown = true;
        let dropped = state.queue.len();
        state.queue.clear();
        drop(state);
        self.shared.available.notify_all();
        if dropped > 0 {
            tracing::debug!("Animation pool dropped with {} queued jobs", dropped);
        }
    }
}

fn spawn_worker(shared: &Arc<Shared>, state: &mut PoolState, job: Job) -> anyhow::Result<()> {
    let id = shared.next_worker_id.fetch_add(1, Ordering::SeqCst);
    let worker_shared = Arc::clone(shared);

    thread::Builder::new()
        .name(format!("ring-anim-{}", id))
        .spawn(move || worker_loop(worker_shared, job))
        .with_context(|| format!("failed to spawn animation worker {}", id))?;

    state.workers += 1;
    tracing::debug!("Started animation worker {} ({} live)", id, state.workers);
    Ok(())
}

fn worker_loop(shared: Arc<Shared>, first: Job) {
    let mut next = Some(first);

    loop {
        if let Some(job) = next.take() {
            run_job(&shared, job);
        }

        let mut state = shared.state.lock();
        loop {
            if let Some(job) = state.queue.pop_front() {
                next = Some(job);
                break;
            }
            if state.shutdown {
                state.workers -= 1;
                return;
            }
            if state.workers > shared.core_workers {
                let timed_out = shared
                    .available
                    .wait_for(&mut state, shared.keep_alive)
                    .timed_out();
                if timed_out && state.queue.is_empty() && state.workers > shared.core_workers {
                    state.workers -= 1;
                    tracing::debug!("Idle animation worker exiting ({} live)", state.workers);
                    return;
                }
            } else {
                shared.available.wait(&mut state);
            }
        }
    }
}

fn run_job(shared: &Shared, job: Job) {
    shared.stats.started.fetch_add(1, Ordering::SeqCst);
    if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
        tracing::error!("Animation job panicked");
    }
    shared.stats.completed.fetch_add(1, Ordering::SeqCst);
}
