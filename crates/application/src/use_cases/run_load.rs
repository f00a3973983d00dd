use crate::ports::{QueryFactory, QueryTransport};
use ferrous_blast_domain::{Job, LoadPlan, QueryMessage, RunReport};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Drives one load run: a fixed worker pool draining a bounded job queue.
///
/// The coordinator is the only producer. Workers compete for jobs until
/// the queue is closed and drained, then exit; `execute` returns only
/// after every worker has finished, so the report covers the whole run.
pub struct RunLoadUseCase {
    transport: Arc<dyn QueryTransport>,
    queries: Arc<dyn QueryFactory>,
}

#[derive(Default)]
struct RunCounters {
    attempted: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
}

impl RunLoadUseCase {
    pub fn new(transport: Arc<dyn QueryTransport>, queries: Arc<dyn QueryFactory>) -> Self {
        Self { transport, queries }
    }

    pub async fn execute(&self, plan: &LoadPlan) -> RunReport {
        info!(
            target = %plan.target,
            jobs = plan.jobs,
            workers = plan.workers,
            queue_capacity = plan.queue_capacity,
            "Starting load run"
        );

        let started = Instant::now();
        let counters = Arc::new(RunCounters::default());

        let (job_tx, job_rx) = mpsc::channel::<Job>(plan.queue_capacity);
        let job_rx = Arc::new(Mutex::new(job_rx));

        // The whole pool goes up before the first job is enqueued, so a
        // queue narrower than the job count cannot stall the coordinator.
        let mut workers = JoinSet::new();
        for worker_id in 0..plan.workers {
            let queue = Arc::clone(&job_rx);
            let transport = Arc::clone(&self.transport);
            let factory = Arc::clone(&self.queries);
            let counters = Arc::clone(&counters);
            workers.spawn(async move {
                run_worker(worker_id, factory, queue, transport, counters).await;
            });
        }
        // Workers hold the only receiver handles from here on, so the
        // queue closes when the last worker exits.
        drop(job_rx);

        let job = Job::new(plan.target.as_str());
        for _ in 0..plan.jobs {
            if job_tx.send(job.clone()).await.is_err() {
                // Every worker is gone; nothing would ever drain the rest.
                error!("Job queue closed before all jobs were enqueued");
                break;
            }
        }
        // Closing the queue is the only stop signal workers get.
        drop(job_tx);

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "Worker task failed to join");
            }
        }

        let report = RunReport {
            attempted: counters.attempted.load(Ordering::Relaxed),
            succeeded: counters.succeeded.load(Ordering::Relaxed),
            failed: counters.failed.load(Ordering::Relaxed),
            elapsed: started.elapsed(),
        };

        info!(
            attempted = report.attempted,
            succeeded = report.succeeded,
            failed = report.failed,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Load run complete"
        );

        report
    }
}

async fn run_worker(
    worker_id: usize,
    factory: Arc<dyn QueryFactory>,
    queue: Arc<Mutex<mpsc::Receiver<Job>>>,
    transport: Arc<dyn QueryTransport>,
    counters: Arc<RunCounters>,
) {
    // One message per worker, reused for every job it pulls.
    let query: QueryMessage = factory.build_query();
    debug!(worker = worker_id, subject = %query.name, id = query.id, "Worker started");

    let mut processed = 0u64;
    loop {
        // The guard is released as soon as recv resolves; the round trip
        // itself never holds the queue lock.
        let job = { queue.lock().await.recv().await };
        let Some(job) = job else { break };

        counters.attempted.fetch_add(1, Ordering::Relaxed);
        processed += 1;

        match transport.query(&query, &job.target).await {
            Ok(answer) if answer.is_empty() => {
                counters.succeeded.fetch_add(1, Ordering::Relaxed);
                info!(worker = worker_id, rcode = answer.rcode, "Got empty answer");
            }
            Ok(answer) => {
                counters.succeeded.fetch_add(1, Ordering::Relaxed);
                info!(
                    worker = worker_id,
                    answers = answer.answer_count,
                    first = answer.first_answer.as_deref().unwrap_or(""),
                    "Got answer"
                );
            }
            Err(e) => {
                counters.failed.fetch_add(1, Ordering::Relaxed);
                warn!(worker = worker_id, kind = e.kind(), error = %e, "Query failed");
            }
        }
    }

    info!(worker = worker_id, processed, "Worker exited");
}
