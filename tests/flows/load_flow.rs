//! Complete load-run flows against a local mock resolver:
//! dispatch -> UDP round trip -> decode -> report.

#[path = "../common/mod.rs"]
mod common;

use common::{MockBehavior, MockResolver};
use ferrous_blast_application::RunLoadUseCase;
use ferrous_blast_domain::LoadPlan;
use ferrous_blast_infrastructure::{QuerySource, UdpTransport};
use std::sync::Arc;
use std::time::Duration;

fn plan(target: String, jobs: u64, workers: usize, queue_capacity: usize) -> LoadPlan {
    LoadPlan {
        target,
        jobs,
        workers,
        queue_capacity,
    }
}

fn use_case(timeout: Duration) -> RunLoadUseCase {
    let transport = Arc::new(UdpTransport::new(timeout));
    let queries = Arc::new(QuerySource::with_base_seed(5, 0xFEED));
    RunLoadUseCase::new(transport, queries)
}

#[tokio::test]
async fn answered_run_succeeds_for_every_job() {
    let resolver = MockResolver::start(MockBehavior::Answer(1)).await;
    let run = use_case(Duration::from_secs(3));

    let report = run.execute(&plan(resolver.target(), 64, 4, 8)).await;

    assert_eq!(report.attempted, 64);
    assert_eq!(report.succeeded, 64);
    assert_eq!(report.failed, 0);
    resolver.shutdown();
}

#[tokio::test]
async fn empty_answers_still_count_as_success() {
    let resolver = MockResolver::start(MockBehavior::Answer(0)).await;
    let run = use_case(Duration::from_secs(3));

    let report = run.execute(&plan(resolver.target(), 16, 2, 4)).await;

    assert_eq!(report.succeeded, 16);
    assert_eq!(report.failed, 0);
    resolver.shutdown();
}

#[tokio::test]
async fn garbage_replies_fail_every_job_without_aborting() {
    let resolver = MockResolver::start(MockBehavior::Garbage).await;
    let run = use_case(Duration::from_secs(3));

    let report = run.execute(&plan(resolver.target(), 16, 4, 4)).await;

    assert_eq!(report.attempted, 16);
    assert_eq!(report.succeeded, 0);
    assert_eq!(report.failed, 16);
    resolver.shutdown();
}

#[tokio::test]
async fn silent_resolver_times_out_each_job() {
    let resolver = MockResolver::start(MockBehavior::Silent).await;
    let run = use_case(Duration::from_millis(50));

    let report = run.execute(&plan(resolver.target(), 8, 4, 4)).await;

    assert_eq!(report.attempted, 8);
    assert_eq!(report.failed, 8);
    resolver.shutdown();
}

#[tokio::test]
async fn workers_overlap_their_waits() {
    let resolver = MockResolver::start(MockBehavior::Silent).await;
    let run = use_case(Duration::from_millis(50));

    // 8 timeouts of 50ms across 4 workers: roughly two rounds wall clock,
    // far below the 400ms a serial run would need.
    let report = run.execute(&plan(resolver.target(), 8, 4, 4)).await;

    assert_eq!(report.failed, 8);
    assert!(
        report.elapsed < Duration::from_millis(350),
        "run took {:?}",
        report.elapsed
    );
    resolver.shutdown();
}

#[tokio::test]
async fn queue_narrower_than_jobs_applies_backpressure_not_loss() {
    let resolver = MockResolver::start(MockBehavior::Answer(2)).await;
    let run = use_case(Duration::from_secs(3));

    let report = run.execute(&plan(resolver.target(), 40, 3, 2)).await;

    assert_eq!(report.attempted, 40);
    assert_eq!(report.succeeded, 40);
    resolver.shutdown();
}
