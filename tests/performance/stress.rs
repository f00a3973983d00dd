//! Reference-workload runs: the default 4096-job, 16-worker shape.

#[path = "../common/mod.rs"]
mod common;

use common::{MockBehavior, MockResolver};
use ferrous_blast_application::RunLoadUseCase;
use ferrous_blast_domain::{Config, LoadPlan};
use ferrous_blast_infrastructure::{QuerySource, UdpTransport};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;

/// Grabs a free local port, then releases it so nothing listens there.
async fn closed_local_target() -> String {
    let socket = UdpSocket::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind scratch socket");
    let target = socket
        .local_addr()
        .expect("Scratch socket has no address")
        .to_string();
    drop(socket);
    target
}

fn run_with_timeout(timeout: Duration) -> RunLoadUseCase {
    let transport = Arc::new(UdpTransport::new(timeout));
    let queries = Arc::new(QuerySource::new(5));
    RunLoadUseCase::new(transport, queries)
}

#[tokio::test]
async fn scaled_default_workload_completes() {
    let resolver = MockResolver::start(MockBehavior::Answer(1)).await;
    let run = run_with_timeout(Duration::from_secs(3));

    // Default shape at 1/16 the job volume.
    let plan = LoadPlan {
        target: resolver.target(),
        jobs: 256,
        workers: 16,
        queue_capacity: 256,
    };
    let report = run.execute(&plan).await;

    assert_eq!(report.attempted, 256);
    assert_eq!(report.succeeded, 256);
    assert_eq!(report.failed, 0);
    resolver.shutdown();
}

#[tokio::test]
#[ignore] // Heavy test - run explicitly
async fn full_reference_workload_completes() {
    let resolver = MockResolver::start(MockBehavior::Answer(1)).await;
    let run = run_with_timeout(Duration::from_secs(3));

    let plan = LoadPlan {
        target: resolver.target(),
        ..LoadPlan::from_config(&Config::default())
    };
    let report = run.execute(&plan).await;

    println!(
        "Completed {} queries in {:?} ({:.2} QPS)",
        report.attempted,
        report.elapsed,
        report.queries_per_second()
    );

    assert_eq!(report.attempted, 4096);
    assert_eq!(report.succeeded, 4096);
    resolver.shutdown();
}

#[tokio::test]
#[ignore] // Heavy test - run explicitly
async fn full_reference_workload_survives_total_failure() {
    let target = closed_local_target().await;
    // Short deadline keeps the worst case bounded on hosts that swallow
    // the ICMP rejection instead of failing the read.
    let run = run_with_timeout(Duration::from_millis(200));

    let plan = LoadPlan {
        target,
        ..LoadPlan::from_config(&Config::default())
    };
    let report = run.execute(&plan).await;

    println!(
        "Survived {} failed queries in {:?} ({:.2} QPS)",
        report.failed,
        report.elapsed,
        report.queries_per_second()
    );

    assert_eq!(report.attempted, 4096);
    assert_eq!(report.failed, 4096);
    assert_eq!(report.succeeded, 0);
}
