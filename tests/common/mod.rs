// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared pieces of the integration suites: in-process stores that slow down or
//! fail on demand, and the gate that skips the etcd container suite on hosts
//! without a Docker daemon.

pub mod stores;

use std::sync::OnceLock;

/// Whether `docker ps` succeeded, evaluated once per test binary.
#[allow(dead_code)]
static DOCKER_DAEMON: OnceLock<bool> = OnceLock::new();

/// Returns `true` when an etcd container can be started for `test_name`.
///
/// Otherwise a one-line skip notice naming the test goes to stderr, and the
/// caller returns early so the suite stays green on hosts without Docker.
#[allow(dead_code)]
pub fn etcd_container_allowed(test_name: &str) -> bool {
    let ready = *DOCKER_DAEMON.get_or_init(|| {
        std::process::Command::new("docker")
            .arg("ps")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    });
    if !ready {
        eprintln!(
            "skipping {}: no Docker daemon reachable, etcd container not started",
            test_name
        );
    }
    ready
}
