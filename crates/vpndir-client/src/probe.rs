//! Live latency probing of server reachability addresses.

use std::time::{Duration, Instant};

use futures::future::join_all;
use tokio::net::TcpStream;
use tracing::debug;

use vpndir_common::catalog::Server;

/// Default per-attempt probe timeout.
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(1);

/// Port probed on the station address. Every catalog server terminates TLS
/// here, so a connect round trip is answered regardless of which VPN
/// technologies the server runs.
const PROBE_PORT: u16 = 443;

/// Measures mean round-trip time to servers by timing TCP connects.
///
/// A probe is a full connect handshake to `station:port`, bounded by the
/// per-attempt timeout; the worst-case total per server therefore scales
/// with the attempt count. A server where zero attempts succeed yields
/// `None`, the "unreachable" sentinel the ranking code orders last.
#[derive(Debug, Clone)]
pub struct LatencyProber {
    attempts: u32,
    timeout: Duration,
    port: u16,
}

impl Default for LatencyProber {
    fn default() -> Self {
        Self {
            attempts: 4,
            timeout: ATTEMPT_TIMEOUT,
            port: PROBE_PORT,
        }
    }
}

impl LatencyProber {
    pub fn new(attempts: u32) -> Self {
        Self {
            attempts: attempts.max(1),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Mean round-trip time over the successful attempts against `station`,
    /// or `None` when every attempt failed or timed out.
    pub async fn measure(&self, station: &str) -> Option<Duration> {
        let mut total = Duration::ZERO;
        let mut successes = 0u32;

        for _ in 0..self.attempts {
            let start = Instant::now();
            let connect = TcpStream::connect((station, self.port));
            match tokio::time::timeout(self.timeout, connect).await {
                Ok(Ok(_stream)) => {
                    total += start.elapsed();
                    successes += 1;
                }
                Ok(Err(_)) | Err(_) => {}
            }
        }

        if successes == 0 {
            debug!(station, "no probe attempt succeeded, marking unreachable");
            return None;
        }
        Some(total / successes)
    }

    /// Probes every server concurrently (one future per server, unbounded
    /// fan-out) and joins them all before returning. Results are in input
    /// order: `result[i]` belongs to `servers[i]`.
    pub async fn measure_all(&self, servers: &[Server]) -> Vec<Option<Duration>> {
        let probes = servers.iter().map(|server| self.measure(&server.station));
        join_all(probes).await
    }
}
