//! Network infrastructure — implements `PortAllocator` against the OS.

use std::collections::HashSet;
use std::net::TcpListener;
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::application::ports::PortAllocator;

/// Allocates free ports by binding port 0 on the loopback interface.
///
/// Remembers every port it has handed out, so two instances bound through
/// one allocator cannot race onto the same port after the probe listener
/// closes.
#[derive(Debug, Default)]
pub struct OsPortAllocator {
    handed_out: Mutex<HashSet<u16>>,
}

impl OsPortAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PortAllocator for OsPortAllocator {
    fn allocate(&self) -> Result<u16> {
        let mut handed_out = self
            .handed_out
            .lock()
            .map_err(|_| anyhow::anyhow!("port allocator lock poisoned"))?;
        for _ in 0..16 {
            let listener =
                TcpListener::bind(("127.0.0.1", 0)).context("probing for a free port")?;
            let port = listener
                .local_addr()
                .context("reading probe listener address")?
                .port();
            if handed_out.insert(port) {
                return Ok(port);
            }
        }
        anyhow::bail!("no unused port found after 16 probes")
    }
}
