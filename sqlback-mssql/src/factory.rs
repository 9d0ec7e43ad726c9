//! Connection factory seam.

use async_trait::async_trait;
use tiberius::Client;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};
use tracing::debug;

use crate::config::MssqlConfig;
use crate::error::{MssqlError, MssqlResult};

/// A connected tiberius client over TCP.
pub type MssqlClient = Client<Compat<TcpStream>>;

/// Opens connections for the executor.
///
/// This is the injected connection capability: the executor never dials the
/// network itself, so tests can substitute a factory that fails or records.
/// Each call yields a fresh connection owned exclusively by the caller and
/// released when the client is dropped.
#[async_trait]
pub trait ConnectionFactory: Send + Sync {
    /// Open and authenticate a connection for the given configuration.
    async fn connect(&self, config: &MssqlConfig) -> MssqlResult<MssqlClient>;
}

/// Factory that dials the server directly over TCP.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnectionFactory;

#[async_trait]
impl ConnectionFactory for TcpConnectionFactory {
    async fn connect(&self, config: &MssqlConfig) -> MssqlResult<MssqlClient> {
        let tiberius_config = config.to_tiberius_config()?;
        let addr = tiberius_config.get_addr();
        debug!(addr = %addr, database = %config.database, "opening connection");

        let tcp = timeout(config.connect_timeout, TcpStream::connect(addr.as_str()))
            .await
            .map_err(|_| MssqlError::Timeout(config.connect_timeout.as_millis() as u64))??;
        tcp.set_nodelay(true)?;

        let client = Client::connect(tiberius_config, tcp.compat_write()).await?;
        Ok(client)
    }
}
