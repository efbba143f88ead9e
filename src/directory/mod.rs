use crate::directory::error::FetchError;
use crate::docente::Docente;

pub(crate) mod client;
pub use client::DirectoryClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Source of docente snapshots.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DocenteSource: Send + Sync {
    /// URL the records are fetched from.
    fn endpoint(&self) -> &str;

    /// Fetch the full record list, in server order.
    async fn fetch_docentes(&self) -> Result<Vec<Docente>, FetchError>;
}
