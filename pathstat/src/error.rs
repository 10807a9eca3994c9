/// Error type for filesystem metadata queries.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The underlying OS metadata query failed.
    #[error("filesystem query failed: {0}")]
    QueryFailed(#[from] std::io::Error),
}
