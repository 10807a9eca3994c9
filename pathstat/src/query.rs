//! Execution policy shared by all fallible metadata queries.

use crate::{error, trace_categories};

/// Policy applied when an underlying OS metadata query fails.
///
/// The mode is fixed when a metadata object is constructed and is copied,
/// never shared, whenever one object derives another (a parent path, a
/// permissions view, a timestamps view). Lexical accessors and boolean
/// predicates are unaffected by the mode; they cannot fail.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorMode {
    /// Surface a failed query as an absent value.
    #[default]
    Silent,
    /// Surface a failed query as an error carrying the OS diagnostic.
    Raising,
}

/// Runs a single OS metadata query and applies `mode` to its outcome.
///
/// Returns `Ok(Some(value))` on success. On failure, silent mode yields
/// `Ok(None)` after logging the suppressed diagnostic at debug level, and
/// raising mode yields an [`error::Error::QueryFailed`].
///
/// The failure arrives as an ordinary [`std::io::Error`] returned by the
/// query itself, so no process-wide handler state is involved and concurrent
/// queries from multiple threads are fully independent.
pub(crate) fn fallible<T>(
    mode: ErrorMode,
    query: impl FnOnce() -> std::io::Result<T>,
) -> Result<Option<T>, error::Error> {
    match query() {
        Ok(value) => Ok(Some(value)),
        Err(err) => match mode {
            ErrorMode::Silent => {
                tracing::debug!(target: trace_categories::QUERIES, "suppressing failed query: {err}");
                Ok(None)
            }
            ErrorMode::Raising => Err(error::Error::QueryFailed(err)),
        },
    }
}

#[cfg(test)]
#[expect(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    #[test]
    fn silent_mode_absorbs_failures() -> Result<()> {
        let succeeded = fallible(ErrorMode::Silent, || Ok::<_, std::io::Error>(17))?;
        assert_eq!(succeeded, Some(17));

        let failed = fallible(ErrorMode::Silent, || {
            Err::<i32, _>(std::io::Error::other("boom"))
        })?;
        assert_eq!(failed, None);

        Ok(())
    }

    #[test]
    fn raising_mode_passes_successes_through() -> Result<()> {
        // A zero result (e.g. root's owner id) is a success, not a failure.
        let succeeded = fallible(ErrorMode::Raising, || Ok::<_, std::io::Error>(0u32))?;
        assert_eq!(succeeded, Some(0));
        Ok(())
    }

    #[test]
    fn raising_mode_carries_the_diagnostic() {
        let result = fallible(ErrorMode::Raising, || {
            Err::<i32, _>(std::io::Error::other("boom"))
        });

        let message = result.map_err(|err| err.to_string()).err();
        assert_eq!(message.as_deref(), Some("filesystem query failed: boom"));
    }
}
