use crate::error::Error;
use agentskills_rest::http::StatusCode;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, MutexGuard};

/// How the last completed refresh ended, when it was rejected.
#[derive(Debug, Clone)]
pub(crate) struct RefreshFailure {
    pub(crate) status: StatusCode,
    pub(crate) detail: String,
    /// The refresh token the server rejected.
    pub(crate) refresh_token: String,
}

impl From<RefreshFailure> for Error {
    fn from(failure: RefreshFailure) -> Self {
        Error::AuthenticationExpired { status: failure.status, detail: failure.detail }
    }
}

/// Serializes credential refreshes of one client and its clones.
///
/// Every completed refresh bumps the generation. A call snapshots the
/// generation before dispatch; if it has moved by the time the call holds
/// the lock, another call refreshed in the meantime and its outcome applies,
/// unless a failure was recorded and different credentials were stored since.
#[derive(Debug, Default)]
pub(crate) struct RefreshGuard {
    generation: AtomicU64,
    last_failure: Mutex<Option<RefreshFailure>>,
}

impl RefreshGuard {
    pub(crate) fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
    pub(crate) async fn lock(&self) -> MutexGuard<'_, Option<RefreshFailure>> {
        self.last_failure.lock().await
    }
    /// Record a completed refresh. Must be called while holding [`lock()`](Self::lock),
    /// after the credential slot has been updated.
    pub(crate) fn complete(
        &self,
        last_failure: &mut MutexGuard<'_, Option<RefreshFailure>>,
        failure: Option<RefreshFailure>,
    ) {
        **last_failure = failure;
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn complete_advances_generation() {
        let guard = RefreshGuard::default();
        assert_eq!(guard.generation(), 0);
        {
            let mut last = guard.lock().await;
            guard.complete(
                &mut last,
                Some(RefreshFailure {
                    status: StatusCode::UNAUTHORIZED,
                    detail: "gone".into(),
                    refresh_token: "refresh".into(),
                }),
            );
        }
        assert_eq!(guard.generation(), 1);
        assert_eq!(guard.lock().await.as_ref().map(|f| f.detail.clone()), Some("gone".into()));
        {
            let mut last = guard.lock().await;
            guard.complete(&mut last, None);
        }
        assert_eq!(guard.generation(), 2);
        assert!(guard.lock().await.is_none());
    }
}
