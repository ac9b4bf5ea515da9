//! Per-request correlation identifier.
//!
//! The [`crate::Trace`] middleware runs each request inside
//! [`TraceId::scope`]. Anything executing on that task, domain errors and
//! the Cults3D client's log lines included, can read the identifier with
//! [`TraceId::current`]. Task-locals do not follow `tokio::spawn`; wrap
//! spawned futures in [`TraceId::scope`] again.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

tokio::task_local! {
    static CURRENT: TraceId;
}

/// UUID assigned to one inbound request.
///
/// # Examples
/// ```
/// use storefront::TraceId;
///
/// let id: TraceId = "6f1c2a4e-2b7d-4c3e-9a51-0d8e7f6b5a43".parse().expect("uuid");
/// assert_eq!(id.to_string(), "6f1c2a4e-2b7d-4c3e-9a51-0d8e7f6b5a43");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random identifier.
    #[must_use]
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request being served on this task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `self` as the current identifier.
    ///
    /// # Examples
    /// ```
    /// use storefront::TraceId;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
    /// let id: TraceId = "00000000-0000-0000-0000-000000000001".parse().expect("uuid");
    /// assert_eq!(TraceId::scope(id, async { TraceId::current() }).await, Some(id));
    /// assert_eq!(TraceId::current(), None);
    /// # });
    /// ```
    pub async fn scope<Fut>(self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(self, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
