//! Three-way outcome of per-peer processing steps.
//!
//! The batch loop distinguishes soft skips from fatal failures. Rather
//! than threading that policy through nested early returns, each per-peer
//! step yields a [`StepOutcome`] and the loop driver handles the three
//! cases uniformly: proceed, log a skip and continue, or abort the batch.

use std::fmt;

use crate::error::{MailError, SourceError};

/// Reason a peer was skipped without failing the batch.
#[derive(Debug)]
pub enum SkipReason {
    /// The peer has no owning user.
    NoLinkedUser,
    /// The owning user record could not be fetched. A missing user record
    /// for a linked peer is a soft anomaly, unlike a missing peer record.
    UserLookupFailed(SourceError),
    /// The resolved user has no email address.
    NoEmailAddress,
}

impl SkipReason {
    /// Short reason string used in skip log events.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoLinkedUser => "no user linked",
            Self::UserLookupFailed(_) => "unable to fetch user",
            Self::NoEmailAddress => "user has no mail address",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single per-peer processing step.
#[derive(Debug)]
pub enum StepOutcome<T> {
    /// The step succeeded; processing continues with the produced value.
    Proceed(T),
    /// The peer is legitimately not notifiable; the batch moves on.
    Skip(SkipReason),
    /// The batch must abort with the given error.
    Fail(MailError),
}
