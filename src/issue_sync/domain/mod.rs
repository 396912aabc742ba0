//! Domain model for issue reconciliation.
//!
//! Issues are owned by the remote tracker. The types here describe what the
//! reconciler reads from and writes to it, without any transport concerns.

mod error;
mod ids;
mod issue;
mod key_extraction;
mod remote_link;

pub use error::IssueDomainError;
pub use ids::{IssueKey, ProjectKey};
pub use issue::{Issue, IssueType, NewIssue};
pub use key_extraction::{IssueKeyMatcher, extract_issue_keys};
pub use remote_link::{LINK_APPLICATION, LINK_ICON_TITLE, LINK_ICON_URL, LinkIcon, RemoteLink};
