use derive_more::{Display, Error};

/// Invalid input detected at the search boundary, before any node is evaluated.
///
/// Everything after validation resolves to a plan, possibly an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    #[display("Action {action} has a non-finite cost")]
    NonFiniteCost { action: String },

    #[display("Action without identity in planning input")]
    EmptyIdentity,
}
