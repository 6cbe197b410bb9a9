pub mod query_state;
pub mod ratings;
pub mod sequencer;
pub mod synchronizer;

pub use query_state::{FilterEvent, FilterKey, QueryState};
pub use ratings::{RatingFailurePolicy, RatingState, RatingType};
pub use synchronizer::{Direction, FetchOutcome, PendingFetch, ResultView, Synchronizer};
