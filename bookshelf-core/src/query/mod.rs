pub mod filtering;
pub mod match_set;
pub mod pagination;
pub mod session;
pub mod shared;

pub use match_set::MatchSet;
pub use pagination::PaginationCursor;
pub use session::QuerySession;
pub use shared::SharedQuerySession;
