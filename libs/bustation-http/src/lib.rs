//! Response and paging types shared by every REST module.

pub mod page;
pub mod problem;

pub use page::{Page, PageQuery, PageRequest};
pub use problem::{FieldViolation, Problem};

/// Handler result: success body or an RFC 9457 problem.
pub type ApiResult<T> = Result<T, Problem>;
