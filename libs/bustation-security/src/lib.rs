//! Security primitives shared by the gateway and the resource modules.

mod context;

pub use context::{SecurityContext, SecurityContextBuilder};
