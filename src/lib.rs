//! keytrack (workspace facade crate).
//!
//! Re-exports the workspace crates as `keytrack::{core,input,log,session,types}`
//! so the binary, benches and integration tests share one import path.

pub use keytrack_core as core;
pub use keytrack_input as input;
pub use keytrack_log as log;
pub use keytrack_session as session;
pub use keytrack_types as types;
