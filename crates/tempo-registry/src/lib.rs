//! # tempo-registry
//!
//! The tool side of the server: the `ToolHandler` port, the immutable
//! `ToolRegistry` built at start-up, the clock abstraction, the built-in
//! `get_time_and_date` tool and the `ToolDispatcher` that answers
//! list/call requests against the registry.

pub mod clock;
pub mod dispatcher;
pub mod handler;
pub mod registry;
pub mod tools;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatcher::{DispatchError, ToolDispatcher};
pub use handler::{ToolError, ToolHandler};
pub use registry::{RegistryError, ToolRegistry};
pub use tools::time::{TimeAndDateTool, TIME_AND_DATE};
