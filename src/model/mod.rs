pub mod drag;
pub mod event;
pub mod store;
pub mod timeline;

pub use drag::{DragController, DragSession};
pub use event::{Event, EventId};
pub use store::EventStore;
pub use timeline::TimeGrid;
