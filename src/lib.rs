pub mod traits;
pub mod state;
pub mod store;
pub mod select;
pub mod bridge;
pub mod domain;
pub mod presentation;

// Export the widget contract
pub use traits::TransferFunctionView;

// Export session state components
pub use state::{
    Axis, ComponentId, Histogram, ImageState, LookupTable,
    SessionState, SlicingPlane, SlicingPlanes, ViewMode, ViewState,
};

// Export the store and events
pub use store::{Event, Store};

// Export the subscription framework
pub use select::Binding;

// Export effect bridges
pub use bridge::{MountRegistry, TransferFunctionBridge};
