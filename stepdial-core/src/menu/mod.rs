//! Menu navigation
//!
//! The screen graph, the navigation state it operates on, and the
//! origin-set mode entered from the stepper options.

pub mod events;
pub mod machine;
pub mod options;
pub mod origin;
pub mod screen;
pub mod state;

pub use events::MenuEvent;
pub use machine::{MenuMachine, Reaction};
pub use origin::OriginSession;
pub use screen::Screen;
pub use state::NavigationState;
