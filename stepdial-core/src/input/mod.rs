//! Input handling
//!
//! Raw pin levels in, clean detent and press events out.

pub mod buttons;
pub mod events;
pub mod quadrature;

pub use buttons::{ButtonSource, Debouncer};
pub use events::{Button, DetentEvent, InputEvent, PressEvent};
pub use quadrature::QuadratureDecoder;
