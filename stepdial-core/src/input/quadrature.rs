//! Quadrature Decoder
//!
//! Decodes the two encoder phase signals into detent events.
//!
//! Every sample packs the pin levels into a 2-bit quadrant `(A << 1) | B`
//! and joins it with the previous quadrant into a 4-bit transition code:
//!
//! ```text
//! code = (last << 2) | current
//!
//! CW  sub-steps: 0b1101 0b0100 0b0010 0b1011
//! CCW sub-steps: 0b1110 0b0111 0b0001 0b1000
//! anything else: no movement or a skipped quadrant (noise), ignored
//! ```
//!
//! Sub-steps accumulate; two in the same direction make one detent. A single
//! bouncing contact produces one valid edge at most and never completes a
//! detent on its own.

use super::events::DetentEvent;
use crate::log::log_trace;
use crate::traits::Direction;

/// Valid sub-steps that make up one reported detent
pub const DETENT_THRESHOLD: i8 = 2;

/// Classify a 4-bit transition code
///
/// Returns `None` for codes outside both valid sets.
pub fn classify_transition(code: u8) -> Option<Direction> {
    match code & 0x0F {
        0b1101 | 0b0100 | 0b0010 | 0b1011 => Some(Direction::Clockwise),
        0b1110 | 0b0111 | 0b0001 | 0b1000 => Some(Direction::CounterClockwise),
        _ => None,
    }
}

/// Quadrature encoder decoder
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    /// Quadrant seen on the previous sample
    last_quadrant: u8,
    /// Signed sub-steps since the last emitted detent
    position: i8,
    /// Swap the reported direction
    reverse: bool,
}

impl Default for QuadratureDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadratureDecoder {
    /// Create a decoder starting from quadrant 0
    pub const fn new() -> Self {
        Self {
            last_quadrant: 0,
            position: 0,
            reverse: false,
        }
    }

    /// Create a decoder that reports directions swapped
    pub const fn reversed(reverse: bool) -> Self {
        Self {
            last_quadrant: 0,
            position: 0,
            reverse,
        }
    }

    /// Feed one sample of the two phase levels
    ///
    /// Call once per control-loop tick. Returns a detent when the
    /// accumulated sub-steps reach the threshold in either direction.
    pub fn sample(&mut self, a: bool, b: bool) -> Option<DetentEvent> {
        let quadrant = ((a as u8) << 1) | (b as u8);
        let code = (self.last_quadrant << 2) | quadrant;

        // Always resync, even on an invalid code
        self.last_quadrant = quadrant;

        let direction = classify_transition(code)?;
        self.position += direction.delta();

        if self.position.abs() < DETENT_THRESHOLD {
            return None;
        }

        self.position = 0;
        let direction = if self.reverse {
            direction.opposite()
        } else {
            direction
        };
        log_trace!("Detent {}", direction);
        Some(DetentEvent { direction })
    }

    /// Quadrant seen on the most recent sample
    pub fn last_quadrant(&self) -> u8 {
        self.last_quadrant
    }

    /// Sub-steps accumulated towards the next detent
    pub fn position(&self) -> i8 {
        self.position
    }
}
