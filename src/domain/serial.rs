use serde::{Deserialize, Serialize};

/// Ticket stub serial number. Signed so that an empty range can land one before
/// its starting number.
pub type SerialNumber = i64;

/// The stub numbers handed out for one category on one order.
///
/// `last = initial + count - 1`. With a zero headcount that puts `last` one before
/// `initial`, which makes the range empty and fails the `last >= initial` check the
/// forms run before submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialRange {
    pub initial: SerialNumber,
    pub last: SerialNumber,
}

impl SerialRange {
    pub fn derive(initial: SerialNumber, count: u32) -> Self {
        // Saturating keeps the derivation total even at the edges of the
        // serial space.
        Self {
            initial,
            last: initial
                .saturating_add(i64::from(count))
                .saturating_sub(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last < self.initial
    }

    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (self.last - self.initial + 1) as u64
        }
    }
}
