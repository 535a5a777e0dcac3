use std::collections::BTreeMap;
use swatch_color::Notation;

/// Handle for one scheduled revert of a "Copied!" acknowledgment.
///
/// Tickets are unique per [`CopyFeedback`]; a revert only applies while its
/// ticket is the newest one issued for that notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CopyTicket {
    pub notation: Notation,
    serial: u64,
}

/// Per-notation transient "copied" flags.
///
/// The presentation layer calls [`acknowledge`](Self::acknowledge) after a
/// successful clipboard write, schedules a timer carrying the returned
/// ticket, and calls [`revert`](Self::revert) when it fires.  Copying the
/// same item again before the timer fires issues a fresh ticket, so the
/// stale timer becomes a no-op and the flag stays up for the full duration.
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    active:      BTreeMap<Notation, u64>,
    next_serial: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag for `notation` and return the ticket to revert it with.
    pub fn acknowledge(&mut self, notation: Notation) -> CopyTicket {
        let serial = self.next_serial;
        self.next_serial += 1;
        self.active.insert(notation, serial);
        CopyTicket { notation, serial }
    }

    /// Lower the flag if `ticket` is still the current one.  Returns whether
    /// anything changed.
    pub fn revert(&mut self, ticket: CopyTicket) -> bool {
        match self.active.get(&ticket.notation) {
            Some(&serial) if serial == ticket.serial => {
                self.active.remove(&ticket.notation);
                true
            }
            _ => false,
        }
    }

    pub fn is_copied(&self, notation: Notation) -> bool {
        self.active.contains_key(&notation)
    }

    /// Notations currently showing the acknowledgment.
    pub fn active(&self) -> impl Iterator<Item = Notation> + '_ {
        self.active.keys().copied()
    }
}
