/// Identifies one asynchronous load. Only the most recently issued ticket may apply its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Issues [`LoadTicket`]s for one image slot and recognizes stale ones.
#[derive(Clone, Debug, Default)]
pub(crate) struct TicketCounter {
    latest: u64,
}

impl TicketCounter {
    pub(crate) fn issue(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub(crate) fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/ticket.rs"]
mod tests;
