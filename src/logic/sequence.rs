/// Issues monotonically increasing request ids and remembers the latest one.
///
/// Responses carry the id of the request that produced them; anything other
/// than the latest issued id is stale and should be dropped. Ids start at 1 so
/// `0` never matches.
#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    /// Most recently issued id; `0` before the first request.
    latest: u64,
}

impl RequestSequence {
    /// What: Issue the next request id.
    ///
    /// Inputs: None
    ///
    /// Output: Fresh id, which becomes the only current one.
    pub const fn issue(&mut self) -> u64 {
        self.latest = self.latest.saturating_add(1);
        self.latest
    }

    /// Whether `id` is the latest issued id.
    #[must_use]
    pub const fn is_current(&self, id: u64) -> bool {
        self.latest != 0 && id == self.latest
    }

    /// Latest issued id (`0` before any request).
    #[must_use]
    pub const fn latest(&self) -> u64 {
        self.latest
    }
}
