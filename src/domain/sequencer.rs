// src/domain/sequencer.rs

use std::fmt;

/// Id of one issued list fetch. Ids only ever grow within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out request ids and tells whether a response is still wanted.
/// Only the most recently issued fetch may update the page.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestId {
        self.issued += 1;
        RequestId(self.issued)
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        id.0 == self.issued
    }
}
