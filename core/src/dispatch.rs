//! Request tickets and per-controller sequencing.
//!
//! Every request a controller issues is tagged with a `Ticket`: the
//! controller it came from and a sequence number. The host hands the ticket
//! back with the outcome. A controller applies only the completion for the
//! latest ticket it issued, so a slow early response can never overwrite
//! state set by a later one.

use crate::http::HttpRequest;

/// Which controller issued a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Feed,
    Search,
    Create,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    origin: Origin,
    seq: u64,
}

impl Ticket {
    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// A request waiting to be executed by the host.
#[derive(Debug, Clone)]
pub struct Outgoing {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

/// Monotonic ticket counter owned by one controller.
#[derive(Debug)]
pub(crate) struct Sequencer {
    origin: Origin,
    latest: u64,
    in_flight: bool,
}

impl Sequencer {
    pub(crate) fn new(origin: Origin) -> Self {
        Self {
            origin,
            latest: 0,
            in_flight: false,
        }
    }

    pub(crate) fn issue(&mut self, request: HttpRequest) -> Outgoing {
        self.latest += 1;
        self.in_flight = true;
        Outgoing {
            ticket: Ticket {
                origin: self.origin,
                seq: self.latest,
            },
            request,
        }
    }

    /// Claim a completion. True only once, and only for the latest ticket.
    pub(crate) fn accept(&mut self, ticket: Ticket) -> bool {
        if ticket.origin != self.origin || ticket.seq != self.latest || !self.in_flight {
            tracing::debug!(
                origin = ?ticket.origin,
                seq = ticket.seq,
                latest = self.latest,
                "discarding stale completion"
            );
            return false;
        }
        self.in_flight = false;
        true
    }

    /// Forget the request in flight; its completion will be discarded.
    pub(crate) fn abandon(&mut self) {
        self.in_flight = false;
    }

    pub(crate) fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn request() -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: "/posts".to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[test]
    fn tickets_increase() {
        let mut seq = Sequencer::new(Origin::Feed);
        let a = seq.issue(request()).ticket;
        let b = seq.issue(request()).ticket;
        assert_eq!(a.origin(), Origin::Feed);
        assert!(b.seq() > a.seq());
    }

    #[test]
    fn only_latest_ticket_is_accepted() {
        let mut seq = Sequencer::new(Origin::Search);
        let first = seq.issue(request()).ticket;
        let second = seq.issue(request()).ticket;
        assert!(!seq.accept(first));
        assert!(seq.in_flight());
        assert!(seq.accept(second));
        assert!(!seq.in_flight());
    }

    #[test]
    fn a_ticket_is_accepted_once() {
        let mut seq = Sequencer::new(Origin::Create);
        let ticket = seq.issue(request()).ticket;
        assert!(seq.accept(ticket));
        assert!(!seq.accept(ticket));
    }

    #[test]
    fn foreign_origin_is_rejected() {
        let mut feed = Sequencer::new(Origin::Feed);
        let mut search = Sequencer::new(Origin::Search);
        feed.issue(request());
        let ticket = search.issue(request()).ticket;
        assert!(!feed.accept(ticket));
    }

    #[test]
    fn abandoned_request_is_discarded() {
        let mut seq = Sequencer::new(Origin::Search);
        let ticket = seq.issue(request()).ticket;
        seq.abandon();
        assert!(!seq.accept(ticket));
    }
}
