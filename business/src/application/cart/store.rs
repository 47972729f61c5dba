use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::domain::cart::errors::CartFailure;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::operation::CartOperation;
use crate::domain::cart::state::{CartEvent, CartState};
use crate::domain::shared::value_objects::Price;

/// Issued when an operation goes pending; handed back when it settles.
///
/// A ticket dropped without settling (the request future was cancelled)
/// releases its in-flight slot as [`CartEvent::Abandoned`].
#[derive(Debug)]
pub struct RequestTicket {
    operation: CartOperation,
    sequence: u64,
    shared: Option<Arc<Shared>>,
}

impl RequestTicket {
    pub fn operation(&self) -> CartOperation {
        self.operation
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl Drop for RequestTicket {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.take() {
            let _sequencer = shared.lock_sequencer();
            shared.dispatch(CartEvent::Abandoned(self.operation));
        }
    }
}

/// How a settled operation was applied to the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    Applied(CartState),
    /// A newer request of the same kind had already settled; the response
    /// only released its in-flight slot.
    Superseded(CartState),
}

#[derive(Debug, Default)]
struct Sequencer {
    issued: u64,
    settled: HashMap<CartOperation, u64>,
}

impl Sequencer {
    fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Records the ticket as settled unless a newer one of its kind already is.
    fn accept(&mut self, operation: CartOperation, sequence: u64) -> bool {
        let latest = self.settled.entry(operation).or_insert(0);
        if sequence < *latest {
            return false;
        }
        *latest = sequence;
        true
    }
}

#[derive(Debug)]
struct Shared {
    state: watch::Sender<CartState>,
    sequencer: Mutex<Sequencer>,
}

impl Shared {
    fn dispatch(&self, event: CartEvent) -> CartState {
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = current.reduce(event);
        });
        self.state.borrow().clone()
    }

    fn lock_sequencer(&self) -> MutexGuard<'_, Sequencer> {
        self.sequencer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owner of the client-side cart state.
///
/// Every transition goes through [`CartState::reduce`]; subscribers obtained
/// from [`CartStore::subscribe`] see each new snapshot.
pub struct CartStore {
    shared: Arc<Shared>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(CartState::default());
        Self {
            shared: Arc::new(Shared {
                state,
                sequencer: Mutex::new(Sequencer::default()),
            }),
        }
    }

    pub fn snapshot(&self) -> CartState {
        self.shared.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.shared.state.subscribe()
    }

    /// Marks `operation` as pending and returns its ticket.
    pub fn begin(&self, operation: CartOperation) -> RequestTicket {
        let mut sequencer = self.shared.lock_sequencer();
        let sequence = sequencer.issue();
        self.shared.dispatch(CartEvent::Pending(operation));
        RequestTicket {
            operation,
            sequence,
            shared: Some(self.shared.clone()),
        }
    }

    pub fn fulfill(&self, ticket: RequestTicket, items: Vec<CartItem>) -> Settlement {
        let operation = ticket.operation;
        self.settle(ticket, CartEvent::Fulfilled { operation, items })
    }

    pub fn reject(&self, ticket: RequestTicket, failure: CartFailure) -> Settlement {
        let operation = ticket.operation;
        self.settle(ticket, CartEvent::Rejected { operation, failure })
    }

    /// Overwrites items and totals with an externally fetched snapshot.
    pub fn set_items(
        &self,
        items: Vec<CartItem>,
        total_quantity: usize,
        total_price: Price,
    ) -> CartState {
        let _sequencer = self.shared.lock_sequencer();
        self.shared.dispatch(CartEvent::ItemsSet {
            items,
            total_quantity,
            total_price,
        })
    }

    fn settle(&self, mut ticket: RequestTicket, event: CartEvent) -> Settlement {
        ticket.shared = None;
        let (operation, sequence) = (ticket.operation, ticket.sequence);
        let mut sequencer = self.shared.lock_sequencer();
        if sequencer.accept(operation, sequence) {
            Settlement::Applied(self.shared.dispatch(event))
        } else {
            Settlement::Superseded(self.shared.dispatch(CartEvent::Superseded(operation)))
        }
    }
}
