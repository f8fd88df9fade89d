//! Service wiring shared across routes.

use std::sync::Arc;

use stockledger_service::{MutationService, ReadService};
use stockledger_stock::StockLedger;
use stockledger_store::InMemoryStore;

pub struct AppServices {
    store: Arc<InMemoryStore>,
    pub mutations: MutationService<InMemoryStore>,
    pub reads: ReadService<InMemoryStore>,
}

impl AppServices {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            mutations: MutationService::new(store.clone(), store.clone()),
            reads: ReadService::new(store.clone()),
            store,
        }
    }

    /// Direct ledger access for the stock routes. Stock upserts are ledger
    /// wires, not entity mutations; they do not pass through the mutation
    /// service and produce no audit row.
    pub fn ledger(&self) -> &dyn StockLedger {
        self.store.as_ref()
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}
