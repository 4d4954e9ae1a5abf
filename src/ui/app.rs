use crate::config::Config;
use crate::features::cake::CakeAction;
use crate::features::ice_cream::IceCreamAction;
use crate::features::users::{spawn_fetch, UserFetcher};
use crate::store::{Action, AppState, Store};

/// Bounds for the pending ice cream restock quantity.
pub const MIN_RESTOCK_QTY: i64 = 1;
pub const MAX_RESTOCK_QTY: i64 = 15;

/// UI-side application state.
///
/// Holds the store handle plus view-local state that never enters the
/// tree: the quit flag, the pending ice cream restock quantity, and the
/// flag ensuring the user fetch starts exactly once.
pub struct App {
    store: Store,
    config: Config,
    should_quit: bool,
    restock_qty: i64,
    users_fetch_started: bool,
}

impl App {
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            store,
            config,
            should_quit: false,
            restock_qty: MIN_RESTOCK_QTY,
            users_fetch_started: false,
        }
    }

    /// Snapshot of the published tree, for rendering.
    pub fn state(&self) -> AppState {
        self.store.state()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Pending restock quantity for the ice cream section.
    pub fn restock_qty(&self) -> i64 {
        self.restock_qty
    }

    /// Kick off the user directory fetch the first time the view shows.
    /// Later calls are no-ops, so a failed fetch stays failed on screen.
    pub fn start_users_fetch(&mut self) {
        if self.users_fetch_started {
            return;
        }
        self.users_fetch_started = true;
        let fetcher = UserFetcher::new(self.config.users_endpoint.clone());
        if let Err(err) = spawn_fetch(&self.store, fetcher) {
            tracing::error!(error = %err, "could not start user fetch");
        }
    }

    pub fn order_cake(&mut self) {
        self.dispatch(Action::Cake(CakeAction::Ordered { amount: 1 }));
    }

    pub fn restock_cake(&mut self) {
        self.dispatch(Action::Cake(CakeAction::Restocked { amount: 5 }));
    }

    pub fn order_ice_cream(&mut self) {
        self.dispatch(Action::IceCream(IceCreamAction::Ordered { amount: 1 }));
    }

    pub fn restock_ice_cream(&mut self) {
        self.dispatch(Action::IceCream(IceCreamAction::Restocked {
            amount: self.restock_qty,
        }));
    }

    pub fn increment_restock_qty(&mut self) {
        self.restock_qty = (self.restock_qty + 1).min(MAX_RESTOCK_QTY);
    }

    pub fn decrement_restock_qty(&mut self) {
        self.restock_qty = (self.restock_qty - 1).max(MIN_RESTOCK_QTY);
    }

    fn dispatch(&mut self, action: Action) {
        if let Err(err) = self.store.dispatch(action) {
            tracing::error!(error = %err, "dispatch failed");
        }
    }
}
