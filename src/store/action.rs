//! The dispatchable action set.

use crate::features::cake::CakeAction;
use crate::features::ice_cream::IceCreamAction;
use crate::features::users::UsersAction;

/// A dispatched event: immutable, consumed synchronously by every slice
/// reducer, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Cake(CakeAction),
    IceCream(IceCreamAction),
    Users(UsersAction),
}

impl Action {
    /// Stable string tag for this action, used for dispatch logging and
    /// as the source key of the reaction table.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Cake(CakeAction::Ordered { .. }) => "cake/ordered",
            Action::Cake(CakeAction::Restocked { .. }) => "cake/restocked",
            Action::IceCream(IceCreamAction::Ordered { .. }) => "ice_cream/ordered",
            Action::IceCream(IceCreamAction::Restocked { .. }) => "ice_cream/restocked",
            Action::Users(UsersAction::FetchPending) => "users/fetch/pending",
            Action::Users(UsersAction::FetchFulfilled { .. }) => "users/fetch/fulfilled",
            Action::Users(UsersAction::FetchRejected { .. }) => "users/fetch/rejected",
        }
    }
}
