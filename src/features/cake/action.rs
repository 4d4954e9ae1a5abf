/// Actions defined by the cake slice.
#[derive(Debug, Clone, PartialEq)]
pub enum CakeAction {
    /// A customer ordered `amount` cakes.
    Ordered { amount: i64 },
    /// `amount` cakes were added to stock.
    Restocked { amount: i64 },
}
