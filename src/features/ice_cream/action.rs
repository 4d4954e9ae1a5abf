/// Actions defined by the ice cream slice.
#[derive(Debug, Clone, PartialEq)]
pub enum IceCreamAction {
    /// A customer ordered `amount` ice creams.
    Ordered { amount: i64 },
    /// `amount` ice creams were added to stock.
    Restocked { amount: i64 },
}
