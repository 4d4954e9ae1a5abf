use crate::store::SliceState;

/// Cakes on hand at open.
pub const INITIAL_CAKE_COUNT: i64 = 10;

/// Cake stock slice.
#[derive(Debug, Clone, PartialEq)]
pub struct CakeState {
    pub count: i64,
}

impl Default for CakeState {
    fn default() -> Self {
        Self {
            count: INITIAL_CAKE_COUNT,
        }
    }
}

impl SliceState for CakeState {}
