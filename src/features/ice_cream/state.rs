use crate::store::SliceState;

/// Ice creams on hand at open.
pub const INITIAL_ICE_CREAM_COUNT: i64 = 20;

/// Ice cream stock slice.
#[derive(Debug, Clone, PartialEq)]
pub struct IceCreamState {
    pub count: i64,
}

impl Default for IceCreamState {
    fn default() -> Self {
        Self {
            count: INITIAL_ICE_CREAM_COUNT,
        }
    }
}

impl SliceState for IceCreamState {}
