/// Identifier of a loaded route.
///
/// Every successful load advances the generation; work started for an older
/// generation compares unequal and can tell it is stale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub const fn new(n: u64) -> Self {
        Generation(n)
    }

    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}
