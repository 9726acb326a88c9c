use crate::{Field, RangeError};

/// Ticks elapsed since the previous event in a track.
///
/// Limited to 28 bits, the most a four byte variable-length quantity holds.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Default, Hash)]
pub struct DeltaTicks(u32);

impl DeltaTicks {
    /// Zero.
    pub const ZERO: Self = Self(0);
    /// The largest encodable delta, `0x0FFF_FFFF`
    pub const MAX: Self = Self(0x0FFF_FFFF);

    /// Creates a new delta, checking it fits in 28 bits
    pub fn new(ticks: u32) -> Result<Self, RangeError> {
        Self::try_from(ticks as i64)
    }

    /// Returns the ticks as a u32
    #[inline]
    pub const fn ticks(&self) -> u32 {
        self.0
    }

    /// Returns `None` if the sum no longer fits in 28 bits.
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        let sum = self.0 + other.0;
        if sum > Self::MAX.0 {
            None
        } else {
            Some(Self(sum))
        }
    }
}

impl TryFrom<i64> for DeltaTicks {
    type Error = RangeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=Self::MAX.0 as i64).contains(&value) {
            Ok(Self(value as u32))
        } else {
            Err(RangeError::new(Field::Delta, value, Self::MAX.0 as i64))
        }
    }
}

#[test]
fn delta_limits() {
    assert_eq!(DeltaTicks::new(0x0FFF_FFFF).unwrap(), DeltaTicks::MAX);
    assert_eq!(
        DeltaTicks::new(0x1000_0000).unwrap_err().field(),
        Field::Delta
    );
    assert!(DeltaTicks::try_from(-1i64).is_err());
}

#[test]
fn delta_sums_overflow_to_none() {
    let one = DeltaTicks::new(1).unwrap();
    assert_eq!(DeltaTicks::MAX.checked_add(one), None);
    assert_eq!(one.checked_add(one), Some(DeltaTicks(2)));
}
