use crate::{DataByte, Field, RangeError};

#[doc = r#"
How hard a note was struck or released.

Velocities are held as a unit interval (`0.0..=1.0`). On the wire they are a
single data byte, so every velocity is re-quantized with `round(unit * 127)`
when it is encoded. That is the inverse of the `byte / 127` scaling used by
[`Velocity::from_byte`], so byte velocities survive the trip unchanged.

# Example
```rust
# use midiwrite::prelude::*;
let velocity = Velocity::from_byte(100).unwrap();
assert!((velocity.unit() - 100. / 127.).abs() < f64::EPSILON);
assert_eq!(velocity.byte(), 100);

assert_eq!(Velocity::from_unit(0.5).byte(), 64);
assert_eq!(Velocity::from_unit(3.0).byte(), 127);
```
"#]
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct Velocity(f64);

impl Velocity {
    /// Silent
    pub const ZERO: Self = Self(0.);
    /// Loudest
    pub const MAX: Self = Self(1.);

    /// Create a velocity from a data byte, `0..=127`.
    pub fn from_byte(byte: u8) -> Result<Self, RangeError> {
        Self::try_from(byte as i64)
    }

    /// Create a velocity from a unit value. Clamps into `0.0..=1.0`; NaN is silent.
    pub fn from_unit(unit: f64) -> Self {
        if unit.is_nan() {
            return Self::ZERO;
        }
        Self(unit.clamp(0., 1.))
    }

    /// The velocity as a unit value
    pub const fn unit(&self) -> f64 {
        self.0
    }

    /// The velocity as the data byte written to a file
    pub fn byte(&self) -> u8 {
        (self.0 * DataByte::MAX as f64)
            .round()
            .clamp(0., DataByte::MAX as f64) as u8
    }
}

impl TryFrom<i64> for Velocity {
    type Error = RangeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let byte = DataByte::checked(Field::Velocity, value)?;
        Ok(Self(byte.value() as f64 / DataByte::MAX as f64))
    }
}

#[test]
fn every_byte_round_trips() {
    for byte in 0..=127u8 {
        assert_eq!(Velocity::from_byte(byte).unwrap().byte(), byte);
    }
}

#[test]
fn unit_values_quantize_within_one_step() {
    for step in 0..=1000 {
        let unit = step as f64 / 1000.;
        let byte = Velocity::from_unit(unit).byte();
        assert!((byte as f64 / 127. - unit).abs() <= 0.5 / 127. + f64::EPSILON);
    }
}

#[test]
fn velocity_out_of_range() {
    assert_eq!(Velocity::try_from(128i64).unwrap_err().field(), Field::Velocity);
    assert_eq!(Velocity::from_unit(f64::NAN), Velocity::ZERO);
    assert_eq!(Velocity::from_unit(-1.).byte(), 0);
}
