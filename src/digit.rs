/// A single base-85 digit, always in `0..=84`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub const fn new(x: u8) -> Option<Self> {
        if x < 85 {
            Some(Self(x))
        } else {
            None
        }
    }

    /// Reduces `x` modulo 85, so the result is in range without a check.
    #[inline(always)]
    pub const fn from_mod(x: u32) -> Self {
        Self((x % 85) as u8)
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

impl From<Digit> for u32 {
    fn from(d: Digit) -> u32 {
        u32::from(d.0)
    }
}
