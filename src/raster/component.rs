use crate::foundation::error::{DispmapError, DispmapResult};

/// Selects one color channel of a BGR(A) pixel.
///
/// Discriminants are the channel offsets inside an interleaved pixel.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub enum Component {
    /// Channel 0.
    Blue = 0,
    /// Channel 1.
    Green = 1,
    /// Channel 2.
    Red = 2,
}

impl Component {
    /// Byte offset of this channel within a pixel.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Read this channel from a pixel with at least three channels.
    pub fn of<const C: usize>(self, px: &[u8; C]) -> u8 {
        px[self.index()]
    }

    /// Parse a selector, failing with [`DispmapError::InvalidArgument`] outside `0..=2`.
    pub fn from_index(index: i64) -> DispmapResult<Self> {
        match index {
            0 => Ok(Self::Blue),
            1 => Ok(Self::Green),
            2 => Ok(Self::Red),
            other => Err(DispmapError::invalid_argument(format!(
                "component selector {other} is not in [0,2] (0 blue, 1 green, 2 red)"
            ))),
        }
    }
}

impl TryFrom<i64> for Component {
    type Error = DispmapError;

    fn try_from(value: i64) -> DispmapResult<Self> {
        Self::from_index(value)
    }
}

impl TryFrom<i32> for Component {
    type Error = DispmapError;

    fn try_from(value: i32) -> DispmapResult<Self> {
        Self::from_index(i64::from(value))
    }
}

impl From<Component> for i64 {
    fn from(c: Component) -> Self {
        c.index() as i64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/component.rs"]
mod tests;
