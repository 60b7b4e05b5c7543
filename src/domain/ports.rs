use crate::utils::error::Result;
use std::io::Read;

/// Something a road description can be read from.
///
/// The reader returned by `open` is owned by the caller and closed when dropped,
/// so a source is released on every exit path of a load.
pub trait RoadSource {
    /// Human readable name used in logs and error messages.
    fn name(&self) -> &str;

    fn open(&self) -> Result<Box<dyn Read + '_>>;
}
