//! Device storage port.

use super::model::Device;
use crate::error::Result;

/// Persistence port for the device collection.
///
/// A storage holds exactly one slot containing the whole collection. The
/// store reads it once at startup and overwrites it after every mutation.
pub trait DeviceStorage: Send + Sync {
    /// Reads the persisted collection.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<Vec<Device>>>;

    /// Overwrites the slot with the given collection.
    fn write(&self, devices: &[Device]) -> Result<()>;
}
