pub mod operations;
pub mod sysfs;
pub mod types;

pub use operations::{check_candidate, list_devices};
pub use sysfs::SysfsRegistry;
pub use types::{CandidateCheck, DeviceEntry, NamedDevice};

/// A listing of video device nodes and their advertised names.
pub trait DeviceRegistry {
    /// Every registry entry, in enumeration order.
    fn entries(&self) -> Vec<DeviceEntry>;

    /// Read the raw name attribute of `entry`.
    fn read_name(&self, entry: &DeviceEntry) -> std::io::Result<String>;
}
