/// Strategy for naming the per-variant subdirectory.
#[cfg_attr(test, mockall::automock)]
pub trait SubdirectoryLayout: Send + Sync {
    fn subdirectory_for(&self, os: &str, abi: &str) -> String;
}

/// `<os>/<abi>`; an empty ABI leaves a trailing separator that path
/// normalization drops.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLayout;

impl SubdirectoryLayout for DefaultLayout {
    fn subdirectory_for(&self, os: &str, abi: &str) -> String {
        format!("{}/{}", os, abi)
    }
}
