use crate::domain::fixup_target_os;

/// Port for platform detection and target OS naming.
pub trait PlatformPort {
    /// Raw name of the platform the process runs on, in `sys.platform` spelling.
    fn current_platform(&self) -> String;

    /// Normalize a raw OS name for the benchmark tooling.
    fn normalize(&self, raw: &str) -> String {
        fixup_target_os(raw)
    }
}
