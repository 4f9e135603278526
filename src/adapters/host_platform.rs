use crate::domain::host_platform_name;
use crate::ports::PlatformPort;

/// Platform detection for the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl HostPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformPort for HostPlatform {
    fn current_platform(&self) -> String {
        host_platform_name(std::env::consts::OS).to_string()
    }
}
