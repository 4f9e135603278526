use crate::ports::PlatformPort;

/// Platform port that reports a fixed platform name.
#[derive(Debug, Clone)]
pub struct FixedPlatform {
    name: String,
}

impl FixedPlatform {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl PlatformPort for FixedPlatform {
    fn current_platform(&self) -> String {
        self.name.clone()
    }
}
