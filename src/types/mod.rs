pub mod environment;
pub mod platform;

pub use environment::TargetEnvironment;
pub use platform::{is_known_arch, is_known_os, KNOWN_ARCH, KNOWN_OS};
