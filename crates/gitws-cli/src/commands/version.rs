//! Version command implementation

/// Version of this build, taken from the package manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the version command
pub fn run_version() {
    println!("Version: v{VERSION}");
}
