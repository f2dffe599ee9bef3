pub mod formatter;

pub use formatter::{DiscoveryReport, OutputFormatter};
