/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod environment;
pub mod filesystem;
pub mod network;
pub mod process;
