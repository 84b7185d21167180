/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound (driven) ports through which the
/// application core reaches processes, the network, the runner and the console.
pub mod outbound;
