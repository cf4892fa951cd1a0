//! Library components of the sif2sis CLI.

pub mod logging;
pub mod preview;
