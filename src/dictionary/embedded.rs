//! Embedded word lists
//!
//! Per-length dictionaries compiled into the binary at build time.

// Include generated dictionaries from build script
include!(concat!(env!("OUT_DIR"), "/dictionaries.rs"));
