//! Embedded word lists
//!
//! Fallback dictionaries compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words_en.rs"));
include!(concat!(env!("OUT_DIR"), "/words_es.rs"));
