//! Embedded word list
//!
//! Compiled into the binary at build time from `data/valid_words.txt`.

include!(concat!(env!("OUT_DIR"), "/valid_words.rs"));
