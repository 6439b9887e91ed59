//! Fuzz target for parameter file conversion.
//!
//! Goal: conversion should **never panic**, and successful output is always
//! `--parameters key=value` pairs.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_parameter_file
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(args) = atlasguard_app::parameter_args(text) else {
        return;
    };

    assert!(!args.is_empty());
    assert_eq!(args.len() % 2, 0);
    for pair in args.chunks(2) {
        assert_eq!(pair[0], "--parameters");
        assert!(pair[1].contains('='));
        assert!(!pair[1].starts_with('_'));
    }
});
