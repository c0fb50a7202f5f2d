//! A command line tool which prints dct-based perceptual hashes of video
//! files, so that duplicated or re-encoded videos can be spotted without
//! comparing them byte-for-byte.
//!
//! The hashing itself is delegated to an external hasher command (by default
//! `phash`) which takes a video path and prints one 64-bit hash value per
//! line. This crate wraps that command with:
//! * Single-video mode: hash one file and print its values.
//! * Distance mode (`--with-ref`): print the hamming distance between the
//!   hashes of two videos.
//! * Batch mode (`--dirs`): hash every video file under some directories.

#![allow(clippy::let_and_return)]

#[macro_use]
extern crate log;

mod app;
pub mod library;

pub use app::run_app;
