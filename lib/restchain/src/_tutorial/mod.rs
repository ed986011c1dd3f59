//! # Tutorial: Reading REST responses with restchain
//!
//! Learn to describe how responses are read, one processor at a time.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first client and request
//! 2. [Processors][chapter_1] - Not found, unit results, business errors
//! 3. [Errors & Serializers][chapter_2] - Exceptions, settings, custom terminals
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
