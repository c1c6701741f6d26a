#![allow(unused_imports)]

pub(crate) mod fixtures;

pub use fixtures::*;
