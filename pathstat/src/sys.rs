//! Platform abstraction facilities

#![allow(unused)]

#[cfg(unix)]
pub(crate) mod unix;
#[cfg(unix)]
pub(crate) use unix as platform;

#[cfg(not(unix))]
pub(crate) mod stubs;
#[cfg(not(unix))]
pub(crate) use stubs as platform;

pub(crate) mod fs;
