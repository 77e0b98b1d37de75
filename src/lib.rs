#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate bitflags;
extern crate byteorder;
#[macro_use]
extern crate log;

pub mod command;
pub mod core;
mod error;
pub mod register;

pub use self::error::{Error, ErrorKind, Result};
