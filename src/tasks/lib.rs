// Everything with side effects lives here, so that dmat-matrix doesn't need to.

extern crate dmat_matrix;

extern crate ansi_term;
extern crate fern;
extern crate itertools;
extern crate serde;
extern crate serde_yaml;
#[macro_use] extern crate clap;
#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;
#[cfg(test)] #[macro_use] extern crate pretty_assertions;

pub type FailResult<T> = Result<T, failure::Error>;

mod logging;
mod config;
mod demo;
mod entry_points;

pub use crate::logging::{GlobalLogger, ColorizedLevel};
pub use crate::config::{Settings, NamedGrid, ValidatedSettings};
pub use crate::demo::write_report;
pub use crate::entry_points::{dmat_demo, CliArgs};
