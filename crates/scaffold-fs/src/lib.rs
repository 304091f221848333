//! File materialization for wp-scaffold
//!
//! Turns an ordered list of [`WriteRequest`]s into files on disk, asking a
//! [`ConfirmOverwrite`] implementation before replacing anything that already
//! exists.

pub mod confirm;
pub mod error;
pub mod io;
pub mod materialize;
pub mod request;

pub use confirm::{ConfirmOverwrite, LineConfirm, OverwriteChoice, PROMPT_MARKER, PROMPT_TEXT};
pub use error::{Error, Result};
pub use materialize::{MaterializeReport, materialize};
pub use request::{ContentSource, WriteOutcome, WriteRequest};
