pub mod app;
pub mod batch;
pub mod errors;
pub mod predict;
mod runner;
pub mod seq;
pub mod ui;

use crate::app::App;
use crate::errors::DnaFormError;

pub use crate::runner::dispatch_and_collect;

pub fn run() -> Result<(), DnaFormError> {
    runner::run()
}
