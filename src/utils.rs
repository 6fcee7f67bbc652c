use std::fmt::Display;

use log::error;

pub fn print_err(e: &impl Display) {
    error!("{e:#}")
}

pub(crate) fn unwrap_or_def_verbose<T, E>(result: Result<T, E>) -> T
where
    T: Default,
    E: std::fmt::Display,
{
    result
        .inspect_err(|e| {
            error!("ERROR: {e:#}");
        })
        .unwrap_or_default()
}
