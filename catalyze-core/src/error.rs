use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to start async runtime: {source}"))]
    Runtime { source: std::io::Error },

    #[snafu(display("Terminal error: {source}"))]
    Terminal { source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
