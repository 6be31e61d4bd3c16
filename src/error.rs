#[derive(thiserror::Error, Debug)]
pub enum LsstError {
    #[error("band {0} not supported! Choose 'u', 'g', 'r', 'i', 'z' or 'y'.")]
    InvalidBand(String),
    #[error("psf_type {0} not supported!")]
    UnsupportedPsf(String),
    #[error("{0} coadd_years not supported! Choose an integer between 1 and 10.")]
    InvalidCoaddYears(i64),
    #[error("Failed to write the configuration file")]
    Io(#[from] std::io::Error),
    #[error("Failed to write the CSV table")]
    Csv(#[from] csv::Error),
    #[error("Failed to serialize the configuration to pickle")]
    Pickle(#[from] serde_pickle::Error),
}
pub type Result<T> = std::result::Result<T, LsstError>;
