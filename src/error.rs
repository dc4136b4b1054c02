use crate::acquisition::error::AcquisitionError;
use crate::pipeline::error::PipelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadWeatherError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),
}
