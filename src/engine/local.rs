use crate::engine::convert::convert;
use crate::engine::service::{ConversionCall, ConversionService, Reading, ServiceError};

/// Conversion service that computes the result in-process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalConversionService;

impl ConversionService for LocalConversionService {
    fn open(&self) -> Result<Box<dyn ConversionCall + '_>, ServiceError> {
        Ok(Box::new(LocalCall))
    }

    fn describe(&self) -> String {
        "in-process arithmetic".to_string()
    }
}

struct LocalCall;

impl ConversionCall for LocalCall {
    fn execute(&mut self, reading: &Reading) -> Result<f64, ServiceError> {
        Ok(convert(reading.value, reading.unit))
    }
}
