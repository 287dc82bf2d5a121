//! Pipeline conversions module
//!
//! This module contains orchestration logic: decode an uploaded image,
//! correct its white balance and encode the result.

mod correction_pipeline;
mod timing;


pub use correction_pipeline::CorrectionPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
