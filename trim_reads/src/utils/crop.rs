
// trimmomatic crop step from the requested position and base count

use clap::ValueEnum;
use read_pipeline::{PipelineError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum CropPosition {
    /// Remove bases from the start of every read
    Start,
    /// Remove bases from the end of every read
    End,
}

impl CropPosition {
    fn operation(&self) -> &'static str {
        match self {
            CropPosition::Start => "HEADCROP",
            CropPosition::End => "CROP",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Crop {
    pub position: CropPosition,
    /// HEADCROP: bases dropped from the start. CROP: bases kept from the start.
    pub length: u32,
}

impl Crop {
    pub fn from_request(position: CropPosition, num_bases: u32, max_length: Option<u32>) -> Result<Crop> {
        let length = match position {
            CropPosition::Start => num_bases,
            CropPosition::End => {
                // CROP:X keeps the first X bases, so removing N from the end keeps total - N
                let max_length = max_length.ok_or(PipelineError::MissingTotalLength)?;
                if num_bases >= max_length {
                    return Err(PipelineError::CropExceedsLength { num_bases, max_length });
                }
                max_length - num_bases
            }
        };
        Ok(Self { position, length })
    }

    pub fn step(&self) -> String {
        format!("{}:{}", self.position.operation(), self.length)
    }
}
