//! # End-to-End Scenario Tests
//!
//! Exercises the assembled station the way a user would: boot, press
//! buttons, watch frames arrive at the sink. The recording sink below
//! stands in for the physical strip.

mod scenario_tests;

use std::sync::{Arc, Mutex};

use matrix_weather_lib::surface::{PixelSink, SinkError, CELLS};
use matrix_weather_lib::Pixel;

/// Records every transmitted frame for later inspection.
#[derive(Clone)]
pub struct RecordingSink {
    frames: Arc<Mutex<Vec<[Pixel; CELLS]>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            frames: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn frames(&self) -> Vec<[Pixel; CELLS]> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<[Pixel; CELLS]> {
        self.frames.lock().unwrap().last().copied()
    }
}

impl PixelSink for RecordingSink {
    fn write(&mut self, frame: &[Pixel; CELLS]) -> Result<(), SinkError> {
        self.frames.lock().unwrap().push(*frame);
        Ok(())
    }
}
