use std::ops::Range;

use burn::config::Config;
use burn::module::Module;
use burn::prelude::{Backend, Tensor};

use crate::error::{CropError, CropResult};
use crate::receptive::ConvStack;

#[derive(Config, Debug)]
pub struct CenterCropConfig {
    /// Sequence length the prediction head consumes.
    pub target_length: usize,
}

impl CenterCropConfig {
    pub fn init(&self) -> CropResult<CenterCrop> {
        if self.target_length == 0 {
            return Err(CropError::ZeroTargetLength);
        }

        tracing::debug!(target_length = self.target_length, "center crop initialized");

        Ok(CenterCrop {
            target_length: self.target_length,
        })
    }
}

/// Positions removed from each end of the sequence axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trim {
    pub left: usize,
    pub right: usize,
}

impl Trim {
    /// Splits `diff` as evenly as possible. An odd position goes to the right,
    /// so `right == left + 1` whenever `diff` is odd.
    pub fn centered(diff: usize) -> Self {
        let left = diff / 2;

        Self {
            left,
            right: diff - left,
        }
    }

    pub fn total(&self) -> usize {
        self.left + self.right
    }

    pub fn is_identity(&self) -> bool {
        self.total() == 0
    }

    /// Kept index range of the sequence axis.
    pub fn window(&self, target_length: usize) -> Range<usize> {
        self.left..self.left + target_length
    }
}

/// Crops the sequence axis of `[batch, seq, channels]` activations down to a
/// fixed, centered window.
#[derive(Module, Clone, Debug)]
pub struct CenterCrop {
    target_length: usize,
}

impl CenterCrop {
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn trim(&self, seq_len: usize) -> CropResult<Trim> {
        let diff = seq_len
            .checked_sub(self.target_length)
            .ok_or(CropError::Shape {
                seq_len,
                target_length: self.target_length,
            })?;

        Ok(Trim::centered(diff))
    }

    /// Validates a raw input length against the encoder it passes through
    /// before any tensor is built.
    pub fn check_encoder(&self, input_len: usize, encoder: &ConvStack) -> CropResult<Trim> {
        let seq_len = encoder.output_len(input_len)?;
        let trim = self.trim(seq_len)?;

        tracing::debug!(
            input_len,
            seq_len,
            left = trim.left,
            right = trim.right,
            "encoder output fits center crop"
        );

        Ok(trim)
    }

    pub fn forward<B: Backend>(&self, input: Tensor<B, 3>) -> CropResult<Tensor<B, 3>> {
        // input : B x T x C
        let [batch, seq_len, channels] = input.dims();
        let trim = self.trim(seq_len)?;

        if trim.is_identity() {
            tracing::trace!(seq_len, "sequence already at target length");
            return Ok(input);
        }

        tracing::trace!(seq_len, left = trim.left, right = trim.right, "cropping sequence");

        // burn rejects empty slice ranges
        if batch == 0 || channels == 0 {
            return Ok(Tensor::zeros([batch, self.target_length, channels], &input.device()));
        }

        let output = input.slice([0..batch, trim.window(self.target_length), 0..channels]);
        // output : B x target_length x C

        Ok(output)
    }
}
