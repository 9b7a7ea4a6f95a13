use burn::config::Config;
use itertools::izip;

use crate::error::{CropError, CropResult};

fn padded_len(len: usize, padding: usize) -> Option<usize> {
    padding.checked_mul(2).and_then(|padding| len.checked_add(padding))
}

/// Length of a 1d convolution or pooling output, `None` when the kernel does
/// not fit into the padded input or the arithmetic is undefined.
pub fn conv1d_output_len(len: usize, kernel_size: usize, stride: usize, padding: usize) -> Option<usize> {
    padded_len(len, padding)?
        .checked_sub(kernel_size)?
        .checked_div(stride)?
        .checked_add(1)
}

/// Kernel, stride and padding of every length-changing layer in an encoder,
/// in application order.
#[derive(Config, Debug)]
pub struct ConvStack {
    pub kernels: Vec<usize>,
    pub strides: Vec<usize>,
    pub paddings: Vec<usize>,
}

impl ConvStack {
    /// `num_layers` unpadded poolings with kernel == stride == `pool_size`.
    pub fn pooling(num_layers: usize, pool_size: usize) -> Self {
        Self::new(
            vec![pool_size; num_layers],
            vec![pool_size; num_layers],
            vec![0; num_layers],
        )
    }

    pub fn num_layers(&self) -> usize {
        self.kernels.len()
    }

    /// Number of input positions per output position, saturating at `usize::MAX`.
    pub fn total_stride(&self) -> usize {
        self.strides
            .iter()
            .fold(1, |total: usize, stride| total.saturating_mul(*stride))
    }

    pub fn validate(&self) -> CropResult<()> {
        let num_layers = self.kernels.len();

        if self.strides.len() != num_layers || self.paddings.len() != num_layers {
            return Err(CropError::LayerCountMismatch {
                kernels: num_layers,
                strides: self.strides.len(),
                paddings: self.paddings.len(),
            });
        }

        if let Some(layer) = izip!(&self.kernels, &self.strides).position(|(kernel, stride)| *kernel == 0 || *stride == 0) {
            return Err(CropError::ZeroKernelOrStride { layer });
        }

        Ok(())
    }

    pub fn output_len(&self, input_len: usize) -> CropResult<usize> {
        self.validate()?;

        izip!(&self.kernels, &self.strides, &self.paddings)
            .enumerate()
            .try_fold(input_len, |len, (layer, (kernel, stride, padding))| {
                padded_len(len, *padding).ok_or(CropError::PaddingOverflow { layer })?;

                conv1d_output_len(len, *kernel, *stride, *padding).ok_or(CropError::ReceptiveField { input_len })
            })
    }

    pub fn output_lens(&self, input_lens: Vec<usize>) -> CropResult<Vec<usize>> {
        input_lens
            .into_iter()
            .map(|len| self.output_len(len))
            .collect()
    }
}
