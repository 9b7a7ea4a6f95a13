pub type CropResult<T> = Result<T, CropError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CropError {
    /// Sequence axis is shorter than the window the head expects.
    #[error("cannot crop sequence of length {seq_len} down to target length {target_length}")]
    Shape { seq_len: usize, target_length: usize },

    #[error("target length must be positive")]
    ZeroTargetLength,

    /// Input is consumed entirely by the encoder's receptive field.
    #[error("input of length {input_len} is shorter than the encoder receptive field")]
    ReceptiveField { input_len: usize },

    #[error("conv stack has {kernels} kernels, {strides} strides and {paddings} paddings")]
    LayerCountMismatch {
        kernels: usize,
        strides: usize,
        paddings: usize,
    },

    #[error("conv stack layer {layer} has a zero kernel or stride")]
    ZeroKernelOrStride { layer: usize },

    #[error("padding of conv stack layer {layer} overflows the sequence length")]
    PaddingOverflow { layer: usize },
}

#[cfg(test)]
mod tests {
    use burn::config::Config;

    use super::*;

    // configs are declared next to the crate error types throughout
    #[derive(Config, Debug)]
    struct WindowConfig {
        target_length: usize,
        #[config(default = "0")]
        offset: usize,
    }

    #[test]
    fn config_derive_coexists_with_error_types() {
        let config = WindowConfig::new(896).with_offset(3);

        let loaded = WindowConfig::load_binary(config.to_string().as_bytes()).unwrap();
        let checked: CropResult<usize> = Ok(loaded.target_length);

        assert_eq!(checked, Ok(896));
        assert_eq!(loaded.offset, 3);
    }

    #[test]
    fn shape_error_reports_both_lengths() {
        let err = CropError::Shape { seq_len: 800, target_length: 896 };

        assert_eq!(
            err.to_string(),
            "cannot crop sequence of length 800 down to target length 896"
        );
    }
}
