use crate::crop::CenterCropConfig;
use crate::receptive::ConvStack;

pub const ENFORMER_INPUT_LEN: usize = 196_608;
pub const BORZOI_INPUT_LEN: usize = 524_288;

/// 128 bp bins: one pooling after the stem and six in the conv tower give
/// 1536 bins, of which the central 896 reach the heads.
pub fn enformer_crop() -> (ConvStack, CenterCropConfig) {
    let encoder = ConvStack::pooling(7, 2);
    let crop_config = CenterCropConfig::new(896);

    (encoder, crop_config)
}

/// 32 bp bins at the output of the upsampling path, 16384 bins of which the
/// central 6144 reach the heads.
pub fn borzoi_crop() -> (ConvStack, CenterCropConfig) {
    let encoder = ConvStack::pooling(5, 2);
    let crop_config = CenterCropConfig::new(6144);

    (encoder, crop_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::Trim;

    #[test]
    fn enformer_trims_320_bins_per_side() {
        let (encoder, crop_config) = enformer_crop();
        let crop = crop_config.init().unwrap();

        assert_eq!(encoder.total_stride(), 128);
        assert_eq!(encoder.output_len(ENFORMER_INPUT_LEN).unwrap(), 1536);
        assert_eq!(crop.check_encoder(ENFORMER_INPUT_LEN, &encoder).unwrap(), Trim { left: 320, right: 320 });
    }

    #[test]
    fn borzoi_trims_5120_bins_per_side() {
        let (encoder, crop_config) = borzoi_crop();
        let crop = crop_config.init().unwrap();

        assert_eq!(encoder.output_len(BORZOI_INPUT_LEN).unwrap(), 16_384);
        assert_eq!(crop.check_encoder(BORZOI_INPUT_LEN, &encoder).unwrap(), Trim { left: 5120, right: 5120 });
    }
}
