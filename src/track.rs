use burn::prelude::{Backend, Tensor};
use unzip3::Unzip3;

use crate::crop::{CenterCrop, Trim};
use crate::error::CropResult;

/// Label tracks cropped to the same window as the model output.
pub struct TrackBatch<B: Backend> {
    pub tracks: Tensor<B, 2>,
    pub trims: Vec<Trim>,
    pub original_lens: Vec<usize>,
}

impl<B: Backend> TrackBatch<B> {
    pub fn num_tracks(&self) -> usize {
        self.tracks.dims()[0]
    }
}

pub fn center_crop_track(mut track: Vec<f32>, crop: &CenterCrop) -> CropResult<(Vec<f32>, Trim)> {
    let trim = crop.trim(track.len())?;

    track.truncate(trim.left + crop.target_length());
    track.drain(..trim.left);

    Ok((track, trim))
}

/// Crops every track or none: a single short track fails the whole batch.
pub fn crop_tracks<B: Backend>(
    tracks: Vec<Vec<f32>>,
    crop: &CenterCrop,
    device: &B::Device,
) -> CropResult<TrackBatch<B>> {
    let cropped = tracks
        .into_iter()
        .map(|track| {
            let original_len = track.len();
            center_crop_track(track, crop).map(|(track, trim)| (track, trim, original_len))
        })
        .collect::<CropResult<Vec<_>>>()?;

    if cropped.is_empty() {
        return Ok(TrackBatch {
            tracks: Tensor::zeros([0, crop.target_length()], device),
            trims: vec![],
            original_lens: vec![],
        });
    }

    let (tracks, trims, original_lens): (Vec<_>, Vec<_>, Vec<_>) = cropped
        .into_iter()
        .map(|(track, trim, original_len)| {
            let track = Tensor::<B, 1>::from_floats(&*track, device);

            (track, trim, original_len)
        })
        .unzip3();

    tracing::debug!(
        num_tracks = tracks.len(),
        target_length = crop.target_length(),
        "cropped label tracks"
    );

    Ok(TrackBatch {
        tracks: Tensor::stack(tracks, 0),
        trims,
        original_lens,
    })
}
