use itertools::Itertools;
use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

pub(crate) fn sample_seq_len(min_len: usize, max_len: usize) -> usize {
    thread_rng().gen_range(min_len..max_len)
}

/// Coverage-like tracks with independently sampled lengths in `min_len..max_len`.
pub(crate) fn sample_tracks(num_tracks: usize, min_len: usize, max_len: usize) -> Vec<Vec<f32>> {
    let mut rng = thread_rng();
    let coverage = Uniform::new(0.0, 1.0);

    (0..num_tracks)
        .map(|_| {
            let seq_len = rng.gen_range(min_len..max_len);
            (&mut rng).sample_iter(coverage).take(seq_len).collect_vec()
        })
        .collect_vec()
}
