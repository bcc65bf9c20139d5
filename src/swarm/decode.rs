//! Candidate Decoding
//!
//! Maps a continuous candidate vector onto a walk of node indices.

/// Clamp into `[0, node_count - 1]` and truncate toward zero.
///
/// NaN decodes to node 0. `node_count` must be at least 1.
#[inline]
pub fn decode_component(value: f64, node_count: usize) -> usize {
    let last = node_count.saturating_sub(1);
    if value.is_nan() {
        return 0;
    }
    let idx = value.clamp(0.0, last as f64).trunc() as usize;
    idx.min(last)
}

pub fn decode(position: &[f64], node_count: usize) -> Vec<usize> {
    position
        .iter()
        .map(|&v| decode_component(v, node_count))
        .collect()
}
