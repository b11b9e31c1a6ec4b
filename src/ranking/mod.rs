//! Exact-color ranking: histogram an image, then keep the most frequent colors.

pub mod histogram;
pub mod top_k;

pub use histogram::Histogram;
pub use top_k::TopK;

use std::cmp::Ordering;

use crate::error::TopKError;
use crate::models::ColorKey;

/// Higher count first; equal counts fall back to the lower color key
fn by_count_then_key(a: &(ColorKey, u64), b: &(ColorKey, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// The `k` most frequent colors of `histogram`, most frequent first
pub fn rank(histogram: &Histogram, k: usize) -> Result<Vec<ColorKey>, TopKError> {
    let mut topk = TopK::new(k, by_count_then_key)?;
    topk.extend(histogram.iter());

    Ok(topk
        .into_sorted_vec()
        .into_iter()
        .map(|(color, _)| color)
        .collect())
}
