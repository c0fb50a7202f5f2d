use std::path::{Path, PathBuf};

/// The perceptual hash of a single video file: a sequence of 64-bit values,
/// in exactly the order the hasher returned them.
///
/// The sequence may be empty. An empty hash prints as nothing and has
/// distance 0 to every other hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoHash {
    src_path: PathBuf,
    hash: Vec<u64>,
}

impl VideoHash {
    pub fn new<P: AsRef<Path>>(src_path: P, hash: Vec<u64>) -> Self {
        Self {
            src_path: src_path.as_ref().to_path_buf(),
            hash,
        }
    }

    /// The video file that this hash was obtained from.
    pub fn src_path(&self) -> &Path {
        &self.src_path
    }

    pub fn values(&self) -> &[u64] {
        &self.hash
    }

    pub fn len(&self) -> usize {
        self.hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// Hamming distance to another hash: the number of bits that differ.
    /// Hashes of unequal length are compared over their common prefix, so
    /// a truncated copy of a video still scores close to its source.
    pub fn distance(&self, other: &Self) -> u32 {
        raw_distance(&self.hash, &other.hash)
    }
}

fn raw_distance(x: &[u64], y: &[u64]) -> u32 {
    x.iter().zip(y.iter()).fold(0, |acc, (x, y)| {
        let difference = x ^ y;
        let set_bits = difference.count_ones();
        acc + set_bits
    })
}
