//! The codec trait implemented by every OxiPress algorithm.

use crate::algorithm::Algorithm;
use crate::error::Result;

/// A whole-buffer lossless codec.
///
/// Implementations are stateless between calls: `compress` and `decompress`
/// never mutate `self` or the input, and the returned buffer is owned by the
/// caller. For every input `x`, `decompress(&compress(x)?)? == x`.
///
/// The `Send + Sync` bound lets one codec instance serve concurrent callers,
/// e.g. several algorithms compressing the same shared input in parallel.
pub trait Codec: Send + Sync {
    /// The algorithm this codec implements.
    fn algorithm(&self) -> Algorithm;

    /// Compress `input` into a self-contained buffer.
    ///
    /// Empty input always produces empty output.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Recover the original bytes from a buffer produced by [`Codec::compress`].
    ///
    /// Empty input always produces empty output.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).compress(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).decompress(input)
    }
}
