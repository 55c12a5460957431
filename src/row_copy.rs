/*
 * Copyright (c) Radzivon Bartoshyk, 2/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::StorePolicy;

/// Copies `dst.len()` bytes from `src` to `dst`, byte-identical to a per-byte
/// copy for any relative alignment.
///
/// `policy` selects cached or non-temporal stores for the aligned bulk of the
/// copy; pick [`StorePolicy::NonTemporal`] when the destination will not be
/// read again soon. Source and destination must not overlap (this is a
/// forward copy, not `memmove`).
///
/// # Panics
///
/// Panics if `src` is shorter than `dst`.
pub fn copy_row(dst: &mut [u8], src: &[u8], policy: StorePolicy) {
    let src = &src[..dst.len()];
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
    {
        if std::arch::is_x86_feature_detected!("avx2") {
            unsafe {
                crate::avx2::avx2_copy_row(dst, src, policy);
            }
            return;
        }
    }
    let _ = policy;
    dst.copy_from_slice(src);
}

/// Copies `height` rows of `width` elements between two pitched planes.
pub(crate) fn copy_plane_rows(
    dst: &mut [u8],
    dst_stride: usize,
    src: &[u8],
    src_stride: usize,
    width: usize,
    height: usize,
    policy: StorePolicy,
) {
    // Manual indexing: the source view may start mid-row after cropping, so
    // its final row can be shorter than a full stride.
    for y in 0..height {
        copy_row(
            &mut dst[y * dst_stride..][..width],
            &src[y * src_stride..][..width],
            policy,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn check_copy(size: usize, dst_offset: usize, src_offset: usize, policy: StorePolicy) {
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..size + src_offset).map(|_| rng.random::<u8>()).collect();
        let mut dst = vec![0u8; size + dst_offset];
        copy_row(&mut dst[dst_offset..], &src[src_offset..], policy);
        assert_eq!(
            &dst[dst_offset..],
            &src[src_offset..],
            "size {} dst_offset {} src_offset {}",
            size,
            dst_offset,
            src_offset
        );
    }

    #[test]
    fn test_copy_row_boundary_sizes() {
        for &size in &[0usize, 1, 31, 32, 33, 127, 128, 129, 4096] {
            for policy in [StorePolicy::Cached, StorePolicy::NonTemporal] {
                check_copy(size, 0, 0, policy);
            }
        }
    }

    #[test]
    fn test_copy_row_random_sizes_and_alignments() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let size = rng.random_range(0..2048);
            let dst_offset = rng.random_range(0..64);
            let src_offset = rng.random_range(0..64);
            for policy in [StorePolicy::Cached, StorePolicy::NonTemporal] {
                check_copy(size, dst_offset, src_offset, policy);
            }
        }
    }

    #[test]
    fn test_copy_plane_rows() {
        let width = 70usize;
        let height = 5usize;
        let src_stride = 80usize;
        let dst_stride = 72usize;
        let src: Vec<u8> = (0..src_stride * height).map(|i| (i % 251) as u8).collect();
        let mut dst = vec![0u8; dst_stride * height];
        copy_plane_rows(
            &mut dst,
            dst_stride,
            &src,
            src_stride,
            width,
            height,
            StorePolicy::Cached,
        );
        for y in 0..height {
            assert_eq!(
                &dst[y * dst_stride..y * dst_stride + width],
                &src[y * src_stride..y * src_stride + width]
            );
            // Padding between rows stays untouched.
            assert!(dst[y * dst_stride + width..(y + 1) * dst_stride]
                .iter()
                .all(|&b| b == 0));
        }
    }
}
