/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::avx2::avx2_utils::shuffle;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Interleaves one row of separate U and V planes into `U V U V …` order,
/// 32 chroma samples from each plane per 64-byte step.
///
/// Returns the count of processed chroma columns.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_interleave_uv_row(
    src_u: &[u8],
    src_v: &[u8],
    dst_uv: &mut [u8],
    chroma_width: usize,
) -> usize {
    let mut ux = 0usize;
    while ux + 32 <= chroma_width {
        let u = _mm256_loadu_si256(src_u.as_ptr().add(ux) as *const __m256i);
        let v = _mm256_loadu_si256(src_v.as_ptr().add(ux) as *const __m256i);

        // Pre-permuting the quads makes unpacklo/unpackhi come out in row
        // order despite the per-lane unpack semantics.
        let u = _mm256_permute4x64_epi64::<{ shuffle(3, 1, 2, 0) }>(u);
        let v = _mm256_permute4x64_epi64::<{ shuffle(3, 1, 2, 0) }>(v);

        let lo = _mm256_unpacklo_epi8(u, v);
        let hi = _mm256_unpackhi_epi8(u, v);

        _mm256_storeu_si256(dst_uv.as_mut_ptr().add(ux * 2) as *mut __m256i, lo);
        _mm256_storeu_si256(dst_uv.as_mut_ptr().add(ux * 2 + 32) as *mut __m256i, hi);

        ux += 32;
    }
    ux
}
