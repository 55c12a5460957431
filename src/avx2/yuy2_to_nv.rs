/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::avx2::avx2_utils::{avx2_load_yuy2_group, avx2_separate_even_odd};
use crate::coefficients::INTERLACE_WEIGHTS;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Converts one progressive pair of packed 4:2:2 rows into two luma rows and
/// one box-averaged interleaved chroma row, 32 pixels per step.
///
/// Returns the count of processed luma columns.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_yuy2_to_nv12_rows(
    src0: &[u8],
    src1: &[u8],
    dst_y0: &mut [u8],
    dst_y1: &mut [u8],
    dst_uv: &mut [u8],
    width: usize,
) -> usize {
    let mut cx = 0usize;
    while cx + 32 <= width {
        let (a0, b0) = avx2_load_yuy2_group(src0.as_ptr().add(cx * 2));
        let (luma0, chroma0) = avx2_separate_even_odd(a0, b0);
        _mm256_storeu_si256(dst_y0.as_mut_ptr().add(cx) as *mut __m256i, luma0);

        let (a1, b1) = avx2_load_yuy2_group(src1.as_ptr().add(cx * 2));
        let (luma1, chroma1) = avx2_separate_even_odd(a1, b1);
        _mm256_storeu_si256(dst_y1.as_mut_ptr().add(cx) as *mut __m256i, luma1);

        let uv = _mm256_avg_epu8(chroma0, chroma1);
        _mm256_storeu_si256(dst_uv.as_mut_ptr().add(cx) as *mut __m256i, uv);

        cx += 32;
    }
    cx
}

/// Tap-weighted vertical interpolation of two interleaved chroma rows,
/// `(near·3 + far + 2) >> 2` per byte with the near row picked by field.
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn avx2_interlace_chroma(up: __m256i, down: __m256i, field: usize) -> __m256i {
    let weights = _mm256_loadu_si256(INTERLACE_WEIGHTS[field].as_ptr() as *const __m256i);
    let two = _mm256_set1_epi16(2);
    let lo = _mm256_maddubs_epi16(_mm256_unpacklo_epi8(down, up), weights);
    let hi = _mm256_maddubs_epi16(_mm256_unpackhi_epi8(down, up), weights);
    let lo = _mm256_srai_epi16::<2>(_mm256_add_epi16(lo, two));
    let hi = _mm256_srai_epi16::<2>(_mm256_add_epi16(hi, two));
    _mm256_packus_epi16(lo, hi)
}

/// Converts one field's worth of an interlaced 4-row group: both luma rows
/// stored as-is, chroma interpolated between the field's two chroma rows.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_yuy2_to_nv12_rows_interlaced(
    src_up: &[u8],
    src_down: &[u8],
    dst_y_up: &mut [u8],
    dst_y_down: &mut [u8],
    dst_uv: &mut [u8],
    width: usize,
    field: usize,
) -> usize {
    let mut cx = 0usize;
    while cx + 32 <= width {
        let (a0, b0) = avx2_load_yuy2_group(src_up.as_ptr().add(cx * 2));
        let (luma_up, chroma_up) = avx2_separate_even_odd(a0, b0);
        _mm256_storeu_si256(dst_y_up.as_mut_ptr().add(cx) as *mut __m256i, luma_up);

        let (a1, b1) = avx2_load_yuy2_group(src_down.as_ptr().add(cx * 2));
        let (luma_down, chroma_down) = avx2_separate_even_odd(a1, b1);
        _mm256_storeu_si256(dst_y_down.as_mut_ptr().add(cx) as *mut __m256i, luma_down);

        let uv = avx2_interlace_chroma(chroma_up, chroma_down, field);
        _mm256_storeu_si256(dst_uv.as_mut_ptr().add(cx) as *mut __m256i, uv);

        cx += 32;
    }
    cx
}
