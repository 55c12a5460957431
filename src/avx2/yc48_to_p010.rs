/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::avx2::avx2_utils::{
    avx2_gather_y_uv_from_yc48, avx2_mul_bias, avx2_rescale_yc48, avx2_rescale_yc48_pair,
};
use crate::coefficients::{
    YC48_CHROMA_DC, YC48_CHROMA_DC_X2, YC48_CHROMA_FAR_MUL, YC48_CHROMA_NEAR_MUL,
    YC48_CHROMA_PAIR, YC48_LUMA,
};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn load_yc48_group(ptr: *const i16) -> (__m256i, __m256i) {
    let v0 = _mm256_loadu_si256(ptr as *const __m256i);
    let v1 = _mm256_loadu_si256(ptr.add(16) as *const __m256i);
    let v2 = _mm256_loadu_si256(ptr.add(32) as *const __m256i);
    avx2_gather_y_uv_from_yc48(v0, v1, v2)
}

/// Converts one progressive pair of packed YC48 rows into two rescaled luma
/// rows and one interleaved chroma row, 16 pixels per step. Chroma rows are
/// summed in the pre-rescale domain together with the doubled DC offset.
///
/// Returns the count of processed luma columns.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_yc48_to_p010_rows(
    src0: &[i16],
    src1: &[i16],
    dst_y0: &mut [u16],
    dst_y1: &mut [u16],
    dst_uv: &mut [u16],
    width: usize,
) -> usize {
    let ones = _mm256_set1_epi16(1);
    let offset = _mm256_set1_epi32(YC48_LUMA.offset);
    let luma_ma = avx2_mul_bias(YC48_LUMA.mul, YC48_LUMA.bias());
    let chroma_ma = avx2_mul_bias(YC48_CHROMA_PAIR.mul, YC48_CHROMA_PAIR.bias());
    let chroma_dc_x2 = _mm256_set1_epi16(YC48_CHROMA_DC_X2);

    let mut cx = 0usize;
    while cx + 16 <= width {
        let (luma0, uv0) = load_yc48_group(src0.as_ptr().add(cx * 3));
        _mm256_storeu_si256(
            dst_y0.as_mut_ptr().add(cx) as *mut __m256i,
            avx2_rescale_yc48::<{ YC48_LUMA.shift }>(luma0, luma_ma, offset, ones),
        );

        let (luma1, uv1) = load_yc48_group(src1.as_ptr().add(cx * 3));
        _mm256_storeu_si256(
            dst_y1.as_mut_ptr().add(cx) as *mut __m256i,
            avx2_rescale_yc48::<{ YC48_LUMA.shift }>(luma1, luma_ma, offset, ones),
        );

        let uv_sum = _mm256_add_epi16(_mm256_add_epi16(uv0, uv1), chroma_dc_x2);
        _mm256_storeu_si256(
            dst_uv.as_mut_ptr().add(cx) as *mut __m256i,
            avx2_rescale_yc48::<{ YC48_CHROMA_PAIR.shift }>(uv_sum, chroma_ma, offset, ones),
        );

        cx += 16;
    }
    cx
}

/// Converts one field's worth of an interlaced 4-row YC48 group: both luma
/// rows rescaled and stored, chroma tap-interpolated 3:1 toward the field's
/// nearer row on 16-bit-wide DC-offset samples.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_yc48_to_p010_rows_interlaced(
    src_up: &[i16],
    src_down: &[i16],
    dst_y_up: &mut [u16],
    dst_y_down: &mut [u16],
    dst_uv: &mut [u16],
    width: usize,
    field: usize,
) -> usize {
    let ones = _mm256_set1_epi16(1);
    let offset = _mm256_set1_epi32(YC48_LUMA.offset);
    let luma_ma = avx2_mul_bias(YC48_LUMA.mul, YC48_LUMA.bias());
    // The rounding bias splits evenly across the two row terms.
    let near_ma = avx2_mul_bias(YC48_CHROMA_NEAR_MUL, 512);
    let far_ma = avx2_mul_bias(YC48_CHROMA_FAR_MUL, 512);
    let (up_ma, down_ma) = if field == 0 {
        (near_ma, far_ma)
    } else {
        (far_ma, near_ma)
    };
    let chroma_dc = _mm256_set1_epi16(YC48_CHROMA_DC);

    let mut cx = 0usize;
    while cx + 16 <= width {
        let (luma_up, uv_up) = load_yc48_group(src_up.as_ptr().add(cx * 3));
        _mm256_storeu_si256(
            dst_y_up.as_mut_ptr().add(cx) as *mut __m256i,
            avx2_rescale_yc48::<{ YC48_LUMA.shift }>(luma_up, luma_ma, offset, ones),
        );

        let (luma_down, uv_down) = load_yc48_group(src_down.as_ptr().add(cx * 3));
        _mm256_storeu_si256(
            dst_y_down.as_mut_ptr().add(cx) as *mut __m256i,
            avx2_rescale_yc48::<{ YC48_LUMA.shift }>(luma_down, luma_ma, offset, ones),
        );

        let up = _mm256_add_epi16(uv_up, chroma_dc);
        let down = _mm256_add_epi16(uv_down, chroma_dc);
        _mm256_storeu_si256(
            dst_uv.as_mut_ptr().add(cx) as *mut __m256i,
            avx2_rescale_yc48_pair::<{ crate::coefficients::YC48_CHROMA_INTERLACED_SHIFT }>(
                up, down, up_ma, down_ma, offset, ones,
            ),
        );

        cx += 16;
    }
    cx
}
