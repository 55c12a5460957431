/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline(always)]
pub(crate) const fn shuffle(z: u32, y: u32, x: u32, w: u32) -> i32 {
    // Checked: we want to reinterpret the bits
    ((z << 6) | (y << 4) | (x << 2) | w) as i32
}

/// Splits two registers of byte-interleaved data into their even-position and
/// odd-position streams. For packed 4:2:2 the even stream is luma and the odd
/// stream interleaved chroma.
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_separate_even_odd(a: __m256i, b: __m256i) -> (__m256i, __m256i) {
    let mask_low_byte =
        _mm256_srli_epi16::<8>(_mm256_cmpeq_epi8(_mm256_setzero_si256(), _mm256_setzero_si256()));
    let a_odd = _mm256_srli_epi16::<8>(a);
    let b_odd = _mm256_srli_epi16::<8>(b);
    let even = _mm256_packus_epi16(
        _mm256_and_si256(a, mask_low_byte),
        _mm256_and_si256(b, mask_low_byte),
    );
    let odd = _mm256_packus_epi16(a_odd, b_odd);
    (even, odd)
}

/// Loads one packed 4:2:2 group of 32 pixels so that lane boundaries line up
/// for [`avx2_separate_even_odd`]: the two returned registers carry bytes
/// `[0..16, 32..48]` and `[16..32, 48..64]`.
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_load_yuy2_group(ptr: *const u8) -> (__m256i, __m256i) {
    let a = _mm256_set_m128i(
        _mm_loadu_si128(ptr.add(32) as *const __m128i),
        _mm_loadu_si128(ptr as *const __m128i),
    );
    let b = _mm256_set_m128i(
        _mm_loadu_si128(ptr.add(48) as *const __m128i),
        _mm_loadu_si128(ptr.add(16) as *const __m128i),
    );
    (a, b)
}

/// Regroups three raw registers of packed YC48 (16 pixels, 48 signed words)
/// into one register of luma samples in pixel order and one register of
/// `(Cb, Cr)` pairs taken from the even pixels.
///
/// The blend/permute pattern is fixed by the format: after the cross-lane
/// stage every 128-bit lane holds 8 consecutive source words, then two word
/// blends pick the channel and a shuffle restores pixel order.
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_gather_y_uv_from_yc48(
    v0: __m256i,
    v1: __m256i,
    v2: __m256i,
) -> (__m256i, __m256i) {
    const MASK_INT_Y: i32 = 0x80 + 0x10 + 0x02;
    const MASK_INT_UV: i32 = 0x40 + 0x20 + 0x01;

    let a = _mm256_blend_epi32::<0xf0>(v0, v1); // words 0..8  | 24..32
    let b = _mm256_permute2x128_si256::<{ (0x02 << 4) + 0x01 }>(v0, v2); // words 8..16 | 32..40
    let c = _mm256_blend_epi32::<0xf0>(v1, v2); // words 16..24 | 40..48

    let mut y = _mm256_blend_epi16::<MASK_INT_Y>(a, b);
    y = _mm256_blend_epi16::<{ MASK_INT_Y >> 2 }>(y, c);
    #[rustfmt::skip]
    let luma_order = _mm256_setr_epi8(
        0, 1, 6, 7, 12, 13, 2, 3,
        8, 9, 14, 15, 4, 5, 10, 11,
        0, 1, 6, 7, 12, 13, 2, 3,
        8, 9, 14, 15, 4, 5, 10, 11,
    );
    y = _mm256_shuffle_epi8(y, luma_order);

    let mut uv = _mm256_blend_epi16::<MASK_INT_UV>(a, b);
    uv = _mm256_blend_epi16::<{ MASK_INT_UV >> 2 }>(uv, c);
    uv = _mm256_alignr_epi8::<2>(uv, uv);
    uv = _mm256_shuffle_epi32::<{ shuffle(1, 2, 3, 0) }>(uv);

    (y, uv)
}

/// Packs one (multiplier, rounding bias) pair for a 16-bit multiply-add
/// against words interleaved with ones.
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_mul_bias(mul: i16, bias: i32) -> __m256i {
    _mm256_set1_epi32((bias << 16) | (mul as u16 as i32))
}

/// Fixed-point rescale of 16 words: widen against ones, multiply-add in the
/// rounding bias, arithmetic shift, add the range offset, saturate back to
/// unsigned words.
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_rescale_yc48<const SHIFT: i32>(
    v: __m256i,
    mul_bias: __m256i,
    offset: __m256i,
    ones: __m256i,
) -> __m256i {
    let lo = _mm256_madd_epi16(_mm256_unpacklo_epi16(v, ones), mul_bias);
    let hi = _mm256_madd_epi16(_mm256_unpackhi_epi16(v, ones), mul_bias);
    let lo = _mm256_add_epi32(_mm256_srai_epi32::<SHIFT>(lo), offset);
    let hi = _mm256_add_epi32(_mm256_srai_epi32::<SHIFT>(hi), offset);
    _mm256_packus_epi32(lo, hi)
}

/// Two-row variant of [`avx2_rescale_yc48`]: each row carries its own
/// multiplier/bias pair and the 32-bit products are summed before the shift.
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_rescale_yc48_pair<const SHIFT: i32>(
    a: __m256i,
    b: __m256i,
    mul_bias_a: __m256i,
    mul_bias_b: __m256i,
    offset: __m256i,
    ones: __m256i,
) -> __m256i {
    let lo = _mm256_add_epi32(
        _mm256_madd_epi16(_mm256_unpacklo_epi16(a, ones), mul_bias_a),
        _mm256_madd_epi16(_mm256_unpacklo_epi16(b, ones), mul_bias_b),
    );
    let hi = _mm256_add_epi32(
        _mm256_madd_epi16(_mm256_unpackhi_epi16(a, ones), mul_bias_a),
        _mm256_madd_epi16(_mm256_unpackhi_epi16(b, ones), mul_bias_b),
    );
    let lo = _mm256_add_epi32(_mm256_srai_epi32::<SHIFT>(lo), offset);
    let hi = _mm256_add_epi32(_mm256_srai_epi32::<SHIFT>(hi), offset);
    _mm256_packus_epi32(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separate_even_odd() {
        if !std::arch::is_x86_feature_detected!("avx2") {
            return;
        }
        let src: [u8; 64] = core::array::from_fn(|i| i as u8);
        unsafe {
            let (a, b) = avx2_load_yuy2_group(src.as_ptr());
            let (even, odd) = avx2_separate_even_odd(a, b);
            let mut got_even = [0u8; 32];
            let mut got_odd = [0u8; 32];
            _mm256_storeu_si256(got_even.as_mut_ptr() as *mut __m256i, even);
            _mm256_storeu_si256(got_odd.as_mut_ptr() as *mut __m256i, odd);
            for i in 0..32 {
                assert_eq!(got_even[i], (i * 2) as u8);
                assert_eq!(got_odd[i], (i * 2 + 1) as u8);
            }
        }
    }

    #[test]
    fn test_gather_y_uv_from_yc48() {
        if !std::arch::is_x86_feature_detected!("avx2") {
            return;
        }
        // Encode channel and pixel index so misrouted lanes are visible.
        let mut src = [0i16; 48];
        for px in 0..16 {
            src[px * 3] = px as i16; // Y
            src[px * 3 + 1] = 100 + px as i16; // Cb
            src[px * 3 + 2] = 200 + px as i16; // Cr
        }
        unsafe {
            let v0 = _mm256_loadu_si256(src.as_ptr() as *const __m256i);
            let v1 = _mm256_loadu_si256(src.as_ptr().add(16) as *const __m256i);
            let v2 = _mm256_loadu_si256(src.as_ptr().add(32) as *const __m256i);
            let (y, uv) = avx2_gather_y_uv_from_yc48(v0, v1, v2);
            let mut got_y = [0i16; 16];
            let mut got_uv = [0i16; 16];
            _mm256_storeu_si256(got_y.as_mut_ptr() as *mut __m256i, y);
            _mm256_storeu_si256(got_uv.as_mut_ptr() as *mut __m256i, uv);
            for px in 0..16 {
                assert_eq!(got_y[px], px as i16, "luma pixel {}", px);
            }
            for pair in 0..8 {
                let px = pair * 2;
                assert_eq!(got_uv[pair * 2], 100 + px as i16, "Cb of pixel {}", px);
                assert_eq!(got_uv[pair * 2 + 1], 200 + px as i16, "Cr of pixel {}", px);
            }
        }
    }
}
