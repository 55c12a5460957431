/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::yuv_support::StorePolicy;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Alignment-aware bulk row copy.
///
/// Below 128 bytes a scalar loop wins; otherwise an unaligned head brings the
/// destination to the 32-byte boundary, the aligned body moves 128 bytes per
/// step with cached or non-temporal stores, and an unaligned tail backed up
/// from the end covers the remainder. Source and destination must not
/// overlap.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_copy_row(dst: &mut [u8], src: &[u8], policy: StorePolicy) {
    let size = dst.len();
    debug_assert!(src.len() >= size);
    if size < 128 {
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d = *s;
        }
        return;
    }
    let mut dst_ptr = dst.as_mut_ptr();
    let mut src_ptr = src.as_ptr();
    let dst_fin = dst_ptr.add(size);
    let dst_aligned_fin = (((dst_fin as usize) + 31) & !31) - 128;

    let start_align_diff = (dst_ptr as usize) & 31;
    if start_align_diff != 0 {
        let head = _mm256_loadu_si256(src_ptr as *const __m256i);
        _mm256_storeu_si256(dst_ptr as *mut __m256i, head);
        dst_ptr = dst_ptr.add(32 - start_align_diff);
        src_ptr = src_ptr.add(32 - start_align_diff);
    }

    match policy {
        StorePolicy::Cached => {
            while (dst_ptr as usize) < dst_aligned_fin {
                let r0 = _mm256_loadu_si256(src_ptr as *const __m256i);
                let r1 = _mm256_loadu_si256(src_ptr.add(32) as *const __m256i);
                let r2 = _mm256_loadu_si256(src_ptr.add(64) as *const __m256i);
                let r3 = _mm256_loadu_si256(src_ptr.add(96) as *const __m256i);
                _mm256_store_si256(dst_ptr as *mut __m256i, r0);
                _mm256_store_si256(dst_ptr.add(32) as *mut __m256i, r1);
                _mm256_store_si256(dst_ptr.add(64) as *mut __m256i, r2);
                _mm256_store_si256(dst_ptr.add(96) as *mut __m256i, r3);
                dst_ptr = dst_ptr.add(128);
                src_ptr = src_ptr.add(128);
            }
        }
        StorePolicy::NonTemporal => {
            while (dst_ptr as usize) < dst_aligned_fin {
                let r0 = _mm256_loadu_si256(src_ptr as *const __m256i);
                let r1 = _mm256_loadu_si256(src_ptr.add(32) as *const __m256i);
                let r2 = _mm256_loadu_si256(src_ptr.add(64) as *const __m256i);
                let r3 = _mm256_loadu_si256(src_ptr.add(96) as *const __m256i);
                _mm256_stream_si256(dst_ptr as *mut __m256i, r0);
                _mm256_stream_si256(dst_ptr.add(32) as *mut __m256i, r1);
                _mm256_stream_si256(dst_ptr.add(64) as *mut __m256i, r2);
                _mm256_stream_si256(dst_ptr.add(96) as *mut __m256i, r3);
                dst_ptr = dst_ptr.add(128);
                src_ptr = src_ptr.add(128);
            }
        }
    }

    // The tail re-copies up to 127 bytes of overlap, which is cheaper than a
    // masked epilogue.
    let dst_tail = dst_fin.sub(128);
    let back = dst_ptr as usize - dst_tail as usize;
    let src_tail = src_ptr.sub(back);
    let r0 = _mm256_loadu_si256(src_tail as *const __m256i);
    let r1 = _mm256_loadu_si256(src_tail.add(32) as *const __m256i);
    let r2 = _mm256_loadu_si256(src_tail.add(64) as *const __m256i);
    let r3 = _mm256_loadu_si256(src_tail.add(96) as *const __m256i);
    _mm256_storeu_si256(dst_tail as *mut __m256i, r0);
    _mm256_storeu_si256(dst_tail.add(32) as *mut __m256i, r1);
    _mm256_storeu_si256(dst_tail.add(64) as *mut __m256i, r2);
    _mm256_storeu_si256(dst_tail.add(96) as *mut __m256i, r3);
}
