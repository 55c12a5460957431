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
#![forbid(unsafe_code)]

#[inline(always)]
/// Unsigned rounded average, `(a + b + 1) >> 1`
pub(crate) fn avg_round_u8(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16 + 1) >> 1) as u8
}

#[inline(always)]
/// Interlaced vertical chroma taps, `(near·3 + far + 2) >> 2`
///
/// The spatially nearer chroma row always carries weight 3 of 4; which row is
/// nearer depends on the field parity.
pub(crate) fn interlace_chroma_u8(near: u8, far: u8) -> u8 {
    ((near as u16 * 3 + far as u16 + 2) >> 2) as u8
}

#[inline(always)]
/// Saturating narrowing of a 32-bit intermediate to an unsigned 16-bit sample
pub(crate) fn saturate_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avg_round_exhaustive() {
        for a in 0..=255u16 {
            for b in 0..=255u16 {
                let expected = ((a + b + 1) / 2) as u8;
                assert_eq!(avg_round_u8(a as u8, b as u8), expected);
                assert_eq!(
                    avg_round_u8(a as u8, b as u8),
                    avg_round_u8(b as u8, a as u8),
                    "average must be commutative for ({}, {})",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_interlace_taps() {
        for near in 0..=255u8 {
            for far in 0..=255u8 {
                let reference = ((near as u16 * 3 + far as u16 + 2) >> 2) as u8;
                assert_eq!(interlace_chroma_u8(near, far), reference);
            }
        }
        // Equal inputs pass through, the taps sum to 4.
        for v in [0u8, 1, 127, 128, 254, 255] {
            assert_eq!(interlace_chroma_u8(v, v), v);
        }
    }

    #[test]
    fn test_saturate_u16() {
        assert_eq!(saturate_u16(-1), 0);
        assert_eq!(saturate_u16(0), 0);
        assert_eq!(saturate_u16(65535), 65535);
        assert_eq!(saturate_u16(65536), 65535);
        assert_eq!(saturate_u16(i32::MIN), 0);
        assert_eq!(saturate_u16(i32::MAX), 65535);
    }
}
