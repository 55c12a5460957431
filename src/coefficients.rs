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

//! Fixed-point rescale constants for the YC48 intermediate format.
//!
//! YC48 stores three signed 16-bit channels per pixel: luma nominally in
//! `0..=4096` (8-bit limited 16..235) and chroma nominally in `-2048..=2048`
//! (8-bit limited 16..240 around 128). The constants below map those ranges
//! onto 16-bit limited range, `sample * mul + rounding >> shift, + offset`,
//! with all multipliers small enough for a 16-bit multiply-add.

/// One fixed-point linear transform, `((v * mul + bias) >> shift) + offset`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Yc48Rescale {
    pub mul: i16,
    pub shift: i32,
    pub offset: i32,
}

impl Yc48Rescale {
    /// Round-half-up bias added before the shift.
    #[inline(always)]
    pub(crate) const fn bias(&self) -> i32 {
        1 << (self.shift - 1)
    }

    #[inline(always)]
    pub(crate) const fn apply(&self, v: i32) -> i32 {
        ((v * self.mul as i32 + self.bias()) >> self.shift) + self.offset
    }
}

/// Luma, 219·256/4096 scale plus the 16·256 black offset.
pub(crate) const YC48_LUMA: Yc48Rescale = Yc48Rescale {
    mul: 28032,
    shift: 11,
    offset: 4096,
};

/// Chroma applied to the sum of two DC-offset rows, 224·256/4096 scale
/// halved for the vertical pair average.
pub(crate) const YC48_CHROMA_PAIR: Yc48Rescale = Yc48Rescale {
    mul: 28672,
    shift: 12,
    offset: 4096,
};

/// Interlaced chroma taps on DC-offset samples: the spatially nearer row
/// carries 3/4 of the 224·256/4096 scale, the farther row 1/4. The two
/// multipliers sum to the full-scale 14·2048.
pub(crate) const YC48_CHROMA_NEAR_MUL: i16 = 21504;
pub(crate) const YC48_CHROMA_FAR_MUL: i16 = 7168;
pub(crate) const YC48_CHROMA_INTERLACED_SHIFT: i32 = 11;
pub(crate) const YC48_CHROMA_OFFSET: i32 = 4096;

/// DC offset bringing one chroma sample into `0..=4096`, and its doubled
/// form for a summed row pair.
pub(crate) const YC48_CHROMA_DC: i16 = 1 << 11;
pub(crate) const YC48_CHROMA_DC_X2: i16 = 1 << 12;

#[inline(always)]
pub(crate) const fn yc48_chroma_interlaced(near: i32, far: i32) -> i32 {
    let bias = 1 << (YC48_CHROMA_INTERLACED_SHIFT - 1);
    ((near * YC48_CHROMA_NEAR_MUL as i32 + far * YC48_CHROMA_FAR_MUL as i32 + bias)
        >> YC48_CHROMA_INTERLACED_SHIFT)
        + YC48_CHROMA_OFFSET
}

/// Tap weights for interlaced 4:2:2 → 4:2:0 chroma interpolation, indexed by
/// field. Consumed pairwise against (lower, upper) interleaved rows, so field
/// 0 weights the upper row by 3 and field 1 the lower row by 3.
pub(crate) static INTERLACE_WEIGHTS: [[u8; 32]; 2] = [
    [
        1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3,
        1, 3,
    ],
    [
        3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1,
        3, 1,
    ],
];
