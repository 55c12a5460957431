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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Geometry violations detectable from the caller's slices.
///
/// Every check happens once per call, before the conversion loops; the hot
/// loops themselves carry no error branches.
#[derive(Debug)]
pub enum YuvError {
    PackedFrameSizeMismatch(MismatchedSize),
    PackedFrameMinimumSizeMismatch(MismatchedSize),
    LumaPlaneSizeMismatch(MismatchedSize),
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    ChromaPlaneSizeMismatch(MismatchedSize),
    ChromaPlaneMinimumSizeMismatch(MismatchedSize),
    DestinationSizeMismatch(MismatchedSize),
    CroppedWidthMismatch(MismatchedSize),
    CroppedHeightMismatch(MismatchedSize),
    PointerOverflow,
    ZeroBaseSize,
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::PackedFrameSizeMismatch(size) => f.write_fmt(format_args!(
                "Packed frame have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::PackedFrameMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Packed frame row stride must hold at least {} elements, but it holds {}",
                size.expected, size.received
            )),
            YuvError::LumaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::LumaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YuvError::CroppedWidthMismatch(size) => f.write_fmt(format_args!(
                "Cropped source width is {} but destination width is {}",
                size.expected, size.received
            )),
            YuvError::CroppedHeightMismatch(size) => f.write_fmt(format_args!(
                "Cropped source height is {} but destination height is {}",
                size.expected, size.received
            )),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), YuvError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    Ok(())
}

/// Checks a single plane against `stride × height` with `width` elements used
/// per row.
#[inline]
pub(crate) fn check_plane<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
    luma: bool,
) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    check_overflow_v2(stride as usize, height as usize)?;
    check_overflow_v2(width as usize, height as usize)?;
    let wrap_min = |s: MismatchedSize| {
        if luma {
            YuvError::LumaPlaneMinimumSizeMismatch(s)
        } else {
            YuvError::ChromaPlaneMinimumSizeMismatch(s)
        }
    };
    let wrap_eq = |s: MismatchedSize| {
        if luma {
            YuvError::LumaPlaneSizeMismatch(s)
        } else {
            YuvError::ChromaPlaneSizeMismatch(s)
        }
    };
    if (stride as usize) < width as usize {
        return Err(wrap_min(MismatchedSize {
            expected: width as usize,
            received: stride as usize,
        }));
    }
    if stride as usize * height as usize != data.len() {
        return Err(wrap_eq(MismatchedSize {
            expected: stride as usize * height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Checks a packed single-plane frame carrying `channels` elements per pixel.
#[inline]
pub(crate) fn check_packed_frame<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    check_overflow_v2(stride as usize, height as usize)?;
    check_overflow_v2(width as usize * channels, height as usize)?;
    if (stride as usize) < width as usize * channels {
        return Err(YuvError::PackedFrameMinimumSizeMismatch(MismatchedSize {
            expected: width as usize * channels,
            received: stride as usize,
        }));
    }
    if stride as usize * height as usize != data.len() {
        return Err(YuvError::PackedFrameSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Checks a single-allocation semi-planar destination: the luma plane spans
/// `stride × full_height`, the interleaved chroma plane follows it and must
/// hold `(height + 1) / 2` written rows.
#[inline]
pub(crate) fn check_semi_planar_store<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
    full_height: u32,
) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    if full_height < height {
        return Err(YuvError::CroppedHeightMismatch(MismatchedSize {
            expected: height as usize,
            received: full_height as usize,
        }));
    }
    check_overflow_v2(
        stride as usize,
        full_height as usize + (height as usize + 1) / 2,
    )?;
    if (stride as usize) < width as usize {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected: width as usize,
            received: stride as usize,
        }));
    }
    let required =
        stride as usize * full_height as usize + stride as usize * ((height as usize + 1) / 2);
    if data.len() < required {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected: required,
            received: data.len(),
        }));
    }
    Ok(())
}
