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
use crate::yuv_error::{MismatchedSize, YuvError};

/// Store policy for bulk row movement.
///
/// Non-temporal stores bypass the cache and are preferred when the destination
/// will not be read again soon, e.g. frames handed straight to an encoder.
/// Cached stores are the safe default for data that is re-read.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StorePolicy {
    Cached,
    NonTemporal,
}

/// Crop window in luma samples, applied to the source addressing.
///
/// For 4:2:0 destinations all four offsets must be even so that chroma
/// indexing stays exact; this is a caller precondition and is only checked
/// with debug assertions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CropWindow {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropWindow {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        CropWindow {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn none() -> Self {
        CropWindow::new(0, 0, 0, 0)
    }

    pub(crate) fn is_even(&self) -> bool {
        (self.left | self.top | self.right | self.bottom) & 1 == 0
    }

    /// Source dimensions reduced by the window must match the destination.
    pub(crate) fn check_against(
        &self,
        src_width: u32,
        src_height: u32,
        dst_width: u32,
        dst_height: u32,
    ) -> Result<(), YuvError> {
        let cropped_width = src_width
            .checked_sub(self.left)
            .and_then(|w| w.checked_sub(self.right))
            .unwrap_or(0);
        let cropped_height = src_height
            .checked_sub(self.top)
            .and_then(|h| h.checked_sub(self.bottom))
            .unwrap_or(0);
        if cropped_width != dst_width {
            return Err(YuvError::CroppedWidthMismatch(MismatchedSize {
                expected: cropped_width as usize,
                received: dst_width as usize,
            }));
        }
        if cropped_height != dst_height {
            return Err(YuvError::CroppedHeightMismatch(MismatchedSize {
                expected: cropped_height as usize,
                received: dst_height as usize,
            }));
        }
        Ok(())
    }
}
