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
use crate::coefficients::{
    yc48_chroma_interlaced, YC48_CHROMA_DC, YC48_CHROMA_DC_X2, YC48_CHROMA_PAIR, YC48_LUMA,
};
use crate::numerics::saturate_u16;
use crate::{CropWindow, PackedImage, SemiPlanarFrameMut, YuvError};

fn yc48_to_p010_impl<const INTERLACED: bool>(
    bi_planar_image: &mut SemiPlanarFrameMut<u16>,
    packed_image: &PackedImage<i16>,
    crop: CropWindow,
) -> Result<(), YuvError> {
    packed_image.check_constraints(3)?;
    bi_planar_image.check_constraints()?;
    crop.check_against(
        packed_image.width,
        packed_image.height,
        bi_planar_image.width,
        bi_planar_image.height,
    )?;
    debug_assert!(crop.is_even(), "4:2:0 crop offsets must be even");
    debug_assert!(
        bi_planar_image.width & 1 == 0 && bi_planar_image.height & 1 == 0,
        "4:2:0 output dimensions must be even"
    );
    if INTERLACED {
        debug_assert!(
            bi_planar_image.height & 3 == 0,
            "interlaced conversion processes whole 4-row field groups"
        );
    }

    let width = bi_planar_image.width as usize;
    let height = bi_planar_image.height as usize;
    let dst_stride = bi_planar_image.stride as usize;
    let src_stride = packed_image.stride as usize;
    let src_origin = crop.top as usize * src_stride + crop.left as usize * 3;
    let src = packed_image.data;
    let (y_plane, uv_plane) = bi_planar_image.y_uv_planes_mut();

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
    let use_avx2 = std::arch::is_x86_feature_detected!("avx2");

    if INTERLACED {
        for y in (0..height).step_by(4) {
            for field in 0..2usize {
                let src_up = &src[src_origin + (y + field) * src_stride..][..width * 3];
                let src_down = &src[src_origin + (y + field + 2) * src_stride..][..width * 3];
                let (up_rows, down_rows) =
                    y_plane[(y + field) * dst_stride..].split_at_mut(2 * dst_stride);
                let dst_y_up = &mut up_rows[..width];
                let dst_y_down = &mut down_rows[..width];
                let dst_uv = &mut uv_plane[((y >> 1) + field) * dst_stride..][..width];

                let mut cx = 0usize;
                #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
                if use_avx2 {
                    cx = unsafe {
                        crate::avx2::avx2_yc48_to_p010_rows_interlaced(
                            src_up, src_down, dst_y_up, dst_y_down, dst_uv, width, field,
                        )
                    };
                }

                let dc = YC48_CHROMA_DC as i32;
                for x in cx..width {
                    dst_y_up[x] = saturate_u16(YC48_LUMA.apply(src_up[3 * x] as i32));
                    dst_y_down[x] = saturate_u16(YC48_LUMA.apply(src_down[3 * x] as i32));
                    if x & 1 == 0 {
                        // Chroma is point-sampled from even pixels; taps run
                        // on DC-offset samples.
                        for c in 0..2 {
                            let up_c = src_up[3 * x + 1 + c] as i32 + dc;
                            let down_c = src_down[3 * x + 1 + c] as i32 + dc;
                            let v = if field == 0 {
                                yc48_chroma_interlaced(up_c, down_c)
                            } else {
                                yc48_chroma_interlaced(down_c, up_c)
                            };
                            dst_uv[x + c] = saturate_u16(v);
                        }
                    }
                }
            }
        }
    } else {
        for y in (0..height).step_by(2) {
            let src0 = &src[src_origin + y * src_stride..][..width * 3];
            let src1 = &src[src_origin + (y + 1) * src_stride..][..width * 3];
            let (row0, row1) = y_plane[y * dst_stride..].split_at_mut(dst_stride);
            let dst_y0 = &mut row0[..width];
            let dst_y1 = &mut row1[..width];
            let dst_uv = &mut uv_plane[(y >> 1) * dst_stride..][..width];

            let mut cx = 0usize;
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
            if use_avx2 {
                cx = unsafe {
                    crate::avx2::avx2_yc48_to_p010_rows(src0, src1, dst_y0, dst_y1, dst_uv, width)
                };
            }

            for x in cx..width {
                dst_y0[x] = saturate_u16(YC48_LUMA.apply(src0[3 * x] as i32));
                dst_y1[x] = saturate_u16(YC48_LUMA.apply(src1[3 * x] as i32));
                if x & 1 == 0 {
                    // Rows are summed before the rescale so one rounding step
                    // covers the vertical average.
                    for c in 0..2 {
                        let sum = src0[3 * x + 1 + c] as i32
                            + src1[3 * x + 1 + c] as i32
                            + YC48_CHROMA_DC_X2 as i32;
                        dst_uv[x + c] = saturate_u16(YC48_CHROMA_PAIR.apply(sum));
                    }
                }
            }
        }
    }

    Ok(())
}

/// Convert packed YC48 (signed 16-bit 4:4:4) to semi-planar 10-in-16 4:2:0
/// (P010), progressive.
///
/// Luma is rescaled per sample into 16-bit limited range. Chroma is
/// point-sampled from even pixels horizontally and averaged vertically across
/// each row pair before a single rescale, so only one rounding step applies.
///
/// # Arguments
///
/// * `bi_planar_image` - Target semi-planar frame; `width`/`height` are the
///   post-crop output dimensions.
/// * `packed_image` - Source packed YC48 frame.
/// * `crop` - Crop window in luma samples, all offsets even.
pub fn yc48_to_p010(
    bi_planar_image: &mut SemiPlanarFrameMut<u16>,
    packed_image: &PackedImage<i16>,
    crop: CropWindow,
) -> Result<(), YuvError> {
    yc48_to_p010_impl::<false>(bi_planar_image, packed_image, crop)
}

/// Convert packed YC48 to semi-planar 10-in-16 4:2:0 (P010), interlaced.
///
/// Processes 4-row field groups. Chroma interpolates the two rows bounding
/// each field with 3:1 taps toward the spatially nearer row (the upper row
/// for field 0, the lower row for field 1), computed on DC-offset samples
/// before the rescale into limited range.
pub fn yc48_to_p010_interlaced(
    bi_planar_image: &mut SemiPlanarFrameMut<u16>,
    packed_image: &PackedImage<i16>,
    crop: CropWindow,
) -> Result<(), YuvError> {
    yc48_to_p010_impl::<true>(bi_planar_image, packed_image, crop)
}
