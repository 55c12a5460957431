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
use crate::numerics::{avg_round_u8, interlace_chroma_u8};
use crate::{CropWindow, PackedImage, SemiPlanarFrameMut, YuvError};

fn yuy2_to_nv12_impl<const INTERLACED: bool>(
    bi_planar_image: &mut SemiPlanarFrameMut<u8>,
    packed_image: &PackedImage<u8>,
    crop: CropWindow,
) -> Result<(), YuvError> {
    packed_image.check_constraints(2)?;
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
    let src_origin = crop.top as usize * src_stride + crop.left as usize * 2;
    let src = packed_image.data;
    let (y_plane, uv_plane) = bi_planar_image.y_uv_planes_mut();

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
    let use_avx2 = std::arch::is_x86_feature_detected!("avx2");

    if INTERLACED {
        for y in (0..height).step_by(4) {
            for field in 0..2usize {
                let src_up = &src[src_origin + (y + field) * src_stride..][..width * 2];
                let src_down = &src[src_origin + (y + field + 2) * src_stride..][..width * 2];
                let (up_rows, down_rows) = y_plane[(y + field) * dst_stride..]
                    .split_at_mut(2 * dst_stride);
                let dst_y_up = &mut up_rows[..width];
                let dst_y_down = &mut down_rows[..width];
                let dst_uv = &mut uv_plane[((y >> 1) + field) * dst_stride..][..width];

                let mut cx = 0usize;
                #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
                if use_avx2 {
                    cx = unsafe {
                        crate::avx2::avx2_yuy2_to_nv12_rows_interlaced(
                            src_up, src_down, dst_y_up, dst_y_down, dst_uv, width, field,
                        )
                    };
                }

                for x in cx..width {
                    dst_y_up[x] = src_up[2 * x];
                    dst_y_down[x] = src_down[2 * x];
                    let up_c = src_up[2 * x + 1];
                    let down_c = src_down[2 * x + 1];
                    dst_uv[x] = if field == 0 {
                        interlace_chroma_u8(up_c, down_c)
                    } else {
                        interlace_chroma_u8(down_c, up_c)
                    };
                }
            }
        }
    } else {
        for y in (0..height).step_by(2) {
            let src0 = &src[src_origin + y * src_stride..][..width * 2];
            let src1 = &src[src_origin + (y + 1) * src_stride..][..width * 2];
            let (row0, row1) = y_plane[y * dst_stride..].split_at_mut(dst_stride);
            let dst_y0 = &mut row0[..width];
            let dst_y1 = &mut row1[..width];
            let dst_uv = &mut uv_plane[(y >> 1) * dst_stride..][..width];

            let mut cx = 0usize;
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
            if use_avx2 {
                cx = unsafe {
                    crate::avx2::avx2_yuy2_to_nv12_rows(src0, src1, dst_y0, dst_y1, dst_uv, width)
                };
            }

            for x in cx..width {
                dst_y0[x] = src0[2 * x];
                dst_y1[x] = src1[2 * x];
                dst_uv[x] = avg_round_u8(src0[2 * x + 1], src1[2 * x + 1]);
            }
        }
    }

    Ok(())
}

/// Convert packed 4:2:2 (YUYV) to semi-planar 4:2:0 (NV12), progressive.
///
/// Each pair of source rows yields two luma rows, stored as-is, and one
/// interleaved chroma row produced by the rounded average of the two rows'
/// chroma streams. The crop window shifts the source origin; cropped-away
/// columns never take part in the average.
///
/// # Arguments
///
/// * `bi_planar_image` - Target semi-planar frame; `width`/`height` are the
///   post-crop output dimensions.
/// * `packed_image` - Source packed 4:2:2 frame.
/// * `crop` - Crop window in luma samples, all offsets even.
pub fn yuyv422_to_nv12(
    bi_planar_image: &mut SemiPlanarFrameMut<u8>,
    packed_image: &PackedImage<u8>,
    crop: CropWindow,
) -> Result<(), YuvError> {
    yuy2_to_nv12_impl::<false>(bi_planar_image, packed_image, crop)
}

/// Convert packed 4:2:2 (YUYV) to semi-planar 4:2:0 (NV12), interlaced.
///
/// Processes groups of four rows holding two fields. Luma rows are stored
/// as-is; chroma is tap-interpolated `(near·3 + far + 2) >> 2` between the
/// two chroma rows bounding each field, with the spatially nearer row
/// carrying weight 3 (the upper row for field 0, the lower row for field 1).
///
/// # Arguments
///
/// * `bi_planar_image` - Target semi-planar frame; height must be a multiple
///   of four.
/// * `packed_image` - Source packed 4:2:2 frame.
/// * `crop` - Crop window in luma samples, all offsets even.
pub fn yuyv422_to_nv12_interlaced(
    bi_planar_image: &mut SemiPlanarFrameMut<u8>,
    packed_image: &PackedImage<u8>,
    crop: CropWindow,
) -> Result<(), YuvError> {
    yuy2_to_nv12_impl::<true>(bi_planar_image, packed_image, crop)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_nv12(src: &[u8], src_stride: usize, width: usize, height: usize) -> (Vec<u8>, Vec<u8>) {
        let mut y_out = vec![0u8; width * height];
        let mut uv_out = vec![0u8; width * height / 2];
        for y in 0..height {
            for x in 0..width {
                y_out[y * width + x] = src[y * src_stride + 2 * x];
            }
        }
        for cy in 0..height / 2 {
            for x in 0..width {
                let a = src[(cy * 2) * src_stride + 2 * x + 1] as u16;
                let b = src[(cy * 2 + 1) * src_stride + 2 * x + 1] as u16;
                uv_out[cy * width + x] = ((a + b + 1) >> 1) as u8;
            }
        }
        (y_out, uv_out)
    }

    #[test]
    fn test_yuyv_64x4_deterministic_pattern() {
        let width = 64u32;
        let height = 4u32;
        let stride = width as usize * 2;
        // Repeating pattern exercising both streams.
        let src: Vec<u8> = (0..stride * height as usize)
            .map(|i| ((i * 7 + 13) % 256) as u8)
            .collect();
        let packed = PackedImage {
            data: &src,
            stride: stride as u32,
            width,
            height,
        };
        let mut dst = SemiPlanarFrameMut::<u8>::alloc(width, height);
        yuyv422_to_nv12(&mut dst, &packed, CropWindow::none()).unwrap();

        let (expected_y, expected_uv) = reference_nv12(&src, stride, width as usize, height as usize);
        assert_eq!(dst.y_plane(), &expected_y[..]);
        assert_eq!(&dst.uv_plane()[..expected_uv.len()], &expected_uv[..]);
    }

    #[test]
    fn test_yuyv_tail_width_not_simd_multiple() {
        // Width 40 leaves an 8-column scalar tail after the 32-wide kernel.
        let width = 40usize;
        let height = 6usize;
        let stride = width * 2 + 16;
        let src: Vec<u8> = (0..stride * height).map(|i| ((i * 31 + 5) % 256) as u8).collect();
        let packed = PackedImage {
            data: &src,
            stride: stride as u32,
            width: width as u32,
            height: height as u32,
        };
        let mut dst = SemiPlanarFrameMut::<u8>::alloc(width as u32, height as u32);
        yuyv422_to_nv12(&mut dst, &packed, CropWindow::none()).unwrap();

        let (expected_y, expected_uv) = reference_nv12(&src, stride, width, height);
        assert_eq!(dst.y_plane(), &expected_y[..]);
        assert_eq!(dst.uv_plane(), &expected_uv[..]);
    }

    #[test]
    fn test_yuyv_crop_commutes_with_conversion() {
        let src_width = 48usize;
        let src_height = 8usize;
        let stride = src_width * 2;
        let src: Vec<u8> = (0..stride * src_height)
            .map(|i| ((i * 11 + 3) % 256) as u8)
            .collect();
        let crop = CropWindow::new(4, 2, 8, 2);
        let out_width = src_width - 12;
        let out_height = src_height - 4;

        let packed = PackedImage {
            data: &src,
            stride: stride as u32,
            width: src_width as u32,
            height: src_height as u32,
        };
        let mut cropped_dst = SemiPlanarFrameMut::<u8>::alloc(out_width as u32, out_height as u32);
        yuyv422_to_nv12(&mut cropped_dst, &packed, crop).unwrap();

        let mut full_dst = SemiPlanarFrameMut::<u8>::alloc(src_width as u32, src_height as u32);
        yuyv422_to_nv12(&mut full_dst, &packed, CropWindow::none()).unwrap();

        // Luma region of the full conversion, re-extracted.
        for y in 0..out_height {
            let full_row = &full_dst.y_plane()[(y + 2) * src_width + 4..][..out_width];
            let crop_row = &cropped_dst.y_plane()[y * out_width..][..out_width];
            assert_eq!(full_row, crop_row, "luma row {}", y);
        }
        for cy in 0..out_height / 2 {
            let full_row = &full_dst.uv_plane()[(cy + 1) * src_width + 4..][..out_width];
            let crop_row = &cropped_dst.uv_plane()[cy * out_width..][..out_width];
            assert_eq!(full_row, crop_row, "chroma row {}", cy);
        }
    }

    #[test]
    fn test_yuyv_interlaced_tap_weights() {
        let width = 36usize;
        let height = 8usize;
        let stride = width * 2;
        let src: Vec<u8> = (0..stride * height).map(|i| ((i * 17 + 29) % 256) as u8).collect();
        let packed = PackedImage {
            data: &src,
            stride: stride as u32,
            width: width as u32,
            height: height as u32,
        };
        let mut dst = SemiPlanarFrameMut::<u8>::alloc(width as u32, height as u32);
        yuyv422_to_nv12_interlaced(&mut dst, &packed, CropWindow::none()).unwrap();

        // Luma is never filtered, interlaced or not.
        for y in 0..height {
            for x in 0..width {
                assert_eq!(dst.y_plane()[y * width + x], src[y * stride + 2 * x]);
            }
        }
        // Chroma row mapping per 4-row group: row g*2+field interpolates rows
        // g*4+field (near for field 0) and g*4+field+2 (near for field 1).
        for group in 0..height / 4 {
            for field in 0..2 {
                let up_row = group * 4 + field;
                let down_row = up_row + 2;
                let uv_row = group * 2 + field;
                for x in 0..width {
                    let up_c = src[up_row * stride + 2 * x + 1] as u16;
                    let down_c = src[down_row * stride + 2 * x + 1] as u16;
                    let expected = if field == 0 {
                        ((up_c * 3 + down_c + 2) >> 2) as u8
                    } else {
                        ((down_c * 3 + up_c + 2) >> 2) as u8
                    };
                    assert_eq!(
                        dst.uv_plane()[uv_row * width + x],
                        expected,
                        "group {} field {} col {}",
                        group,
                        field,
                        x
                    );
                }
            }
        }
    }
}
