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
use crate::row_copy::copy_plane_rows;
use crate::{CropWindow, PlanarImage, SemiPlanarFrameMut, StorePolicy, YuvError};

fn yuv420_to_nv12_impl<const UV_ONLY: bool>(
    bi_planar_image: &mut SemiPlanarFrameMut<u8>,
    planar_image: &PlanarImage<u8>,
    crop: CropWindow,
) -> Result<(), YuvError> {
    planar_image.check_constraints()?;
    bi_planar_image.check_constraints()?;
    crop.check_against(
        planar_image.width,
        planar_image.height,
        bi_planar_image.width,
        bi_planar_image.height,
    )?;
    debug_assert!(crop.is_even(), "4:2:0 crop offsets must be even");
    debug_assert!(
        bi_planar_image.width & 1 == 0 && bi_planar_image.height & 1 == 0,
        "4:2:0 output dimensions must be even"
    );

    let width = bi_planar_image.width as usize;
    let height = bi_planar_image.height as usize;
    let dst_stride = bi_planar_image.stride as usize;
    let y_stride = planar_image.y_stride as usize;
    let uv_stride = planar_image.uv_stride as usize;
    let (y_plane, uv_plane) = bi_planar_image.y_uv_planes_mut();

    if !UV_ONLY {
        let luma_origin = crop.top as usize * y_stride + crop.left as usize;
        copy_plane_rows(
            y_plane,
            dst_stride,
            &planar_image.y_plane[luma_origin..],
            y_stride,
            width,
            height,
            StorePolicy::Cached,
        );
    }

    // Chroma planes are half resolution; even crop offsets keep this exact.
    let chroma_origin = (crop.top as usize >> 1) * uv_stride + (crop.left as usize >> 1);
    let chroma_width = width >> 1;
    let chroma_height = height >> 1;

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
    let use_avx2 = std::arch::is_x86_feature_detected!("avx2");

    for cy in 0..chroma_height {
        let src_u = &planar_image.u_plane[chroma_origin + cy * uv_stride..][..chroma_width];
        let src_v = &planar_image.v_plane[chroma_origin + cy * uv_stride..][..chroma_width];
        let dst_uv = &mut uv_plane[cy * dst_stride..][..chroma_width * 2];

        let mut ux = 0usize;
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
        if use_avx2 {
            ux = unsafe { crate::avx2::avx2_interleave_uv_row(src_u, src_v, dst_uv, chroma_width) };
        }

        for x in ux..chroma_width {
            dst_uv[2 * x] = src_u[x];
            dst_uv[2 * x + 1] = src_v[x];
        }
    }

    Ok(())
}

/// Convert planar 4:2:0 (I420) to semi-planar 4:2:0 (NV12).
///
/// The luma plane is relocated row by row; the two chroma planes are
/// interleaved into `U V U V …` order. No samples are resampled or filtered.
///
/// # Arguments
///
/// * `bi_planar_image` - Target semi-planar frame; `width`/`height` are the
///   post-crop output dimensions.
/// * `planar_image` - Source planar frame.
/// * `crop` - Crop window in luma samples, all offsets even.
pub fn yuv420_to_nv12(
    bi_planar_image: &mut SemiPlanarFrameMut<u8>,
    planar_image: &PlanarImage<u8>,
    crop: CropWindow,
) -> Result<(), YuvError> {
    yuv420_to_nv12_impl::<false>(bi_planar_image, planar_image, crop)
}

/// Interleave only the chroma planes of a planar 4:2:0 source into an NV12
/// frame, leaving its luma plane untouched.
///
/// Used when the luma plane already lives in the destination, e.g. when it
/// was produced by a separate pass over the same frame.
pub fn yuv420_chroma_to_nv12(
    bi_planar_image: &mut SemiPlanarFrameMut<u8>,
    planar_image: &PlanarImage<u8>,
    crop: CropWindow,
) -> Result<(), YuvError> {
    yuv420_to_nv12_impl::<true>(bi_planar_image, planar_image, crop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_planar(
        height: usize,
        y_stride: usize,
        uv_stride: usize,
    ) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let mut rng = rand::rng();
        let y: Vec<u8> = (0..y_stride * height).map(|_| rng.random::<u8>()).collect();
        let u: Vec<u8> = (0..uv_stride * height.div_ceil(2))
            .map(|_| rng.random::<u8>())
            .collect();
        let v: Vec<u8> = (0..uv_stride * height.div_ceil(2))
            .map(|_| rng.random::<u8>())
            .collect();
        (y, u, v)
    }

    #[test]
    fn test_yuv420_to_nv12_no_crop() {
        let width = 70usize;
        let height = 6usize;
        let y_stride = 80usize;
        let uv_stride = 40usize;
        let (y, u, v) = random_planar(height, y_stride, uv_stride);
        let planar = PlanarImage {
            y_plane: &y,
            y_stride: y_stride as u32,
            u_plane: &u,
            v_plane: &v,
            uv_stride: uv_stride as u32,
            width: width as u32,
            height: height as u32,
        };
        let mut dst = SemiPlanarFrameMut::<u8>::alloc(width as u32, height as u32);
        yuv420_to_nv12(&mut dst, &planar, CropWindow::none()).unwrap();

        for row in 0..height {
            assert_eq!(
                &dst.y_plane()[row * width..][..width],
                &y[row * y_stride..][..width]
            );
        }
        for cy in 0..height / 2 {
            for x in 0..width / 2 {
                assert_eq!(dst.uv_plane()[cy * width + 2 * x], u[cy * uv_stride + x]);
                assert_eq!(dst.uv_plane()[cy * width + 2 * x + 1], v[cy * uv_stride + x]);
            }
        }
    }

    #[test]
    fn test_yuv420_to_nv12_with_crop() {
        let src_width = 64usize;
        let src_height = 8usize;
        let y_stride = 64usize;
        let uv_stride = 32usize;
        let (y, u, v) = random_planar(src_height, y_stride, uv_stride);
        let planar = PlanarImage {
            y_plane: &y,
            y_stride: y_stride as u32,
            u_plane: &u,
            v_plane: &v,
            uv_stride: uv_stride as u32,
            width: src_width as u32,
            height: src_height as u32,
        };
        let crop = CropWindow::new(8, 2, 4, 2);
        let out_width = src_width - 12;
        let out_height = src_height - 4;
        let mut dst = SemiPlanarFrameMut::<u8>::alloc(out_width as u32, out_height as u32);
        yuv420_to_nv12(&mut dst, &planar, crop).unwrap();

        for row in 0..out_height {
            assert_eq!(
                &dst.y_plane()[row * out_width..][..out_width],
                &y[(row + 2) * y_stride + 8..][..out_width]
            );
        }
        for cy in 0..out_height / 2 {
            for x in 0..out_width / 2 {
                assert_eq!(
                    dst.uv_plane()[cy * out_width + 2 * x],
                    u[(cy + 1) * uv_stride + 4 + x]
                );
                assert_eq!(
                    dst.uv_plane()[cy * out_width + 2 * x + 1],
                    v[(cy + 1) * uv_stride + 4 + x]
                );
            }
        }
    }

    #[test]
    fn test_yuv420_chroma_only_leaves_luma() {
        let width = 40usize;
        let height = 4usize;
        let (y, u, v) = random_planar(height, width, width / 2);
        let planar = PlanarImage {
            y_plane: &y,
            y_stride: width as u32,
            u_plane: &u,
            v_plane: &v,
            uv_stride: (width / 2) as u32,
            width: width as u32,
            height: height as u32,
        };
        let mut dst = SemiPlanarFrameMut::<u8>::alloc(width as u32, height as u32);
        // Sentinel luma to prove the chroma-only path never touches it.
        dst.store.as_mut()[..width * height].fill(0xAB);
        yuv420_chroma_to_nv12(&mut dst, &planar, CropWindow::none()).unwrap();

        assert!(dst.y_plane().iter().all(|&b| b == 0xAB));
        for cy in 0..height / 2 {
            for x in 0..width / 2 {
                assert_eq!(dst.uv_plane()[cy * width + 2 * x], u[cy * (width / 2) + x]);
                assert_eq!(
                    dst.uv_plane()[cy * width + 2 * x + 1],
                    v[cy * (width / 2) + x]
                );
            }
        }
    }
}
