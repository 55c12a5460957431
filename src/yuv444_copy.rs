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
use crate::{CropWindow, StorePolicy, TriPlanarImage, TriPlanarImageMut, YuvError};

/// Relocate a tri-planar 4:4:4 frame into another tri-planar layout.
///
/// Pure identity copy of all three full-resolution planes; sample values are
/// never touched. Rows stream through non-temporal stores since a relocated
/// frame is normally handed off rather than re-read.
///
/// # Arguments
///
/// * `planar_image` - Target tri-planar frame; `width`/`height` are the
///   post-crop output dimensions.
/// * `source_image` - Source tri-planar frame.
/// * `crop` - Crop window in samples.
pub fn yuv444_copy(
    planar_image: &mut TriPlanarImageMut<u8>,
    source_image: &TriPlanarImage<u8>,
    crop: CropWindow,
) -> Result<(), YuvError> {
    source_image.check_constraints()?;
    planar_image.check_constraints()?;
    crop.check_against(
        source_image.width,
        source_image.height,
        planar_image.width,
        planar_image.height,
    )?;

    let width = planar_image.width as usize;
    let height = planar_image.height as usize;
    let dst_stride = planar_image.stride as usize;
    let src_stride = source_image.stride as usize;
    let origin = crop.top as usize * src_stride + crop.left as usize;

    for (dst_plane, src_plane) in planar_image.planes.iter_mut().zip(source_image.planes) {
        copy_plane_rows(
            dst_plane.as_mut(),
            dst_stride,
            &src_plane[origin..],
            src_stride,
            width,
            height,
            StorePolicy::NonTemporal,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_yuv444_copy_identity() {
        let width = 77u32;
        let height = 5u32;
        let mut rng = rand::rng();
        let planes: Vec<Vec<u8>> = (0..3)
            .map(|_| {
                (0..width as usize * height as usize)
                    .map(|_| rng.random::<u8>())
                    .collect()
            })
            .collect();
        let src = TriPlanarImage {
            planes: [&planes[0][..], &planes[1][..], &planes[2][..]],
            stride: width,
            width,
            height,
        };
        let mut dst = TriPlanarImageMut::<u8>::alloc(width, height);
        yuv444_copy(&mut dst, &src, CropWindow::none()).unwrap();
        for (dst_plane, src_plane) in dst.planes.iter().zip(src.planes) {
            assert_eq!(dst_plane.borrow(), src_plane);
        }
    }

    #[test]
    fn test_yuv444_copy_with_crop() {
        let src_width = 40usize;
        let src_height = 10usize;
        let stride = 48usize;
        let mut rng = rand::rng();
        let planes: Vec<Vec<u8>> = (0..3)
            .map(|_| (0..stride * src_height).map(|_| rng.random::<u8>()).collect())
            .collect();
        let src = TriPlanarImage {
            planes: [&planes[0][..], &planes[1][..], &planes[2][..]],
            stride: stride as u32,
            width: src_width as u32,
            height: src_height as u32,
        };
        let crop = CropWindow::new(6, 3, 2, 1);
        let out_width = src_width - 8;
        let out_height = src_height - 4;
        let mut dst = TriPlanarImageMut::<u8>::alloc(out_width as u32, out_height as u32);
        yuv444_copy(&mut dst, &src, crop).unwrap();

        for (dst_plane, src_plane) in dst.planes.iter().zip(src.planes) {
            for row in 0..out_height {
                assert_eq!(
                    &dst_plane.borrow()[row * out_width..][..out_width],
                    &src_plane[(row + 3) * stride + 6..][..out_width],
                    "row {}",
                    row
                );
            }
        }
    }

    #[test]
    fn test_yuv444_copy_rejects_mismatched_crop() {
        let src = TriPlanarImageMut::<u8>::alloc(16, 4);
        let fixed = src.to_fixed();
        let mut dst = TriPlanarImageMut::<u8>::alloc(16, 4);
        assert!(yuv444_copy(&mut dst, &fixed, CropWindow::new(2, 0, 0, 0)).is_err());
    }
}
