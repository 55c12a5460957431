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
use crate::yuv_error::{check_packed_frame, check_plane, check_semi_planar_store};
use crate::YuvError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn as_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[derive(Debug, Clone)]
/// Packed single-plane frame: every channel of a pixel interleaved in one row
/// buffer (YUY2, YC48).
pub struct PackedImage<'a, T>
where
    T: Copy + Debug,
{
    pub data: &'a [T],
    /// Stride here always means Elements per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> PackedImage<'_, T>
where
    T: Copy + Debug,
{
    pub(crate) fn check_constraints(&self, channels: usize) -> Result<(), YuvError> {
        check_packed_frame(self.data, self.stride, self.width, self.height, channels)
    }
}

#[derive(Debug, Clone)]
/// Planar 4:2:0 source: a luma plane plus two half-resolution chroma planes
/// that share one stride.
pub struct PlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub u_plane: &'a [T],
    pub v_plane: &'a [T],
    /// Shared stride of the chroma planes, elements per row.
    pub uv_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> PlanarImage<'_, T>
where
    T: Copy + Debug,
{
    pub(crate) fn check_constraints(&self) -> Result<(), YuvError> {
        check_plane(self.y_plane, self.y_stride, self.width, self.height, true)?;
        let chroma_width = self.width.div_ceil(2);
        let chroma_height = self.height.div_ceil(2);
        check_plane(
            self.u_plane,
            self.uv_stride,
            chroma_width,
            chroma_height,
            false,
        )?;
        check_plane(
            self.v_plane,
            self.uv_stride,
            chroma_width,
            chroma_height,
            false,
        )?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Full-resolution tri-planar 4:4:4 source; all planes share one stride.
pub struct TriPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub planes: [&'a [T]; 3],
    /// Stride here always means Elements per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> TriPlanarImage<'_, T>
where
    T: Copy + Debug,
{
    pub(crate) fn check_constraints(&self) -> Result<(), YuvError> {
        for plane in self.planes.iter() {
            check_plane(plane, self.stride, self.width, self.height, true)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
/// Mutable tri-planar 4:4:4 destination.
pub struct TriPlanarImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub planes: [BufferStoreMut<'a, T>; 3],
    /// Stride here always means Elements per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> TriPlanarImageMut<'_, T>
where
    T: Copy + Debug,
{
    pub(crate) fn check_constraints(&self) -> Result<(), YuvError> {
        for plane in self.planes.iter() {
            check_plane(plane.borrow(), self.stride, self.width, self.height, true)?;
        }
        Ok(())
    }
}

impl<'a, T> TriPlanarImageMut<'a, T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates a mutable tri-planar target with stride equal to width.
    pub fn alloc(width: u32, height: u32) -> Self {
        let make = || BufferStoreMut::Owned(vec![T::default(); width as usize * height as usize]);
        TriPlanarImageMut {
            planes: [make(), make(), make()],
            stride: width,
            width,
            height,
        }
    }

    pub fn to_fixed(&'a self) -> TriPlanarImage<'a, T> {
        TriPlanarImage {
            planes: [
                self.planes[0].borrow(),
                self.planes[1].borrow(),
                self.planes[2].borrow(),
            ],
            stride: self.stride,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug)]
/// Semi-planar destination frame living in one allocation: the luma plane at
/// offset zero, the interleaved chroma plane at `stride * full_height`.
///
/// `width`/`height` are the logical (post-crop) output dimensions in luma
/// samples; `full_height` is the height the allocation was sized for and
/// locates the chroma plane.
pub struct SemiPlanarFrameMut<'a, T>
where
    T: Copy + Debug,
{
    pub store: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row, shared by both planes.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
    pub full_height: u32,
}

impl<T> SemiPlanarFrameMut<'_, T>
where
    T: Copy + Debug,
{
    pub(crate) fn check_constraints(&self) -> Result<(), YuvError> {
        check_semi_planar_store(
            self.store.borrow(),
            self.stride,
            self.width,
            self.height,
            self.full_height,
        )
    }

    /// Splits the backing store into the luma plane and the interleaved
    /// chroma plane.
    pub fn y_uv_planes_mut(&mut self) -> (&mut [T], &mut [T]) {
        let luma_span = self.stride as usize * self.full_height as usize;
        self.store.as_mut().split_at_mut(luma_span)
    }

    pub fn y_plane(&self) -> &[T] {
        &self.store.borrow()[..self.stride as usize * self.full_height as usize]
    }

    pub fn uv_plane(&self) -> &[T] {
        &self.store.borrow()[self.stride as usize * self.full_height as usize..]
    }
}

impl<T> SemiPlanarFrameMut<'_, T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates a mutable semi-planar target with stride equal to width and
    /// `full_height` equal to height.
    pub fn alloc(width: u32, height: u32) -> Self {
        let len = width as usize * (height as usize + (height as usize + 1) / 2);
        SemiPlanarFrameMut {
            store: BufferStoreMut::Owned(vec![T::default(); len]),
            stride: width,
            width,
            height,
            full_height: height,
        }
    }
}
