/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
#![deny(unreachable_code, unreachable_pub)]
// Every kernel here is an `avx2` target-feature function; the compiler
// re-establishes clean SSE state (vzeroupper) at each boundary, on every
// return path.
mod avx2_utils;
mod planar_to_nv;
mod row_copy;
mod yc48_to_p010;
mod yuy2_to_nv;

pub(crate) use planar_to_nv::avx2_interleave_uv_row;
pub(crate) use row_copy::avx2_copy_row;
pub(crate) use yc48_to_p010::{avx2_yc48_to_p010_rows, avx2_yc48_to_p010_rows_interlaced};
pub(crate) use yuy2_to_nv::{avx2_yuy2_to_nv12_rows, avx2_yuy2_to_nv12_rows_interlaced};
