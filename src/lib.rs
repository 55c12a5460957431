//! Fast pixel-format repacking for video encoder input.
//!
//! Converts common capture layouts into the semi-planar frames hardware
//! encoders consume: packed 4:2:2 and planar 4:2:0 into NV12, packed signed
//! 16-bit YC48 into P010, plus cropped plane relocation for 4:4:4 and a
//! standalone bulk row mover with cached or non-temporal stores. Progressive
//! and interlaced chroma siting are both supported.
//!
//! All entry points take pitched images with strides in elements, dispatch to
//! AVX2 kernels at runtime when the `avx` feature is enabled and the CPU
//! supports them, and fall back to scalar code otherwise.
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
mod avx2;
mod coefficients;
mod images;
mod numerics;
mod planar_to_nv;
mod row_copy;
mod yc48_to_p010;
mod yuv444_copy;
mod yuv_error;
mod yuv_support;
mod yuy2_to_nv;

pub use yuv_support::CropWindow;
pub use yuv_support::StorePolicy;

pub use yuv_error::MismatchedSize;
pub use yuv_error::YuvError;

pub use images::BufferStoreMut;
pub use images::PackedImage;
pub use images::PlanarImage;
pub use images::SemiPlanarFrameMut;
pub use images::TriPlanarImage;
pub use images::TriPlanarImageMut;

pub use row_copy::copy_row;

pub use planar_to_nv::yuv420_chroma_to_nv12;
pub use planar_to_nv::yuv420_to_nv12;
pub use yc48_to_p010::yc48_to_p010;
pub use yc48_to_p010::yc48_to_p010_interlaced;
pub use yuv444_copy::yuv444_copy;
pub use yuy2_to_nv::yuyv422_to_nv12;
pub use yuy2_to_nv::yuyv422_to_nv12_interlaced;
