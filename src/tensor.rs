//! The owning rank-4 tensor type

use std::fmt;
use std::marker::PhantomPinned;
use std::pin::Pin;

use log::debug;
use ndarray::{Array4, ArrayView4};
use pin_project_lite::pin_project;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::shape::{Extents, RANK};

pin_project! {
    /// Dense rank-4 tensor with a row-major buffer it owns exclusively
    ///
    /// A `Tensor4D` is neither `Clone` nor movable: constructors hand it out as
    /// `Pin<Box<Tensor4D<T>>>` and the type is `!Unpin`, so the value stays in
    /// the allocation it was built in until it is dropped. The only way to get
    /// a second tensor with the same contents is to construct one from a
    /// source slice.
    ///
    /// ```compile_fail
    /// use std::pin::Pin;
    /// use tensor4d::Tensor4D;
    ///
    /// let t = Tensor4D::from_slice([1, 1, 1, 1], &[1i32]).unwrap();
    /// let moved: Tensor4D<i32> = *Pin::into_inner(t);
    /// ```
    ///
    /// ```compile_fail
    /// use tensor4d::Tensor4D;
    ///
    /// let mut a = Tensor4D::from_slice([1, 1, 1, 1], &[1i32]).unwrap();
    /// let mut b = Tensor4D::from_slice([1, 1, 1, 1], &[2i32]).unwrap();
    /// std::mem::swap(&mut *a, &mut *b);
    /// ```
    ///
    /// ```compile_fail
    /// use tensor4d::Tensor4D;
    ///
    /// let t = Tensor4D::from_slice([1, 1, 1, 1], &[1i32]).unwrap();
    /// let copy: Tensor4D<i32> = Tensor4D::clone(&t);
    /// ```
    pub struct Tensor4D<T>
    where
        T: Element,
    {
        extents: Extents,
        data: Box<[T]>,
        #[pin]
        _pin: PhantomPinned,
    }
}

impl<T: Element> Tensor4D<T> {
    /// Create a tensor by copying `data` into a freshly allocated buffer.
    ///
    /// Extents are validated first (`InvalidShape` if any is 0), then the
    /// source (`NullSource` if `None`), then its length, which must equal
    /// the product of the extents.
    pub fn new(extents: [usize; RANK], data: Option<&[T]>) -> Result<Pin<Box<Self>>> {
        let extents = Extents::new(extents)?;
        let source = data.ok_or(Error::NullSource)?;
        Self::copy_from(extents, source)
    }

    /// Create a tensor from a slice that is known to be present.
    pub fn from_slice(extents: [usize; RANK], data: &[T]) -> Result<Pin<Box<Self>>> {
        Self::new(extents, Some(data))
    }

    /// Copy-construct from any ndarray view, whatever its memory layout.
    pub fn from_array(array: ArrayView4<'_, T>) -> Result<Pin<Box<Self>>> {
        let (d0, d1, d2, d3) = array.dim();
        let extents = Extents::new([d0, d1, d2, d3])?;
        match array.as_slice() {
            Some(contiguous) => Self::copy_from(extents, contiguous),
            None => {
                let gathered: Vec<T> = array.iter().copied().collect();
                Self::copy_from(extents, &gathered)
            }
        }
    }

    fn copy_from(extents: Extents, source: &[T]) -> Result<Pin<Box<Self>>> {
        let expected = extents.numel();
        if source.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: source.len(),
            });
        }

        let data: Box<[T]> = source.into();
        debug!(
            "allocated {} tensor {} ({} bytes)",
            T::DTYPE,
            extents,
            expected * T::DTYPE.size_in_bytes()
        );
        Ok(Box::pin(Self {
            extents,
            data,
            _pin: PhantomPinned,
        }))
    }

    #[inline]
    pub fn extents(&self) -> &Extents {
        &self.extents
    }

    #[inline]
    pub fn shape(&self) -> &[usize; RANK] {
        self.extents.dims()
    }

    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// The row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at a coordinate, or None if out of bounds.
    pub fn get(&self, coords: [usize; RANK]) -> Option<T> {
        self.extents.ravel(coords).map(|flat| self.data[flat])
    }

    /// Zero-copy ndarray view over the buffer.
    pub fn view(&self) -> ArrayView4<'_, T> {
        // The buffer length is product(extents) for every constructed tensor.
        ArrayView4::from_shape(*self.extents.dims(), &self.data[..])
            .expect("buffer length matches extents")
    }

    /// Copy the contents into an owned ndarray.
    pub fn to_array(&self) -> Array4<T> {
        self.view().to_owned()
    }

    pub(crate) fn data_mut(self: Pin<&mut Self>) -> &mut [T] {
        self.project().data
    }
}

impl<T: Element> fmt::Debug for Tensor4D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor4D")
            .field("dtype", &T::DTYPE)
            .field("extents", &self.extents)
            .finish_non_exhaustive()
    }
}

impl<T: Element + Serialize> Serialize for Tensor4D<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Tensor4D", 3)?;
        state.serialize_field("dtype", &T::DTYPE.to_string())?;
        state.serialize_field("extents", &self.extents)?;
        state.serialize_field("data", &self.data[..])?;
        state.end()
    }
}

/// Deserialized form of a [`Tensor4D`]
///
/// Deserialization validates the extents only; [`into_tensor`](Self::into_tensor)
/// runs the full constructor checks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TensorRecord<T> {
    pub extents: Extents,
    pub data: Vec<T>,
}

impl<T: Element> TensorRecord<T> {
    pub fn into_tensor(self) -> Result<Pin<Box<Tensor4D<T>>>> {
        Tensor4D::copy_from(self.extents, &self.data)
    }
}
