use std::pin::Pin;

use log::trace;

use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Tensor4D;

impl<T: Element> Tensor4D<T> {
    /// `self += other` with one-directional broadcasting.
    ///
    /// Each axis of `other` must be 1 or equal to the same axis of `self`;
    /// size-1 axes of `other` are reused along the whole axis of `self`.
    /// The shape of `self` never changes. On `IncompatibleShape` no element
    /// of `self` has been touched.
    ///
    /// Returns `self` again so additions can be chained:
    ///
    /// ```
    /// use tensor4d::Tensor4D;
    ///
    /// let mut acc = Tensor4D::from_slice([1, 1, 2, 2], &[1, 2, 3, 4])?;
    /// let row = Tensor4D::from_slice([1, 1, 1, 2], &[10, 20])?;
    /// let one = Tensor4D::from_slice([1, 1, 1, 1], &[1])?;
    ///
    /// acc.as_mut().broadcast_add_assign(&row)?.broadcast_add_assign(&one)?;
    /// assert_eq!(acc.as_slice(), &[12, 23, 14, 25]);
    /// # Ok::<(), tensor4d::Error>(())
    /// ```
    pub fn broadcast_add_assign(mut self: Pin<&mut Self>, other: &Self) -> Result<Pin<&mut Self>> {
        let target = *self.extents();
        let source = *other.extents();
        source.check_broadcast_into(&target)?;
        trace!("broadcast add {} into {} ({})", source, target, T::DTYPE);

        let rhs = other.as_slice();
        let lhs = self.as_mut().data_mut();
        for (flat, value) in lhs.iter_mut().enumerate() {
            *value += rhs[source.broadcast_index(&target, flat)];
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::tensor::Tensor4D;

    #[test]
    fn test_tensor_addition() {
        let data: Vec<i32> = (1..=24).collect();
        let mut t0 = Tensor4D::from_slice([1, 2, 3, 4], &data).unwrap();
        let t1 = Tensor4D::from_slice([1, 2, 3, 4], &data).unwrap();
        t0.as_mut().broadcast_add_assign(&t1).unwrap();
        assert_eq!(t0.shape(), &[1, 2, 3, 4]);
        for (got, x) in t0.as_slice().iter().zip(&data) {
            assert_eq!(*got, x * 2);
        }
    }

    #[test]
    fn test_broadcast_middle_axis() {
        let mut t0 = Tensor4D::from_slice([1, 2, 3, 4], &[0i64; 24]).unwrap();
        let t1 = Tensor4D::from_slice([1, 2, 1, 4], &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        t0.as_mut().broadcast_add_assign(&t1).unwrap();
        let expected: Vec<i64> = [[1, 2, 3, 4]; 3]
            .into_iter()
            .chain([[5, 6, 7, 8]; 3])
            .flatten()
            .collect();
        assert_eq!(t0.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_broadcast_outer_axes() {
        let mut t0 = Tensor4D::from_slice([2, 3, 1, 1], &[0u32; 6]).unwrap();
        let t1 = Tensor4D::from_slice([1, 3, 1, 1], &[1, 2, 3]).unwrap();
        t0.as_mut().broadcast_add_assign(&t1).unwrap();
        assert_eq!(t0.as_slice(), &[1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_incompatible_leaves_self_untouched() {
        let data: Vec<f32> = (0..24).map(|x| x as f32).collect();
        let mut t0 = Tensor4D::from_slice([1, 2, 3, 4], &data).unwrap();
        // Axis 3 is fine, axis 2 is not.
        let t1 = Tensor4D::from_slice([1, 2, 2, 1], &[1.0; 4]).unwrap();
        let err = t0.as_mut().broadcast_add_assign(&t1).unwrap_err();
        assert!(matches!(err, Error::IncompatibleShape { axis: 2, .. }));
        assert_eq!(t0.as_slice(), data.as_slice());
    }

    #[test]
    fn test_larger_other_is_rejected() {
        let mut t0 = Tensor4D::from_slice([1, 1, 1, 1], &[1i32]).unwrap();
        let t1 = Tensor4D::from_slice([1, 1, 1, 2], &[1, 2]).unwrap();
        assert!(matches!(
            t0.as_mut().broadcast_add_assign(&t1),
            Err(Error::IncompatibleShape {
                lhs: [1, 1, 1, 1],
                rhs: [1, 1, 1, 2],
                axis: 3
            })
        ));
        assert_eq!(t0.as_slice(), &[1]);
    }

    #[test]
    fn test_chained_additions() {
        let mut t0 = Tensor4D::from_slice([1, 1, 1, 3], &[1.0f64, 2.0, 3.0]).unwrap();
        let t1 = Tensor4D::from_slice([1, 1, 1, 1], &[0.5]).unwrap();
        t0.as_mut()
            .broadcast_add_assign(&t1)
            .unwrap()
            .broadcast_add_assign(&t1)
            .unwrap();
        assert_eq!(t0.as_slice(), &[2.0, 3.0, 4.0]);
    }
}
