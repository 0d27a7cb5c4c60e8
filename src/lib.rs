//! # tensor4d
//!
//! A dense, rank-4 tensor that owns its row-major buffer, with in-place
//! one-directional broadcasting addition.
//!
//! ```
//! use tensor4d::Tensor4D;
//!
//! let data: Vec<f32> = (1..=24).map(|x| x as f32).collect();
//! let mut t = Tensor4D::from_slice([1, 2, 3, 4], &data)?;
//! let bias = Tensor4D::from_slice([1, 1, 1, 1], &[1.0])?;
//!
//! t.as_mut().broadcast_add_assign(&bias)?;
//! assert_eq!(t.get([0, 1, 2, 3]), Some(25.0));
//! # Ok::<(), tensor4d::Error>(())
//! ```
//!
//! Tensors are handed out pinned (`Pin<Box<Tensor4D<T>>>`) and are not
//! `Clone`: each instance is the sole owner of its buffer for its whole
//! lifetime.

pub mod add;
pub mod dtype;
pub mod error;
pub mod shape;
pub mod tensor;

pub use dtype::{DType, Element};
pub use error::{Error, Result};
pub use shape::{Extents, RANK};
pub use tensor::{Tensor4D, TensorRecord};
