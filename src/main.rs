use std::error::Error;

use log::info;
use tensor4d::{Element, Tensor4D};

fn check<T: Element>(
    scenario: &str,
    got: &[T],
    expected: impl Fn(usize) -> T,
) -> Result<(), Box<dyn Error>> {
    for (i, value) in got.iter().enumerate() {
        let want = expected(i);
        if *value != want {
            return Err(format!("{scenario}: element {i} is {value:?}, expected {want:?}").into());
        }
    }
    info!("{scenario}: ok ({} elements)", got.len());
    Ok(())
}

fn run_scenarios() -> Result<(), Box<dyn Error>> {
    {
        let shape = [1, 2, 3, 4];
        let data: Vec<i32> = (1..=24).collect();
        let mut t0 = Tensor4D::from_slice(shape, &data)?;
        let t1 = Tensor4D::from_slice(shape, &data)?;
        t0.as_mut().broadcast_add_assign(&t1)?;
        check("tensor doubled by adding itself", t0.as_slice(), |i| data[i] * 2)?;
    }

    {
        #[rustfmt::skip]
        let d0: [f32; 24] = [
            1., 1., 1., 1.,
            2., 2., 2., 2.,
            3., 3., 3., 3.,

            4., 4., 4., 4.,
            5., 5., 5., 5.,
            6., 6., 6., 6.,
        ];
        let d1: [f32; 6] = [6., 5., 4., 3., 2., 1.];
        let mut t0 = Tensor4D::from_slice([1, 2, 3, 4], &d0)?;
        let t1 = Tensor4D::from_slice([1, 2, 3, 1], &d1)?;
        t0.as_mut().broadcast_add_assign(&t1)?;
        check("every element becomes 7", t0.as_slice(), |_| 7.0)?;
    }

    {
        let d0: Vec<f64> = (1..=24i32).map(f64::from).collect();
        let mut t0 = Tensor4D::from_slice([1, 2, 3, 4], &d0)?;
        let t1 = Tensor4D::from_slice([1, 1, 1, 1], &[1.0])?;
        t0.as_mut().broadcast_add_assign(&t1)?;
        check("every element incremented by 1", t0.as_slice(), |i| d0[i] + 1.0)?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run_scenarios()
}
