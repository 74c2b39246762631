use crate::prelude::*;
use rand::prelude::*;
use std::cell::UnsafeCell;
use std::rc::Rc;

struct FakeDistribution<T> {
    values: Vec<T>,
}

impl<T> FakeDistribution<T> {
    pub fn new(values: Vec<T>) -> Self {
        let mut values = values;
        values.reverse();
        Self { values }
    }

    pub fn next(&mut self) -> T {
        self.values.pop().unwrap()
    }

    pub fn try_next(&mut self) -> Option<T> {
        self.values.pop()
    }
}

/// A fake random source driven by fixed value queues which makes every
/// algorithm replayable in tests.
///
/// Integral draws, byte fills, deals and permutations pop the integer queue in
/// order; real draws pop the real queue; `shuffle` keeps the slice untouched.
pub struct FakeRandom {
    ints: FakeDistribution<i64>,
    reals: FakeDistribution<f64>,
}

impl FakeRandom {
    /// Creates a new instance of `FakeRandom`.
    pub fn new(ints: Vec<i64>, reals: Vec<f64>) -> Self {
        Self { ints: FakeDistribution::new(ints), reals: FakeDistribution::new(reals) }
    }

    #[allow(invalid_reference_casting)]
    unsafe fn const_cast(&self) -> &mut Self {
        let const_ptr = self as *const Self;
        let mut_ptr = const_ptr as *mut Self;
        &mut *mut_ptr
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        unsafe { self.const_cast().ints.next() as i32 }
    }

    fn uniform_long(&self, min: i64, max: i64) -> i64 {
        assert!(min <= max);
        unsafe { self.const_cast().ints.next() }
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        assert!(min < max);
        unsafe { self.const_cast().reals.next() }
    }

    fn uniform_ratio(&self) -> f32 {
        unsafe { self.const_cast().reals.next() as f32 }
    }

    fn fill_bytes(&self, buffer: &mut [u8]) -> GenericResult<()> {
        let len = buffer.len();
        for byte in buffer.iter_mut() {
            *byte = unsafe { self.const_cast().ints.try_next() }
                .ok_or_else(|| GenericError::from(format!("cannot read {} random bytes", len)))?
                as u8;
        }

        Ok(())
    }

    fn permutation(&self, n: usize) -> Vec<usize> {
        (0..n).map(|_| unsafe { self.const_cast().ints.next() as usize }).collect()
    }

    fn deal(&self, _n: usize, k: usize) -> Vec<usize> {
        (0..k).map(|_| unsafe { self.const_cast().ints.next() as usize }).collect()
    }

    fn shuffle(&self, _values: &mut [usize]) {}

    fn get_rng(&self) -> RandomGen {
        RandomGen::with_rng(Rc::new(UnsafeCell::new(SmallRng::seed_from_u64(0))))
    }
}
