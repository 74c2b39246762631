#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::{GenericError, GenericResult};
use rand::prelude::*;
use rand::Error;
use std::cell::UnsafeCell;
use std::rc::Rc;

/// Provides the way to use randomized values in generic way.
///
/// Every stochastic algorithm in this crate draws exclusively through this seam,
/// which makes any of them replayable given a fixed sequence of source outputs.
/// Implementations are assumed to be used from a single thread at a time.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces long random value, uniformly distributed on the closed interval [min, max].
    fn uniform_long(&self, min: i64, max: i64) -> i64;

    /// Produces real random value, uniformly distributed on the interval [min, max).
    fn uniform_real(&self, min: f64, max: f64) -> f64;

    /// Produces a single precision random value from [0., 1.).
    fn uniform_ratio(&self) -> f32;

    /// Fills the whole buffer with random bytes.
    /// Fails when the source cannot serve the full request.
    fn fill_bytes(&self, buffer: &mut [u8]) -> GenericResult<()>;

    /// Returns a uniformly random permutation of [0, n).
    fn permutation(&self, n: usize) -> Vec<usize>;

    /// Returns k distinct values from [0, n), kept in the order they were drawn.
    /// Some callers treat the draw order as significant.
    fn deal(&self, n: usize, k: usize) -> Vec<usize>;

    /// Shuffles the given slice in place.
    fn shuffle(&self, values: &mut [usize]);

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation.
#[derive(Default)]
pub struct DefaultRandom {
    use_repeatable: bool,
}

impl DefaultRandom {
    /// Creates an instance backed by a fixed seed which makes whole runs
    /// reproducible within one thread.
    pub fn new_repeatable() -> Self {
        Self { use_repeatable: true }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max + 1)
    }

    fn uniform_long(&self, min: i64, max: i64) -> i64 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max + 1)
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    fn uniform_ratio(&self) -> f32 {
        self.get_rng().gen::<f32>()
    }

    fn fill_bytes(&self, buffer: &mut [u8]) -> GenericResult<()> {
        self.get_rng()
            .try_fill_bytes(buffer)
            .map_err(|err| GenericError::from(format!("cannot read {} random bytes: {err}", buffer.len())))
    }

    fn permutation(&self, n: usize) -> Vec<usize> {
        let mut values = (0..n).collect::<Vec<_>>();
        values.shuffle(&mut self.get_rng());

        values
    }

    fn deal(&self, n: usize, k: usize) -> Vec<usize> {
        assert!(k <= n);

        // a partial Fisher-Yates: only the first k positions are settled
        let mut rng = self.get_rng();
        let mut values = (0..n).collect::<Vec<_>>();
        for index in 0..k {
            let other = rng.gen_range(index..n);
            values.swap(index, other);
        }
        values.truncate(k);

        values
    }

    fn shuffle(&self, values: &mut [usize]) {
        values.shuffle(&mut self.get_rng());
    }

    fn get_rng(&self) -> RandomGen {
        let rng = if self.use_repeatable {
            REPEATABLE_RNG.with(|t| t.clone())
        } else {
            DEFAULT_RNG.with(|t| t.clone())
        };
        RandomGen { rng }
    }
}

thread_local! {
    static DEFAULT_RNG: Rc<UnsafeCell<SmallRng>> =
        Rc::new(UnsafeCell::new(SmallRng::from_rng(thread_rng()).expect("cannot get RNG")));
    static REPEATABLE_RNG: Rc<UnsafeCell<SmallRng>> = Rc::new(UnsafeCell::new(SmallRng::seed_from_u64(1234567890)));
}

/// Specifies underlying random generator type.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Rc<UnsafeCell<SmallRng>>,
}

impl RandomGen {
    /// Creates a new instance of `RandomGen` using given reference to small rng.
    pub fn with_rng(rng: Rc<UnsafeCell<SmallRng>>) -> Self {
        Self { rng }
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        let rng = unsafe { &mut *self.rng.get() };
        rng.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        let rng = unsafe { &mut *self.rng.get() };
        rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let rng = unsafe { &mut *self.rng.get() };
        rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        let rng = unsafe { &mut *self.rng.get() };
        rng.try_fill_bytes(dest)
    }
}
