//! # Native multiply kernel
//!
//! Narrow entry point to a high-performance dense multiply backend. Availability is probed
//! once, at first use, and cached for the lifetime of the process; when the probe resolves to
//! "unavailable" the dense matrix falls back to its naive loop permanently.
//!
//! The handle is an ordinary value so that callers (tests in particular) can force either
//! dispatch path deterministically instead of depending on the process-wide probe.
use std::sync::OnceLock;

/// Matrix dimension above which the dense multiply prefers the native kernel.
///
/// Both the row and the column count of the left operand must exceed this for the kernel to be
/// worth the buffer copies.
pub const KERNEL_THRESHOLD: usize = 100;

static NATIVE: OnceLock<Option<Kernel>> = OnceLock::new();

/// Handle to the native dense-multiply backend.
///
/// Instances exist only when the backend is compiled in; obtain one through [`native`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel(());

impl Kernel {
    /// Compute `c = a × b` over column-major buffers.
    ///
    /// # Arguments
    ///
    /// * `m`, `k`, `n`: `a` is `m × k`, `b` is `k × n` and `c` is `m × n`.
    /// * `a`, `b`: input buffers in column-major layout.
    /// * `c`: output buffer, overwritten entirely.
    pub fn multiply(&self, m: usize, k: usize, n: usize, a: &[f64], b: &[f64], c: &mut [f64]) {
        debug_assert_eq!(a.len(), m * k);
        debug_assert_eq!(b.len(), k * n);
        debug_assert_eq!(c.len(), m * n);

        #[cfg(feature = "native-kernel")]
        // Strides describe the column-major layout; lengths were checked above.
        unsafe {
            matrixmultiply::dgemm(
                m, k, n,
                1_f64,
                a.as_ptr(), 1, m as isize,
                b.as_ptr(), 1, k as isize,
                0_f64,
                c.as_mut_ptr(), 1, m as isize,
            );
        }
        #[cfg(not(feature = "native-kernel"))]
        {
            let _ = (m, k, n, a, b, c);
            unreachable!("kernel handles can't exist without a compiled-in backend");
        }
    }
}

/// The process-wide native kernel, if one is available.
///
/// The probe runs once and never fails: any configuration without a compiled-in backend
/// resolves to `None`, and the result is immutable for the remainder of the process.
pub fn native() -> Option<Kernel> {
    *NATIVE.get_or_init(|| {
        if cfg!(feature = "native-kernel") {
            Some(Kernel(()))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn probe_is_stable() {
        assert_eq!(native(), native());
        assert_eq!(native().is_some(), cfg!(feature = "native-kernel"));
    }

    #[cfg(feature = "native-kernel")]
    #[test]
    fn small_product() {
        // 2x2 identity times an arbitrary 2x2, column-major.
        let kernel = native().unwrap();
        let a = vec![1_f64, 0_f64, 0_f64, 1_f64];
        let b = vec![1_f64, 2_f64, 3_f64, 4_f64];
        let mut c = vec![0_f64; 4];

        kernel.multiply(2, 2, 2, &a, &b, &mut c);

        assert_eq!(c, b);
    }

    #[cfg(feature = "native-kernel")]
    #[test]
    fn rectangular_product() {
        // a: 2x3 column-major [[1, 2, 3], [4, 5, 6]], b: 3x1 [1, 1, 1]^T.
        let kernel = native().unwrap();
        let a = vec![1_f64, 4_f64, 2_f64, 5_f64, 3_f64, 6_f64];
        let b = vec![1_f64, 1_f64, 1_f64];
        let mut c = vec![0_f64; 2];

        kernel.multiply(2, 3, 1, &a, &b, &mut c);

        assert_eq!(c, vec![6_f64, 15_f64]);
    }
}
