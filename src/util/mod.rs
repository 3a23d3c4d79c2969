//! Various utility functions.

/// `try_traits`-style fallible variant of [`Pow`](num::pow::Pow).
pub trait TryPow<RHS> {
  type Output;
  type Error;

  fn try_pow(self, rhs: RHS) -> Result<Self::Output, Self::Error>;
}

/// Combines two arrays of the same length element-wise.
pub fn zip_with<const C: usize, T, S, U, F>(left: [T; C], right: [S; C], mut f: F) -> [U; C]
where F: FnMut(T, S) -> U {
  let mut right = right.into_iter();
  left.map(|x| {
    // Both arrays have length C, so this never runs dry.
    let y = right.next().unwrap_or_else(|| unreachable!("Invalid array length"));
    f(x, y)
  })
}
