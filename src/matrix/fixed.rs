//! Plumbing shared by `Matrix2`, `Matrix3` and `Matrix4`.
//!
//! Each fixed-order type writes its own determinant, inverse and products.
//! Determinant and inverse are accumulated in `f64` like the general engine. This macro generates the bounds-checked element access,
//! elementary operations, structural queries, element-wise operators and
//! conversions to and from the general matrix, all unrolled over the named
//! fields.

macro_rules! impl_fixed_matrix {
    (
        $name:ident, $vector:ident, $order:expr,
        [$(($r:literal, $c:literal) => $f:ident),+]
    ) => {
        impl<T: Scalar> Matrix<T> for $name<T> {
            fn rows(&self) -> usize {
                $order
            }

            fn cols(&self) -> usize {
                $order
            }

            fn at(&self, row: usize, col: usize) -> T {
                match self.slot(row, col) {
                    Some(value) => *value,
                    None => panic!(
                        "{}",
                        LinalgError::index_out_of_bounds(row, col, ($order, $order))
                    ),
                }
            }
        }

        impl<T: Scalar> $name<T> {
            pub const ORDER: usize = $order;

            /// Elements in row-major order.
            #[allow(clippy::too_many_arguments)]
            pub fn new($($f: T),+) -> Self {
                $name { $($f),+ }
            }

            pub fn zero() -> Self {
                $name { $($f: T::zero()),+ }
            }

            pub fn identity() -> Self {
                $name { $($f: if $r == $c { T::one() } else { T::zero() }),+ }
            }

            fn slot(&self, row: usize, col: usize) -> Option<&T> {
                match (row, col) {
                    $(($r, $c) => Some(&self.$f),)+
                    _ => None,
                }
            }

            fn slot_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
                match (row, col) {
                    $(($r, $c) => Some(&mut self.$f),)+
                    _ => None,
                }
            }

            pub fn to_array(&self) -> [[T; $order]; $order] {
                let mut m = [[T::zero(); $order]; $order];
                $(m[$r][$c] = self.$f;)+
                m
            }

            pub fn from_array(m: [[T; $order]; $order]) -> Self {
                $name { $($f: m[$r][$c]),+ }
            }

            /// Elements widened to `f64` for the closed-form determinant and inverse.
            pub(crate) fn widened(&self) -> [[f64; $order]; $order] {
                self.to_array().map(|row| row.map(|x| x.widen()))
            }

            pub(crate) fn narrowed(m: [[f64; $order]; $order]) -> Self {
                Self::from_array(m.map(|row| row.map(T::narrow)))
            }

            pub fn get(&self, row: usize, col: usize) -> LinalgResult<T> {
                self.slot(row, col)
                    .copied()
                    .ok_or(LinalgError::out_of_range(row, col, ($order, $order)))
            }

            pub fn set(&mut self, row: usize, col: usize, value: T) -> LinalgResult<()> {
                match self.slot_mut(row, col) {
                    Some(cell) => {
                        *cell = value;
                        Ok(())
                    }
                    None => Err(LinalgError::out_of_range(row, col, ($order, $order))),
                }
            }

            pub fn element(&self, row: usize, col: usize) -> LinalgResult<&T> {
                self.slot(row, col)
                    .ok_or(LinalgError::index_out_of_bounds(row, col, ($order, $order)))
            }

            pub fn element_mut(&mut self, row: usize, col: usize) -> LinalgResult<&mut T> {
                self.slot_mut(row, col)
                    .ok_or(LinalgError::index_out_of_bounds(row, col, ($order, $order)))
            }

            fn check_line(row: usize, col: usize) -> LinalgResult<()> {
                if row >= $order || col >= $order {
                    return Err(LinalgError::out_of_range(row, col, ($order, $order)));
                }
                Ok(())
            }

            pub fn swap_rows(&mut self, a: usize, b: usize) -> LinalgResult<()> {
                Self::check_line(a, 0)?;
                Self::check_line(b, 0)?;
                if a != b {
                    let mut m = self.to_array();
                    m.swap(a, b);
                    *self = Self::from_array(m);
                }
                Ok(())
            }

            pub fn swap_columns(&mut self, a: usize, b: usize) -> LinalgResult<()> {
                Self::check_line(0, a)?;
                Self::check_line(0, b)?;
                if a != b {
                    let mut m = self.to_array();
                    m.iter_mut().for_each(|row| row.swap(a, b));
                    *self = Self::from_array(m);
                }
                Ok(())
            }

            pub fn scale_row(&mut self, row: usize, factor: T) -> LinalgResult<()> {
                Self::check_line(row, 0)?;
                let mut m = self.to_array();
                m[row].iter_mut().for_each(|x| *x *= factor);
                *self = Self::from_array(m);
                Ok(())
            }

            pub fn scale_column(&mut self, col: usize, factor: T) -> LinalgResult<()> {
                Self::check_line(0, col)?;
                let mut m = self.to_array();
                m.iter_mut().for_each(|row| row[col] *= factor);
                *self = Self::from_array(m);
                Ok(())
            }

            /// A zero denominator yields infinities or NaN.
            pub fn divide_row(&mut self, row: usize, denom: T) -> LinalgResult<()> {
                Self::check_line(row, 0)?;
                let mut m = self.to_array();
                m[row].iter_mut().for_each(|x| *x /= denom);
                *self = Self::from_array(m);
                Ok(())
            }

            pub fn divide_column(&mut self, col: usize, denom: T) -> LinalgResult<()> {
                Self::check_line(0, col)?;
                let mut m = self.to_array();
                m.iter_mut().for_each(|row| row[col] /= denom);
                *self = Self::from_array(m);
                Ok(())
            }

            pub fn add_row(&mut self, src: usize, dst: usize) -> LinalgResult<()> {
                self.add_scaled_row(src, dst, T::one())
            }

            pub fn subtract_row(&mut self, src: usize, dst: usize) -> LinalgResult<()> {
                self.add_scaled_row(src, dst, -T::one())
            }

            pub fn add_scaled_row(&mut self, src: usize, dst: usize, scalar: T) -> LinalgResult<()> {
                Self::check_line(src, 0)?;
                Self::check_line(dst, 0)?;
                let mut m = self.to_array();
                let source = m[src];
                m[dst]
                    .iter_mut()
                    .zip(source.iter())
                    .for_each(|(d, s)| *d += *s * scalar);
                *self = Self::from_array(m);
                Ok(())
            }

            pub fn add_column(&mut self, src: usize, dst: usize) -> LinalgResult<()> {
                self.add_scaled_column(src, dst, T::one())
            }

            pub fn subtract_column(&mut self, src: usize, dst: usize) -> LinalgResult<()> {
                self.add_scaled_column(src, dst, -T::one())
            }

            pub fn add_scaled_column(&mut self, src: usize, dst: usize, scalar: T) -> LinalgResult<()> {
                Self::check_line(0, src)?;
                Self::check_line(0, dst)?;
                let mut m = self.to_array();
                m.iter_mut().for_each(|row| {
                    let value = row[src] * scalar;
                    row[dst] += value;
                });
                *self = Self::from_array(m);
                Ok(())
            }

            pub fn transposed(&self) -> Self {
                $name { $($f: self.at($c, $r)),+ }
            }

            pub fn transpose(&mut self) {
                *self = self.transposed();
            }

            pub fn is_identity(&self) -> bool {
                true $(&& self.$f == if $r == $c { T::one() } else { T::zero() })+
            }

            pub fn is_symmetric(&self) -> bool {
                true $(&& self.$f == self.at($c, $r))+
            }

            /// Always square, so the trace cannot fail.
            pub fn trace(&self) -> T {
                T::zero() $(+ if $r == $c { self.$f } else { T::zero() })+
            }

            pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
                true $(&& (self.$f - other.$f).abs() <= epsilon)+
            }

            /// Shape-checked conversion from any matrix-shaped value.
            pub fn from_matrix<M: Matrix<T> + ?Sized>(other: &M) -> LinalgResult<Self> {
                if other.shape() != ($order, $order) {
                    log::debug!(
                        "cannot build {} from a {:?} matrix",
                        stringify!($name),
                        other.shape()
                    );
                    return Err(LinalgError::mismatch(
                        "from_matrix",
                        ($order, $order),
                        other.shape(),
                    ));
                }
                Ok($name { $($f: other.at($r, $c)),+ })
            }

            pub fn try_inverse(&self) -> Option<Self> {
                self.inverse().ok()
            }

            /// Invert in place; unchanged on failure.
            pub fn invert(&mut self) -> LinalgResult<()> {
                *self = self.inverse()?;
                Ok(())
            }

            pub fn try_invert(&mut self) -> bool {
                self.invert().is_ok()
            }
        }

        impl<T: Scalar> Eq for $name<T> {}

        impl<T: Scalar> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                Self::ORDER.hash(state);
                Self::ORDER.hash(state);
            }
        }

        impl<T: Scalar> Index<(usize, usize)> for $name<T> {
            type Output = T;

            fn index(&self, index: (usize, usize)) -> &T {
                match self.element(index.0, index.1) {
                    Ok(value) => value,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl<T: Scalar> IndexMut<(usize, usize)> for $name<T> {
            fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
                match self.element_mut(index.0, index.1) {
                    Ok(value) => value,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl<T: Scalar> ops::Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                $name { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl<T: Scalar> ops::Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                $name { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl<T: Scalar> ops::Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                $name { $($f: -self.$f),+ }
            }
        }

        impl<T: Scalar> ops::Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                $name { $($f: self.$f * rhs),+ }
            }
        }

        impl<T: Scalar> ops::Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                $name { $($f: self.$f / rhs),+ }
            }
        }

        impl<T: Scalar> ops::Mul for $name<T> {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                self.product(&rhs)
            }
        }

        impl<T: Scalar> ops::Mul<$vector<T>> for $name<T> {
            type Output = $vector<T>;

            fn mul(self, rhs: $vector<T>) -> $vector<T> {
                self.product_vector(&rhs)
            }
        }

        impl ops::Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            fn mul(self, rhs: $name<f32>) -> $name<f32> {
                rhs * self
            }
        }

        impl ops::Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            fn mul(self, rhs: $name<f64>) -> $name<f64> {
                rhs * self
            }
        }

        impl<T: Scalar> From<$name<T>> for MatrixGen<T> {
            fn from(m: $name<T>) -> Self {
                MatrixGen::from_matrix(&m)
            }
        }

        impl<T: Scalar> TryFrom<&MatrixGen<T>> for $name<T> {
            type Error = LinalgError;

            fn try_from(m: &MatrixGen<T>) -> LinalgResult<Self> {
                $name::from_matrix(m)
            }
        }

        impl<T: Scalar> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&MatrixGen::<T>::from_matrix(self), f)
            }
        }
    };
}

pub(crate) use impl_fixed_matrix;
