use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Dense row-major f64 matrix. `data.len() == rows * cols` always holds;
/// every constructor and operation preserves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from nested row vectors. Panics if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Matrix {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            if row.len() != n_cols {
                panic!(
                    "ragged rows: expected {} columns, found {}",
                    n_cols,
                    row.len()
                );
            }
            data.extend_from_slice(row);
        }
        Matrix {
            rows: n_rows,
            cols: n_cols,
            data,
        }
    }

    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Matrix
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i * cols + j] = f(i, j);
            }
        }
        res
    }

    /// Xavier (Glorot) initialization: samples from N(0, 1/fan_in).
    ///
    /// Suited to Sigmoid/Tanh/Identity layers; keeps activation and gradient
    /// variance roughly constant across layers. `rows` is the fan-in.
    pub fn xavier<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let std_dev = (1.0 / rows as f64).sqrt();
        Matrix::from_fn(rows, cols, |_, _| {
            let z: f64 = rng.sample(StandardNormal);
            z * std_dev
        })
    }

    /// He initialization: samples from N(0, 2/fan_in).
    ///
    /// Suited to ReLU layers, which zero half of their inputs on average.
    /// `rows` is the fan-in.
    pub fn he<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let std_dev = (2.0 / rows as f64).sqrt();
        Matrix::from_fn(rows, cols, |_, _| {
            let z: f64 = rng.sample(StandardNormal);
            z * std_dev
        })
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Borrow one row as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        res
    }

    pub fn matmul(&self, rhs: &Matrix) -> Matrix {
        if self.cols != rhs.rows {
            panic!(
                "matmul shape mismatch: {}x{} * {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            );
        }
        let mut res = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let lhs_ik = self.data[i * self.cols + k];
                if lhs_ik == 0.0 {
                    continue;
                }
                for j in 0..rhs.cols {
                    res.data[i * rhs.cols + j] += lhs_ik * rhs.data[k * rhs.cols + j];
                }
            }
        }
        res
    }

    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        assert_shapes_match("hadamard", self, rhs);
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| a * b)
                .collect(),
        }
    }

    /// Adds a 1×cols bias row to every row of `self`.
    pub fn add_row_bias(&self, bias: &Matrix) -> Matrix {
        if bias.rows != 1 || bias.cols != self.cols {
            panic!(
                "bias shape mismatch: {}x{} broadcast over {}x{}",
                bias.rows, bias.cols, self.rows, self.cols
            );
        }
        let mut res = self.clone();
        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i * res.cols + j] += bias.data[j];
            }
        }
        res
    }

    /// Sums each column, producing a 1×cols matrix.
    pub fn column_sums(&self) -> Matrix {
        let mut res = Matrix::zeros(1, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[j] += self.data[i * self.cols + j];
            }
        }
        res
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            data: vec![],
        }
    }
}

fn assert_shapes_match(op: &str, a: &Matrix, b: &Matrix) {
    if a.rows != b.rows || a.cols != b.cols {
        panic!(
            "{} shape mismatch: {}x{} vs {}x{}",
            op, a.rows, a.cols, b.rows, b.cols
        );
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Matrix {
        assert_shapes_match("add", self, rhs);
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
        }
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Matrix {
        assert_shapes_match("sub", self, rhs);
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matmul_matches_manual() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let c = a.matmul(&b);
        assert_eq!(c.row(0), &[19.0, 22.0]);
        assert_eq!(c.row(1), &[43.0, 50.0]);
    }

    #[test]
    fn transpose_swaps_shape() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!((t.rows, t.cols), (3, 2));
        assert_eq!(t.get(2, 0), 3.0);
        assert_eq!(t.get(0, 1), 4.0);
    }

    #[test]
    fn bias_broadcasts_over_rows() {
        let x = Matrix::zeros(3, 2);
        let b = Matrix::from_rows(vec![vec![1.0, -1.0]]);
        let y = x.add_row_bias(&b);
        for i in 0..3 {
            assert_eq!(y.row(i), &[1.0, -1.0]);
        }
    }

    #[test]
    fn column_sums_accumulate() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let s = a.column_sums();
        assert_eq!(s.row(0), &[4.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "matmul shape mismatch")]
    fn matmul_rejects_bad_shapes() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        a.matmul(&b);
    }

    #[test]
    #[should_panic(expected = "ragged rows")]
    fn from_rows_rejects_ragged_input() {
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
    }
}
