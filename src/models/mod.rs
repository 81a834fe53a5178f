pub mod forest;
pub mod gbdt;
pub mod knn;
pub mod linear;
pub mod tree;

pub mod factory;
pub mod regressor_trait;

pub use regressor_trait::Regressor;

use ndarray::Array2;
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Convert an ndarray feature matrix into the smartcore matrix type.
pub(crate) fn to_dense_matrix(x: &Array2<f64>) -> DenseMatrix<f64> {
    let rows: Vec<Vec<f64>> = x.rows().into_iter().map(|r| r.to_vec()).collect();
    DenseMatrix::from_2d_vec(&rows)
}
