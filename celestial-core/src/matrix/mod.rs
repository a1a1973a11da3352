mod square_matrix;

pub use square_matrix::{Matrix4, Matrix6, SquareMatrix};
