pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::<f64>::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_zero_columns() {
    let m = Matrix::zeros(3, 0);
    assert_eq!(m.shape(), (3, 0));
    assert!(m.row_slice(2).is_empty());
    assert_eq!(m.rows().count(), 3);
}

#[test]
fn test_row() {
    let m = Matrix::<f64>::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let row = m.row(1);
    assert_eq!(row.len(), 3);
    assert!((row[0] - 4.0).abs() < 1e-12);
    assert!((row[2] - 6.0).abs() < 1e-12);
    assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_set() {
    let mut m = Matrix::zeros(2, 2);
    m.set(0, 1, 0.5);
    assert!((m.get(0, 1) - 0.5).abs() < 1e-12);
    assert!(!m.is_symmetric());
    m.set(1, 0, 0.5);
    assert!(m.is_symmetric());
}

#[test]
fn test_non_square_is_not_symmetric() {
    assert!(!Matrix::zeros(2, 3).is_symmetric());
}

#[test]
fn test_l2_normalize_rows() {
    let mut m = Matrix::from_vec(2, 2, vec![3.0, 4.0, 0.0, 0.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    m.l2_normalize_rows();
    assert!((m.get(0, 0) - 0.6).abs() < 1e-12);
    assert!((m.get(0, 1) - 0.8).abs() < 1e-12);
    // zero row stays zero, no NaN
    assert_eq!(m.row_slice(1), &[0.0, 0.0]);
}
