#[macro_use] extern crate dmat_assert_close;

use dmat::{Matrix, MatrixError, MatrixLike, grid_of};
use rand::Rng;

fn random_matrix<R: Rng>(rng: &mut R, (r, c): (usize, usize)) -> Matrix
{
    let data = (0..r * c).map(|_| rng.gen_range(-10.0, 10.0)).collect();
    Matrix::from_row_major_data((r, c), data).unwrap()
}

fn random_shape<R: Rng>(rng: &mut R) -> (usize, usize)
{ (rng.gen_range(1, 6), rng.gen_range(1, 6)) }

#[test]
fn construction() {
    for r in 0..5 {
        for c in 0..5 {
            match Matrix::new(r, c) {
                Ok(m) => {
                    assert!(r > 0 && c > 0);
                    assert_eq!(m.dims(), (r, c));
                    assert!(m.row_major_data().iter().all(|&x| x == 0.0));
                    assert!(m.is_valid());
                },
                Err(e) => {
                    assert!(r == 0 || c == 0);
                    assert_eq!(e, MatrixError::InvalidDimension { rows: r, columns: c });
                },
            }
        }
    }
}

#[test]
fn copies_are_independent() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let shape = random_shape(&mut rng);
        let a = random_matrix(&mut rng, shape);
        let mut b = a.clone();
        assert_eq!(a, b);

        let before = a.to_grid();
        for r in 0..shape.0 {
            for c in 0..shape.1 {
                b[(r, c)] += 1.0;
            }
        }
        assert_eq!(a.to_grid(), before);
    }
}

#[test]
fn addition_is_commutative() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let shape = random_shape(&mut rng);
        let a = random_matrix(&mut rng, shape);
        let b = random_matrix(&mut rng, shape);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum, b.add(&a).unwrap());
        assert_eq!(sum.dims(), shape);

        let other = random_shape(&mut rng);
        if other != shape {
            let c = random_matrix(&mut rng, other);
            match a.add(&c) {
                Err(MatrixError::DimensionMismatch { .. }) => {},
                r => panic!("expected a shape mismatch, got {:?}", r),
            }
        }
    }
}

#[test]
fn multiplication_shapes() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let (n, k) = random_shape(&mut rng);
        let (k2, m) = random_shape(&mut rng);
        let a = random_matrix(&mut rng, (n, k));
        let b = random_matrix(&mut rng, (k2, m));
        match a.multiply(&b) {
            Ok(c) => {
                assert_eq!(k, k2);
                assert_eq!(c.dims(), (n, m));
            },
            Err(e) => {
                assert_ne!(k, k2);
                assert_eq!(e, MatrixError::DimensionMismatch { op: "multiplication", left: (n, k), right: (k2, m) });
            },
        }
    }
}

#[test]
fn multiplication_is_associative() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let a = random_matrix(&mut rng, (3, 4));
        let b = random_matrix(&mut rng, (4, 2));
        let c = random_matrix(&mut rng, (2, 5));
        let ab_c = a.multiply(&b).unwrap().multiply(&c).unwrap();
        let a_bc = a.multiply(&b.multiply(&c).unwrap()).unwrap();
        assert_close!(abs=1e-9, rel=1e-9, ab_c, a_bc);
    }
}

#[test]
fn documented_examples() {
    let m = |grid: &[[f64; 2]]| Matrix::from_grid(grid).unwrap();

    assert_eq!(m(&[[1.0, 2.0], [3.0, 4.0]]).add(&m(&[[4.0, 3.0], [2.0, 1.0]])).unwrap(), m(&[[5.0, 5.0], [5.0, 5.0]]));
    assert_eq!(m(&[[1.0, 2.0], [3.0, 4.0]]).multiply(&m(&[[2.0, 0.0], [1.0, 2.0]])).unwrap(), m(&[[4.0, 4.0], [10.0, 8.0]]));
    assert_eq!(m(&[[1.0, 2.0], [3.0, 4.0]]).scale(2.0), m(&[[2.0, 4.0], [6.0, 8.0]]));
    assert_eq!(m(&[[4.0, 6.0], [3.0, 8.0]]).determinant().unwrap(), 14.0);
    assert_eq!(m(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).determinant().unwrap_err(), MatrixError::NotSquare { rows: 3, columns: 2 });

    let identity = m(&[[1.0, 0.0], [0.0, 1.0]]);
    let bigger = m(&[[3.0, 0.0], [0.0, 2.0]]);
    assert!(identity == identity.clone());
    assert!(identity < bigger);
    assert!(!(identity > bigger));
}

#[test]
fn grid_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let shape = random_shape(&mut rng);
        let a = random_matrix(&mut rng, shape);
        let grid = grid_of(Some(&a)).unwrap();
        assert_eq!(Matrix::from_grid(&grid).unwrap(), a);
        assert_eq!(MatrixLike::grid(&a), grid);
    }
    assert_eq!(grid_of(None).unwrap_err(), MatrixError::NullMatrix);
}

#[test]
fn determinant_of_permutation_matrices() {
    // swapping two rows of the identity flips the sign
    for n in 2..7 {
        for i in 0..n {
            for j in 0..n {
                let mut p = Matrix::new(n, n).unwrap();
                for r in 0..n {
                    let c = match r {
                        r if r == i => j,
                        r if r == j => i,
                        r => r,
                    };
                    p[(r, c)] = 1.0;
                }
                let expected = if i == j { 1.0 } else { -1.0 };
                assert_eq!(p.determinant().unwrap(), expected, "n={} swap {}<->{}", n, i, j);
            }
        }
    }
}
