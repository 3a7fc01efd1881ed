use sparsecol_core::{Csc, Csc32, Csc64, DimNames, LabelPolicy, SparseError};
use sparsecol_kernels::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn tall_csc() -> Csc64 {
    // A = [[1,0],[0,3],[2,0]] in CSC
    let nrows = 3usize;
    let ncols = 2usize;
    let indptr = vec![0i64, 2, 3];
    let indices = vec![0i64, 2, 1];
    let data = vec![1.0f64, 2.0, 3.0];
    Csc::from_parts(nrows, ncols, indptr, indices, data, true).unwrap()
}

fn wide_csc() -> Csc64 {
    // A = [[1,0,2],[0,3,0]] in CSC
    Csc::from_parts(2, 3, vec![0i64, 1, 2, 3], vec![0i64, 1, 0], vec![1.0f64, 3.0, 2.0], true)
        .unwrap()
}

fn names() -> DimNames {
    DimNames::new(
        Some(vec!["g0".into(), "g1".into(), "g2".into()]),
        Some(vec!["s0".into(), "s1".into()]),
    )
}

/// Deterministic banded matrix with a few empty columns and rows.
fn banded_csc(nrows: usize, ncols: usize) -> Csc64 {
    let mut indptr = vec![0i64];
    let mut indices = Vec::new();
    let mut data = Vec::new();
    for j in 0..ncols {
        if j % 7 != 3 {
            for i in (0..nrows).filter(|i| (i + 2 * j) % 5 == 0 || i % 11 == j % 11) {
                indices.push(i64::try_from(i).unwrap());
                data.push((i * ncols + j) as f64 + 0.5);
            }
        }
        indptr.push(i64::try_from(indices.len()).unwrap());
    }
    Csc::from_parts(nrows, ncols, indptr, indices, data, true).unwrap()
}

#[test]
fn test_transpose_scenario() {
    let t = transpose(&tall_csc()).unwrap();
    assert_eq!(t.shape(), (2, 3));
    assert_eq!(t.indptr, vec![0i64, 1, 2, 3]);
    assert_eq!(t.indices, vec![0i64, 1, 0]);
    assert_eq!(t.data, vec![1.0, 3.0, 2.0]);
    assert!(t.validate().is_ok());
}

#[test]
fn test_transpose_csc_kernel_basic() {
    let t = transpose(&wide_csc()).unwrap();
    assert_eq!(t.nrows, 3);
    assert_eq!(t.ncols, 2);
    assert_eq!(t.indptr, vec![0i64, 2, 3]);
    assert_eq!(t.indices, vec![0i64, 2, 1]);
    assert!(approx_eq(t.data[0], 1.0) && approx_eq(t.data[1], 2.0) && approx_eq(t.data[2], 3.0));
}

#[test]
fn test_transpose_csc_kernel_empty() {
    let a = Csc::<f64, i64>::empty(2, 3).unwrap();
    let t = transpose(&a).unwrap();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.indptr, vec![0i64, 0, 0]);
    assert!(t.indices.is_empty() && t.data.is_empty());

    let t = transpose(&Csc::<f64, i64>::empty(0, 3).unwrap()).unwrap();
    assert_eq!(t.shape(), (3, 0));
    assert_eq!(t.indptr, vec![0i64]);

    let t = transpose(&Csc::<f64, i32>::empty(4, 0).unwrap()).unwrap();
    assert_eq!(t.shape(), (0, 4));
    assert_eq!(t.indptr, vec![0i32; 5]);
}

#[test]
fn test_double_transpose_is_identity() {
    let a = banded_csc(37, 23).with_names_unchecked(DimNames::new(
        Some((0..37).map(|i| format!("r{i}")).collect()),
        None,
    ));
    let tt = transpose(&transpose(&a).unwrap()).unwrap();
    assert_eq!(tt, a);
}

#[test]
fn test_transpose_swaps_and_copies_labels() {
    let a = tall_csc().with_names(names()).unwrap();
    let mut t = transpose(&a).unwrap();
    assert_eq!(t.names.rows, a.names.cols);
    assert_eq!(t.names.cols, a.names.rows);

    if let Some(rows) = t.names.rows.as_mut() {
        rows[0].push_str("-edited");
    }
    assert_eq!(a.names, names());
}

#[test]
fn test_transpose_drop_labels() {
    let a = tall_csc().with_names(names()).unwrap();
    let opts = KernelOptions::default().with_labels(LabelPolicy::Drop);
    let t = transpose_with(&a, &opts).unwrap();
    assert!(t.names.is_empty());
    assert_eq!(t.indices, vec![0i64, 1, 0]);
}

#[test]
fn test_narrow_and_wide_agree() {
    let wide = banded_csc(41, 29);
    let narrow: Csc32 = Csc::from_parts(
        wide.nrows,
        wide.ncols,
        wide.indptr.iter().map(|&p| i32::try_from(p).unwrap()).collect(),
        wide.indices.iter().map(|&i| i32::try_from(i).unwrap()).collect(),
        wide.data.clone(),
        true,
    )
    .unwrap();
    let tw = transpose(&wide).unwrap();
    let tn = transpose(&narrow).unwrap();
    assert_eq!(tn.shape(), tw.shape());
    assert!(tn.indptr.iter().map(|&p| i64::from(p)).eq(tw.indptr.iter().copied()));
    assert!(tn.indices.iter().map(|&i| i64::from(i)).eq(tw.indices.iter().copied()));
    assert_eq!(tn.data, tw.data);
}

#[test]
fn test_tiled_matches_serial() {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap();
    for (m, n) in [(120usize, 90usize), (5, 200), (300, 3), (1, 1)] {
        let a = banded_csc(m, n);
        let serial = transpose_with(&a, &KernelOptions::default().sequential()).unwrap();
        let tiled = pool
            .install(|| transpose_with(&a, &KernelOptions::default().with_parallel_threshold(0)))
            .unwrap();
        assert_eq!(tiled, serial, "shape {m}x{n}");
        assert!(tiled.validate().is_ok());
    }
}

#[test]
fn test_validation_is_opt_in() {
    // unsorted rows in column 0
    let a = Csc::from_parts(3, 1, vec![0i64, 2], vec![2i64, 0], vec![1.0f64, 2.0], false).unwrap();
    assert!(transpose(&a).is_ok());

    let opts = KernelOptions::default().with_validation(true);
    let err = transpose_with(&a, &opts).unwrap_err();
    assert_eq!(err, SparseError::UnsortedRows { col: 0, position: 1 });
    assert!(transpose_with(&tall_csc(), &opts).is_ok());
}

#[test]
fn test_input_is_untouched() {
    let a = banded_csc(10, 12);
    let before = a.clone();
    let _ = transpose(&a).unwrap();
    let _ = to_dense(&a).unwrap();
    let _ = to_dense_transposed(&a).unwrap();
    assert_eq!(a, before);
}

#[test]
fn test_transpose_empty_leading_and_trailing() {
    // 5x4 with rows 0,4 and columns 0,3 empty
    let a = Csc::from_parts(
        5,
        4,
        vec![0i64, 0, 2, 3, 3],
        vec![1i64, 3, 2],
        vec![1.0f64, 2.0, 3.0],
        true,
    )
    .unwrap();
    let t = transpose_with(&a, &KernelOptions::default().sequential()).unwrap();
    assert_eq!(t.shape(), (4, 5));
    assert_eq!(t.indptr, vec![0i64, 0, 1, 2, 3, 3]);
    assert_eq!(t.indices, vec![1i64, 2, 1]);
    assert_eq!(t.data, vec![1.0, 3.0, 2.0]);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(8).build().unwrap();
    let tiled = pool
        .install(|| transpose_with(&a, &KernelOptions::default().with_parallel_threshold(0)))
        .unwrap();
    assert_eq!(tiled, t);
}
