use iqr::prelude::*;
use proptest::prelude::*;

fn column(values: &[f64]) -> Table<f64> {
    Table::from_columns(vec![Column::numeric("x", values.iter().copied())]).unwrap()
}

fn values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..200)
}

proptest! {
    #[test]
    fn fence_is_ordered(xs in values(), k in 0.0..5.0f64) {
        let scanner = Iqr::new().multiplier(k).build().unwrap();
        let fence = scanner.fence(&column(&xs), "x").unwrap();
        prop_assert!(fence.lower <= fence.upper);
    }

    #[test]
    fn flagged_exactly_outside(xs in values()) {
        let scanner = Iqr::new().build().unwrap();
        let result = scanner.scan(&column(&xs), "x").unwrap();

        prop_assert_eq!(result.count, result.indices.len());
        prop_assert_eq!(result.count, result.rows.n_rows());
        prop_assert!(result.indices.windows(2).all(|w| w[0] < w[1]));
        for (i, &x) in xs.iter().enumerate() {
            let outside = x < result.fence.lower || x > result.fence.upper;
            prop_assert_eq!(result.indices.contains(&i), outside, "row {} value {}", i, x);
        }
    }

    #[test]
    fn constant_column_has_no_outliers(x in -1.0e6..1.0e6f64, n in 1usize..100) {
        let scanner = Iqr::new().build().unwrap();
        let result = scanner.scan(&column(&vec![x; n]), "x").unwrap();
        prop_assert_eq!(result.count, 0);
    }

    #[test]
    fn fence_ignores_row_order(xs in values()) {
        let mut reversed = xs.clone();
        reversed.reverse();
        let scanner = Iqr::new().build().unwrap();
        let a = scanner.fence(&column(&xs), "x").unwrap();
        let b = scanner.fence(&column(&reversed), "x").unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn wider_fence_flags_subset(xs in values(), k in 0.0..3.0f64) {
        let table = column(&xs);
        let narrow = Iqr::new().multiplier(k).build().unwrap().scan(&table, "x").unwrap();
        let wide = Iqr::new().multiplier(k + 1.0).build().unwrap().scan(&table, "x").unwrap();
        prop_assert!(wide.indices.iter().all(|i| narrow.indices.contains(i)));
    }

    #[test]
    fn quartiles_within_range(xs in values()) {
        let scanner = Iqr::new().build().unwrap();
        let q = scanner.quartiles(&column(&xs), "x").unwrap();
        let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Interpolation may round one ulp past a neighbouring order statistic.
        let tol = 1e-6;
        prop_assert!(min <= q.q1 + tol && q.q3 <= max + tol);
        prop_assert!(q.q1 <= q.median + tol && q.median <= q.q3 + tol);
    }
}
