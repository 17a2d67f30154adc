//! IQR Outlier Scanning Examples
//!
//! This example walks through typical scans:
//! - Basic scan of one column
//! - Inner vs outer fences
//! - Missing values under both policies
//! - Whole-table scans of a CSV file with describe and correlation
//! - Loading JSON records
//!
//! The first scenario includes its expected output as a comment.

use iqr::prelude::*;

fn main() -> Result<(), IqrError> {
    println!("{}", "=".repeat(80));
    println!("IQR Outlier Scanning - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_scan()?;
    example_2_inner_and_outer_fences()?;
    example_3_missing_values()?;
    example_4_csv_table()?;
    example_5_json_records()?;

    Ok(())
}

/// Example 1: Basic Scan
/// One numeric column with a single extreme value.
fn example_1_basic_scan() -> Result<(), IqrError> {
    println!("Example 1: Basic Scan");
    println!("{}", "-".repeat(80));

    let table = Table::from_columns(vec![
        Column::categorical("id", ["a", "b", "c", "d", "e", "f", "g", "h", "i"]),
        Column::numeric("value", [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 100.0]),
    ])?;

    let scanner = Iqr::new().build()?;
    let result = scanner.scan(&table, "value")?;
    println!("{}", result);

    /* Expected Output:
    Outlier Scan: value
      Observations: 9
      Quartiles:    Q1=2 Median=3 Q3=4
      IQR:          2
      Fence:        [-1, 7] (k=1.5)
      Outliers:     1 (0 below, 1 above)

         Row          Value     Side
    --------------------------------
           8       100.0000    above
    */

    println!();
    Ok(())
}

/// Example 2: Inner and Outer Fences
/// Tukey's k = 1.5 flags "mild" outliers; k = 3 keeps only the extreme ones.
fn example_2_inner_and_outer_fences() -> Result<(), IqrError> {
    println!("Example 2: Inner and Outer Fences");
    println!("{}", "-".repeat(80));

    let latencies = [12.0, 14.0, 13.0, 15.0, 13.5, 14.5, 22.0, 13.0, 60.0, 14.0, 12.5, 13.0];
    let table = Table::from_columns(vec![Column::numeric("latency_ms", latencies)])?;

    for k in [1.5, 3.0] {
        let result = Iqr::new().multiplier(k).build()?.scan(&table, "latency_ms")?;
        println!(
            "k = {k}: fence {} -> {} outlier(s) at rows {:?}",
            result.fence, result.count, result.indices
        );
    }

    println!();
    Ok(())
}

/// Example 3: Missing Values
/// Missing cells are skipped by default, or rejected on request.
fn example_3_missing_values() -> Result<(), IqrError> {
    println!("Example 3: Missing Values");
    println!("{}", "-".repeat(80));

    let table = Table::from_columns(vec![Column::numeric_opt(
        "reading",
        [Some(1.0), None, Some(2.0), Some(f64::NAN), Some(3.0), Some(40.0)],
    )])?;

    let skip = Iqr::new().build()?.scan(&table, "reading")?;
    println!(
        "Skip:   {} observed, {} missing, outliers at {:?}",
        skip.observed, skip.missing, skip.indices
    );

    match Iqr::new().missing_policy(Reject).build()?.scan(&table, "reading") {
        Ok(_) => println!("Reject: no missing values"),
        Err(e) => println!("Reject: {}", e),
    }

    println!();
    Ok(())
}

/// Example 4: CSV Table
/// Describe a mixed table, scan every numeric column and correlate them.
fn example_4_csv_table() -> Result<(), IqrError> {
    println!("Example 4: CSV Table");
    println!("{}", "-".repeat(80));

    let csv = "\
station,temp_c,humidity,wind_kmh
north,14.2,0.61,12
south,15.1,0.58,9
east,13.8,NA,11
west,14.9,0.63,10
ridge,-12.0,0.60,95
coast,15.4,0.71,14
valley,14.4,0.55,8
";
    let table: Table<f64> = CsvLoader::new().load_str(csv)?;

    println!("{}", describe(&table)?);

    let report = Iqr::new().build()?.scan_all(&table)?;
    println!("{}", report);
    for result in report.results.iter().filter(|r| !r.is_empty()) {
        for row in result.rows.rows() {
            println!(
                "  {} flagged in {}",
                row.get("station").unwrap_or(Cell::Missing),
                result.column
            );
        }
    }
    println!();

    println!("{}", correlation(&table)?);
    println!();
    Ok(())
}

/// Example 5: JSON Records
/// Records may omit keys; absent keys become missing cells.
fn example_5_json_records() -> Result<(), IqrError> {
    println!("Example 5: JSON Records");
    println!("{}", "-".repeat(80));

    let json = r#"[
        {"order": "A-1", "amount": 19.99},
        {"order": "A-2", "amount": 24.50},
        {"order": "A-3"},
        {"order": "A-4", "amount": 21.00},
        {"order": "A-5", "amount": 899.00},
        {"order": "A-6", "amount": 18.75}
    ]"#;
    let table: Table<f64> = JsonLoader::new().load_str(json)?;
    let result = Iqr::new().build()?.scan(&table, "amount")?;
    println!("{}", result);

    println!();
    Ok(())
}
