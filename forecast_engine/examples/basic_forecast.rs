use chrono::{Datelike, NaiveDate};
use forecast_engine::{ForecastRequest, Forecaster, ValueLedger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Forecast Engine: Basic Forecasting Example");
    println!("==========================================\n");

    // One mid-month value per month, rising with a three-month cycle
    let ledger = create_sample_ledger();
    println!("Sample data created: {} dated values\n", ledger.len());

    let request = ForecastRequest::parse("2023-01-01", "2024-01-01", "month")?;
    let report = Forecaster::default().forecast(&ledger, &request)?;

    for series in report.series() {
        println!("{}", series.name);
        for point in &series.data {
            match point.value {
                Some(value) => println!("  {}  {:>8.2}", point.date, value),
                None => println!("  {}  {:>8}", point.date, "-"),
            }
        }
        println!();
    }

    println!("Forecasting complete!");
    Ok(())
}

fn create_sample_ledger() -> ValueLedger {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(2023, month, 15))
        .map(|date| {
            let value = 10.0 + date.month() as f64 + 2.0 * (date.month() % 3) as f64;
            (date, value)
        })
        .collect()
}
