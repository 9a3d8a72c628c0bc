use approx::assert_relative_eq;
use forecast_engine::models::{
    holt, holt_winters, moving_average, ForecastModel, Holt, HoltParams, HoltWinters,
    HoltWintersParams, MovingAverage, SeasonalInit,
};
use forecast_engine::{ForecastError, ParameterGrid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

const MONTHLY: [f64; 12] = [
    10.0, 12.0, 13.0, 12.0, 15.0, 16.0, 14.0, 18.0, 20.0, 19.0, 21.0, 24.0,
];

fn random_series(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-50.0..150.0)).collect()
}

#[rstest]
#[case(3)]
#[case(4)]
#[case(6)]
#[case(11)]
fn test_moving_average_shape_and_values(#[case] window: usize) {
    let result = moving_average(&MONTHLY, window).unwrap();

    assert_eq!(result.len(), MONTHLY.len() + 1);
    assert!(result[..window].iter().all(Option::is_none));
    for (index, value) in result.iter().enumerate().skip(window) {
        let expected = MONTHLY[index - window..index].iter().sum::<f64>() / window as f64;
        assert_relative_eq!(value.unwrap(), expected, epsilon = 1e-9);
    }
}

#[test]
fn test_moving_average_rejects_full_window() {
    assert!(matches!(
        moving_average(&MONTHLY, 12),
        Err(ForecastError::InvalidWindow {
            window: 12,
            len: 12
        })
    ));
}

#[test]
fn test_holt_shape_and_determinism() {
    for seed in 0..20 {
        let series = random_series(seed, 1 + seed as usize);
        let first = holt(&series, 0.4, 0.7).unwrap();
        let second = holt(&series, 0.4, 0.7).unwrap();

        assert_eq!(first.len(), series.len() + 1);
        assert_eq!(first[0], None);
        assert!(first[1..].iter().all(Option::is_some));
        // bit-identical on repeat
        let bits = |values: &[Option<f64>]| -> Vec<Option<u64>> {
            values.iter().map(|v| v.map(f64::to_bits)).collect()
        };
        assert_eq!(bits(&first), bits(&second));
    }
}

#[test]
fn test_holt_alpha_one_beta_zero_is_naive() {
    let result = holt(&MONTHLY, 1.0, 0.0).unwrap();
    // level tracks the previous observation and the trend stays at zero
    for index in 1..MONTHLY.len() {
        assert_relative_eq!(result[index].unwrap(), MONTHLY[index - 1]);
    }
    assert_relative_eq!(result[MONTHLY.len()].unwrap(), MONTHLY[MONTHLY.len() - 2]);
}

#[rstest]
#[case(1, 4)]
#[case(2, 5)]
#[case(3, 12)]
#[case(4, 9)]
#[case(5, 30)]
fn test_holt_winters_shape(#[case] season_length: usize, #[case] len: usize) {
    let series = random_series(season_length as u64, len);
    let params = HoltWintersParams {
        alpha: 0.3,
        beta: 0.2,
        gamma: 0.6,
    };

    for init in [SeasonalInit::FirstSeason, SeasonalInit::Averaged] {
        let result = holt_winters(&series, &params, season_length, init).unwrap();
        assert_eq!(result.len(), len + season_length);
        assert!(result[..season_length].iter().all(Option::is_none));
        assert!(result[season_length..]
            .iter()
            .all(|v| v.map_or(false, f64::is_finite)));
    }
}

#[rstest]
#[case(3, 3)]
#[case(4, 3)]
#[case(1, 1)]
#[case(0, 5)]
fn test_holt_winters_rejects_long_seasons(#[case] season_length: usize, #[case] len: usize) {
    let series = vec![1.0; len];
    let params = HoltWintersParams {
        alpha: 0.5,
        beta: 0.5,
        gamma: 0.5,
    };
    assert!(matches!(
        holt_winters(&series, &params, season_length, SeasonalInit::FirstSeason),
        Err(ForecastError::InvalidSeasonLength { .. })
    ));
}

#[test]
fn test_holt_winters_extrapolates_last_season() {
    let params = HoltWintersParams {
        alpha: 0.8,
        beta: 0.0,
        gamma: 1.0,
    };
    let result = holt_winters(&MONTHLY, &params, 3, SeasonalInit::FirstSeason).unwrap();

    assert_eq!(result.len(), 15);
    assert_relative_eq!(result[12].unwrap(), 22.529333906285718, epsilon = 1e-9);
    assert_relative_eq!(result[13].unwrap(), 24.690456730412702, epsilon = 1e-9);
    assert_relative_eq!(result[14].unwrap(), 25.77777777777778, epsilon = 1e-9);
}

#[test]
fn test_seasonal_init_changes_the_forecast() {
    let params = HoltWintersParams {
        alpha: 0.5,
        beta: 0.5,
        gamma: 0.5,
    };
    let first = holt_winters(&MONTHLY, &params, 3, SeasonalInit::FirstSeason).unwrap();
    let averaged = holt_winters(&MONTHLY, &params, 3, SeasonalInit::Averaged).unwrap();
    assert_ne!(first, averaged);
}

#[test]
fn test_model_metadata() {
    let grid = ParameterGrid::default();

    let moving_average = MovingAverage::default();
    assert_eq!(moving_average.name(), "Moving Average");
    assert_eq!(moving_average.horizon(), 1);
    assert_eq!(moving_average.candidates(12), vec![3, 4, 5, 6]);
    assert_eq!(moving_average.describe(&4), "Window: 4");

    let holt_model = Holt::new(grid.clone());
    assert_eq!(holt_model.name(), "Holt's");
    assert_eq!(holt_model.horizon(), 1);
    assert_eq!(holt_model.candidates(12).len(), 121);
    assert_eq!(
        holt_model.describe(&HoltParams {
            alpha: 0.3,
            beta: 1.0
        }),
        "Alpha: 0.30 Beta: 1.00"
    );

    let holt_winters_model = HoltWinters::new(grid, 4, SeasonalInit::Averaged).unwrap();
    assert_eq!(holt_winters_model.name(), "Holt Winter's");
    assert_eq!(holt_winters_model.horizon(), 4);
    assert_eq!(holt_winters_model.candidates(12).len(), 1331);
}

#[test]
fn test_model_parameter_validation() {
    assert!(MovingAverage::new(vec![]).is_err());
    assert!(MovingAverage::new(vec![3, 0]).is_err());
    assert!(HoltWinters::new(ParameterGrid::default(), 0, SeasonalInit::FirstSeason).is_err());
}
