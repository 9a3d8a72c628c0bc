use forecast_engine::grid::{fit, product, ParameterGrid};
use forecast_engine::metrics::smape;
use forecast_engine::models::{
    ForecastModel, Holt, HoltParams, HoltWinters, MovingAverage, SeasonalInit,
};
use forecast_engine::ForecastError;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn noisy_trend(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 3.0).unwrap();
    (0..len)
        .map(|i| 50.0 + 1.5 * i as f64 + 8.0 * ((i % 4) as f64) + noise.sample(&mut rng))
        .collect()
}

/// Index of the first candidate with the lowest score, by brute force
fn brute_force<M: ForecastModel>(model: &M, actual: &[f64]) -> (usize, f64) {
    model
        .candidates(actual.len())
        .iter()
        .map(|params| smape(actual, &model.forecast(actual, params).unwrap()).unwrap())
        .enumerate()
        .fold((0, f64::INFINITY), |best, (index, score)| {
            if score < best.1 {
                (index, score)
            } else {
                best
            }
        })
}

#[test]
fn test_product_is_lazy_and_outer_major() {
    let inner = [1, 2];
    let mut pairs = product(vec!['a', 'b'], &inner);
    assert_eq!(pairs.next(), Some(('a', 1)));
    assert_eq!(pairs.collect::<Vec<_>>(), vec![('a', 2), ('b', 1), ('b', 2)]);
}

#[test]
fn test_holt_fit_is_grid_optimal() {
    let model = Holt::default();
    for seed in 0..5 {
        let actual = noisy_trend(seed, 16);
        let best = fit(&model, &actual, false).unwrap();
        let (index, score) = brute_force(&model, &actual);

        assert_eq!(best.smape, score);
        assert_eq!(best.params, model.candidates(actual.len())[index]);
    }
}

#[test]
fn test_holt_winters_fit_is_grid_optimal() {
    let model = HoltWinters::new(ParameterGrid::unit(0.25).unwrap(), 4, SeasonalInit::FirstSeason)
        .unwrap();
    let actual = noisy_trend(9, 20);

    let best = fit(&model, &actual, false).unwrap();
    let (index, score) = brute_force(&model, &actual);

    assert_eq!(best.smape, score);
    assert_eq!(best.params, model.candidates(actual.len())[index]);
    assert_eq!(best.forecast.len(), actual.len() + 4);
}

#[test]
fn test_ties_go_to_the_first_candidate() {
    // a flat series is forecast perfectly by every Holt grid point
    let actual = vec![5.0; 8];
    let best = fit(&Holt::default(), &actual, false).unwrap();
    assert_eq!(best.smape, 0.0);
    assert_eq!(
        best.params,
        HoltParams {
            alpha: 0.0,
            beta: 0.0
        }
    );

    let best = fit(&MovingAverage::default(), &actual, false).unwrap();
    assert_eq!(best.params, 3);
}

#[test]
fn test_parallel_search_matches_sequential() {
    let holt = Holt::default();
    let holt_winters = HoltWinters::default();

    for seed in 0..4 {
        let actual = noisy_trend(seed, 12 + seed as usize);
        assert_eq!(
            fit(&holt, &actual, true).unwrap(),
            fit(&holt, &actual, false).unwrap()
        );
        assert_eq!(
            fit(&holt_winters, &actual, true).unwrap(),
            fit(&holt_winters, &actual, false).unwrap()
        );
    }

    let flat = vec![5.0; 8];
    assert_eq!(
        fit(&holt, &flat, true).unwrap().params,
        HoltParams {
            alpha: 0.0,
            beta: 0.0
        }
    );
}

#[test]
fn test_infeasible_windows_are_skipped() {
    let model = MovingAverage::new(vec![12, 2, 30]).unwrap();
    let actual = [1.0, 2.0, 3.0, 4.0, 5.0];
    let best = fit(&model, &actual, false).unwrap();
    assert_eq!(best.params, 2);
}

#[test]
fn test_no_feasible_window() {
    let actual = [1.0, 2.0, 3.0];
    assert!(matches!(
        fit(&MovingAverage::default(), &actual, false),
        Err(ForecastError::InsufficientData(_))
    ));
}

#[test]
fn test_short_series_fails_holt_winters() {
    let actual = [1.0, 2.0, 3.0];
    assert!(matches!(
        fit(&HoltWinters::default(), &actual, true),
        Err(ForecastError::InvalidSeasonLength {
            season_length: 3,
            len: 3
        })
    ));
}

/// Scales the actual series; a NaN scale poisons every position
#[derive(Debug)]
struct ScaledCopy {
    scales: Vec<f64>,
}

impl ForecastModel for ScaledCopy {
    type Params = f64;

    fn name(&self) -> &str {
        "Scaled Copy"
    }

    fn horizon(&self) -> usize {
        0
    }

    fn candidates(&self, _len: usize) -> Vec<f64> {
        self.scales.clone()
    }

    fn forecast(&self, actual: &[f64], scale: &f64) -> forecast_engine::Result<Vec<Option<f64>>> {
        Ok(actual.iter().map(|value| Some(value * scale)).collect())
    }

    fn describe(&self, scale: &f64) -> String {
        format!("Scale: {:.2}", scale)
    }
}

#[test]
fn test_nan_scores_are_never_chosen() {
    let model = ScaledCopy {
        scales: vec![f64::NAN, 2.0, f64::NAN, 1.5],
    };
    let actual = [1.0, 2.0, 3.0];

    for parallel in [false, true] {
        let best = fit(&model, &actual, parallel).unwrap();
        assert_eq!(best.params, 1.5);
        assert_eq!(best.smape, 40.0);
    }
}

#[test]
fn test_only_nan_scores_is_insufficient_data() {
    let model = ScaledCopy {
        scales: vec![f64::NAN, f64::NAN],
    };

    for parallel in [false, true] {
        assert!(matches!(
            fit(&model, &[1.0, 2.0, 3.0], parallel),
            Err(ForecastError::InsufficientData(_))
        ));
    }
}
