//! End-to-end checks of the Ferengi, Betasoide and Vulcano system

use std::io::Write;

use chrono::NaiveDate;
use orrery::celestial::Planet;
use orrery::simulation::{DailyPrediction, SeasonReport};
use orrery::{
    ForecastError, InMemoryPredictionStore, Point, Polygon, PredictionStore, Simulation,
    SimulationConfig, WeatherCondition,
};
use rstest::{fixture, rstest};

#[fixture]
fn config() -> SimulationConfig {
    SimulationConfig::reference(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
}

fn perimeter(points: impl IntoIterator<Item = Point>) -> rust_decimal::Decimal {
    points.into_iter().collect::<Polygon>().perimeter().unwrap()
}

fn positions(planets: &[Planet]) -> Vec<Point> {
    planets.iter().map(Planet::position).collect()
}

#[rstest]
fn first_day_is_drought(config: SimulationConfig) {
    let mut simulation = Simulation::new(&config).unwrap();
    let first = simulation.step().unwrap().unwrap();
    assert_eq!(first.day, 0);
    assert_eq!(first.condition, WeatherCondition::Drought);
}

#[rstest]
#[case(0)]
#[case(90)]
#[case(180)]
#[case(270)]
#[case(3600)]
fn planets_align_with_star_every_quarter_year(config: SimulationConfig, #[case] day: u64) {
    let predictions = Simulation::new(&config).unwrap().predictions().unwrap();
    assert_eq!(predictions[day as usize].condition, WeatherCondition::Drought);
}

#[rstest]
fn ten_year_report(config: SimulationConfig) {
    let report = Simulation::new(&config).unwrap().run().unwrap();

    // Planets and star line up exactly on days 0, 90, ..., 3600
    assert_eq!(report.drought_seasons, 41);
    assert!(report.rain_seasons > 0);
    assert!(!report.rain_picks.is_empty());

    let first = report.rain_picks.first().unwrap();
    let expected = config.start_date + chrono::Days::new(first.day);
    assert_eq!(first.date, expected);
}

#[rstest]
fn seasons_account_for_every_change(config: SimulationConfig) {
    let predictions = Simulation::new(&config).unwrap().predictions().unwrap();
    let report = Simulation::new(&config).unwrap().run().unwrap();

    // Rain picks are folded into whatever season surrounds them
    let mut expected = SeasonReport::default();
    let mut season = WeatherCondition::None;
    for prediction in &predictions {
        match prediction.condition {
            WeatherCondition::RainPick => expected.rain_picks.push(orrery::simulation::RainPick {
                day: prediction.day,
                date: config.start_date + chrono::Days::new(prediction.day),
            }),
            condition if condition != season => {
                season = condition;
                match condition {
                    WeatherCondition::Drought => expected.drought_seasons += 1,
                    WeatherCondition::Rain => expected.rain_seasons += 1,
                    WeatherCondition::OptimalPressureAndTemp => expected.optimal_seasons += 1,
                    _ => {}
                }
            }
            _ => {}
        }
    }
    assert_eq!(report, expected);

    let pick_days = predictions
        .iter()
        .filter(|p| p.condition == WeatherCondition::RainPick)
        .count();
    assert_eq!(report.rain_picks.len(), pick_days);
}

#[rstest]
fn rain_picks_are_local_perimeter_maxima(mut config: SimulationConfig) {
    config.days = Some(720);
    let mut simulation = Simulation::new(&config).unwrap();

    let mut planets = config.build_planets().unwrap();
    let mut previous: Vec<Point> = planets.iter().map(|p| p.peek_previous().unwrap()).collect();

    while let Some(DailyPrediction { day, condition }) = simulation.step().unwrap() {
        let current = positions(&planets);
        let next: Vec<Point> = planets.iter().map(|p| p.peek_next().unwrap()).collect();

        if matches!(condition, WeatherCondition::Rain | WeatherCondition::RainPick) {
            assert!(
                current.iter().copied().collect::<Polygon>().contains(&Point::origin()),
                "day {day} has rain without enclosing the star"
            );
            let here = perimeter(current.clone());
            let peak = here >= perimeter(previous.clone()) && here >= perimeter(next);
            assert_eq!(
                condition == WeatherCondition::RainPick,
                peak,
                "day {day} perimeter peak mismatch"
            );
        }

        for planet in planets.iter_mut() {
            planet.advance().unwrap();
        }
        previous = current;
    }
}

#[rstest]
fn store_answers_by_day(mut config: SimulationConfig) {
    config.days = Some(100);
    let mut store = InMemoryPredictionStore::new();
    Simulation::new(&config).unwrap().populate(&mut store).unwrap();

    assert_eq!(store.len(), 100);
    assert_eq!(store.find_by_day(90).unwrap().condition, WeatherCondition::Drought);
    assert!(matches!(
        store.find_by_day(100),
        Err(ForecastError::PredictionNotFound(100))
    ));
}

#[rstest]
fn store_json_round_trip(mut config: SimulationConfig) {
    config.days = Some(50);
    let mut store = InMemoryPredictionStore::new();
    Simulation::new(&config).unwrap().populate(&mut store).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("predictions.json");
    store.save_json(&path).unwrap();

    let loaded = InMemoryPredictionStore::load_json(&path).unwrap();
    assert_eq!(loaded, store);
}

#[rstest]
fn config_file_drives_simulation(config: SimulationConfig) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", config.to_json().unwrap()).unwrap();

    let loaded = SimulationConfig::load_from_path(file.path()).unwrap();
    assert_eq!(loaded, config);

    let mut short = loaded;
    short.days = Some(365);
    let from_file = Simulation::new(&short).unwrap().run().unwrap();

    let mut reference = config;
    reference.days = Some(365);
    let from_reference = Simulation::new(&reference).unwrap().run().unwrap();
    assert_eq!(from_file, from_reference);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = SimulationConfig::load_from_path(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ForecastError::Io(_))));
}

#[rstest]
fn optimal_conditions_off_center(config: SimulationConfig) {
    // Moving the star off the line the planets share on day 0 turns drought into optimal weather
    let mut shifted = config;
    shifted.star.y = rust_decimal::Decimal::from(100);
    shifted.days = Some(1);

    let predictions = Simulation::new(&shifted).unwrap().predictions().unwrap();
    assert_eq!(
        predictions,
        vec![DailyPrediction {
            day: 0,
            condition: WeatherCondition::OptimalPressureAndTemp,
        }]
    );
}
