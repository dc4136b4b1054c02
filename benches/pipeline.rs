use chrono_tz::America::Chicago;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use load_weather::{
    add_features, clean_frame, combine_frames, normalize_power, normalize_weather, CityWeather,
    HolidayCalendar, HourlyVariable, DATE_COLUMN,
};
use polars::prelude::*;

const HOURS: i64 = 24 * 365;
const START_MILLIS: i64 = 1_672_531_200_000;
const CITIES: [&str; 3] = ["nashville", "memphis", "knoxville"];

fn timestamps(name: &str) -> Series {
    let millis: Vec<i64> = (0..HOURS).map(|h| START_MILLIS + h * 3_600_000).collect();
    Series::new(name.into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
        .unwrap()
}

fn power() -> DataFrame {
    let loads: Vec<f64> = (0..HOURS).map(|h| 12_000.0 + (h % 24) as f64 * 150.0).collect();
    let raw = DataFrame::new(vec![
        timestamps("period").into(),
        Series::new("value".into(), loads).into(),
    ])
    .unwrap();
    normalize_power(raw.lazy()).collect().unwrap()
}

fn weather(city: &str) -> CityWeather {
    let mut columns: Vec<Column> = vec![timestamps(DATE_COLUMN).into()];
    for variable in HourlyVariable::ALL {
        let values: Vec<f64> = match variable {
            HourlyVariable::WeatherCode => (0..HOURS).map(|h| ((h * 7) % 100) as f64).collect(),
            HourlyVariable::IsDay => (0..HOURS).map(|h| ((h % 24) / 12) as f64).collect(),
            _ => (0..HOURS).map(|h| (h % 50) as f64).collect(),
        };
        columns.push(Series::new(variable.name().into(), values).into());
    }
    let raw = DataFrame::new(columns).unwrap();
    CityWeather {
        city: city.to_string(),
        frame: normalize_weather(raw.lazy(), city).collect().unwrap(),
    }
}

fn bench_pipeline(c: &mut Criterion) {
    let power = power();
    let weather: Vec<CityWeather> = CITIES.iter().map(|city| weather(city)).collect();
    let cities: Vec<String> = CITIES.iter().map(|c| c.to_string()).collect();
    let holidays = HolidayCalendar::us([2023, 2024]);

    c.bench_function("combine_frames", |b| {
        b.iter(|| combine_frames(black_box(power.clone()), black_box(weather.clone())).unwrap())
    });

    let combined = combine_frames(power.clone(), weather.clone()).unwrap().frame;
    c.bench_function("clean_and_features", |b| {
        b.iter(|| {
            let cleaned = clean_frame(black_box(combined.clone()), &cities).unwrap();
            add_features(cleaned, Chicago, &holidays).unwrap()
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
