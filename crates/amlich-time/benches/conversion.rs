use amlich_time::ephemeris::{new_moon_day, sun_longitude};
use amlich_time::{lunar_to_solar, solar_to_lunar, SolarDate, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn ephemeris_bench(c: &mut Criterion) {
    let tz = TimeZone::VIETNAM;
    let mut group = c.benchmark_group("ephemeris");
    group.bench_function("new_moon_day", |b| {
        b.iter(|| new_moon_day(black_box(1535), tz))
    });
    group.bench_function("sun_longitude", |b| {
        b.iter(|| sun_longitude(black_box(2_460_351), tz))
    });
    group.finish();
}

fn conversion_bench(c: &mut Criterion) {
    let tz = TimeZone::VIETNAM;
    let first = SolarDate::from_ymd(2024, 1, 1).unwrap();
    let last = SolarDate::from_ymd(2024, 12, 31).unwrap();

    let mut group = c.benchmark_group("conversion");
    group.bench_function("solar_to_lunar_year", |b| {
        b.iter(|| {
            first
                .iter_to(last)
                .map(|d| solar_to_lunar(black_box(d), tz).day as u32)
                .sum::<u32>()
        })
    });
    let lunar = solar_to_lunar(SolarDate::from_ymd(2023, 3, 22).unwrap(), tz);
    group.bench_function("lunar_to_solar_leap", |b| {
        b.iter(|| lunar_to_solar(black_box(&lunar), tz))
    });
    group.finish();
}

criterion_group!(benches, ephemeris_bench, conversion_bench);
criterion_main!(benches);
