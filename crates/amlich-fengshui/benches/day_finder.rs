use amlich_fengshui::evaluator::{evaluate_day_for_activity, find_good_days, DaySearchBuilder, Owner};
use amlich_fengshui::report::feng_shui_for_date;
use amlich_fengshui::rules::ActivityType;
use amlich_time::{SolarDate, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn evaluate_bench(c: &mut Criterion) {
    let day = SolarDate::from_ymd(2024, 2, 10).unwrap();
    let owners = [Owner::new("A", 1984), Owner::new("B", 1988)];

    let mut group = c.benchmark_group("evaluate");
    group.bench_function("single_day", |b| {
        b.iter(|| evaluate_day_for_activity(black_box(day), ActivityType::Wedding, Some(1990), &[]))
    });
    group.bench_function("single_day_owners", |b| {
        b.iter(|| evaluate_day_for_activity(black_box(day), ActivityType::Wedding, None, &owners))
    });
    group.bench_function("feng_shui_report", |b| {
        b.iter(|| feng_shui_for_date(black_box(day), TimeZone::VIETNAM))
    });
    group.finish();
}

fn search_bench(c: &mut Criterion) {
    let from = SolarDate::from_ymd(2024, 10, 1).unwrap();
    let to = SolarDate::from_ymd(2024, 10, 31).unwrap();
    let opts = DaySearchBuilder::new(ActivityType::Construction, from, to)
        .with_birth_year(1990)
        .build()
        .unwrap();

    let mut group = c.benchmark_group("search");
    group.bench_function("find_good_days_month", |b| {
        b.iter(|| find_good_days(black_box(&opts)).len())
    });
    group.finish();
}

criterion_group!(benches, evaluate_bench, search_bench);
criterion_main!(benches);
