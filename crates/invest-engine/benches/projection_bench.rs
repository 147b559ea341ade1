use criterion::{black_box, criterion_group, criterion_main, Criterion};
use estate_core::{ZoneId, ZoneProfile};

fn costa_zone() -> ZoneProfile {
    ZoneProfile {
        id: ZoneId("costa".into()),
        name: "Costa Atlántica".into(),
        appreciation_rate_pct: 7.1,
        rental_yield_pct: 5.1,
    }
}

fn bench_project(c: &mut Criterion) {
    let zone = costa_zone();
    c.bench_function("project 5M x 20y", |b| {
        b.iter(|| {
            let p = invest_engine::project(black_box(5_000_000.0), black_box(20), &zone);
            let _ = black_box(p);
        })
    });
    c.bench_function("project + polyline 40y", |b| {
        b.iter(|| {
            let p = invest_engine::project(black_box(500_000.0), black_box(40), &zone).unwrap();
            let _ = black_box(invest_engine::chart::value_polyline(&p.series, 400.0, 200.0));
        })
    });
}

criterion_group!(benches, bench_project);
criterion_main!(benches);
