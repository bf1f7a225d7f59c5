use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linechart_core::{ChartEngine, Sample, YValue};

fn build_samples(n: usize) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        // Every 97th sample is missing to exercise segment splitting.
        if i % 97 == 0 {
            samples.push(Sample::missing(x));
        } else {
            let y = (x * 0.01).sin() * 10.0 + x * 0.0001;
            samples.push(Sample::new(x, y));
        }
    }
    samples
}

fn build_vector_samples(n: usize, k: usize) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        let slots = (0..k)
            .map(|j| {
                if (i + j) % 53 == 0 {
                    None
                } else {
                    Some((x * 0.02 + j as f64).cos() * 5.0)
                }
            })
            .collect::<Vec<_>>();
        samples.push(Sample::new(x, YValue::vector(slots)));
    }
    samples
}

fn bench_plan(c: &mut Criterion) {
    let engine = ChartEngine::new();

    let mut group = c.benchmark_group("render_plan");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("scalar_{n}"), |b| {
            let samples = build_samples(n);
            b.iter(|| {
                let plan = engine.render("bench", &samples).expect("plan");
                black_box(plan);
            });
        });
        group.bench_function(format!("vector3_{n}"), |b| {
            let samples = build_vector_samples(n, 3);
            b.iter(|| {
                let plan = engine.render("bench", &samples).expect("plan");
                black_box(plan);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
