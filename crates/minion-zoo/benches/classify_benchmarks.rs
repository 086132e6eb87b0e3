//! Classification throughput benchmarks.
//!
//! Measures the per-call cost of each policy and of a full simulation run.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fastrand::Rng;
use minion_zoo::{
    AllTheSingleLabelsMinion, BinaryLabel, ExpertMinion, NoisyMinion, RandomMinion, Simulation,
    ZooConfig, random_subjects,
};

const CONFIG: &str = r#"{
    "labels": [0, 1],
    "seed": 1,
    "minions": [
        { "name": "expert", "policy": "expert" },
        { "name": "ones", "policy": "single_label", "label": 1 },
        { "name": "random", "policy": "random" },
        { "name": "noisy", "policy": "noisy", "confusion_matrix": [0.9, 0.7] }
    ]
}"#;

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let expert = ExpertMinion::new(0, "expert");
    group.bench_function("expert", |b| {
        b.iter(|| expert.classify(black_box(17), black_box(1)))
    });

    let single = AllTheSingleLabelsMinion::new(1, "ones", 1);
    group.bench_function("single_label", |b| b.iter(|| single.classify(black_box(17))));

    let mut random = RandomMinion::new(2, "random", (0..10).collect(), Rng::with_seed(1))
        .expect("non-empty labels");
    group.bench_function("random", |b| b.iter(|| random.classify(black_box(17))));

    let mut noisy =
        NoisyMinion::new(3, "noisy", [0.9, 0.7], Rng::with_seed(1)).expect("valid matrix");
    group.bench_function("noisy", |b| {
        b.iter(|| noisy.classify(black_box(17), black_box(BinaryLabel::One)))
    });

    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");
    let config = ZooConfig::from_json(CONFIG).expect("valid config");

    for subjects in [100, 1_000, 10_000] {
        let gold = random_subjects(subjects, &config.labels, &mut Rng::with_seed(2))
            .expect("non-empty labels");
        group.bench_with_input(BenchmarkId::from_parameter(subjects), &gold, |b, gold| {
            b.iter(|| {
                let mut roster = config.build_roster().expect("valid roster");
                Simulation::run(&mut roster, gold).expect("simulation")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_policies, bench_simulation);
criterion_main!(benches);
