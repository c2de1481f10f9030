//! Benchmarks for validating generated organization configurations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use org_config_core::{ConfigTree, Validator};
use serde_json::json;

fn generate_config(accounts: usize) -> ConfigTree {
    let ous: Vec<_> = (0..accounts / 10 + 1)
        .map(|i| json!({"name": format!("Unit {}", i)}))
        .collect();
    let accounts: Vec<_> = (0..accounts)
        .map(|i| {
            if i % 2 == 0 {
                json!({
                    "name": format!("account-{}", i),
                    "email": format!("aws+account-{}@acme.example", i),
                    "ou": format!("Unit {}", i / 10)
                })
            } else {
                json!({
                    "name": format!("account-{}", i),
                    "email_template": format!("aws+account-{}-{{env}}@acme.example", i),
                    "ou": format!("Unit {}", i / 10)
                })
            }
        })
        .collect();

    json!({
        "metadata": {"name": "acme-platform", "description": "Benchmark organization"},
        "environments": {
            "dev": {"target": "localstack", "region": "us-east-1"},
            "qa": {"target": "aws", "region": "us-east-1", "profile": "qa"},
            "prod": {"target": "aws", "region": "us-east-1", "profile": "prod"}
        },
        "organization": {
            "feature_set": "ALL",
            "default_region": "us-east-1",
            "allowed_regions": ["us-east-1", "us-west-2", "eu-west-1"]
        },
        "organizational_units": ous,
        "accounts": accounts
    })
}

fn bench_validate(c: &mut Criterion) {
    let validator = Validator::new();
    let mut group = c.benchmark_group("validate");

    for size in [10usize, 100, 1_000] {
        let config = generate_config(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, config| {
            b.iter(|| validator.validate(black_box(config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
