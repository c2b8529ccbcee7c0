use std::{hint::black_box, str::FromStr};

use criterion::{Criterion, criterion_group, criterion_main};
use vs_version::{VersionString, VersionStrings};

fn parse_version(c: &mut Criterion) {
    let s = "10.4.2.1187";
    c.bench_function(&format!("Parse {s}"), |b| {
        b.iter(|| {
            let _ver = black_box(VersionString::from_str(black_box(s)).unwrap());
        })
    });
}

fn decode_legacy_list(c: &mut Criterion) {
    let json = br#""1.2.3.4;0.1.2.6;22.1.50.0""#;
    c.bench_function("Decode legacy list", |b| {
        b.iter(|| {
            let _ver = black_box(VersionStrings::from_json(black_box(json)).unwrap());
        })
    });
}

fn decode_structured_list(c: &mut Criterion) {
    let list = VersionStrings::from_str("1.2.3.4;0.1.2.6;22.1.50.0").unwrap();
    let json = serde_json::to_vec(&list).unwrap();
    c.bench_function("Decode structured list", |b| {
        b.iter(|| {
            let _ver = black_box(VersionStrings::from_json(black_box(&json)).unwrap());
        })
    });
}

criterion_group!(
    benches,
    parse_version,
    decode_legacy_list,
    decode_structured_list
);
criterion_main!(benches);
