use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use enumkit_kernel::EnumMap;
use enumkit_kernel::domain::{Declaration, EnumDomain, Enumeration};
use std::collections::HashMap;
use std::hint::black_box;

#[derive(Debug)]
struct Hour;

macro_rules! hours {
    ($($name:literal),+ $(,)?) => {
        &[$(Declaration::new($name, || Hour)),+]
    };
}

impl Enumeration for Hour {
    const TYPE_NAME: &'static str = "Hour";
    const DECLARATIONS: &'static [Declaration<Self>] = hours![
        "H00", "H01", "H02", "H03", "H04", "H05", "H06", "H07", "H08", "H09", "H10", "H11",
        "H12", "H13", "H14", "H15", "H16", "H17", "H18", "H19", "H20", "H21", "H22", "H23",
    ];
}

fn bench_put_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_get");
    let hours = Hour::values();
    group.throughput(Throughput::Elements(hours.len() as u64));

    group.bench_function(BenchmarkId::new("enum_map", hours.len()), |b| {
        b.iter(|| {
            let mut map = EnumMap::<Hour, u64>::new(false);
            for &hour in hours {
                map.put(hour, hour.ordinal() as u64).unwrap();
            }
            for &hour in hours {
                black_box(map.get(hour).unwrap());
            }
        });
    });

    group.bench_function(BenchmarkId::new("hash_map", hours.len()), |b| {
        b.iter(|| {
            let mut map = HashMap::with_capacity(hours.len());
            for &hour in hours {
                map.insert(hour, hour.ordinal() as u64);
            }
            for hour in hours {
                black_box(map.get(hour));
            }
        });
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let mut map = EnumMap::<Hour, u64>::new(false);
    for &hour in Hour::values().iter().step_by(2) {
        map.put(hour, 1 << hour.ordinal()).unwrap();
    }
    let json = serde_json::to_string(&map).unwrap();

    group.bench_with_input(BenchmarkId::new("to_json", map.len()), &map, |b, m| {
        b.iter(|| serde_json::to_string(m).unwrap());
    });
    group.bench_with_input(BenchmarkId::new("from_json", map.len()), &json, |b, j| {
        b.iter(|| serde_json::from_str::<EnumMap<Hour, u64>>(j).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_put_get, bench_serialize);
criterion_main!(benches);
