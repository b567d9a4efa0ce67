//! Array symbol benchmarks.
//!
//! Measures interning, name synthesis and mirror construction as the
//! nesting depth grows.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jsym::{
    ClassStub, ClassSymbol, Modifiers, PrimitiveKind, SymbolFactory, TypeDeclSymbol, TypeSymbol,
};

const DEPTHS: [usize; 4] = [1, 2, 8, 32];

fn string() -> TypeSymbol {
    ClassStub::builder("java.lang.String")
        .modifiers(Modifiers::PUBLIC | Modifiers::FINAL)
        .loadable()
        .build()
        .into()
}

/// Benchmark interning through the factory, cold and warm.
fn bench_interning(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_interning");

    for depth in DEPTHS {
        group.bench_with_input(BenchmarkId::new("cold", depth), &depth, |b, &depth| {
            b.iter(|| {
                let factory = SymbolFactory::new();
                let int = factory.primitive(PrimitiveKind::Int);
                black_box(factory.array_of_dims(&int, depth))
            })
        });

        let factory = SymbolFactory::new();
        let int = factory.primitive(PrimitiveKind::Int);
        factory
            .array_of_dims(&int, depth)
            .expect("warm-up interning");
        group.bench_with_input(BenchmarkId::new("warm", depth), &depth, |b, &depth| {
            b.iter(|| black_box(factory.array_of_dims(&int, depth)))
        });
    }

    group.finish();
}

/// Benchmark the name queries, which walk the component chain.
fn bench_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_names");
    let factory = SymbolFactory::new();
    let string = string();

    for depth in DEPTHS {
        let Ok(array) = factory.array_of_dims(&string, depth) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("binary_name", depth), &array, |b, array| {
            b.iter(|| black_box(array.as_class().map(|class| class.binary_name().into_owned())))
        });
        group.bench_with_input(BenchmarkId::new("canonical_name", depth), &array, |b, array| {
            b.iter(|| {
                black_box(
                    array
                        .as_class()
                        .and_then(|class| class.canonical_name().map(|name| name.into_owned())),
                )
            })
        });
    }

    group.finish();
}

/// Benchmark mirror construction and descriptor rendering.
fn bench_mirror(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_mirror");
    let factory = SymbolFactory::new();
    let string = string();

    for depth in DEPTHS {
        let Ok(array) = factory.array_of_dims(&string, depth) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("jvm_repr", depth), &array, |b, array| {
            b.iter(|| black_box(array.jvm_repr().map(|mirror| mirror.name())))
        });
    }

    group.finish();
}

/// Benchmark the synthetic member lists.
fn bench_members(c: &mut Criterion) {
    let factory = SymbolFactory::new();
    let int = factory.primitive(PrimitiveKind::Int);
    let Ok(ints) = factory.array_of(&int) else {
        return;
    };

    c.bench_function("array_members", |b| {
        b.iter(|| {
            let Some(class) = ints.as_class() else {
                return 0;
            };
            black_box(
                class.declared_fields().len()
                    + class.declared_methods().len()
                    + class.constructors().len(),
            )
        })
    });
}

criterion_group!(
    array_symbol_benches,
    bench_interning,
    bench_names,
    bench_mirror,
    bench_members
);
criterion_main!(array_symbol_benches);
