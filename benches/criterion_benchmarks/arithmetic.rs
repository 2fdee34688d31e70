use criterion::{black_box, Criterion, criterion_group, criterion_main};

use exact_ratio::Rational;

/// A value whose numerator and denominator span several big integer digits.
fn large() -> Rational {
    "912016490186296920119201192141970416029/1824032980372593840238402384283940832057"
        .parse().unwrap()
}

pub fn add_small(c: &mut Criterion) {
    let left = Rational::new(1, 2).unwrap();
    let right = Rational::new(1, 3).unwrap();

    c.bench_function("add with small operands", |b| b.iter(|| {
        black_box(&left) + black_box(&right)
    }));
}

pub fn add_large(c: &mut Criterion) {
    let left = large();
    let right = Rational::new(1, 3).unwrap();

    c.bench_function("add with a large operand", |b| b.iter(|| {
        black_box(&left) + black_box(&right)
    }));
}

pub fn multiply_large(c: &mut Criterion) {
    let left = large();
    let right = large();

    c.bench_function("multiply with large operands", |b| b.iter(|| {
        black_box(&left) * black_box(&right)
    }));
}

pub fn compare_large(c: &mut Criterion) {
    let left = large();
    let right = Rational::new(1, 2).unwrap();

    c.bench_function("compare a large and a small value", |b| b.iter(|| {
        black_box(&left) < black_box(&right)
    }));
}

pub fn parse_large(c: &mut Criterion) {
    c.bench_function("parse a large value", |b| b.iter(|| {
        black_box("912016490186296920119201192141970416029/1824032980372593840238402384283940832058")
            .parse::<Rational>()
    }));
}

criterion_group!(arithmetic,
    add_small,
    add_large,
    multiply_large,
    compare_large,
    parse_large,
);
criterion_main!(arithmetic);
