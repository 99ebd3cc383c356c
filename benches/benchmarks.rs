//! Benchmarks for galext field and Galois-group operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use galext::{
    CyclotomicExtension, FieldExtension, GaloisCorrespondence, PolyRing, PrimeField, Ring, GF,
};

fn bench_prime_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("PrimeField Operations");

    let f = PrimeField::new(998_244_353).unwrap();
    let a = 123_456_789u64;
    let b = 987_654_321u64 % 998_244_353;

    group.bench_function("add", |bencher| {
        bencher.iter(|| f.add(black_box(&a), black_box(&b)))
    });

    group.bench_function("mul", |bencher| {
        bencher.iter(|| f.mul(black_box(&a), black_box(&b)))
    });

    group.bench_function("inverse", |bencher| {
        use galext::Field;
        bencher.iter(|| f.inverse(black_box(&a)))
    });

    group.bench_function("pow_large", |bencher| {
        bencher.iter(|| f.pow(black_box(&a), 998_244_352))
    });

    group.finish();
}

fn bench_poly(c: &mut Criterion) {
    let mut group = c.benchmark_group("Poly Operations");

    let f = PrimeField::new(998_244_353).unwrap();
    let ring = PolyRing::new(f);
    let p_small = ring.poly((1..=16).collect());
    let p_medium = ring.poly((1..=64).collect());

    group.bench_function("mul_16x16", |bencher| {
        bencher.iter(|| ring.mul(black_box(&p_small), black_box(&p_small)))
    });

    group.bench_function("mul_64x64", |bencher| {
        bencher.iter(|| ring.mul(black_box(&p_medium), black_box(&p_medium)))
    });

    group.bench_function("div_rem_64_by_16", |bencher| {
        bencher.iter(|| ring.div_rem(black_box(&p_medium), black_box(&p_small)))
    });

    group.bench_function("eval_64", |bencher| {
        bencher.iter(|| ring.eval(black_box(&p_medium), black_box(&42)))
    });

    group.finish();
}

fn bench_irreducibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("Irreducibility");

    for (p, n) in [(2u64, 8usize), (3, 5), (7, 4)] {
        let ring = PolyRing::new(PrimeField::new(p).unwrap());
        group.bench_with_input(
            BenchmarkId::new("first_irreducible", format!("GF({p})_deg{n}")),
            &n,
            |bencher, &n| bencher.iter(|| ring.first_irreducible(black_box(n))),
        );
    }

    // x^4 + x + 1 over GF(2)
    let ring = PolyRing::new(PrimeField::new(2).unwrap());
    let f = ring.poly(vec![1, 1, 0, 0, 1]);
    group.bench_function("is_irreducible_deg4", |bencher| {
        bencher.iter(|| ring.is_irreducible(black_box(&f)))
    });

    group.finish();
}

fn bench_extension(c: &mut Criterion) {
    let mut group = c.benchmark_group("FieldExtension Operations");

    // x^2 - 3 over GF(998244353); 3 is not a QR there
    let p = 998_244_353;
    let ext = FieldExtension::new(PrimeField::new(p).unwrap(), vec![p - 3, 0, 1]).unwrap();
    let a = ext.element(vec![123, 456]);
    let b = ext.element(vec![789, 101_112]);

    group.bench_function("mul", |bencher| {
        bencher.iter(|| ext.mul(black_box(&a), black_box(&b)))
    });

    group.bench_function("reciprocal", |bencher| {
        bencher.iter(|| ext.reciprocal(black_box(&a)))
    });

    group.bench_function("pow_1000", |bencher| {
        bencher.iter(|| ext.pow(black_box(&a), 1000))
    });

    let gf256 = GF::new(2, 8).unwrap();
    let x = gf256.element(&[1, 1, 0, 1, 0, 0, 1]);
    group.bench_function("gf256_frobenius", |bencher| {
        bencher.iter(|| gf256.frobenius(black_box(&x)))
    });

    group.finish();
}

fn bench_galois(c: &mut Criterion) {
    let mut group = c.benchmark_group("Galois");
    group.sample_size(20);

    for (p, n) in [(2u64, 4usize), (2, 6), (3, 4)] {
        let gf = GF::new(p, n).unwrap();
        let label = gf.to_string();

        group.bench_with_input(BenchmarkId::new("galois_group", &label), &gf, |bencher, gf| {
            bencher.iter(|| gf.galois_group())
        });

        let galois = gf.galois_group().unwrap();
        group.bench_with_input(
            BenchmarkId::new("verify_correspondence", &label),
            &galois,
            |bencher, galois| bencher.iter(|| GaloisCorrespondence::new(galois).verify()),
        );
    }

    group.bench_function("cyclotomic_8_over_3", |bencher| {
        bencher.iter(|| {
            let cyc = CyclotomicExtension::new(black_box(8), black_box(3)).unwrap();
            cyc.primitive_roots_of_unity()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_prime_field,
    bench_poly,
    bench_irreducibility,
    bench_extension,
    bench_galois,
);
criterion_main!(benches);
