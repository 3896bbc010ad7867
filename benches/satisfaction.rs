use ark_bls12_381::Fr;
use ark_std::{test_rng, UniformRand};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pcd_compliance::r1cs::{R1csSystem, SparseMatrix};
use pcd_compliance::{CompliancePredicate, LocalData, Message, PredicateWitness};

/// Identity-chain predicate of payload width n: out[i] = in[i] for all i.
///
/// z layout: (1, out[0..n], own_type, in_type, arity, in[0..n])
fn identity_predicate(width: usize) -> CompliancePredicate<Fr, R1csSystem<Fr>> {
    let num_constraints = width;
    let num_inputs = width + 1;
    let num_variables = 2 * width + 3;
    let cols = num_variables + 1;

    let mut a = SparseMatrix::new(num_constraints, cols);
    let mut b = SparseMatrix::new(num_constraints, cols);
    let mut c = SparseMatrix::new(num_constraints, cols);
    for i in 0..width {
        a.add_entry(i, width + 4 + i, Fr::from(1u64)); // in[i]
        b.add_entry(i, 0, Fr::from(1u64)); // constant one
        c.add_entry(i, 1 + i, Fr::from(1u64)); // out[i]
    }
    let system = R1csSystem::new(a, b, c, num_constraints, num_inputs, num_variables);

    CompliancePredicate::new(0, 1, system, width, 1, vec![width], 0, 0, true)
}

/// Benchmark: full satisfaction path (adapters + Hadamard check)
fn bench_is_satisfied(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicate_is_satisfied");
    let mut rng = test_rng();

    for log_width in [8, 10, 12].iter() {
        let width = 1usize << log_width;
        let cp = identity_predicate(width);

        let payload: Vec<Fr> = (0..width).map(|_| Fr::rand(&mut rng)).collect();
        let outgoing = Message::new(1, payload.clone());
        let incoming = vec![Message::new(1, payload)];
        let local_data = LocalData::default();
        let witness = PredicateWitness::default();

        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n=2^{}", log_width)),
            &width,
            |bench, _| {
                bench.iter(|| {
                    black_box(cp.is_satisfied(
                        black_box(&outgoing),
                        black_box(&incoming),
                        &local_data,
                        &witness,
                    ))
                });
            },
        );
    }
    group.finish();
}

/// Benchmark: auxiliary-input flattening alone
fn bench_auxiliary_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("auxiliary_input");
    let mut rng = test_rng();

    for log_width in [8, 10, 12].iter() {
        let width = 1usize << log_width;
        let cp = identity_predicate(width);

        let payload: Vec<Fr> = (0..width).map(|_| Fr::rand(&mut rng)).collect();
        let incoming = vec![Message::new(1, payload)];
        let local_data = LocalData::default();
        let witness = PredicateWitness::default();

        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n=2^{}", log_width)),
            &width,
            |bench, _| {
                bench.iter(|| {
                    black_box(cp.auxiliary_input(black_box(&incoming), &local_data, &witness))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_is_satisfied, bench_auxiliary_input);
criterion_main!(benches);
