criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        training_kuhn_external,
        training_kuhn_chance,
        training_deck_external,
        evaluating_kuhn_exact,
        evaluating_deck_exact,
        encoding_deck_infokeys,
        writing_deck_snapshot,
}

fn kuhn() -> Trainer<Poker, Encoder> {
    Trainer::new(Poker::new(Rules::kuhn()).unwrap(), Encoder::Identity, SEED)
}

fn deck() -> Trainer<Poker, Encoder> {
    Trainer::new(Poker::new(Rules::default()).unwrap(), Encoder::Identity, SEED)
}

fn training_kuhn_external(c: &mut criterion::Criterion) {
    c.bench_function("train 1000 external Kuhn iterations", |b| {
        let mut trainer = kuhn();
        b.iter(|| trainer.train_external(1_000).unwrap())
    });
}

fn training_kuhn_chance(c: &mut criterion::Criterion) {
    c.bench_function("train 1000 chance Kuhn iterations", |b| {
        let mut trainer = kuhn();
        b.iter(|| trainer.train_chance(1_000).unwrap())
    });
}

fn training_deck_external(c: &mut criterion::Criterion) {
    c.bench_function("train 100 external 3x3x3 iterations", |b| {
        let mut trainer = deck();
        b.iter(|| trainer.train_external(100).unwrap())
    });
}

fn evaluating_kuhn_exact(c: &mut criterion::Criterion) {
    let mut trainer = kuhn();
    trainer.train_external(10_000).unwrap();
    c.bench_function("evaluate Kuhn over every deal", |b| {
        b.iter(|| trainer.evaluate().unwrap())
    });
}

fn evaluating_deck_exact(c: &mut criterion::Criterion) {
    let mut trainer = deck();
    trainer.train_external(1_000).unwrap();
    c.bench_function("evaluate 3x3x3 over every deal", |b| {
        b.iter(|| trainer.evaluate().unwrap())
    });
}

fn encoding_deck_infokeys(c: &mut criterion::Criterion) {
    let game = Poker::new(Rules::default()).unwrap();
    let ref mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(SEED);
    let spot = game.sample(rng);
    c.bench_function("encode a 3x3x3 root InfoKey", |b| {
        b.iter(|| Encoder::Strength.info_key(&game, &spot).unwrap())
    });
}

fn writing_deck_snapshot(c: &mut criterion::Criterion) {
    let mut trainer = deck();
    trainer.train_external(1_000).unwrap();
    c.bench_function("write a 3x3x3 snapshot to memory", |b| {
        b.iter(|| {
            let mut bytes = Vec::<u8>::new();
            trainer.store().write(&mut bytes).unwrap();
            bytes
        })
    });
}

use abscfr::*;
