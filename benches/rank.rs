use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use poker_showdown::core::{FiveCardHand, classify, compare};

const HANDS: [(&str, &str); 6] = [
    ("high_card", "5D 8C 9S JS AC"),
    ("one_pair", "5H 5C 6S 7S KD"),
    ("two_pair", "9H 9C 2S 2D KD"),
    ("full_house", "2H 2D 4C 4D 4S"),
    ("flush", "3D 6D 7D TD QD"),
    ("royal_flush", "TH JH QH KH AH"),
];

fn classify_hands(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for (name, s) in HANDS {
        let hand = FiveCardHand::new_from_str(s).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &hand, |b, hand| {
            b.iter(|| classify(hand))
        });
    }
    group.finish();
}

fn compare_scores(c: &mut Criterion) {
    let scores: Vec<_> = HANDS
        .iter()
        .map(|(_, s)| FiveCardHand::new_from_str(s).unwrap().score())
        .collect();
    c.bench_function("compare all pairs", |b| {
        b.iter(|| {
            scores
                .iter()
                .flat_map(|a| scores.iter().map(move |b| compare(a, b)))
                .count()
        })
    });
}

criterion_group!(benches, classify_hands, compare_scores);
criterion_main!(benches);
