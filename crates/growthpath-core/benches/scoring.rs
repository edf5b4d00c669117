use criterion::{black_box, criterion_group, criterion_main, Criterion};

use growthpath_core::analysis::{analyze, AssessmentResults};
use growthpath_core::memory::{long_term_score, working_score, WORD_LIST};
use growthpath_core::model::{MemoryScore, PlanDuration, PlanData, TraitScores};
use growthpath_core::personality::score_answers;
use growthpath_core::plan::weekly_goals;
use growthpath_core::speech::analyze_recording;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_results() -> AssessmentResults {
    let mut rng = StdRng::seed_from_u64(7);
    AssessmentResults {
        personality: Some(TraitScores {
            openness: 80,
            conscientiousness: 40,
            extraversion: 80,
            agreeableness: 60,
            neuroticism: 20,
        }),
        memory: Some(MemoryScore::from_parts(80, 70, 60)),
        speech: analyze_recording(&mut rng, 0, 45).ok(),
    }
}

fn bench_scorers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scorers");

    let answers = vec![Some(4u8); 15];
    group.bench_function("personality", |b| {
        b.iter(|| score_answers(black_box(&answers)))
    });

    let words: Vec<String> = WORD_LIST.iter().map(|w| w.to_uppercase()).collect();
    group.bench_function("long_term", |b| {
        b.iter(|| long_term_score(black_box(&words).iter().map(String::as_str)))
    });

    group.bench_function("working", |b| {
        b.iter(|| working_score(black_box("RMKLPTNS"), black_box("r m k l p t n s")))
    });

    group.bench_function("speech", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| analyze_recording(&mut rng, black_box(3), black_box(42)))
    });

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    let results = sample_results();

    group.bench_function("analyze", |b| b.iter(|| analyze(black_box(&results))));

    if let Ok(analysis) = analyze(&results) {
        let personality = results.personality.unwrap_or(TraitScores::from_fn(|_| 50));
        for duration in PlanDuration::ALL {
            let plan = PlanData::from_analysis(&analysis, duration, 42);
            group.bench_function(format!("weekly_goals/{}", duration.days()), |b| {
                b.iter(|| weekly_goals(black_box(&plan), black_box(&personality)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_scorers, bench_report);
criterion_main!(benches);
