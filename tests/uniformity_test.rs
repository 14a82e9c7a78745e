mod common;

use common::Quiet;
use lucky_draw::audio::SilentBackend;
use lucky_draw::core::{NoEffects, StdSelector, Tally};
use lucky_draw::engine::SequenceController;
use lucky_draw::types::{RANGE_MAX, RANGE_MIN};

#[tokio::test(start_paused = true)]
async fn ten_thousand_sequences_reveal_uniformly() {
    let mut c = SequenceController::new(Quiet, NoEffects, SilentBackend, StdSelector::seeded(2024));
    let mut tally = Tally::new();

    for _ in 0..10_000 {
        let pick = c.trigger().await.unwrap();
        assert!((RANGE_MIN..=RANGE_MAX).contains(&pick));
        assert!(tally.record(pick));
    }

    assert_eq!(tally.total(), 10_000);
    assert!(
        tally.looks_uniform(),
        "chi-square {} over counts {:?}",
        tally.chi_square(),
        tally.counts()
    );
    for n in RANGE_MIN..=RANGE_MAX {
        assert!(tally.count(n) > 0, "gift {n} never revealed");
    }
}

#[tokio::test(start_paused = true)]
async fn same_seed_replays_the_same_draws() {
    async fn draws(seed: u64) -> Vec<u8> {
        let mut c =
            SequenceController::new(Quiet, NoEffects, SilentBackend, StdSelector::seeded(seed));
        let mut out = Vec::new();
        for _ in 0..20 {
            out.push(c.trigger().await.unwrap());
        }
        out
    }

    assert_eq!(draws(7).await, draws(7).await);
    assert_ne!(draws(7).await, draws(8).await);
}
