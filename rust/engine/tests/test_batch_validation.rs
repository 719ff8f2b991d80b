use hilo_engine::cards::Rank;
use hilo_engine::engine::{apply_batch, reset, validate_batch};
use hilo_engine::errors::{CapacityViolation, CountError};
use hilo_engine::shoe::ShoeState;

fn deal(shoe: &mut ShoeState, tokens: &[&str]) {
    let batch = validate_batch(shoe, tokens).expect("batch should validate");
    apply_batch(shoe, batch).expect("batch should apply");
}

#[test]
fn basic_counting_with_eight_decks() {
    let mut shoe = ShoeState::new(8).unwrap();
    assert_eq!(shoe.total_cards(), 416);
    assert_eq!(shoe.max_per_rank(), 32);
    deal(&mut shoe, &["A", "K", "10", "7", "9", "5", "2"]);
    assert_eq!(shoe.running_count(), -1);
    assert_eq!(shoe.cards_dealt(), 7);
}

#[test]
fn thirty_two_aces_fit_but_the_thirty_third_is_rejected() {
    let mut shoe = ShoeState::new(8).unwrap();
    for _ in 0..4 {
        deal(&mut shoe, &["A"; 8]);
    }
    assert_eq!(shoe.rank_count(Rank::Ace), 32);

    let err = validate_batch(&shoe, &["A"]).unwrap_err();
    assert_eq!(
        err,
        CountError::CapacityExceeded {
            violations: vec![CapacityViolation {
                rank: Rank::Ace,
                attempted: 33,
                max: 32,
            }]
        }
    );
    assert!(err.to_string().contains("would exceed max for A"));
    assert_eq!(shoe.rank_count(Rank::Ace), 32);
}

#[test]
fn capacity_rejection_is_atomic() {
    let mut shoe = ShoeState::new(8).unwrap();
    deal(&mut shoe, &["A"; 30]);
    let before = shoe.clone();

    let result = validate_batch(&shoe, &["A", "A", "A"]);
    assert!(matches!(result, Err(CountError::CapacityExceeded { .. })));
    assert_eq!(shoe, before);
    assert_eq!(shoe.running_count(), -30);
    assert_eq!(shoe.rank_count(Rank::Ace), 30);
    assert_eq!(shoe.cards_dealt(), 30);
}

#[test]
fn invalid_token_rejects_whole_batch() {
    let mut shoe = ShoeState::new(6).unwrap();
    deal(&mut shoe, &["5"]);
    let before = shoe.clone();

    let err = validate_batch(&shoe, &["2", "3", "X", "Z"]).unwrap_err();
    assert_eq!(
        err,
        CountError::InvalidCard {
            token: "X".to_string()
        }
    );
    assert_eq!(shoe, before);
}

#[test]
fn mixed_batch_names_only_the_full_rank() {
    let mut shoe = ShoeState::new(8).unwrap();
    deal(&mut shoe, &["K"; 32]);

    let err = validate_batch(&shoe, &["2", "3", "K"]).unwrap_err();
    match &err {
        CountError::CapacityExceeded { violations } => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].rank, Rank::King);
        }
        other => panic!("expected CapacityExceeded, got {:?}", other),
    }
    assert!(err.to_string().contains('K'));

    deal(&mut shoe, &["2", "3", "4"]);
    assert_eq!(shoe.rank_count(Rank::Two), 1);
    assert_eq!(shoe.rank_count(Rank::Three), 1);
    assert_eq!(shoe.rank_count(Rank::Four), 1);
    assert_eq!(shoe.rank_count(Rank::King), 32);
}

#[test]
fn every_offending_rank_is_listed() {
    let shoe = ShoeState::new(1).unwrap();
    let mut tokens = vec!["A"; 5];
    tokens.extend(["9"; 6]);
    tokens.push("2");
    let err = validate_batch(&shoe, &tokens).unwrap_err();
    let CountError::CapacityExceeded { violations } = err else {
        panic!("expected CapacityExceeded");
    };
    let ranks: Vec<Rank> = violations.iter().map(|v| v.rank).collect();
    assert_eq!(ranks, vec![Rank::Nine, Rank::Ace]);
    assert_eq!(violations[0].attempted, 6);
    assert_eq!(violations[1].attempted, 5);
}

#[test]
fn ten_aliases_count_as_tens() {
    let mut shoe = ShoeState::new(8).unwrap();
    let batch = validate_batch(&shoe, &["t", " T ", "10"]).unwrap();
    assert_eq!(batch.ranks(), &[Rank::Ten, Rank::Ten, Rank::Ten]);
    apply_batch(&mut shoe, batch).unwrap();
    assert_eq!(shoe.rank_count(Rank::Ten), 3);
    assert_eq!(shoe.running_count(), -3);
}

#[test]
fn apply_reports_per_card_outcomes_and_tallies() {
    let mut shoe = ShoeState::new(2).unwrap();
    let batch = validate_batch(&shoe, &["2", "8", "Q", "A", "6"]).unwrap();
    assert_eq!(batch.len(), 5);
    let result = apply_batch(&mut shoe, batch).unwrap();
    assert_eq!(result.per_card.len(), 5);
    assert_eq!(result.per_card[2].rank, Rank::Queen);
    assert_eq!(result.per_card[2].value, -1);
    assert_eq!((result.hot, result.cold, result.neutral), (2, 2, 1));
    assert_eq!(result.count_delta(), 0);
    assert!(result.exhausted_tokens.is_empty());
    assert!(result.exhaustion().is_none());
}

#[test]
fn stale_batch_is_refused_without_mutation() {
    let mut shoe = ShoeState::new(1).unwrap();
    let first = validate_batch(&shoe, &["A", "A", "A"]).unwrap();
    let second = validate_batch(&shoe, &["A", "A"]).unwrap();
    apply_batch(&mut shoe, first).unwrap();
    let before = shoe.clone();

    assert_eq!(apply_batch(&mut shoe, second), Err(CountError::StaleBatch));
    assert_eq!(shoe, before);
    assert_eq!(shoe.rank_count(Rank::Ace), 3);
}

#[test]
fn batch_validated_on_another_shoe_is_refused() {
    let roomy = ShoeState::new(8).unwrap();
    let mut single = ShoeState::new(1).unwrap();
    let batch = validate_batch(&roomy, &["A"; 10]).unwrap();

    assert_eq!(apply_batch(&mut single, batch), Err(CountError::StaleBatch));
    assert_eq!(single.rank_count(Rank::Ace), 0);
    assert_eq!(single.cards_dealt(), 0);
}

#[test]
fn shoes_at_the_same_generation_do_not_share_batches() {
    let mut aces = ShoeState::new(1).unwrap();
    let mut twos = ShoeState::new(1).unwrap();
    deal(&mut aces, &["A"; 4]);
    deal(&mut twos, &["2"; 4]);

    let batch = validate_batch(&twos, &["A"; 4]).unwrap();
    assert_eq!(apply_batch(&mut aces, batch), Err(CountError::StaleBatch));
    assert_eq!(aces.rank_count(Rank::Ace), aces.max_per_rank());
    assert_eq!(aces.cards_dealt(), 4);
}

#[test]
fn batch_validated_on_a_clone_is_refused_by_the_original() {
    let mut shoe = ShoeState::new(1).unwrap();
    let copy = shoe.clone();
    let batch = validate_batch(&copy, &["K"]).unwrap();
    assert_eq!(apply_batch(&mut shoe, batch), Err(CountError::StaleBatch));
    assert_eq!(shoe, copy);
}

#[test]
fn empty_batch_is_a_no_op() {
    let mut shoe = ShoeState::new(1).unwrap();
    let empty: [&str; 0] = [];
    let batch = validate_batch(&shoe, &empty).unwrap();
    assert!(batch.is_empty());
    let result = apply_batch(&mut shoe, batch).unwrap();
    assert!(result.per_card.is_empty());
    assert_eq!(shoe.cards_dealt(), 0);
}

#[test]
fn reset_clears_rank_counts() {
    let mut shoe = ShoeState::new(8).unwrap();
    deal(&mut shoe, &["A"; 20]);
    assert_eq!(shoe.rank_count(Rank::Ace), 20);

    reset(&mut shoe);
    assert_eq!(shoe.rank_count(Rank::Ace), 0);
    assert_eq!(shoe.running_count(), 0);
    assert_eq!(shoe.cards_dealt(), 0);
    assert_eq!(shoe.deck_count(), 8);
    assert!(shoe.rank_counts().all(|(_, n)| n == 0));

    assert!(validate_batch(&shoe, &["A"; 10]).is_ok());
}

#[test]
fn full_single_deck_then_reset() {
    let mut shoe = ShoeState::new(1).unwrap();
    for label in ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"] {
        deal(&mut shoe, &[label; 4]);
    }
    assert!(shoe.is_exhausted());
    assert_eq!(shoe.running_count(), 0);
    // every rank is at its limit, so any further card is a capacity error
    assert!(matches!(
        validate_batch(&shoe, &["7"]),
        Err(CountError::CapacityExceeded { .. })
    ));

    reset(&mut shoe);
    assert!(!shoe.is_exhausted());
    deal(&mut shoe, &["7"]);
    assert_eq!(shoe.cards_dealt(), 1);
}
