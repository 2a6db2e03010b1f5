use super::*;
use proptest::prelude::*;

fn field(entries: &[(&str, f64)]) -> Vec<Team> {
    entries
        .iter()
        .map(|(name, elo)| Team::new(name, *elo))
        .collect()
}

#[test]
fn test_equal_ratings_predict_even() {
    for rating in [0.0, 1200.0, 1500.0, 2400.0] {
        assert!((predict(rating, rating, 0.0) - 0.5).abs() < 1e-12);
    }
}

#[test]
fn test_predict_400_points_is_ten_to_one() {
    let p = predict(1900.0, 1500.0, 0.0);
    assert!((p - 10.0 / 11.0).abs() < 1e-12);
}

#[test]
fn test_home_advantage_breaks_complement() {
    // Whoever is listed first gets the bonus, so the two views overlap
    let first = predict(1500.0, 1600.0, 100.0);
    let second = predict(1600.0, 1500.0, 100.0);
    assert!((first - 0.5).abs() < 1e-12);
    assert!((first + second - 1.0).abs() > 1e-3);
}

#[test]
fn test_home_advantage_matches_shifted_rating() {
    let with_bonus = predict(1500.0, 1600.0, 100.0);
    let shifted = predict(1600.0, 1600.0, 0.0);
    assert!((with_bonus - shifted).abs() < 1e-12);
}

#[test]
fn test_a_wins_moves_ratings_apart() {
    let (new_a, new_b) = update(1500.0, 1500.0, Outcome::AWins, 20.0, 0.0);
    assert_eq!(new_a, 1510.0);
    assert_eq!(new_b, 1490.0);
    assert_eq!(new_a + new_b, 3000.0);
}

#[test]
fn test_b_wins_mirrors_a_wins() {
    let (new_a, new_b) = update(1500.0, 1500.0, Outcome::BWins, 20.0, 0.0);
    assert_eq!(new_a, 1490.0);
    assert_eq!(new_b, 1510.0);
}

#[test]
fn test_upset_gains_more_than_expected_win() {
    let (favourite_win, _) = update(1700.0, 1500.0, Outcome::AWins, 20.0, 0.0);
    let (_, underdog_win) = update(1700.0, 1500.0, Outcome::BWins, 20.0, 0.0);
    assert!(favourite_win - 1700.0 < underdog_win - 1500.0);
}

#[test]
fn test_draw_between_equals_is_a_no_op() {
    let (new_a, new_b) = update(1500.0, 1500.0, Outcome::Draw, 20.0, 0.0);
    assert_eq!(new_a, 1500.0);
    assert_eq!(new_b, 1500.0);
}

#[test]
fn test_draw_pulls_ratings_together() {
    let (new_a, new_b) = update(1700.0, 1500.0, Outcome::Draw, 20.0, 0.0);
    assert!(new_a < 1700.0);
    assert!(new_b > 1500.0);

    let (new_a, new_b) = update(1400.0, 1650.0, Outcome::Draw, 20.0, 0.0);
    assert!(new_a > 1400.0);
    assert!(new_b < 1650.0);
}

#[test]
fn test_store_rejects_unknown_team() {
    let store = RatingStore::from_teams(&field(&[("Duke", 1800.0)])).unwrap();
    assert_eq!(store.get("Duke"), Ok(1800.0));
    assert_eq!(
        store.get("Kansas"),
        Err(EloError::UnknownTeam("Kansas".to_string()))
    );
}

#[test]
fn test_store_rejects_duplicate_names() {
    let teams = field(&[("Duke", 1800.0), ("Duke", 1700.0)]);
    let err = RatingStore::from_teams(&teams).unwrap_err();
    assert_eq!(err, EloError::DuplicateTeam("Duke".to_string()));
}

#[test]
fn test_system_update_writes_back() {
    let teams = field(&[("Duke", 1500.0), ("UNC", 1500.0)]);
    let mut system = EloSystem::from_teams(&teams, 20.0, 0.0).unwrap();

    let p = system.predict_outcome("Duke", "UNC").unwrap();
    assert!((p - 0.5).abs() < 1e-12);

    system.update_ratings("Duke", "UNC", Outcome::AWins).unwrap();
    assert_eq!(system.rating("Duke"), Ok(1510.0));
    assert_eq!(system.rating("UNC"), Ok(1490.0));
}

#[test]
fn test_system_update_unknown_team_leaves_store_untouched() {
    let teams = field(&[("Duke", 1500.0)]);
    let mut system = EloSystem::from_teams(&teams, 20.0, 0.0).unwrap();

    let err = system
        .update_ratings("Duke", "Gonzaga", Outcome::AWins)
        .unwrap_err();
    assert_eq!(err, EloError::UnknownTeam("Gonzaga".to_string()));
    assert_eq!(system.rating("Duke"), Ok(1500.0));
}

#[test]
fn test_default_system_constants() {
    let system = EloSystem::default();
    assert_eq!(system.k_factor, DEFAULT_K_FACTOR);
    assert_eq!(system.home_advantage, DEFAULT_HOME_ADVANTAGE);
    assert!(system.ratings().is_empty());
}

proptest! {
    #[test]
    fn prop_neutral_predictions_are_complementary(a in 0.0f64..3000.0, b in 0.0f64..3000.0) {
        let sum = predict(a, b, 0.0) + predict(b, a, 0.0);
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_prediction_is_a_probability(a in 0.0f64..3000.0, b in 0.0f64..3000.0, h in -200.0f64..200.0) {
        let p = predict(a, b, h);
        prop_assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn prop_prediction_increases_with_rating(a in 0.0f64..3000.0, b in 0.0f64..3000.0, step in 1.0f64..200.0) {
        prop_assert!(predict(a + step, b, 0.0) > predict(a, b, 0.0));
    }

    #[test]
    fn prop_win_update_is_zero_sum(a in 500.0f64..2500.0, b in 500.0f64..2500.0) {
        let (new_a, new_b) = update(a, b, Outcome::AWins, 20.0, 0.0);
        prop_assert!(new_a > a);
        prop_assert!(new_b < b);
        prop_assert!(((new_a + new_b) - (a + b)).abs() < 1e-9);
    }
}
