use crate::domain::scoring::compute_scores;
use crate::domain::sheet_types::Category;

#[test]
fn six_ones() {
    let s = compute_scores([1, 1, 1, 1, 1, 1]);
    assert_eq!(s.score(Category::Ones), 6);
    // base 6 + 30
    assert_eq!(s.score(Category::Trilling), 36);
    assert_eq!(s.score(Category::FullHouse), 0);
    assert_eq!(s.score(Category::Poker), 56);
    assert_eq!(s.score(Category::Jamb), 150);
    assert_eq!(s.score(Category::Straight), 0);
    assert_eq!(s.score(Category::Max), 6);
    assert_eq!(s.score(Category::Min), 5);
}

#[test]
fn full_house_twos_over_threes() {
    let s = compute_scores([2, 2, 2, 3, 3, 6]);
    assert_eq!(s.score(Category::Twos), 6);
    assert_eq!(s.score(Category::Threes), 6);
    assert_eq!(s.score(Category::Sixes), 6);
    assert_eq!(s.score(Category::Trilling), 36);
    assert_eq!(s.score(Category::FullHouse), 52);
    assert_eq!(s.score(Category::Poker), 0);
    assert_eq!(s.score(Category::Straight), 0);
    assert_eq!(s.score(Category::Jamb), 0);
}

#[test]
fn six_distinct_faces_is_full_straight() {
    let s = compute_scores([1, 2, 3, 4, 5, 6]);
    assert_eq!(s.score(Category::Straight), 100);
    assert_eq!(s.score(Category::Max), 21);
    assert_eq!(s.score(Category::Min), 15);
    assert_eq!(s.score(Category::Trilling), 0);
}

#[test]
fn low_straight() {
    let s = compute_scores([1, 2, 3, 4, 5, 5]);
    assert_eq!(s.score(Category::Straight), 45);
    assert_eq!(s.score(Category::Fives), 10);
}

#[test]
fn high_straight() {
    let s = compute_scores([6, 2, 3, 4, 5, 2]);
    assert_eq!(s.score(Category::Straight), 50);
}

#[test]
fn four_distinct_is_no_straight() {
    let s = compute_scores([1, 2, 3, 4, 4, 4]);
    assert_eq!(s.score(Category::Straight), 0);
}

#[test]
fn gap_in_five_distinct_is_no_straight() {
    // {1,2,3,4,6} has five faces but neither run
    let s = compute_scores([1, 2, 3, 4, 6, 6]);
    assert_eq!(s.score(Category::Straight), 0);
}

#[test]
fn five_of_a_kind() {
    let s = compute_scores([4, 4, 4, 4, 4, 2]);
    assert_eq!(s.score(Category::Fours), 20);
    assert_eq!(s.score(Category::Trilling), 50);
    assert_eq!(s.score(Category::Poker), 70);
    assert_eq!(s.score(Category::Jamb), 80);
    // Only one other die, so no pair for the full house
    assert_eq!(s.score(Category::FullHouse), 0);
}

#[test]
fn five_ones_flat_jamb() {
    let s = compute_scores([1, 1, 1, 1, 1, 6]);
    assert_eq!(s.score(Category::Jamb), 100);
}

#[test]
fn six_of_a_kind_flat_jamb() {
    let s = compute_scores([5, 5, 5, 5, 5, 5]);
    assert_eq!(s.score(Category::Jamb), 100);
    assert_eq!(s.score(Category::Poker), 80);
}

#[test]
fn two_triples_last_face_wins() {
    let s = compute_scores([2, 2, 2, 5, 5, 5]);
    assert_eq!(s.score(Category::Trilling), 45);
    assert_eq!(s.score(Category::FullHouse), 0);
}

#[test]
fn four_and_pair_full_house() {
    let s = compute_scores([3, 3, 3, 3, 6, 6]);
    // base 12 + 6*2 + 40
    assert_eq!(s.score(Category::FullHouse), 64);
    assert_eq!(s.score(Category::Poker), 62);
}

#[test]
fn unrolled_dice_score_nothing() {
    let s = compute_scores([0; 6]);
    assert!(s.as_array().iter().all(|&v| v == 0));
    assert_eq!(s.achieved().count(), 0);
}

#[test]
fn achieved_lists_non_zero_rows_in_order() {
    let s = compute_scores([2, 2, 2, 3, 3, 6]);
    let rows: Vec<Category> = s.achieved().map(|(c, _)| c).collect();
    assert_eq!(
        rows,
        vec![
            Category::Twos,
            Category::Threes,
            Category::Sixes,
            Category::Max,
            Category::Min,
            Category::Trilling,
            Category::FullHouse,
        ]
    );
}
