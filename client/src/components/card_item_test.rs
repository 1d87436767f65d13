use super::*;
use crate::actions::test_support::{card, user};

#[test]
fn owner_can_delete_own_card() {
    let mine = Card { owner: user("me"), ..card("c1") };
    assert!(card_badges(&mine, "me").can_delete);
    assert!(!card_badges(&mine, "someone").can_delete);
}

#[test]
fn badges_reflect_viewer_like() {
    let mut liked = card("c1");
    liked.likes = vec![user("a"), user("me")];

    let badges = card_badges(&liked, "me");
    assert!(badges.liked);
    assert_eq!(badges.like_count, 2);
    assert!(!card_badges(&liked, "b").liked);
}

#[test]
fn like_button_class_marks_active_state() {
    assert_eq!(like_button_class(false), "card__like");
    assert!(like_button_class(true).contains("card__like_active"));
}
