use super::*;
use crate::net::types::User;

fn card(id: &str) -> Card {
    Card {
        id: id.to_owned(),
        name: format!("place {id}"),
        link: format!("https://example.test/{id}.jpg"),
        owner: User::default(),
        likes: Vec::new(),
        created_at: None,
    }
}

fn ids(state: &CardsState) -> Vec<&str> {
    state.items.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn cards_default_empty() {
    assert!(CardsState::default().items.is_empty());
}

#[test]
fn load_keeps_server_order() {
    let mut state = CardsState::default();
    state.load(vec![card("b"), card("a"), card("c")]);
    assert_eq!(ids(&state), ["b", "a", "c"]);
}

#[test]
fn prepend_puts_new_card_first() {
    let mut state = CardsState::default();
    state.load(vec![card("a"), card("b")]);
    state.prepend(card("new"));
    assert_eq!(ids(&state), ["new", "a", "b"]);
}

#[test]
fn remove_filters_by_id() {
    let mut state = CardsState::default();
    state.load(vec![card("a"), card("b"), card("c")]);
    state.remove("b");
    assert_eq!(ids(&state), ["a", "c"]);
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut state = CardsState::default();
    state.load(vec![card("a")]);
    state.remove("zzz");
    assert_eq!(ids(&state), ["a"]);
}

#[test]
fn replace_keeps_position() {
    let mut state = CardsState::default();
    state.load(vec![card("a"), card("b"), card("c")]);
    let mut liked = card("b");
    liked.likes.push(User { id: "u1".to_owned(), ..User::default() });
    state.replace(liked.clone());
    assert_eq!(ids(&state), ["a", "b", "c"]);
    assert_eq!(state.items[1], liked);
}

#[test]
fn replace_unknown_card_does_not_insert() {
    let mut state = CardsState::default();
    state.load(vec![card("a")]);
    state.replace(card("ghost"));
    assert_eq!(ids(&state), ["a"]);
}
