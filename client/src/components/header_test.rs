use super::*;

#[test]
fn home_shows_account_control() {
    assert_eq!(header_control("/"), HeaderControl::Account);
}

#[test]
fn sign_in_links_to_sign_up() {
    assert_eq!(header_control("/signin"), HeaderControl::Link { href: "/signup", label: "Регистрация" });
}

#[test]
fn sign_up_links_to_sign_in() {
    assert_eq!(header_control("/signup"), HeaderControl::Link { href: "/signin", label: "Войти" });
}

#[test]
fn unknown_path_shows_nothing() {
    assert_eq!(header_control("/cards/42"), HeaderControl::Empty);
}
