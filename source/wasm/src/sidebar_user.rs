use {
    crate::{
        interface::{
            Role,
            User,
        },
        js::{
            append,
            create_el,
            el_by_id,
            Log,
        },
    },
    std::rc::Rc,
};

pub const FALLBACK_ROLE_LABEL: &str = "Сотрудник";

pub fn role_label(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => return "Администратор",
        Some(Role::Manager) => return "Менеджер",
        Some(Role::User) | None => return FALLBACK_ROLE_LABEL,
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Avatar {
    Image(String),
    /// Single-character initial shown in place of a photo. Never blank.
    Placeholder(char),
}

/// What the user card shows, independent of any document. `render` commits
/// this to the page.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UserCard {
    pub avatar: Avatar,
    pub name: String,
    pub role_label: &'static str,
}

pub fn user_card(user: &User) -> UserCard {
    // Empty strings from the server count as absent
    let first_name = user.first_name.as_deref().filter(|x| !x.is_empty());
    let photo_url = user.photo_url.as_deref().filter(|x| !x.is_empty());
    let avatar;
    if let Some(url) = photo_url {
        avatar = Avatar::Image(url.to_string());
    } else {
        let initial =
            first_name
                .and_then(|x| x.chars().next())
                .or_else(|| user.username.chars().next())
                .unwrap_or('?');
        avatar = Avatar::Placeholder(initial);
    }
    let name;
    if let Some(first_name) = first_name {
        name = format!("{} {}", first_name, user.last_name.as_deref().unwrap_or(""));
    } else {
        name = user.username.clone();
    }
    return UserCard {
        avatar: avatar,
        name: name,
        role_label: role_label(user.role),
    };
}

/// Replaces the contents of `#sidebarUser` (loading skeletons, or a previous
/// render) with the user card. No container, no render.
pub fn render(log: &Rc<dyn Log>, user: &User) {
    if let Err(e) = render_inner(user) {
        log.log(&format!("Error rendering sidebar user card: {}", e));
    }
}

fn render_inner(user: &User) -> Result<(), String> {
    let Some(container) = el_by_id("sidebarUser") else {
        return Ok(());
    };
    let card = user_card(user);
    let avatar_el;
    match &card.avatar {
        Avatar::Image(url) => {
            avatar_el = create_el("img")?;
            avatar_el.set_class_name("user-avatar");
            avatar_el.set_attribute("src", url).map_err(|e| format!("Error setting avatar url: {:?}", e))?;
            avatar_el.set_attribute("alt", "Avatar").map_err(|e| format!("Error setting avatar alt: {:?}", e))?;
        },
        Avatar::Placeholder(initial) => {
            avatar_el = create_el("div")?;
            avatar_el.set_class_name("user-avatar-placeholder");
            avatar_el.set_text_content(Some(&initial.to_string()));
        },
    }
    let details_el = create_el("div")?;
    details_el.set_class_name("user-details");
    let name_el = create_el("div")?;
    name_el.set_class_name("user-name");
    name_el.set_text_content(Some(&card.name));
    let role_el = create_el("div")?;
    role_el.set_class_name("user-role");
    role_el.set_text_content(Some(card.role_label));
    append(&details_el, &name_el)?;
    append(&details_el, &role_el)?;
    container.set_inner_html("");
    append(&container, &avatar_el)?;
    append(&container, &details_el)?;
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> User {
        return User {
            username: username.to_string(),
            first_name: None,
            last_name: None,
            photo_url: None,
            role: None,
            is_superadmin: false,
        };
    }

    #[test]
    fn test_name_first_and_last() {
        let mut u = user("ivan");
        u.first_name = Some("Иван".to_string());
        u.last_name = Some("Петров".to_string());
        assert_eq!(user_card(&u).name, "Иван Петров");
    }

    #[test]
    fn test_name_first_only_keeps_trailing_space() {
        let mut u = user("ivan");
        u.first_name = Some("Иван".to_string());
        assert_eq!(user_card(&u).name, "Иван ");
    }

    #[test]
    fn test_name_falls_back_to_username() {
        let mut u = user("ivan");
        u.last_name = Some("Петров".to_string());
        assert_eq!(user_card(&u).name, "ivan");
    }

    #[test]
    fn test_empty_first_name_counts_as_absent() {
        let mut u = user("ivan");
        u.first_name = Some("".to_string());
        let card = user_card(&u);
        assert_eq!(card.name, "ivan");
        assert_eq!(card.avatar, Avatar::Placeholder('i'));
    }

    #[test]
    fn test_avatar_prefers_photo() {
        let mut u = user("ivan");
        u.first_name = Some("Иван".to_string());
        u.photo_url = Some("https://example.com/a.png".to_string());
        assert_eq!(user_card(&u).avatar, Avatar::Image("https://example.com/a.png".to_string()));
    }

    #[test]
    fn test_initial_prefers_first_name() {
        let mut u = user("ivan");
        u.first_name = Some("Иван".to_string());
        assert_eq!(user_card(&u).avatar, Avatar::Placeholder('И'));
    }

    #[test]
    fn test_initial_from_username() {
        assert_eq!(user_card(&user("ivan")).avatar, Avatar::Placeholder('i'));
    }

    #[test]
    fn test_initial_never_blank() {
        assert_eq!(user_card(&user("")).avatar, Avatar::Placeholder('?'));
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(role_label(Some(Role::Admin)), "Администратор");
        assert_eq!(role_label(Some(Role::Manager)), "Менеджер");
        assert_eq!(role_label(Some(Role::User)), "Сотрудник");
        assert_eq!(role_label(None), FALLBACK_ROLE_LABEL);
    }

    #[test]
    fn test_card_is_deterministic() {
        let mut u = user("ivan");
        u.first_name = Some("Иван".to_string());
        u.role = Some(Role::Admin);
        assert_eq!(user_card(&u), user_card(&u));
    }
}
