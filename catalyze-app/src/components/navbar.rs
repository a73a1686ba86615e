use catalyze_core::{Component, Element, ElementKind};

#[derive(Debug, Clone)]
pub struct NavItem {
    pub text: String,
    pub path: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NavbarProps {
    pub logo_text: Option<String>,
    pub items: Vec<NavItem>,
}

/// Top navigation bar. Each link is numbered after the key that activates it
/// and carries its target path in an `href` attribute so [`set_active`]
/// can highlight the current route.
///
/// [`set_active`]: Navbar::set_active
pub struct Navbar {
    props: NavbarProps,
    root: Element,
}

impl Navbar {
    pub fn new(props: NavbarProps) -> Self {
        Self {
            props,
            root: Element::new(ElementKind::Row, Some("navbar")),
        }
    }

    /// Mark the link matching `path` as active and clear the rest.
    pub fn set_active(&self, path: &str) {
        for link in self.root.find_all_by_class("navbar-link") {
            if link.attr("href").as_deref() == Some(path) {
                link.add_class("active");
            } else {
                link.remove_class("active");
            }
        }
    }
}

impl Component for Navbar {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();

        if let Some(logo) = &self.props.logo_text {
            let el = Element::new(ElementKind::Text, Some("navbar-logo bold"))
                .with_text(logo.clone());
            self.root.append_child(&el);
        }

        for (index, item) in self.props.items.iter().enumerate() {
            let mut label = format!("{}", index + 1);
            if let Some(icon) = &item.icon {
                label.push(' ');
                label.push_str(icon);
            }
            label.push(' ');
            label.push_str(&item.text);

            let link = Element::new(ElementKind::Text, Some("navbar-link"))
                .with_attr("href", item.path.clone())
                .with_text(label);
            self.root.append_child(&link);
        }

        self.root.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Navbar {
        Navbar::new(NavbarProps {
            logo_text: Some("🐾 Catalyze".into()),
            items: vec![
                NavItem {
                    text: "Dashboard".into(),
                    path: "/dashboard".into(),
                    icon: Some("📊".into()),
                },
                NavItem {
                    text: "Devices".into(),
                    path: "/devices".into(),
                    icon: None,
                },
            ],
        })
    }

    #[test]
    fn links_carry_href_and_numbering() {
        let mut navbar = sample();
        let root = navbar.render();

        let links = root.find_all_by_class("navbar-link");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].attr("href").as_deref(), Some("/dashboard"));
        assert_eq!(links[0].text().as_deref(), Some("1 📊 Dashboard"));
        assert_eq!(links[1].text().as_deref(), Some("2 Devices"));
    }

    #[test]
    fn set_active_highlights_exactly_one_link() {
        let mut navbar = sample();
        navbar.render();

        navbar.set_active("/devices");
        let links = navbar.root().find_all_by_class("navbar-link");
        assert!(!links[0].has_class("active"));
        assert!(links[1].has_class("active"));

        navbar.set_active("/dashboard");
        let links = navbar.root().find_all_by_class("navbar-link");
        assert!(links[0].has_class("active"));
        assert!(!links[1].has_class("active"));
    }

    #[test]
    fn unknown_path_clears_all_highlights() {
        let mut navbar = sample();
        navbar.render();
        navbar.set_active("/dashboard");
        navbar.set_active("/nowhere");

        let links = navbar.root().find_all_by_class("navbar-link");
        assert!(links.iter().all(|l| !l.has_class("active")));
    }
}
