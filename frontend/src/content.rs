//! Static page content.

pub const HERO_BACKGROUND: &str =
    "https://avp.com/wp-content/uploads/AVP-2025-WEBSITE-3.0-dark-1800x1013.png";

pub const CONTACT_EMAIL: &str = "contact@beachvolleytournament.com";

pub const SPONSOR_LOGOS: [&str; 6] = [
    "assets/sponsor1.png",
    "assets/sponsor2.png",
    "assets/sponsor3.png",
    "assets/sponsor4.png",
    "assets/sponsor5.png",
    "assets/sponsor6.png",
];

pub const MEDIA_IMAGES: [&str; 8] = [
    "assets/media1.jpg",
    "assets/media2.jpg",
    "assets/media3.jpg",
    "assets/media4.jpg",
    "assets/media5.jpg",
    "assets/media6.jpg",
    "assets/media7.jpg",
    "assets/media8.jpg",
];

pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Home", target: "hero" },
    NavLink { label: "Events", target: "events" },
    NavLink { label: "Gallery", target: "gallery" },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Social {
    Facebook,
    Instagram,
    Twitter,
}

impl Social {
    pub const ALL: [Social; 3] = [Social::Facebook, Social::Instagram, Social::Twitter];

    pub fn url(self) -> &'static str {
        match self {
            Social::Facebook => "https://facebook.com",
            Social::Instagram => "https://instagram.com",
            Social::Twitter => "https://twitter.com",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Social::Facebook => "Facebook",
            Social::Instagram => "Instagram",
            Social::Twitter => "Twitter",
        }
    }
}

pub fn sponsor_alt(index: usize) -> String {
    format!("Sponsor {}", index + 1)
}

pub fn media_alt(index: usize) -> String {
    format!("Media {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Section ids rendered by the home page, top to bottom.
    const SECTION_IDS: [&str; 5] = ["hero", "sponsors", "events", "gallery", "contact"];

    #[test]
    fn nav_links_point_at_home_sections() {
        for link in NAV_LINKS.iter() {
            assert!(SECTION_IDS.contains(&link.target), "{} has no section", link.href());
        }
        assert_eq!(NAV_LINKS[1].href(), "#events");
    }

    #[test]
    fn alt_text_is_one_based() {
        assert_eq!(sponsor_alt(0), "Sponsor 1");
        assert_eq!(media_alt(7), "Media 8");
    }
}
