#[cfg(debug_assertions)]
pub fn forms_endpoint() -> &'static str {
    "http://localhost:8787/forms"  // Local intake stub while developing
}

#[cfg(not(debug_assertions))]
pub fn forms_endpoint() -> &'static str {
    match option_env!("ASCENT_FORMS_ENDPOINT") {
        Some(url) => url,
        None => "/api/forms",
    }
}

/// Grand final day, local time.
pub const TOURNAMENT_DATE: &str = "2026-07-17T09:00:00";

/// Countdown target shown in the "registration opens in" block.
pub const REGISTRATION_OPENS: &str = "2026-01-26T00:00:00";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/ascent.2026/";
pub const YOUTUBE_URL: &str = "https://www.youtube.com/@ascent.2026";
pub const INQUIRY_EMAIL: &str = "ascent2026s@gmail.com";

pub const HERO_MEDIA: &str = "ascent_final.mov";
pub const HERO_PARTNERS: &[&str] = &["img/StarGarments.svg", "img/Aivance.svg"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchoolStatus {
    Confirmed,
    Qualified,
    Pending,
    NotRegistered,
}

impl SchoolStatus {
    pub fn label(self) -> &'static str {
        match self {
            SchoolStatus::Confirmed => "CONFIRMED",
            SchoolStatus::Qualified => "QUALIFIED",
            // Unregistered schools show the same badge as pending ones
            SchoolStatus::Pending | SchoolStatus::NotRegistered => "PENDING",
        }
    }

    pub fn is_locked_in(self) -> bool {
        matches!(self, SchoolStatus::Confirmed | SchoolStatus::Qualified)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct School {
    pub name: &'static str,
    pub status: SchoolStatus,
    pub logo: &'static str,
}

const fn confirmed(name: &'static str, logo: &'static str) -> School {
    School { name, status: SchoolStatus::Confirmed, logo }
}

pub const SCHOOLS: &[School] = &[
    confirmed("St. Peter's College", "peters"),
    confirmed("St. Joseph's College", "josephs"),
    confirmed("Royal College", "royal"),
    confirmed("St. Thomas' College", "st_thomas"),
    confirmed("Trinity College", "trinity"),
    confirmed("Ladies' College", "ladies"),
    confirmed("Bishop's College", "bishops"),
    confirmed("Methodist College", "methodists"),
    confirmed("St. Bridget's Convent", "bridgets"),
    confirmed("Musaeus College", "musaeus"),
    confirmed("Ethos International", "ethos"),
    confirmed("Royal Institute", "royal_institute"),
    confirmed("The British School", "british_school"),
    confirmed("Gateway College", "gateway"),
    confirmed("Elizabeth Moir", "elizabeth_moir"),
    confirmed("Stafford International", "stafford"),
    confirmed("Colombo International", "cis"),
    confirmed("Lyceum International", "lyceum"),
    confirmed("Wycherley International", "wycherley"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub highlight: bool,
}

pub const PHASES: &[Phase] = &[
    Phase {
        id: "01",
        title: "QUALIFIERS",
        subtitle: "Swiss Online",
        description: "The gauntlet begins. Top schools compete in a Swiss-system bracket.",
        date: "June 2026",
        highlight: false,
    },
    Phase {
        id: "02",
        title: "GROUPS",
        subtitle: "LAN Studio",
        description: "The best emerge. Offline group stages in a professional studio environment.",
        date: "Early July",
        highlight: false,
    },
    Phase {
        id: "03",
        title: "FINALS",
        subtitle: "Grand Stage",
        description: "Legends ascend. The grand finale in front of a live audience.",
        date: "July 17, 2026",
        highlight: true,
    },
];

pub const PRIZE_POOL: &str = "300K";
pub const PRIZE_CURRENCY: &str = "LKR";
