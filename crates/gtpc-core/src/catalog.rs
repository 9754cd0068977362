//! Static reference catalogs: regions, nations and last-name syllables.
//!
//! Nation identifiers are the ASCII codes of the 62 alphanumeric keys
//! `0-9`, `A-Z`, `a-z`, in that order. Customer rows resolve their nation by
//! the ASCII code of the first character of their synthetic state, which is
//! always drawn from the same alphabet, so every such reference lands on a
//! catalog entry.

/// A region of the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Zero-based region id.
    pub id: u64,
    pub name: &'static str,
}

/// A nation of the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nation {
    /// ASCII code of the nation key.
    pub id: u64,
    pub name: &'static str,
    /// Id of the region the nation is part of.
    pub region_id: u64,
}

const fn nation(key: u8, name: &'static str, region_id: u64) -> Nation {
    Nation {
        id: key as u64,
        name,
        region_id,
    }
}

pub const REGIONS: [Region; 5] = [
    Region {
        id: 0,
        name: "Africa",
    },
    Region {
        id: 1,
        name: "America",
    },
    Region {
        id: 2,
        name: "Asia",
    },
    Region {
        id: 3,
        name: "Australia",
    },
    Region {
        id: 4,
        name: "Europe",
    },
];

pub const NATIONS: [Nation; 62] = [
    nation(b'0', "Australia", 3),
    nation(b'1', "Belgium", 4),
    nation(b'2', "Cameroon", 0),
    nation(b'3', "Canada", 1),
    nation(b'4', "China", 2),
    nation(b'5', "Egypt", 0),
    nation(b'6', "France", 4),
    nation(b'7', "Germany", 4),
    nation(b'8', "India", 2),
    nation(b'9', "Indonesia", 2),
    nation(b'A', "Iran", 2),
    nation(b'B', "Italy", 4),
    nation(b'C', "Japan", 2),
    nation(b'D', "Jordan", 2),
    nation(b'E', "Kenya", 0),
    nation(b'F', "Mexico", 1),
    nation(b'G', "Morocco", 0),
    nation(b'H', "Mozambique", 0),
    nation(b'I', "Peru", 1),
    nation(b'J', "Romania", 4),
    nation(b'K', "Russia", 4),
    nation(b'L', "Saudi Arabia", 2),
    nation(b'M', "United Kingdom", 4),
    nation(b'N', "United States", 1),
    nation(b'O', "Vietnam", 2),
    nation(b'P', "Argentina", 1),
    nation(b'Q', "Austria", 4),
    nation(b'R', "Bangladesh", 2),
    nation(b'S', "Brazil", 1),
    nation(b'T', "Chile", 1),
    nation(b'U', "Colombia", 1),
    nation(b'V', "Croatia", 4),
    nation(b'W', "Denmark", 4),
    nation(b'X', "Ethiopia", 0),
    nation(b'Y', "Fiji", 3),
    nation(b'Z', "Finland", 4),
    nation(b'a', "Ghana", 0),
    nation(b'b', "Greece", 4),
    nation(b'c', "Hungary", 4),
    nation(b'd', "Iceland", 4),
    nation(b'e', "Ireland", 4),
    nation(b'f', "Israel", 2),
    nation(b'g', "Kazakhstan", 2),
    nation(b'h', "Madagascar", 0),
    nation(b'i', "Malaysia", 2),
    nation(b'j', "Mongolia", 2),
    nation(b'k', "Netherlands", 4),
    nation(b'l', "New Zealand", 3),
    nation(b'm', "Nigeria", 0),
    nation(b'n', "Norway", 4),
    nation(b'o', "Pakistan", 2),
    nation(b'p', "Papua New Guinea", 3),
    nation(b'q', "Philippines", 2),
    nation(b'r', "Poland", 4),
    nation(b's', "Portugal", 4),
    nation(b't', "Samoa", 3),
    nation(b'u', "Senegal", 0),
    nation(b'v', "Singapore", 2),
    nation(b'w', "Spain", 4),
    nation(b'x', "Sweden", 4),
    nation(b'y', "Thailand", 2),
    nation(b'z', "Tonga", 3),
];

/// Syllables indexed by decimal digit, used to build customer last names.
pub const LAST_NAME_SYLLABLES: [&str; 10] = [
    "BAR", "OUGHT", "ABLE", "PRI", "PRES", "ESE", "ANTI", "CALLY", "ATION", "EING",
];

/// Look up a nation by its id (ASCII key code).
pub fn nation_by_id(id: u64) -> Option<&'static Nation> {
    NATIONS.iter().find(|n| n.id == id)
}

/// Look up a region by its id.
pub fn region_by_id(id: u64) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.id == id)
}
