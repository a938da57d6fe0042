#[derive(Clone, Copy, Debug)]
pub struct CategoryEntry {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct HolderEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub base_price: u32,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct CharmEntry {
    pub id: &'static str,
    pub sku: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub meaning: &'static str,
    pub price: u32,
}

pub const CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry { id: "charms", name: "Charms" },
    CategoryEntry { id: "beads", name: "Beads" },
    CategoryEntry { id: "stones", name: "Stones" },
    CategoryEntry { id: "letters", name: "Letters" },
    CategoryEntry { id: "spacers", name: "Spacers" },
];

pub const HOLDER_CATALOG: &[HolderEntry] = &[
    HolderEntry {
        id: "cable-chain",
        name: "Cable Chain",
        base_price: 85,
        description: "A classic and versatile chain with uniform oval links.",
    },
    HolderEntry {
        id: "box-chain",
        name: "Box Chain",
        base_price: 95,
        description: "Square links that create a smooth, geometric look.",
    },
    HolderEntry {
        id: "snake-chain",
        name: "Snake Chain",
        base_price: 110,
        description: "Round, smooth metal plates with a slight curve like a snake.",
    },
    HolderEntry {
        id: "rope-chain",
        name: "Rope Chain",
        base_price: 125,
        description: "Several segments connected to resemble the twist of a rope.",
    },
    HolderEntry {
        id: "bead-ball-chain",
        name: "Bead Ball Chain",
        base_price: 90,
        description: "Spherical beads joined together for a modern, playful finish.",
    },
    HolderEntry {
        id: "curb-chain",
        name: "Curb Chain",
        base_price: 115,
        description: "Flat, interlocking links that lie comfortably against the skin.",
    },
    HolderEntry {
        id: "figaro-chain",
        name: "Figaro Chain",
        base_price: 120,
        description: "A pattern of three small links followed by one elongated link.",
    },
    HolderEntry {
        id: "wheat-chain",
        name: "Wheat Chain",
        base_price: 130,
        description: "Four strands of twisted oval links braided together.",
    },
    HolderEntry {
        id: "singapore-chain",
        name: "Singapore Chain",
        base_price: 105,
        description: "A twisted chain with a delicate, diamond-cut sparkle.",
    },
    HolderEntry {
        id: "hernithock-chain",
        name: "Hernithock Chain",
        base_price: 150,
        description: "A premium, bold herringbone-style flat weave.",
    },
];

pub const CHARM_CATALOG: &[CharmEntry] = &[
    CharmEntry {
        id: "c1",
        sku: "RQ-001",
        name: "Rose Quartz",
        category: "stones",
        meaning: "For Unconditional Love and Peace",
        price: 15,
    },
    CharmEntry {
        id: "c2",
        sku: "LA-001",
        name: "Lapis Lazuli",
        category: "stones",
        meaning: "For Wisdom and Truth",
        price: 18,
    },
    CharmEntry {
        id: "c3",
        sku: "GI-A",
        name: "Gold Initial A",
        category: "letters",
        meaning: "Celebrating your unique identity",
        price: 25,
    },
    CharmEntry {
        id: "c4",
        sku: "GI-M",
        name: "Gold Initial M",
        category: "letters",
        meaning: "A tribute to someone special",
        price: 25,
    },
    CharmEntry {
        id: "c5",
        sku: "H-001",
        name: "Solid Heart",
        category: "charms",
        meaning: "A symbol of enduring affection",
        price: 30,
    },
    CharmEntry {
        id: "c6",
        sku: "S-001",
        name: "Star Beam",
        category: "charms",
        meaning: "Follow your inner light",
        price: 22,
    },
    CharmEntry {
        id: "c7",
        sku: "B-001",
        name: "Pearl Bead",
        category: "beads",
        meaning: "Purity and new beginnings",
        price: 12,
    },
    CharmEntry {
        id: "c8",
        sku: "SP-001",
        name: "Gold Spacer",
        category: "spacers",
        meaning: "Creating space for reflection",
        price: 8,
    },
];

pub fn holder_by_id(id: &str) -> Option<&'static HolderEntry> {
    let trimmed = id.trim();
    HOLDER_CATALOG
        .iter()
        .find(|entry| entry.id.eq_ignore_ascii_case(trimmed))
}

pub fn charm_by_id(id: &str) -> Option<&'static CharmEntry> {
    let trimmed = id.trim();
    CHARM_CATALOG
        .iter()
        .find(|entry| entry.id.eq_ignore_ascii_case(trimmed))
}

pub fn charm_by_sku(sku: &str) -> Option<&'static CharmEntry> {
    let trimmed = sku.trim();
    CHARM_CATALOG
        .iter()
        .find(|entry| entry.sku.eq_ignore_ascii_case(trimmed))
}

pub fn category_by_id(id: &str) -> Option<&'static CategoryEntry> {
    let trimmed = id.trim();
    CATEGORIES
        .iter()
        .find(|entry| entry.id.eq_ignore_ascii_case(trimmed))
}

pub fn charms_in_category(category_id: &str) -> Vec<&'static CharmEntry> {
    let trimmed = category_id.trim();
    CHARM_CATALOG
        .iter()
        .filter(|entry| entry.category.eq_ignore_ascii_case(trimmed))
        .collect()
}
