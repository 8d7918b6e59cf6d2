//! Closed option catalogs for every customizable avatar field.
//!
//! Each catalog is ordered; the first entry is the fallback used when a
//! stored value is not recognized.

/// A color choice (skin tone, hair color, eye color).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub id: &'static str,
    pub label: &'static str,
    pub hex: &'static str,
}

/// A shape/style choice identified by id (hair style, accessory, expression).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOption {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

/// An outfit with the base color used for the body layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutfitOption {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

/// A background gradient with two or three stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundOption {
    pub id: &'static str,
    pub label: &'static str,
    pub colors: &'static [&'static str],
}

pub const SKIN_TONES: &[ColorOption] = &[
    ColorOption { id: "fair", label: "Fair", hex: "#FDDBB4" },
    ColorOption { id: "light", label: "Light", hex: "#F5C7A1" },
    ColorOption { id: "medium", label: "Medium", hex: "#E0A370" },
    ColorOption { id: "tan", label: "Tan", hex: "#C68642" },
    ColorOption { id: "brown", label: "Brown", hex: "#8D5524" },
    ColorOption { id: "dark", label: "Dark", hex: "#5C3A1E" },
];

pub const HAIR_COLORS: &[ColorOption] = &[
    ColorOption { id: "black", label: "Black", hex: "#2C1810" },
    ColorOption { id: "dark-brown", label: "Dark Brown", hex: "#4A2C1A" },
    ColorOption { id: "brown", label: "Brown", hex: "#8B4513" },
    ColorOption { id: "dirty-blonde", label: "Dirty Blonde", hex: "#D4A574" },
    ColorOption { id: "blonde", label: "Blonde", hex: "#F5DEB3" },
    ColorOption { id: "red", label: "Red", hex: "#FF6347" },
    ColorOption { id: "blue", label: "Blue", hex: "#4169E1" },
    ColorOption { id: "purple", label: "Purple", hex: "#9370DB" },
    ColorOption { id: "gold", label: "Gold", hex: "#FFD700" },
    ColorOption { id: "pink", label: "Pink", hex: "#FF69B4" },
];

pub const EYE_COLORS: &[ColorOption] = &[
    ColorOption { id: "brown", label: "Brown", hex: "#634E34" },
    ColorOption { id: "blue", label: "Blue", hex: "#2E536F" },
    ColorOption { id: "green", label: "Green", hex: "#3D671D" },
    ColorOption { id: "emerald", label: "Emerald", hex: "#1C7847" },
    ColorOption { id: "hazel", label: "Hazel", hex: "#8B4513" },
    ColorOption { id: "navy", label: "Navy", hex: "#191970" },
    ColorOption { id: "amber", label: "Amber", hex: "#7B3F00" },
    ColorOption { id: "gray", label: "Gray", hex: "#808080" },
];

pub const HAIR_STYLES: &[StyleOption] = &[
    StyleOption { id: "short", label: "Short", emoji: "💇" },
    StyleOption { id: "medium", label: "Medium", emoji: "💇‍♀️" },
    StyleOption { id: "long", label: "Long", emoji: "👱‍♀️" },
    StyleOption { id: "curly", label: "Curly", emoji: "🦱" },
    StyleOption { id: "braids", label: "Braids", emoji: "🫘" },
    StyleOption { id: "bun", label: "Bun", emoji: "👩‍🦰" },
    StyleOption { id: "afro", label: "Afro", emoji: "🧑‍🦱" },
    StyleOption { id: "mohawk", label: "Mohawk", emoji: "🦅" },
    StyleOption { id: "bald", label: "Bald", emoji: "🧑‍🦲" },
    StyleOption { id: "ponytail", label: "Ponytail", emoji: "🎀" },
];

pub const OUTFITS: &[OutfitOption] = &[
    OutfitOption { id: "casual", label: "Casual", emoji: "👕", color: "#60A5FA" },
    OutfitOption { id: "indian", label: "Indian Traditional", emoji: "🪷", color: "#F59E0B" },
    OutfitOption { id: "brazilian", label: "Brazilian Style", emoji: "🌺", color: "#34D399" },
    OutfitOption { id: "japanese", label: "Japanese Kimono", emoji: "🎌", color: "#F472B6" },
    OutfitOption { id: "african", label: "African Heritage", emoji: "🌍", color: "#A78BFA" },
    OutfitOption { id: "formal", label: "Formal", emoji: "👔", color: "#6B7280" },
    OutfitOption { id: "sporty", label: "Sporty", emoji: "⚽", color: "#EF4444" },
    OutfitOption { id: "artistic", label: "Artistic", emoji: "🎨", color: "#EC4899" },
];

pub const ACCESSORIES: &[StyleOption] = &[
    StyleOption { id: "none", label: "None", emoji: "✨" },
    StyleOption { id: "glasses", label: "Glasses", emoji: "👓" },
    StyleOption { id: "sunglasses", label: "Sunglasses", emoji: "🕶️" },
    StyleOption { id: "hat", label: "Hat", emoji: "🧢" },
    StyleOption { id: "headband", label: "Headband", emoji: "🎀" },
    StyleOption { id: "earrings", label: "Earrings", emoji: "💎" },
    StyleOption { id: "necklace", label: "Necklace", emoji: "📿" },
    StyleOption { id: "flower", label: "Flower Crown", emoji: "🌸" },
    StyleOption { id: "scarf", label: "Scarf", emoji: "🧣" },
    StyleOption { id: "crown", label: "Crown", emoji: "👑" },
];

pub const EXPRESSIONS: &[StyleOption] = &[
    StyleOption { id: "happy", label: "Happy", emoji: "😊" },
    StyleOption { id: "warm", label: "Warm", emoji: "🥰" },
    StyleOption { id: "cool", label: "Cool", emoji: "😎" },
    StyleOption { id: "thoughtful", label: "Thoughtful", emoji: "🤔" },
    StyleOption { id: "laughing", label: "Laughing", emoji: "😄" },
    StyleOption { id: "peaceful", label: "Peaceful", emoji: "😌" },
    StyleOption { id: "confident", label: "Confident", emoji: "💪" },
    StyleOption { id: "mysterious", label: "Mysterious", emoji: "🌙" },
];

pub const BACKGROUNDS: &[BackgroundOption] = &[
    BackgroundOption { id: "sunset", label: "Sunset", colors: &["#FF6B35", "#F43F5E"] },
    BackgroundOption { id: "ocean", label: "Ocean", colors: &["#06B6D4", "#3B82F6"] },
    BackgroundOption { id: "forest", label: "Forest", colors: &["#22C55E", "#10B981"] },
    BackgroundOption { id: "royal", label: "Royal", colors: &["#8B5CF6", "#6366F1"] },
    BackgroundOption { id: "golden", label: "Golden", colors: &["#F59E0B", "#EF4444"] },
    BackgroundOption { id: "familia", label: "Familia", colors: &["#FF6B35", "#06B6D4"] },
    BackgroundOption { id: "aurora", label: "Aurora", colors: &["#06B6D4", "#8B5CF6", "#F43F5E"] },
    BackgroundOption { id: "midnight", label: "Midnight", colors: &["#1E1B4B", "#312E81"] },
    BackgroundOption { id: "cherry", label: "Cherry", colors: &["#F43F5E", "#EC4899"] },
    BackgroundOption { id: "cosmic", label: "Cosmic", colors: &["#6366F1", "#EC4899", "#F59E0B"] },
];

// ============================================================================
// Lookups with fallback to the first catalog entry
// ============================================================================

/// Resolves a color value (hex, case-insensitive) against a color catalog.
pub fn resolve_color(catalog: &'static [ColorOption], hex: &str) -> &'static ColorOption {
    let hex = hex.trim();
    catalog
        .iter()
        .find(|c| c.hex.eq_ignore_ascii_case(hex))
        .unwrap_or(&catalog[0])
}

/// Resolves a style id against a style catalog.
pub fn resolve_style(catalog: &'static [StyleOption], id: &str) -> &'static StyleOption {
    let id = id.trim();
    catalog.iter().find(|s| s.id == id).unwrap_or(&catalog[0])
}

pub fn resolve_outfit(id: &str) -> &'static OutfitOption {
    let id = id.trim();
    OUTFITS.iter().find(|o| o.id == id).unwrap_or(&OUTFITS[0])
}

pub fn resolve_background(id: &str) -> &'static BackgroundOption {
    let id = id.trim();
    BACKGROUNDS
        .iter()
        .find(|b| b.id == id)
        .unwrap_or(&BACKGROUNDS[0])
}
