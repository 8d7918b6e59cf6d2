//! The persisted avatar configuration record.

use super::catalog::{
    ACCESSORIES, BACKGROUNDS, EXPRESSIONS, EYE_COLORS, HAIR_COLORS, HAIR_STYLES, OUTFITS,
    SKIN_TONES,
};
use crate::error::{FamiliaError, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// One customizable avatar field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AvatarField {
    SkinTone,
    HairColor,
    EyeColor,
    HairStyle,
    Outfit,
    Accessory,
    Expression,
    Background,
}

impl AvatarField {
    /// Every value the catalog allows for this field.
    ///
    /// Color fields list hex strings; the others list catalog ids.
    pub fn options(self) -> Vec<&'static str> {
        match self {
            Self::SkinTone => SKIN_TONES.iter().map(|c| c.hex).collect(),
            Self::HairColor => HAIR_COLORS.iter().map(|c| c.hex).collect(),
            Self::EyeColor => EYE_COLORS.iter().map(|c| c.hex).collect(),
            Self::HairStyle => HAIR_STYLES.iter().map(|s| s.id).collect(),
            Self::Outfit => OUTFITS.iter().map(|o| o.id).collect(),
            Self::Accessory => ACCESSORIES.iter().map(|s| s.id).collect(),
            Self::Expression => EXPRESSIONS.iter().map(|s| s.id).collect(),
            Self::Background => BACKGROUNDS.iter().map(|b| b.id).collect(),
        }
    }

    fn is_color(self) -> bool {
        matches!(self, Self::SkinTone | Self::HairColor | Self::EyeColor)
    }

    /// Whether `value` belongs to this field's catalog.
    ///
    /// Surrounding whitespace is ignored. Hex colors compare
    /// case-insensitively; ids compare exactly.
    pub fn accepts(self, value: &str) -> bool {
        let value = value.trim();
        let options = self.options();
        if self.is_color() {
            options.iter().any(|o| o.eq_ignore_ascii_case(value))
        } else {
            options.contains(&value)
        }
    }
}

/// Avatar appearance stored on the user's profile.
///
/// Mutated freely in memory and persisted only on an explicit save, which
/// replaces the whole record on the server. Missing fields deserialize to
/// their defaults so older server records still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub skin_tone: String,
    pub hair_color: String,
    pub eye_color: String,
    pub hair_style: String,
    pub outfit: String,
    pub accessory: String,
    pub expression: String,
    pub background: String,
}

impl Default for AvatarConfig {
    /// Medium skin, black medium-length hair, brown eyes, casual outfit,
    /// no accessory, happy expression, the Familia background.
    fn default() -> Self {
        Self {
            skin_tone: SKIN_TONES[2].hex.to_string(),
            hair_color: HAIR_COLORS[0].hex.to_string(),
            eye_color: EYE_COLORS[0].hex.to_string(),
            hair_style: HAIR_STYLES[1].id.to_string(),
            outfit: OUTFITS[0].id.to_string(),
            accessory: ACCESSORIES[0].id.to_string(),
            expression: EXPRESSIONS[0].id.to_string(),
            background: BACKGROUNDS[5].id.to_string(),
        }
    }
}

impl AvatarConfig {
    /// Draws a new configuration, sampling every field uniformly and
    /// independently from its catalog.
    pub fn randomize<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pick = |field: AvatarField| -> String {
            field
                .options()
                .choose(&mut *rng)
                .map(|v| v.to_string())
                .unwrap_or_default()
        };

        Self {
            skin_tone: pick(AvatarField::SkinTone),
            hair_color: pick(AvatarField::HairColor),
            eye_color: pick(AvatarField::EyeColor),
            hair_style: pick(AvatarField::HairStyle),
            outfit: pick(AvatarField::Outfit),
            accessory: pick(AvatarField::Accessory),
            expression: pick(AvatarField::Expression),
            background: pick(AvatarField::Background),
        }
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: AvatarField) -> &str {
        match field {
            AvatarField::SkinTone => &self.skin_tone,
            AvatarField::HairColor => &self.hair_color,
            AvatarField::EyeColor => &self.eye_color,
            AvatarField::HairStyle => &self.hair_style,
            AvatarField::Outfit => &self.outfit,
            AvatarField::Accessory => &self.accessory,
            AvatarField::Expression => &self.expression,
            AvatarField::Background => &self.background,
        }
    }

    /// Sets a field to a catalog value.
    ///
    /// # Errors
    ///
    /// Returns `FamiliaError::Validation` if `value` is not in the field's catalog.
    pub fn set(&mut self, field: AvatarField, value: &str) -> Result<()> {
        if !field.accepts(value) {
            return Err(FamiliaError::validation(
                field.as_ref(),
                format!("'{}' is not a valid {}", value, field),
            ));
        }

        let slot = match field {
            AvatarField::SkinTone => &mut self.skin_tone,
            AvatarField::HairColor => &mut self.hair_color,
            AvatarField::EyeColor => &mut self.eye_color,
            AvatarField::HairStyle => &mut self.hair_style,
            AvatarField::Outfit => &mut self.outfit,
            AvatarField::Accessory => &mut self.accessory,
            AvatarField::Expression => &mut self.expression,
            AvatarField::Background => &mut self.background,
        };
        *slot = value.trim().to_string();
        Ok(())
    }

    /// Lists the fields whose stored value is outside its catalog.
    ///
    /// Rendering never depends on this; out-of-catalog values simply render
    /// the catalog default.
    pub fn validate(&self) -> Vec<AvatarField> {
        AvatarField::iter()
            .filter(|field| !field.accepts(self.get(*field)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
