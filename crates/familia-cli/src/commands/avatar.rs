use anyhow::{Context, Result};
use familia_core::avatar::{self, AvatarConfig, AvatarField};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Prints the SVG for a config file, a random draw, or the default avatar.
pub fn render_svg(config: Option<PathBuf>, random: bool, seed: Option<u64>) -> Result<String> {
    let avatar = if random {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        AvatarConfig::randomize(&mut rng)
    } else if let Some(path) = config {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as an avatar config", path.display()))?
    } else {
        AvatarConfig::default()
    };

    let invalid = avatar.validate();
    if !invalid.is_empty() {
        tracing::warn!(?invalid, "Unknown avatar values fall back to catalog defaults");
    }

    Ok(avatar::render(&avatar).to_svg())
}

pub fn render(config: Option<PathBuf>, random: bool, seed: Option<u64>) -> Result<()> {
    println!("{}", render_svg(config, random, seed)?);
    Ok(())
}

pub fn catalog() {
    for field in AvatarField::iter() {
        println!("{}:", field);
        for option in field.options() {
            println!("  {}", option);
        }
    }
}
