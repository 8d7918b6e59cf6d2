//! Deterministic layered avatar renderer.
//!
//! `render` turns an [`AvatarConfig`] into an ordered stack of [`Layer`]s.
//! Every value is resolved against its catalog first, so the renderer never
//! fails and never emits a blank layer for an unrecognized id.

use super::catalog::{
    self, ACCESSORIES, EXPRESSIONS, EYE_COLORS, HAIR_COLORS, HAIR_STYLES, SKIN_TONES,
};
use super::color::adjust_brightness;
use super::config::AvatarConfig;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use strum::{AsRefStr, Display, EnumIter};

pub const VIEW_BOX: &str = "0 0 200 250";

const SKIN_SHADOW: i16 = -30;
const SKIN_HIGHLIGHT: i16 = 20;
const HAIR_BACK_SHADOW: i16 = -20;
const HAIR_FRONT_SHADOW: i16 = -15;

/// Compositing slots, in paint order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumIter, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LayerKind {
    Background,
    Body,
    OutfitPattern,
    Neck,
    HairBack,
    Head,
    Ears,
    HairFront,
    Eyebrows,
    Eyes,
    Nose,
    Mouth,
    Blush,
    Accessory,
}

// ============================================================================
// Expression coupling
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum BrowShape {
    Arched,
    Raised,
    Level,
    Tilted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum EyeShape {
    Open,
    Wide,
    Squint,
    Lidded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum MouthShape {
    Smile,
    OpenGrin,
    Flat,
    Sideways,
    Gentle,
}

/// Brows, eyes, mouth and blush chosen together from one expression id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpressionStyle {
    pub brows: BrowShape,
    pub eyes: EyeShape,
    pub mouth: MouthShape,
    pub blush: bool,
}

impl ExpressionStyle {
    /// Looks up the style for an expression id.
    ///
    /// Unknown ids resolve to the first catalog expression (`happy`).
    pub fn for_expression(id: &str) -> Self {
        let id = catalog::resolve_style(EXPRESSIONS, id).id;
        let (brows, eyes, mouth) = match id {
            "happy" | "warm" => (BrowShape::Raised, EyeShape::Wide, MouthShape::Smile),
            "laughing" => (BrowShape::Raised, EyeShape::Squint, MouthShape::OpenGrin),
            "cool" => (BrowShape::Level, EyeShape::Lidded, MouthShape::Flat),
            "confident" => (BrowShape::Level, EyeShape::Open, MouthShape::Flat),
            "thoughtful" | "mysterious" => (BrowShape::Tilted, EyeShape::Open, MouthShape::Sideways),
            "peaceful" => (BrowShape::Arched, EyeShape::Open, MouthShape::Gentle),
            _ => (BrowShape::Arched, EyeShape::Open, MouthShape::Smile),
        };

        Self {
            brows,
            eyes,
            mouth,
            blush: matches!(id, "happy" | "warm" | "laughing"),
        }
    }
}

// ============================================================================
// Shapes and layers
// ============================================================================

/// A single SVG element with attributes in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
}

impl Shape {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
        }
    }

    fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        Self::new("ellipse")
            .attr("cx", cx)
            .attr("cy", cy)
            .attr("rx", rx)
            .attr("ry", ry)
    }

    fn circle(cx: f32, cy: f32, r: f32) -> Self {
        Self::new("circle").attr("cx", cx).attr("cy", cy).attr("r", r)
    }

    fn rect(x: f32, y: f32, width: f32, height: f32, rx: f32) -> Self {
        Self::new("rect")
            .attr("x", x)
            .attr("y", y)
            .attr("width", width)
            .attr("height", height)
            .attr("rx", rx)
    }

    fn path(d: &str) -> Self {
        Self::new("path").attr("d", d)
    }

    fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new("line")
            .attr("x1", x1)
            .attr("y1", y1)
            .attr("x2", x2)
            .attr("y2", y2)
    }

    fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    fn fill(self, color: &str) -> Self {
        self.attr("fill", color)
    }

    fn opacity(self, value: f32) -> Self {
        self.attr("opacity", value)
    }

    /// Round-capped unfilled stroke, used for brows, lids and mouths.
    fn outline(self, color: &str, width: f32) -> Self {
        self.attr("stroke", color)
            .attr("stroke-width", width)
            .attr("fill", "none")
            .attr("stroke-linecap", "round")
    }

    /// Returns the value of an attribute, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    fn write_svg(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, value);
        }
        out.push_str("/>");
    }
}

/// One compositing layer and the catalog variant it was drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub variant: String,
    pub shapes: Vec<Shape>,
}

impl Layer {
    fn new(kind: LayerKind, variant: impl Into<String>, shapes: Vec<Shape>) -> Self {
        Self {
            kind,
            variant: variant.into(),
            shapes,
        }
    }
}

/// A fully resolved avatar, ready to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarImage {
    pub background_stops: Vec<String>,
    pub skin_tone: String,
    pub skin_highlight: String,
    pub layers: Vec<Layer>,
}

impl AvatarImage {
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    pub fn has_layer(&self, kind: LayerKind) -> bool {
        self.layer(kind).is_some()
    }

    /// Layer kinds in paint order.
    pub fn kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(|l| l.kind).collect()
    }

    /// Serializes the image to a standalone SVG document.
    ///
    /// The output depends only on the image, so the same config always
    /// produces byte-identical SVG.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(4096);
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\" width=\"200\" height=\"250\">",
            VIEW_BOX
        );

        out.push_str("<defs>");
        out.push_str("<linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">");
        let last = self.background_stops.len().saturating_sub(1).max(1);
        for (i, color) in self.background_stops.iter().enumerate() {
            let _ = write!(
                out,
                "<stop offset=\"{}%\" stop-color=\"{}\"/>",
                i * 100 / last,
                color
            );
        }
        out.push_str("</linearGradient>");
        let _ = write!(
            out,
            "<radialGradient id=\"skin\" cx=\"50%\" cy=\"40%\"><stop offset=\"0%\" stop-color=\"{}\"/><stop offset=\"100%\" stop-color=\"{}\"/></radialGradient>",
            self.skin_highlight, self.skin_tone
        );
        out.push_str("<radialGradient id=\"cheek\" cx=\"50%\" cy=\"50%\"><stop offset=\"0%\" stop-color=\"#FF6B6B\" stop-opacity=\"0.25\"/><stop offset=\"100%\" stop-color=\"#FF6B6B\" stop-opacity=\"0\"/></radialGradient>");
        out.push_str("<filter id=\"softShadow\"><feDropShadow dx=\"0\" dy=\"3\" stdDeviation=\"4\" flood-color=\"#000\" flood-opacity=\"0.15\"/></filter>");
        out.push_str("</defs>");

        for layer in &self.layers {
            let _ = write!(
                out,
                "<g data-layer=\"{}\" data-variant=\"{}\">",
                layer.kind, layer.variant
            );
            for shape in &layer.shapes {
                shape.write_svg(&mut out);
            }
            out.push_str("</g>");
        }

        out.push_str("</svg>");
        out
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Composes the avatar layers for a configuration.
///
/// Paint order: background, body, outfit pattern, neck, hair back, head,
/// ears, hair front, eyebrows, eyes, nose, mouth, blush, accessory. Both
/// hair layers are omitted for `bald`; blush only appears for happy, warm
/// and laughing.
pub fn render(config: &AvatarConfig) -> AvatarImage {
    let skin = catalog::resolve_color(SKIN_TONES, &config.skin_tone);
    let hair_color = catalog::resolve_color(HAIR_COLORS, &config.hair_color);
    let eye_color = catalog::resolve_color(EYE_COLORS, &config.eye_color);
    let hair_style = catalog::resolve_style(HAIR_STYLES, &config.hair_style);
    let outfit = catalog::resolve_outfit(&config.outfit);
    let accessory = catalog::resolve_style(ACCESSORIES, &config.accessory);
    let background = catalog::resolve_background(&config.background);
    let style = ExpressionStyle::for_expression(&config.expression);

    let skin_darker = adjust_brightness(skin.hex, SKIN_SHADOW);
    let skin_lighter = adjust_brightness(skin.hex, SKIN_HIGHLIGHT);

    let mut layers = Vec::with_capacity(14);
    layers.push(Layer::new(
        LayerKind::Background,
        background.id,
        vec![Shape::rect(0.0, 0.0, 200.0, 250.0, 0.0).fill("url(#bg)")],
    ));
    layers.push(Layer::new(
        LayerKind::Body,
        outfit.id,
        vec![
            Shape::ellipse(100.0, 220.0, 55.0, 35.0)
                .fill(outfit.color)
                .opacity(0.9),
            Shape::ellipse(100.0, 215.0, 50.0, 30.0).fill(outfit.color),
        ],
    ));
    layers.push(Layer::new(
        LayerKind::OutfitPattern,
        outfit.id,
        outfit_pattern(outfit.id),
    ));
    layers.push(Layer::new(
        LayerKind::Neck,
        skin.id,
        vec![
            Shape::rect(85.0, 155.0, 30.0, 30.0, 8.0).fill(skin.hex),
            Shape::rect(80.0, 175.0, 40.0, 20.0, 5.0)
                .fill(&skin_darker)
                .opacity(0.3),
        ],
    ));

    let bald = hair_style.id == "bald";
    if !bald {
        layers.push(Layer::new(
            LayerKind::HairBack,
            hair_style.id,
            hair_back(hair_style.id, hair_color.hex),
        ));
    }

    layers.push(Layer::new(
        LayerKind::Head,
        skin.id,
        vec![
            Shape::ellipse(100.0, 95.0, 58.0, 68.0)
                .fill("url(#skin)")
                .attr("filter", "url(#softShadow)"),
        ],
    ));
    layers.push(Layer::new(
        LayerKind::Ears,
        skin.id,
        [42.0, 158.0]
            .into_iter()
            .flat_map(|cx| {
                [
                    Shape::ellipse(cx, 98.0, 10.0, 14.0).fill(skin.hex),
                    Shape::ellipse(cx, 98.0, 6.0, 9.0)
                        .fill(&skin_darker)
                        .opacity(0.15),
                ]
            })
            .collect(),
    ));

    if !bald {
        layers.push(Layer::new(
            LayerKind::HairFront,
            hair_style.id,
            hair_front(hair_style.id, hair_color.hex),
        ));
    }

    layers.push(Layer::new(
        LayerKind::Eyebrows,
        style.brows.as_ref(),
        eyebrows(style.brows, hair_color.hex),
    ));
    layers.push(Layer::new(
        LayerKind::Eyes,
        style.eyes.as_ref(),
        eyes(style.eyes, eye_color.hex),
    ));
    layers.push(Layer::new(
        LayerKind::Nose,
        "default",
        vec![
            Shape::path("M 96 105 Q 100 115 104 105")
                .outline(&skin_darker, 1.5)
                .opacity(0.35),
        ],
    ));
    layers.push(Layer::new(
        LayerKind::Mouth,
        style.mouth.as_ref(),
        mouth(style.mouth, &skin_darker),
    ));

    if style.blush {
        layers.push(Layer::new(
            LayerKind::Blush,
            "default",
            vec![
                Shape::circle(68.0, 112.0, 10.0).fill("url(#cheek)"),
                Shape::circle(132.0, 112.0, 10.0).fill("url(#cheek)"),
            ],
        ));
    }

    layers.push(Layer::new(
        LayerKind::Accessory,
        accessory.id,
        accessory_shapes(accessory.id),
    ));

    AvatarImage {
        background_stops: background.colors.iter().map(|c| c.to_string()).collect(),
        skin_tone: skin.hex.to_string(),
        skin_highlight: skin_lighter,
        layers,
    }
}

fn outfit_pattern(outfit: &str) -> Vec<Shape> {
    match outfit {
        "indian" => vec![
            Shape::path("M 55 205 Q 100 228 145 205").outline("#FFD700", 3.0),
            Shape::circle(100.0, 212.0, 4.0).fill("#FFD700"),
        ],
        "brazilian" => [75.0, 100.0, 125.0]
            .into_iter()
            .map(|cx| Shape::circle(cx, 218.0, 5.0).fill("#FDE047").opacity(0.8))
            .collect(),
        "japanese" => vec![
            Shape::path("M 80 190 L 100 215 L 120 190").outline("#FFFFFF", 3.0),
            Shape::rect(60.0, 218.0, 80.0, 10.0, 2.0)
                .fill("#1F2937")
                .opacity(0.6),
        ],
        "african" => vec![
            Shape::path("M 55 215 L 67 205 L 79 215 L 91 205 L 103 215 L 115 205 L 127 215 L 139 205")
                .outline("#FDE047", 2.5),
        ],
        "formal" => vec![
            Shape::path("M 85 188 L 100 200 L 115 188").outline("#FFFFFF", 3.0),
            Shape::path("M 96 200 L 104 200 L 106 228 L 100 235 L 94 228 Z").fill("#1F2937"),
        ],
        "sporty" => vec![
            Shape::rect(52.0, 208.0, 96.0, 6.0, 3.0)
                .fill("#FFFFFF")
                .opacity(0.5),
        ],
        "artistic" => vec![
            Shape::circle(75.0, 212.0, 4.0).fill("#FDE047"),
            Shape::circle(95.0, 222.0, 3.5).fill("#34D399"),
            Shape::circle(118.0, 210.0, 4.5).fill("#60A5FA"),
            Shape::circle(130.0, 224.0, 3.0).fill("#F97316"),
        ],
        // casual
        _ => vec![
            Shape::path("M 88 188 Q 100 200 112 188")
                .outline("#FFFFFF", 2.0)
                .opacity(0.3),
        ],
    }
}

fn hair_back(style: &str, color: &str) -> Vec<Shape> {
    let darker = adjust_brightness(color, HAIR_BACK_SHADOW);
    match style {
        "long" => vec![
            Shape::ellipse(100.0, 55.0, 62.0, 42.0).fill(color),
            Shape::rect(42.0, 60.0, 18.0, 100.0, 9.0).fill(color),
            Shape::rect(140.0, 60.0, 18.0, 100.0, 9.0).fill(color),
            Shape::rect(44.0, 80.0, 14.0, 80.0, 7.0)
                .fill(&darker)
                .opacity(0.2),
            Shape::rect(142.0, 80.0, 14.0, 80.0, 7.0)
                .fill(&darker)
                .opacity(0.2),
        ],
        "afro" => vec![Shape::ellipse(100.0, 75.0, 72.0, 65.0).fill(color)],
        "curly" => {
            let mut shapes = vec![Shape::ellipse(100.0, 60.0, 60.0, 40.0).fill(color)];
            shapes.extend(
                [55.0, 70.0, 85.0, 100.0, 115.0, 130.0, 145.0]
                    .into_iter()
                    .enumerate()
                    .map(|(i, cx)| {
                        Shape::circle(cx, 40.0 + (i % 2) as f32 * 5.0, 10.0).fill(color)
                    }),
            );
            shapes
        }
        _ => vec![Shape::ellipse(100.0, 55.0, 55.0, 38.0).fill(color)],
    }
}

fn hair_front(style: &str, color: &str) -> Vec<Shape> {
    let darker = adjust_brightness(color, HAIR_FRONT_SHADOW);
    let cap = || Shape::ellipse(100.0, 55.0, 55.0, 38.0).fill(color);
    match style {
        "mohawk" => vec![Shape::path("M 80 25 Q 100 -5 120 25 Q 110 30 100 28 Q 90 30 80 25").fill(color)],
        "ponytail" => vec![
            cap(),
            Shape::ellipse(145.0, 45.0, 22.0, 18.0).fill(color),
            Shape::rect(140.0, 45.0, 12.0, 50.0, 6.0).fill(color),
        ],
        "braids" => {
            let mut shapes = vec![
                cap(),
                Shape::rect(48.0, 65.0, 12.0, 85.0, 6.0).fill(color),
                Shape::rect(140.0, 65.0, 12.0, 85.0, 6.0).fill(color),
            ];
            for offset in [0.0, 15.0, 30.0, 45.0, 60.0] {
                shapes.push(Shape::circle(54.0, 75.0 + offset, 5.0).fill(&darker).opacity(0.15));
                shapes.push(Shape::circle(146.0, 75.0 + offset, 5.0).fill(&darker).opacity(0.15));
            }
            shapes
        }
        "bun" => vec![
            cap(),
            Shape::circle(100.0, 22.0, 18.0).fill(color),
            Shape::circle(100.0, 22.0, 12.0).fill(&darker).opacity(0.1),
        ],
        "short" => vec![
            Shape::ellipse(100.0, 58.0, 53.0, 32.0).fill(color),
            Shape::path("M 50 70 Q 100 48 150 70").fill(color),
        ],
        _ => vec![cap()],
    }
}

fn eyebrows(shape: BrowShape, color: &str) -> Vec<Shape> {
    let (left, right) = match shape {
        BrowShape::Arched => ("M 68 78 Q 80 71 92 78", "M 108 78 Q 120 71 132 78"),
        BrowShape::Raised => ("M 68 76 Q 80 67 92 76", "M 108 76 Q 120 67 132 76"),
        BrowShape::Level => ("M 68 78 Q 80 75 92 78", "M 108 78 Q 120 75 132 78"),
        BrowShape::Tilted => ("M 68 80 Q 80 73 92 76", "M 108 74 Q 120 71 132 78"),
    };
    vec![
        Shape::path(left).outline(color, 3.0),
        Shape::path(right).outline(color, 3.0),
    ]
}

fn eyes(shape: EyeShape, color: &str) -> Vec<Shape> {
    match shape {
        EyeShape::Squint | EyeShape::Lidded => {
            let mut shapes = vec![
                Shape::path("M 72 92 Q 80 88 88 92").outline(color, 2.5),
                Shape::path("M 112 92 Q 120 88 128 92").outline(color, 2.5),
            ];
            if shape == EyeShape::Lidded {
                for (x1, x2) in [(72.0, 88.0), (112.0, 128.0)] {
                    shapes.push(
                        Shape::line(x1, 90.0, x2, 90.0)
                            .attr("stroke", color)
                            .attr("stroke-width", 2)
                            .attr("stroke-linecap", "round"),
                    );
                }
            }
            shapes
        }
        EyeShape::Open | EyeShape::Wide => {
            let height = if shape == EyeShape::Wide { 8.0 } else { 6.5 };
            [80.0_f32, 120.0]
                .into_iter()
                .flat_map(|cx| {
                    [
                        Shape::ellipse(cx, 92.0, 9.0, height).fill("white"),
                        Shape::circle(cx, 92.0, 4.5).fill(color),
                        Shape::circle(cx, 92.0, 2.5).fill("#111"),
                        Shape::circle(cx + 2.0, 89.0, 1.8).fill("white").opacity(0.9),
                        Shape::circle(cx - 3.0, 94.0, 0.8).fill("white").opacity(0.5),
                    ]
                })
                .collect()
        }
    }
}

fn mouth(shape: MouthShape, color: &str) -> Vec<Shape> {
    match shape {
        MouthShape::Smile => vec![
            Shape::path("M 82 120 Q 100 138 118 120")
                .outline(color, 2.5)
                .opacity(0.6),
        ],
        MouthShape::OpenGrin => vec![
            Shape::path("M 80 118 Q 100 142 120 118")
                .outline(color, 2.5)
                .opacity(0.6),
            Shape::path("M 85 120 Q 100 136 115 120")
                .fill(color)
                .opacity(0.15),
        ],
        MouthShape::Flat => vec![
            Shape::path("M 88 122 Q 100 126 112 122")
                .outline(color, 2.0)
                .opacity(0.5),
        ],
        MouthShape::Sideways => vec![
            Shape::path("M 90 124 Q 96 120 105 124")
                .outline(color, 2.0)
                .opacity(0.45),
        ],
        MouthShape::Gentle => vec![
            Shape::path("M 86 122 Q 100 130 114 122")
                .outline(color, 2.0)
                .opacity(0.4),
        ],
    }
}

/// Petal offsets around the flower center, at 60 degree steps with radius 7.
const PETAL_OFFSETS: [(f32, f32); 6] = [
    (7.0, 0.0),
    (3.5, 6.06),
    (-3.5, 6.06),
    (-7.0, 0.0),
    (-3.5, -6.06),
    (3.5, -6.06),
];

fn accessory_shapes(accessory: &str) -> Vec<Shape> {
    match accessory {
        "glasses" => vec![
            Shape::circle(80.0, 92.0, 14.0)
                .attr("fill", "none")
                .attr("stroke", "#333")
                .attr("stroke-width", 2),
            Shape::circle(120.0, 92.0, 14.0)
                .attr("fill", "none")
                .attr("stroke", "#333")
                .attr("stroke-width", 2),
            Shape::path("M 94 92 Q 100 88 106 92").outline("#333", 2.0),
            Shape::line(66.0, 92.0, 45.0, 88.0)
                .attr("stroke", "#333")
                .attr("stroke-width", 2),
            Shape::line(134.0, 92.0, 155.0, 88.0)
                .attr("stroke", "#333")
                .attr("stroke-width", 2),
        ],
        "sunglasses" => vec![
            Shape::rect(64.0, 82.0, 32.0, 20.0, 4.0)
                .fill("#1a1a2e")
                .attr("stroke", "#333")
                .attr("stroke-width", 1.5),
            Shape::rect(104.0, 82.0, 32.0, 20.0, 4.0)
                .fill("#1a1a2e")
                .attr("stroke", "#333")
                .attr("stroke-width", 1.5),
            Shape::path("M 96 90 Q 100 87 104 90").outline("#333", 2.0),
            Shape::rect(68.0, 84.0, 10.0, 4.0, 2.0).fill("white").opacity(0.15),
            Shape::rect(108.0, 84.0, 10.0, 4.0, 2.0).fill("white").opacity(0.15),
        ],
        "hat" => vec![
            Shape::rect(55.0, 32.0, 90.0, 18.0, 3.0).fill("#2D3748"),
            Shape::rect(65.0, 12.0, 70.0, 25.0, 10.0).fill("#2D3748"),
            Shape::rect(65.0, 12.0, 70.0, 8.0, 4.0).fill("white").opacity(0.05),
        ],
        "headband" => vec![Shape::path("M 48 72 Q 100 58 152 72").outline("#F43F5E", 5.0)],
        "earrings" => [42.0, 158.0]
            .into_iter()
            .flat_map(|cx| {
                [
                    Shape::circle(cx, 115.0, 5.0).fill("#FFD700"),
                    Shape::circle(cx, 115.0, 3.0).fill("#FFF").opacity(0.3),
                ]
            })
            .collect(),
        "necklace" => vec![
            Shape::path("M 72 170 Q 100 195 128 170").attr("stroke", "#FFD700").attr("stroke-width", 2).attr("fill", "none"),
            Shape::circle(100.0, 190.0, 5.0).fill("#FFD700"),
            Shape::circle(100.0, 190.0, 2.5).fill("#F43F5E"),
        ],
        "flower" => {
            let mut shapes: Vec<Shape> = PETAL_OFFSETS
                .iter()
                .enumerate()
                .map(|(i, (dx, dy))| {
                    let petal = if i % 2 == 0 { "#F472B6" } else { "#FB7185" };
                    Shape::circle(135.0 + dx, 62.0 + dy, 4.0)
                        .fill(petal)
                        .opacity(0.9)
                })
                .collect();
            shapes.push(Shape::circle(135.0, 62.0, 3.0).fill("#FBBF24"));
            shapes
        }
        "scarf" => vec![
            Shape::path("M 60 165 Q 100 180 140 165 L 140 185 Q 100 195 60 185 Z")
                .fill("#E11D48")
                .opacity(0.8),
            Shape::path("M 65 170 Q 100 182 135 170")
                .attr("stroke", "white")
                .attr("stroke-width", 1)
                .attr("fill", "none")
                .opacity(0.15),
        ],
        "crown" => vec![
            Shape::path("M 65 42 L 72 22 L 85 35 L 100 15 L 115 35 L 128 22 L 135 42 Z").fill("#FFD700"),
            Shape::path("M 65 42 L 135 42 L 133 50 L 67 50 Z").fill("#FFD700"),
            Shape::circle(100.0, 32.0, 3.0).fill("#F43F5E"),
            Shape::circle(80.0, 37.0, 2.0).fill("#06B6D4"),
            Shape::circle(120.0, 37.0, 2.0).fill("#06B6D4"),
        ],
        // "none" draws nothing
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::config::AvatarField;
    use strum::IntoEnumIterator;

    fn config_with(field: AvatarField, value: &str) -> AvatarConfig {
        let mut config = AvatarConfig::default();
        config.set(field, value).unwrap();
        config
    }

    #[test]
    fn test_default_layer_order() {
        let image = render(&AvatarConfig::default());
        assert_eq!(
            image.kinds(),
            vec![
                LayerKind::Background,
                LayerKind::Body,
                LayerKind::OutfitPattern,
                LayerKind::Neck,
                LayerKind::HairBack,
                LayerKind::Head,
                LayerKind::Ears,
                LayerKind::HairFront,
                LayerKind::Eyebrows,
                LayerKind::Eyes,
                LayerKind::Nose,
                LayerKind::Mouth,
                LayerKind::Blush,
                LayerKind::Accessory,
            ]
        );
    }

    #[test]
    fn test_layers_are_always_in_paint_order() {
        for style in HAIR_STYLES {
            for expression in EXPRESSIONS {
                let config = AvatarConfig {
                    hair_style: style.id.into(),
                    expression: expression.id.into(),
                    ..AvatarConfig::default()
                };
                let kinds = render(&config).kinds();
                let mut sorted = kinds.clone();
                sorted.sort();
                assert_eq!(kinds, sorted);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = config_with(AvatarField::Accessory, "flower");
        assert_eq!(render(&config), render(&config));
        assert_eq!(render(&config).to_svg(), render(&config).to_svg());
    }

    #[test]
    fn test_bald_with_hat_has_no_hair_but_keeps_hat() {
        for hair in HAIR_COLORS.iter().map(|c| c.hex).chain(["not-a-color"]) {
            let config = AvatarConfig {
                hair_style: "bald".into(),
                accessory: "hat".into(),
                hair_color: hair.into(),
                ..AvatarConfig::default()
            };
            let image = render(&config);
            assert!(!image.has_layer(LayerKind::HairBack));
            assert!(!image.has_layer(LayerKind::HairFront));

            let hat = image.layer(LayerKind::Accessory).unwrap();
            assert_eq!(hat.variant, "hat");
            assert!(!hat.shapes.is_empty());
        }
    }

    #[test]
    fn test_unknown_ids_render_default_variant() {
        let config = AvatarConfig {
            hair_style: "mullet".into(),
            outfit: "spacesuit".into(),
            accessory: "monocle".into(),
            background: "void".into(),
            expression: "grumpy".into(),
            skin_tone: "#000001".into(),
            ..AvatarConfig::default()
        };
        let image = render(&config);

        assert_eq!(image.layer(LayerKind::HairBack).unwrap().variant, "short");
        assert_eq!(image.layer(LayerKind::HairFront).unwrap().variant, "short");
        assert_eq!(image.layer(LayerKind::Body).unwrap().variant, "casual");
        assert_eq!(image.layer(LayerKind::Accessory).unwrap().variant, "none");
        assert_eq!(image.layer(LayerKind::Background).unwrap().variant, "sunset");
        assert_eq!(image.layer(LayerKind::Head).unwrap().variant, "fair");
        // unknown expression resolves to happy, which blushes
        assert!(image.has_layer(LayerKind::Blush));
        assert_eq!(image.skin_tone, "#FDDBB4");
    }

    #[test]
    fn test_blush_only_for_happy_warm_laughing() {
        for expression in EXPRESSIONS {
            let image = render(&config_with(AvatarField::Expression, expression.id));
            let expected = matches!(expression.id, "happy" | "warm" | "laughing");
            assert_eq!(image.has_layer(LayerKind::Blush), expected, "{}", expression.id);
        }
    }

    #[test]
    fn test_expression_drives_brows_eyes_and_mouth_together() {
        let image = render(&config_with(AvatarField::Expression, "laughing"));
        assert_eq!(image.layer(LayerKind::Eyes).unwrap().variant, "squint");
        assert_eq!(image.layer(LayerKind::Mouth).unwrap().variant, "open-grin");
        assert_eq!(image.layer(LayerKind::Eyebrows).unwrap().variant, "raised");

        let style = ExpressionStyle::for_expression("cool");
        assert_eq!(style.eyes, EyeShape::Lidded);
        assert_eq!(style.mouth, MouthShape::Flat);
        assert!(!style.blush);
    }

    #[test]
    fn test_secondary_shades_come_from_base_colors() {
        let image = render(&AvatarConfig::default());
        assert_eq!(image.skin_highlight, "#f4b784");

        let neck = image.layer(LayerKind::Neck).unwrap();
        assert_eq!(neck.shapes[1].get("fill"), Some("#c28552"));

        let long = render(&config_with(AvatarField::HairStyle, "long"));
        let back = long.layer(LayerKind::HairBack).unwrap();
        assert_eq!(back.shapes[3].get("fill"), Some("#180400"));
    }

    #[test]
    fn test_none_accessory_is_present_but_empty() {
        let image = render(&AvatarConfig::default());
        let accessory = image.layer(LayerKind::Accessory).unwrap();
        assert_eq!(accessory.variant, "none");
        assert!(accessory.shapes.is_empty());
    }

    #[test]
    fn test_every_accessory_except_none_draws_something() {
        for accessory in ACCESSORIES.iter().filter(|a| a.id != "none") {
            let image = render(&config_with(AvatarField::Accessory, accessory.id));
            assert!(
                !image.layer(LayerKind::Accessory).unwrap().shapes.is_empty(),
                "{}",
                accessory.id
            );
        }
    }

    #[test]
    fn test_svg_document_shape() {
        let svg = render(&config_with(AvatarField::Background, "aurora")).to_svg();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 200 250\""));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("<stop offset=\"50%\" stop-color=\"#8B5CF6\"/>"));
        for kind in LayerKind::iter().filter(|k| *k != LayerKind::Blush) {
            assert!(svg.contains(&format!("data-layer=\"{}\"", kind)), "{}", kind);
        }
    }

    #[test]
    fn test_svg_numbers_are_compact() {
        let svg = render(&AvatarConfig::default()).to_svg();
        assert!(svg.contains("<ellipse cx=\"100\" cy=\"95\" rx=\"58\" ry=\"68\""));
        assert!(svg.contains("ry=\"8\""));
    }
}
