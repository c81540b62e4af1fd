//! Renderer lookup for badge icons.

use crate::models::{BadgeIcon, IconSymbol};

/// How the renderer draws one symbolic icon.
#[derive(Debug, PartialEq, Eq)]
pub struct IconGlyph {
    pub symbol: IconSymbol,
    pub label: &'static str,
    pub glyph: &'static str,
}

const fn glyph(symbol: IconSymbol, label: &'static str, glyph: &'static str) -> IconGlyph {
    IconGlyph {
        symbol,
        label,
        glyph,
    }
}

static GLYPHS: [IconGlyph; 13] = [
    glyph(IconSymbol::Award, "Award", "🏅"),
    glyph(IconSymbol::Bug, "Bug Hunter", "🐛"),
    glyph(IconSymbol::Code, "Developer", "💻"),
    glyph(IconSymbol::Crown, "Crown", "👑"),
    glyph(IconSymbol::Flame, "Flame", "🔥"),
    glyph(IconSymbol::Gem, "Gem", "💎"),
    glyph(IconSymbol::Heart, "Heart", "❤"),
    glyph(IconSymbol::Rocket, "Rocket", "🚀"),
    glyph(IconSymbol::Shield, "Shield", "🛡"),
    glyph(IconSymbol::Sparkles, "Sparkles", "✨"),
    glyph(IconSymbol::Star, "Star", "⭐"),
    glyph(IconSymbol::Zap, "Zap", "⚡"),
    glyph(IconSymbol::Fallback, "Badge", "🔖"),
];

/// The glyph for `symbol`; unknown symbols already resolved to the fallback entry.
pub fn glyph_for(symbol: IconSymbol) -> &'static IconGlyph {
    GLYPHS
        .iter()
        .find(|g| g.symbol == symbol)
        .unwrap_or(&GLYPHS[GLYPHS.len() - 1])
}

/// What the preview draws for a badge icon.
#[derive(Debug, PartialEq, Eq)]
pub enum IconRender<'a> {
    Image(&'a str),
    Glyph(&'static IconGlyph),
}

pub fn render(icon: &BadgeIcon) -> IconRender<'_> {
    match icon {
        BadgeIcon::Url(url) => IconRender::Image(url),
        BadgeIcon::Symbol { symbol, .. } => IconRender::Glyph(glyph_for(*symbol)),
    }
}
