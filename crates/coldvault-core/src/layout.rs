//! Inline style computation for the box layout primitive.
//!
//! Spacing props are steps on [`SPACE_SCALE`]; steps past the end of the
//! scale are taken as raw pixels, so `mr(20)` means 20px.

use std::fmt::Write;

/// Spacing scale in pixels
pub const SPACE_SCALE: [u32; 9] = [0, 5, 10, 15, 20, 30, 40, 50, 70];

/// Resolve a spacing step to pixels
#[must_use]
pub fn space(step: u32) -> u32 {
    usize::try_from(step)
        .ok()
        .and_then(|index| SPACE_SCALE.get(index).copied())
        .unwrap_or(step)
}

/// Cross-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
}

impl Align {
    const fn css(self) -> &'static str {
        match self {
            Self::Center => "center",
        }
    }
}

/// Main-axis distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Center,
    End,
    SpaceBetween,
}

impl Justify {
    const fn css(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::End => "flex-end",
            Self::SpaceBetween => "space-between",
        }
    }
}

/// Style props of a flex box. Colors are CSS values already resolved
/// against the theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxStyle {
    pub horizontal: bool,
    pub align: Option<Align>,
    pub justify: Option<Justify>,
    pub grow: bool,
    pub no_shrink: bool,
    /// Gap between children
    pub flow: Option<u32>,
    pub p: Option<u32>,
    pub px: Option<u32>,
    pub py: Option<u32>,
    pub mr: Option<u32>,
    pub bg: Option<String>,
    pub color: Option<String>,
    pub relative: bool,
    /// Bottom border color, drawn 1px solid
    pub border_bottom: Option<String>,
}

impl BoxStyle {
    #[must_use]
    pub fn horizontal() -> Self {
        Self {
            horizontal: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    #[must_use]
    pub fn grow(mut self) -> Self {
        self.grow = true;
        self
    }

    #[must_use]
    pub fn flow(mut self, step: u32) -> Self {
        self.flow = Some(step);
        self
    }

    #[must_use]
    pub fn p(mut self, step: u32) -> Self {
        self.p = Some(step);
        self
    }

    #[must_use]
    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Render as an inline `style` attribute value
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::from("display: flex;");
        let direction = if self.horizontal { "row" } else { "column" };
        let _ = write!(css, " flex-direction: {direction};");

        if let Some(align) = self.align {
            let _ = write!(css, " align-items: {};", align.css());
        }
        if let Some(justify) = self.justify {
            let _ = write!(css, " justify-content: {};", justify.css());
        }
        if self.grow {
            css.push_str(" flex-grow: 1;");
        }
        if self.no_shrink {
            css.push_str(" flex-shrink: 0;");
        }
        if let Some(flow) = self.flow {
            let _ = write!(css, " gap: {}px;", space(flow));
        }
        if let Some(p) = self.p {
            let _ = write!(css, " padding: {}px;", space(p));
        }
        if let Some(px) = self.px {
            let px = space(px);
            let _ = write!(css, " padding-left: {px}px; padding-right: {px}px;");
        }
        if let Some(py) = self.py {
            let py = space(py);
            let _ = write!(css, " padding-top: {py}px; padding-bottom: {py}px;");
        }
        if let Some(mr) = self.mr {
            let _ = write!(css, " margin-right: {}px;", space(mr));
        }
        if let Some(bg) = &self.bg {
            let _ = write!(css, " background: {bg};");
        }
        if let Some(color) = &self.color {
            let _ = write!(css, " color: {color};");
        }
        if self.relative {
            css.push_str(" position: relative;");
        }
        if let Some(border) = &self.border_bottom {
            let _ = write!(css, " border-bottom: 1px solid {border};");
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn space_uses_scale_then_raw_pixels() {
        assert_eq!(space(0), 0);
        assert_eq!(space(4), 20);
        assert_eq!(space(8), 70);
        assert_eq!(space(20), 20);
    }

    #[test]
    fn default_box_is_vertical_flex() {
        assert_eq!(
            BoxStyle::default().to_css(),
            "display: flex; flex-direction: column;"
        );
    }

    #[test]
    fn horizontal_row_with_spacing() {
        let css = BoxStyle::horizontal()
            .align(Align::Center)
            .flow(1)
            .p(4)
            .to_css();
        assert_eq!(
            css,
            "display: flex; flex-direction: row; align-items: center; gap: 5px; padding: 20px;"
        );
    }

    #[test]
    fn colors_and_border_are_emitted() {
        let style = BoxStyle {
            px: Some(6),
            color: Some("#b8b8b8".to_string()),
            border_bottom: Some("rgba(0, 0, 0, 0.15)".to_string()),
            relative: true,
            ..BoxStyle::default()
        }
        .bg("#f9f9f9");
        let css = style.to_css();
        assert!(css.contains("padding-left: 40px; padding-right: 40px;"));
        assert!(css.contains("background: #f9f9f9;"));
        assert!(css.contains("color: #b8b8b8;"));
        assert!(css.contains("position: relative;"));
        assert!(css.contains("border-bottom: 1px solid rgba(0, 0, 0, 0.15);"));
    }

    #[test]
    fn justify_and_grow() {
        let css = BoxStyle::default()
            .justify(Justify::SpaceBetween)
            .grow()
            .to_css();
        assert!(css.contains("justify-content: space-between;"));
        assert!(css.contains("flex-grow: 1;"));
    }
}
