use palette::Srgb;
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Condition color pairs
// ---------------------------------------------------------------------------

/// Figure colors for one experimental condition: strong edges get the
/// saturated tone, node fills the pale companion tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionColors {
    pub strong_edge: Srgb<u8>,
    pub node_fill: Srgb<u8>,
}

/// Extracellular conditions: blue family over a light-blue node fill.
pub fn pit_exdna() -> ConditionColors {
    ConditionColors {
        strong_edge: Srgb::new(0x1f, 0x4e, 0x79),
        node_fill: Srgb::new(0xa0, 0xd8, 0xf1),
    }
}

pub fn fresh_exdna() -> ConditionColors {
    ConditionColors {
        strong_edge: Srgb::new(0x2e, 0x5b, 0x88),
        node_fill: Srgb::new(0xa0, 0xd8, 0xf1),
    }
}

/// Intracellular conditions: chocolate/orange over a peach node fill.
pub fn pit_idna() -> ConditionColors {
    ConditionColors {
        strong_edge: Srgb::new(0xd2, 0x69, 0x1e),
        node_fill: Srgb::new(0xff, 0xda, 0xb9),
    }
}

pub fn fresh_idna() -> ConditionColors {
    ConditionColors {
        strong_edge: Srgb::new(0xff, 0x8c, 0x00),
        node_fill: Srgb::new(0xff, 0xda, 0xb9),
    }
}

/// Weak edges share one faint gray across all conditions.
pub fn weak_edge() -> RGBColor {
    RGBColor(211, 211, 211)
}

/// Bridge an sRGB color into the plotting backend's color type.
pub fn to_plotters(c: Srgb<u8>) -> RGBColor {
    RGBColor(c.red, c.green, c.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exdna_conditions_share_the_node_fill() {
        assert_eq!(pit_exdna().node_fill, fresh_exdna().node_fill);
        assert_eq!(pit_idna().node_fill, fresh_idna().node_fill);
        assert_ne!(pit_exdna().strong_edge, fresh_exdna().strong_edge);
    }

    #[test]
    fn srgb_bridges_componentwise() {
        let c = to_plotters(Srgb::new(0x1f, 0x4e, 0x79));
        assert_eq!((c.0, c.1, c.2), (0x1f, 0x4e, 0x79));
    }
}
