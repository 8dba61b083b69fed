use bitflags::bitflags;

bitflags! {
    /// How each triangle is rasterized. Both bits may be set: fill, then outline.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderModes: u32 {
        /// Filled triangles in the fill color
        const SOLID = 1 << 0;
        /// Triangle edges in the line color
        const WIREFRAME = 1 << 1;
    }
}

impl Default for RenderModes {
    fn default() -> Self {
        RenderModes::SOLID
    }
}

/// Where the rasterizer takes its fill and line colors from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSource {
    /// The device's configured fill/line colors
    #[default]
    Constant,
    /// The active shader's fragment stage, evaluated once per draw call.
    /// Shaders without a fragment stage make `draw` fail with `NotImplemented`.
    FragmentStage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_are_independent_bits() {
        let both = RenderModes::SOLID | RenderModes::WIREFRAME;
        assert!(both.contains(RenderModes::SOLID));
        assert!(both.contains(RenderModes::WIREFRAME));
        assert!(!RenderModes::SOLID.contains(RenderModes::WIREFRAME));
        assert_eq!(both.bits(), 0b11);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(RenderModes::default(), RenderModes::SOLID);
        assert_eq!(ColorSource::default(), ColorSource::Constant);
    }
}
