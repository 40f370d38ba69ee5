//! Spacing units shared by layout-bearing widgets.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Steps of the abstract spacing scale, smallest to largest.
pub enum AbstractSpace {
    /// 2px step.
    X3s,
    /// 4px step.
    Xxs,
    /// 8px step.
    Xs,
    /// 12px step.
    S,
    /// 16px step.
    M,
    /// 24px step.
    L,
    /// 32px step.
    Xl,
    /// 40px step.
    Xxl,
    /// 48px step.
    X3l,
}

impl AbstractSpace {
    fn px(self) -> u16 {
        match self {
            Self::X3s => 2,
            Self::Xxs => 4,
            Self::Xs => 8,
            Self::S => 12,
            Self::M => 16,
            Self::L => 24,
            Self::Xl => 32,
            Self::Xxl => 40,
            Self::X3l => 48,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A layout gap, either character-relative (tracks font size) or a step of
/// the abstract scale.
pub enum Space {
    /// Character-relative size, rendered in `em`.
    Char(f32),
    /// Abstract scale step, rendered in `px`.
    Abstract(AbstractSpace),
}

impl Space {
    /// The concrete CSS length for this gap.
    pub fn css(self) -> String {
        match self {
            Self::Char(size) => format!("{size}em"),
            Self::Abstract(step) => format!("{}px", step.px()),
        }
    }
}

impl From<f32> for Space {
    fn from(size: f32) -> Self {
        Self::Char(size)
    }
}

impl From<AbstractSpace> for Space {
    fn from(step: AbstractSpace) -> Self {
        Self::Abstract(step)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn char_relative_sizes_render_in_em() {
        assert_eq!(Space::Char(0.25).css(), "0.25em");
        assert_eq!(Space::Char(1.0).css(), "1em");
    }

    #[test]
    fn abstract_steps_render_in_px() {
        assert_eq!(Space::Abstract(AbstractSpace::X3s).css(), "2px");
        assert_eq!(Space::Abstract(AbstractSpace::M).css(), "16px");
        assert_eq!(Space::Abstract(AbstractSpace::X3l).css(), "48px");
    }

    #[test]
    fn conversions_pick_the_matching_unit() {
        assert_eq!(Space::from(0.5), Space::Char(0.5));
        assert_eq!(Space::from(AbstractSpace::Xs), Space::Abstract(AbstractSpace::Xs));
    }
}
