//! Core design tokens for the pastel theme modes.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One semantic color role with its tonal variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorFamily {
    /// Base color for the role.
    pub main: String,
    /// Lighter variant used for hover and tinted surfaces.
    pub light: String,
    /// Darker variant used for pressed and emphasized states.
    pub dark: String,
    /// Foreground color rendered atop [`main`](Self::main).
    pub contrast: String,
}

/// Ten-step neutral ramp keyed 50 through 900.
pub type NeutralScale = BTreeMap<u16, String>;

/// Background surface colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackgroundColors {
    /// Application background color.
    pub default: String,
    /// Surface color for panels and cards.
    pub paper: String,
    /// Subtle fill for grouped or inset regions.
    pub subtle: String,
}

/// Text colors by emphasis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextColors {
    /// Primary body text color.
    pub primary: String,
    /// Secondary, de-emphasized text color.
    pub secondary: String,
    /// Disabled control text color.
    pub disabled: String,
}

/// Complete color category for a theme mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorTokens {
    /// Brand primary role.
    pub primary: ColorFamily,
    /// Brand secondary role.
    pub secondary: ColorFamily,
    /// Accent role used for callouts.
    pub accent: ColorFamily,
    /// Success state role.
    pub success: ColorFamily,
    /// Warning state role.
    pub warning: ColorFamily,
    /// Error state role.
    pub error: ColorFamily,
    /// Neutral grayscale ramp.
    pub neutral: NeutralScale,
    /// Background surfaces.
    pub background: BackgroundColors,
    /// Text emphasis colors.
    pub text: TextColors,
}

/// Spacing scale as CSS lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpacingScale {
    /// Extra-small spacing.
    pub xs: String,
    /// Small spacing.
    pub sm: String,
    /// Medium spacing.
    pub md: String,
    /// Large spacing.
    pub lg: String,
    /// Extra-large spacing.
    pub xl: String,
    /// Double-extra-large spacing.
    #[serde(rename = "2xl")]
    pub xl2: String,
    /// Triple-extra-large spacing.
    #[serde(rename = "3xl")]
    pub xl3: String,
}

/// Border radius scale as CSS lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadiusScale {
    /// Square corners.
    pub none: String,
    /// Small rounding.
    pub sm: String,
    /// Medium rounding.
    pub md: String,
    /// Large rounding.
    pub lg: String,
    /// Extra-large rounding.
    pub xl: String,
    /// Fully rounded (pill) corners.
    pub full: String,
}

/// Box-shadow descriptors by elevation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShadowScale {
    /// No shadow.
    pub none: String,
    /// Small elevation.
    pub sm: String,
    /// Medium elevation.
    pub md: String,
    /// Large elevation.
    pub lg: String,
    /// Extra-large elevation.
    pub xl: String,
}

/// Font stacks by classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontFamilies {
    /// Proportional UI stack.
    pub sans: String,
    /// Monospace stack for code.
    pub mono: String,
}

/// Font size scale as CSS lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSizeScale {
    /// Extra-small text.
    pub xs: String,
    /// Small text.
    pub sm: String,
    /// Body text.
    pub md: String,
    /// Large text.
    pub lg: String,
    /// Extra-large text.
    pub xl: String,
    /// Double-extra-large text.
    #[serde(rename = "2xl")]
    pub xl2: String,
    /// Triple-extra-large text.
    #[serde(rename = "3xl")]
    pub xl3: String,
    /// Display text.
    #[serde(rename = "4xl")]
    pub xl4: String,
}

/// Numeric font weights by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontWeights {
    /// Regular weight.
    pub normal: u16,
    /// Medium weight.
    pub medium: u16,
    /// Semibold weight.
    pub semibold: u16,
    /// Bold weight.
    pub bold: u16,
}

/// Unitless line-height ratios by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineHeights {
    /// Solid leading.
    pub none: f64,
    /// Tight leading.
    pub tight: f64,
    /// Snug leading.
    pub snug: f64,
    /// Default leading.
    pub normal: f64,
    /// Relaxed leading.
    pub relaxed: f64,
    /// Loose leading.
    pub loose: f64,
}

/// Letter spacing as CSS lengths (zero spelled `"0"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LetterSpacings {
    /// Tightened tracking.
    pub tight: String,
    /// Default tracking.
    pub normal: String,
    /// Widened tracking.
    pub wide: String,
}

/// Typography category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Typography {
    /// Font stacks.
    pub font_family: FontFamilies,
    /// Size scale.
    pub font_size: FontSizeScale,
    /// Weight scale.
    pub font_weight: FontWeights,
    /// Line-height scale.
    pub line_height: LineHeights,
    /// Tracking scale.
    pub letter_spacing: LetterSpacings,
}

/// Transition durations as CSS time values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Durations {
    /// Quick feedback (hover, focus rings).
    pub fast: String,
    /// Default motion.
    pub normal: String,
    /// Deliberate motion (overlays, large panels).
    pub slow: String,
}

/// Easing-curve descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimingFunctions {
    /// Standard curve.
    pub ease: String,
    /// Linear curve.
    pub linear: String,
    /// Accelerating curve.
    pub ease_in: String,
    /// Decelerating curve.
    pub ease_out: String,
}

/// Transitions category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transitions {
    /// Duration scale.
    pub duration: Durations,
    /// Easing curves.
    pub timing: TimingFunctions,
}

/// A stacking order: an explicit layer index or the `auto` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZIndexValue {
    /// No explicit stacking order.
    Auto,
    /// Explicit stacking order.
    Index(i32),
}

impl ZIndexValue {
    /// Returns the explicit index, or `None` for [`ZIndexValue::Auto`].
    #[must_use]
    pub const fn as_index(self) -> Option<i32> {
        match self {
            Self::Index(value) => Some(value),
            Self::Auto => None,
        }
    }
}

impl Serialize for ZIndexValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Index(value) => serializer.serialize_i32(*value),
        }
    }
}

impl<'de> Deserialize<'de> for ZIndexValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ZIndexVisitor;

        impl Visitor<'_> for ZIndexVisitor {
            type Value = ZIndexValue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an integer stacking order or the keyword \"auto\"")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i32::try_from(value)
                    .map(ZIndexValue::Index)
                    .map_err(|_| E::custom("stacking order out of range"))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i32::try_from(value)
                    .map(ZIndexValue::Index)
                    .map_err(|_| E::custom("stacking order out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value == "auto" {
                    Ok(ZIndexValue::Auto)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(ZIndexVisitor)
    }
}

/// Named stacking layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZIndexScale {
    /// Behind the base layer.
    pub hide: ZIndexValue,
    /// No explicit order.
    pub auto: ZIndexValue,
    /// Base document layer.
    pub base: ZIndexValue,
    /// Docked chrome such as toolbars.
    pub docked: ZIndexValue,
    /// Dropdown menus.
    pub dropdown: ZIndexValue,
    /// Sticky headers.
    pub sticky: ZIndexValue,
    /// Announcement banners.
    pub banner: ZIndexValue,
    /// Screen-dimming overlays.
    pub overlay: ZIndexValue,
    /// Modal dialogs.
    pub modal: ZIndexValue,
    /// Popovers anchored to controls.
    pub popover: ZIndexValue,
    /// Tooltips, above everything else.
    pub tooltip: ZIndexValue,
}

/// Bundles the complete token set for one theme mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TokenSet {
    /// Color roles, neutrals, backgrounds, and text colors.
    pub colors: ColorTokens,
    /// Spacing scale.
    pub spacing: SpacingScale,
    /// Border radius scale.
    pub radii: RadiusScale,
    /// Shadow scale.
    pub shadows: ShadowScale,
    /// Typography scales.
    pub typography: Typography,
    /// Motion durations and easing curves.
    pub transitions: Transitions,
    /// Stacking layers.
    pub z_index: ZIndexScale,
}

// The non-color scales are mode independent.

fn base_spacing() -> SpacingScale {
    SpacingScale {
        xs: "0.25rem".into(), // 4px
        sm: "0.5rem".into(),  // 8px
        md: "1rem".into(),    // 16px
        lg: "1.5rem".into(),  // 24px
        xl: "2rem".into(),    // 32px
        xl2: "2.5rem".into(), // 40px
        xl3: "3rem".into(),   // 48px
    }
}

fn base_radii() -> RadiusScale {
    RadiusScale {
        none: "0".into(),
        sm: "0.25rem".into(),
        md: "0.5rem".into(),
        lg: "0.75rem".into(),
        xl: "1rem".into(),
        full: "9999px".into(),
    }
}

fn base_shadows() -> ShadowScale {
    ShadowScale {
        none: "none".into(),
        sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)".into(),
        md: "0 4px 6px -1px rgba(0, 0, 0, 0.1)".into(),
        lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1)".into(),
        xl: "0 20px 25px -5px rgba(0, 0, 0, 0.1)".into(),
    }
}

fn base_typography() -> Typography {
    Typography {
        font_family: FontFamilies {
            sans: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
                .into(),
            mono: "'JetBrains Mono', 'SF Mono', 'Fira Code', monospace".into(),
        },
        font_size: FontSizeScale {
            xs: "0.75rem".into(),    // 12px
            sm: "0.875rem".into(),   // 14px
            md: "1rem".into(),       // 16px
            lg: "1.125rem".into(),   // 18px
            xl: "1.25rem".into(),    // 20px
            xl2: "1.5rem".into(),    // 24px
            xl3: "1.875rem".into(),  // 30px
            xl4: "2.25rem".into(),   // 36px
        },
        font_weight: FontWeights {
            normal: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        },
        line_height: LineHeights {
            none: 1.0,
            tight: 1.25,
            snug: 1.375,
            normal: 1.5,
            relaxed: 1.625,
            loose: 2.0,
        },
        letter_spacing: LetterSpacings {
            tight: "-0.025em".into(),
            normal: "0".into(),
            wide: "0.025em".into(),
        },
    }
}

fn base_transitions() -> Transitions {
    Transitions {
        duration: Durations {
            fast: "150ms".into(),
            normal: "250ms".into(),
            slow: "350ms".into(),
        },
        timing: TimingFunctions {
            ease: "cubic-bezier(0.4, 0, 0.2, 1)".into(),
            linear: "linear".into(),
            ease_in: "cubic-bezier(0.4, 0, 1, 1)".into(),
            ease_out: "cubic-bezier(0, 0, 0.2, 1)".into(),
        },
    }
}

fn base_z_index() -> ZIndexScale {
    ZIndexScale {
        hide: ZIndexValue::Index(-1),
        auto: ZIndexValue::Auto,
        base: ZIndexValue::Index(0),
        docked: ZIndexValue::Index(10),
        dropdown: ZIndexValue::Index(1000),
        sticky: ZIndexValue::Index(1100),
        banner: ZIndexValue::Index(1200),
        overlay: ZIndexValue::Index(1300),
        modal: ZIndexValue::Index(1400),
        popover: ZIndexValue::Index(1500),
        tooltip: ZIndexValue::Index(1600),
    }
}

fn neutral_scale(steps: [&str; 10]) -> NeutralScale {
    [50, 100, 200, 300, 400, 500, 600, 700, 800, 900]
        .into_iter()
        .zip(steps)
        .map(|(step, color)| (step, color.to_owned()))
        .collect()
}

/// Token set for the light mode.
#[must_use]
pub fn light_tokens() -> TokenSet {
    TokenSet {
        colors: ColorTokens {
            primary: ColorFamily {
                main: "#A8D8EA".into(),
                light: "#C5E4F1".into(),
                dark: "#8BBED3".into(),
                contrast: "#2C3E50".into(),
            },
            secondary: ColorFamily {
                main: "#FAE3D9".into(),
                light: "#FFF0EA".into(),
                dark: "#E3CAC0".into(),
                contrast: "#2C3E50".into(),
            },
            accent: ColorFamily {
                main: "#FFBBCC".into(),
                light: "#FFD4E0".into(),
                dark: "#E6A2B8".into(),
                contrast: "#2C3E50".into(),
            },
            success: ColorFamily {
                main: "#C3E6CB".into(),
                light: "#D6EFD9".into(),
                dark: "#A9CEB2".into(),
                contrast: "#2C3E50".into(),
            },
            warning: ColorFamily {
                main: "#FFE5D9".into(),
                light: "#FFF0EA".into(),
                dark: "#E6CCB8".into(),
                contrast: "#2C3E50".into(),
            },
            error: ColorFamily {
                main: "#FFB7B2".into(),
                light: "#FFCCC8".into(),
                dark: "#E69E99".into(),
                contrast: "#FFFFFF".into(),
            },
            neutral: neutral_scale([
                "#F8F9FA", "#F1F3F5", "#E9ECEF", "#DEE2E6", "#CED4DA", "#ADB5BD", "#6C757D",
                "#495057", "#343A40", "#212529",
            ]),
            background: BackgroundColors {
                default: "#FFFFFF".into(),
                paper: "#F8F9FA".into(),
                subtle: "#F1F3F5".into(),
            },
            text: TextColors {
                primary: "#2C3E50".into(),
                secondary: "#6C757D".into(),
                disabled: "#ADB5BD".into(),
            },
        },
        spacing: base_spacing(),
        radii: base_radii(),
        shadows: base_shadows(),
        typography: base_typography(),
        transitions: base_transitions(),
        z_index: base_z_index(),
    }
}

/// Token set for the dark mode.
#[must_use]
pub fn dark_tokens() -> TokenSet {
    TokenSet {
        colors: ColorTokens {
            primary: ColorFamily {
                main: "#466D81".into(),
                light: "#587D91".into(),
                dark: "#385A6B".into(),
                contrast: "#FFFFFF".into(),
            },
            secondary: ColorFamily {
                main: "#8B6F6A".into(),
                light: "#9C847F".into(),
                dark: "#725A55".into(),
                contrast: "#FFFFFF".into(),
            },
            accent: ColorFamily {
                main: "#8B616D".into(),
                light: "#9C7683".into(),
                dark: "#724F5A".into(),
                contrast: "#FFFFFF".into(),
            },
            success: ColorFamily {
                main: "#5A7D62".into(),
                light: "#6E8F75".into(),
                dark: "#496650".into(),
                contrast: "#FFFFFF".into(),
            },
            warning: ColorFamily {
                main: "#8B7355".into(),
                light: "#9C876A".into(),
                dark: "#725E44".into(),
                contrast: "#FFFFFF".into(),
            },
            error: ColorFamily {
                main: "#8B5D57".into(),
                light: "#9C726C".into(),
                dark: "#724B45".into(),
                contrast: "#FFFFFF".into(),
            },
            neutral: neutral_scale([
                "#2D2F34", "#3E4047", "#4A4D55", "#5C5F6A", "#737780", "#8C929D", "#A5ABB6",
                "#C0C5CF", "#DCE0E7", "#F3F5F7",
            ]),
            background: BackgroundColors {
                default: "#1A1B1E".into(),
                paper: "#2D2F34".into(),
                subtle: "#3E4047".into(),
            },
            text: TextColors {
                primary: "#E9ECEF".into(),
                secondary: "#ADB5BD".into(),
                disabled: "#6C757D".into(),
            },
        },
        spacing: base_spacing(),
        radii: base_radii(),
        shadows: base_shadows(),
        typography: base_typography(),
        transitions: base_transitions(),
        z_index: base_z_index(),
    }
}
