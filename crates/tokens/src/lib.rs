#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

mod diff;
mod storage;
mod store;
mod tokens;

pub use diff::{diff_structure, DiffKind, StructuralDiff, ValueKind};
pub use storage::DocumentStore;
pub use store::{
    shared, ParityViolation, ThemeMode, TokenError, TokenStore, ValidationReport,
};
pub use tokens::{
    dark_tokens, light_tokens, BackgroundColors, ColorFamily, ColorTokens, Durations,
    FontFamilies, FontSizeScale, FontWeights, LetterSpacings, LineHeights, NeutralScale,
    RadiusScale, ShadowScale, SpacingScale, TextColors, TimingFunctions, TokenSet, Transitions,
    Typography, ZIndexScale, ZIndexValue,
};
