//! Formatting utilities for terminal output
//!
//! The gallows figure is drawn in six stages, one body part per wrong guess.

use crate::core::MAX_WRONG_GUESSES;

/// A body part of the hanged figure, in drawing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigurePart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl FigurePart {
    /// Every part, in the order they are drawn
    pub const ALL: [Self; MAX_WRONG_GUESSES] = [
        Self::Head,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Parts drawn once `stage` wrong guesses have been made
    #[must_use]
    pub fn revealed(stage: usize) -> &'static [Self] {
        &Self::ALL[..stage.min(MAX_WRONG_GUESSES)]
    }

    /// The part added by the wrong guess that reached `stage`
    ///
    /// Stage 0 has no part; stages past the last part have none either.
    #[must_use]
    pub fn for_stage(stage: usize) -> Option<Self> {
        stage.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Lowercase display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Body => "body",
            Self::LeftArm => "left arm",
            Self::RightArm => "right arm",
            Self::LeftLeg => "left leg",
            Self::RightLeg => "right leg",
        }
    }

    /// Glyph used when drawing the part
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Head => 'O',
            Self::Body => '|',
            Self::LeftArm | Self::LeftLeg => '/',
            Self::RightArm | Self::RightLeg => '\\',
        }
    }
}

/// Draw the gallows with the figure at `stage`
///
/// The base (top beam, noose, main beam, ground) is always drawn.
#[must_use]
pub fn gallows_lines(stage: usize) -> Vec<String> {
    let parts = FigurePart::revealed(stage);
    let part = |p: FigurePart| {
        if parts.contains(&p) {
            p.glyph()
        } else {
            ' '
        }
    };

    let lines = [
        "  +-----+".to_string(),
        "  |     |".to_string(),
        format!("  |     {}", part(FigurePart::Head)),
        format!(
            "  |    {}{}{}",
            part(FigurePart::LeftArm),
            part(FigurePart::Body),
            part(FigurePart::RightArm)
        ),
        format!(
            "  |    {} {}",
            part(FigurePart::LeftLeg),
            part(FigurePart::RightLeg)
        ),
        "  |".to_string(),
        "=========".to_string(),
    ];

    lines.iter().map(|line| line.trim_end().to_string()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar of wrong guesses left, one cell per guess
#[must_use]
pub fn lives_bar(remaining: usize) -> String {
    create_progress_bar(remaining, MAX_WRONG_GUESSES, MAX_WRONG_GUESSES)
}
