//! Fixed price table for the configurator.
//!
//! Each wizard step is a [`Selection`]: a two-way choice that knows its
//! heading, its option lines, how a numeric answer maps onto a variant, and
//! what it contributes to the description and the price.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::money::Price;

/// Base price of the Model 3 Long Range.
pub const MODEL_3_LONG_RANGE: Price = dec!(47740);
/// Base price of the Model Y Long Range.
pub const MODEL_Y_LONG_RANGE: Price = dec!(50490);
/// Surcharge for Ultra Red paint.
pub const ULTRA_RED: Price = dec!(2000);
/// Surcharge for 19" Nova wheels.
pub const NOVA_WHEELS: Price = dec!(1500);
/// Surcharge for Full Self-Driving capability.
pub const FULL_SELF_DRIVING: Price = dec!(8000);

/// A single wizard step.
pub trait Selection: Copy + Sized {
    /// Heading shown above the options.
    const TITLE: &'static str;

    /// Option lines for choice 1 and choice 2.
    const OPTIONS: [&'static str; 2];

    /// Map the user's numeric answer onto a variant.
    ///
    /// `None` means the input carried no number at all.
    fn from_choice(choice: Option<u32>) -> Self;

    /// Text appended to the description, if any.
    fn fragment(self) -> Option<&'static str>;

    /// Price contributed by this selection.
    fn price(self) -> Price;
}

/// Vehicle model. Always contributes its label and base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Model3LongRange,
    ModelYLongRange,
}

impl Model {
    /// Label used as the first segment of every description.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Model3LongRange => "Model 3 - LR",
            Self::ModelYLongRange => "Model Y - LR",
        }
    }
}

impl Selection for Model {
    const TITLE: &'static str = "Step 1: Choose Your Model";
    const OPTIONS: [&'static str; 2] = [
        "Model 3 - Long Range ($47,740)",
        "Model Y - Long Range ($50,490)",
    ];

    // Anything other than 1 is a Model Y; there is no invalid answer here.
    fn from_choice(choice: Option<u32>) -> Self {
        match choice {
            Some(1) => Self::Model3LongRange,
            _ => Self::ModelYLongRange,
        }
    }

    fn fragment(self) -> Option<&'static str> {
        Some(self.label())
    }

    fn price(self) -> Price {
        match self {
            Self::Model3LongRange => MODEL_3_LONG_RANGE,
            Self::ModelYLongRange => MODEL_Y_LONG_RANGE,
        }
    }
}

/// Exterior paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Paint {
    #[default]
    StealthGrey,
    UltraRed,
}

impl Selection for Paint {
    const TITLE: &'static str = "Step 2: Choose Your Paint";
    const OPTIONS: [&'static str; 2] = ["Stealth Grey (Included)", "Ultra Red (+$2,000)"];

    fn from_choice(choice: Option<u32>) -> Self {
        match choice {
            Some(2) => Self::UltraRed,
            _ => Self::StealthGrey,
        }
    }

    fn fragment(self) -> Option<&'static str> {
        match self {
            Self::StealthGrey => None,
            Self::UltraRed => Some(" - Ultra Red"),
        }
    }

    fn price(self) -> Price {
        match self {
            Self::StealthGrey => Decimal::ZERO,
            Self::UltraRed => ULTRA_RED,
        }
    }
}

/// Wheel package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Wheels {
    #[default]
    Photon18,
    Nova19,
}

impl Selection for Wheels {
    const TITLE: &'static str = "Step 3: Choose Your Wheels";
    const OPTIONS: [&'static str; 2] = [
        "18\" Photon Wheels (Included)",
        "19\" Nova Wheels (+$1,500)",
    ];

    fn from_choice(choice: Option<u32>) -> Self {
        match choice {
            Some(2) => Self::Nova19,
            _ => Self::Photon18,
        }
    }

    fn fragment(self) -> Option<&'static str> {
        match self {
            Self::Photon18 => None,
            Self::Nova19 => Some(" - 19\" Nova"),
        }
    }

    fn price(self) -> Price {
        match self {
            Self::Photon18 => Decimal::ZERO,
            Self::Nova19 => NOVA_WHEELS,
        }
    }
}

/// Full Self-Driving capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelfDriving {
    #[default]
    Excluded,
    Included,
}

impl Selection for SelfDriving {
    const TITLE: &'static str = "Step 4: Add Full Self-Driving";
    const OPTIONS: [&'static str; 2] = [
        "No",
        "Yes, add Full Self-Driving Capability (+$8,000)",
    ];

    fn from_choice(choice: Option<u32>) -> Self {
        match choice {
            Some(2) => Self::Included,
            _ => Self::Excluded,
        }
    }

    fn fragment(self) -> Option<&'static str> {
        match self {
            Self::Excluded => None,
            Self::Included => Some(" (FSD)"),
        }
    }

    fn price(self) -> Price {
        match self {
            Self::Excluded => Decimal::ZERO,
            Self::Included => FULL_SELF_DRIVING,
        }
    }
}
