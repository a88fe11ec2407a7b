//! Saved vehicle configurations.

use serde::Serialize;

use super::catalog::{Model, Paint, SelfDriving, Selection, Wheels};
use super::money::Price;

/// The four selections made in the wizard.
///
/// A `Build` is the only way the session produces a [`Configuration`], so a
/// saved price always equals the base price plus the chosen add-ons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Build {
    pub model: Model,
    pub paint: Paint,
    pub wheels: Wheels,
    pub self_driving: SelfDriving,
}

impl Build {
    /// Start a build with every add-on at its no-cost default.
    #[must_use]
    pub fn new(model: Model) -> Self {
        Self {
            model,
            paint: Paint::default(),
            wheels: Wheels::default(),
            self_driving: SelfDriving::default(),
        }
    }

    #[must_use]
    pub const fn with_paint(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }

    #[must_use]
    pub const fn with_wheels(mut self, wheels: Wheels) -> Self {
        self.wheels = wheels;
        self
    }

    #[must_use]
    pub const fn with_self_driving(mut self, self_driving: SelfDriving) -> Self {
        self.self_driving = self_driving;
        self
    }

    /// Human-readable description, model label first then each non-default
    /// add-on in step order.
    #[must_use]
    pub fn description(&self) -> String {
        [
            self.model.fragment(),
            self.paint.fragment(),
            self.wheels.fragment(),
            self.self_driving.fragment(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Base price plus every selected add-on.
    #[must_use]
    pub fn price(&self) -> Price {
        self.model.price() + self.paint.price() + self.wheels.price() + self.self_driving.price()
    }
}

/// One saved, fully priced vehicle build.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    description: String,
    price: Price,
}

impl Configuration {
    #[must_use]
    pub fn new(description: impl Into<String>, price: Price) -> Self {
        Self {
            description: description.into(),
            price,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }
}

impl From<Build> for Configuration {
    fn from(build: Build) -> Self {
        Self::new(build.description(), build.price())
    }
}
