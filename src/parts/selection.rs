//! A builder's choice of one part id per category

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};

use super::catalog::{Catalog, Catalogs, PALETTE};
use super::types::Category;

/// Longest name a creature may carry, in characters
pub const MAX_NAME_LEN: usize = 255;

/// One part id per category, plus the cosmetic colour and a free-text name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    pub body: String,
    pub eyes: String,
    pub mouth: String,
    pub arms: String,
    pub legs: String,
    pub accessory: String,
    pub color: String,
}

impl Default for Selection {
    /// Every category set to its catalog default, with an empty name
    fn default() -> Self {
        Self::defaults_from(Catalogs::standard())
    }
}

fn first_id<R>(catalog: &Catalog<R>) -> String {
    catalog.default_entry().map(|e| e.id.clone()).unwrap_or_default()
}

fn random_id<R, G: Rng + ?Sized>(catalog: &Catalog<R>, rng: &mut G) -> String {
    catalog
        .entries()
        .choose(rng)
        .map(|e| e.id.clone())
        .unwrap_or_default()
}

impl Selection {
    pub fn defaults_from(catalogs: &Catalogs) -> Self {
        Self {
            name: String::new(),
            body: first_id(&catalogs.body),
            eyes: first_id(&catalogs.eyes),
            mouth: first_id(&catalogs.mouth),
            arms: first_id(&catalogs.arms),
            legs: first_id(&catalogs.legs),
            accessory: first_id(&catalogs.accessory),
            color: PALETTE[0].id.to_string(),
        }
    }

    /// Pick every category (and the colour) uniformly at random; keeps the name
    pub fn randomize<G: Rng + ?Sized>(&mut self, catalogs: &Catalogs, rng: &mut G) {
        self.body = random_id(&catalogs.body, rng);
        self.eyes = random_id(&catalogs.eyes, rng);
        self.mouth = random_id(&catalogs.mouth, rng);
        self.arms = random_id(&catalogs.arms, rng);
        self.legs = random_id(&catalogs.legs, rng);
        self.accessory = random_id(&catalogs.accessory, rng);
        if let Some(paint) = PALETTE.choose(rng) {
            self.color = paint.id.to_string();
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the id for one category
    pub fn set(&mut self, category: Category, id: impl Into<String>) {
        let id = id.into();
        match category {
            Category::Body => self.body = id,
            Category::Eyes => self.eyes = id,
            Category::Mouth => self.mouth = id,
            Category::Arms => self.arms = id,
            Category::Legs => self.legs = id,
            Category::Accessory => self.accessory = id,
        }
    }

    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Body => &self.body,
            Category::Eyes => &self.eyes,
            Category::Mouth => &self.mouth,
            Category::Arms => &self.arms,
            Category::Legs => &self.legs,
            Category::Accessory => &self.accessory,
        }
    }

    /// Name trimmed and cut to `MAX_NAME_LEN` characters
    pub fn bounded_name(&self) -> String {
        self.name.trim().chars().take(MAX_NAME_LEN).collect()
    }

    /// The same selection with every unknown id replaced by its category default
    pub fn resolved(&self, catalogs: &Catalogs) -> Self {
        Self {
            name: self.name.clone(),
            body: catalogs.body.resolved_id(&self.body),
            eyes: catalogs.eyes.resolved_id(&self.eyes),
            mouth: catalogs.mouth.resolved_id(&self.mouth),
            arms: catalogs.arms.resolved_id(&self.arms),
            legs: catalogs.legs.resolved_id(&self.legs),
            accessory: catalogs.accessory.resolved_id(&self.accessory),
            color: super::catalog::resolve_paint(&self.color).id.to_string(),
        }
    }

    /// Parse a `key=value` list such as `name=Zorp,body=star_5,eyes=eye_angry`.
    ///
    /// Keys are `name`, `color` and the category names. Unlisted categories
    /// keep their defaults; unknown part ids are kept and resolve later.
    pub fn from_spec(input: &str) -> Result<Self> {
        let mut selection = Self::default();
        for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, value) = item
                .split_once('=')
                .ok_or_else(|| ForgeError::spec(input, format!("expected key=value, got '{}'", item)))?;
            let (key, value) = (key.trim(), value.trim());
            match key {
                "name" => selection.name = value.to_string(),
                "color" | "colour" => selection.color = value.to_string(),
                _ => {
                    let category = Category::from_key(key)
                        .ok_or_else(|| ForgeError::spec(input, format!("unknown key '{}'", key)))?;
                    selection.set(category, value);
                }
            }
        }
        Ok(selection)
    }
}
