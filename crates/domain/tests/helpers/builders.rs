#![allow(dead_code)]
use extman_domain::{Extension, SeedExtension};
use std::sync::Arc;

pub struct ExtensionBuilder {
    id: i64,
    name: Arc<str>,
    description: Arc<str>,
    logo: Arc<str>,
    is_active: bool,
}

impl ExtensionBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "DevLens".into(),
            description: "Quickly inspect page layouts and visualize element boundaries.".into(),
            logo: "./assets/images/logo-devlens.svg".into(),
            is_active: true,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn build(self) -> Extension {
        Extension::new(self.id, self.name, self.description, self.logo, self.is_active)
    }

    pub fn build_seed(self) -> SeedExtension {
        SeedExtension {
            name: self.name,
            description: self.description,
            logo: self.logo,
            is_active: self.is_active,
        }
    }
}

impl Default for ExtensionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
