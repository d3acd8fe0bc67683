//! Template rendering with Tera

use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", include_str!("../templates/base.html"))?;
        tera.add_raw_template("index.html", include_str!("../templates/index.html"))?;
        tera.add_raw_template("results.html", include_str!("../templates/results.html"))?;
        tera.add_raw_template("about.html", include_str!("../templates/about.html"))?;
        tera.add_raw_template("stats.html", include_str!("../templates/stats.html"))?;

        Ok(Self { tera })
    }

    /// Render a template with a Tera Context
    pub fn render(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }
}
