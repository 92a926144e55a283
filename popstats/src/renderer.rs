//! Boundary to the charting library.

use std::io::Write;

use popstats_common::{Error, Result};

use crate::view::chart::ChartConfig;

/// A chart library able to render one series chart into a bound target.
pub trait ChartRenderer {
    /// Attach to the DOM node identified by `target`.
    fn bind(&mut self, target: &str) -> Result<()>;

    /// (Re)generate the chart from `config`, replacing any previous chart.
    fn configure(&mut self, config: ChartConfig) -> Result<()>;

    /// Tear the chart down.
    fn destroy(&mut self);
}

/// Renderer that writes each generated chart as one JSON document.
///
/// The document holds the option object and the `<defs>` markup produced by
/// running the init hook, which is what a browser-side renderer would consume.
pub struct JsonRenderer<W: Write> {
    writer: W,
    pretty: bool,
    target: Option<String>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
            target: None,
        }
    }

    /// Pretty-print the documents.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ChartRenderer for JsonRenderer<W> {
    fn bind(&mut self, target: &str) -> Result<()> {
        self.target = Some(target.to_string());
        Ok(())
    }

    fn configure(&mut self, config: ChartConfig) -> Result<()> {
        let Some(target) = self.target.as_deref() else {
            return Err(Error::Render("chart configured before bind".to_string()));
        };
        if target != config.bindto {
            return Err(Error::Render(format!(
                "chart bound to '{}' but configured for '{}'",
                target, config.bindto
            )));
        }

        let mut defs = String::new();
        config.oninit.apply(&mut defs);

        let document = serde_json::json!({
            "config": config,
            "defs": defs,
        });

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn destroy(&mut self) {
        self.target = None;
        if let Err(e) = self.writer.flush() {
            tracing::warn!(error = %e, "Failed to flush chart output");
        }
    }
}
