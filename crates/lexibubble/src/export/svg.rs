//! SVG snapshot export.
//!
//! Renders one frame as a document with a background, one labeled circle per
//! bubble, and a legend of the four color classes below the bubbles.

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use lexibubble_core::{
    color::Color,
    geometry::{Bounds, Point},
    node::NodeKind,
    word::BubbleColor,
};

use crate::{
    config::StyleConfig,
    export,
    layout::{Entry, NodeSet, PositionFrame},
};

/// Space around the rendered content.
const MARGIN: f32 = 20.0;
/// Height of one legend row.
const LEGEND_ROW: f32 = 20.0;
const LEGEND_SWATCH_RADIUS: f32 = 6.0;

/// Builder for [`Svg`] exporters.
#[derive(Debug)]
pub struct SvgBuilder<'a> {
    file_name: String,
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            style: None,
        }
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves the style into concrete colors.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured color is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        let background = style.background_color().map_err(export::Error::Render)?;
        let center = style
            .fill_color(NodeKind::Center, BubbleColor::Yellow)
            .map_err(export::Error::Render)?;
        let classes = BubbleColor::ALL
            .iter()
            .map(|bubble| style.fill_color(NodeKind::Synonym, *bubble))
            .collect::<Result<Vec<_>, _>>()
            .map_err(export::Error::Render)?;

        Ok(Svg {
            file_name: self.file_name,
            background,
            center,
            classes,
        })
    }
}

/// SVG exporter with resolved colors.
#[derive(Debug)]
pub struct Svg {
    file_name: String,
    background: Option<Color>,
    center: Color,
    /// Fill per bubble class, in [`BubbleColor::ALL`] order.
    classes: Vec<Color>,
}

impl Svg {
    fn class_color(&self, bubble: BubbleColor) -> Color {
        BubbleColor::ALL
            .iter()
            .position(|candidate| *candidate == bubble)
            .and_then(|index| self.classes.get(index).copied())
            .unwrap_or_else(|| Color::for_bubble(bubble))
    }

    fn fill(&self, entry: &Entry) -> Color {
        if entry.node().kind().is_center() {
            self.center
        } else {
            self.class_color(entry.color())
        }
    }

    /// Renders the frame to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the frame has no position for
    /// one of the nodes.
    pub fn render(&self, frame: &PositionFrame, nodes: &NodeSet) -> Result<Document, export::Error> {
        let placed = nodes
            .iter()
            .map(|entry| {
                frame
                    .absolute_position(entry.node().id())
                    .map(|position| (entry, position))
                    .ok_or_else(|| {
                        export::Error::Render(format!(
                            "no position for node `{}` in frame",
                            entry.node().id()
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let content = placed
            .iter()
            .map(|(entry, position)| Bounds::from_circle(*position, entry.node().radius()))
            .fold(Bounds::from_size(frame.canvas()), |acc, bounds| acc.merge(&bounds));

        let legend_origin = Point::new(content.min_x(), content.max_y() + LEGEND_ROW);
        let legend_height = LEGEND_ROW * (BubbleColor::ALL.len() as f32 + 1.0);
        let view = Bounds::from_circle(legend_origin, 0.0)
            .merge(&content)
            .merge(&Bounds::from_circle(
                legend_origin.add_point(Point::new(0.0, legend_height)),
                0.0,
            ))
            .inflate(MARGIN);

        debug!(
            width = view.width(),
            height = view.height(),
            nodes = placed.len();
            "Rendering SVG snapshot"
        );

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("{} {} {} {}", view.min_x(), view.min_y(), view.width(), view.height()),
            )
            .set("width", view.width())
            .set("height", view.height());

        if let Some(background) = &self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", view.min_x())
                    .set("y", view.min_y())
                    .set("width", view.width())
                    .set("height", view.height())
                    .set("fill", background)
                    .set("fill-opacity", background.alpha()),
            );
        }

        let mut bubbles = svg_element::Group::new().set("id", "bubbles");
        // Satellites first so the center is drawn on top.
        for (entry, position) in placed.iter().rev() {
            bubbles = bubbles.add(self.render_bubble(entry, *position));
        }

        doc = doc.add(bubbles).add(self.render_legend(legend_origin));
        Ok(doc)
    }

    /// Renders the frame to an SVG string.
    ///
    /// # Errors
    ///
    /// See [`Svg::render`].
    pub fn render_to_string(&self, frame: &PositionFrame, nodes: &NodeSet) -> Result<String, export::Error> {
        Ok(self.render(frame, nodes)?.to_string())
    }

    fn render_bubble(&self, entry: &Entry, position: Point) -> svg_element::Group {
        let fill = self.fill(entry);
        let kind = entry.node().kind();

        let circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", entry.node().radius())
            .set("fill", &fill)
            .set("fill-opacity", fill.alpha())
            .set("stroke", "white")
            .set("stroke-width", if kind.is_center() { 3 } else { 1 });

        let label_color = match (kind, entry.color()) {
            (NodeKind::Center, _) | (_, BubbleColor::Dark | BubbleColor::Red) => "white",
            _ => "#111827",
        };
        let label = svg_element::Text::new(entry.word())
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", "sans-serif")
            .set("font-size", if kind.is_center() { 16 } else { 11 })
            .set("fill", label_color);

        svg_element::Group::new()
            .set("data-node", entry.node().id().to_string())
            .add(circle)
            .add(label)
    }

    fn render_legend(&self, origin: Point) -> svg_element::Group {
        let mut legend = svg_element::Group::new().set("id", "legend");

        for (row, bubble) in BubbleColor::ALL.iter().enumerate() {
            let y = origin.y() + LEGEND_ROW * row as f32;
            let fill = self.class_color(*bubble);

            legend = legend
                .add(
                    svg_element::Circle::new()
                        .set("cx", origin.x() + LEGEND_SWATCH_RADIUS)
                        .set("cy", y)
                        .set("r", LEGEND_SWATCH_RADIUS)
                        .set("fill", &fill),
                )
                .add(
                    svg_element::Text::new(bubble.caption())
                        .set("x", origin.x() + LEGEND_SWATCH_RADIUS * 3.0)
                        .set("y", y)
                        .set("dominant-baseline", "central")
                        .set("font-family", "sans-serif")
                        .set("font-size", 12),
                );
        }

        legend
    }

    /// Writes an SVG document to the exporter's file.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Io`] if the file cannot be created or written.
    pub fn write_document(&self, doc: &Document) -> Result<(), export::Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let mut f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(f, "{doc}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_frame(&mut self, frame: &PositionFrame, nodes: &NodeSet) -> Result<(), export::Error> {
        let doc = self.render(frame, nodes)?;
        debug!("SVG document rendered");

        self.write_document(&doc)
    }
}
